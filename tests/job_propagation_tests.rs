use serde_json::{Value, json};
use tenancy_axum_api::tenancy::{
    domain::model::enums::tenancy_domain_error::TenancyDomainError,
    infrastructure::{
        connection::tenant_context::TenantContext,
        queue::job_queue::{JobEnvelope, TENANT_ID_PAYLOAD_KEY},
    },
};

mod support;

use support::fakes::RecordingJobHandler;
use support::fixtures::{tenant, tenant_id};
use support::harness::{JobsHarness, create_jobs_harness};

async fn enter(harness: &JobsHarness, id: i64) -> TenantContext {
    let resolved = harness
        .context
        .context_service
        .resolve_from_id(tenant_id(id))
        .await
        .expect("tenant resolves");
    harness
        .context
        .context_service
        .enter(&resolved)
        .await
        .expect("enter succeeds")
}

#[tokio::test]
async fn enqueue_stamps_the_active_tenant() {
    let harness = create_jobs_harness(vec![tenant(1, "Acme", "acme.example.test", "tenant_acme")]);
    let context = enter(&harness, 1).await;

    harness
        .tenant_queue
        .enqueue(
            JobEnvelope::new("send_report").with_field("report", json!("daily")),
            Some(&context),
        )
        .await
        .expect("enqueue");

    let job = harness.queue.try_receive().expect("job queued");
    assert_eq!(job.job_type, "send_report");
    assert_eq!(job.tenant_stamp(), Some(&Value::from(1)));
    assert_eq!(job.payload.get("report"), Some(&json!("daily")));
}

#[tokio::test]
async fn enqueue_from_owner_context_carries_no_stamp() {
    let harness = create_jobs_harness(vec![tenant(1, "Acme", "acme.example.test", "tenant_acme")]);

    harness
        .tenant_queue
        .enqueue(JobEnvelope::new("prune_logs"), None)
        .await
        .expect("enqueue");

    let job = harness.queue.try_receive().expect("job queued");
    assert_eq!(job.tenant_stamp(), None);
}

#[tokio::test]
async fn enqueue_overrides_a_caller_supplied_stamp() {
    let harness = create_jobs_harness(vec![
        tenant(1, "Acme", "acme.example.test", "tenant_acme"),
        tenant(2, "Beta", "beta.example.test", "tenant_beta"),
    ]);
    let context = enter(&harness, 1).await;

    // The job body tries to smuggle another tenant's id into the payload.
    let forged = JobEnvelope::new("send_report").with_field(TENANT_ID_PAYLOAD_KEY, json!(2));
    harness
        .tenant_queue
        .enqueue(forged, Some(&context))
        .await
        .expect("enqueue");

    let job = harness.queue.try_receive().expect("job queued");
    assert_eq!(job.tenant_stamp(), Some(&Value::from(1)));
}

#[tokio::test]
async fn dispatch_restores_the_stamped_tenant_per_job() {
    let harness = create_jobs_harness(vec![
        tenant(1, "Acme", "acme.example.test", "tenant_acme"),
        tenant(3, "Gamma", "gamma.example.test", "tenant_gamma"),
    ]);
    let handler = RecordingJobHandler::new();

    let acme_context = enter(&harness, 1).await;
    let gamma_context = enter(&harness, 3).await;

    harness
        .tenant_queue
        .enqueue(JobEnvelope::new("first"), Some(&acme_context))
        .await
        .expect("enqueue");
    harness
        .tenant_queue
        .enqueue(JobEnvelope::new("second"), Some(&gamma_context))
        .await
        .expect("enqueue");

    while let Some(job) = harness.queue.try_receive() {
        harness
            .dispatcher
            .dispatch(&job, &handler)
            .await
            .expect("dispatch");
    }

    let calls = handler.calls();
    assert_eq!(
        calls,
        vec![
            ("first".to_string(), Some(1), Some("tenant_acme".to_string())),
            ("second".to_string(), Some(3), Some("tenant_gamma".to_string())),
        ]
    );
}

#[tokio::test]
async fn dispatch_of_an_unstamped_job_runs_without_a_tenant() {
    let harness = create_jobs_harness(vec![tenant(1, "Acme", "acme.example.test", "tenant_acme")]);
    let handler = RecordingJobHandler::new();

    harness
        .tenant_queue
        .enqueue(JobEnvelope::new("prune_logs"), None)
        .await
        .expect("enqueue");

    let job = harness.queue.try_receive().expect("job queued");
    harness
        .dispatcher
        .dispatch(&job, &handler)
        .await
        .expect("dispatch");

    assert_eq!(handler.calls(), vec![("prune_logs".to_string(), None, None)]);
}

#[tokio::test]
async fn dispatch_fails_when_the_stamped_tenant_is_gone() {
    let harness = create_jobs_harness(vec![tenant(1, "Acme", "acme.example.test", "tenant_acme")]);
    let handler = RecordingJobHandler::new();

    // Stamp refers to a tenant that was deleted after the job was queued.
    let job = JobEnvelope::new("send_report").with_field(TENANT_ID_PAYLOAD_KEY, json!(99));

    let result = harness.dispatcher.dispatch(&job, &handler).await;

    assert!(matches!(result, Err(TenancyDomainError::TenantNotFound)));
    assert!(handler.calls().is_empty());
}

#[tokio::test]
async fn dispatch_rejects_a_malformed_stamp() {
    let harness = create_jobs_harness(vec![tenant(1, "Acme", "acme.example.test", "tenant_acme")]);
    let handler = RecordingJobHandler::new();

    for stamp in [json!("not-a-number"), json!(-4), json!(0)] {
        let job = JobEnvelope::new("send_report").with_field(TENANT_ID_PAYLOAD_KEY, stamp);
        let result = harness.dispatcher.dispatch(&job, &handler).await;
        assert!(matches!(
            result,
            Err(TenancyDomainError::InvalidPayloadStamp)
        ));
    }
    assert!(handler.calls().is_empty());
}
