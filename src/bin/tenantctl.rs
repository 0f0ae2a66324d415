use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tenancy_axum_api::{
    config::app_config::AppConfig,
    tenancy::{build_tenancy_components, domain::model::value_objects::tenant_id::TenantId},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tenantctl", about = "Owner bootstrap and per-tenant schema migrations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bootstrap the owner schema (tenant catalog and run bookkeeping).
    Init,
    /// Migrate one tenant, or every registered tenant when no id is given.
    Migrate {
        /// Tenant identifier; omit to migrate all tenants.
        tenant_id: Option<i64>,
        /// Drop and recreate each tenant schema before migrating.
        #[arg(long)]
        fresh: bool,
        /// Apply seed data after migrating.
        #[arg(long)]
        seed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let components = match build_tenancy_components(&config).await {
        Ok(components) => components,
        Err(error) => {
            eprintln!("failed to connect to owner database: {error}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Init => match components.migration_service.init_owner_schema().await {
            Ok(()) => {
                println!("owner schema is up to date");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("owner schema migration failed: {error}");
                ExitCode::FAILURE
            }
        },
        Command::Migrate {
            tenant_id,
            fresh,
            seed,
        } => match tenant_id {
            Some(raw_id) => {
                let tenant_id = match TenantId::new(raw_id) {
                    Ok(tenant_id) => tenant_id,
                    Err(error) => {
                        eprintln!("{error}");
                        return ExitCode::FAILURE;
                    }
                };

                match components
                    .migration_service
                    .migrate_one(tenant_id, fresh, seed)
                    .await
                {
                    Ok(report) => {
                        println!(
                            "migrated tenant #{} ({})",
                            report.tenant_id, report.tenant_name
                        );
                        ExitCode::SUCCESS
                    }
                    Err(error) => {
                        eprintln!("{error}");
                        ExitCode::FAILURE
                    }
                }
            }
            None => {
                let outcomes = match components.migration_service.migrate_all(fresh, seed).await {
                    Ok(outcomes) => outcomes,
                    Err(error) => {
                        eprintln!("could not list tenants: {error}");
                        return ExitCode::FAILURE;
                    }
                };

                let mut failed = 0usize;
                for outcome in &outcomes {
                    match &outcome.result {
                        Ok(report) => {
                            println!(
                                "migrated tenant #{} ({})",
                                report.tenant_id, report.tenant_name
                            );
                        }
                        Err(error) => {
                            failed += 1;
                            eprintln!("tenant #{}: {error}", outcome.tenant_id);
                        }
                    }
                }

                println!(
                    "{} migrated, {} failed, {} total",
                    outcomes.len() - failed,
                    failed,
                    outcomes.len()
                );

                if failed > 0 {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
        },
    }
}
