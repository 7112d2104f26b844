use anyhow::{Context, Result};
use catalog_core::admin::{STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK};
use catalog_core::{AdminCatalogService, AdminFailure, CatalogConfig, CreateServiceRequest};
use clap::{Parser, Subcommand};
use log::info;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(about = "Inspect and exercise a seeded mock service catalog")]
struct Cli {
    /// Catalog configuration file (TOML or JSON) with the seed services
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered services
    List,
    /// Show one service with its endpoint templates
    Show {
        /// Service ID
        #[arg(short, long)]
        id: String,
    },
    /// Register a new service
    Create {
        /// Service name, unique across the catalog
        #[arg(short, long)]
        name: String,
        /// Service type (e.g. "compute")
        #[arg(short = 't', long = "type")]
        service_type: String,
        /// Service ID; generated when omitted
        #[arg(long)]
        id: Option<String>,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove a service that has no endpoint templates
    Delete {
        /// Service ID
        #[arg(short, long)]
        id: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(succeeded) => {
            if !succeeded {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            std::process::exit(2);
        }
    }
}

/// Returns whether the admin operation succeeded.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    let config = CatalogConfig::load(cli.config.as_deref())?;
    let registry = config
        .build_registry()
        .context("Seed services violate catalog invariants")?;
    let admin = AdminCatalogService::from_registry(registry);
    info!("Session catalog ready with {} service(s)", admin.list().len());

    let outcome = match cli.command {
        Commands::List => Ok((STATUS_OK, serde_json::to_value(admin.listing())?)),
        Commands::Show { id } => match admin.get(&id) {
            Ok(entry) => Ok((STATUS_OK, json!({ "OS-KSADM:service": entry }))),
            Err(failure) => Err(failure),
        },
        Commands::Create {
            name,
            service_type,
            id,
            description,
        } => {
            let mut request = CreateServiceRequest::new(service_type, name);
            if let Some(id) = id {
                request = request.with_id(id);
            }
            if let Some(description) = description {
                request = request.with_description(description);
            }
            admin
                .create(request)
                .map(|id| (STATUS_CREATED, json!({ "id": id })))
        }
        Commands::Delete { id } => admin.delete(&id).map(|()| (STATUS_NO_CONTENT, Value::Null)),
    };

    print_outcome(&outcome)?;
    Ok(outcome.is_ok())
}

fn print_outcome(outcome: &std::result::Result<(u16, Value), AdminFailure>) -> Result<()> {
    let rendered = match outcome {
        Ok((status, body)) => json!({ "status": status, "body": body }),
        Err(failure) => json!({ "status": failure.status_code(), "body": failure.to_fault_body() }),
    };
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    Ok(())
}
