//! `arm`: a small command line client for Azure Resource Manager.
//!
//! # Architecture Overview
//!
//! ```text
//!   arm <command>
//!       │
//!       ├─ parse-id ──▶ resourceids / commonids ──▶ stdout
//!       │
//!       └─ get/put/delete/list
//!              │
//!              ▼
//!        ┌──────────┐    ┌───────────┐    ┌──────────┐
//!        │  config  │───▶│  client   │───▶│ pollers  │──▶ stdout (JSON)
//!        │  (TOML)  │    │ (retries) │    │  (LRO)   │
//!        └──────────┘    └───────────┘    └──────────┘
//!                              │
//!        logging (stderr) ◀────┴────▶ Ctrl+C cancels the context
//! ```

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use arm_client::commonids::{
    AppServicePlanId, ApplicationInsightsComponentId, DnsRecordSetId, KeyVaultId,
    KubernetesClusterId, ResourceGroupId, RoleAssignmentId, ScopeId, StorageAccountId, SubnetId,
    SubscriptionId, UserAssignedIdentityId, VirtualMachineId, VirtualNetworkId,
};
use arm_client::config::{load_config, ArmConfig};
use arm_client::client::{Client, StaticTokenAuthorizer};
use arm_client::lifecycle::{signals, Context};
use arm_client::observability::logging;
use arm_client::resourceids::{ParseError, ResourceId};

#[derive(Parser)]
#[command(name = "arm")]
#[command(about = "Command line client for Azure Resource Manager", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the Resource Manager endpoint.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Give up after this many seconds.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and normalize a resource ID
    ParseId {
        #[arg(short, long, value_enum)]
        kind: IdKind,
        /// Accept keyword segments in any casing
        #[arg(short, long)]
        insensitive: bool,
        id: String,
    },
    /// Read a resource
    Get {
        id: String,
        #[arg(short, long)]
        api_version: String,
    },
    /// Create or update a resource from a JSON file
    Put {
        id: String,
        #[arg(short, long)]
        api_version: String,
        #[arg(short, long)]
        body: PathBuf,
        /// Return after the initial response instead of waiting for provisioning
        #[arg(long)]
        no_wait: bool,
    },
    /// Delete a resource
    Delete {
        id: String,
        #[arg(short, long)]
        api_version: String,
        #[arg(long)]
        no_wait: bool,
    },
    /// List a collection, following every page
    List {
        path: String,
        #[arg(short, long)]
        api_version: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IdKind {
    Subscription,
    ResourceGroup,
    Scope,
    ApplicationInsights,
    VirtualNetwork,
    Subnet,
    DnsRecordSet,
    StorageAccount,
    KeyVault,
    UserAssignedIdentity,
    VirtualMachine,
    KubernetesCluster,
    AppServicePlan,
    RoleAssignment,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ArmConfig::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.environment.resource_manager_endpoint = endpoint.clone();
    }

    logging::init(&config.observability);

    let root = Context::new();
    signals::cancel_on_ctrl_c(&root);
    let ctx = match cli.timeout {
        Some(secs) => root.with_timeout(Duration::from_secs(secs)),
        None => root.child(),
    };

    match cli.command {
        Commands::ParseId {
            kind,
            insensitive,
            id,
        } => {
            println!("{}", parse_id(kind, &id, insensitive)?);
        }
        Commands::Get { id, api_version } => {
            let client = build_client(&config)?;
            let response = client.get::<Value>(&ctx, &id, &api_version).await?;
            print_json(&response.model.unwrap_or(Value::Null))?;
        }
        Commands::Put {
            id,
            api_version,
            body,
            no_wait,
        } => {
            let client = build_client(&config)?;
            let payload: Value = serde_json::from_str(&std::fs::read_to_string(&body)?)?;
            let result = if no_wait {
                client
                    .create_or_update(&ctx, &id, &api_version, &payload)
                    .await?
                    .json()?
            } else {
                client
                    .create_or_update_then_poll(&ctx, &id, &api_version, &payload)
                    .await?
            };
            print_json(&result.unwrap_or(Value::Null))?;
        }
        Commands::Delete {
            id,
            api_version,
            no_wait,
        } => {
            let client = build_client(&config)?;
            if no_wait {
                let response = client.delete(&ctx, &id, &api_version).await?;
                tracing::info!(status = response.status.as_u16(), "Delete accepted");
            } else {
                client.delete_then_poll(&ctx, &id, &api_version).await?;
                tracing::info!(id = %id, "Deleted");
            }
        }
        Commands::List { path, api_version } => {
            let client = build_client(&config)?;
            let items: Vec<Value> = client.list_all(&ctx, &path, &api_version).await?;
            print_json(&Value::Array(items))?;
        }
    }

    Ok(())
}

fn build_client(config: &ArmConfig) -> Result<Client, Box<dyn std::error::Error>> {
    let authorizer = StaticTokenAuthorizer::from_env(&config.credentials.access_token_env)?;
    Ok(Client::new(config)?.with_authorizer(Arc::new(authorizer)))
}

fn parse_id(kind: IdKind, input: &str, insensitive: bool) -> Result<String, ParseError> {
    match kind {
        IdKind::Subscription => describe::<SubscriptionId>(input, insensitive),
        IdKind::ResourceGroup => describe::<ResourceGroupId>(input, insensitive),
        IdKind::Scope => describe::<ScopeId>(input, insensitive),
        IdKind::ApplicationInsights => {
            describe::<ApplicationInsightsComponentId>(input, insensitive)
        }
        IdKind::VirtualNetwork => describe::<VirtualNetworkId>(input, insensitive),
        IdKind::Subnet => describe::<SubnetId>(input, insensitive),
        IdKind::DnsRecordSet => describe::<DnsRecordSetId>(input, insensitive),
        IdKind::StorageAccount => describe::<StorageAccountId>(input, insensitive),
        IdKind::KeyVault => describe::<KeyVaultId>(input, insensitive),
        IdKind::UserAssignedIdentity => describe::<UserAssignedIdentityId>(input, insensitive),
        IdKind::VirtualMachine => describe::<VirtualMachineId>(input, insensitive),
        IdKind::KubernetesCluster => describe::<KubernetesClusterId>(input, insensitive),
        IdKind::AppServicePlan => describe::<AppServicePlanId>(input, insensitive),
        IdKind::RoleAssignment => describe::<RoleAssignmentId>(input, insensitive),
    }
}

fn describe<T: ResourceId + Display>(input: &str, insensitive: bool) -> Result<String, ParseError> {
    let id = if insensitive {
        T::parse_insensitively(input)?
    } else {
        T::parse(input)?
    };
    Ok(format!("{}\n\n{}", id, id.id()))
}

fn print_json(value: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
