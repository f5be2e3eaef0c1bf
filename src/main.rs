use anyhow::Result;
use clap::{Parser, Subcommand};
use elb_registrar::config::RegistrarConfig;
use elb_registrar::elb::LoadBalancingManager;
use elb_registrar::environment::{BuildEnvironment, SystemEnvironment};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "elb-registrar",
    about = "Register and deregister EC2 instances with classic load balancers"
)]
struct Cli {
    /// Path to settings file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add instances to a load balancer's registered set
    Register {
        /// Name of the target load balancer
        #[arg(short, long)]
        load_balancer: String,

        /// Instance ids, in the order they should appear in the request
        instances: Vec<String>,
    },
    /// Remove instances from a load balancer's registered set
    Deregister {
        /// Name of the target load balancer
        #[arg(short, long)]
        load_balancer: String,

        /// Instance ids to remove
        instances: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    rt.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let environment: Arc<dyn BuildEnvironment> = Arc::new(SystemEnvironment);
    let config = RegistrarConfig::load(&cli.config, environment.as_ref())?;
    let manager = LoadBalancingManager::new(environment);

    match cli.command {
        Command::Register {
            load_balancer,
            instances,
        } => {
            tracing::info!(
                "registering {} instance(s) with load balancer {}",
                instances.len(),
                load_balancer
            );
            manager
                .register_instances(&load_balancer, &instances, &config.aws)
                .await?;
            tracing::info!("registered instances with {}", load_balancer);
        }
        Command::Deregister {
            load_balancer,
            instances,
        } => {
            tracing::info!(
                "deregistering {} instance(s) from load balancer {}",
                instances.len(),
                load_balancer
            );
            manager
                .deregister_instances(&load_balancer, &instances, &config.aws)
                .await?;
            tracing::info!("deregistered instances from {}", load_balancer);
        }
    }

    Ok(())
}
