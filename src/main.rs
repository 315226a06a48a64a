use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod check;
mod cluster;
mod config;
mod constants;
mod error;
mod formatter;
mod types;

/// Flag pod admission webhooks that can block pod scheduling or API server recovery.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Show all webhooks
    #[arg(long)]
    show_all: bool,
}

impl From<Args> for config::Config {
    fn from(args: Args) -> Self {
        Self {
            show_all: args.show_all,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("risky_webhooks=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config: config::Config = Args::parse().into();

    let client = Client::try_default()
        .await
        .context("failed to get kubernetes client")?;
    info!(show_all = config.show_all, "Created Kubernetes client");

    println!("Checking for risky webhooks...\n");

    let checker = check::Checker::new(config, cluster::KubeCluster::new(client));
    let result = checker.check_all().await?;
    println!("{}", formatter::Formatter::new(result));
    Ok(())
}
