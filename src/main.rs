use caffa_appinfo::{app, cli};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Tracing using RUST_LOG, info by default
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = cli::Cli::parse();
    let settings = cli::settings_init(&cli)?;

    app::run(cli.command.unwrap_or_default(), settings).await?;
    Ok(())
}
