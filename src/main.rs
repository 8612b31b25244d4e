// ABOUTME: Entry point for the portside CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use portside::config;
use portside::error::Result;
use portside::output::{Output, OutputMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    let instance = cli.instance.as_deref();

    match cli.command {
        Commands::Init { name, url, force } => {
            let cwd = std::env::current_dir()?;
            config::init_config(&cwd, name.as_deref(), url.as_deref(), force)?;
            output.success(&format!("wrote {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Endpoints => commands::endpoints(instance, output).await,
        Commands::Ps { endpoint } => commands::ps(instance, endpoint, output).await,
        Commands::Logs {
            container,
            endpoint,
            tail,
            since,
            timestamps,
            follow,
        } => {
            commands::logs(
                instance,
                endpoint,
                &container,
                tail,
                since.as_deref(),
                timestamps,
                follow,
            )
            .await
        }
        Commands::Recreate {
            container,
            endpoint,
            image,
            restart,
        } => commands::recreate(instance, endpoint, &container, image, restart, output).await,
        Commands::Start {
            container,
            endpoint,
        } => {
            commands::control(
                instance,
                endpoint,
                &container,
                commands::ContainerAction::Start,
                output,
            )
            .await
        }
        Commands::Stop {
            container,
            endpoint,
        } => {
            commands::control(
                instance,
                endpoint,
                &container,
                commands::ContainerAction::Stop,
                output,
            )
            .await
        }
        Commands::Restart {
            container,
            endpoint,
        } => {
            commands::control(
                instance,
                endpoint,
                &container,
                commands::ContainerAction::Restart,
                output,
            )
            .await
        }
    }
}
