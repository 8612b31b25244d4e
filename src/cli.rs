// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portside")]
#[command(about = "Manage Portainer-orchestrated Docker environments from the command line")]
#[command(version)]
pub struct Cli {
    /// Named instance from portside.yml (defaults to the first entry)
    #[arg(short, long, global = true)]
    pub instance: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON lines instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new portside.yml configuration file
    Init {
        /// Instance name to seed the template with
        #[arg(long)]
        name: Option<String>,

        /// Portainer base URL
        #[arg(long)]
        url: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the instance's endpoints (Docker environments)
    Endpoints,

    /// List containers on an endpoint
    Ps {
        /// Endpoint ID (overrides the configured default)
        #[arg(short, long)]
        endpoint: Option<i64>,
    },

    /// Fetch container logs
    Logs {
        /// Container ID or name
        container: String,

        /// Endpoint ID (overrides the configured default)
        #[arg(short, long)]
        endpoint: Option<i64>,

        /// Number of lines to show from the end
        #[arg(long)]
        tail: Option<u64>,

        /// Only logs after this time (RFC 3339 or unix seconds)
        #[arg(long)]
        since: Option<String>,

        /// Prefix lines with timestamps
        #[arg(long)]
        timestamps: bool,

        /// Keep polling for new logs every 5 seconds
        #[arg(short, long)]
        follow: bool,
    },

    /// Recreate a container with edited configuration
    Recreate {
        /// Container ID or name
        container: String,

        /// Endpoint ID (overrides the configured default)
        #[arg(short, long)]
        endpoint: Option<i64>,

        /// Replace the image reference
        #[arg(long)]
        image: Option<String>,

        /// Replace the restart policy (no, always, on-failure, unless-stopped, none)
        #[arg(long)]
        restart: Option<String>,
    },

    /// Start a container
    Start {
        /// Container ID or name
        container: String,

        /// Endpoint ID (overrides the configured default)
        #[arg(short, long)]
        endpoint: Option<i64>,
    },

    /// Stop a container
    Stop {
        /// Container ID or name
        container: String,

        /// Endpoint ID (overrides the configured default)
        #[arg(short, long)]
        endpoint: Option<i64>,
    },

    /// Restart a container
    Restart {
        /// Container ID or name
        container: String,

        /// Endpoint ID (overrides the configured default)
        #[arg(short, long)]
        endpoint: Option<i64>,
    },
}
