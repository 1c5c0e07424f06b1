//! CLI interface for FitTrack

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

use crate::auth::Role;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author = "Krakaw")]
#[command(version = "1.0.0")]
#[command(about = "Gym membership and workout tracking", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new fittrack.toml configuration file
    Init,

    /// Start the web UI
    Serve {
        /// Host to bind to (defaults to the configured host)
        #[arg(long, env = "FITTRACK_HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long, env = "FITTRACK_PORT")]
        port: Option<u16>,
    },

    /// List every page with the roles allowed to open it
    Routes {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show what the route guard does for a path
    Authorize {
        /// Path to open, e.g. /admin
        #[arg(long)]
        path: String,

        /// Role of the signed-in user; omit for an anonymous visitor
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Calculate a body mass index
    Bmi {
        /// Weight in kilograms
        #[arg(short, long)]
        weight: f64,

        /// Height in centimetres
        #[arg(long)]
        height: f64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
