use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(
    name = "ecs-image",
    about = "Check and inspect ECS image configuration",
    version,
    author,
    long_about = None
)]
pub struct ImageCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Output format (text, json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an image configuration file
    Validate {
        /// Path to the configuration file (.json, .yaml or .yml)
        #[arg(short, long)]
        config: PathBuf,

        /// User variable for the interpolation context (key=value), repeatable
        #[arg(long = "var")]
        vars: Vec<String>,

        /// Build name recorded in the interpolation context
        #[arg(long)]
        build_name: Option<String>,
    },

    /// Print an image configuration after loading it
    Show {
        /// Path to the configuration file (.json, .yaml or .yml)
        #[arg(short, long)]
        config: PathBuf,
    },
}
