use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;
use cli::{ Commands, ImageCli };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = ImageCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    match &cli.command {
        Commands::Validate { config, vars, build_name } => {
            let valid = cli::commands::validate::execute(
                config,
                vars,
                build_name.as_deref(),
                cli.output_format
            )?;
            if !valid {
                std::process::exit(1);
            }
        }

        Commands::Show { config } => {
            cli::commands::show::execute(config, cli.output_format)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
