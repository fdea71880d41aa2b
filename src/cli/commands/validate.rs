use anyhow::{ Context, Result };
use log::info;
use serde::Serialize;
use std::path::Path;

use ecs_image::{ ContextOptions, ImageConfig, Prepare, PrepareErrors };

use crate::cli::ui;
use crate::cli::OutputFormat;

#[derive(Debug, Serialize)]
struct ValidationOutput {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Configuration validation command. Returns whether the configuration is valid.
pub fn execute(
    config_path: &Path,
    vars: &[String],
    build_name: Option<&str>,
    output_format: OutputFormat
) -> Result<bool> {
    let config = ImageConfig::from_file(config_path).with_context(||
        format!("Failed to load image config from {}", config_path.display())
    )?;

    let options = ContextOptions {
        vars: vars.to_vec(),
        build_name: build_name.map(str::to_string),
        template_path: Some(config_path.display().to_string()),
    };
    let ctx = options.build_context_from_env()?;

    let errors = PrepareErrors::from(config.prepare(&ctx));
    let warnings = config.warnings();
    let valid = errors.is_empty();
    info!("Validated {} with {} error(s)", config_path.display(), errors.len());

    match output_format {
        OutputFormat::Json => {
            let output = ValidationOutput {
                valid,
                errors: errors
                    .errors()
                    .iter()
                    .map(|e| e.to_string())
                    .collect(),
                warnings,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            ui::print_header("Validating Image Configuration");
            ui::print_info(&format!("Using config: {}", config_path.display()));

            for warning in &warnings {
                ui::print_warning(warning);
            }

            match errors.into_result() {
                Ok(()) => ui::print_success("Image configuration is valid"),
                Err(errors) => ui::print_error(&errors.to_string()),
            }
        }
    }

    Ok(valid)
}
