use anyhow::{ Context, Result };
use std::path::Path;

use ecs_image::ImageConfig;

use crate::cli::ui;
use crate::cli::OutputFormat;

/// Print a loaded configuration
pub fn execute(config_path: &Path, output_format: OutputFormat) -> Result<()> {
    let config = ImageConfig::from_file(config_path).with_context(||
        format!("Failed to load image config from {}", config_path.display())
    )?;

    match output_format {
        OutputFormat::Json => {
            // Going through Value orders the tag map by key
            let output = serde_json::to_value(&config)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            ui::print_header("Image Configuration");
            ui::print_field("Name", &config.image_name);
            if !config.image_description.is_empty() {
                ui::print_field("Description", "");
                ui::print_text(&config.image_description);
            }

            if config.image_tags.is_empty() {
                ui::print_field("Tags", "none");
            } else {
                ui::print_field("Tags", "");
                for (key, value) in config.sorted_tags() {
                    ui::print_item(&format!("{} = {}", key, value));
                }
            }

            if config.image_members.is_empty() {
                ui::print_field("Members", "none");
            } else {
                ui::print_field("Members", "");
                for member in &config.image_members {
                    ui::print_item(member);
                }
            }

            ui::print_field(
                "Auto-accept members",
                if config.image_auto_accept_members { "yes (deprecated)" } else { "no" }
            );
        }
    }

    Ok(())
}
