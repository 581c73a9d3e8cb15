//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config init`: Write the default configuration file

use owo_colors::OwoColorize;
use serde_json::json;

use super::{AppContext, CommandOutput};
use crate::config::Config;
use crate::error::{ListViewError, Result};

/// Show the effective configuration
pub fn cmd_config_show(ctx: &AppContext, output_json: bool) -> Result<()> {
    let config = &ctx.config;

    let json_output = json!({
        "config_file": ctx.config_path.to_string_lossy(),
        "config_file_exists": ctx.config_path.exists(),
        "state_dir": ctx.state_dir.to_string_lossy(),
        "list": config.list,
        "scroll": config.scroll,
        "reveal": config.reveal,
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&serde_yaml_ng::to_string(config)?);
    text_output.push_str(&format!(
        "\n{} {}",
        "Config file:".dimmed(),
        ctx.config_path.display()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Write the default configuration, refusing to clobber an existing file
pub fn cmd_config_init(ctx: &AppContext, force: bool) -> Result<()> {
    if ctx.config_path.exists() && !force {
        return Err(ListViewError::Config(format!(
            "{} already exists (use --force to overwrite)",
            ctx.config_path.display()
        )));
    }

    Config::default().save(&ctx.config_path)?;
    println!("Wrote {}", ctx.config_path.display());
    Ok(())
}
