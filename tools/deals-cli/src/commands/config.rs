//! Manage configuration.

use anyhow::{bail, Result};

use super::{ConfigAction, ConfigArgs};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.action {
        ConfigAction::Show => show(ctx),
        ConfigAction::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("File", &path.display().to_string()),
        None => ctx.output.kv("File", "(defaults)"),
    }
    ctx.output
        .kv("Default category", &ctx.config.display.default_category);
    ctx.output.kv(
        "Descriptions",
        if ctx.config.display.show_descriptions { "shown" } else { "hidden" },
    );
    ctx.output
        .kv("Count source", &ctx.config.catalog.count_source.to_string());
    ctx.output
        .kv("Log level", &ctx.config.logging.level.to_string());

    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())?;
    ctx.logger.info(&format!("Wrote {}", path.display()));
    ctx.output.success(&format!("Created {}", path.display()));

    Ok(())
}
