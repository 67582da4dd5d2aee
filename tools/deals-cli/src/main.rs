//! Deals CLI - Terminal front end for the CouponHub deals catalog.
//!
//! Commands:
//! - `deals list` - Show deals matching a search term and category
//! - `deals categories` - Show the category tabs and their counts
//! - `deals copy` - Copy a redemption code to the clipboard
//! - `deals browse` - Search, filter and copy interactively
//! - `deals config` - Manage configuration

mod clipboard;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use deals_observability::StructuredLogger;

use commands::{BrowseArgs, CategoriesArgs, ConfigArgs, CopyArgs, ListArgs};

/// Deals CLI - Find deals and copy coupon codes
#[derive(Parser)]
#[command(name = "deals")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List deals, optionally filtered
    List(ListArgs),

    /// Show category tabs with counts
    Categories(CategoriesArgs),

    /// Copy a redemption code to the clipboard
    Copy(CopyArgs),

    /// Browse deals interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::List(_) => "list",
            Commands::Categories(_) => "categories",
            Commands::Copy(_) => "copy",
            Commands::Browse(_) => "browse",
            Commands::Config(_) => "config",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone(), cli.command.name()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
        Commands::Copy(args) => commands::copy::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        report_error(&ctx.logger, &ctx.output, &e);
        std::process::exit(1);
    }

    Ok(())
}

/// Show a command failure once; the log line is kept for `--verbose`.
fn report_error(logger: &StructuredLogger, output: &output::Output, err: &anyhow::Error) {
    logger
        .debug_builder("command failed")
        .field("error", format!("{:#}", err))
        .emit();
    output.error(&format!("{:#}", err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use deals_core::feedback::ManualClock;
    use deals_observability::{LogLevel, MemorySink, SessionId};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from(["deals", "list", "--category", "Food", "--search", "nike"])
            .unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search, "nike");
                assert_eq!(args.category.as_deref(), Some("Food"));
            }
            _ => panic!("expected list"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_short_flags_with_global_config() {
        let cli = Cli::try_parse_from([
            "deals", "-c", "couponhub.json", "browse", "-k", "Electronics", "-s", "amazon",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some("couponhub.json"));
        match cli.command {
            Commands::Browse(args) => {
                assert_eq!(args.search, "amazon");
                assert_eq!(args.category.as_deref(), Some("Electronics"));
            }
            _ => panic!("expected browse"),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["deals", "list"]).unwrap();
        assert_eq!(cli.command.name(), "list");
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.search, "");
                assert!(args.category.is_none());
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_parse_copy_and_config() {
        let cli = Cli::try_parse_from(["deals", "copy", "SAVE30TECH", "--no-wait"]).unwrap();
        match cli.command {
            Commands::Copy(args) => {
                assert_eq!(args.code, "SAVE30TECH");
                assert!(args.no_wait);
            }
            _ => panic!("expected copy"),
        }

        let cli = Cli::try_parse_from(["deals", "--json", "config", "init", "--force"]).unwrap();
        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigArgs {
                action: commands::ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_copy_requires_code() {
        assert!(Cli::try_parse_from(["deals", "copy"]).is_err());
    }

    #[test]
    fn test_failure_is_not_logged_at_default_level() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(SessionId::from_string("test"), ManualClock::new())
            .with_min_level(LogLevel::Warn)
            .with_sink(sink.clone());
        let output = output::Output::new(false, false);

        report_error(&logger, &output, &anyhow::anyhow!("No deal uses the code 'NOPE'"));
        assert!(sink.lines().is_empty());

        let verbose = logger.with_min_level(LogLevel::Debug);
        report_error(&verbose, &output, &anyhow::anyhow!("No deal uses the code 'NOPE'"));
        assert_eq!(sink.lines().len(), 1);
        assert!(sink.lines()[0].contains("NOPE"));
    }
}
