//! CLI commands.

pub mod browse;
pub mod categories;
pub mod config;
pub mod copy;
pub mod list;

use clap::{Args, Subcommand};

/// Arguments for `deals list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Case-insensitive text matched against brand and title
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category tab to filter by ("All" for every category)
    #[arg(short = 'k', long)]
    pub category: Option<String>,
}

/// Arguments for `deals categories`.
#[derive(Args, Debug, Clone)]
pub struct CategoriesArgs {
    /// Count deals in the catalog instead of showing the seeded counts
    #[arg(long)]
    pub live: bool,
}

/// Arguments for `deals copy`.
#[derive(Args, Debug, Clone)]
pub struct CopyArgs {
    /// Redemption code to copy
    pub code: String,

    /// Return immediately instead of showing the copied feedback
    #[arg(long)]
    pub no_wait: bool,
}

/// Arguments for `deals browse`.
#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Initial search text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Initial category tab
    #[arg(short = 'k', long)]
    pub category: Option<String>,
}

/// Arguments for `deals config`.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default couponhub.toml in the working directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
