//! Output formatting for the CLI.

use console::style;
use deals_core::catalog::Deal;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Print a block of pre-rendered text.
    pub fn block(&self, text: &str) {
        if self.json {
            return;
        }
        println!("{}", text);
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Render a deal as a terminal card.
///
/// `copied` swaps the copy hint for a check mark.
pub fn render_card(deal: &Deal, copied: bool, show_description: bool) -> String {
    let mut lines = Vec::new();

    let verified = if deal.verified {
        format!(" {}", style("✓ Verified").green())
    } else {
        String::new()
    };
    lines.push(format!(
        "{}{}  {} OFF",
        style(&deal.brand).bold(),
        verified,
        style(deal.discount_label()).magenta().bold()
    ));
    lines.push(format!("  {}", style(&deal.title).magenta()));

    if show_description {
        lines.push(format!("  {}", deal.description));
    }

    lines.push(format!(
        "  {} {}  ·  {}  ·  {}",
        style("★").yellow(),
        deal.rating,
        deal.uses_label(),
        deal.expiry_label()
    ));

    let copy_state = if copied {
        style("✓ Copied!").green().to_string()
    } else {
        style(format!("deals copy {}", deal.code)).dim().to_string()
    };
    lines.push(format!(
        "  [ {} ]  {}",
        style(&deal.code).bold(),
        copy_state
    ));
    lines.push(format!("  {}", style(&deal.category).dim()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deals_core::catalog::Catalog;

    #[test]
    fn test_card_shows_deal_fields() {
        let catalog = Catalog::featured();
        let deal = catalog.find_by_code("WELCOME20").unwrap();
        let card = render_card(deal, false, true);

        assert!(card.contains("Uber Eats"));
        assert!(card.contains("$20"));
        assert!(card.contains("2341 uses"));
        assert!(card.contains("Expires in 1 day"));
        assert!(card.contains("minimum $25 purchase"));
        assert!(card.contains("deals copy WELCOME20"));
    }

    #[test]
    fn test_card_shows_copied_state() {
        let catalog = Catalog::featured();
        let deal = catalog.find_by_code("MUSIC3FREE").unwrap();
        let card = render_card(deal, true, false);

        assert!(card.contains("FREE"));
        assert!(card.contains("Copied!"));
        assert!(!card.contains("completely free"));
    }
}
