//! Copy a redemption code.

use anyhow::{Context as _, Result};
use deals_core::clipboard::Clipboard;
use deals_core::feedback::{Clock, CopyFeedback, SystemClock};
use serde_json::json;

use super::CopyArgs;
use crate::clipboard::Osc52Clipboard;
use crate::context::Context;

/// Copy `code` and flag it, reporting a clipboard failure without aborting.
///
/// Returns whether the clipboard write succeeded.
pub fn copy_with_feedback<C: Clock>(
    feedback: &mut CopyFeedback<C>,
    code: &str,
    clipboard: &dyn Clipboard,
    ctx: &Context,
) -> bool {
    match feedback.copy(code, clipboard) {
        Ok(()) => {
            ctx.logger
                .info_builder("code copied")
                .field("code", code)
                .duration_ms("flagged_for_ms", feedback.duration())
                .emit();
            true
        }
        Err(e) => {
            ctx.logger
                .warn_builder("clipboard write failed")
                .field("code", code)
                .field("error", e.to_string())
                .emit();
            ctx.output.warn(&format!("{} - copy the code manually: {}", e, code));
            false
        }
    }
}

/// Wait until `code` is no longer flagged.
pub async fn wait_for_expiry<C: Clock>(feedback: &CopyFeedback<C>, code: &str) {
    while let Some(remaining) = feedback.remaining(code) {
        tokio::time::sleep(remaining).await;
    }
}

/// Run the copy command.
pub async fn run(args: CopyArgs, ctx: &Context) -> Result<()> {
    let deal = ctx
        .catalog
        .find_by_code(&args.code)
        .with_context(|| format!("No deal uses the code '{}'", args.code))?;

    let mut feedback = CopyFeedback::new(SystemClock::new());
    let clipboard = Osc52Clipboard::stdout();
    let written = copy_with_feedback(&mut feedback, &deal.code, &clipboard, ctx);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "code": deal.code,
            "brand": deal.brand,
            "clipboard": written,
            "flagged_for_ms": feedback.duration().as_millis() as u64,
        }));
        return Ok(());
    }

    if written {
        ctx.output
            .success(&format!("{} code {} copied to clipboard", deal.brand, deal.code));
    }

    if args.no_wait {
        return Ok(());
    }

    let spinner = ctx.output.spinner(&format!("Copied! {}", deal.code));
    wait_for_expiry(&feedback, &deal.code).await;
    spinner.finish_and_clear();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_for_expiry_returns_after_deadline() {
        let mut feedback =
            CopyFeedback::new(SystemClock::new()).with_duration(Duration::from_millis(30));
        feedback.flag("SAVE30TECH");

        wait_for_expiry(&feedback, "SAVE30TECH").await;
        assert!(!feedback.is_flagged("SAVE30TECH"));
    }

    #[tokio::test]
    async fn test_wait_for_unflagged_code_returns_immediately() {
        let feedback = CopyFeedback::new(SystemClock::new());
        wait_for_expiry(&feedback, "NIKESAVE25").await;
        assert!(feedback.is_empty());
    }
}
