//! List deals matching a query.

use anyhow::Result;
use deals_core::search::{CategorySelection, DealQuery};
use serde_json::json;

use super::ListArgs;
use crate::context::Context;
use crate::output::render_card;

/// Build the query for a command from its flags and the configured default.
pub fn build_query(search: &str, category: Option<&str>, ctx: &Context) -> DealQuery {
    let category = match category {
        Some(name) => CategorySelection::parse(name),
        None => ctx.config.default_selection(),
    };
    DealQuery::new().with_term(search).with_category(category)
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let query = build_query(&args.search, args.category.as_deref(), ctx);
    let results = query.apply(&ctx.catalog);

    ctx.logger
        .debug_builder("query applied")
        .field("term", query.term.clone())
        .field("category", query.category.to_string())
        .field_u64("matches", results.len() as u64)
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "heading": results.heading(),
            "summary": results.summary(),
            "query": &query,
            "deals": &results.deals,
        }));
        return Ok(());
    }

    ctx.output.header(&results.heading());
    for deal in results.iter() {
        ctx.output.block("");
        ctx.output.block(&render_card(
            deal,
            false,
            ctx.config.display.show_descriptions,
        ));
    }
    ctx.output.block("");
    ctx.output.info(&results.summary());

    Ok(())
}
