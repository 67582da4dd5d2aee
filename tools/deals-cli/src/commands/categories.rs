//! Show category tabs.

use anyhow::Result;
use deals_core::catalog::CountSource;
use serde_json::json;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let source = if args.live {
        CountSource::Live
    } else {
        ctx.config.catalog.count_source
    };
    let tabs = ctx.catalog.category_tabs(source);

    if ctx.output.is_json() {
        let tabs: Vec<_> = tabs
            .iter()
            .map(|(category, count)| {
                json!({
                    "name": category.name,
                    "icon": category.icon.name(),
                    "count": count,
                })
            })
            .collect();
        ctx.output.json(&json!({ "count_source": source, "categories": tabs }));
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({} counts)", source));
    for (category, count) in &tabs {
        ctx.output.table_row(
            &[category.icon.glyph(), &category.name, &count.to_string()],
            &[2, 14, 5],
        );
    }

    Ok(())
}
