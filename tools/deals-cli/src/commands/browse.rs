//! Interactive deal browser.

use anyhow::{bail, Result};
use console::Term;
use deals_core::catalog::{Catalog, CountSource};
use deals_core::feedback::{Clock, CopyFeedback, SystemClock};
use deals_core::search::{CategorySelection, DealQuery, DealResults};
use dialoguer::{Input, Select};

use super::copy::copy_with_feedback;
use super::list::build_query;
use super::BrowseArgs;
use crate::clipboard::Osc52Clipboard;
use crate::context::Context;
use crate::output::render_card;

const MENU: [&str; 5] = ["Search", "Category", "Copy a code", "Refresh", "Quit"];

/// Query and copy-feedback state for one browse session.
pub struct BrowseSession<C: Clock> {
    pub query: DealQuery,
    pub feedback: CopyFeedback<C>,
}

impl<C: Clock> BrowseSession<C> {
    pub fn new(query: DealQuery, clock: C) -> Self {
        Self {
            query,
            feedback: CopyFeedback::new(clock),
        }
    }

    /// Deals for the current query, recomputed on every call.
    pub fn results<'a>(&self, catalog: &'a Catalog) -> DealResults<'a> {
        self.query.apply(catalog)
    }

    /// Heading, cards, and result count for the current state.
    pub fn render(&self, catalog: &Catalog, show_descriptions: bool) -> String {
        let results = self.results(catalog);
        let mut out = vec![results.heading(), String::new()];
        for deal in results.iter() {
            let copied = self.feedback.is_flagged(&deal.code);
            out.push(render_card(deal, copied, show_descriptions));
            out.push(String::new());
        }
        out.push(results.summary());
        out.join("\n")
    }
}

/// Labels for the category picker and the selection each maps to.
pub fn category_choices(catalog: &Catalog, source: CountSource) -> Vec<(String, CategorySelection)> {
    catalog
        .category_tabs(source)
        .into_iter()
        .map(|(category, count)| {
            (
                format!("{} {} ({})", category.icon.glyph(), category.name, count),
                CategorySelection::parse(category.name.clone()),
            )
        })
        .collect()
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("browse needs an interactive terminal; use `deals list` instead");
    }

    let query = build_query(&args.search, args.category.as_deref(), ctx);
    let mut session = BrowseSession::new(query, SystemClock::new());
    let clipboard = Osc52Clipboard::stdout();
    let show_descriptions = ctx.config.display.show_descriptions;

    loop {
        session.feedback.sweep();
        term.clear_screen()?;
        ctx.output.block(&session.render(&ctx.catalog, show_descriptions));

        let choice = Select::new()
            .with_prompt("What next?")
            .items(&MENU[..])
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => {
                let text: String = Input::new()
                    .with_prompt("Search brands and titles")
                    .with_initial_text(session.query.term.clone())
                    .allow_empty(true)
                    .interact_text()?;
                session.query.set_term(text);
            }
            Some(1) => {
                let choices =
                    category_choices(&ctx.catalog, ctx.config.catalog.count_source);
                let labels: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
                let current = choices
                    .iter()
                    .position(|(_, selection)| *selection == session.query.category)
                    .unwrap_or(0);
                if let Some(index) = Select::new()
                    .with_prompt("Category")
                    .items(&labels[..])
                    .default(current)
                    .interact_opt()?
                {
                    session.query.set_category(choices[index].1.clone());
                }
            }
            Some(2) => {
                let codes: Vec<(String, String)> = session
                    .results(&ctx.catalog)
                    .iter()
                    .map(|d| (format!("{} - {}", d.brand, d.code), d.code.clone()))
                    .collect();
                if codes.is_empty() {
                    ctx.output.warn("No deals to copy; change the search or category");
                    continue;
                }
                let labels: Vec<&str> = codes.iter().map(|(label, _)| label.as_str()).collect();
                if let Some(index) = Select::new()
                    .with_prompt("Copy which code?")
                    .items(&labels[..])
                    .default(0)
                    .interact_opt()?
                {
                    copy_with_feedback(&mut session.feedback, &codes[index].1, &clipboard, ctx);
                }
            }
            Some(3) => {}
            _ => break,
        }

        ctx.logger
            .debug_builder("query applied")
            .field("term", session.query.term.clone())
            .field("category", session.query.category.to_string())
            .emit();
    }

    Ok(())
}
