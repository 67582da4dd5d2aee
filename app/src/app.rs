//! Application components.

use deals_core::catalog::{CountSource, Deal};
use deals_core::search::CategorySelection;
use deals_observability::StructuredLogger;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::platform::PageClipboard;
use crate::state::{page_logger, AppState};

// ============================================================================
// Shell (SSR entry point)
// ============================================================================

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos::view;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let logger = page_logger();
    provide_context(PageClipboard::new(logger.clone()));
    provide_context(logger);
    provide_context(AppState::new());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/couponhub.css"/>
        <Meta name="description" content="Verified coupon codes and deals from your favorite brands"/>
        <Title text="WordPass - Deals & Coupons"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=DealsPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="brand">
                <span class="brand-mark">"%"</span>
                <h1>"WordPass"</h1>
            </div>
            <nav>
                <a href="/">"Home"</a>
                <a href="/#categories">"Categories"</a>
                <a href="/#deals">"Trending"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="brand">
                <span class="brand-mark">"%"</span>
                <h3>"CouponHub"</h3>
            </div>
            <p>"Your trusted source for verified coupon codes and amazing deals from top brands."</p>
            <p class="copyright">"© 2024 WordPass. All rights reserved."</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Hero with search and category tabs, followed by the deal grid.
#[component]
fn DealsPage() -> impl IntoView {
    view! {
        <section class="hero">
            <h2>"Find Amazing " <span class="accent">"Deals & Coupons"</span></h2>
            <p>
                "Discover thousands of verified coupon codes and deals from your favorite brands. "
                "Save money on everything from electronics to fashion, food, and more."
            </p>
            <SearchBar/>
            <CategoryTabs/>
        </section>
        <DealGrid/>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to deals"</a>
        </div>
    }
}

// ============================================================================
// Search Components
// ============================================================================

#[component]
fn SearchBar() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="search">
            <input
                type="text"
                placeholder="Search for brands, products, or categories..."
                prop:value=move || state.query.with(|q| q.term.clone())
                on:input=move |ev| state.set_search(event_target_value(&ev))
            />
        </div>
    }
}

/// Category tabs with their badge counts.
#[component]
fn CategoryTabs() -> impl IntoView {
    let state = expect_context::<AppState>();
    let tabs = state.catalog.with_value(|catalog| {
        catalog
            .category_tabs(CountSource::Static)
            .into_iter()
            .map(|(category, count)| (category.clone(), count))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="tabs" id="categories">
            {tabs.into_iter().map(|(category, count)| {
                let selection = CategorySelection::parse(category.name.clone());
                let target = selection.clone();
                let active = move || state.query.with(|q| q.category == selection);
                view! {
                    <button
                        class="tab"
                        class:active=active
                        on:click=move |_| state.set_category(target.clone())
                    >
                        <span class="tab-icon">{category.icon.glyph()}</span>
                        <span>{category.name}</span>
                        <span class="badge">{count.to_string()}</span>
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

// ============================================================================
// Deal Components
// ============================================================================

#[component]
fn DealGrid() -> impl IntoView {
    let state = expect_context::<AppState>();
    let heading = move || state.with_results(|r| r.heading());
    let summary = move || state.with_results(|r| r.summary());
    let deals = move || state.with_results(|r| r.to_owned_deals());

    view! {
        <section class="deals" id="deals">
            <div class="deals-header">
                <h3>{heading}</h3>
                <span class="badge outline">{summary}</span>
            </div>
            <div class="deal-grid">
                <For
                    each=deals
                    key=|deal| deal.id.clone()
                    children=move |deal| view! { <DealCard deal=deal/> }
                />
            </div>
        </section>
    }
}

#[component]
fn DealCard(deal: Deal) -> impl IntoView {
    let state = expect_context::<AppState>();
    let clipboard = expect_context::<PageClipboard>();
    let logger = expect_context::<StructuredLogger>();

    let discount = deal.discount_label();
    let uses = deal.uses_label();
    let expiry = deal.expiry_label();
    let code = deal.code.clone();
    let copied_code = deal.code.clone();
    let copied = Memo::new(move |_| state.is_copied(&copied_code));

    view! {
        <article class="deal-card">
            <div class="deal-head">
                <div>
                    <h4>
                        {deal.brand}
                        {deal.verified.then(|| view! { <span class="badge verified">"✓ Verified"</span> })}
                    </h4>
                    <p class="deal-title">{deal.title}</p>
                </div>
                <div class="discount">
                    <div class="amount">{discount}</div>
                    <div class="off">"OFF"</div>
                </div>
            </div>
            <p class="description">{deal.description}</p>
            <div class="deal-meta">
                <span>"★ " {deal.rating.to_string()}</span>
                <span>{uses}</span>
                <span>{expiry}</span>
            </div>
            <div class="code-row">
                <code class="code">{deal.code}</code>
                <button
                    class="copy"
                    class:copied=move || copied.get()
                    title="Copy code"
                    on:click=move |_| state.copy(&code, &clipboard, &logger)
                >
                    {move || if copied.get() { "✓" } else { "Copy" }}
                </button>
            </div>
            <span class="badge outline">{deal.category}</span>
        </article>
    }
}
