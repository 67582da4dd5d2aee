//! CouponHub deals page
//!
//! Renders the featured deal catalog with:
//! - Case-insensitive search over brand and title
//! - Category tabs with an "All" sentinel
//! - Copy buttons that show a check mark for two seconds after each copy
//!
//! Filtering and copy feedback live in `deals-core`; this crate only wires
//! them to signals, browser timers and the clipboard.

mod app;
mod platform;
mod state;

#[cfg(feature = "ssr")]
mod server;

pub use app::App;
pub use state::AppState;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

#[cfg(all(feature = "csr", not(feature = "hydrate")))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
