//! # Side Drawer TUI Library
//!
//! This library renders a side drawer widget inside a terminal host page using
//! the Ratatui framework. The drawer slides over the page from the left edge,
//! dims the page behind a backdrop, and offers two tabs: a Navigation tab
//! showing host-provided content and a Contact tab with fixed contact details.
//!
//! ## Architecture
//!
//! The TUI follows a component-based architecture. Drawer state lives in
//! [`App`](app::App); components translate input into messages, and every
//! change to a reflected attribute comes back as an effect that the runtime
//! hands to the host page.

mod app;
mod cmd;
mod ui;

use anyhow::Result;

pub use ui::components::DrawerAttributes;

/// Navigation entries used when the host supplies none.
pub const DEFAULT_NAV_ITEMS: [&str; 4] = ["Home", "Products", "Services", "About"];

/// Startup configuration supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Initial drawer title; `None` leaves the attribute unset.
    pub title: Option<String>,
    /// Start with the drawer open.
    pub open: bool,
    /// Lines shown in the Navigation tab.
    pub nav_items: Vec<String>,
    /// Preferred theme id, overridden by `TUI_THEME`.
    pub theme: Option<String>,
}

/// Runs the TUI until the user quits and returns the final reflected attributes.
///
/// # Errors
///
/// Returns an error when the terminal cannot be put into (or restored from)
/// raw mode and the alternate screen, or when drawing fails.
pub async fn run(config: TuiConfig) -> Result<DrawerAttributes> {
    ui::runtime::run_app(config).await
}
