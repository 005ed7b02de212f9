//! Host page that embeds the side drawer.
//!
//! Plays the part of the page a drawer lives on: it supplies the navigation
//! content, calls the drawer's `open()` command, and shows the attribute
//! values it has observed through reflection.

mod host_page_component;
mod state;

pub use host_page_component::HostPageComponent;
pub use state::HostPageState;
