//! Side drawer: an off-canvas panel with a Navigation and a Contact view.
//!
//! The drawer owns three pieces of state: whether it is open, the header
//! title, and the active tab. `title` and `isopen` are reflected to the host
//! (every change comes back as an [`Effect::AttributeReflected`]); the active
//! tab stays internal.
//!
//! - [`SideDrawerState`] holds the state and computes a [`DrawerView`] from it.
//! - [`SideDrawerComponent`] paints that view over the host page while the
//!   drawer is open and maps clicks and keys to open/close/switch-tab.
//!
//! # Usage
//!
//! ```ignore
//! let mut state = SideDrawerState::new();
//! state.set_title(Some("Menu".into()));
//! state.set_slot(Text::from("Home"));
//! state.open();
//! ```
//!
//! [`Effect::AttributeReflected`]: sidedrawer_types::Effect::AttributeReflected

pub mod contact;
mod side_drawer_component;
mod state;
pub mod view;

pub use side_drawer_component::SideDrawerComponent;
pub use state::{DrawerAttributes, SideDrawerState};
