//! Theme styling for the drawer and its host page.
//!
//! Palettes map onto semantic [`ThemeRoles`](roles::ThemeRoles); components ask the [`Theme`]
//! trait and the helpers in [`theme_helpers`] for styles instead of
//! hard-coding colors.

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod loader;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use loader::load;
pub use nord::NordTheme;
pub use roles::Theme;
