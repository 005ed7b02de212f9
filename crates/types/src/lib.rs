//! Shared types for the side drawer workspace.
//!
//! The drawer component and its host talk to each other through two small
//! vocabularies: [`Msg`] carries requests into a component, and [`Effect`]
//! carries side effects back out for the host runtime to execute. The drawer's
//! externally visible state is described by [`DrawerAttribute`] values, which
//! are reflected to the host every time they change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content modes of the drawer body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerTab {
    /// Host-provided content inserted into the drawer's slot.
    #[default]
    Navigation,
    /// Fixed contact information block.
    Contact,
}

impl DrawerTab {
    /// Tabs in the order they appear in the tab bar.
    pub const ALL: [DrawerTab; 2] = [DrawerTab::Navigation, DrawerTab::Contact];

    /// Label rendered on the tab button.
    pub fn label(self) -> &'static str {
        match self {
            DrawerTab::Navigation => "Navigation",
            DrawerTab::Contact => "Contact",
        }
    }

    /// Position of the tab in [`DrawerTab::ALL`].
    pub fn index(self) -> usize {
        match self {
            DrawerTab::Navigation => 0,
            DrawerTab::Contact => 1,
        }
    }

    /// The other tab. The drawer only has two, so cycling in either direction lands here.
    pub fn toggled(self) -> Self {
        match self {
            DrawerTab::Navigation => DrawerTab::Contact,
            DrawerTab::Contact => DrawerTab::Navigation,
        }
    }
}

impl fmt::Display for DrawerTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reflected drawer attribute together with its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "lowercase")]
pub enum DrawerAttribute {
    /// Header text; `None` when the host never set one.
    Title(Option<String>),
    /// Whether the drawer is shown.
    IsOpen(bool),
}

impl DrawerAttribute {
    /// Attribute name as the host sees it.
    pub fn name(&self) -> &'static str {
        match self {
            DrawerAttribute::Title(_) => "title",
            DrawerAttribute::IsOpen(_) => "isopen",
        }
    }
}

impl fmt::Display for DrawerAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawerAttribute::Title(Some(title)) => write!(f, "title=\"{title}\""),
            DrawerAttribute::Title(None) => f.write_str("title=<unset>"),
            DrawerAttribute::IsOpen(open) => write!(f, "isopen={open}"),
        }
    }
}

/// Messages delivered to components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Imperative command: show the drawer.
    OpenDrawer,
    /// Hide the drawer.
    CloseDrawer,
    /// Select the drawer body mode.
    SwitchTab(DrawerTab),
    /// Host assignment of the `title` attribute.
    SetTitle(Option<String>),
    /// Host assignment of the `isopen` attribute.
    SetOpen(bool),
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects returned by components for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A drawer attribute changed and must be made visible to the host.
    AttributeReflected(DrawerAttribute),
    /// Follow a link (e.g. `mailto:`) rendered inside a component.
    OpenLink(String),
    /// Route a message back through the component tree.
    SendMsg(Msg),
    /// Leave the application.
    Quit,
}
