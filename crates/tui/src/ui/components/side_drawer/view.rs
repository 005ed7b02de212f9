//! View tree computed from [`SideDrawerState`](super::SideDrawerState).
//!
//! The tree describes what the drawer shows, independent of where it is
//! painted. Computing it has no side effects; the component paints it only
//! while `visible` is set.

use ratatui::text::Text;
use sidedrawer_types::DrawerTab;

use super::contact::ContactBlock;

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerView<'a> {
    /// Presentational flag driven by `isopen`. The backdrop and panel are
    /// painted only when set.
    pub visible: bool,
    pub header: HeaderView<'a>,
    pub tabs: [TabButtonView; 2],
    pub body: BodyView<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView<'a> {
    pub title: &'a str,
    pub close_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabButtonView {
    pub tab: DrawerTab,
    pub label: &'static str,
    /// The "active" marker; set on exactly one button.
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyView<'a> {
    /// Host-provided slot content.
    Slot(&'a Text<'static>),
    Contact(&'static ContactBlock),
}
