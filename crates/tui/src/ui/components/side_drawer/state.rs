use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{layout::Rect, text::Text};
use serde::Serialize;
use sidedrawer_types::{DrawerAttribute, DrawerTab};

use super::view::{BodyView, DrawerView, HeaderView, TabButtonView};

/// Snapshot of the drawer's reflected attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerAttributes {
    pub title: Option<String>,
    pub isopen: bool,
}

/// State owned by one drawer instance.
///
/// Holds the three semantic cells (open flag, title, active tab), the
/// host-provided slot content, and rat-focus flags for the drawer's buttons.
/// Every setter of a reflected attribute returns the [`DrawerAttribute`] it
/// changed so the caller can forward it to the host; unchanged values return
/// `None`.
#[derive(Debug, Clone)]
pub struct SideDrawerState {
    title: Option<String>,
    is_open: bool,
    active_tab: DrawerTab,
    slot: Text<'static>,

    /// Focus flag for the drawer container in the focus tree.
    pub container_focus: FocusFlag,
    /// Focus flag for the header close button.
    pub close_focus: FocusFlag,
    /// Focus flags for the tab buttons, indexed by [`DrawerTab::index`].
    pub tab_focus: [FocusFlag; 2],
}

impl Default for SideDrawerState {
    fn default() -> Self {
        Self::new()
    }
}

impl SideDrawerState {
    /// Creates a closed drawer showing the Navigation tab with no title and an empty slot.
    pub fn new() -> Self {
        Self {
            title: None,
            is_open: false,
            active_tab: DrawerTab::default(),
            slot: Text::default(),
            container_focus: FocusFlag::named("drawer"),
            close_focus: FocusFlag::named("drawer.close"),
            tab_focus: [FocusFlag::named("drawer.tab.navigation"), FocusFlag::named("drawer.tab.contact")],
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Host assignment of the `title` attribute. No validation is applied.
    pub fn set_title(&mut self, title: Option<String>) -> Option<DrawerAttribute> {
        if self.title == title {
            return None;
        }
        self.title = title;
        Some(DrawerAttribute::Title(self.title.clone()))
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Assignment of the `isopen` attribute, from the host or from inside the drawer.
    pub fn set_open(&mut self, open: bool) -> Option<DrawerAttribute> {
        if self.is_open == open {
            return None;
        }
        self.is_open = open;
        Some(DrawerAttribute::IsOpen(open))
    }

    /// The imperative `open()` command.
    pub fn open(&mut self) -> Option<DrawerAttribute> {
        self.set_open(true)
    }

    /// Close interaction behind the backdrop and the close button.
    pub fn close(&mut self) -> Option<DrawerAttribute> {
        self.set_open(false)
    }

    pub fn active_tab(&self) -> DrawerTab {
        self.active_tab
    }

    /// Switch-tab interaction. Returns `true` when the active tab changed.
    ///
    /// The active tab is internal state and is never reflected.
    pub fn switch_tab(&mut self, tab: DrawerTab) -> bool {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        changed
    }

    pub fn slot(&self) -> &Text<'static> {
        &self.slot
    }

    /// Replaces the content shown in Navigation mode.
    pub fn set_slot(&mut self, content: impl Into<Text<'static>>) {
        self.slot = content.into();
    }

    /// Current values of the reflected attributes.
    pub fn attributes(&self) -> DrawerAttributes {
        DrawerAttributes {
            title: self.title.clone(),
            isopen: self.is_open,
        }
    }

    /// Computes the drawer's view tree from the current state.
    ///
    /// The tree is produced whether or not the drawer is open; `visible`
    /// only tells the renderer whether to paint it.
    pub fn view(&self) -> DrawerView<'_> {
        let tabs = DrawerTab::ALL.map(|tab| TabButtonView {
            tab,
            label: tab.label(),
            active: tab == self.active_tab,
        });
        let body = match self.active_tab {
            DrawerTab::Navigation => BodyView::Slot(self.slot()),
            DrawerTab::Contact => BodyView::Contact(&super::contact::CONTACT),
        };
        DrawerView {
            visible: self.is_open,
            header: HeaderView {
                title: self.title().unwrap_or_default(),
                close_label: "X",
            },
            tabs,
            body,
        }
    }

    /// Focus flag of the tab button for `tab`.
    pub fn tab_focus_flag(&self, tab: DrawerTab) -> &FocusFlag {
        &self.tab_focus[tab.index()]
    }

    /// The tab whose button currently holds keyboard focus.
    pub fn focused_tab(&self) -> Option<DrawerTab> {
        DrawerTab::ALL.into_iter().find(|tab| self.tab_focus_flag(*tab).get())
    }
}

impl HasFocus for SideDrawerState {
    /// Close button first, then the tab buttons in tab-bar order.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.close_focus);
        for flag in &self.tab_focus {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
