//! Application state for the side drawer TUI.
//!
//! [`App`] owns the drawer, the host page that embeds it, and the shared
//! context (theme). All drawer mutations go through [`App::update`], which
//! returns the reflection effects the host must observe.

use rat_focus::{Focus, FocusBuilder};
use ratatui::text::{Line, Span, Text};
use sidedrawer_types::{DrawerAttribute, Effect, Msg};
use tracing::{debug, info};

use crate::TuiConfig;
use crate::ui::components::{HostPageState, SideDrawerState};
use crate::ui::theme::{self, Theme};

/// Cross-cutting context shared by all components.
pub struct SharedCtx {
    /// Active theme
    pub theme: Box<dyn Theme>,
    /// Display name of the active theme
    pub theme_label: &'static str,
}

/// The main application state.
pub struct App {
    pub ctx: SharedCtx,
    /// The drawer instance mounted on the host page.
    pub drawer: SideDrawerState,
    /// Host-side view of the drawer.
    pub host: HostPageState,
    /// Keyboard focus across the drawer's buttons.
    pub focus: Focus,
}

impl App {
    /// Builds the application, resolving the theme from `config` and the environment.
    pub fn new(config: &TuiConfig) -> Self {
        let loaded = theme::load(config.theme.as_deref());
        info!(theme = loaded.definition.id, ansi = loaded.definition.is_ansi_fallback, "theme selected");
        Self::with_theme(config, loaded.theme, loaded.definition.label)
    }

    /// Builds the application with an explicit theme.
    pub fn with_theme(config: &TuiConfig, theme: Box<dyn Theme>, theme_label: &'static str) -> Self {
        let mut drawer = SideDrawerState::new();
        drawer.set_slot(navigation_slot(&config.nav_items, &*theme));
        // Startup assignments are observed directly from the snapshot below.
        drawer.set_title(config.title.clone());
        drawer.set_open(config.open);
        let host = HostPageState::new(drawer.attributes());

        let mut app = Self {
            ctx: SharedCtx { theme, theme_label },
            drawer,
            host,
            focus: Focus::default(),
        };
        if app.drawer.is_open() {
            app.rebuild_drawer_focus();
        }
        app
    }

    /// Applies a message to the drawer and returns the reflections it produced.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let reflected = match msg {
            Msg::OpenDrawer => self.drawer.open(),
            Msg::CloseDrawer => self.drawer.close(),
            Msg::SetOpen(open) => self.drawer.set_open(*open),
            Msg::SetTitle(title) => self.drawer.set_title(title.clone()),
            Msg::SwitchTab(tab) => {
                if self.drawer.switch_tab(*tab) {
                    debug!(tab = %tab, "drawer tab switched");
                }
                None
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                None
            }
        };

        if matches!(reflected, Some(DrawerAttribute::IsOpen(true))) {
            self.rebuild_drawer_focus();
        }
        reflected.map(Effect::AttributeReflected).into_iter().collect()
    }

    /// Makes a reflected attribute visible to the host.
    pub fn apply_reflection(&mut self, attribute: &DrawerAttribute) {
        info!(attribute = attribute.name(), value = %attribute, "attribute reflected");
        self.host.observe(attribute);
    }

    /// Rebuilds the focus tree for the drawer and focuses the active tab button.
    fn rebuild_drawer_focus(&mut self) {
        self.focus = FocusBuilder::build_for(&self.drawer);
        let tab = self.drawer.active_tab();
        self.focus.focus(self.drawer.tab_focus_flag(tab));
    }
}

/// Turns the host's navigation entries into slot content.
fn navigation_slot(items: &[String], theme: &dyn Theme) -> Text<'static> {
    let lines: Vec<Line<'static>> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled("› ", theme.accent_primary_style()),
                Span::styled(item.clone(), theme.text_primary_style()),
            ])
        })
        .collect();
    Text::from(lines)
}
