use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};
use sidedrawer_types::{Effect, Msg};

use super::components::{Component, HostPageComponent, SideDrawerComponent};
use crate::app::App;

/// Root view: the host page with the drawer layered on top.
///
/// Input goes to the drawer while it is open and to the host page otherwise,
/// the same way a modal captures input over the page below it.
#[derive(Debug, Default)]
pub struct MainView {
    pub host_view: HostPageComponent,
    pub drawer_view: SideDrawerComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for MainView {
    fn init(&mut self) -> anyhow::Result<()> {
        self.host_view.init()?;
        self.drawer_view.init()
    }

    fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.drawer.is_open() {
            return self.drawer_view.handle_key_events(app, key);
        }
        self.host_view.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.drawer.is_open() {
            return self.drawer_view.handle_mouse_events(app, mouse);
        }
        self.host_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Fill the entire background with the theme's background color for consistency
        let bg_fill = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(bg_fill, area);

        let layout = self.get_preferred_layout(app, area);
        self.host_view.render(frame, layout[0], app);
        // Painted last so the backdrop covers the page.
        self.drawer_view.render(frame, layout[0], app);

        let hints_widget = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints_widget, layout[1]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut hint_spans: Vec<Span> = vec![Span::styled("Hints: ", app.ctx.theme.text_muted_style())];
        if app.drawer.is_open() {
            hint_spans.extend(self.drawer_view.get_hint_spans(app));
        } else {
            hint_spans.extend(self.host_view.get_hint_spans(app));
        }
        hint_spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Min(1),    // Page with drawer overlay
            Constraint::Length(1), // Hints bar
        ])
        .split(area)
        .to_vec()
    }
}
