use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use sidedrawer_types::{DrawerTab, Effect, Msg};

use super::{
    contact::CONTACT,
    view::{BodyView, DrawerView},
};
use crate::{
    app::App,
    ui::{
        components::{Component, find_target_index_by_mouse_position},
        theme::{
            Theme,
            theme_helpers::{self as th, ButtonRenderOptions, render_button},
        },
        utils::drawer_rect,
    },
};

/// Something the pointer can land on while the drawer is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTarget {
    Backdrop,
    CloseButton,
    Tab(DrawerTab),
    EmailLink,
    /// Inside the panel but not on a control.
    Panel,
}

/// Areas recorded by the last render, used for hit testing.
#[derive(Debug, Default, Clone)]
struct DrawerAreas {
    viewport: Rect,
    panel: Rect,
    close: Rect,
    tabs: [Rect; 2],
    email_link: Option<Rect>,
}

/// Renders the side drawer over the host page and turns pointer and key input
/// into drawer interactions.
///
/// The component paints nothing while the drawer is closed; the backdrop
/// covers the whole area it is given and the panel is anchored to the left
/// edge.
#[derive(Debug, Default)]
pub struct SideDrawerComponent {
    areas: DrawerAreas,
}

impl SideDrawerComponent {
    /// Resolves a pointer position against the areas of the last render.
    pub fn hit_test(&self, position: Position) -> Option<DrawerTarget> {
        let areas = &self.areas;
        if !areas.viewport.contains(position) {
            return None;
        }
        if areas.close.contains(position) {
            return Some(DrawerTarget::CloseButton);
        }
        if let Some(index) = find_target_index_by_mouse_position(&areas.panel, &areas.tabs, position.x, position.y) {
            return Some(DrawerTarget::Tab(DrawerTab::ALL[index]));
        }
        if areas.email_link.is_some_and(|link| link.contains(position)) {
            return Some(DrawerTarget::EmailLink);
        }
        if areas.panel.contains(position) {
            return Some(DrawerTarget::Panel);
        }
        Some(DrawerTarget::Backdrop)
    }

    fn switch_tab(app: &mut App, tab: DrawerTab) -> Vec<Effect> {
        app.focus.focus(app.drawer.tab_focus_flag(tab));
        app.update(&Msg::SwitchTab(tab))
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &dyn Theme, view: &DrawerView<'_>, close_focused: bool) -> Rect {
        let [title_area, close_area] = Layout::horizontal([Constraint::Min(1), Constraint::Length(5)]).areas(area);
        let title = Paragraph::new(Line::styled(view.header.title.to_string(), theme.accent_emphasis_style()))
            .block(Block::default().padding(Padding::new(1, 0, 1, 0)));
        frame.render_widget(title, title_area);
        render_button(
            frame,
            close_area,
            view.header.close_label,
            theme,
            ButtonRenderOptions::new(true, close_focused, false, Borders::ALL),
        );
        close_area
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, app: &App, view: &DrawerView<'_>) -> [Rect; 2] {
        let theme = &*app.ctx.theme;
        let rects: [Rect; 2] = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
        for (button, rect) in view.tabs.iter().zip(rects) {
            let focused = app.drawer.tab_focus_flag(button.tab).get();
            render_button(
                frame,
                rect,
                button.label,
                theme,
                ButtonRenderOptions::new(true, focused, button.active, Borders::ALL),
            );
        }
        rects
    }

    /// Draws the body and returns the e-mail link area when the contact block is shown.
    fn render_body(&self, frame: &mut Frame, area: Rect, theme: &dyn Theme, body: BodyView<'_>) -> Option<Rect> {
        let body_area = Block::default().padding(Padding::new(1, 1, 1, 0)).inner(area);
        match body {
            BodyView::Slot(content) => {
                let paragraph = Paragraph::new(content.clone())
                    .style(theme.text_primary_style())
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, body_area);
                None
            }
            BodyView::Contact(contact) => {
                let details = Paragraph::new(contact.details_text(theme)).wrap(Wrap { trim: false });
                let details_height = u16::try_from(details.line_count(body_area.width)).unwrap_or(u16::MAX);
                let [details_area, email_area] =
                    Layout::vertical([Constraint::Length(details_height), Constraint::Min(0)]).areas(body_area);
                frame.render_widget(details, details_area);
                // The e-mail entry is laid out by hand so the link cells are known.
                frame.render_widget(Paragraph::new(contact.email_text(theme, email_area.width)), email_area);
                Some(contact.email_link_area(email_area)).filter(|link| !link.is_empty())
            }
        }
    }
}

impl Component for SideDrawerComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if !app.drawer.is_open() {
            return Vec::new();
        }
        match key.code {
            KeyCode::Esc => app.update(&Msg::CloseDrawer),
            KeyCode::Tab => {
                app.focus.next();
                Vec::new()
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Vec::new()
            }
            KeyCode::Left | KeyCode::Right => {
                let tab = app.drawer.active_tab().toggled();
                Self::switch_tab(app, tab)
            }
            KeyCode::Enter => {
                if app.drawer.close_focus.get() {
                    return app.update(&Msg::CloseDrawer);
                }
                match app.drawer.focused_tab() {
                    Some(tab) => app.update(&Msg::SwitchTab(tab)),
                    None => Vec::new(),
                }
            }
            KeyCode::Char('m') if app.drawer.active_tab() == DrawerTab::Contact => vec![Effect::OpenLink(CONTACT.mailto())],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if !app.drawer.is_open() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        match self.hit_test(Position::new(mouse.column, mouse.row)) {
            Some(DrawerTarget::Backdrop | DrawerTarget::CloseButton) => app.update(&Msg::CloseDrawer),
            Some(DrawerTarget::Tab(tab)) => Self::switch_tab(app, tab),
            Some(DrawerTarget::EmailLink) => vec![Effect::OpenLink(CONTACT.mailto())],
            Some(DrawerTarget::Panel) | None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let view = app.drawer.view();
        if !view.visible {
            self.areas = DrawerAreas::default();
            return;
        }
        let theme = &*app.ctx.theme;

        // Backdrop
        frame.render_widget(Block::default().style(theme.backdrop_style()).dim(), rect);

        let panel = drawer_rect(rect);
        let focused = app.drawer.close_focus.get() || app.drawer.focused_tab().is_some();
        let block = th::block(theme, None, focused);
        let inner = block.inner(panel);
        frame.render_widget(Clear, panel);
        frame.render_widget(block, panel);

        let [header_area, tabs_area, body_area, ..] = self.get_preferred_layout(app, inner)[..] else {
            return;
        };
        let close = self.render_header(frame, header_area, theme, &view, app.drawer.close_focus.get());
        let tabs = self.render_tabs(frame, tabs_area, app, &view);
        let email_link = self.render_body(frame, body_area, theme, view.body);

        self.areas = DrawerAreas {
            viewport: rect,
            panel,
            close,
            tabs,
            email_link,
        };
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        let mut spans = th::build_hint_spans(
            theme,
            &[("Esc", " close  "), ("Tab", " focus  "), ("←/→", " switch tab  "), ("Enter", " activate  ")],
        );
        if app.drawer.active_tab() == DrawerTab::Contact {
            spans.extend(th::build_hint_spans(theme, &[("m", " copy e-mail link  ")]));
        }
        spans.push(Span::styled("click outside to close", theme.text_muted_style().add_modifier(Modifier::ITALIC)));
        spans
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3), // Header: title and close button
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Body
        ])
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TuiConfig, app::App, ui::theme::DraculaTheme};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use sidedrawer_types::DrawerAttribute;

    const WIDTH: u16 = 100;
    const HEIGHT: u16 = 30;

    fn test_app(title: Option<&str>, open: bool) -> App {
        let config = TuiConfig {
            title: title.map(str::to_string),
            open,
            nav_items: vec!["Home".to_string(), "Products".to_string()],
            theme: None,
        };
        App::with_theme(&config, Box::new(DraculaTheme::new()), "dracula")
    }

    fn draw(component: &mut SideDrawerComponent, app: &mut App) -> Buffer {
        draw_sized(component, app, WIDTH, HEIGHT)
    }

    fn draw_sized(component: &mut SideDrawerComponent, app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal
            .draw(|frame| component.render(frame, frame.area(), app))
            .expect("draw drawer");
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn closed_drawer_paints_nothing_and_ignores_clicks() {
        let mut app = test_app(Some("Menu"), false);
        let mut component = SideDrawerComponent::default();
        let text = screen_text(&draw(&mut component, &mut app));
        assert!(!text.contains("Navigation"));
        assert!(!text.contains("Menu"));
        assert_eq!(component.hit_test(Position::new(90, 10)), None);
        assert!(component.handle_mouse_events(&mut app, click(90, 10)).is_empty());
        assert!(!app.drawer.is_open());
    }

    #[test]
    fn open_drawer_shows_header_tabs_and_slot() {
        let mut app = test_app(Some("Menu"), true);
        let mut component = SideDrawerComponent::default();
        let text = screen_text(&draw(&mut component, &mut app));
        assert!(text.contains("Menu"));
        assert!(text.contains("X"));
        assert!(text.contains("Navigation"));
        assert!(text.contains("Contact"));
        assert!(text.contains("Home"));
        assert!(text.contains("Products"));
        assert!(!text.contains("879784556"));
    }

    #[test]
    fn active_tab_button_carries_the_marker() {
        let mut app = test_app(None, true);
        let mut component = SideDrawerComponent::default();
        let buffer = draw(&mut component, &mut app);
        let selection_bg = app.ctx.theme.roles().selection_bg;

        let (nav_x, nav_y) = center(component.areas.tabs[0]);
        let (contact_x, contact_y) = center(component.areas.tabs[1]);
        assert_eq!(buffer[(nav_x, nav_y)].bg, selection_bg);
        assert_ne!(buffer[(contact_x, contact_y)].bg, selection_bg);

        component.handle_mouse_events(&mut app, click(contact_x, contact_y));
        let buffer = draw(&mut component, &mut app);
        assert_ne!(buffer[(nav_x, nav_y)].bg, selection_bg);
        assert_eq!(buffer[(contact_x, contact_y)].bg, selection_bg);
    }

    #[test]
    fn backdrop_and_close_button_close_the_drawer() {
        let mut app = test_app(None, true);
        let mut component = SideDrawerComponent::default();
        draw(&mut component, &mut app);

        let effects = component.handle_mouse_events(&mut app, click(WIDTH - 2, HEIGHT - 2));
        assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(false))]);
        assert!(!app.drawer.is_open());

        app.update(&Msg::OpenDrawer);
        draw(&mut component, &mut app);
        let (close_x, close_y) = center(component.areas.close);
        assert_eq!(component.hit_test(Position::new(close_x, close_y)), Some(DrawerTarget::CloseButton));
        let effects = component.handle_mouse_events(&mut app, click(close_x, close_y));
        assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(false))]);
        assert!(!app.drawer.is_open());
    }

    #[test]
    fn clicks_inside_the_panel_body_do_not_close() {
        let mut app = test_app(None, true);
        let mut component = SideDrawerComponent::default();
        draw(&mut component, &mut app);
        let panel = component.areas.panel;
        let position = Position::new(panel.x + 2, panel.bottom() - 2);
        assert_eq!(component.hit_test(position), Some(DrawerTarget::Panel));
        assert!(component.handle_mouse_events(&mut app, click(position.x, position.y)).is_empty());
        assert!(app.drawer.is_open());
    }

    #[test]
    fn contact_tab_shows_fixed_block_and_link() {
        let mut app = test_app(None, true);
        let mut component = SideDrawerComponent::default();
        draw(&mut component, &mut app);
        let (contact_x, contact_y) = center(component.areas.tabs[1]);
        let effects = component.handle_mouse_events(&mut app, click(contact_x, contact_y));
        assert!(effects.is_empty());
        assert_eq!(app.drawer.active_tab(), DrawerTab::Contact);

        let text = screen_text(&draw(&mut component, &mut app));
        assert!(text.contains("Contact Information"));
        assert!(text.contains("You can reach us via phone or email"));
        assert!(text.contains("Phone: 879784556"));
        assert!(text.contains("E-mail: something@something.com"));
        assert!(!text.contains("Products"));

        let link = component.areas.email_link.expect("link area");
        let effects = component.handle_mouse_events(&mut app, click(link.x, link.y));
        assert_eq!(effects, vec![Effect::OpenLink("mailto:something@something.com".to_string())]);
    }

    #[test]
    fn keyboard_switches_tabs_and_closes() {
        let mut app = test_app(None, true);
        let mut component = SideDrawerComponent::default();
        draw(&mut component, &mut app);

        component.handle_key_events(&mut app, key(KeyCode::Right));
        assert_eq!(app.drawer.active_tab(), DrawerTab::Contact);
        assert_eq!(
            component.handle_key_events(&mut app, key(KeyCode::Char('m'))),
            vec![Effect::OpenLink(CONTACT.mailto())]
        );
        component.handle_key_events(&mut app, key(KeyCode::Left));
        assert_eq!(app.drawer.active_tab(), DrawerTab::Navigation);
        assert!(component.handle_key_events(&mut app, key(KeyCode::Char('m'))).is_empty());

        let effects = component.handle_key_events(&mut app, key(KeyCode::Esc));
        assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(false))]);
        assert!(component.handle_key_events(&mut app, key(KeyCode::Esc)).is_empty());
    }

    #[test]
    fn narrow_terminals_keep_a_clickable_backdrop() {
        for width in [12, 30, 40] {
            let mut app = test_app(None, true);
            let mut component = SideDrawerComponent::default();
            draw_sized(&mut component, &mut app, width, HEIGHT);
            assert!(component.areas.panel.width < width, "width {width}");
            assert_eq!(component.hit_test(Position::new(width - 1, 10)), Some(DrawerTarget::Backdrop));

            let effects = component.handle_mouse_events(&mut app, click(width - 1, 10));
            assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(false))], "width {width}");
            assert!(!app.drawer.is_open());
        }
    }

    #[test]
    fn contact_block_wraps_on_narrow_panels() {
        let mut app = test_app(None, true);
        app.update(&Msg::SwitchTab(DrawerTab::Contact));
        let mut component = SideDrawerComponent::default();
        let text = screen_text(&draw_sized(&mut component, &mut app, 30, HEIGHT));
        assert!(text.contains("You can reach us via"));
        assert!(text.contains("phone or email"));
        assert!(text.contains("Phone: 879784556"));
        assert!(text.contains("something@something.com"));

        let link = component.areas.email_link.expect("link area");
        assert_eq!(link.width, 23);
        let effects = component.handle_mouse_events(&mut app, click(link.x + 22, link.y));
        assert_eq!(effects, vec![Effect::OpenLink(CONTACT.mailto())]);
    }

    #[test]
    fn focus_cycles_and_enter_activates() {
        let mut app = test_app(None, true);
        let mut component = SideDrawerComponent::default();
        assert_eq!(app.drawer.focused_tab(), Some(DrawerTab::Navigation));

        component.handle_key_events(&mut app, key(KeyCode::Tab));
        assert_eq!(app.drawer.focused_tab(), Some(DrawerTab::Contact));
        assert!(component.handle_key_events(&mut app, key(KeyCode::Enter)).is_empty());
        assert_eq!(app.drawer.active_tab(), DrawerTab::Contact);

        component.handle_key_events(&mut app, key(KeyCode::BackTab));
        component.handle_key_events(&mut app, key(KeyCode::BackTab));
        assert!(app.drawer.close_focus.get());
        let effects = component.handle_key_events(&mut app, key(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(false))]);
    }

    #[test]
    fn menu_scenario() {
        let mut app = test_app(Some("Menu"), false);
        let mut component = SideDrawerComponent::default();
        assert!(!app.drawer.is_open());

        let effects = app.update(&Msg::OpenDrawer);
        assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(true))]);
        assert!(app.drawer.is_open());

        draw(&mut component, &mut app);
        let (contact_x, contact_y) = center(component.areas.tabs[1]);
        component.handle_mouse_events(&mut app, click(contact_x, contact_y));
        let view = app.drawer.view();
        assert_eq!(view.body, BodyView::Contact(&CONTACT));
        assert!(view.tabs[1].active);
        assert!(!view.tabs[0].active);

        draw(&mut component, &mut app);
        let effects = component.handle_mouse_events(&mut app, click(WIDTH - 1, 0));
        assert_eq!(effects, vec![Effect::AttributeReflected(DrawerAttribute::IsOpen(false))]);
        assert!(!app.drawer.is_open());
        assert_eq!(app.drawer.active_tab(), DrawerTab::Contact);
    }
}
