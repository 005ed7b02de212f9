use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};
use sidedrawer_types::{Effect, Msg};

use crate::{
    app::App,
    ui::{
        components::Component,
        theme::theme_helpers::{self as th},
    },
};

/// Titles the host cycles through with `t`; `None` clears the attribute.
const TITLE_CHOICES: [Option<&str>; 3] = [Some("Menu"), Some("Browse"), None];

/// Renders the host page and forwards host commands to the drawer.
#[derive(Debug, Default)]
pub struct HostPageComponent;

impl HostPageComponent {
    /// Title assignment following the currently observed one.
    fn next_title(app: &App) -> Option<String> {
        let current = app.host.observed().title.as_deref();
        let next = match TITLE_CHOICES.iter().position(|choice| *choice == current) {
            Some(index) => TITLE_CHOICES[(index + 1) % TITLE_CHOICES.len()],
            None => TITLE_CHOICES[0],
        };
        next.map(str::to_string)
    }

    fn attribute_lines(app: &App) -> Text<'static> {
        let theme = &*app.ctx.theme;
        let observed = app.host.observed();
        let title = match observed.title.as_deref() {
            Some(title) => Span::styled(format!("\"{title}\""), theme.text_primary_style()),
            None => Span::styled("<unset>", theme.text_muted_style()),
        };
        let open_style = if observed.isopen {
            theme.status_success()
        } else {
            theme.text_primary_style()
        };
        Text::from(vec![
            Line::from(vec![Span::styled("title   ", theme.text_secondary_style()), title]),
            Line::from(vec![
                Span::styled("isopen  ", theme.text_secondary_style()),
                Span::styled(observed.isopen.to_string(), open_style),
            ]),
        ])
    }

    fn reflection_lines(app: &App) -> Text<'static> {
        let theme = &*app.ctx.theme;
        let mut lines: Vec<Line<'static>> = app
            .host
            .reflections()
            .map(|entry| Line::styled(format!("• {entry}"), theme.text_primary_style()))
            .collect();
        if lines.is_empty() {
            lines.push(Line::styled("No changes reflected yet.", theme.text_muted_style()));
        }
        Text::from(lines)
    }
}

impl Component for HostPageComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('o') => app.update(&Msg::OpenDrawer),
            // Attribute assignments go through the message path like any host write.
            KeyCode::Char('t') => vec![Effect::SendMsg(Msg::SetTitle(Self::next_title(app)))],
            KeyCode::Char('i') => vec![Effect::SendMsg(Msg::SetOpen(!app.host.observed().isopen))],
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Host page"), false);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let [intro_area, attributes_area, reflections_area, status_area, ..] = self.get_preferred_layout(app, inner)[..] else {
            return;
        };

        let intro = Paragraph::new(Text::from(vec![
            Line::from(vec![
                Span::styled("Press ", theme.text_primary_style()),
                Span::styled("o", theme.accent_emphasis_style()),
                Span::styled(" to open the drawer.", theme.text_primary_style()),
            ]),
            Line::styled(
                format!("Theme: {}", app.ctx.theme_label),
                theme.text_muted_style().add_modifier(Modifier::ITALIC),
            ),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(intro, intro_area);

        let attributes = Paragraph::new(Self::attribute_lines(app)).block(th::block(theme, Some("Reflected attributes"), false));
        frame.render_widget(attributes, attributes_area);

        let reflections = Paragraph::new(Self::reflection_lines(app)).block(th::block(theme, Some("Recent reflections"), false));
        frame.render_widget(reflections, reflections_area);

        if let Some(status) = app.host.status() {
            frame.render_widget(Paragraph::new(Line::styled(status.to_string(), theme.status_success())), status_area);
        }
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("o", " open drawer  "), ("t", " set title  "), ("i", " set isopen  "), ("q", " quit  ")])
    }

    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        Layout::vertical([
            Constraint::Length(3),  // Intro
            Constraint::Length(4),  // Reflected attributes
            Constraint::Length(10), // Recent reflections
            Constraint::Length(1),  // Status line
        ])
        .margin(1)
        .split(area)
        .to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TuiConfig, ui::theme::NordTheme};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app() -> App {
        let config = TuiConfig {
            title: Some("Menu".to_string()),
            ..TuiConfig::default()
        };
        App::with_theme(&config, Box::new(NordTheme::new()), "Nord")
    }

    #[test]
    fn o_calls_open_and_q_quits() {
        let mut app = test_app();
        let mut page = HostPageComponent;
        let effects = page.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::AttributeReflected(sidedrawer_types::DrawerAttribute::IsOpen(true))]);
        assert!(app.drawer.is_open());
        assert!(page.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE)).is_empty());
        assert_eq!(page.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)), vec![Effect::Quit]);
    }

    #[test]
    fn t_cycles_title_assignments() {
        let mut app = test_app();
        let mut page = HostPageComponent;
        let mut assigned = Vec::new();
        for _ in 0..4 {
            let effects = page.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
            let [Effect::SendMsg(Msg::SetTitle(title))] = effects.as_slice() else {
                panic!("expected a title assignment, got {effects:?}");
            };
            assigned.push(title.clone());
            for effect in app.update(&Msg::SetTitle(title.clone())) {
                if let Effect::AttributeReflected(attribute) = effect {
                    app.apply_reflection(&attribute);
                }
            }
        }
        let expected = [Some("Browse"), None, Some("Menu"), Some("Browse")].map(|title| title.map(str::to_string));
        assert_eq!(assigned, expected);
        assert_eq!(app.drawer.title(), Some("Browse"));
    }

    #[test]
    fn i_assigns_isopen_through_the_attribute() {
        let mut app = test_app();
        let mut page = HostPageComponent;
        let effects = page.handle_key_events(&mut app, KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE));
        assert_eq!(effects, vec![Effect::SendMsg(Msg::SetOpen(true))]);
        assert!(!app.drawer.is_open());
    }

    #[test]
    fn renders_observed_attributes() {
        let mut app = test_app();
        let mut page = HostPageComponent;
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
        terminal.draw(|frame| page.render(frame, frame.area(), &mut app)).expect("draw host page");
        let buffer = terminal.backend().buffer();
        let text: String = (0..24)
            .map(|y| (0..80).map(|x| buffer[(x, y)].symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("title   \"Menu\""));
        assert!(text.contains("isopen  false"));
        assert!(text.contains("No changes reflected yet."));
        assert!(text.contains("Theme: Nord"));
    }
}
