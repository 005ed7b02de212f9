//! Component system for the side drawer application.
//!
//! Components are self-contained UI elements that handle their own events and
//! render themselves into a provided `Rect`. State that the host must observe
//! lives on [`App`]; components report anything the runtime has to do as
//! [`Effect`]s.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use sidedrawer_types::{Effect, Msg};

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// # Component Lifecycle
///
/// 1. **Initialization**: `init()` is called once when the component is created
/// 2. **Event Handling**: input arrives through `handle_key_events()` and `handle_mouse_events()`
/// 3. **Messages**: `handle_message()` processes application messages
/// 4. **Rendering**: `render()` draws the component into the provided frame area
pub(crate) trait Component {
    /// Initialize any internal state.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle an application message.
    ///
    /// Returns the effects the runtime should execute.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events while this component has input.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events while this component has input.
    ///
    /// Hit testing uses the areas recorded during the last `render`.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations draw and record hit areas; they never change the
    /// state the host observes.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component has input.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Areas the component splits `area` into when rendering.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}

/// Returns the index of the rect under `(x, y)`, if the point is inside `container`.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, targets: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = ratatui::layout::Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    targets.iter().position(|target| target.contains(position))
}
