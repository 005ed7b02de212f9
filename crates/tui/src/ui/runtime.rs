//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode, mouse capture).
//! - Route input to the main view and execute the `Effect`s it returns.
//! - Deliver every reflected attribute to the host page before the next frame.
//!
//! Event Loop Strategy
//! - A dedicated input thread blocks on `crossterm::event::read()` and forwards
//!   events over a channel, keeping poll and read on the same OS thread.
//! - The loop `select!`s between input and Ctrl+C and re-renders only after an
//!   event was handled.
//!
//! Entry Point
//! - `run_app(config)` is called from `lib::run` and performs setup, event
//!   processing, and teardown.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use sidedrawer_types::{Effect, Msg};
use tokio::{signal, sync::mpsc};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::cmd;
use crate::ui::components::{Component, DrawerAttributes};
use crate::ui::main_component::MainView;
use crate::TuiConfig;

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Whether the event loop keeps running after a batch of effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let sixteen_ms = Duration::from_millis(16);
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(sixteen_ms) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal events");
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    // Throttle mouse move events to once per 16 ms.
                    let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < sixteen_ms {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        // Receiver dropped: the loop has exited.
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal event");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture);
    restore_on_error(entered, disable_raw_mode).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Runs `restore` when `result` is an error, keeping the original error.
fn restore_on_error<T>(result: std::io::Result<T>, restore: impl FnOnce() -> std::io::Result<()>) -> std::io::Result<T> {
    if result.is_err()
        && let Err(error) = restore()
    {
        warn!(%error, "failed to restore terminal after setup error");
    }
    result
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Runs effects until none are left, including effects produced by the
/// messages they send.
///
/// Reflections are applied to the host in the order they were produced.
fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) -> Flow {
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        match effect {
            Effect::AttributeReflected(attribute) => app.apply_reflection(&attribute),
            effect @ Effect::OpenLink(_) => cmd::run_cmds(app, cmd::from_effects(&[effect])),
            Effect::SendMsg(msg) => queue.extend(main_view.handle_message(app, msg)),
            Effect::Quit => {
                debug!("quit requested");
                return Flow::Exit;
            }
        }
    }
    Flow::Continue
}

async fn event_loop(terminal: &mut CrosstermTerminal, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    render(terminal, app, main_view)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let effects = handle_input_event(app, main_view, event);
                if process_effects(app, main_view, effects) == Flow::Exit {
                    break;
                }
            }
            _ = signal::ctrl_c() => { break; }
        }
        render(terminal, app, main_view)?;
    }
    Ok(())
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and restores the terminal even when the loop fails.
pub async fn run_app(config: TuiConfig) -> Result<DrawerAttributes> {
    let mut app = App::new(&config);
    let mut main_view = MainView::new();
    main_view.init()?;

    let mut terminal = setup_terminal()?;
    info!(open = app.drawer.is_open(), "side drawer started");
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;
    outcome?;

    let attributes = app.drawer.attributes();
    info!(title = ?attributes.title, isopen = attributes.isopen, "side drawer stopped");
    Ok(attributes)
}
