//! # Command Execution Layer
//!
//! This module translates application effects (`Effect`) into imperative
//! commands (`Cmd`) and executes them. It is the boundary where the pure
//! drawer state meets side effects such as writing to the system clipboard.
//!
//! - [`Cmd`] is the effectful command type.
//! - [`from_effects`] translates [`Effect`]s into [`Cmd`]s.
//! - [`run_cmds`] executes the commands and reports the outcome on the host
//!   page status line.

use sidedrawer_types::Effect;
use tracing::{info, warn};

use crate::app::App;

/// Side-effectful system commands executed outside of state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Write text into the system clipboard.
    ClipboardSet(String),
}

/// Convert application [`Effect`]s into [`Cmd`] instances.
///
/// Effects with no system side effect are skipped; the runtime handles them
/// itself.
pub fn from_effects(effects: &[Effect]) -> Vec<Cmd> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            // A terminal cannot hand a mailto link to a mail client, so the
            // link is copied instead.
            Effect::OpenLink(link) => Some(Cmd::ClipboardSet(link.clone())),
            Effect::AttributeReflected(_) | Effect::SendMsg(_) | Effect::Quit => None,
        })
        .collect()
}

/// Execute a batch of commands against the application.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) {
    for command in commands {
        match command {
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
        }
    }
}

/// Writes `text` to the system clipboard and reports the outcome on the host page.
fn execute_clipboard_set(app: &mut App, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => {
            info!(link = %text, "copied to clipboard");
            app.host.set_status(format!("Copied {text} to the clipboard"));
        }
        Err(error) => {
            warn!(%error, "clipboard write failed");
            app.host.set_status(format!("Clipboard error: {error}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidedrawer_types::{DrawerAttribute, Msg};

    #[test]
    fn only_links_become_commands() {
        let effects = vec![
            Effect::AttributeReflected(DrawerAttribute::IsOpen(true)),
            Effect::OpenLink("mailto:something@something.com".to_string()),
            Effect::SendMsg(Msg::CloseDrawer),
            Effect::Quit,
        ];
        assert_eq!(
            from_effects(&effects),
            vec![Cmd::ClipboardSet("mailto:something@something.com".to_string())]
        );
    }

    #[test]
    fn no_effects_no_commands() {
        assert!(from_effects(&[]).is_empty());
    }
}
