//! Default keybindings.
//!
//! Global bindings apply on every screen; per-screen bindings are consulted
//! first so a screen can reuse a key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::ViewMode;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    /// Normalize a terminal key event.
    ///
    /// Shift is folded into the character (`K` rather than Shift+`k`), so
    /// only Ctrl and Alt remain as modifiers for character keys.
    pub fn from_event(event: &KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self::new(event.code, modifiers)
    }
}

/// Key-to-command tables.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    pub global: HashMap<KeyCombo, Command>,
    pub per_view: HashMap<ViewMode, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        let global = HashMap::from([
            (KeyCombo::char('q'), Command::Quit),
            (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
            (KeyCombo::plain(KeyCode::Esc), Command::Back),
            (KeyCombo::char('1'), Command::ShowContainers),
            (KeyCombo::char('2'), Command::ShowImages),
            (KeyCombo::char('3'), Command::ShowNetworks),
            (KeyCombo::char('4'), Command::ShowNodes),
            (KeyCombo::char('5'), Command::ShowServices),
            (KeyCombo::char('m'), Command::ShowMonitor),
            (KeyCombo::char('e'), Command::ShowEvents),
            (KeyCombo::char('i'), Command::ShowInfo),
            (KeyCombo::char('d'), Command::ShowDiskUsage),
            (KeyCombo::char('?'), Command::ShowHelp),
            (KeyCombo::plain(KeyCode::Up), Command::MoveUp),
            (KeyCombo::char('k'), Command::MoveUp),
            (KeyCombo::plain(KeyCode::Down), Command::MoveDown),
            (KeyCombo::char('j'), Command::MoveDown),
        ]);

        let per_view = HashMap::from([
            (
                ViewMode::Main,
                HashMap::from([
                    (KeyCombo::char('K'), Command::Kill),
                    (KeyCombo::char('r'), Command::Remove),
                    (KeyCombo::char('S'), Command::RemoveAllStopped),
                ]),
            ),
            (
                ViewMode::Images,
                HashMap::from([
                    (KeyCombo::plain(KeyCode::Enter), Command::OpenSelected),
                    (KeyCombo::char('h'), Command::History),
                    (KeyCombo::char('r'), Command::Remove),
                    (KeyCombo::char('R'), Command::ForceRemove),
                    (KeyCombo::char('D'), Command::RemoveDangling),
                ]),
            ),
            (
                ViewMode::Networks,
                HashMap::from([
                    (KeyCombo::plain(KeyCode::Enter), Command::OpenSelected),
                    (KeyCombo::char('r'), Command::Remove),
                    (KeyCombo::char('s'), Command::SortNetworks),
                ]),
            ),
            (
                ViewMode::Nodes,
                HashMap::from([(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected)]),
            ),
            (
                ViewMode::Services,
                HashMap::from([(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected)]),
            ),
            (
                ViewMode::DiskUsage,
                HashMap::from([(KeyCombo::char('p'), Command::Prune)]),
            ),
        ]);

        Self { global, per_view }
    }
}

impl KeybindingConfig {
    /// The command bound to `event` on `view`, if any. Key releases are
    /// ignored.
    pub fn command_for(&self, event: &KeyEvent, view: ViewMode) -> Option<Command> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let combo = KeyCombo::from_event(event);
        self.per_view
            .get(&view)
            .and_then(|bindings| bindings.get(&combo))
            .or_else(|| self.global.get(&combo))
            .copied()
    }

    /// Bindings shown on the help screen: `(keys, description)`.
    pub fn help_lines() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1 2 3 4 5", "containers, images, networks, nodes, services"),
            ("m e i d", "monitor, events, info, disk usage"),
            ("Up/Down, k/j", "move selection"),
            ("Enter", "inspect image or network, list tasks"),
            ("h", "image history"),
            ("K", "kill container"),
            ("r / R", "remove / force remove image"),
            ("S", "remove all stopped containers"),
            ("D", "remove dangling images"),
            ("p", "prune (disk usage screen)"),
            ("s", "sort networks"),
            ("Esc", "back"),
            ("q", "quit"),
        ]
    }
}

/// Command for `event` on `view` using the default bindings.
pub fn command_for(event: &KeyEvent, view: ViewMode) -> Option<Command> {
    KeybindingConfig::default().command_for(event, view)
}
