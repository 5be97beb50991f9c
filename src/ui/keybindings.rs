//! Centralized keyboard shortcuts registry.
//!
//! Single source of truth for the stepper's keyboard shortcuts, consumed by
//! the app event loop (key dispatch) and the nav-bar footer (hint text).

use crossterm::event::KeyCode;

/// Navigation action resolved from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move back one step
    Back,
    /// Move forward one step (completes the flow from the final step)
    Next,
    /// Jump forward two steps
    Skip,
    /// Leave the flow
    Quit,
}

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g., lowercase variant or arrow key)
    pub alt_key: Option<KeyCode>,
    /// Action the shortcut triggers
    pub action: NavAction,
    /// Human-readable description for help/footer text
    pub description: &'static str,
}

/// Static registry of all keyboard shortcuts
pub static SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        key: KeyCode::Char('b'),
        alt_key: Some(KeyCode::Left),
        action: NavAction::Back,
        description: "Back",
    },
    Shortcut {
        key: KeyCode::Char('n'),
        alt_key: Some(KeyCode::Right),
        action: NavAction::Next,
        description: "Next / Complete",
    },
    Shortcut {
        key: KeyCode::Enter,
        alt_key: None,
        action: NavAction::Next,
        description: "Next / Complete",
    },
    Shortcut {
        key: KeyCode::Char('s'),
        alt_key: None,
        action: NavAction::Skip,
        description: "Skip a step",
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: Some(KeyCode::Esc),
        action: NavAction::Quit,
        description: "Quit",
    },
];

/// Resolve a key press to its navigation action, if any
pub fn action_for(key: KeyCode) -> Option<NavAction> {
    SHORTCUTS
        .iter()
        .find(|s| s.key == key || s.alt_key == Some(key))
        .map(|s| s.action)
}

/// The shortcut bound to `action` (the first registered wins for display)
pub fn shortcut_for(action: NavAction) -> &'static Shortcut {
    SHORTCUTS
        .iter()
        .find(|s| s.action == action)
        .unwrap_or(&SHORTCUTS[0])
}

impl Shortcut {
    /// Format key for display (e.g., "b/←", "Enter")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match &self.alt_key {
            Some(alt) => format!("{}/{}", primary, format_keycode(alt)),
            None => primary,
        }
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        _ => format!("{:?}", key),
    }
}
