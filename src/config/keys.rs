//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Select next cart item
    NextItem,
    /// Select previous cart item
    PrevItem,
    /// Ask to remove the selected item
    RemoveItem,
    /// Ask to empty the cart
    ClearCart,
    /// Quit application
    Quit,
    /// Accept the pending confirmation
    Confirm,
    /// Decline the pending confirmation
    Cancel,
}

impl Action {
    /// Whether this action answers a confirmation rather than driving the cart
    #[must_use]
    pub const fn is_dialog_action(self) -> bool {
        matches!(self, Self::Confirm | Self::Cancel)
    }
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("j".to_string(), Action::NextItem);
        bindings.insert("Down".to_string(), Action::NextItem);
        bindings.insert("k".to_string(), Action::PrevItem);
        bindings.insert("Up".to_string(), Action::PrevItem);
        bindings.insert("d".to_string(), Action::RemoveItem);
        bindings.insert("D".to_string(), Action::ClearCart);
        bindings.insert("q".to_string(), Action::Quit);
        // Dialog keybindings
        bindings.insert("y".to_string(), Action::Confirm);
        bindings.insert("Y".to_string(), Action::Confirm);
        bindings.insert("Enter".to_string(), Action::Confirm);
        bindings.insert("n".to_string(), Action::Cancel);
        bindings.insert("N".to_string(), Action::Cancel);
        bindings.insert("Esc".to_string(), Action::Cancel);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// This ensures that new keybindings added in updates are available
    /// even if the user has an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action, simplest first
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect();
        // Prefer single chars over named keys, lowercase before uppercase
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            match (a_simple, b_simple) {
                (true, false) => std::cmp::Ordering::Less,
                (false, true) => std::cmp::Ordering::Greater,
                _ => b.cmp(a),
            }
        });
        keys
    }

    /// The key shown in hints for an action (e.g. "y" for Confirm)
    #[must_use]
    pub fn primary_key(&self, action: Action) -> Option<String> {
        self.keys_for_action(action).into_iter().next()
    }

    /// Format key(s) for an action for display (e.g., "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        self.keys_for_action(action).join("/")
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::NextItem, "next"),
            (Action::PrevItem, "prev"),
            (Action::RemoveItem, "remove"),
            (Action::ClearCart, "empty"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .filter_map(|(action, label)| {
                self.primary_key(*action)
                    .map(|key| format!("[{key}]{label}"))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
