//! Key bindings for the connection list.
//!
//! Bindings are built in; there is no config file.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ───────────────────────────────────────── actions ───────────

/// All user actions available while browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    First,
    Last,
    Select,
    ToggleHelp,
    Quit,
}

impl Action {
    /// Actions shown in the one-line help bar.
    pub const SHORT_HELP: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::Select,
        Action::Quit,
        Action::ToggleHelp,
    ];

    /// Actions shown when the full help is expanded.
    pub const FULL_HELP: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::PageUp,
        Action::PageDown,
        Action::First,
        Action::Last,
        Action::Select,
        Action::Quit,
        Action::ToggleHelp,
    ];

    /// Short description used in the help bar.
    pub fn label(self) -> &'static str {
        match self {
            Action::MoveUp => "up",
            Action::MoveDown => "down",
            Action::PageUp => "prev page",
            Action::PageDown => "next page",
            Action::First => "go to start",
            Action::Last => "go to end",
            Action::Select => "select",
            Action::ToggleHelp => "more",
            Action::Quit => "quit",
        }
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding — key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT are compared;
    /// SHIFT is already folded into the character for `Char` keys.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// User-friendly display string (e.g. `"↑"`, `"ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("alt+");
        }
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "enter".into(),
            KeyCode::Esc => "esc".into(),
            KeyCode::Home => "home".into(),
            KeyCode::End => "end".into(),
            KeyCode::PageUp => "pgup".into(),
            KeyCode::PageDown => "pgdn".into(),
            KeyCode::F(n) => format!("f{n}"),
            other => format!("{other:?}").to_lowercase(),
        });
        s
    }
}

// ───────────────────────────────────────── key map ───────────

/// Action → key bindings table.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }
}

impl KeyMap {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        let keys = |codes: &[KeyCode]| -> Vec<KeyBind> {
            codes.iter().map(|&c| KeyBind::new(c, n)).collect()
        };

        m.insert(Action::MoveUp, keys(&[Up, Char('k')]));
        m.insert(Action::MoveDown, keys(&[Down, Char('j')]));
        m.insert(Action::PageUp, keys(&[PageUp, Char('b'), Left, Char('h'), Char('u')]));
        m.insert(Action::PageDown, keys(&[PageDown, Char('f'), Right, Char('l'), Char('d')]));
        m.insert(Action::First, keys(&[Home, Char('g')]));
        m.insert(Action::Last, keys(&[End, Char('G')]));
        m.insert(Action::Select, keys(&[Enter]));
        m.insert(Action::ToggleHelp, keys(&[Char('?')]));
        m.insert(Action::Quit, keys(&[Char('q'), Esc]));

        m
    }

    /// Find the action bound to a key event.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binds)| binds.iter().any(|b| b.matches(event)))
            .map(|(&action, _)| action)
    }

    /// Format the binding list for an action (e.g. `"↑/k"`).
    pub fn display_bindings(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => {
                binds.iter().map(|b| b.display()).collect::<Vec<_>>().join("/")
            }
            _ => "unbound".into(),
        }
    }
}

/// Hard-wired interrupt: Ctrl+C quits regardless of bindings.
pub fn is_interrupt(event: KeyEvent) -> bool {
    event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_resolve_navigation_keys() {
        let keys = KeyMap::default();
        assert_eq!(keys.match_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(keys.match_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(keys.match_key(key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(keys.match_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(keys.match_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(keys.match_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn arrows_and_letters_page_through_the_list() {
        let keys = KeyMap::default();
        for code in [KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('u')] {
            assert_eq!(keys.match_key(key(code)), Some(Action::PageUp), "{code:?}");
        }
        for code in [KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')] {
            assert_eq!(keys.match_key(key(code)), Some(Action::PageDown), "{code:?}");
        }
        assert_eq!(keys.display_bindings(Action::PageUp), "pgup/b/←/h/u");
    }

    #[test]
    fn shifted_capital_matches_its_character_binding() {
        let keys = KeyMap::default();
        let ev = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(keys.match_key(ev), Some(Action::Last));
    }

    #[test]
    fn control_modifier_prevents_plain_match() {
        let keys = KeyMap::default();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(keys.match_key(ev), None);
    }

    #[test]
    fn interrupt_is_ctrl_c_only() {
        assert!(is_interrupt(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(key(KeyCode::Char('c'))));
    }

    #[test]
    fn display_joins_all_bindings() {
        let keys = KeyMap::default();
        assert_eq!(keys.display_bindings(Action::MoveUp), "↑/k");
        assert_eq!(keys.display_bindings(Action::Select), "enter");
        assert_eq!(keys.display_bindings(Action::Quit), "q/esc");
        assert_eq!(
            KeyBind::new(KeyCode::Char('c'), KeyModifiers::CONTROL).display(),
            "ctrl+c"
        );
    }

    #[test]
    fn unbound_action_displays_placeholder() {
        let mut keys = KeyMap::default();
        keys.bindings.remove(&Action::PageUp);
        assert_eq!(keys.display_bindings(Action::PageUp), "unbound");
        assert_eq!(keys.match_key(key(KeyCode::PageUp)), None);
    }
}
