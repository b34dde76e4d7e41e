/*!
 * Key combinations and key events.
 *
 * Combination strings use the `modifier+modifier+key` form, with
 * comma-separated synonyms: `"command+shift+z, ctrl+shift+z"`.
 */

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::errors::HotkeyError;

// @const: Named key tokens accepted in combination strings
static NAMED_KEYS: Lazy<HashMap<&'static str, Key>> = Lazy::new(|| {
    HashMap::from([
        ("space", Key::Space),
        ("backspace", Key::Backspace),
        ("delete", Key::Delete),
        ("del", Key::Delete),
        ("enter", Key::Enter),
        ("return", Key::Enter),
        ("esc", Key::Escape),
        ("escape", Key::Escape),
        ("tab", Key::Tab),
        ("up", Key::Up),
        ("down", Key::Down),
        ("left", Key::Left),
        ("right", Key::Right),
        ("home", Key::Home),
        ("end", Key::End),
        ("pageup", Key::PageUp),
        ("pagedown", Key::PageDown),
        ("comma", Key::Char(',')),
        ("plus", Key::Char('+')),
    ])
});

/// A physical key, independent of modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable key. Letters are stored lowercase.
    Char(char),
    Space,
    Backspace,
    Delete,
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key F1-F12
    F(u8),
}

impl Key {
    /// Build a printable key, folding letters to lowercase
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }

    fn parse_token(token: &str) -> Result<Self, HotkeyError> {
        let lower = token.to_ascii_lowercase();
        if let Some(key) = NAMED_KEYS.get(lower.as_str()) {
            return Ok(*key);
        }

        if lower.len() > 1 && lower.starts_with('f') {
            return match lower[1..].parse::<u8>() {
                Ok(n) if (1..=12).contains(&n) => Ok(Key::F(n)),
                _ => Err(HotkeyError::UnknownKey(token.to_string())),
            };
        }

        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Key::char(c)),
            _ => Err(HotkeyError::UnknownKey(token.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(',') => write!(f, "comma"),
            Key::Char('+') => write!(f, "plus"),
            Key::Char(c) => write!(f, "{}", c),
            Key::Space => write!(f, "space"),
            Key::Backspace => write!(f, "backspace"),
            Key::Delete => write!(f, "delete"),
            Key::Enter => write!(f, "enter"),
            Key::Escape => write!(f, "esc"),
            Key::Tab => write!(f, "tab"),
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Left => write!(f, "left"),
            Key::Right => write!(f, "right"),
            Key::Home => write!(f, "home"),
            Key::End => write!(f, "end"),
            Key::PageUp => write!(f, "pageup"),
            Key::PageDown => write!(f, "pagedown"),
            Key::F(n) => write!(f, "f{}", n),
        }
    }
}

/// Held modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Command on macOS, Windows/Super elsewhere
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };
    pub const META: Self = Self {
        meta: true,
        ..Self::NONE
    };

    /// Combine two modifier sets
    pub const fn with(self, other: Self) -> Self {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
            meta: self.meta || other.meta,
        }
    }

    // @returns: true if the token named a modifier and was applied
    fn apply_token(&mut self, token: &str) -> bool {
        match token {
            "shift" => self.shift = true,
            "ctrl" | "control" => self.ctrl = true,
            "alt" | "option" => self.alt = true,
            "command" | "cmd" | "meta" | "super" => self.meta = true,
            _ => return false,
        }
        true
    }
}

/// One key plus the exact set of modifiers that must be held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Modifiers must match exactly: `left` does not fire while command is held
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.key && self.modifiers == event.modifiers
    }
}

impl FromStr for KeyCombo {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let combo = s.trim();
        if combo.is_empty() {
            return Err(HotkeyError::EmptyCombo);
        }

        let mut modifiers = Modifiers::NONE;
        let mut key: Option<Key> = None;

        for token in combo.split('+').map(str::trim) {
            if token.is_empty() {
                return Err(HotkeyError::UnknownKey(combo.to_string()));
            }
            if modifiers.apply_token(&token.to_ascii_lowercase()) {
                continue;
            }
            if key.is_some() {
                return Err(HotkeyError::MultipleKeys {
                    combo: combo.to_string(),
                    extra: token.to_string(),
                });
            }
            key = Some(Key::parse_token(token)?);
        }

        match key {
            Some(key) => Ok(KeyCombo { key, modifiers }),
            None => Err(HotkeyError::MissingKey(combo.to_string())),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.modifiers;
        if m.meta {
            write!(f, "command+")?;
        }
        if m.ctrl {
            write!(f, "ctrl+")?;
        }
        if m.alt {
            write!(f, "alt+")?;
        }
        if m.shift {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// A comma-separated list of synonymous combinations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComboList {
    combos: Vec<KeyCombo>,
}

impl ComboList {
    pub fn combos(&self) -> &[KeyCombo] {
        &self.combos
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.combos.iter().any(|c| c.matches(event))
    }
}

impl FromStr for ComboList {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let combos = s
            .split(',')
            .map(KeyCombo::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { combos })
    }
}

impl fmt::Display for ComboList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, combo) in self.combos.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", combo)?;
        }
        Ok(())
    }
}

/// A single key press delivered to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        let key = match key {
            Key::Char(c) => Key::char(c),
            other => other,
        };
        Self {
            key,
            modifiers,
            default_prevented: false,
        }
    }

    /// Build the event a user would produce by pressing `combo`
    pub fn from_combo(combo: &str) -> Result<Self, HotkeyError> {
        let parsed: KeyCombo = combo.parse()?;
        Ok(Self::new(parsed.key, parsed.modifiers))
    }

    /// Suppress the host's native action for this key press
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
