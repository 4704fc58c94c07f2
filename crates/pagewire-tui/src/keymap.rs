use std::collections::HashMap;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagewire_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// A key plus the modifiers held with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("cr", KeyCode::Enter),
    ("enter", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("space", KeyCode::Char(' ')),
    ("bs", KeyCode::Backspace),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
];

/// Keys that work whatever the config says
const FIXED: &[(KeyBinding, Action)] = &[
    (KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit),
    // Terminals report Shift+Tab as BackTab, with or without SHIFT
    (KeyBinding::shift(KeyCode::BackTab), Action::FocusPrev),
    (KeyBinding::plain(KeyCode::BackTab), Action::FocusPrev),
    (KeyBinding::plain(KeyCode::Up), Action::MoveUp),
    (KeyBinding::plain(KeyCode::Down), Action::MoveDown),
    (KeyBinding::plain(KeyCode::PageDown), Action::ScrollDown),
    (KeyBinding::plain(KeyCode::PageUp), Action::ScrollUp),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKey(pub String);

impl std::fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid key '{}'", self.0)
    }
}

impl FromStr for KeyBinding {
    type Err = InvalidKey;

    /// Vim notation: `j`, `G` (shift), `<CR>`, `<C-d>`, `<S-Tab>`, `<C-S-x>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidKey(s.to_string());
        let s = s.trim();

        let Some(inner) = s.strip_prefix('<').and_then(|r| r.strip_suffix('>')) else {
            let c = single_char(s).ok_or_else(invalid)?;
            return Ok(if c.is_ascii_uppercase() {
                KeyBinding::shift(KeyCode::Char(c))
            } else {
                KeyBinding::plain(KeyCode::Char(c))
            });
        };

        let mut modifiers = KeyModifiers::NONE;
        let mut rest = inner;
        while let Some((prefix, tail)) = rest.split_once('-').filter(|(_, t)| !t.is_empty()) {
            modifiers |= match prefix {
                "C" | "c" => KeyModifiers::CONTROL,
                "S" | "s" => KeyModifiers::SHIFT,
                "A" | "a" | "M" | "m" => KeyModifiers::ALT,
                _ => return Err(invalid()),
            };
            rest = tail;
        }

        let code = NAMED_KEYS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(rest))
            .map(|(_, code)| *code)
            .or_else(|| single_char(rest).map(|c| KeyCode::Char(c.to_ascii_lowercase())))
            .ok_or_else(invalid)?;
        Ok(KeyBinding::new(code, modifiers))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    chars.next().filter(|_| chars.next().is_none())
}

/// Key lookup built from the `[keymap]` config
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Configured keys in binding order, for the help popup
    help: Vec<(String, Action)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let configured = [
            (&config.quit, Action::Quit),
            (&config.focus_next, Action::FocusNext),
            (&config.focus_prev, Action::FocusPrev),
            (&config.move_down, Action::MoveDown),
            (&config.move_up, Action::MoveUp),
            (&config.select, Action::Select),
            (&config.close, Action::Close),
            (&config.scroll_down, Action::ScrollDown),
            (&config.scroll_up, Action::ScrollUp),
            (&config.help, Action::ToggleHelp),
        ];

        let mut keymap = Self {
            bindings: HashMap::new(),
            help: Vec::new(),
        };
        for (key, action) in configured {
            match key.parse::<KeyBinding>() {
                Ok(binding) => match keymap.bindings.get(&binding) {
                    Some(existing) => warn!(
                        "Key '{}' is already bound to {:?}; not binding {:?}",
                        key, existing, action
                    ),
                    None => {
                        keymap.bindings.insert(binding, action);
                        keymap.help.push((key.trim().to_string(), action));
                    }
                },
                Err(e) => warn!("Skipping {:?}: {}", action, e),
            }
        }

        for (binding, action) in FIXED {
            // Ctrl+C overrides; the rest only fill gaps
            if *action == Action::Quit {
                keymap.bindings.insert(*binding, *action);
            } else {
                keymap.bindings.entry(*binding).or_insert(*action);
            }
        }
        keymap
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Configured key strings and their actions
    pub fn help(&self) -> &[(String, Action)] {
        &self.help
    }

    /// Action for a pressed key
    ///
    /// Some terminals add SHIFT to punctuation like `?`; such keys fall back
    /// to their unmodified binding.
    pub fn lookup(&self, key: KeyEvent) -> Option<&Action> {
        let binding = KeyBinding::from(key);
        self.get(&binding).or_else(|| match binding.code {
            KeyCode::Char(c)
                if binding.modifiers == KeyModifiers::SHIFT && !c.is_ascii_alphabetic() =>
            {
                self.get(&KeyBinding::plain(binding.code))
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn parse(s: &str) -> Option<KeyBinding> {
        s.parse().ok()
    }

    #[test]
    fn test_single_keys() {
        assert_eq!(parse("j"), Some(KeyBinding::plain(KeyCode::Char('j'))));
        assert_eq!(parse("?"), Some(KeyBinding::plain(KeyCode::Char('?'))));
        assert_eq!(parse("G"), Some(KeyBinding::shift(KeyCode::Char('G'))));
        assert_eq!(parse("jk"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn test_bracketed_keys() {
        assert_eq!(parse("<C-d>"), Some(KeyBinding::ctrl(KeyCode::Char('d'))));
        assert_eq!(parse("<CR>"), Some(KeyBinding::plain(KeyCode::Enter)));
        assert_eq!(parse("<esc>"), Some(KeyBinding::plain(KeyCode::Esc)));
        assert_eq!(parse("<S-Tab>"), Some(KeyBinding::shift(KeyCode::Tab)));
        assert_eq!(
            parse("<C-S-x>"),
            Some(KeyBinding::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            ))
        );
        assert_eq!(parse("<C-->"), Some(KeyBinding::ctrl(KeyCode::Char('-'))));
        assert_eq!(parse("<Hyper>"), None);
        assert_eq!(parse("<X-a>"), None);
        assert_eq!(parse("<>"), None);
    }

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        let expect = [
            (KeyBinding::plain(KeyCode::Char('q')), Action::Quit),
            (KeyBinding::plain(KeyCode::Tab), Action::FocusNext),
            (KeyBinding::shift(KeyCode::BackTab), Action::FocusPrev),
            (KeyBinding::ctrl(KeyCode::Char('d')), Action::ScrollDown),
            (KeyBinding::plain(KeyCode::Esc), Action::Close),
            (KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit),
        ];
        for (binding, action) in expect {
            assert_eq!(keymap.get(&binding), Some(&action), "{:?}", binding);
        }
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            help: "q".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(
            keymap.get(&KeyBinding::plain(KeyCode::Char('q'))),
            Some(&Action::Quit)
        );
        assert_eq!(keymap.help().len(), 9);
    }

    #[test]
    fn test_lookup_ignores_shift_on_punctuation() {
        let keymap = Keymap::default();
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('?'),
            KeyModifiers::SHIFT,
            KeyEventKind::Press,
        );
        assert_eq!(keymap.lookup(key), Some(&Action::ToggleHelp));
    }
}
