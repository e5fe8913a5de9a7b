//! Shared configuration types for the match counter.
//!
//! These are the settings a host hands to a counter source. Everything here is
//! plain serde data; behavior lives in `match-counter-core`.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// Template used by a freshly created source.
pub const DEFAULT_FORMAT: &str = "%w - %l (%r)";

/// Player name used when settings don't name one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Font face used when settings leave it blank.
pub const DEFAULT_FONT_FACE: &str = "Arial";

/// Font size used when settings leave it at zero.
pub const DEFAULT_FONT_SIZE: u16 = 256;

/// How counter state is owned across display sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterLifecycle {
    /// Each source owns its own counter
    #[default]
    PerSource,
    /// All sources share one counter; a win on one shows on every display
    Shared,
}

/// Text styling handed to the text-drawing collaborator.
///
/// None of these fields affect the rendered counter string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_face: String,
    pub font_size: u16,
    pub font_flags: u32,
    /// ARGB
    pub color: u32,
    pub outline: bool,
    /// ARGB
    pub outline_color: u32,
    pub outline_size: u32,
    pub align_center: bool,
    /// Fixed text box width in pixels; 0 sizes to the text
    pub custom_width: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_face: DEFAULT_FONT_FACE.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            font_flags: 0,
            color: 0xFFFF_FFFF,
            outline: true,
            outline_color: 0xFF00_0000,
            outline_size: 2,
            align_center: true,
            custom_width: 0,
        }
    }
}

impl TextStyle {
    /// Font face, falling back to the default for a blank entry.
    pub fn effective_font_face(&self) -> &str {
        if self.font_face.trim().is_empty() {
            DEFAULT_FONT_FACE
        } else {
            &self.font_face
        }
    }

    /// Font size, falling back to the default when unset.
    pub fn effective_font_size(&self) -> u16 {
        if self.font_size == 0 {
            DEFAULT_FONT_SIZE
        } else {
            self.font_size
        }
    }
}

/// Optional key bindings for the per-source hotkeys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeySettings {
    pub add_win: Option<String>,
    pub add_loss: Option<String>,
    pub reset: Option<String>,
}

impl HotkeySettings {
    /// Hotkey id for the add-win binding
    pub const ADD_WIN_ID: &'static str = "match_counter_win";
    /// Hotkey id for the add-loss binding
    pub const ADD_LOSS_ID: &'static str = "match_counter_loss";
    /// Hotkey id for the reset binding
    pub const RESET_ID: &'static str = "match_counter_reset";

    /// Configured `(hotkey id, key)` pairs, skipping unbound entries.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (Self::ADD_WIN_ID, self.add_win.as_deref()),
            (Self::ADD_LOSS_ID, self.add_loss.as_deref()),
            (Self::RESET_ID, self.reset.as_deref()),
        ]
        .into_iter()
        .filter_map(|(id, key)| key.map(|k| (id, k)))
    }

    /// Find the hotkey id bound to `key` (case-insensitive).
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.bindings()
            .find(|(_, bound)| bound.eq_ignore_ascii_case(key))
            .map(|(id, _)| id)
    }
}

/// Settings for one counter source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    /// Display template, see the `%w`/`%l`/`%n`/`%r` directives
    pub format: String,
    /// Overrides the counter's player name when present
    pub player_name: Option<String>,
    /// Overrides the win count when present (negative clamps to 0)
    pub wins: Option<i32>,
    /// Overrides the loss count when present (negative clamps to 0)
    pub losses: Option<i32>,
    pub lifecycle: CounterLifecycle,
    pub style: TextStyle,
    pub hotkeys: HotkeySettings,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            player_name: None,
            wins: None,
            losses: None,
            lifecycle: CounterLifecycle::default(),
            style: TextStyle::default(),
            hotkeys: HotkeySettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let settings: CounterSettings = toml::from_str("").unwrap();
        assert_eq!(settings, CounterSettings::default());
        assert_eq!(settings.format, "%w - %l (%r)");
        assert_eq!(settings.lifecycle, CounterLifecycle::PerSource);
        assert_eq!(settings.style.font_face, "Arial");
        assert_eq!(settings.style.color, 0xFFFF_FFFF);
    }

    #[test]
    fn test_parse_settings_toml() {
        let toml = r#"
format = "%n: %w - %l"
player_name = "Alex"
wins = 4
lifecycle = "shared"

[style]
font_face = "Noto Sans"
font_size = 48
custom_width = 320

[hotkeys]
add_win = "F9"
reset = "Ctrl+F12"
"#;

        let settings: CounterSettings = toml::from_str(toml).unwrap();
        assert_eq!(settings.format, "%n: %w - %l");
        assert_eq!(settings.player_name.as_deref(), Some("Alex"));
        assert_eq!(settings.wins, Some(4));
        assert_eq!(settings.losses, None);
        assert_eq!(settings.lifecycle, CounterLifecycle::Shared);
        assert_eq!(settings.style.font_face, "Noto Sans");
        assert_eq!(settings.style.font_size, 48);
        // Unspecified style fields keep their defaults
        assert!(settings.style.outline);
        assert_eq!(settings.hotkeys.add_win.as_deref(), Some("F9"));
        assert_eq!(settings.hotkeys.add_loss, None);
    }

    #[test]
    fn test_effective_font_fallbacks() {
        let style = TextStyle {
            font_face: "  ".to_string(),
            font_size: 0,
            ..TextStyle::default()
        };
        assert_eq!(style.effective_font_face(), "Arial");
        assert_eq!(style.effective_font_size(), 256);
    }

    #[test]
    fn test_hotkey_bindings_skip_unbound() {
        let hotkeys = HotkeySettings {
            add_win: Some("F9".to_string()),
            add_loss: None,
            reset: Some("F12".to_string()),
        };
        let bound: Vec<_> = hotkeys.bindings().collect();
        assert_eq!(
            bound,
            vec![("match_counter_win", "F9"), ("match_counter_reset", "F12")]
        );
        assert_eq!(hotkeys.lookup("f9"), Some("match_counter_win"));
        assert_eq!(hotkeys.lookup("F10"), None);
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = CounterSettings {
            player_name: Some("Sam".to_string()),
            losses: Some(2),
            lifecycle: CounterLifecycle::Shared,
            ..CounterSettings::default()
        };
        let text = toml::to_string(&settings).unwrap();
        let parsed: CounterSettings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
