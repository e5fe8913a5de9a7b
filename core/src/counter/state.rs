//! Win/loss counter state.
//!
//! Counts never go negative: decrements stop at zero and numeric setters clamp.
//! Text setters take `Option<&str>` so that an absent value from the host is
//! ignored rather than clearing the field.

use serde::{Deserialize, Serialize};

use match_counter_types::DEFAULT_PLAYER_NAME;

use crate::template;

/// Template a bare counter starts with.
pub const DEFAULT_COUNTER_FORMAT: &str = "%n: %w - %l";

/// Wins, losses, player name and display template for one counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCounter")]
pub struct CounterState {
    wins: i32,
    losses: i32,
    player_name: String,
    format: String,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            wins: 0,
            losses: 0,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            format: DEFAULT_COUNTER_FORMAT.to_string(),
        }
    }
}

/// Serialized form of [`CounterState`]. Counts go through the clamping setters.
#[derive(Deserialize)]
struct StoredCounter {
    wins: i32,
    losses: i32,
    player_name: String,
    format: String,
}

impl From<StoredCounter> for CounterState {
    fn from(stored: StoredCounter) -> Self {
        let mut state = Self {
            wins: 0,
            losses: 0,
            player_name: stored.player_name,
            format: stored.format,
        };
        state.set_wins(stored.wins);
        state.set_losses(stored.losses);
        state
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wins(&self) -> i32 {
        self.wins
    }

    pub fn losses(&self) -> i32 {
        self.losses
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    /// Remove one win; no-op at zero.
    pub fn subtract_win(&mut self) {
        if self.wins > 0 {
            self.wins -= 1;
        }
    }

    /// Remove one loss; no-op at zero.
    pub fn subtract_loss(&mut self) {
        if self.losses > 0 {
            self.losses -= 1;
        }
    }

    /// Zero both counts. Format and player name are kept.
    pub fn reset(&mut self) {
        self.wins = 0;
        self.losses = 0;
    }

    pub fn set_wins(&mut self, wins: i32) {
        self.wins = wins.max(0);
    }

    pub fn set_losses(&mut self, losses: i32) {
        self.losses = losses.max(0);
    }

    pub fn set_format(&mut self, format: Option<&str>) {
        if let Some(format) = format {
            self.format = format.to_string();
        }
    }

    pub fn set_player_name(&mut self, name: Option<&str>) {
        if let Some(name) = name {
            self.player_name = name.to_string();
        }
    }

    /// Fraction of recorded matches won, `0.0` when nothing is recorded.
    pub fn win_rate(&self) -> f64 {
        let total = self.wins as i64 + self.losses as i64;
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64
    }

    /// Render the current format against this state.
    pub fn formatted_text(&self) -> String {
        template::render(
            &self.format,
            self.wins,
            self.losses,
            &self.player_name,
            self.win_rate(),
        )
    }
}
