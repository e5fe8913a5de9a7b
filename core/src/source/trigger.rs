//! Discrete host events that mutate a counter.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use match_counter_types::HotkeySettings;

use crate::counter::CounterState;

/// A parameterless counter event fired by a hotkey, button or command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    AddWin,
    AddLoss,
    SubtractWin,
    SubtractLoss,
    Reset,
}

impl Trigger {
    pub const ALL: [Trigger; 5] = [
        Trigger::AddWin,
        Trigger::AddLoss,
        Trigger::SubtractWin,
        Trigger::SubtractLoss,
        Trigger::Reset,
    ];

    /// Stable id, e.g. for property buttons.
    pub fn id(self) -> &'static str {
        match self {
            Self::AddWin => "add_win",
            Self::AddLoss => "add_loss",
            Self::SubtractWin => "subtract_win",
            Self::SubtractLoss => "subtract_loss",
            Self::Reset => "reset",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddWin => "Add Win",
            Self::AddLoss => "Add Loss",
            Self::SubtractWin => "Subtract Win",
            Self::SubtractLoss => "Subtract Loss",
            Self::Reset => "Reset",
        }
    }

    pub fn apply(self, counter: &mut CounterState) {
        match self {
            Self::AddWin => counter.add_win(),
            Self::AddLoss => counter.add_loss(),
            Self::SubtractWin => counter.subtract_win(),
            Self::SubtractLoss => counter.subtract_loss(),
            Self::Reset => counter.reset(),
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown trigger: {0:?}")]
pub struct TriggerParseError(pub String);

impl FromStr for Trigger {
    type Err = TriggerParseError;

    /// Accepts trigger ids and the per-source hotkey ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(trigger) = Self::ALL.into_iter().find(|t| t.id() == s) {
            return Ok(trigger);
        }
        match s {
            HotkeySettings::ADD_WIN_ID => Ok(Self::AddWin),
            HotkeySettings::ADD_LOSS_ID => Ok(Self::AddLoss),
            HotkeySettings::RESET_ID => Ok(Self::Reset),
            _ => Err(TriggerParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        for trigger in Trigger::ALL {
            assert_eq!(trigger.id().parse::<Trigger>(), Ok(trigger));
        }
    }

    #[test]
    fn test_parse_hotkey_ids() {
        assert_eq!("match_counter_win".parse::<Trigger>(), Ok(Trigger::AddWin));
        assert_eq!("match_counter_loss".parse::<Trigger>(), Ok(Trigger::AddLoss));
        assert_eq!("match_counter_reset".parse::<Trigger>(), Ok(Trigger::Reset));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "add_draw".parse::<Trigger>().unwrap_err();
        assert_eq!(err.to_string(), "unknown trigger: \"add_draw\"");
    }

    #[test]
    fn test_apply() {
        let mut counter = CounterState::new();
        Trigger::AddWin.apply(&mut counter);
        Trigger::AddWin.apply(&mut counter);
        Trigger::AddLoss.apply(&mut counter);
        Trigger::SubtractLoss.apply(&mut counter);
        Trigger::SubtractLoss.apply(&mut counter);
        assert_eq!((counter.wins(), counter.losses()), (2, 0));

        Trigger::Reset.apply(&mut counter);
        assert_eq!((counter.wins(), counter.losses()), (0, 0));
    }
}
