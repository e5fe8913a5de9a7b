//! Host-facing counter source
//!
//! A source is one display of a counter inside the host. The host drives it
//! through [`SourceHooks`] and feeds it [`Trigger`]s from hotkeys and buttons.
//! Whether sources share a counter is decided by the [`CounterHandle`] the
//! host passes to [`SourceHooks::on_create`].

mod frame;
mod trigger;


pub use frame::{DisplayFrame, TextAlign, TextSourceSettings};
pub use trigger::{Trigger, TriggerParseError};

use tracing::{debug, info, warn};

use match_counter_types::{CounterSettings, HotkeySettings, TextStyle};

use crate::counter::{CounterHandle, CounterSnapshot, CounterState};
use crate::template::Template;

/// Lifecycle callbacks the host invokes on a source.
pub trait SourceHooks {
    /// Build a source and apply its initial settings.
    fn on_create(name: &str, settings: &CounterSettings, counter: CounterHandle) -> Self
    where
        Self: Sized;

    /// Apply changed settings.
    fn on_update(&mut self, settings: &CounterSettings);

    /// Produce the frame to draw, or `None` when there is nothing to show.
    fn on_render(&self) -> Option<DisplayFrame>;

    /// Tear down the source.
    fn on_destroy(self)
    where
        Self: Sized;
}

/// A counter display source.
#[derive(Debug)]
pub struct MatchCounterSource {
    name: String,
    counter: CounterHandle,
    style: TextStyle,
    hotkeys: HotkeySettings,
}

impl MatchCounterSource {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn counter(&self) -> &CounterHandle {
        &self.counter
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn hotkeys(&self) -> &HotkeySettings {
        &self.hotkeys
    }

    /// Current rendered text, recomputed on every call.
    pub fn text(&self) -> String {
        self.counter.formatted_text()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.counter.snapshot()
    }

    /// Apply a trigger to the counter.
    pub fn handle(&mut self, trigger: Trigger) {
        info!(source = %self.name, %trigger, "Applying trigger");
        let (wins, losses) = self.counter.update(|counter| {
            trigger.apply(counter);
            (counter.wins(), counter.losses())
        });
        debug!(source = %self.name, wins, losses, "Current score");
    }

    /// Fire the trigger bound to `key`, if any. Returns the trigger fired.
    pub fn press_hotkey(&mut self, key: &str) -> Option<Trigger> {
        let hotkey_id = self.hotkeys.lookup(key)?;
        let trigger = match hotkey_id.parse::<Trigger>() {
            Ok(trigger) => trigger,
            Err(e) => {
                warn!(source = %self.name, "Hotkey {key} is bound to {e}");
                return None;
            }
        };
        self.handle(trigger);
        Some(trigger)
    }

    /// Run `f` against the counter, for direct edits such as a spin box.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut CounterState) -> T) -> T {
        self.counter.update(f)
    }
}

impl SourceHooks for MatchCounterSource {
    fn on_create(name: &str, settings: &CounterSettings, counter: CounterHandle) -> Self {
        info!(source = name, lifecycle = ?counter.lifecycle(), "Creating match counter source");

        let mut source = Self {
            name: name.to_string(),
            counter,
            style: settings.style.clone(),
            hotkeys: settings.hotkeys.clone(),
        };
        source.on_update(settings);

        for (id, key) in source.hotkeys.bindings() {
            debug!(source = name, hotkey = id, key, "Hotkey bound");
        }
        info!(source = name, "Match counter source created");
        source
    }

    fn on_update(&mut self, settings: &CounterSettings) {
        info!(source = %self.name, "Updating match counter source");

        let unknown = Template::parse(&settings.format).unknown_directives();
        if !unknown.is_empty() {
            warn!(
                source = %self.name,
                format = %settings.format,
                "Format has unrecognized directives {:?}; they will be shown as written",
                unknown
            );
        }

        self.counter.update(|counter| {
            counter.set_format(Some(&settings.format));
            counter.set_player_name(settings.player_name.as_deref());
            if let Some(wins) = settings.wins {
                counter.set_wins(wins);
            }
            if let Some(losses) = settings.losses {
                counter.set_losses(losses);
            }
        });
        self.style = settings.style.clone();
        self.hotkeys = settings.hotkeys.clone();

        debug!(source = %self.name, format = %settings.format, "Updated");
    }

    fn on_render(&self) -> Option<DisplayFrame> {
        let text = self.text();
        if text.is_empty() {
            debug!(source = %self.name, "Empty text, skipping render");
            return None;
        }

        debug!(source = %self.name, text = %text, "Rendering text");
        Some(DisplayFrame {
            text,
            settings: TextSourceSettings::from(&self.style),
        })
    }

    fn on_destroy(self) {
        info!(source = %self.name, "Destroying match counter source");
        if let CounterHandle::Shared(shared) = &self.counter {
            debug!(
                source = %self.name,
                remaining = shared.holders() - 1,
                "Releasing shared counter"
            );
        }
    }
}
