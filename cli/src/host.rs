//! REPL host state: the settings and the sources built from them.

use std::path::PathBuf;

use tracing::warn;

use match_counter_core::{
    CounterHandle, MatchCounterSource, SharedCounter, SourceHooks, load_settings, save_settings,
};
use match_counter_types::{CounterLifecycle, CounterSettings};

/// Confy application name for the per-user settings file.
pub const APP_NAME: &str = "match-counter";

/// Where settings come from and go back to.
#[derive(Debug, Clone)]
pub enum SettingsStore {
    /// Explicit TOML file
    File(PathBuf),
    /// Per-user config directory via confy
    UserConfig,
}

impl SettingsStore {
    pub fn load(&self) -> Result<CounterSettings, String> {
        match self {
            Self::File(path) => load_settings(path).map_err(|e| e.to_string()),
            Self::UserConfig => confy::load(APP_NAME, None).map_err(|e| e.to_string()),
        }
    }

    pub fn save(&self, settings: &CounterSettings) -> Result<(), String> {
        match self {
            Self::File(path) => save_settings(path, settings).map_err(|e| e.to_string()),
            Self::UserConfig => confy::store(APP_NAME, None, settings).map_err(|e| e.to_string()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::UserConfig => confy::get_configuration_file_path(APP_NAME, None)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "<user config>".to_string()),
        }
    }
}

pub struct Host {
    pub settings: CounterSettings,
    pub store: SettingsStore,
    shared: SharedCounter,
    sources: Vec<MatchCounterSource>,
}

impl Host {
    /// Build `count` sources from `settings`.
    ///
    /// Count overrides in the settings seed the new sources and are then
    /// cleared so later format or name edits don't reset the score.
    pub fn new(mut settings: CounterSettings, store: SettingsStore, count: usize) -> Self {
        let shared = SharedCounter::new();
        let sources = (0..count.max(1))
            .map(|i| {
                let handle = CounterHandle::for_lifecycle(settings.lifecycle, &shared);
                MatchCounterSource::on_create(&format!("source-{i}"), &settings, handle)
            })
            .collect();

        settings.wins = None;
        settings.losses = None;

        Self {
            settings,
            store,
            shared,
            sources,
        }
    }

    pub fn lifecycle(&self) -> CounterLifecycle {
        self.settings.lifecycle
    }

    pub fn sources(&self) -> &[MatchCounterSource] {
        &self.sources
    }

    pub fn source_mut(&mut self, index: usize) -> Result<&mut MatchCounterSource, String> {
        let count = self.sources.len();
        self.sources
            .get_mut(index)
            .ok_or_else(|| format!("error: no source {index} (have {count})\n"))
    }

    /// Push the current settings to every source.
    pub fn apply_settings(&mut self) {
        for source in &mut self.sources {
            source.on_update(&self.settings);
        }
    }

    /// Per-source counters whose score `save` does not record.
    pub fn unsaved_sources(&self) -> usize {
        match self.lifecycle() {
            CounterLifecycle::PerSource => self.sources.len().saturating_sub(1),
            CounterLifecycle::Shared => 0,
        }
    }

    /// Save settings, recording the first source's score.
    pub fn save(&mut self) -> Result<String, String> {
        let unsaved = self.unsaved_sources();
        if unsaved > 0 {
            warn!(unsaved, "Only source-0's score is saved");
        }
        let mut settings = self.settings.clone();
        if let Some(source) = self.sources.first() {
            let snapshot = source.snapshot();
            settings.wins = Some(snapshot.wins);
            settings.losses = Some(snapshot.losses);
        }
        self.store.save(&settings)?;
        Ok(self.store.describe())
    }

    /// Number of sources holding the shared counter.
    pub fn shared_holders(&self) -> usize {
        self.shared.holders() - 1
    }

    pub fn shutdown(self) {
        for source in self.sources {
            source.on_destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_counter_core::Trigger;

    fn host(lifecycle: CounterLifecycle, count: usize) -> Host {
        let settings = CounterSettings {
            lifecycle,
            wins: Some(2),
            ..CounterSettings::default()
        };
        Host::new(settings, SettingsStore::File(PathBuf::from("unused.toml")), count)
    }

    #[test]
    fn test_overrides_seed_then_clear() {
        let mut host = host(CounterLifecycle::PerSource, 2);
        assert_eq!(host.settings.wins, None);
        assert_eq!(host.sources()[1].snapshot().wins, 2);

        host.settings.format = "%w".to_string();
        host.apply_settings();
        assert_eq!(host.sources()[0].text(), "2");
    }

    #[test]
    fn test_shared_host() {
        let mut host = host(CounterLifecycle::Shared, 3);
        assert_eq!(host.shared_holders(), 3);
        host.source_mut(2).unwrap().handle(Trigger::AddLoss);
        assert!(host.sources().iter().all(|s| s.snapshot().losses == 1));
    }

    #[test]
    fn test_source_out_of_range() {
        let mut host = host(CounterLifecycle::PerSource, 1);
        assert!(host.source_mut(1).is_err());
    }

    #[test]
    fn test_unsaved_sources() {
        assert_eq!(host(CounterLifecycle::PerSource, 3).unsaved_sources(), 2);
        assert_eq!(host(CounterLifecycle::PerSource, 1).unsaved_sources(), 0);
        assert_eq!(host(CounterLifecycle::Shared, 3).unsaved_sources(), 0);
    }

    #[test]
    fn test_zero_sources_builds_one() {
        assert_eq!(host(CounterLifecycle::PerSource, 0).sources().len(), 1);
    }
}
