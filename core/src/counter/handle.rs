//! Counter ownership for display sources.
//!
//! A source either owns its counter outright or holds a clone of a
//! [`SharedCounter`] that every other source in the deployment also holds.
//! The host picks one per deployment via [`CounterLifecycle`]; there is no
//! hidden process-wide instance.
//!
//! Shared counters are `Rc<RefCell<_>>` and therefore `!Send`. All calls are
//! expected on the host's event thread.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use match_counter_types::CounterLifecycle;
use match_counter_types::formatting::format_win_rate;

use super::CounterState;

/// One counter shared between every source that holds a clone.
#[derive(Debug, Clone, Default)]
pub struct SharedCounter(Rc<RefCell<CounterState>>);

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: CounterState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }

    /// A new handle onto this counter.
    pub fn handle(&self) -> CounterHandle {
        CounterHandle::Shared(self.clone())
    }

    /// Number of live handles (including this one).
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// True if both values point at the same counter.
    pub fn ptr_eq(&self, other: &SharedCounter) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Owned or shared access to a [`CounterState`].
#[derive(Debug, Clone)]
pub enum CounterHandle {
    Owned(CounterState),
    Shared(SharedCounter),
}

impl Default for CounterHandle {
    fn default() -> Self {
        Self::Owned(CounterState::default())
    }
}

impl CounterHandle {
    /// Handle for a new source under `lifecycle`.
    ///
    /// `shared` is only consulted for [`CounterLifecycle::Shared`].
    pub fn for_lifecycle(lifecycle: CounterLifecycle, shared: &SharedCounter) -> Self {
        match lifecycle {
            CounterLifecycle::PerSource => Self::default(),
            CounterLifecycle::Shared => shared.handle(),
        }
    }

    pub fn lifecycle(&self) -> CounterLifecycle {
        match self {
            Self::Owned(_) => CounterLifecycle::PerSource,
            Self::Shared(_) => CounterLifecycle::Shared,
        }
    }

    /// Read the counter.
    ///
    /// Panics if called re-entrantly from inside [`update`](Self::update) on
    /// the same shared counter.
    pub fn read<T>(&self, f: impl FnOnce(&CounterState) -> T) -> T {
        match self {
            Self::Owned(state) => f(state),
            Self::Shared(shared) => f(&*shared.0.borrow()),
        }
    }

    /// Mutate the counter.
    pub fn update<T>(&mut self, f: impl FnOnce(&mut CounterState) -> T) -> T {
        match self {
            Self::Owned(state) => f(state),
            Self::Shared(shared) => f(&mut *shared.0.borrow_mut()),
        }
    }

    pub fn formatted_text(&self) -> String {
        self.read(CounterState::formatted_text)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.read(CounterSnapshot::from_state)
    }
}

/// Counts and display text for stats widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub wins: i32,
    pub losses: i32,
    pub win_rate: f64,
    /// Win rate as shown by `%r`, e.g. `75.0%`
    pub win_rate_text: String,
    pub text: String,
}

impl CounterSnapshot {
    pub fn from_state(state: &CounterState) -> Self {
        let win_rate = state.win_rate();
        Self {
            wins: state.wins(),
            losses: state.losses(),
            win_rate,
            win_rate_text: format_win_rate(win_rate),
            text: state.formatted_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_handles_are_independent() {
        let shared = SharedCounter::new();
        let mut a = CounterHandle::for_lifecycle(CounterLifecycle::PerSource, &shared);
        let b = CounterHandle::for_lifecycle(CounterLifecycle::PerSource, &shared);

        a.update(CounterState::add_win);
        assert_eq!(a.read(CounterState::wins), 1);
        assert_eq!(b.read(CounterState::wins), 0);
        assert_eq!(shared.holders(), 1);
    }

    #[test]
    fn test_shared_handles_see_each_other() {
        let shared = SharedCounter::new();
        let mut a = CounterHandle::for_lifecycle(CounterLifecycle::Shared, &shared);
        let mut b = CounterHandle::for_lifecycle(CounterLifecycle::Shared, &shared);
        assert_eq!(shared.holders(), 3);

        a.update(CounterState::add_win);
        b.update(CounterState::add_loss);
        assert_eq!(a.read(|s| (s.wins(), s.losses())), (1, 1));
        assert_eq!(b.read(|s| (s.wins(), s.losses())), (1, 1));

        b.update(CounterState::reset);
        assert_eq!(a.read(CounterState::wins), 0);
    }

    #[test]
    fn test_shared_state_outlives_dropped_handle() {
        let shared = SharedCounter::new();
        let mut a = shared.handle();
        a.update(|s| s.set_wins(5));
        drop(a);
        assert_eq!(shared.holders(), 1);
        assert_eq!(shared.handle().read(CounterState::wins), 5);
    }

    #[test]
    fn test_lifecycle_reported() {
        let shared = SharedCounter::new();
        assert_eq!(CounterHandle::default().lifecycle(), CounterLifecycle::PerSource);
        assert_eq!(shared.handle().lifecycle(), CounterLifecycle::Shared);
    }

    #[test]
    fn test_snapshot() {
        let mut state = CounterState::new();
        state.set_format(Some("%w - %l (%r)"));
        state.set_wins(3);
        state.set_losses(1);
        let handle = SharedCounter::from_state(state).handle();

        let snapshot = handle.snapshot();
        assert_eq!(snapshot.wins, 3);
        assert_eq!(snapshot.losses, 1);
        assert_eq!(snapshot.win_rate, 0.75);
        assert_eq!(snapshot.win_rate_text, "75.0%");
        assert_eq!(snapshot.text, "3 - 1 (75.0%)");
    }
}
