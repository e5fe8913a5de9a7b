//! Win/loss counter
//!
//! This module provides:
//! - **State**: wins, losses, player name and display template, with
//!   saturating counts and null-tolerant text setters
//! - **Handles**: owned or shared access to a state, chosen per deployment
//!
//! # Architecture
//!
//! ```text
//!   Trigger (hotkey / button)        Settings (on_update)
//!              │                            │
//!              ▼                            ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │          CounterHandle ── Owned(CounterState)                    │
//! │                      └── Shared(Rc<RefCell<CounterState>>)       │
//! └─────────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                  template::render ──► display text
//! ```

mod handle;
mod state;


pub use handle::{CounterHandle, CounterSnapshot, SharedCounter};
pub use state::{CounterState, DEFAULT_COUNTER_FORMAT};
