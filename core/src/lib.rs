pub mod config;
pub mod counter;
pub mod source;
pub mod template;

// Re-exports for convenience
pub use config::{ConfigError, load_settings, save_settings};
pub use counter::{CounterHandle, CounterSnapshot, CounterState, SharedCounter};
pub use source::{DisplayFrame, MatchCounterSource, SourceHooks, Trigger};
pub use template::{Template, render};
