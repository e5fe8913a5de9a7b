//! Percent-escape display templates
//!
//! | Directive | Output                                   |
//! |-----------|------------------------------------------|
//! | `%w`      | wins                                     |
//! | `%l`      | losses                                   |
//! | `%n`      | player name, verbatim                    |
//! | `%r`      | win rate, one decimal place, e.g. `75.0%` |
//!
//! Anything else after `%` (including a second `%`) is copied through with its
//! `%`. Templates are scanned by `char`, so a multi-byte character after `%`
//! is treated as a single unknown directive.

mod parser;
mod render;


pub use parser::{Directive, Segment, Template};
pub use render::{RenderContext, render};
