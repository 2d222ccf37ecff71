//! Reusable TUI widgets.

pub mod autocomplete;
