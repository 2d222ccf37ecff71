//! Autocomplete widget - text input with a substring-filtered dropdown.

mod events;
mod filter;
mod render;
mod state;

pub use events::AutocompleteEvent;
pub use filter::{FilterMatch, substring_filter};
pub use render::{AutocompleteAreas, DropdownHit, render};
pub use state::Autocomplete;
