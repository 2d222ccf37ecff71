//! Event handling for the Autocomplete widget.

use crate::event::{Key, Modifiers};

use super::render::DropdownHit;
use super::state::Autocomplete;

/// Outward signals raised by the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteEvent {
    /// The input text changed.
    Changed,
    /// A row was committed; the payload is the exact option name.
    Selected(String),
}

impl Autocomplete {
    /// Handle a key press while the widget has focus.
    ///
    /// Keys with ctrl/alt modifiers are ignored so host-level bindings pass
    /// through.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers) -> Option<AutocompleteEvent> {
        if modifiers.ctrl || modifiers.alt {
            return None;
        }

        match key {
            Key::Char(c) => {
                self.insert_char(c);
                Some(AutocompleteEvent::Changed)
            }
            Key::Backspace => self
                .delete_char_before()
                .then_some(AutocompleteEvent::Changed),
            Key::Delete => self.delete_char_at().then_some(AutocompleteEvent::Changed),
            Key::Down => {
                self.open();
                self.highlight_down();
                None
            }
            Key::Up => {
                self.open();
                self.highlight_up();
                None
            }
            Key::Enter => self.select_highlighted().map(AutocompleteEvent::Selected),
            Key::Escape => {
                self.close();
                None
            }
            Key::Left => {
                self.text_cursor_left();
                None
            }
            Key::Right => {
                self.text_cursor_right();
                None
            }
            Key::Home => {
                self.text_cursor_home();
                None
            }
            Key::End => {
                self.text_cursor_end();
                None
            }
            Key::Tab => None,
        }
    }

    /// Handle a mouse press already resolved against the rendered areas.
    ///
    /// A press on the input opens the dropdown, a press on a row commits it
    /// like Enter, and a press anywhere else closes the dropdown without
    /// committing.
    pub fn on_mouse_down(&mut self, hit: DropdownHit) -> Option<AutocompleteEvent> {
        match hit {
            DropdownHit::Input => {
                self.open();
                None
            }
            DropdownHit::Row(row) => self.select_row(row).map(AutocompleteEvent::Selected),
            DropdownHit::Outside => {
                self.close();
                None
            }
        }
    }
}
