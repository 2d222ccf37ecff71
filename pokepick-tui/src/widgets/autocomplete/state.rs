//! Autocomplete widget state.

use pokepick_api::NamedResource;

use super::filter::{FilterMatch, substring_filter};

/// A text input with a substring-filtered dropdown.
///
/// Pure state: no I/O, no drawing. Key dispatch lives in the events module
/// and drawing in the render module of this widget.
///
/// # Example
///
/// ```ignore
/// let mut search = Autocomplete::with_placeholder("Type to search...");
/// search.set_options(options);
///
/// match search.on_key(Key::Enter, Modifiers::default()) {
///     Some(AutocompleteEvent::Selected(name)) => println!("picked {name}"),
///     _ => {}
/// }
/// ```
#[derive(Debug, Default)]
pub struct Autocomplete {
    /// Current text value
    value: String,
    /// Cursor position in text (byte offset)
    text_cursor: usize,
    /// Placeholder text
    placeholder: String,
    /// Whether the dropdown is open
    open: bool,
    /// Highlighted row in the displayed list, if any
    highlighted: Option<usize>,
    /// All available options
    options: Vec<NamedResource>,
    /// Filtered view: indices into `options` plus match spans
    filtered: Vec<FilterMatch>,
}

impl Autocomplete {
    /// Create a new empty autocomplete.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an autocomplete with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Text value
    // -------------------------------------------------------------------------

    /// Get the current text value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Get the text cursor position (byte offset).
    pub fn text_cursor(&self) -> usize {
        self.text_cursor
    }

    /// Set the text value, moving the cursor to the end and re-deriving the
    /// filtered view. Does not touch the dropdown.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.text_cursor = self.value.len();
        self.refilter();
    }

    // -------------------------------------------------------------------------
    // Text editing
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.text_cursor, c);
        self.text_cursor += c.len_utf8();
        self.after_edit();
    }

    /// Delete the character before the cursor (backspace).
    ///
    /// Returns `true` if the value changed.
    pub fn delete_char_before(&mut self) -> bool {
        if self.text_cursor == 0 {
            return false;
        }

        let prev = self.value[..self.text_cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.value.remove(prev);
        self.text_cursor = prev;
        self.after_edit();
        true
    }

    /// Delete the character at the cursor (delete key).
    ///
    /// Returns `true` if the value changed.
    pub fn delete_char_at(&mut self) -> bool {
        if self.text_cursor >= self.value.len() {
            return false;
        }

        self.value.remove(self.text_cursor);
        self.after_edit();
        true
    }

    /// Move text cursor left.
    pub fn text_cursor_left(&mut self) {
        if self.text_cursor > 0 {
            self.text_cursor = self.value[..self.text_cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    /// Move text cursor right.
    pub fn text_cursor_right(&mut self) {
        if self.text_cursor < self.value.len() {
            self.text_cursor = self.value[self.text_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.text_cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    /// Move text cursor to start.
    pub fn text_cursor_home(&mut self) {
        self.text_cursor = 0;
    }

    /// Move text cursor to end.
    pub fn text_cursor_end(&mut self) {
        self.text_cursor = self.value.len();
    }

    /// Every text mutation refilters, clears the highlight, and opens the
    /// dropdown.
    fn after_edit(&mut self) {
        self.refilter();
        self.highlighted = None;
        self.open = true;
    }

    // -------------------------------------------------------------------------
    // Dropdown open/close state
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dropdown.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dropdown. The value and highlight are left untouched.
    pub fn close(&mut self) {
        self.open = false;
    }

    // -------------------------------------------------------------------------
    // Highlight navigation
    // -------------------------------------------------------------------------

    /// Get the highlighted row in the displayed list.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Move the highlight down one row, wrapping at the bottom. From no
    /// highlight, lands on the first row. No-op on an empty list.
    pub fn highlight_down(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(row) => (row + 1) % len,
            None => 0,
        });
    }

    /// Move the highlight up one row, wrapping at the top. From no
    /// highlight, lands on the last row. No-op on an empty list.
    pub fn highlight_up(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(row) => row - 1,
        });
    }

    /// Commit the highlighted row: write its name into the input, re-derive
    /// the filtered view, and close the dropdown.
    ///
    /// Returns the committed name, or `None` when nothing is highlighted.
    pub fn select_highlighted(&mut self) -> Option<String> {
        let row = self.highlighted?;
        let name = self.filtered_name(row)?.to_string();

        self.set_value(name.clone());
        self.highlighted = None;
        self.close();
        Some(name)
    }

    /// Commit a specific displayed row (mouse click).
    ///
    /// Out-of-range rows, including the inert no-results row, commit nothing.
    pub fn select_row(&mut self, row: usize) -> Option<String> {
        if row >= self.filtered.len() {
            return None;
        }

        self.highlighted = Some(row);
        self.select_highlighted()
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    /// Replace the option list wholesale and re-derive the filtered view.
    pub fn set_options(&mut self, options: Vec<NamedResource>) {
        self.options = options;
        self.refilter();
    }

    /// Get the full option list.
    pub fn options(&self) -> &[NamedResource] {
        &self.options
    }

    /// Get the filtered view (indices and match spans).
    pub fn filtered(&self) -> &[FilterMatch] {
        &self.filtered
    }

    /// Get the number of displayed rows.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Get the option name at a displayed row.
    pub fn filtered_name(&self, row: usize) -> Option<&str> {
        self.filtered
            .get(row)
            .and_then(|m| self.options.get(m.index))
            .map(|option| option.name.as_str())
    }

    /// Re-run the filter with the current value. A highlight that fell off
    /// the end of the displayed list is cleared.
    fn refilter(&mut self) {
        self.filtered = substring_filter(&self.value, &self.options);
        if let Some(row) = self.highlighted
            && row >= self.filtered.len()
        {
            self.highlighted = None;
        }
    }
}
