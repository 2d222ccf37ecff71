//! Rendering for the Autocomplete widget.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use super::state::Autocomplete;

/// Maximum dropdown rows drawn below the input.
const MAX_DROPDOWN_ROWS: u16 = 10;

/// Where a mouse press landed relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownHit {
    /// On the input row.
    Input,
    /// On a dropdown row, as a display index into the filtered list.
    Row(usize),
    /// Anywhere outside the widget.
    Outside,
}

/// Screen areas drawn in the last frame, kept for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutocompleteAreas {
    /// The input row.
    pub input: Rect,
    /// The dropdown panel. Zero-sized when the dropdown is closed.
    pub dropdown: Rect,
    /// Display index of the first visible dropdown row.
    pub first_row: usize,
    /// Number of selectable rows drawn (zero when showing the no-results
    /// row).
    pub visible_rows: usize,
}

impl AutocompleteAreas {
    /// Resolve a terminal cell to a part of the widget.
    ///
    /// `None` means the press landed on widget chrome with no action
    /// attached, such as the no-results row.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<DropdownHit> {
        let position = Position::new(x, y);

        if self.input.contains(position) {
            return Some(DropdownHit::Input);
        }

        if self.dropdown.contains(position) {
            let offset = (y - self.dropdown.y) as usize;
            if offset < self.visible_rows {
                return Some(DropdownHit::Row(self.first_row + offset));
            }
            return None;
        }

        Some(DropdownHit::Outside)
    }
}

/// Render the input row and, when open, the dropdown overlay below it.
///
/// The dropdown paints over whatever the host drew underneath, clipped to
/// the frame. Returns the drawn areas for mouse hit-testing.
pub fn render(frame: &mut Frame, area: Rect, state: &Autocomplete, enabled: bool) -> AutocompleteAreas {
    let input_area = Rect {
        height: area.height.min(1),
        ..area
    };
    render_input(frame, input_area, state, enabled);

    let mut areas = AutocompleteAreas {
        input: input_area,
        ..Default::default()
    };

    if state.is_open() {
        render_dropdown(frame, input_area, state, &mut areas);
    }

    areas
}

/// Render the input row: value with a block cursor, or the dimmed
/// placeholder, plus the open/closed indicator on the right.
fn render_input(frame: &mut Frame, area: Rect, state: &Autocomplete, enabled: bool) {
    let value = state.value();
    let is_empty = value.is_empty();

    let base_style = if enabled {
        Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 55))
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .bg(Color::Rgb(40, 40, 55))
            .add_modifier(Modifier::DIM)
    };
    let text_style = if is_empty {
        base_style.add_modifier(Modifier::DIM)
    } else {
        base_style
    };
    let indicator = if state.is_open() { "▲" } else { "▼" };
    let inner_width = area.width.saturating_sub(2) as usize;

    let spans = if enabled && !is_empty {
        // Show the text with a visible cursor block
        let cursor = state.text_cursor().min(value.len());
        let before = &value[..cursor];
        let cursor_char = value[cursor..].chars().next();
        let after_start = cursor + cursor_char.map(|c| c.len_utf8()).unwrap_or(0);
        let after = &value[after_start..];

        let cursor_span = match cursor_char {
            Some(c) => Span::styled(c.to_string(), text_style.add_modifier(Modifier::REVERSED)),
            // Cursor at end - show a block
            None => Span::styled(" ", text_style.add_modifier(Modifier::REVERSED)),
        };

        // Keep the cursor visible when the value overflows the row
        let before_chars = before.chars().count();
        let max_before = inner_width.saturating_sub(1);
        let shown_before: String = if before_chars > max_before {
            before.chars().skip(before_chars - max_before).collect()
        } else {
            before.to_string()
        };

        let remaining = inner_width
            .saturating_sub(shown_before.chars().count())
            .saturating_sub(1);
        let shown_after: String = after.chars().take(remaining).collect();
        let padding = remaining.saturating_sub(shown_after.chars().count());

        vec![
            Span::styled(shown_before, text_style),
            cursor_span,
            Span::styled(shown_after, text_style),
            Span::styled(" ".repeat(padding), base_style),
            Span::styled(" ", base_style),
            Span::styled(indicator, base_style.add_modifier(Modifier::DIM)),
        ]
    } else {
        let display = if is_empty { state.placeholder() } else { value };
        let shown: String = display.chars().take(inner_width).collect();
        let padding = inner_width.saturating_sub(shown.chars().count());

        vec![
            Span::styled(shown, text_style),
            Span::styled(" ".repeat(padding), base_style),
            Span::styled(" ", base_style),
            Span::styled(indicator, base_style.add_modifier(Modifier::DIM)),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the dropdown panel below the input, recording its area.
fn render_dropdown(
    frame: &mut Frame,
    input: Rect,
    state: &Autocomplete,
    areas: &mut AutocompleteAreas,
) {
    let frame_area = frame.area();
    let top = input.y + 1;
    if top >= frame_area.bottom() || input.width == 0 {
        return;
    }
    let available = (frame_area.bottom() - top).min(MAX_DROPDOWN_ROWS) as usize;

    let row_count = state.filtered_count();
    if row_count == 0 {
        let rect = Rect::new(input.x, top, input.width, 1);
        frame.render_widget(Clear, rect);

        let line = Line::from(Span::styled(
            pad_row("No results found", input.width as usize),
            Style::default()
                .fg(Color::DarkGray)
                .bg(Color::Rgb(30, 30, 40))
                .add_modifier(Modifier::DIM),
        ));
        frame.render_widget(Paragraph::new(line), rect);

        areas.dropdown = rect;
        return;
    }

    let visible = row_count.min(available);

    // Bottom-anchored window so the highlighted row stays on screen
    let first_row = match state.highlighted() {
        Some(row) if row + 1 > visible => row + 1 - visible,
        _ => 0,
    };

    let rect = Rect::new(input.x, top, input.width, visible as u16);
    frame.render_widget(Clear, rect);

    let lines: Vec<Line> = (first_row..first_row + visible)
        .map(|row| dropdown_row(state, row, input.width as usize))
        .collect();
    frame.render_widget(Paragraph::new(lines), rect);

    areas.dropdown = rect;
    areas.first_row = first_row;
    areas.visible_rows = visible;
}

/// Build one dropdown row: prefix, matched slice, suffix, padded to the
/// panel width. The matched slice keeps the option's own casing.
fn dropdown_row(state: &Autocomplete, row: usize, width: usize) -> Line<'static> {
    let name = state.filtered_name(row).unwrap_or("");
    let span = state.filtered().get(row).and_then(|m| m.span.clone());
    let is_highlighted = state.highlighted() == Some(row);

    let row_style = if is_highlighted {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(80, 80, 100))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::Rgb(30, 30, 40))
    };
    let match_style = row_style.fg(Color::Yellow);

    let mut spans = match span {
        Some(range) => vec![
            Span::styled(name[..range.start].to_string(), row_style),
            Span::styled(name[range.clone()].to_string(), match_style),
            Span::styled(name[range.end..].to_string(), row_style),
        ],
        None => vec![Span::styled(name.to_string(), row_style)],
    };

    let used = name.chars().count();
    if width > used {
        spans.push(Span::styled(" ".repeat(width - used), row_style));
    }

    Line::from(spans)
}

fn pad_row(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
