//! Per-frame rendering of the root view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::modal;
use crate::widgets::autocomplete;
use crate::widgets::autocomplete::AutocompleteAreas;

/// Spinner frames stepped on each tick while loading.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Widest the input row gets on a large terminal.
const INPUT_WIDTH: u16 = 40;

/// Draw one frame and record the widget areas for mouse dispatch.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(Paragraph::new(title_line(app)), row(area, 0));

    frame.render_widget(
        Paragraph::new(Span::styled(
            app.status.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        row(area, 2),
    );

    if area.height > 5 {
        let help = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "↑/↓ navigate  Enter select  Esc close  Ctrl+Q quit",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )),
            help,
        );
    }

    // The widget goes last so its dropdown overlays the rows below
    let input_row = row(area, 3);
    if input_row.height > 0 {
        let input_area = Rect {
            width: input_row.width.min(INPUT_WIDTH),
            ..input_row
        };
        app.areas = autocomplete::render(frame, input_area, &app.autocomplete, !app.loading);
    } else {
        app.areas = AutocompleteAreas::default();
    }

    if let Some(alert) = &app.alert {
        modal::render(frame, alert);
    }
}

fn title_line(app: &App) -> Line<'static> {
    let title_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    if app.loading {
        let spin = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled("Pokémon Picker ", title_style),
            Span::styled(
                format!("{spin} loading"),
                Style::default().fg(Color::Rgb(162, 119, 255)),
            ),
        ])
    } else {
        Line::from(Span::styled("Pokémon Picker", title_style))
    }
}

/// One-line rect at the given offset from the top, or zero-sized when the
/// terminal is too short.
fn row(area: Rect, offset: u16) -> Rect {
    if offset >= area.height {
        return Rect::new(area.x, area.y, 0, 0);
    }
    Rect::new(area.x, area.y + offset, area.width, 1)
}
