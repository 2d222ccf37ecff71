//! Blocking notification modal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// A blocking notification modal.
///
/// While present it captures all input; Enter or Escape dismiss it.
///
/// # Example
///
/// ```ignore
/// app.alert = Some(Alert::selection("charmander"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    title: String,
    message: String,
}

impl Alert {
    /// Create a new alert with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: "Alert".into(),
            message: message.into(),
        }
    }

    /// Set a custom title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The alert raised after committing an option.
    pub fn selection(name: &str) -> Self {
        Self::new(format!("Selected: {name}")).title("Selection")
    }

    /// Get the alert message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Render the alert centered on the frame, over everything else.
pub fn render(frame: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(162, 119, 255)))
        .style(Style::default().bg(Color::Rgb(30, 30, 40)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/Esc: dismiss",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
