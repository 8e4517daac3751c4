use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::{COLOR_STATUS, STATUS_ROWS, TOO_SMALL_MESSAGE};
use crate::game::Snapshot;

/// Renders the status row and returns the play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot<'_>) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_ROWS)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(
            snapshot.score,
            snapshot.capacity,
            usize::from(status_area.width),
        ))
        .alignment(Alignment::Left)
        .style(Style::default().fg(COLOR_STATUS)),
        status_area,
    );

    play_area
}

/// Draws the notice shown instead of the board when the terminal is too small.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(TOO_SMALL_MESSAGE)).style(Style::default().fg(COLOR_STATUS)),
        area,
    );
}

fn status_line(score: u32, capacity: usize, available_width: usize) -> Line<'static> {
    let full = format!("POINTS: {score} - MAX: {capacity}");
    if full.width() <= available_width {
        return Line::from(Span::raw(full));
    }

    Line::from(Span::raw(format!("P:{score} M:{capacity}")))
}
