use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::config::{Board, CELL_WIDTH, COLOR_FRUIT, COLOR_SNAKE, GLYPH_FRUIT, GLYPH_SNAKE};
use crate::game::Snapshot;
use crate::snake::Point;
use crate::ui::hud::{render_hud, render_too_small};

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) {
    let area = frame.area();
    if snapshot.too_small {
        render_too_small(frame, area);
        return;
    }

    let play_area = render_hud(frame, area, snapshot);

    render_snake(frame, play_area, snapshot);
    render_fruit(frame, play_area, snapshot);
}

fn render_snake(frame: &mut Frame<'_>, play_area: Rect, snapshot: &Snapshot<'_>) {
    let style = Style::new().fg(COLOR_SNAKE);
    let head_style = style.add_modifier(Modifier::BOLD);

    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.segments.iter().enumerate() {
        // Segments left outside a shrunken board are skipped until they move back in.
        let Some((x, y)) = logical_to_terminal(play_area, snapshot.board, *segment) else {
            continue;
        };

        let style = if index == 0 { head_style } else { style };
        buffer.set_string(x, y, GLYPH_SNAKE, style);
    }
}

fn render_fruit(frame: &mut Frame<'_>, play_area: Rect, snapshot: &Snapshot<'_>) {
    let Some((x, y)) = logical_to_terminal(play_area, snapshot.board, snapshot.fruit) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FRUIT, Style::new().fg(COLOR_FRUIT));
}

/// Maps a grid cell to the terminal column and row of its left half.
fn logical_to_terminal(play_area: Rect, board: Board, point: Point) -> Option<(u16, u16)> {
    if !point.is_within_bounds(board) {
        return None;
    }

    let x_offset = u16::try_from(point.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(point.y).ok()?;

    let x = play_area.x.saturating_add(x_offset);
    let y = play_area.y.saturating_add(y_offset);
    if x >= play_area.right() || y >= play_area.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{logical_to_terminal, render};
    use crate::config::{Board, GLYPH_FRUIT, GLYPH_SNAKE, TOO_SMALL_MESSAGE};
    use crate::game::GameState;
    use crate::snake::Point;

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn cells_map_to_two_terminal_columns() {
        let area = Rect::new(0, 0, 40, 19);
        let board = Board::new(20, 20);

        assert_eq!(logical_to_terminal(area, board, Point::new(3, 4)), Some((6, 4)));
        assert_eq!(logical_to_terminal(area, board, Point::new(20, 0)), None);
        assert_eq!(logical_to_terminal(area, board, Point::new(0, 19)), None);
    }

    #[test]
    fn frame_shows_snake_fruit_and_status() {
        let board = Board::from_terminal(40, 20);
        let mut state = GameState::new_with_seed(board, 1).expect("state should allocate");
        state.fruit = Point::new(2, 1);
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &state.snapshot()))
            .expect("draw should succeed");

        assert!(row_text(&terminal, 0).starts_with(GLYPH_SNAKE));
        assert!(row_text(&terminal, 1).starts_with(&format!("    {GLYPH_FRUIT}")));
        assert!(row_text(&terminal, 19).starts_with("POINTS: 0 - MAX: 64"));
    }

    #[test]
    fn small_terminal_shows_notice() {
        let board = Board::from_terminal(12, 10);
        let state = GameState::new_with_seed(board, 2).expect("state should allocate");
        let mut terminal = Terminal::new(TestBackend::new(12, 10)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &state.snapshot()))
            .expect("draw should succeed");

        assert!(row_text(&terminal, 0).starts_with(&TOO_SMALL_MESSAGE[..12]));
    }
}
