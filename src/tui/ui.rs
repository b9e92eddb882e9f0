//! Stateless rendering for the Reversi board.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_reversi::{Coordinate, Disk, Game, GameStatus, HEIGHT, PlayerControl, WIDTH};

/// Renders the whole screen.
///
/// Cells come from the app's view; turn, controls and outcome come from
/// the flow's game.
pub fn draw(frame: &mut Frame, app: &App, game: &Game) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board and sides
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Reversi")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(28)])
        .split(chunks[1]);
    draw_board(frame, middle[0], app);
    draw_sides(frame, middle[1], app, game);

    let status = Paragraph::new(status_line(app, game))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "←↑↓→ move  Enter place/pass  1/2 toggle script  s skip  r reset  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn status_line(app: &App, game: &Game) -> String {
    if app.confirm_reset() {
        return "Start a new game? (y/n)".to_string();
    }
    if app.pass_pending() {
        let side = game.turn().map(side_name).unwrap_or("Nobody");
        return format!("{} has no move and must pass. Press Enter.", side);
    }
    if !app.status_message().is_empty() {
        return app.status_message().to_string();
    }
    match game.status() {
        GameStatus::Move(side) => format!("{} to move", side_name(side)),
        GameStatus::Won(side) => format!("{} wins! Press 'r' for a new game.", side_name(side)),
        GameStatus::Draw => "Draw! Press 'r' for a new game.".to_string(),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, (WIDTH * 3 + 4) as u16, (HEIGHT + 3) as u16);

    let mut lines = Vec::with_capacity(HEIGHT + 1);
    let header: String = (0..WIDTH).map(|x| format!(" {} ", (b'a' + x as u8) as char)).collect();
    lines.push(Line::from(format!("  {}", header)));

    for y in 0..HEIGHT {
        let mut spans = vec![Span::raw(format!("{} ", y + 1))];
        for x in 0..WIDTH {
            spans.push(cell_span(app, Coordinate::new(x, y)));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, board_area);
}

fn cell_span(app: &App, at: Coordinate) -> Span<'static> {
    let (symbol, base_style) = match app.view().disk_at(at) {
        None => (" · ", Style::default().fg(Color::DarkGray).bg(Color::Green)),
        Some(Disk::Dark) => (
            " ● ",
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Some(Disk::Light) => (
            " ● ",
            Style::default().fg(Color::White).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if at == app.cursor() {
        base_style.bg(Color::Yellow)
    } else if app.animating() == Some(at) {
        base_style.bg(Color::LightGreen)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_sides(frame: &mut Frame, area: Rect, app: &App, game: &Game) {
    let counts = app.view().disk_counts();
    let lines: Vec<Line> = Disk::SIDES
        .iter()
        .flat_map(|&side| side_lines(app, game, side, counts[side.index()]))
        .collect();

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(panel, area);
}

fn side_lines(app: &App, game: &Game, side: Disk, count: usize) -> Vec<Line<'static>> {
    let marker = if game.turn() == Some(side) { "▶ " } else { "  " };
    let control = match game.player_control(side) {
        PlayerControl::Manual => "Manual",
        PlayerControl::Scripted => "Computer",
    };
    let thinking = if app.is_thinking(side) { " thinking…" } else { "" };

    vec![
        Line::from(Span::styled(
            format!("{}{} ({})", marker, side_name(side), count),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  [{}] {}{}", side.index() + 1, control, thinking)),
        Line::from(""),
    ]
}

fn side_name(side: Disk) -> &'static str {
    match side {
        Disk::Dark => "Dark",
        Disk::Light => "Light",
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_reversi::Board;

    #[test]
    fn test_status_prefers_pass_alert() {
        let mut app = App::new();
        app.alert_pass();
        assert!(status_line(&app, &Game::new()).contains("Dark has no move"));
    }

    #[test]
    fn test_status_reports_winner() {
        let mut board = Board::new();
        board.set_disk(Some(Disk::Light), Coordinate::new(0, 0));
        let game = Game::from_parts(None, [PlayerControl::Manual; 2], board);
        assert_eq!(status_line(&App::new(), &game), "Light wins! Press 'r' for a new game.");
    }
}
