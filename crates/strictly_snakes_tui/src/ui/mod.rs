//! Stateless UI rendering for snakes and ladders.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_snakes::{BoardTopology, Player as Seat};

use board::{BOARD_HEIGHT, BOARD_WIDTH, draw_board};

const HELP: &str = "R/Space roll · C/Enter continue · N new game · Q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App, topology: &BoardTopology) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board and log
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Snakes - Human vs. Computer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, topology);
    draw_log(frame, body[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Positions, turn counter and the current turn's messages.
fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = app.snapshot();
    let mut lines = vec![
        Line::from(format!("Turn {}", snapshot.turn)),
        Line::from(format!(
            "P1 {}: square {}",
            app.seat_name(Seat::Human),
            snapshot.positions.human
        )),
        Line::from(format!(
            "P2 {}: square {}",
            app.seat_name(Seat::Computer),
            snapshot.positions.computer
        )),
        Line::from(""),
    ];
    lines.extend(snapshot.log.iter().map(|message| Line::from(message.as_str())));

    let title = if app.is_animating() { "Game (moving...)" } else { "Game" };
    let log = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(log, area);
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
