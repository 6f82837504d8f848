//! Board grid rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_snakes::{BoardTopology, Player as Seat, ROW_WIDTH, Square, Transition};

use super::center_rect;

/// Columns per square.
const CELL_WIDTH: u16 = 5;

/// Board width including borders.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * ROW_WIDTH as u16 + 2;

/// Board height including borders.
pub const BOARD_HEIGHT: u16 = ROW_WIDTH as u16 + 2;

/// What a single square shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Nothing special; shows the number.
    Plain(Square),
    /// Snake head.
    Snake,
    /// Ladder bottom.
    Ladder,
    /// One token.
    Token(Seat),
    /// Both tokens.
    Both,
}

impl Cell {
    /// Works out what `square` shows. Tokens hide the jump marks beneath them.
    pub fn at(square: Square, human: Square, computer: Square, topology: &BoardTopology) -> Self {
        match (square == human, square == computer) {
            (true, true) => Cell::Both,
            (true, false) => Cell::Token(Seat::Human),
            (false, true) => Cell::Token(Seat::Computer),
            (false, false) => match topology.kind(square) {
                Transition::Snake => Cell::Snake,
                Transition::Ladder => Cell::Ladder,
                Transition::None => Cell::Plain(square),
            },
        }
    }

    fn label(self) -> String {
        let text = match self {
            Cell::Plain(square) => square.to_string(),
            Cell::Snake => "S↓".to_string(),
            Cell::Ladder => "L↑".to_string(),
            Cell::Token(Seat::Human) => "P1".to_string(),
            Cell::Token(Seat::Computer) => "P2".to_string(),
            Cell::Both => "P1P2".to_string(),
        };
        format!("{:>width$}", text, width = CELL_WIDTH as usize)
    }

    fn style(self) -> Style {
        match self {
            Cell::Plain(_) => Style::default().fg(Color::DarkGray),
            Cell::Snake => Style::default().fg(Color::Red),
            Cell::Ladder => Style::default().fg(Color::Green),
            Cell::Token(Seat::Human) | Cell::Both => Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            Cell::Token(Seat::Computer) => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Renders the 10x10 board, top row first, rows snaking in alternate directions.
pub fn draw_board(frame: &mut Frame, area: Rect, app: &App, topology: &BoardTopology) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let human = app.displayed_position(Seat::Human);
    let computer = app.displayed_position(Seat::Computer);

    let lines: Vec<Line> = BoardTopology::layout_rows()
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|square| {
                    let cell = Cell::at(square, human, computer, topology);
                    Span::styled(cell.label(), cell.style())
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().title("Board").borders(Borders::ALL));
    frame.render_widget(board, board_area);
}
