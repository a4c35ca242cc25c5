use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use snake_engine::log;
use snake_engine::runtime::{Frame, GameRenderer};
use snake_engine::{GameState, TickOutcome};

const HEAD: [char; 2] = ['█', '█'];
const BODY: [char; 2] = ['▓', '▓'];
const FOOD: [char; 2] = ['<', '>'];
pub const CELL_WIDTH: usize = 2;

pub struct TerminalRenderer<W: Write + Send> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn draw(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        for (row, line) in compose(frame).iter().enumerate() {
            queue!(
                self.out,
                MoveTo(0, row as u16),
                Print(line),
                Clear(ClearType::UntilNewLine)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write + Send> GameRenderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) {
        if let Err(e) = self.draw(frame) {
            log!("Failed to draw frame: {}", e);
        }
    }
}

/// Lays out the board, overlay and scoreboard as plain text lines.
pub fn compose(frame: &Frame<'_>) -> Vec<String> {
    let snapshot = &frame.snapshot;
    let width = snapshot.field_size.width.max(0) as usize;
    let height = snapshot.field_size.height.max(0) as usize;
    let inner_width = width * CELL_WIDTH;

    let mut board = vec![vec![' '; inner_width]; height];
    put_cell(&mut board, snapshot.food.x, snapshot.food.y, FOOD);
    for (index, segment) in snapshot.snake.segments().enumerate() {
        let glyph = if index == 0 { HEAD } else { BODY };
        put_cell(&mut board, segment.x, segment.y, glyph);
    }

    if let Some(lines) = overlay_lines(frame) {
        let top = height.saturating_sub(lines.len()) / 2;
        for (offset, line) in lines.iter().enumerate() {
            let Some(row) = board.get_mut(top + offset) else {
                break;
            };
            let text: Vec<char> = format!(" {} ", line).chars().take(inner_width).collect();
            let left = (inner_width - text.len()) / 2;
            row[left..left + text.len()].copy_from_slice(&text);
        }
    }

    let border = format!("+{}+", "-".repeat(inner_width));
    let mut lines = Vec::with_capacity(height + 4);
    lines.push(border.clone());
    for row in board {
        lines.push(format!("|{}|", row.into_iter().collect::<String>()));
    }
    lines.push(border);
    lines.push(format!(
        "Score {}  High {}  Level {}  Speed {:.1}x  Length {}",
        snapshot.score,
        snapshot.high_score,
        snapshot.level,
        snapshot.speed_multiplier,
        snapshot.snake.len()
    ));
    lines.push(format!(
        "{} | sound {} | space start/pause  esc pause  o settings  q quit",
        snapshot.difficulty,
        if frame.sound_enabled { "on" } else { "off" }
    ));
    lines
}

fn put_cell(board: &mut [Vec<char>], x: i32, y: i32, glyph: [char; 2]) {
    if x < 0 || y < 0 {
        return;
    }
    let column = x as usize * CELL_WIDTH;
    if let Some(row) = board.get_mut(y as usize)
        && column + CELL_WIDTH <= row.len()
    {
        row[column..column + CELL_WIDTH].copy_from_slice(&glyph);
    }
}

fn overlay_lines(frame: &Frame<'_>) -> Option<Vec<String>> {
    let snapshot = &frame.snapshot;
    if frame.settings_open {
        return Some(vec![
            "SETTINGS".to_string(),
            format!("Difficulty: {}", snapshot.difficulty),
            "1 slow  2 normal  3 fast".to_string(),
            format!("Sound: {} (m)", if frame.sound_enabled { "on" } else { "off" }),
            "o to close".to_string(),
        ]);
    }

    match snapshot.state {
        GameState::Start => Some(vec![
            "NEO SNAKE".to_string(),
            String::new(),
            "Space to start".to_string(),
            "Arrows or WASD to steer".to_string(),
        ]),
        GameState::Paused => Some(vec![
            "PAUSED".to_string(),
            "Space or Esc to resume".to_string(),
        ]),
        GameState::GameOver => {
            let title = match frame.outcome {
                TickOutcome::BoardFilled { .. } => "BOARD FILLED",
                _ => "GAME OVER",
            };
            let mut lines = vec![title.to_string()];
            if let Some(report) = frame.last_game_over {
                lines.push(format!("Final score: {}", report.final_score));
                if report.new_high_score {
                    lines.push("NEW HIGH SCORE!".to_string());
                }
            }
            lines.push("Space to play again".to_string());
            Some(lines)
        }
        GameState::Playing => None,
    }
}
