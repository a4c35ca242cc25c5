use std::thread::{self, JoinHandle};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use snake_engine::input::swipe_direction;
use snake_engine::{Command, Difficulty, Direction, log};
use tokio::sync::mpsc;

use crate::renderer::CELL_WIDTH;

/// Turns raw terminal events into game commands. Tracks the two toggles the
/// keyboard flips so each key press maps to an explicit command.
pub struct InputMapper {
    settings_open: bool,
    sound_enabled: bool,
    swipe_threshold: u16,
    drag_start: Option<(u16, u16)>,
}

impl InputMapper {
    pub fn new(sound_enabled: bool, swipe_threshold: u16) -> Self {
        Self {
            settings_open: false,
            sound_enabled,
            swipe_threshold,
            drag_start: None,
        }
    }

    pub fn map(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => self.map_key(key),
            Event::Mouse(mouse) => self.map_mouse(mouse),
            Event::FocusLost => Some(Command::FocusLost),
            _ => None,
        }
    }

    fn map_key(&mut self, key: KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let command = match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Turn(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                Command::Turn(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                Command::Turn(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                Command::Turn(Direction::Right)
            }
            KeyCode::Char(' ') => Command::Confirm,
            KeyCode::Esc if self.settings_open => {
                self.settings_open = false;
                Command::CloseSettings
            }
            KeyCode::Esc => Command::TogglePause,
            KeyCode::Char('o') => {
                self.settings_open = !self.settings_open;
                if self.settings_open {
                    Command::OpenSettings
                } else {
                    Command::CloseSettings
                }
            }
            KeyCode::Char('m') => {
                self.sound_enabled = !self.sound_enabled;
                Command::SetSoundEnabled(self.sound_enabled)
            }
            KeyCode::Char('1') => Command::SetDifficulty(Difficulty::Slow),
            KeyCode::Char('2') => Command::SetDifficulty(Difficulty::Normal),
            KeyCode::Char('3') => Command::SetDifficulty(Difficulty::Fast),
            KeyCode::Char('q') => Command::Quit,
            _ => return None,
        };
        Some(command)
    }

    fn map_mouse(&mut self, mouse: MouseEvent) -> Option<Command> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_start = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (start_column, start_row) = self.drag_start.take()?;
                let dx = (mouse.column as i32 - start_column as i32) / CELL_WIDTH as i32;
                let dy = mouse.row as i32 - start_row as i32;
                swipe_direction(dx, dy, self.swipe_threshold).map(Command::Turn)
            }
            _ => None,
        }
    }
}

/// Blocking reads live on their own thread; commands cross into the game
/// loop through the channel only.
pub fn spawn_input_thread(
    mut mapper: InputMapper,
    command_tx: mpsc::UnboundedSender<Command>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(event) => event,
                Err(e) => {
                    log!("Failed to read terminal event: {}", e);
                    let _ = command_tx.send(Command::Quit);
                    break;
                }
            };

            let Some(command) = mapper.map(event) else {
                continue;
            };
            if command_tx.send(command).is_err() || command == Command::Quit {
                break;
            }
        }
    })
}
