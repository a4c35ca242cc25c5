use std::time::Duration;

use crate::log;
use super::difficulty::Difficulty;
use super::direction_queue::DirectionQueue;
use super::session_rng::SessionRng;
use super::settings::EngineSettings;
use super::snake::Snake;
use super::types::{
    CollisionKind, Direction, FieldSize, GameOverReport, GameState, Position, TickOutcome,
};

/// Read-only view handed to renderers after every step.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub state: GameState,
    pub field_size: FieldSize,
    pub snake: &'a Snake,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub tick_interval: Duration,
    pub speed_multiplier: f64,
    pub difficulty: Difficulty,
}

pub struct GameEngine {
    settings: EngineSettings,
    rng: SessionRng,
    state: GameState,
    snake: Snake,
    food: Position,
    directions: DirectionQueue,
    difficulty: Difficulty,
    score: u32,
    level: u32,
    tick_interval: Duration,
    high_score: u32,
}

impl GameEngine {
    pub fn new(settings: EngineSettings, rng: SessionRng, high_score: u32) -> Self {
        let center = settings.field_size.center();
        let mut engine = Self {
            settings,
            rng,
            state: GameState::Start,
            snake: Snake::new(center),
            food: center,
            directions: DirectionQueue::new(),
            difficulty: settings.difficulty,
            score: 0,
            level: 1,
            tick_interval: settings.speed.base_interval(settings.difficulty),
            high_score,
        };
        engine.reset();
        engine
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.directions.committed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.settings.speed.multiplier(self.difficulty, self.tick_interval)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.state,
            field_size: self.settings.field_size,
            snake: &self.snake,
            food: self.food,
            direction: self.directions.committed(),
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            tick_interval: self.tick_interval,
            speed_multiplier: self.speed_multiplier(),
            difficulty: self.difficulty,
        }
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(self.settings.field_size.center());
        self.directions.reset();
        self.score = 0;
        self.level = 1;
        self.tick_interval = self.settings.speed.base_interval(self.difficulty);
        self.place_food();
    }

    pub fn start(&mut self) -> bool {
        if self.state != GameState::Start {
            return false;
        }
        self.reset();
        self.state = GameState::Playing;
        log!(
            "Game started ({} difficulty, seed {})",
            self.difficulty,
            self.rng.seed()
        );
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.state = GameState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != GameState::Paused {
            return false;
        }
        self.state = GameState::Playing;
        true
    }

    pub fn restart(&mut self) -> bool {
        self.state = GameState::Start;
        self.start()
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        self.directions.propose(direction, self.snake.len())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.tick_interval = self.settings.speed.interval_for(difficulty, self.level);
        log!(
            "Difficulty set to {}, tick interval {}ms",
            difficulty,
            self.tick_interval.as_millis()
        );
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing || self.directions.is_idle() {
            return TickOutcome::Idle;
        }

        let direction = self.directions.commit();
        let new_head = self.snake.head().step(direction);

        if !self.settings.field_size.contains(new_head) {
            return self.collide(CollisionKind::Wall);
        }
        if self.snake.occupies(&new_head) {
            return self.collide(CollisionKind::SelfHit);
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            if !self.consume_food() {
                log!("Board filled at length {}", self.snake.len());
                let report = self.game_over();
                return TickOutcome::BoardFilled { report };
            }
            TickOutcome::Ate {
                score: self.score,
                level: self.level,
                tick_interval: self.tick_interval,
                food: self.food,
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    /// Returns `false` when no free cell is left for the next food.
    fn consume_food(&mut self) -> bool {
        self.score += self.settings.score_increment;
        self.level = self.settings.speed.level_for_score(self.score);
        self.tick_interval = self.settings.speed.interval_for(self.difficulty, self.level);
        log!(
            "Food eaten, score {} level {} interval {}ms",
            self.score,
            self.level,
            self.tick_interval.as_millis()
        );
        self.place_food()
    }

    fn collide(&mut self, kind: CollisionKind) -> TickOutcome {
        log!("Snake hit {:?} at length {}", kind, self.snake.len());
        let report = self.game_over();
        TickOutcome::Collided { kind, report }
    }

    fn game_over(&mut self) -> GameOverReport {
        self.state = GameState::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            log!("New high score: {}", self.high_score);
        }
        GameOverReport {
            final_score: self.score,
            high_score: self.high_score,
            new_high_score,
        }
    }

    /// Rejection sampling first; a near-full board falls back to picking from
    /// the remaining free cells so placement always terminates.
    fn place_food(&mut self) -> bool {
        let field = self.settings.field_size;
        let attempts = field.cell_count().saturating_mul(4).max(16);

        for _ in 0..attempts {
            let candidate = self.rng.random_cell(&field);
            if !self.snake.occupies(&candidate) {
                self.food = candidate;
                return true;
            }
        }

        let free: Vec<_> = (0..field.height)
            .flat_map(|y| (0..field.width).map(move |x| Position::new(x, y)))
            .filter(|cell| !self.snake.occupies(cell))
            .collect();
        if free.is_empty() {
            log!("No free cell left for food");
            return false;
        }
        self.food = free[self.rng.random_range(0..free.len())];
        true
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: &[Position], direction: Direction) {
        self.snake = Snake::from_segments(segments).expect("test snake must be valid");
        self.directions.force(direction);
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Position) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
        self.level = self.settings.speed.level_for_score(score);
    }
}
