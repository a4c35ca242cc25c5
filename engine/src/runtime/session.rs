use std::time::Duration;

use crate::log;
use crate::game::{
    Difficulty, Direction, EngineSettings, GameEngine, GameOverReport, GameState, SessionRng,
    TickOutcome,
};
use crate::persistence::HighScoreStore;
use super::collaborators::{AudioCue, AudioSink, Frame, GameRenderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Start,
    Pause,
    Resume,
    Restart,
    /// Space bar: start, pause, resume or restart depending on the state.
    Confirm,
    /// Escape: pause while playing, resume while paused.
    TogglePause,
    OpenSettings,
    CloseSettings,
    SetDifficulty(Difficulty),
    SetSoundEnabled(bool),
    FocusLost,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionControl {
    Continue,
    Quit,
}

/// One engine with its renderer, audio sink and high-score store.
pub struct GameSession<R, A, S>
where
    R: GameRenderer,
    A: AudioSink,
    S: HighScoreStore,
{
    engine: GameEngine,
    renderer: R,
    audio: A,
    store: S,
    sound_enabled: bool,
    settings_open: bool,
    paused_by_settings: bool,
    last_outcome: TickOutcome,
    last_game_over: Option<GameOverReport>,
}

impl<R, A, S> GameSession<R, A, S>
where
    R: GameRenderer,
    A: AudioSink,
    S: HighScoreStore,
{
    pub fn new(
        settings: EngineSettings,
        rng: SessionRng,
        renderer: R,
        audio: A,
        store: S,
        sound_enabled: bool,
    ) -> Self {
        let high_score = match store.load_high_score() {
            Ok(score) => score,
            Err(e) => {
                log!("Failed to load high score, starting from 0: {}", e);
                0
            }
        };

        Self {
            engine: GameEngine::new(settings, rng, high_score),
            renderer,
            audio,
            store,
            sound_enabled,
            settings_open: false,
            paused_by_settings: false,
            last_outcome: TickOutcome::Idle,
            last_game_over: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn last_game_over(&self) -> Option<GameOverReport> {
        self.last_game_over
    }

    /// Ticks are only driven while a game is in progress.
    pub fn wants_ticks(&self) -> bool {
        self.engine.state() == GameState::Playing
    }

    pub fn tick_interval(&self) -> Duration {
        self.engine.tick_interval()
    }

    pub fn handle_command(&mut self, command: Command) -> SessionControl {
        match command {
            Command::Turn(direction) => {
                if self.engine.state() == GameState::Playing {
                    self.engine.set_direction(direction);
                }
            }
            Command::Start => self.start(),
            Command::Pause => {
                self.engine.pause();
            }
            Command::Resume => {
                self.engine.resume();
            }
            Command::Restart => self.restart(),
            Command::Confirm => match self.engine.state() {
                GameState::Start => self.start(),
                GameState::Playing => {
                    self.engine.pause();
                }
                GameState::Paused => {
                    self.engine.resume();
                }
                GameState::GameOver => self.restart(),
            },
            Command::TogglePause => match self.engine.state() {
                GameState::Playing => {
                    self.engine.pause();
                }
                GameState::Paused => {
                    self.engine.resume();
                }
                GameState::Start | GameState::GameOver => {}
            },
            Command::OpenSettings => self.open_settings(),
            Command::CloseSettings => self.close_settings(),
            Command::SetDifficulty(difficulty) => self.engine.set_difficulty(difficulty),
            Command::SetSoundEnabled(enabled) => self.sound_enabled = enabled,
            Command::FocusLost => {
                if self.engine.pause() {
                    log!("Focus lost, game paused");
                }
            }
            Command::Quit => return SessionControl::Quit,
        }

        self.render();
        SessionControl::Continue
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();
        match outcome {
            TickOutcome::Ate { .. } => self.play(AudioCue::Eat),
            TickOutcome::Collided { report, .. } | TickOutcome::BoardFilled { report } => {
                self.finish(report)
            }
            TickOutcome::Idle | TickOutcome::Moved => {}
        }
        self.last_outcome = outcome;
        self.render();
        outcome
    }

    pub fn render(&mut self) {
        let frame = Frame {
            snapshot: self.engine.snapshot(),
            outcome: self.last_outcome,
            last_game_over: self.last_game_over,
            sound_enabled: self.sound_enabled,
            settings_open: self.settings_open,
        };
        self.renderer.render(&frame);
    }

    fn start(&mut self) {
        if self.engine.start() {
            self.on_new_game();
        }
    }

    fn restart(&mut self) {
        if self.engine.restart() {
            self.on_new_game();
        }
    }

    fn on_new_game(&mut self) {
        self.last_outcome = TickOutcome::Idle;
        self.last_game_over = None;
        self.play(AudioCue::Start);
    }

    fn finish(&mut self, report: GameOverReport) {
        log!(
            "Game over, score {} (high score {})",
            report.final_score,
            report.high_score
        );
        if report.new_high_score
            && let Err(e) = self.store.save_high_score(report.high_score)
        {
            log!("Failed to save high score {}: {}", report.high_score, e);
        }
        self.last_game_over = Some(report);
        self.play(AudioCue::GameOver);
    }

    fn open_settings(&mut self) {
        if self.settings_open {
            return;
        }
        if self.engine.pause() {
            self.paused_by_settings = true;
        }
        self.settings_open = true;
    }

    fn close_settings(&mut self) {
        if !self.settings_open {
            return;
        }
        self.settings_open = false;
        if self.paused_by_settings {
            self.paused_by_settings = false;
            self.engine.resume();
        }
    }

    fn play(&mut self, cue: AudioCue) {
        self.audio.play(cue, self.sound_enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FieldSize, Position};
    use crate::persistence::{HighScoreError, MemoryHighScoreStore};
    use crate::runtime::NullRenderer;

    #[derive(Default)]
    struct RecordingAudio {
        cues: Vec<(AudioCue, bool)>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, cue: AudioCue, enabled: bool) {
            self.cues.push((cue, enabled));
        }
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        last_tag: Option<&'static str>,
    }

    impl GameRenderer for CountingRenderer {
        fn render(&mut self, frame: &Frame<'_>) {
            self.frames += 1;
            self.last_tag = Some(frame.outcome.tag());
        }
    }

    struct BrokenStore;

    impl HighScoreStore for BrokenStore {
        fn load_high_score(&self) -> Result<u32, HighScoreError> {
            Err(HighScoreError::Parse("???".to_string()))
        }

        fn save_high_score(&mut self, _score: u32) -> Result<(), HighScoreError> {
            Err(HighScoreError::Io(std::io::Error::other("storage unavailable")))
        }
    }

    type TestSession = GameSession<CountingRenderer, RecordingAudio, MemoryHighScoreStore>;

    fn create_session(high_score: u32) -> TestSession {
        GameSession::new(
            EngineSettings::default(),
            SessionRng::new(5),
            CountingRenderer::default(),
            RecordingAudio::default(),
            MemoryHighScoreStore::new(high_score),
            true,
        )
    }

    fn crash_into_left_wall(session: &mut TestSession) -> TickOutcome {
        session.engine.set_food(Position::new(0, 0));
        session.handle_command(Command::Turn(Direction::Left));
        loop {
            let outcome = session.tick();
            if matches!(outcome, TickOutcome::Collided { .. }) {
                return outcome;
            }
        }
    }

    #[test]
    fn test_loads_high_score_from_store() {
        let session = create_session(75);
        assert_eq!(session.engine().high_score(), 75);
    }

    #[test]
    fn test_broken_store_degrades_to_zero() {
        let mut session = GameSession::new(
            EngineSettings::default(),
            SessionRng::new(5),
            NullRenderer,
            RecordingAudio::default(),
            BrokenStore,
            true,
        );
        assert_eq!(session.engine().high_score(), 0);

        session.handle_command(Command::Start);
        session.engine.set_score(20);
        session.engine.set_food(Position::new(0, 0));
        session.handle_command(Command::Turn(Direction::Left));
        while !matches!(session.tick(), TickOutcome::Collided { .. }) {}
        assert_eq!(session.engine().state(), GameState::GameOver);
        assert_eq!(session.engine().high_score(), 20);
    }

    #[test]
    fn test_new_record_is_saved_exactly_once() {
        let mut session = create_session(100);
        session.handle_command(Command::Start);
        session.engine.set_score(120);

        crash_into_left_wall(&mut session);
        session.tick();

        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().load_high_score().unwrap(), 120);
        let report = session.last_game_over().unwrap();
        assert!(report.new_high_score);
        assert_eq!(report.final_score, 120);
    }

    #[test]
    fn test_no_save_without_record() {
        let mut session = create_session(100);
        session.handle_command(Command::Start);
        crash_into_left_wall(&mut session);
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_audio_cues_follow_game_events() {
        let mut session = create_session(0);
        session.handle_command(Command::SetSoundEnabled(false));
        session.handle_command(Command::Start);
        session.engine.set_snake(&[Position::new(5, 5)], Direction::Right);
        session.engine.set_food(Position::new(6, 5));
        session.tick();
        crash_into_left_wall(&mut session);

        let cues: Vec<_> = session.audio().cues.iter().map(|(cue, _)| *cue).collect();
        assert_eq!(cues, vec![AudioCue::Start, AudioCue::Eat, AudioCue::GameOver]);
        assert!(session.audio().cues.iter().all(|(_, enabled)| !enabled));
    }

    #[test]
    fn test_turns_ignored_outside_play() {
        let mut session = create_session(0);
        session.handle_command(Command::Turn(Direction::Up));
        assert_eq!(session.engine().direction(), Direction::None);

        session.handle_command(Command::Start);
        session.handle_command(Command::Pause);
        session.handle_command(Command::Turn(Direction::Up));
        assert_eq!(session.engine().direction(), Direction::None);
    }

    #[test]
    fn test_confirm_cycles_through_states() {
        let mut session = create_session(0);
        session.handle_command(Command::Confirm);
        assert_eq!(session.engine().state(), GameState::Playing);
        session.handle_command(Command::Confirm);
        assert_eq!(session.engine().state(), GameState::Paused);
        session.handle_command(Command::Confirm);
        assert_eq!(session.engine().state(), GameState::Playing);

        crash_into_left_wall(&mut session);
        session.handle_command(Command::Confirm);
        assert_eq!(session.engine().state(), GameState::Playing);
        assert_eq!(session.last_game_over(), None);
    }

    #[test]
    fn test_toggle_pause_ignored_on_start_screen() {
        let mut session = create_session(0);
        session.handle_command(Command::TogglePause);
        assert_eq!(session.engine().state(), GameState::Start);
    }

    #[test]
    fn test_settings_panel_pauses_and_resumes() {
        let mut session = create_session(0);
        session.handle_command(Command::Start);
        session.handle_command(Command::OpenSettings);
        assert!(session.settings_open());
        assert_eq!(session.engine().state(), GameState::Paused);
        assert!(!session.wants_ticks());

        session.handle_command(Command::SetDifficulty(Difficulty::Fast));
        session.handle_command(Command::CloseSettings);
        assert!(!session.settings_open());
        assert_eq!(session.engine().state(), GameState::Playing);
        assert_eq!(session.tick_interval(), Duration::from_millis(150));
    }

    #[test]
    fn test_settings_close_keeps_manual_pause() {
        let mut session = create_session(0);
        session.handle_command(Command::Start);
        session.handle_command(Command::Pause);
        session.handle_command(Command::OpenSettings);
        session.handle_command(Command::CloseSettings);
        assert_eq!(session.engine().state(), GameState::Paused);
    }

    #[test]
    fn test_focus_lost_pauses_running_game() {
        let mut session = create_session(0);
        session.handle_command(Command::Start);
        session.handle_command(Command::FocusLost);
        assert_eq!(session.engine().state(), GameState::Paused);
    }

    #[test]
    fn test_every_step_is_rendered() {
        let mut session = create_session(0);
        session.handle_command(Command::Start);
        session.engine.set_food(Position::new(0, 0));
        session.handle_command(Command::Turn(Direction::Down));
        session.tick();
        assert_eq!(session.renderer().frames, 3);
        assert_eq!(session.renderer().last_tag, Some("moved"));
    }

    #[test]
    fn test_filled_board_finishes_game_and_saves_record() {
        let settings = EngineSettings {
            field_size: FieldSize { width: 3, height: 1 },
            ..EngineSettings::default()
        };
        let mut session = GameSession::new(
            settings,
            SessionRng::new(5),
            CountingRenderer::default(),
            RecordingAudio::default(),
            MemoryHighScoreStore::new(0),
            true,
        );
        session.handle_command(Command::Start);
        session.engine.set_snake(&[Position::new(1, 0), Position::new(0, 0)], Direction::Right);
        session.engine.set_food(Position::new(2, 0));

        let outcome = session.tick();

        assert!(matches!(outcome, TickOutcome::BoardFilled { .. }));
        assert_eq!(session.engine().state(), GameState::GameOver);
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.last_game_over().map(|report| report.final_score), Some(10));
        assert_eq!(session.renderer().last_tag, Some("filled"));
        let cues: Vec<_> = session.audio().cues.iter().map(|(cue, _)| *cue).collect();
        assert_eq!(cues, vec![AudioCue::Start, AudioCue::GameOver]);
    }

    #[test]
    fn test_quit_stops_without_rendering() {
        let mut session = create_session(0);
        assert_eq!(session.handle_command(Command::Quit), SessionControl::Quit);
        assert_eq!(session.renderer().frames, 0);
    }
}
