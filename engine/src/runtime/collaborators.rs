use crate::game::{GameOverReport, Snapshot, TickOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    Start,
    Eat,
    GameOver,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub snapshot: Snapshot<'a>,
    pub outcome: TickOutcome,
    pub last_game_over: Option<GameOverReport>,
    pub sound_enabled: bool,
    pub settings_open: bool,
}

pub trait GameRenderer: Send {
    fn render(&mut self, frame: &Frame<'_>);
}

pub trait AudioSink: Send {
    fn play(&mut self, cue: AudioCue, enabled: bool);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue, _enabled: bool) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl GameRenderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}
