use std::io::{Stdout, Write, stdout};

use snake_engine::runtime::{AudioCue, AudioSink};

const BELL: &str = "\x07";

/// Rings the terminal bell; game over rings twice.
pub struct TerminalBell<W: Write + Send> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write + Send> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: AudioCue, enabled: bool) {
        if !enabled {
            return;
        }
        let rings = match cue {
            AudioCue::Start | AudioCue::Eat => 1,
            AudioCue::GameOver => 2,
        };
        let _ = self.out.write_all(BELL.repeat(rings).as_bytes());
        let _ = self.out.flush();
    }
}
