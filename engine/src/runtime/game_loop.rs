use tokio::sync::mpsc;

use crate::log;
use crate::persistence::HighScoreStore;
use super::collaborators::{AudioSink, GameRenderer};
use super::scheduler::TickScheduler;
use super::session::{Command, GameSession, SessionControl};

/// Owns the session until `Quit` arrives or every command sender is gone,
/// then hands it back.
pub async fn run_game_loop<R, A, S>(
    mut session: GameSession<R, A, S>,
    mut command_rx: mpsc::UnboundedReceiver<Command>,
) -> GameSession<R, A, S>
where
    R: GameRenderer,
    A: AudioSink,
    S: HighScoreStore,
{
    let mut scheduler = TickScheduler::new();
    session.render();

    loop {
        scheduler.sync(session.wants_ticks(), session.tick_interval());

        tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else {
                    log!("Command channel closed, leaving game loop");
                    break;
                };
                if session.handle_command(command) == SessionControl::Quit {
                    break;
                }
            }
            _ = scheduler.tick() => {
                session.tick();
            }
        }
    }

    scheduler.stop();
    session
}
