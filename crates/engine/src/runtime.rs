//! Async driver: runs a session on a tokio timer.
//!
//! Input and ticks are multiplexed with `select!` on a single task, so the
//! game state has one owner and ticks can never overlap. The sleep deadline
//! is reset after every tick using the interval in effect at that moment,
//! which is how a speed change restarts the timer. The first deadline honours
//! time already fed to the session through `Session::update`.

use tokio::sync::mpsc;
use tokio::time::{sleep, Duration, Instant};

use crate::session::Session;
use crate::sink::{RenderSink, TerminationSink};
use crate::types::Direction;

/// Drive `session` until it reaches `GameOver`, returning the final score.
///
/// Starts the session if it is still idle. A closed input channel does not
/// stop the game; it simply keeps moving in its current direction.
pub async fn run<R, T>(session: &mut Session<R, T>, mut inputs: mpsc::Receiver<Direction>) -> u32
where
    R: RenderSink,
    T: TerminationSink,
{
    session.start();

    let first = session
        .time_to_next_tick()
        .map(|ms| Duration::from_millis(ms as u64))
        .unwrap_or_else(|| interval_of(session));
    let timer = sleep(first);
    tokio::pin!(timer);
    let mut inputs_open = true;

    while !session.is_over() {
        tokio::select! {
            maybe = inputs.recv(), if inputs_open => match maybe {
                Some(direction) => {
                    if !session.request_direction(direction) {
                        log::trace!("dropped steering request {}", direction.as_str());
                    }
                }
                None => {
                    log::debug!("input channel closed; ticking on");
                    inputs_open = false;
                }
            },
            () = &mut timer => {
                session.step();
                timer.as_mut().reset(Instant::now() + interval_of(session));
            }
        }
    }

    session.state().score()
}

fn interval_of<R, T>(session: &Session<R, T>) -> Duration
where
    R: RenderSink,
    T: TerminationSink,
{
    Duration::from_millis(session.state().interval_ms() as u64)
}
