//! Terminal snake runner (default binary).
//!
//! Polls crossterm for keys until the next tick is due, feeds wall-clock time
//! into the session and redraws whenever a new snapshot arrives.

use std::env;
use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::core::{GameConfig, GameState};
use tui_snake::engine::{FinalScore, LatestSnapshot, Session};
use tui_snake::input::{handle_key_event, should_quit, InputCommand};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

type TermSession = Session<LatestSnapshot, FinalScore>;

/// Poll timeout while nothing is ticking (idle or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let log_path = env::var("SNAKE_LOG_PATH").unwrap_or_else(|_| "tui-snake.log".to_string());
    let log_file =
        File::create(&log_path).with_context(|| format!("creating log file {log_path}"))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("initializing logger")?;

    let mut config = GameConfig::from_env();
    if env::var("SNAKE_SEED").is_err() {
        config.seed = clock_seed();
    }
    config.validate().context("invalid game configuration")?;
    info!(
        "starting tui-snake: board {}x{}, seed {}, interval {}ms",
        config.board_size, config.board_size, config.seed, config.initial_interval_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("failed to restore terminal: {err:#}");
    }
    result
}

fn new_session(config: &GameConfig) -> Result<TermSession> {
    let state = GameState::with_config(config.clone())?;
    let mut session = Session::new(state, LatestSnapshot::default(), FinalScore::default());
    session.start();
    Ok(session)
}

fn run(term: &mut TerminalRenderer, mut config: GameConfig) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut session = new_session(&config)?;

    let mut last_update = Instant::now();
    let mut drawn_frame = None;
    let mut viewport = current_viewport();
    if !GameView::fits(config.board_size, viewport) {
        let (need_w, need_h) = GameView::min_viewport(config.board_size);
        warn!(
            "terminal {}x{} is smaller than {need_w}x{need_h}; game paused until resized",
            viewport.width, viewport.height
        );
    }
    let mut reported = false;

    loop {
        let frame = session.render_sink().frames();
        if drawn_frame != Some(frame) {
            view.render_into(session.render_sink().get(), viewport, &mut fb);
            term.draw(&fb)?;
            drawn_frame = Some(frame);
        }

        if !reported {
            if let Some(score) = session.termination_sink().0 {
                info!("game over after {} ticks, final score {score}", session.state().ticks());
                reported = true;
            }
        }

        // The clock stands still while the board cannot be shown in full.
        let visible = GameView::fits(session.state().board_size(), viewport);
        let timeout = match session.time_to_next_tick() {
            Some(ms) if visible => Duration::from_millis(ms as u64),
            _ => IDLE_POLL,
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(InputCommand::Steer(direction)) => {
                            session.request_direction(direction);
                        }
                        Some(InputCommand::Restart) if session.is_over() => {
                            config.seed = config.seed.wrapping_add(1);
                            session = new_session(&config)?;
                            last_update = Instant::now();
                            drawn_frame = None;
                            reported = false;
                            info!("restarted with seed {}", config.seed);
                        }
                        _ => {}
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    let fits = GameView::fits(session.state().board_size(), viewport);
                    if !fits {
                        let (need_w, need_h) = GameView::min_viewport(session.state().board_size());
                        warn!("terminal {w}x{h} is smaller than {need_w}x{need_h}; game paused");
                    }
                    term.invalidate();
                    drawn_frame = None;
                }
                _ => {}
            }
        }

        if !GameView::fits(session.state().board_size(), viewport) {
            last_update = Instant::now();
            continue;
        }

        // Carry sub-millisecond remainders into the next update.
        let elapsed_ms = last_update.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_update += Duration::from_millis(elapsed_ms as u64);
        session.update(elapsed_ms);
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
