//! Terminal falling-block game (default binary).
//!
//! Thin driver around `core::Session`: poll one key per iteration with a short
//! timeout, let the session apply it and advance gravity on its own clock,
//! then draw a frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tetris_terminal::config::{Cli, Config};
use tetris_terminal::core::{GameSnapshot, GameState, LoopState, RandomSource, Session};
use tetris_terminal::input::{handle_key_event, is_actionable};
use tetris_terminal::logging;
use tetris_terminal::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_terminal::types::{GameAction, POLL_INTERVAL_MS};

fn main() -> Result<()> {
    let config = Config::try_from(Cli::parse())?;
    logging::init(config.log_file.as_deref())?;

    let source = match config.seed {
        Some(seed) => RandomSource::new(seed),
        None => RandomSource::from_entropy(),
    };
    info!(delay = ?config.delay, seed = ?config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, source);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, source: RandomSource) -> Result<()> {
    let mut session = Session::new(GameState::new(source), config.delay, Instant::now());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let poll_interval = Duration::from_millis(POLL_INTERVAL_MS);

    loop {
        let action = poll_action(term, poll_interval)?;

        match session.step(action, Instant::now()) {
            LoopState::Exited => return Ok(()),
            LoopState::GameOver => {
                draw(term, &view, &session, &mut snap, &mut fb)?;
                wait_for_key()?;
                session.step(Some(GameAction::Quit), Instant::now());
                info!(
                    score = session.game().score(),
                    lines = session.game().lines(),
                    "game over acknowledged"
                );
                return Ok(());
            }
            LoopState::Running | LoopState::Paused => {
                draw(term, &view, &session, &mut snap, &mut fb)?;
            }
        }
    }
}

/// Wait up to `timeout` for one key and map it to an action.
fn poll_action(term: &mut TerminalRenderer, timeout: Duration) -> Result<Option<GameAction>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if is_actionable(&key) => Ok(handle_key_event(key)),
        Event::Resize(..) => {
            term.invalidate();
            Ok(None)
        }
        _ => Ok(None),
    }
}

/// Block until any key is pressed.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &Session,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    session.snapshot_into(snap);
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
