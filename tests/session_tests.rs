//! Session tests - loop states, pause, delay control and gravity pacing
//!
//! Time is injected, so nothing here sleeps.

use std::time::{Duration, Instant};

use tetris_terminal::core::{Board, GameState, LoopState, ScriptedSource, Session};
use tetris_terminal::types::{GameAction, PieceKind, BOARD_HEIGHT};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn session(kinds: &[PieceKind], delay: Duration, t0: Instant) -> Session<ScriptedSource> {
    let game = GameState::new(ScriptedSource::new(kinds.iter().copied()));
    Session::new(game, delay, t0)
}

#[test]
fn test_gravity_follows_injected_clock() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);

    assert_eq!(s.step(None, t0 + ms(499)), LoopState::Running);
    assert_eq!(s.game().piece().y, -1);

    s.step(None, t0 + ms(500));
    assert_eq!(s.game().piece().y, 0);

    // Polled often, still one row per delay.
    for t in (525..1000).step_by(25) {
        s.step(None, t0 + ms(t));
    }
    assert_eq!(s.game().piece().y, 0);
    s.step(None, t0 + ms(1000));
    assert_eq!(s.game().piece().y, 1);
}

#[test]
fn test_one_gravity_step_per_iteration() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(100), t0);

    // A long stall still moves the piece only one row.
    s.step(None, t0 + ms(1000));
    assert_eq!(s.game().piece().y, 0);
}

#[test]
fn test_actions_apply_before_gravity() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);

    s.step(Some(GameAction::MoveLeft), t0 + ms(500));
    assert_eq!(s.game().piece().x, 3);
    assert_eq!(s.game().piece().y, 0);
}

#[test]
fn test_quit_exits_from_running_and_paused() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);
    assert_eq!(s.step(Some(GameAction::Quit), t0), LoopState::Exited);

    let mut s = session(&[PieceKind::T], ms(500), t0);
    s.step(Some(GameAction::Pause), t0);
    assert_eq!(s.step(Some(GameAction::Quit), t0), LoopState::Exited);
}

#[test]
fn test_pause_freezes_piece_and_gravity() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);

    assert_eq!(s.step(Some(GameAction::Pause), t0), LoopState::Paused);
    let before = *s.game().piece();

    s.step(Some(GameAction::MoveLeft), t0 + ms(100));
    s.step(Some(GameAction::Rotate), t0 + ms(200));
    s.step(Some(GameAction::HardDrop), t0 + ms(300));
    s.step(None, t0 + ms(5000));

    assert_eq!(*s.game().piece(), before);
    assert_eq!(s.game().board().filled_count(), 0);
    assert!(s.snapshot().paused);
}

#[test]
fn test_unpause_resumes_gravity() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);

    s.step(Some(GameAction::Pause), t0);
    s.step(None, t0 + ms(2000));
    assert_eq!(s.game().piece().y, -1);

    // The tick reference is not reset while paused: the first running
    // iteration is already due.
    assert_eq!(
        s.step(Some(GameAction::Pause), t0 + ms(2000)),
        LoopState::Running
    );
    assert_eq!(s.game().piece().y, 0);
    assert!(!s.snapshot().paused);
}

#[test]
fn test_speed_up_stops_at_floor() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(150), t0);

    s.step(Some(GameAction::SpeedUp), t0);
    assert_eq!(s.delay(), ms(100));
    s.step(Some(GameAction::SpeedUp), t0);
    assert_eq!(s.delay(), ms(50));
    s.step(Some(GameAction::SpeedUp), t0);
    assert_eq!(s.delay(), ms(50));

    s.step(Some(GameAction::SlowDown), t0);
    assert_eq!(s.delay(), ms(100));
    assert_eq!(s.snapshot().delay_ms, 100);
}

#[test]
fn test_slow_down_has_no_ceiling() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);

    for _ in 0..40 {
        s.step(Some(GameAction::SlowDown), t0);
    }
    assert_eq!(s.delay(), ms(2500));
}

#[test]
fn test_delay_changes_while_paused() {
    let t0 = Instant::now();
    let mut s = session(&[PieceKind::T], ms(500), t0);

    s.step(Some(GameAction::Pause), t0);
    s.step(Some(GameAction::SpeedUp), t0);
    assert_eq!(s.delay(), ms(450));
    assert_eq!(s.state(), LoopState::Paused);
}

fn doomed_session(t0: Instant) -> Session<ScriptedSource> {
    let mut board = Board::new();
    for y in 1..BOARD_HEIGHT as i8 {
        board.set(4, y, true);
    }
    let game = GameState::with_board(board, ScriptedSource::new([PieceKind::I, PieceKind::O]));
    Session::new(game, Duration::from_millis(500), t0)
}

#[test]
fn test_blocked_spawn_enters_game_over() {
    let t0 = Instant::now();
    let mut s = doomed_session(t0);

    assert_eq!(s.step(Some(GameAction::HardDrop), t0), LoopState::GameOver);
    let snap = s.snapshot();
    assert!(snap.game_over);
    assert!(!snap.playable());

    // Gravity no longer runs.
    let board = s.game().board().clone();
    assert_eq!(s.step(None, t0 + ms(5000)), LoopState::GameOver);
    assert_eq!(*s.game().board(), board);
}

#[test]
fn test_any_key_after_game_over_exits() {
    let t0 = Instant::now();
    let mut s = doomed_session(t0);
    s.step(Some(GameAction::HardDrop), t0);

    assert_eq!(s.step(Some(GameAction::MoveLeft), t0), LoopState::Exited);
    // Exited is terminal.
    assert_eq!(s.step(Some(GameAction::Pause), t0), LoopState::Exited);
}

#[test]
fn test_gravity_lock_can_end_game() {
    let t0 = Instant::now();
    let mut s = doomed_session(t0);

    // I falls one row to y = 0, then the next due tick locks it.
    s.step(None, t0 + ms(500));
    assert_eq!(s.state(), LoopState::Running);
    assert_eq!(s.step(None, t0 + ms(1000)), LoopState::GameOver);
}

#[test]
fn test_session_starting_over_is_game_over() {
    let mut board = Board::new();
    board.set(4, 0, true);
    let game = GameState::with_board(board, ScriptedSource::new([PieceKind::O]));
    let s = Session::new(game, Duration::from_millis(500), Instant::now());

    assert_eq!(s.state(), LoopState::GameOver);
}
