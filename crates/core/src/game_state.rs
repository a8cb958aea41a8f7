//! Game state module - the engine
//!
//! Ties together the board, the falling piece, the shape source and scoring.
//! Every legality check goes through [`Board::collides_with`]; moves that
//! would collide are rejected and leave the state untouched.

use tracing::{debug, info};

use crate::board::{Board, Overrides};
use crate::piece::Piece;
use crate::rng::{RandomSource, ShapeSource};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;

/// What a single lock did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    pub lines_cleared: usize,
    pub score_delta: u32,
    /// The replacement piece collided on spawn.
    pub game_over: bool,
}

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityStep {
    /// The piece moved down one row.
    Fell,
    /// The piece was blocked and got locked.
    Locked(LockOutcome),
    /// The game is over; nothing moved.
    Halted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomSource> {
    board: Board,
    piece: Piece,
    source: S,
    score: u32,
    lines: u32,
    over: bool,
    /// Pieces spawned so far, including the current one.
    piece_count: u32,
}

impl<S: ShapeSource> GameState<S> {
    /// New game on an empty board with a freshly spawned piece.
    pub fn new(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// New game on a prepared board.
    ///
    /// The first spawn is checked for game over like every later one.
    pub fn with_board(board: Board, mut source: S) -> Self {
        let piece = Piece::spawn(source.next_kind());
        let over = board.collides(&piece);
        Self {
            board,
            piece,
            source,
            score: 0,
            lines: 0,
            over,
            piece_count: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn piece_count(&self) -> u32 {
        self.piece_count
    }

    /// Try to move the piece; returns whether it moved.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.over {
            return false;
        }
        let overrides = Overrides {
            x: Some(self.piece.x + dx),
            y: Some(self.piece.y + dy),
            shape: None,
        };
        if self.board.collides_with(&self.piece, overrides) {
            return false;
        }
        self.piece = self.piece.shifted(dx, dy);
        true
    }

    /// Rotate the piece clockwise in place if the rotated shape fits.
    pub fn rotate(&mut self) -> bool {
        if self.over {
            return false;
        }
        let rotated = self.piece.shape.rotate();
        if self.board.collides_with(&self.piece, Overrides::shape(rotated)) {
            return false;
        }
        self.piece.shape = rotated;
        true
    }

    /// Move the piece down one row if possible.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rows the piece can still fall.
    pub fn drop_distance(&self) -> u8 {
        self.board.drop_distance(&self.piece)
    }

    /// Row the piece would land on if hard-dropped now.
    pub fn ghost_y(&self) -> i8 {
        self.piece.y + self.drop_distance() as i8
    }

    /// Drop the piece to its landing row and lock it.
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if self.over {
            return None;
        }
        let distance = self.drop_distance();
        self.piece = self.piece.shifted(0, distance as i8);
        self.lock_piece()
    }

    /// Merge the piece, clear lines, score them, and spawn the next piece.
    ///
    /// Returns `None` once the game is over: nothing is merged or scored then.
    pub fn lock_piece(&mut self) -> Option<LockOutcome> {
        if self.over {
            return None;
        }

        self.board.merge(&self.piece);
        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len();
        let score_delta = line_clear_score(lines_cleared);

        self.lines += lines_cleared as u32;
        self.score += score_delta;

        debug!(
            kind = self.piece.kind.as_str(),
            x = self.piece.x,
            y = self.piece.y,
            lines_cleared,
            rows = ?cleared_rows.as_slice(),
            score = self.score,
            "piece locked"
        );

        self.spawn_next();

        Some(LockOutcome {
            lines_cleared,
            score_delta,
            game_over: self.over,
        })
    }

    /// Advance gravity by one row, locking the piece if it cannot fall.
    pub fn gravity_step(&mut self) -> GravityStep {
        if self.over {
            return GravityStep::Halted;
        }
        if self.soft_drop() {
            return GravityStep::Fell;
        }
        match self.lock_piece() {
            Some(outcome) => GravityStep::Locked(outcome),
            None => GravityStep::Halted,
        }
    }

    /// Apply a piece action. Returns whether the state changed.
    ///
    /// Loop-level actions (pause, speed, quit) are not the engine's business
    /// and always return `false` here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Pause | GameAction::SpeedUp | GameAction::SlowDown | GameAction::Quit => {
                false
            }
        }
    }

    /// Fill the board/piece/score part of a snapshot.
    ///
    /// Loop-owned fields (`paused`, `delay_ms`) are left as they are.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.piece));
        out.ghost_y = Some(self.ghost_y());
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn spawn_next(&mut self) {
        self.piece = Piece::spawn(self.source.next_kind());
        self.piece_count = self.piece_count.wrapping_add(1);
        if self.board.collides(&self.piece) {
            self.over = true;
            info!(
                kind = self.piece.kind.as_str(),
                score = self.score,
                lines = self.lines,
                "spawn blocked, game over"
            );
        }
    }
}

impl Default for GameState<RandomSource> {
    fn default() -> Self {
        Self::new(RandomSource::default())
    }
}
