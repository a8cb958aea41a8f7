//! Property tests for engine invariants.
//!
//! - `collides` and `collides_with` agree when overrides repeat the piece.
//! - Four clockwise rotations give back the starting shape.
//! - Line clearing keeps the height and the order of surviving rows.
//! - In random rollouts the live piece never overlaps the stack, and score
//!   and lines never go down.

use proptest::prelude::*;
use tetris_terminal::core::{Board, GameState, Overrides, Piece, RandomSource, Shape};
use tetris_terminal::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

type Grid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    // Each row is either full or random, so clears actually happen.
    prop::collection::vec((any::<bool>(), any::<u16>()), BOARD_HEIGHT as usize).prop_map(
        |rows| {
            let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
            for (y, (full, bits)) in rows.into_iter().enumerate() {
                for x in 0..BOARD_WIDTH as usize {
                    grid[y][x] = (full || bits & (1 << x) != 0) as u8;
                }
            }
            grid
        },
    )
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::Rotate),
        Just(GameAction::SoftDrop),
        Just(GameAction::HardDrop),
    ]
}

proptest! {
    #[test]
    fn explicit_overrides_match_plain_collision(
        grid in grid_strategy(),
        kind in kind_strategy(),
        turns in 0usize..4,
        dx in -6i8..8,
        dy in 0i8..22,
    ) {
        let board = Board::from_grid(&grid);
        let mut piece = Piece::spawn(kind).shifted(dx, dy);
        for _ in 0..turns {
            piece = piece.rotated();
        }
        let overrides = Overrides { x: Some(piece.x), y: Some(piece.y), shape: Some(piece.shape) };
        prop_assert_eq!(board.collides(&piece), board.collides_with(&piece, overrides));
        prop_assert_eq!(board.collides(&piece), board.collides_with(&piece, Overrides::default()));
    }

    #[test]
    fn four_rotations_are_identity(kind in kind_strategy(), turns in 0usize..4) {
        let mut shape = Shape::of(kind);
        for _ in 0..turns {
            shape = shape.rotate();
        }
        prop_assert_eq!(shape.rotate().rotate().rotate().rotate(), shape);
        prop_assert_eq!(shape.cells().count(), 4);
    }

    #[test]
    fn clear_keeps_height_and_row_order(grid in grid_strategy()) {
        let mut board = Board::from_grid(&grid);
        let cleared = board.clear_lines();

        let survivors: Vec<_> = grid
            .iter()
            .filter(|row| row.iter().any(|&c| c == 0))
            .copied()
            .collect();
        prop_assert_eq!(cleared, BOARD_HEIGHT as usize - survivors.len());

        let mut after = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut after);
        prop_assert_eq!(after.len(), BOARD_HEIGHT as usize);
        prop_assert!(after[..cleared].iter().all(|row| row.iter().all(|&c| c == 0)));
        prop_assert_eq!(&after[cleared..], &survivors[..]);
        prop_assert!((0..BOARD_HEIGHT as usize).all(|y| !board.is_row_full(y)));
    }

    #[test]
    fn rollout_keeps_counters_monotonic(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..200),
    ) {
        let mut game = GameState::new(RandomSource::new(seed));
        let mut score = 0;
        let mut lines = 0;

        for action in actions {
            if game.is_over() {
                break;
            }
            game.apply_action(action);
            if !game.is_over() {
                prop_assert!(!game.board().collides(game.piece()));
            }
            prop_assert!(game.score() >= score);
            prop_assert!(game.lines() >= lines);
            score = game.score();
            lines = game.lines();
        }
    }
}
