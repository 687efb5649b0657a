//! Tests for the gomoku engine through the public API.

use strictly_gomoku::{
    BOARD_SIZE, Cell, GameEngine, GameSnapshot, GameStatus, MAX_HISTORY, MoveError, Player, Position,
};

/// Plays moves in order, asserting each one is accepted.
fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> GameStatus {
    let mut status = engine.status();
    for &(r, c) in moves {
        status = engine.apply_move(r, c).expect("legal move");
    }
    status
}

/// Full-board colouring with no five in any direction.
///
/// Horizontal runs are pairs, vertical runs single, diagonal runs at most two.
fn draw_colour(r: usize, c: usize) -> Player {
    if (c / 2 + r) % 2 == 0 {
        Player::Black
    } else {
        Player::White
    }
}

#[test]
fn test_every_cell_takes_the_movers_stone() {
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let mut engine = GameEngine::new();
            engine.apply_move(r, c).unwrap();
            assert_eq!(engine.cell_at(r, c), Some(Cell::Occupied(Player::Black)));
        }
    }
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(7, 7), (7, 8)]);
    let before = engine.clone();

    for (r, c) in [(7, 7), (7, 8)] {
        let err = engine.apply_move(r, c).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(Position::new(r, c).unwrap()));
    }
    assert_eq!(engine, before);
    assert_eq!(engine.board(), before.board());
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.apply_move(BOARD_SIZE, 0),
        Err(MoveError::InvalidMove { row: BOARD_SIZE, col: 0 })
    );
    assert_eq!(
        engine.apply_move(3, usize::MAX),
        Err(MoveError::InvalidMove { row: 3, col: usize::MAX })
    );
    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_apply_then_undo_round_trips() {
    let mut engine = GameEngine::new();
    let script = [(7, 7), (6, 8), (8, 6), (0, 14), (14, 0), (3, 9)];

    for &(r, c) in &script {
        let before = engine.clone();
        engine.apply_move(r, c).unwrap();
        engine.undo().unwrap();
        assert_eq!(engine.board(), before.board());
        assert_eq!(engine.status(), before.status());
        assert_eq!(engine.current_player(), before.current_player());
        assert_eq!(engine, before);

        engine.apply_move(r, c).unwrap();
    }
}

#[test]
fn test_five_in_a_row_wins() {
    let mut engine = GameEngine::new();
    for c in 0..4 {
        let status = engine.apply_move(7, c).unwrap();
        assert_eq!(status, GameStatus::InProgress(Player::White));
        let status = engine.apply_move(8, c).unwrap();
        assert_eq!(status, GameStatus::InProgress(Player::Black));
    }

    let status = engine.apply_move(7, 4).unwrap();
    assert_eq!(status, GameStatus::Won(Player::Black));
    assert_eq!(engine.current_player(), Player::Black);
}

#[test]
fn test_white_can_win() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[(0, 0), (2, 2), (0, 2), (3, 3), (0, 4), (4, 4), (0, 6), (5, 5), (14, 14)],
    );
    let status = engine.apply_move(6, 6).unwrap();
    assert_eq!(status, GameStatus::Won(Player::White));
}

#[test]
fn test_no_moves_after_win() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[(7, 0), (8, 0), (7, 1), (8, 1), (7, 2), (8, 2), (7, 3), (8, 3), (7, 4)],
    );
    let before = engine.clone();

    assert_eq!(
        engine.apply_move(0, 0),
        Err(MoveError::GameAlreadyOver(GameStatus::Won(Player::Black)))
    );
    assert_eq!(engine, before);
}

#[test]
fn test_full_board_without_five_is_drawn() {
    let cells: Vec<_> = Position::all().collect();
    let black: Vec<_> = cells
        .iter()
        .filter(|p| draw_colour(p.row(), p.col()) == Player::Black)
        .collect();
    let white: Vec<_> = cells
        .iter()
        .filter(|p| draw_colour(p.row(), p.col()) == Player::White)
        .collect();
    assert_eq!(black.len(), white.len() + 1);

    let mut engine = GameEngine::new();
    let total = BOARD_SIZE * BOARD_SIZE;
    for i in 0..total {
        let pos = if i % 2 == 0 { black[i / 2] } else { white[i / 2] };
        let status = engine.apply_move(pos.row(), pos.col()).unwrap();
        if i + 1 < total {
            assert!(matches!(status, GameStatus::InProgress(_)), "move {i} ended the game");
        } else {
            assert_eq!(status, GameStatus::Drawn);
        }
    }

    assert_eq!(
        engine.apply_move(0, 0),
        Err(MoveError::GameAlreadyOver(GameStatus::Drawn))
    );
}

#[test]
fn test_undo_drawing_move_resumes_game() {
    let mut engine = GameEngine::new();
    let black: Vec<_> = Position::all()
        .filter(|p| draw_colour(p.row(), p.col()) == Player::Black)
        .collect();
    let white: Vec<_> = Position::all()
        .filter(|p| draw_colour(p.row(), p.col()) == Player::White)
        .collect();
    for i in 0..BOARD_SIZE * BOARD_SIZE {
        let pos = if i % 2 == 0 { black[i / 2] } else { white[i / 2] };
        engine.apply_move(pos.row(), pos.col()).unwrap();
    }
    assert_eq!(engine.status(), GameStatus::Drawn);

    let record = engine.undo().unwrap();
    assert!(record.ended_game());
    assert_eq!(record.player(), Player::Black);
    assert_eq!(engine.status(), GameStatus::InProgress(Player::Black));
    assert_eq!(engine.cell_at(record.position().row(), record.position().col()), Some(Cell::Empty));
}

#[test]
fn test_history_is_bounded() {
    let mut engine = GameEngine::new();
    // Four full rows: 60 moves, no five anywhere.
    let moves: Vec<_> = (0..4)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .collect();
    play(&mut engine, &moves);
    assert_eq!(moves.len(), 60);
    assert_eq!(engine.history_depth(), MAX_HISTORY);
    assert_eq!(engine.history().next().map(|r| r.sequence()), Some(10));

    for _ in 0..MAX_HISTORY {
        assert!(engine.undo().is_ok());
    }
    assert_eq!(engine.undo(), Err(MoveError::NoMovesToUndo));
    assert!(!engine.undo_available());

    // The ten evicted moves stay on the board.
    for c in 0..10 {
        assert_ne!(engine.cell_at(0, c), Some(Cell::Empty));
    }
    assert_eq!(engine.cell_at(0, 10), Some(Cell::Empty));
    assert_eq!(engine.board().occupied_count(), 10);
}

#[test]
fn test_undo_winning_move() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[(7, 0), (8, 0), (7, 1), (8, 1), (7, 2), (8, 2), (7, 3), (8, 3), (7, 4)],
    );
    assert_eq!(engine.status(), GameStatus::Won(Player::Black));

    assert!(engine.try_undo());
    assert_eq!(engine.status(), GameStatus::InProgress(Player::Black));
    assert_eq!(engine.current_player(), Player::Black);
    assert_eq!(engine.cell_at(7, 4), Some(Cell::Empty));

    // Black may play elsewhere and the game goes on.
    assert_eq!(
        engine.apply_move(0, 0),
        Ok(GameStatus::InProgress(Player::White))
    );
}

#[test]
fn test_reset_clears_everything() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1), (2, 2), (3, 3)]);
    engine.reset();

    assert_eq!(engine.status(), GameStatus::InProgress(Player::Black));
    assert_eq!(engine.history_depth(), 0);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.undo(), Err(MoveError::NoMovesToUndo));
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(7, 7)]);
    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["history_depth"], 1);
    assert_eq!(json["current_player"], "White");
    assert_eq!(json["status"]["InProgress"], "White");
    assert_eq!(json["board"][7][7]["Occupied"], "Black");
}

#[test]
fn test_snapshot_rejects_off_board_move() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(7, 7)]);
    let mut json = serde_json::to_value(engine.snapshot()).unwrap();
    json["last_move"]["position"]["row"] = 99.into();
    assert!(serde_json::from_value::<GameSnapshot>(json).is_err());
}
