//! Tests for board scanning, turn hand-off and the save format.

mod common;

use common::{MUST_PASS_ON_THIS_TURN, NEW_GAME, STALLED, TIED};
use strictly_reversi::{Board, Coordinate, Disk, Game, GameStatus, PlayerControl, codec};

/// Dark ring around a Light ring around an empty centre at (2,2).
const SURROUNDED: &str =
    "x00\nxxxxx---\nxooox---\nxo-ox---\nxooox---\nxxxxx---\n--------\n--------\n--------\n";

fn game(text: &str) -> Game {
    codec::decode(text).expect("Fixture should parse")
}

#[test]
fn test_flips_follow_compass_order() {
    let game = game(SURROUNDED);
    let flipped = game.board().flipped_coordinates(Disk::Dark, Coordinate::new(2, 2));

    let expected: Vec<Coordinate> = [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3), (1, 2)]
        .into_iter()
        .map(|(x, y)| Coordinate::new(x, y))
        .collect();
    assert_eq!(flipped, expected);
}

#[test]
fn test_flips_run_nearest_first_within_direction() {
    let mut board = Board::new();
    board.set_disk(Some(Disk::Light), Coordinate::new(0, 0));
    board.set_disk(Some(Disk::Dark), Coordinate::new(1, 0));
    board.set_disk(Some(Disk::Dark), Coordinate::new(2, 0));

    let flipped = board.flipped_coordinates(Disk::Light, Coordinate::new(3, 0));
    assert_eq!(flipped, vec![Coordinate::new(2, 0), Coordinate::new(1, 0)]);
}

#[test]
fn test_occupied_or_unflanking_cells_flip_nothing() {
    let game = Game::new();
    let board = game.board();

    assert!(board.flipped_coordinates(Disk::Dark, Coordinate::new(3, 3)).is_empty());
    assert!(!board.can_place(Disk::Dark, Coordinate::new(3, 3)));
    assert!(board.flipped_coordinates(Disk::Dark, Coordinate::new(0, 0)).is_empty());
    assert!(!board.can_place(Disk::Dark, Coordinate::new(0, 0)));
}

#[test]
fn test_opening_moves_for_dark() {
    let moves = Game::new().board().valid_moves(Disk::Dark);
    let expected: Vec<Coordinate> = [(3, 2), (2, 3), (5, 4), (4, 5)]
        .into_iter()
        .map(|(x, y)| Coordinate::new(x, y))
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_move_that_strands_opponent_still_hands_over_turn() {
    let mut game = game(MUST_PASS_ON_THIS_TURN);
    game.set_turn(Some(Disk::Dark));

    game.place_disk(Disk::Dark, Coordinate::new(2, 0)).unwrap();
    game.update_turn_after_move();

    assert_eq!(game.turn(), Some(Disk::Light));
    assert!(game.needs_pass());
}

#[test]
fn test_last_move_ends_game() {
    // Dark fills the last gap; nobody can move afterwards.
    let mut game = game(
        "x00\nxxxxxxxx\nxxxxxxxx\nxxxxxxxx\nxxxxxxxx\nxxxxxxxx\nxxxxxxxx\nxxxxxxxx\nxxxxxxo-\n",
    );
    game.place_disk(Disk::Dark, Coordinate::new(7, 7)).unwrap();
    game.update_turn_after_move();

    assert_eq!(game.turn(), None);
    assert_eq!(game.status(), GameStatus::Won(Disk::Dark));
    assert_eq!(game.board().disk_counts(), [64, 0]);
}

#[test]
fn test_equal_counts_draw() {
    let game = game(TIED);
    assert_eq!(game.board().disk_counts(), [32, 32]);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_stalled_game_round_trips_unchanged() {
    let game = game(STALLED);
    assert!(game.is_stalled());
    assert_eq!(codec::encode(&game), STALLED);
}

#[test]
fn test_save_format_round_trips() {
    for text in [NEW_GAME, SURROUNDED, MUST_PASS_ON_THIS_TURN, TIED] {
        let once = codec::encode(&game(text));
        let twice = codec::encode(&codec::decode(&once).unwrap());
        assert_eq!(once, text);
        assert_eq!(twice, once);
    }
}

#[test]
fn test_controls_are_saved_per_side() {
    let mut game = Game::new();
    game.set_player_control(Disk::Light, PlayerControl::Scripted);
    assert!(codec::encode(&game).starts_with("x01\n"));
}

#[test]
#[should_panic(expected = "outside the board")]
fn test_placing_off_board_panics() {
    let mut board = Board::new();
    board.set_disk(Some(Disk::Dark), Coordinate::new(8, 0));
}
