//! Geometry and placement tests across board shapes.

use rust_wahoo::board::{BoardState, HoleId, Marble, Topology};
use rust_wahoo::core::{GameConfig, InvariantViolation, PlayerId};

/// Test the standard six-leg board's derived numbers.
#[test]
fn test_standard_geometry() {
    let topo = Topology::new(6, 5).unwrap();
    assert_eq!(topo.leg_perimeter(), 12);
    assert_eq!(topo.track_length(), 72);
    assert_eq!(topo.marbles_per_player(), 4);

    assert_eq!(topo.bench_exits(), vec![0, 12, 24, 36, 48, 60]);
    assert_eq!(topo.yolo_entries(), vec![4, 16, 28, 40, 52, 64]);
    assert_eq!(topo.endzone_entries(), vec![70, 10, 22, 34, 46, 58]);
}

/// Test the starting position for a partial table.
#[test]
fn test_start_position_partial_table() {
    let board = BoardState::new(Topology::new(6, 4).unwrap(), 4);
    for player in PlayerId::all(4) {
        assert_eq!(
            board.marbles_owned_by(player),
            vec![
                HoleId::Bench(player, 0),
                HoleId::Bench(player, 1),
                HoleId::Bench(player, 2),
            ]
        );
    }
    assert!(board.marbles_owned_by(PlayerId::new(4)).is_empty());
    assert!(board.validate().is_ok());
    assert!(board.winners().is_empty());
}

/// Test that a full endzone wins and a partial one does not.
#[test]
fn test_winner_needs_every_endzone_slot() {
    let p2 = PlayerId::new(2);
    let mut board = BoardState::new(Topology::new(6, 5).unwrap(), 6);
    for slot in 0..3 {
        board
            .relocate(HoleId::Bench(p2, slot), HoleId::Endzone(p2, slot))
            .unwrap();
    }
    assert!(!board.has_won(p2));
    board.relocate(HoleId::Bench(p2, 3), HoleId::Endzone(p2, 3)).unwrap();
    assert!(board.has_won(p2));
    assert_eq!(board.winners(), vec![p2]);
}

/// Test that placement refuses an occupied hole and that clearing breaks
/// the marble count until the marble is put back.
#[test]
fn test_place_and_clear() {
    let p0 = PlayerId::new(0);
    let mut board = BoardState::new(Topology::new(3, 3).unwrap(), 3);

    assert_eq!(
        board.place(HoleId::Bench(p0, 0), Marble::new(p0)),
        Err(InvariantViolation::HoleOccupied(HoleId::Bench(p0, 0)))
    );

    let marble = board.clear(HoleId::Bench(p0, 1)).unwrap();
    assert!(matches!(
        board.validate(),
        Err(InvariantViolation::MarbleCount { found: 1, expected: 2, .. })
    ));
    board.place(HoleId::Normal(5), marble).unwrap();
    assert!(board.validate().is_ok());
    assert_eq!(board.first_empty_bench_slot(p0), Some(HoleId::Bench(p0, 1)));
}

/// Test that positions, configs and hole ids survive a JSON round trip.
#[test]
fn test_serde_round_trip() {
    let p3 = PlayerId::new(3);
    let mut board = BoardState::new(Topology::new(6, 5).unwrap(), 6);
    board.relocate(HoleId::Bench(p3, 2), HoleId::Yolo).unwrap();
    board.relocate(HoleId::Bench(p3, 0), HoleId::Endzone(p3, 1)).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
    assert_eq!(restored.marble_at(HoleId::Yolo), Some(Marble::new(p3)));

    let config = GameConfig::full_table(4, 3).with_first_player(PlayerId::new(2));
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
}
