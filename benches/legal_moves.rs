//! Legal-move enumeration on a crowded mid-game board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_wahoo::board::{BoardState, HoleId, Topology};
use rust_wahoo::core::PlayerId;
use rust_wahoo::rules::MoveEngine;

fn mid_game() -> BoardState {
    let mut board = BoardState::new(Topology::new(6, 5).unwrap(), 6);
    let spots: [(u8, u8, HoleId); 10] = [
        (0, 0, HoleId::Normal(3)),
        (0, 1, HoleId::Normal(15)),
        (0, 2, HoleId::Normal(66)),
        (1, 0, HoleId::Normal(5)),
        (1, 1, HoleId::Yolo),
        (2, 0, HoleId::Normal(18)),
        (3, 0, HoleId::Normal(40)),
        (3, 1, HoleId::Normal(63)),
        (4, 0, HoleId::Normal(50)),
        (5, 0, HoleId::Normal(62)),
    ];
    for (player, slot, hole) in spots {
        board
            .relocate(HoleId::Bench(PlayerId::new(player), slot), hole)
            .unwrap();
    }
    board
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = mid_game();

    c.bench_function("legal_moves_all_rolls", |b| {
        b.iter(|| {
            let engine = MoveEngine::new(&board);
            let mut total = 0;
            for player in PlayerId::all(6) {
                for roll in 1..=6 {
                    total += engine.legal_moves(player, roll).unwrap().len();
                }
            }
            black_box(total)
        })
    });

    c.bench_function("board_clone", |b| b.iter(|| black_box(board.clone())));
}

criterion_group!(benches, bench_legal_moves);
criterion_main!(benches);
