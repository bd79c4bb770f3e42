use std::hint::black_box;

use bingo_core::{Board, Cell, Difficulty, average_difficulty, build_toggle_payload};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;

const BOARD_DIMENSION: usize = 5;

fn full_board() -> Board {
    (1..=BOARD_DIMENSION)
        .flat_map(|row| (1..=BOARD_DIMENSION).map(move |col| (row, col)))
        .map(|(row, col)| {
            let difficulty = ((row * col) % 10 + 1) as f64;
            (
                format!("{row}x{col}"),
                Cell::new("challenge", Difficulty::new(difficulty)),
            )
        })
        .collect()
}

fn bench_average(c: &mut Criterion) {
    let board = full_board();
    c.bench_function("average_difficulty_5x5", |b| {
        b.iter(|| average_difficulty(black_box(Some(&board))))
    });

    let raw = serde_json::to_value(&board).unwrap();
    c.bench_function("parse_and_average_5x5", |b| {
        b.iter(|| {
            let board: Board = serde_json::from_value(black_box(raw.clone())).unwrap();
            board.average_difficulty()
        })
    });
}

fn bench_toggle(c: &mut Criterion) {
    c.bench_function("build_toggle_payload", |b| {
        b.iter(|| {
            let payload = build_toggle_payload(black_box("Alice"), black_box("3x3"), true).unwrap();
            serde_json::to_value(payload).unwrap()
        })
    });

    let body = json!({ "name": "Alice", "3x3": { "done": true } });
    c.bench_function("read_toggle_payload", |b| {
        b.iter(|| serde_json::from_value::<bingo_core::TogglePayload>(black_box(body.clone())))
    });
}

criterion_group!(benches, bench_average, bench_toggle);
criterion_main!(benches);
