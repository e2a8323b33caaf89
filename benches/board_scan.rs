use criterion::{black_box, criterion_group, criterion_main, Criterion};
use baraja::board::Board;
use baraja::core::{Difficulty, GameRng, LayoutVariant};

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_turtle_hard", |b| {
        b.iter(|| Board::new(black_box(LayoutVariant::Turtle), Difficulty::Hard, GameRng::new(12345)))
    });
}

fn bench_has_valid_moves(c: &mut Criterion) {
    let board = Board::new(LayoutVariant::Turtle, Difficulty::Hard, GameRng::new(12345));

    c.bench_function("has_valid_moves_fresh_turtle", |b| {
        b.iter(|| black_box(&board).has_valid_moves())
    });
}

fn bench_matching_pairs(c: &mut Criterion) {
    let board = Board::new(LayoutVariant::Fortress, Difficulty::Medium, GameRng::new(12345));

    c.bench_function("matching_pairs_fresh_fortress", |b| {
        b.iter(|| black_box(&board).matching_pairs())
    });
}

fn bench_can_move_all(c: &mut Criterion) {
    let board = Board::new(LayoutVariant::Butterfly, Difficulty::Medium, GameRng::new(12345));

    c.bench_function("can_move_every_tile", |b| {
        b.iter(|| {
            board
                .tiles()
                .iter()
                .filter(|tile| board.can_move(black_box(tile.id)))
                .count()
        })
    });
}

fn bench_shuffle_until_playable(c: &mut Criterion) {
    let mut board = Board::new(LayoutVariant::Turtle, Difficulty::Hard, GameRng::new(12345));

    c.bench_function("shuffle_until_playable", |b| {
        b.iter(|| board.shuffle_until_playable(black_box(100)))
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_has_valid_moves,
    bench_matching_pairs,
    bench_can_move_all,
    bench_shuffle_until_playable,
);
criterion_main!(benches);
