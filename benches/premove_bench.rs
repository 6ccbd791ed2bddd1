use criterion::{criterion_group, criterion_main, Criterion, black_box};
use premove::{premove, premove_dests, Board, Color, Piece, Role, Square};

fn sq(s: &str) -> Square { s.parse().expect("valid square") }

fn bench_premove(c: &mut Criterion) {
    let b: Board = [
        (sq("e1"), Piece::new(Role::King, Color::White)),
        (sq("a1"), Piece::new(Role::Rook, Color::White)),
        (sq("h1"), Piece::new(Role::Rook, Color::White)),
        (sq("d4"), Piece::new(Role::Dragon, Color::White)),
        (sq("c3"), Piece::new(Role::Unicorn, Color::White)),
        (sq("e2"), Piece::new(Role::Pawn, Color::White)),
    ]
    .into_iter()
    .collect();
    c.bench_function("premove_king_castle", |ben| {
        ben.iter(|| black_box(premove(black_box(&b), sq("e1"), true)))
    });
    c.bench_function("premove_dragon", |ben| {
        ben.iter(|| black_box(premove(black_box(&b), sq("d4"), false)))
    });
    c.bench_function("premove_dests_white", |ben| {
        ben.iter(|| black_box(premove_dests(black_box(&b), Color::White, true)))
    });
}

criterion_group!(benches, bench_premove);
criterion_main!(benches);
