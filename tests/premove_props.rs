use pretty_assertions::assert_eq;
use premove::{premove, Board, Color, Piece, Pos, Role, Square};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn sq(s: &str) -> Square { s.parse().expect("valid square") }

fn keys(v: &[Square]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

fn random_board(rng: &mut SmallRng) -> Board {
    let mut b = Board::new();
    for s in Square::ALL {
        if rng.gen_bool(0.4) {
            let role = Role::ALL[rng.gen_range(0..Role::ALL.len())];
            let color = if rng.gen_bool(0.5) { Color::White } else { Color::Black };
            b.insert(s, Piece::new(role, color));
        }
    }
    b
}

#[test]
fn random_boards_total_pure_and_self_excluding() {
    let mut rng = SmallRng::seed_from_u64(0x5EED_CAFE);
    for _ in 0..200 {
        let board = random_board(&mut rng);
        let castle = rng.gen_bool(0.5);
        for s in Square::ALL {
            let a = premove(&board, s, castle);
            let b = premove(&board, s, castle);
            assert_eq!(a, b);
            assert!(!a.contains(&s));
            if board.piece_at(s).is_none() {
                assert!(a.is_empty());
            }
            let mut sorted = a.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted, a, "results follow square order without duplicates");
        }
    }
}

#[test]
fn premove_does_not_touch_the_board() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = random_board(&mut rng);
    let before = board.clone();
    for s in Square::ALL {
        let _ = premove(&board, s, true);
    }
    assert_eq!(board, before);
}

#[test]
fn white_pawn_on_second_rank() {
    let board: Board = [(sq("e2"), Piece::new(Role::Pawn, Color::White))].into_iter().collect();
    assert_eq!(keys(&premove(&board, sq("e2"), false)), vec!["d3", "e3", "e4", "f3"]);
}

#[test]
fn black_pawn_on_seventh_rank() {
    let board: Board = [(sq("e7"), Piece::new(Role::Pawn, Color::Black))].into_iter().collect();
    assert_eq!(keys(&premove(&board, sq("e7"), false)), vec!["d6", "e5", "e6", "f6"]);
}

#[test]
fn horde_pawn_double_step_from_first_rank() {
    let board: Board = [(sq("c1"), Piece::new(Role::Pawn, Color::White))].into_iter().collect();
    assert_eq!(keys(&premove(&board, sq("c1"), false)), vec!["b2", "c2", "c3", "d2"]);
}

#[test]
fn pawn_never_moves_backward() {
    for file in 0..8u8 {
        for rank in 0..8u8 {
            let from = Square::from_pos(Pos::new(file, rank));
            let white: Board = [(from, Piece::new(Role::Pawn, Color::White))].into_iter().collect();
            assert!(premove(&white, from, true).iter().all(|d| d.rank() > rank));
            let black: Board = [(from, Piece::new(Role::Pawn, Color::Black))].into_iter().collect();
            assert!(premove(&black, from, true).iter().all(|d| d.rank() < rank));
        }
    }
}

#[test]
fn standard_is_immobile_everywhere() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..20 {
        let mut board = random_board(&mut rng);
        let s = Square::ALL[rng.gen_range(0..64)];
        board.insert(s, Piece::new(Role::Standard, Color::White));
        assert!(premove(&board, s, true).is_empty());
        assert!(premove(&board, s, false).is_empty());
    }
}

#[test]
fn sliders_ignore_blockers() {
    let board: Board = [
        (sq("a1"), Piece::new(Role::Rook, Color::White)),
        (sq("a2"), Piece::new(Role::Pawn, Color::White)),
        (sq("b1"), Piece::new(Role::Knight, Color::Black)),
    ]
    .into_iter()
    .collect();
    let dests = premove(&board, sq("a1"), false);
    assert_eq!(dests.len(), 14);
    assert!(dests.contains(&sq("a8")) && dests.contains(&sq("h1")));
}

#[test]
fn unicorn_reaches_scaled_knight_squares() {
    let board: Board = [(sq("a1"), Piece::new(Role::Unicorn, Color::Black))].into_iter().collect();
    assert_eq!(keys(&premove(&board, sq("a1"), false)), vec!["b3", "c2", "c5", "d7", "e3", "g4"]);
}
