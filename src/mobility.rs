//! Movement geometry for every role, on an empty board.
//!
//! Each predicate answers whether a piece of that role could go from
//! `(x1, y1)` to `(x2, y2)` by its pattern alone. Nothing here looks at
//! occupancy, so sliders are never blocked.

use crate::piece::Color;

/// A pure `(x1, y1, x2, y2) -> bool` movement predicate.
pub type Mobility = fn(u8, u8, u8, u8) -> bool;

#[inline]
fn diff(a: u8, b: u8) -> u8 { a.abs_diff(b) }

/// Pawns step one rank forward, straight or diagonally. The double step is
/// allowed from either of the first two ranks so horde pawns can use it.
pub fn pawn(color: Color) -> impl Fn(u8, u8, u8, u8) -> bool {
    move |x1, y1, x2, y2| {
        diff(x1, x2) < 2
            && match color {
                Color::White => y2 == y1 + 1 || (y1 <= 1 && y2 == y1 + 2 && x1 == x2),
                Color::Black => y2 + 1 == y1 || (y1 >= 6 && y2 + 2 == y1 && x1 == x2),
            }
    }
}

pub fn knight(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    (xd == 1 && yd == 2) || (xd == 2 && yd == 1)
}

pub fn bishop(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    diff(x1, x2) == diff(y1, y2)
}

pub fn rook(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    x1 == x2 || y1 == y2
}

pub fn queen(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    bishop(x1, y1, x2, y2) || rook(x1, y1, x2, y2)
}

/// King steps, plus castling targets when `can_castle` holds and both squares
/// sit on the back rank. A rook's own file is always a target; from the
/// e-file the king may also land on c/g when the a/h rook is home.
pub fn king(color: Color, rook_files: Vec<u8>, can_castle: bool) -> impl Fn(u8, u8, u8, u8) -> bool {
    let back_rank = color.back_rank();
    move |x1, y1, x2, y2| {
        (diff(x1, x2) < 2 && diff(y1, y2) < 2)
            || (can_castle
                && y1 == y2
                && y1 == back_rank
                && ((x1 == 4
                    && ((x2 == 2 && rook_files.contains(&0)) || (x2 == 6 && rook_files.contains(&7))))
                    || rook_files.contains(&x2)))
    }
}

pub fn valet(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    diff(x1, x2) < 2 && diff(y1, y2) < 2
}

pub fn elephant(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    xd == diff(y1, y2) && xd == 2
}

pub fn fool(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    xd == diff(y1, y2) && xd == 1
}

pub fn warden(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    (xd == 1 && yd == 0) || (xd == 0 && yd == 1)
}

pub fn prince(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    valet(x1, y1, x2, y2) || knight(x1, y1, x2, y2)
}

pub fn lady(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    bishop(x1, y1, x2, y2) || warden(x1, y1, x2, y2)
}

pub fn dragon(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    knight(x1, y1, x2, y2) || queen(x1, y1, x2, y2)
}

pub fn arma(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    rook(x1, y1, x2, y2) || fool(x1, y1, x2, y2)
}

pub fn monk(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    (xd == 2 && yd == 0) || (xd == 0 && yd == 2)
}

/// The standard never moves.
pub fn standard(_x1: u8, _y1: u8, _x2: u8, _y2: u8) -> bool {
    false
}

pub fn goshawk(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    (xd == 1 && yd == 3) || (xd == 3 && yd == 1)
}

pub fn cannon(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    (xd == 3 && yd == 0) || (xd == 0 && yd == 3)
}

/// Anywhere on the same rank, its own square included.
pub fn junk(_x1: u8, y1: u8, _x2: u8, y2: u8) -> bool {
    y1 == y2
}

pub fn zebra(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    (xd == 1 && yd == 2) || (xd == 2 && yd == 1) || (xd == 1 && yd == 0)
}

/// Knight rider: any whole multiple of a (1, 2) or (2, 1) vector.
pub fn unicorn(x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
    let xd = diff(x1, x2);
    let yd = diff(y1, y2);
    let denominator = xd.min(yd);
    if denominator == 0 || xd % denominator != 0 || yd % denominator != 0 {
        return false;
    }
    let xn = xd / denominator;
    let yn = yd / denominator;
    (xn == 1 && yn == 2) || (xn == 2 && yn == 1)
}
