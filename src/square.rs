use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square '{0}': expected a file a-h followed by a rank 1-8")]
    Invalid(String),
}

/// Zero-based (file, rank) coordinates. `a1` is (0, 0), `h8` is (7, 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub file: u8,
    pub rank: u8,
}

impl Pos {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }
}

/// One of the 64 board squares, stored as `file * 8 + rank`.
///
/// Every value is a valid square: the only way to build one from text is
/// [`Square::from_str`], which rejects anything outside `a1..h8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(u8);

impl Square {
    /// All squares, file-major: a1, a2, .., a8, b1, .., h8.
    pub const ALL: [Square; 64] = {
        let mut all = [Square(0); 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };

    #[inline]
    pub const fn from_pos(pos: Pos) -> Self {
        debug_assert!(pos.file < 8 && pos.rank < 8);
        Square(pos.file * 8 + pos.rank)
    }

    #[inline]
    pub const fn pos(self) -> Pos {
        Pos { file: self.0 / 8, rank: self.0 % 8 }
    }

    #[inline]
    pub const fn file(self) -> u8 { self.0 / 8 }

    #[inline]
    pub const fn rank(self) -> u8 { self.0 % 8 }
}

/// Every coordinate pair, in the same order as [`Square::ALL`].
pub const ALL_POS: [Pos; 64] = {
    let mut all = [Pos { file: 0, rank: 0 }; 64];
    let mut i = 0;
    while i < 64 {
        all[i] = Square::ALL[i].pos();
        i += 1;
    }
    all
};

#[inline]
pub fn key_to_pos(key: Square) -> Pos {
    key.pos()
}

#[inline]
pub fn pos_to_key(pos: Pos) -> Square {
    Square::from_pos(pos)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.pos();
        write!(f, "{}{}", (b'a' + p.file) as char, (b'1' + p.rank) as char)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 { return Err(SquareError::Invalid(s.to_string())); }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(SquareError::Invalid(s.to_string()));
        }
        Ok(Square::from_pos(Pos::new(f - b'a', r - b'1')))
    }
}

impl TryFrom<String> for Square {
    type Error = SquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Square> for String {
    fn from(sq: Square) -> String { sq.to_string() }
}
