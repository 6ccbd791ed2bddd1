use std::collections::BTreeMap;
use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::piece::{Color, Piece, Role};
use crate::square::Square;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read board: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only snapshot of piece placement. A missing square is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pieces: BTreeMap<Square, Piece>,
}

impl Board {
    pub fn new() -> Self { Self::default() }

    /// Parse a JSON object keyed by square name, e.g. `{"e1": {"role": "king", "color": "white"}}`.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let board: Board = serde_json::from_str(json)?;
        debug!("loaded board with {} pieces", board.len());
        Ok(board)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BoardError> {
        let board: Board = serde_json::from_reader(reader)?;
        debug!("loaded board with {} pieces", board.len());
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> { self.pieces.get(&sq).copied() }

    pub fn insert(&mut self, sq: Square, piece: Piece) -> Option<Piece> { self.pieces.insert(sq, piece) }

    pub fn remove(&mut self, sq: Square) -> Option<Piece> { self.pieces.remove(&sq) }

    pub fn len(&self) -> usize { self.pieces.len() }

    pub fn is_empty(&self) -> bool { self.pieces.is_empty() }

    /// Occupied squares in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&sq, &p)| (sq, p))
    }

    /// Files of `color`'s rooks standing on its back rank. These are the castling targets.
    pub fn rook_files_of(&self, color: Color) -> Vec<u8> {
        let back_rank = color.back_rank();
        self.pieces()
            .filter(|(sq, p)| sq.rank() == back_rank && p.color == color && p.role == Role::Rook)
            .map(|(sq, _)| sq.file())
            .collect()
    }
}

impl FromIterator<(Square, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Self {
        Self { pieces: iter.into_iter().collect() }
    }
}
