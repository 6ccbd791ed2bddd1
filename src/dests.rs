use std::collections::BTreeMap;

use log::{debug, trace};

use crate::board::Board;
use crate::mobility;
use crate::piece::{Color, Piece, Role};
use crate::square::{key_to_pos, pos_to_key, Square, ALL_POS};

/// Pick the movement predicate for `piece`. Pawns depend on color; the king
/// also needs the rook files on its back rank and the castling flag.
fn mobility_for(board: &Board, piece: Piece, can_castle: bool) -> Box<dyn Fn(u8, u8, u8, u8) -> bool> {
    match piece.role {
        Role::Pawn => Box::new(mobility::pawn(piece.color)),
        Role::King => Box::new(mobility::king(piece.color, board.rook_files_of(piece.color), can_castle)),
        Role::Knight => Box::new(mobility::knight),
        Role::Bishop => Box::new(mobility::bishop),
        Role::Rook => Box::new(mobility::rook),
        Role::Queen => Box::new(mobility::queen),
        Role::Valet => Box::new(mobility::valet),
        Role::Elephant => Box::new(mobility::elephant),
        Role::Fool => Box::new(mobility::fool),
        Role::Warden => Box::new(mobility::warden),
        Role::Prince => Box::new(mobility::prince),
        Role::Lady => Box::new(mobility::lady),
        Role::Dragon => Box::new(mobility::dragon),
        Role::Arma => Box::new(mobility::arma),
        Role::Monk => Box::new(mobility::monk),
        Role::Goshawk => Box::new(mobility::goshawk),
        Role::Unicorn => Box::new(mobility::unicorn),
        Role::Cannon => Box::new(mobility::cannon),
        Role::Junk => Box::new(mobility::junk),
        Role::Zebra => Box::new(mobility::zebra),
        Role::Standard => Box::new(mobility::standard),
    }
}

/// Squares the piece on `key` could be premoved to, ignoring occupancy,
/// check and turn. An empty square yields no destinations.
///
/// Results follow [`Square::ALL`] order and never contain `key` itself.
pub fn premove(board: &Board, key: Square, can_castle: bool) -> Vec<Square> {
    let Some(piece) = board.piece_at(key) else {
        debug!("premove from empty square {}", key);
        return Vec::new();
    };
    let pos = key_to_pos(key);
    let mobility = mobility_for(board, piece, can_castle);
    let dests: Vec<Square> = ALL_POS
        .iter()
        .filter(|p2| (pos.file != p2.file || pos.rank != p2.rank) && mobility(pos.file, pos.rank, p2.file, p2.rank))
        .map(|&p2| pos_to_key(p2))
        .collect();
    trace!("premove {} from {}: {} destinations", piece, key, dests.len());
    dests
}

/// Premove destinations for every piece of `color` that has at least one.
pub fn premove_dests(board: &Board, color: Color, can_castle: bool) -> BTreeMap<Square, Vec<Square>> {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .filter_map(|(sq, _)| {
            let dests = premove(board, sq, can_castle);
            (!dests.is_empty()).then_some((sq, dests))
        })
        .collect()
}
