//! Premove destinations: where a piece could go by its movement pattern alone,
//! ignoring occupancy, check and turn. Covers the standard chess roles and a
//! catalog of fairy roles.
pub mod square;
pub mod piece;
pub mod board;
pub mod mobility;
pub mod dests;

pub use board::{Board, BoardError};
pub use piece::{Color, ColorError, Piece, Role, RoleError};
pub use dests::{premove, premove_dests};
pub use square::{key_to_pos, pos_to_key, Pos, Square, SquareError, ALL_POS};
