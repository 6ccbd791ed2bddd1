use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoleError {
    #[error("unknown role '{0}'")]
    Unknown(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown color '{0}': use 'white' or 'black'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank 0 for white, rank 7 for black.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            _ => Err(ColorError::Unknown(s.to_string())),
        }
    }
}

/// Movement archetype of a piece. Standard chess roles first, then fairy roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Valet,
    Elephant,
    Fool,
    Warden,
    Prince,
    Lady,
    Dragon,
    Arma,
    Monk,
    Goshawk,
    Cannon,
    Junk,
    Zebra,
    Unicorn,
    /// Never moves. The name is a label, not a placeholder.
    Standard,
}

impl Role {
    pub const ALL: [Role; 21] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
        Role::Valet,
        Role::Elephant,
        Role::Fool,
        Role::Warden,
        Role::Prince,
        Role::Lady,
        Role::Dragon,
        Role::Arma,
        Role::Monk,
        Role::Goshawk,
        Role::Cannon,
        Role::Junk,
        Role::Zebra,
        Role::Unicorn,
        Role::Standard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Pawn => "pawn",
            Role::Knight => "knight",
            Role::Bishop => "bishop",
            Role::Rook => "rook",
            Role::Queen => "queen",
            Role::King => "king",
            Role::Valet => "valet",
            Role::Elephant => "elephant",
            Role::Fool => "fool",
            Role::Warden => "warden",
            Role::Prince => "prince",
            Role::Lady => "lady",
            Role::Dragon => "dragon",
            Role::Arma => "arma",
            Role::Monk => "monk",
            Role::Goshawk => "goshawk",
            Role::Cannon => "cannon",
            Role::Junk => "junk",
            Role::Zebra => "zebra",
            Role::Unicorn => "unicorn",
            Role::Standard => "standard",
        }
    }

    /// Like `parse`, but an unrecognized name becomes the immobile `Standard` role.
    pub fn from_name_lossy(name: &str) -> Role {
        match name.parse() {
            Ok(role) => role,
            Err(_) => {
                warn!("unknown role '{}', treating it as immobile", name);
                Role::Standard
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.name() == lower)
            .ok_or_else(|| RoleError::Unknown(s.to_string()))
    }
}

impl From<String> for Role {
    fn from(s: String) -> Role { Role::from_name_lossy(&s) }
}

impl From<Role> for String {
    fn from(r: Role) -> String { r.name().to_string() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
}

impl Piece {
    pub const fn new(role: Role, color: Color) -> Self {
        Self { role, color }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}
