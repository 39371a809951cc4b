//! Shape families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven canonical tetromino letters.
///
/// Variants are declared alphabetically so the derived ordering matches the
/// letter ordering used when sorting tasks for auto-placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeFamily {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeFamily {
    /// All families in letter order.
    pub const ALL: [ShapeFamily; 7] = [
        ShapeFamily::I,
        ShapeFamily::J,
        ShapeFamily::L,
        ShapeFamily::O,
        ShapeFamily::S,
        ShapeFamily::T,
        ShapeFamily::Z,
    ];

    pub fn letter(self) -> char {
        match self {
            Self::I => 'I',
            Self::J => 'J',
            Self::L => 'L',
            Self::O => 'O',
            Self::S => 'S',
            Self::T => 'T',
            Self::Z => 'Z',
        }
    }

    /// Picks a family for the `n`th task when the caller gave no hint.
    pub fn round_robin(n: usize) -> Self {
        Self::ALL[n % Self::ALL.len()]
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for ShapeFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" => Ok(Self::I),
            "J" => Ok(Self::J),
            "L" => Ok(Self::L),
            "O" => Ok(Self::O),
            "S" => Ok(Self::S),
            "T" => Ok(Self::T),
            "Z" => Ok(Self::Z),
            other => Err(format!("unknown shape family '{}'", other)),
        }
    }
}
