//! Door values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SimError;

/// One of the three doors, numbered 0, 1 and 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Door(u8);

impl Door {
    /// Number of doors in the game
    pub const COUNT: u8 = 3;

    pub const ALL: [Door; 3] = [Door(0), Door(1), Door(2)];

    /// Create a door, rejecting anything outside 0..=2
    pub fn new(index: u8) -> crate::Result<Self> {
        if index < Self::COUNT {
            Ok(Door(index))
        } else {
            Err(SimError::InvalidDoor(index))
        }
    }

    /// Door index
    pub fn index(self) -> u8 {
        self.0
    }

    /// The single door that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two doors remain in that case.
    pub fn third(a: Door, b: Door) -> Option<Door> {
        if a == b {
            None
        } else {
            // indices sum to 3
            Some(Door(Self::COUNT - a.0 - b.0))
        }
    }

    /// The two other doors, in ascending order
    pub fn others(self) -> [Door; 2] {
        match self.0 {
            0 => [Door(1), Door(2)],
            1 => [Door(0), Door(2)],
            _ => [Door(0), Door(1)],
        }
    }
}

impl TryFrom<u8> for Door {
    type Error = SimError;

    fn try_from(value: u8) -> crate::Result<Self> {
        Door::new(value)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> u8 {
        door.0
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a door sequence from raw indices
pub fn doors(indices: &[u8]) -> crate::Result<Vec<Door>> {
    indices.iter().map(|&i| Door::new(i)).collect()
}
