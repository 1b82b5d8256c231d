//! Type definitions for `galaxy_core`.
//!
//! Planets, fleets, identifiers and the orders the strategy emits.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! index_id {
    ($name:ident, $inner:ty) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub $inner);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

index_id!(PlanetId, usize);
index_id!(PlayerId, u32);

impl PlayerId {
    pub const NEUTRAL: PlayerId = PlayerId(0);
    /// The player this bot controls. The engine always numbers us 1.
    pub const SELF: PlayerId = PlayerId(1);

    pub fn is_neutral(self) -> bool {
        self == Self::NEUTRAL
    }

    pub fn is_self(self) -> bool {
        self == Self::SELF
    }

    /// Any player id of 2 or above.
    pub fn is_rival(self) -> bool {
        self.0 > Self::SELF.0
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub owner: PlayerId,
    /// The planet's population. Never negative in a snapshot.
    pub ship_count: i32,
    /// Ships added per turn while held by a non-neutral player.
    pub growth_rate: i32,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    pub owner: PlayerId,
    pub ship_count: i32,
    pub source: PlanetId,
    pub destination: PlanetId,
    pub total_trip_length: u32,
    /// 1 means the fleet lands next turn.
    pub turns_remaining: u32,
}

/// One outbound order: send `ships` from `source` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub source: PlanetId,
    pub destination: PlanetId,
    pub ships: i32,
}
