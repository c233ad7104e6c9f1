use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::GridError;

/// Integer grid point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Move `steps` units in `direction`
    ///
    /// Returns `None` if either coordinate leaves the `i64` range.
    pub fn step(self, direction: Direction, steps: i64) -> Option<Point> {
        let (dx, dy) = direction.unit_vector();
        Some(Point {
            x: self.x.checked_add(dx.checked_mul(steps)?)?,
            y: self.y.checked_add(dy.checked_mul(steps)?)?,
        })
    }
}

/// One of the four axis-aligned compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit displacement `(dx, dy)`; north is +y
    pub fn unit_vector(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// East and west moves run along a fixed y
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    /// Tokens are matched exactly; `"North"` or `" east"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(GridError::InvalidDirection {
                index: 0,
                token: other.to_string(),
            }),
        }
    }
}
