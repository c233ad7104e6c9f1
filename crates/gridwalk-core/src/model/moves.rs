use crate::errors::{GridError, Result};
use crate::model::Direction;

/// A validated move: a direction and a non-negative step count
///
/// `steps = 0` is allowed and covers only the current point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    direction: Direction,
    steps: i64,
}

impl Move {
    /// Create a move, rejecting negative step counts
    ///
    /// Errors carry `index = 0`; list validation re-tags them with the
    /// command's position.
    pub fn new(direction: Direction, steps: i64) -> Result<Self> {
        if steps < 0 {
            return Err(GridError::NegativeSteps { index: 0, steps });
        }
        Ok(Self { direction, steps })
    }

    /// Build a move from its wire form (direction token + optional steps)
    pub fn parse(token: &str, steps: Option<i64>) -> Result<Self> {
        let direction: Direction = token.parse()?;
        let steps = steps.ok_or(GridError::MissingSteps { index: 0 })?;
        Self::new(direction, steps)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }
}
