//! Wire form of a path request and its validation

use serde::{Deserialize, Serialize};

use crate::errors::{GridError, Result};
use crate::model::{Move, Point};

/// One command as it arrives on the wire
///
/// `direction` stays a free-form string and `steps` optional so that bad
/// input reaches validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub direction: String,
    #[serde(default)]
    pub steps: Option<i64>,
}

impl CommandSpec {
    pub fn new(direction: impl Into<String>, steps: i64) -> Self {
        Self {
            direction: direction.into(),
            steps: Some(steps),
        }
    }
}

/// Body of `POST /enter-path` and input file of `gridwalk compute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub start: Point,
    pub commands: Vec<CommandSpec>,
}

impl PathRequest {
    /// Validate all commands, returning the typed moves
    ///
    /// # Errors
    /// * `NoCommands` - the command list is empty
    /// * `InvalidDirection`, `MissingSteps`, `NegativeSteps` - for the first
    ///   offending command
    pub fn validate(&self) -> Result<Vec<Move>> {
        if self.commands.is_empty() {
            return Err(GridError::NoCommands);
        }
        validate_commands(&self.commands)
    }
}

/// Turn wire commands into moves, tagging errors with the command index
///
/// # Errors
/// Returns the first invalid command's error.
pub fn validate_commands(commands: &[CommandSpec]) -> Result<Vec<Move>> {
    commands
        .iter()
        .enumerate()
        .map(|(index, command)| {
            Move::parse(&command.direction, command.steps).map_err(|e| e.at_index(index))
        })
        .collect()
}
