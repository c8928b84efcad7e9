use thiserror::Error;

/// Main error type for the Pokemann battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// Error related to game data or configuration loading
    #[error("Data error: {0}")]
    Data(#[from] DataError),
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error related to invalid trainer actions or input
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
}

/// Errors raised while loading and validating game data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
    #[error("Malformed data: {0}")]
    Parse(String),
    #[error("Move not found: {0}")]
    MoveNotFound(String),
    #[error("Creature not found: {0}")]
    CreatureNotFound(String),
    #[error("Opponent not found: {0}")]
    OpponentNotFound(String),
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),
    #[error("Invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// No unfainted creature was found when one was expected
    #[error("{owner} has no active creature")]
    NoActiveCreature { owner: String },
    /// Roster index is out of bounds
    #[error("Invalid creature index: {0}")]
    InvalidCreatureIndex(usize),
}

/// Errors related to trainer actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Move index is out of bounds
    #[error("Invalid move index: {0}")]
    InvalidMoveIndex(usize),
    /// The move has no uses left
    #[error("{creature} has no uses of {move_name} remaining")]
    MoveExhausted { creature: String, move_name: String },
    /// The input collaborator has no more replies
    #[error("Input closed")]
    InputClosed,
    /// Too many out-of-range or unreadable replies in a row
    #[error("Too many invalid choices for prompt: {prompt}")]
    TooManyInvalidChoices { prompt: String },
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_errors_convert_and_display() {
        let err: BattleEngineError = ActionError::InvalidMoveIndex(7).into();
        assert_eq!(err.to_string(), "Action error: Invalid move index: 7");

        let err: BattleEngineError = DataError::MoveNotFound("Recess".to_string()).into();
        assert!(matches!(err, BattleEngineError::Data(DataError::MoveNotFound(_))));
    }
}
