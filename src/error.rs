//! Centralized error types for the game.
//!
//! All failure paths are construction-time: a malformed board layout or an
//! out-of-range spawn cell is rejected before the first tick. Everything at
//! runtime (illegal move attempts, empty direction sets) is an ordinary
//! no-op condition, not an error.

use glam::IVec2;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Board error: {0}")]
    Board(#[from] BoardError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("Row {row} is {actual} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Board layout has no rows")]
    EmptyBoard,
}

/// Errors related to board construction.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Spawn cell ({}, {}) is outside the board", .0.x, .0.y)]
    SpawnOutOfBounds(IVec2),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
