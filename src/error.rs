use thiserror::Error;

use crate::common::Action;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Invalid input. Please enter 9 digits separated by spaces.")]
    InputFormat,

    #[error("No solution exists for the given initial state.")]
    Unsolvable,

    #[error("tiles must be a permutation of 0-8, got {tiles:?}")]
    InvalidTile { tiles: Vec<u8> },

    #[error("action {action} is not legal for state {state}")]
    InvalidAction { action: Action, state: String },

    #[error("unknown algorithm '{name}' (expected one of: bfs, iddfs, gbfs, astar)")]
    UnknownAlgorithm { name: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
