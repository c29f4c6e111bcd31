//! Error types for the adventure engine.
//!
//! Uses thiserror for ergonomic error definition.

use crate::world::SceneId;

/// Main error type for the adventure engine.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Reading player input or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A connection or the session points at a scene the world does not have
    #[error("Unknown scene: {0}")]
    UnknownScene(SceneId),

    /// The world failed validation before the game started
    #[error("Invalid world: {0}")]
    InvalidWorld(String),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
