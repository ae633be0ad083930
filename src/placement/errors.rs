//! Error types for placement resolution
//!
//! Only rejected input is an error. Documented fallbacks (unmapped table
//! entries, unknown prop names, turn counts outside the parity domain) are
//! resolved to defaults and never surface here.

use crate::models::{Color, Turns};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Beat lacks the motion for one color
    #[error("Beat is missing the {0} motion")]
    MissingMotion(Color),

    /// Turn count is negative or not finite
    #[error("Invalid turns {turns} on {color} motion")]
    InvalidTurns { color: Color, turns: Turns },

    /// Scene size must be a finite, positive number
    #[error("Invalid scene size: {0}")]
    InvalidSceneSize(f64),

    /// Malformed interchange input (JSON, YAML, JS values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
