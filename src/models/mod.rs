//! Models module for the placement engine
//!
//! This module contains the closed domain enumerations and the immutable
//! motion/beat values the resolvers operate on.

pub mod beat;
pub mod direction;
pub mod location;
pub mod motion;
pub mod orientation;
pub mod prop;

// Re-export commonly used types
pub use beat::{BeatData, LETTER_I};
pub use direction::SeparationDirection;
pub use location::{GridMode, Location};
pub use motion::{Color, MotionData, MotionType, RotationDirection, Turns};
pub use orientation::Orientation;
pub use prop::{PropSizeClass, PropType};
