//! Separation directions
//!
//! When two props share a grid point, each one is nudged along one of eight
//! directions so the pair stays readable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparationDirection {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl SeparationDirection {
    pub const ALL: [SeparationDirection; 8] = [
        SeparationDirection::Left,
        SeparationDirection::Right,
        SeparationDirection::Up,
        SeparationDirection::Down,
        SeparationDirection::UpLeft,
        SeparationDirection::UpRight,
        SeparationDirection::DownLeft,
        SeparationDirection::DownRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeparationDirection::Left => "left",
            SeparationDirection::Right => "right",
            SeparationDirection::Up => "up",
            SeparationDirection::Down => "down",
            SeparationDirection::UpLeft => "upleft",
            SeparationDirection::UpRight => "upright",
            SeparationDirection::DownLeft => "downleft",
            SeparationDirection::DownRight => "downright",
        }
    }

    pub fn is_diagonal(&self) -> bool {
        matches!(
            self,
            SeparationDirection::UpLeft
                | SeparationDirection::UpRight
                | SeparationDirection::DownLeft
                | SeparationDirection::DownRight
        )
    }

    /// The exact opposite direction. Applying it twice yields the original.
    pub fn opposite(&self) -> SeparationDirection {
        match self {
            SeparationDirection::Left => SeparationDirection::Right,
            SeparationDirection::Right => SeparationDirection::Left,
            SeparationDirection::Up => SeparationDirection::Down,
            SeparationDirection::Down => SeparationDirection::Up,
            SeparationDirection::UpLeft => SeparationDirection::DownRight,
            SeparationDirection::DownRight => SeparationDirection::UpLeft,
            SeparationDirection::UpRight => SeparationDirection::DownLeft,
            SeparationDirection::DownLeft => SeparationDirection::UpRight,
        }
    }

    /// Unit signs of the screen-space vector (y grows downward)
    pub fn signs(&self) -> (f64, f64) {
        match self {
            SeparationDirection::Left => (-1.0, 0.0),
            SeparationDirection::Right => (1.0, 0.0),
            SeparationDirection::Up => (0.0, -1.0),
            SeparationDirection::Down => (0.0, 1.0),
            SeparationDirection::UpLeft => (-1.0, -1.0),
            SeparationDirection::UpRight => (1.0, -1.0),
            SeparationDirection::DownLeft => (-1.0, 1.0),
            SeparationDirection::DownRight => (1.0, 1.0),
        }
    }
}

impl fmt::Display for SeparationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeparationDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect();
        match normalized.as_str() {
            "left" => Ok(SeparationDirection::Left),
            "right" => Ok(SeparationDirection::Right),
            "up" => Ok(SeparationDirection::Up),
            "down" => Ok(SeparationDirection::Down),
            "upleft" => Ok(SeparationDirection::UpLeft),
            "upright" => Ok(SeparationDirection::UpRight),
            "downleft" => Ok(SeparationDirection::DownLeft),
            "downright" => Ok(SeparationDirection::DownRight),
            _ => Err(format!("Invalid separation direction: '{}'", s)),
        }
    }
}
