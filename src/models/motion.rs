//! Motion descriptors
//!
//! A motion is what one prop does across a beat: where it starts and ends,
//! how it turns, and which way it is oriented.

use super::location::Location;
use super::orientation::Orientation;
use super::prop::PropType;
use crate::placement::PlacementError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two hands of a pictograph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }

    pub fn other(&self) -> Color {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            _ => Err(format!("Invalid color: '{}'. Expected red or blue", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    Static,
    Dash,
    Float,
}

impl MotionType {
    pub const ALL: [MotionType; 5] = [
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Static,
        MotionType::Dash,
        MotionType::Float,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Static => "static",
            MotionType::Dash => "dash",
            MotionType::Float => "float",
        }
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MotionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pro" => Ok(MotionType::Pro),
            "anti" => Ok(MotionType::Anti),
            "static" => Ok(MotionType::Static),
            "dash" => Ok(MotionType::Dash),
            "float" => Ok(MotionType::Float),
            _ => Err(format!("Invalid motion type: '{}'. Expected one of: pro, anti, static, dash, float", s)),
        }
    }
}

/// Spin direction of the prop during the motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
    #[serde(rename = "norotation")]
    NoRotation,
}

impl Default for RotationDirection {
    fn default() -> Self {
        RotationDirection::NoRotation
    }
}

impl RotationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "cw",
            RotationDirection::CounterClockwise => "ccw",
            RotationDirection::NoRotation => "norotation",
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RotationDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cw" | "clockwise" => Ok(RotationDirection::Clockwise),
            "ccw" | "counterclockwise" | "counter_clockwise" => Ok(RotationDirection::CounterClockwise),
            "norotation" | "no_rotation" | "none" | "" => Ok(RotationDirection::NoRotation),
            _ => Err(format!("Invalid rotation direction: '{}'", s)),
        }
    }
}

/// Number of turns in a motion, or the float sentinel ("fl")
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turns {
    Count(f64),
    Float,
}

impl Default for Turns {
    fn default() -> Self {
        Turns::Count(0.0)
    }
}

impl Turns {
    /// The whole-number turn count if it lies in the parity domain {0, 1, 2, 3}
    pub fn parity_count(&self) -> Option<u8> {
        match *self {
            Turns::Count(t) if t.fract() == 0.0 && (0.0..=3.0).contains(&t) => Some(t as u8),
            _ => None,
        }
    }

    /// True for finite, non-negative counts and for the float sentinel
    pub fn is_valid(&self) -> bool {
        match *self {
            Turns::Count(t) => t.is_finite() && t >= 0.0,
            Turns::Float => true,
        }
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turns::Count(t) => write!(f, "{}", t),
            Turns::Float => write!(f, "fl"),
        }
    }
}

impl FromStr for Turns {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("fl") || trimmed.eq_ignore_ascii_case("float") {
            return Ok(Turns::Float);
        }
        trimmed
            .parse::<f64>()
            .map(Turns::Count)
            .map_err(|_| format!("Invalid turns: '{}'. Expected a number or 'fl'", s))
    }
}

// Numbers serialize as numbers, the sentinel as "fl"
impl Serialize for Turns {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Turns::Count(t) => serializer.serialize_f64(*t),
            Turns::Float => serializer.serialize_str("fl"),
        }
    }
}

// Accepts a number, a numeric string, or "fl"
impl<'de> Deserialize<'de> for Turns {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TurnsVisitor;

        impl<'de> serde::de::Visitor<'de> for TurnsVisitor {
            type Value = Turns;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a turn count or \"fl\"")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                Ok(Turns::Count(value as f64))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                Ok(Turns::Count(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                Ok(Turns::Count(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Turns, E>
            where
                E: serde::de::Error,
            {
                value.parse::<Turns>().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(TurnsVisitor)
    }
}

/// One prop's motion across a beat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionData {
    pub motion_type: MotionType,

    #[serde(rename = "prop_rot_dir", default)]
    pub rotation_direction: RotationDirection,

    #[serde(rename = "start_loc")]
    pub start_location: Location,

    #[serde(rename = "end_loc")]
    pub end_location: Location,

    #[serde(default)]
    pub turns: Turns,

    #[serde(rename = "start_ori")]
    pub start_orientation: Orientation,

    /// Resolved end orientation; `None` until the orientation resolver runs
    #[serde(rename = "end_ori", default, skip_serializing_if = "Option::is_none")]
    pub end_orientation: Option<Orientation>,

    #[serde(default)]
    pub prop_type: PropType,
}

impl MotionData {
    /// Create a motion with no turns, no rotation, a staff prop and no resolved end orientation
    pub fn new(
        motion_type: MotionType,
        start_location: Location,
        end_location: Location,
        start_orientation: Orientation,
    ) -> Self {
        Self {
            motion_type,
            rotation_direction: RotationDirection::NoRotation,
            start_location,
            end_location,
            turns: Turns::Count(0.0),
            start_orientation,
            end_orientation: None,
            prop_type: PropType::Staff,
        }
    }

    pub fn with_turns(mut self, turns: Turns) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_rotation(mut self, rotation_direction: RotationDirection) -> Self {
        self.rotation_direction = rotation_direction;
        self
    }

    pub fn with_prop_type(mut self, prop_type: PropType) -> Self {
        self.prop_type = prop_type;
        self
    }

    pub fn with_end_orientation(mut self, end_orientation: Orientation) -> Self {
        self.end_orientation = Some(end_orientation);
        self
    }

    pub fn with_start_orientation(mut self, start_orientation: Orientation) -> Self {
        self.start_orientation = start_orientation;
        self
    }

    /// Reject turn counts that are negative or not finite
    pub fn validate(&self, color: Color) -> Result<(), PlacementError> {
        if self.turns.is_valid() {
            Ok(())
        } else {
            Err(PlacementError::InvalidTurns { color, turns: self.turns })
        }
    }

    /// End orientation if resolved, otherwise the start orientation
    pub fn effective_end_orientation(&self) -> Orientation {
        self.end_orientation.unwrap_or(self.start_orientation)
    }
}
