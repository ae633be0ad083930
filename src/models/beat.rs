//! Beat data: one pictograph's letter plus a motion per color

use super::motion::{Color, MotionData, MotionType};
use serde::{Deserialize, Serialize};

/// Letter whose two props are placed as a mirrored pair
pub const LETTER_I: char = 'I';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatData {
    /// Notation symbol identifying the pictograph
    pub letter: char,

    #[serde(rename = "red_attributes", alias = "red", default)]
    pub red_motion: Option<MotionData>,

    #[serde(rename = "blue_attributes", alias = "blue", default)]
    pub blue_motion: Option<MotionData>,
}

impl BeatData {
    pub fn new(letter: char, red_motion: MotionData, blue_motion: MotionData) -> Self {
        Self {
            letter,
            red_motion: Some(red_motion),
            blue_motion: Some(blue_motion),
        }
    }

    pub fn motion(&self, color: Color) -> Option<&MotionData> {
        match color {
            Color::Red => self.red_motion.as_ref(),
            Color::Blue => self.blue_motion.as_ref(),
        }
    }

    pub fn set_motion(&mut self, color: Color, motion: MotionData) {
        match color {
            Color::Red => self.red_motion = Some(motion),
            Color::Blue => self.blue_motion = Some(motion),
        }
    }

    pub fn is_letter_i(&self) -> bool {
        self.letter == LETTER_I
    }

    /// The color whose motion has the given type, if exactly one color does
    pub fn color_with_motion_type(&self, motion_type: MotionType) -> Option<Color> {
        let mut found = Color::ALL
            .into_iter()
            .filter(|color| self.motion(*color).map(|m| m.motion_type) == Some(motion_type));
        match (found.next(), found.next()) {
            (Some(color), None) => Some(color),
            _ => None,
        }
    }
}
