//! Separation-direction resolution
//!
//! Picks which way each color's prop is nudged when both props land on the
//! same grid point. The choice depends on the grid mode of the end location,
//! whether the end orientation is radial, and the color. Letter I places its
//! props as a mirrored pair keyed off the pro motion.

use super::orientation::resolve_motion_end_orientation;
use crate::models::{BeatData, Color, GridMode, Location, MotionData, MotionType, SeparationDirection};

/// Returned for any (table, location, color) combination the tables don't define
pub const DEFAULT_DIRECTION: SeparationDirection = SeparationDirection::Right;

/// Look up a direction in the table selected by `(grid_mode, radial)`.
///
/// Combinations outside the selected table (e.g. a diagonal location in a
/// diamond table) return [`DEFAULT_DIRECTION`].
pub fn direction_table_lookup(grid_mode: GridMode, radial: bool, location: Location, color: Color) -> SeparationDirection {
    use Color::{Blue, Red};
    use Location::*;
    use SeparationDirection::*;

    match (grid_mode, radial, location, color) {
        // Diamond, radial
        (GridMode::Diamond, true, N, Red) => Right,
        (GridMode::Diamond, true, N, Blue) => Left,
        (GridMode::Diamond, true, E, Red) => Down,
        (GridMode::Diamond, true, E, Blue) => Up,
        (GridMode::Diamond, true, S, Red) => Left,
        (GridMode::Diamond, true, S, Blue) => Right,
        (GridMode::Diamond, true, W, Red) => Up,
        (GridMode::Diamond, true, W, Blue) => Down,

        // Diamond, non-radial
        (GridMode::Diamond, false, N, Red) => Up,
        (GridMode::Diamond, false, N, Blue) => Down,
        (GridMode::Diamond, false, S, Red) => Up,
        (GridMode::Diamond, false, S, Blue) => Down,
        (GridMode::Diamond, false, E, Red) => Right,
        (GridMode::Diamond, false, E, Blue) => Left,
        (GridMode::Diamond, false, W, Red) => Left,
        (GridMode::Diamond, false, W, Blue) => Right,

        // Box, radial
        (GridMode::Box, true, NE, Red) => DownRight,
        (GridMode::Box, true, NE, Blue) => UpLeft,
        (GridMode::Box, true, SE, Red) => UpRight,
        (GridMode::Box, true, SE, Blue) => DownLeft,
        (GridMode::Box, true, SW, Red) => DownRight,
        (GridMode::Box, true, SW, Blue) => UpLeft,
        (GridMode::Box, true, NW, Red) => UpRight,
        (GridMode::Box, true, NW, Blue) => DownLeft,

        // Box, non-radial
        (GridMode::Box, false, NE, Red) => UpRight,
        (GridMode::Box, false, NE, Blue) => DownLeft,
        (GridMode::Box, false, SE, Red) => DownRight,
        (GridMode::Box, false, SE, Blue) => UpLeft,
        (GridMode::Box, false, SW, Red) => UpRight,
        (GridMode::Box, false, SW, Blue) => DownLeft,
        (GridMode::Box, false, NW, Red) => DownRight,
        (GridMode::Box, false, NW, Blue) => UpLeft,

        _ => {
            log::debug!(
                "No direction for {} at {} ({} grid, radial={}), using {}",
                color, location, grid_mode, radial, DEFAULT_DIRECTION
            );
            DEFAULT_DIRECTION
        }
    }
}

/// Direction from the motion's own end location and orientation
pub fn standard_direction(motion: &MotionData, color: Color) -> SeparationDirection {
    let radial = resolve_motion_end_orientation(motion).is_radial();
    let grid_mode = motion.end_location.grid_mode();
    direction_table_lookup(grid_mode, radial, motion.end_location, color)
}

/// Direction for the pro motion of a letter-I beat, if the beat has one pro
/// and one anti motion
fn letter_i_direction(beat: &BeatData, color: Color) -> Option<SeparationDirection> {
    let pro_color = beat.color_with_motion_type(MotionType::Pro)?;
    let anti_color = beat.color_with_motion_type(MotionType::Anti)?;
    if pro_color == anti_color {
        return None;
    }
    let pro_motion = beat.motion(pro_color)?;
    let pro_direction = standard_direction(pro_motion, pro_color);

    if color == pro_color {
        Some(pro_direction)
    } else {
        Some(pro_direction.opposite())
    }
}

/// Resolve the separation direction of `color`'s `motion` within `beat`.
///
/// Never fails; unmapped combinations fall back to [`DEFAULT_DIRECTION`].
pub fn resolve_separation_direction(motion: &MotionData, beat: &BeatData, color: Color) -> SeparationDirection {
    if beat.is_letter_i() {
        if let Some(direction) = letter_i_direction(beat, color) {
            return direction;
        }
        log::debug!("Letter I beat without a pro/anti pair, using standard direction for {}", color);
    }
    standard_direction(motion, color)
}

/// Opposite of a direction (see [`SeparationDirection::opposite`])
pub fn opposite(direction: SeparationDirection) -> SeparationDirection {
    direction.opposite()
}
