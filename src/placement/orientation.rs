//! End-orientation resolution
//!
//! The parity rule:
//!
//! | motion type  | even turns    | odd turns     |
//! |--------------|---------------|---------------|
//! | pro, static  | start         | switch(start) |
//! | anti, dash   | switch(start) | start         |
//!
//! It only applies to whole turn counts 0..=3. Anything else, including the
//! float sentinel and float motions, keeps the start orientation.

use crate::models::{MotionData, MotionType, Orientation, Turns};

pub fn resolve_end_orientation(motion_type: MotionType, start_orientation: Orientation, turns: Turns) -> Orientation {
    let count = match turns.parity_count() {
        Some(count) => count,
        None => {
            log::debug!("Turns {} outside parity domain, keeping {}", turns, start_orientation);
            return start_orientation;
        }
    };
    let even = count % 2 == 0;

    match motion_type {
        MotionType::Pro | MotionType::Static => {
            if even {
                start_orientation
            } else {
                start_orientation.switched()
            }
        }
        MotionType::Anti | MotionType::Dash => {
            if even {
                start_orientation.switched()
            } else {
                start_orientation
            }
        }
        MotionType::Float => start_orientation,
    }
}

/// Resolve a motion's end orientation, keeping one that is already set
pub fn resolve_motion_end_orientation(motion: &MotionData) -> Orientation {
    match motion.end_orientation {
        Some(orientation) => orientation,
        None => resolve_end_orientation(motion.motion_type, motion.start_orientation, motion.turns),
    }
}

/// Copy of the motion with its end orientation filled in
pub fn with_resolved_orientation(motion: &MotionData) -> MotionData {
    let end = resolve_motion_end_orientation(motion);
    motion.clone().with_end_orientation(end)
}
