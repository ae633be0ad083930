//! Offset resolution: separation direction + prop size → displacement vector
//!
//! The base offset is `scene_size / divisor`, where the divisor depends on
//! the prop's size class. Diagonal directions use `base / √2` on each axis so
//! every vector has the same length. Screen y grows downward.

use crate::models::{PropSizeClass, PropType, SeparationDirection};
use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};

/// 2D displacement in scene units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, factor: f64) -> Offset {
        Offset::new(self.x * factor, self.y * factor)
    }
}

impl From<Offset> for (f64, f64) {
    fn from(offset: Offset) -> Self {
        (offset.x, offset.y)
    }
}

pub fn resolve_offset_divisor(size_class: PropSizeClass) -> f64 {
    match size_class {
        PropSizeClass::Large => 60.0,
        PropSizeClass::Medium => 50.0,
        PropSizeClass::Small => 45.0,
    }
}

/// Divisor for a prop name; unrecognized names use the small divisor
pub fn resolve_offset_divisor_for_name(prop_name: &str) -> f64 {
    resolve_offset_divisor(PropSizeClass::from_prop_name(prop_name))
}

pub fn resolve_base_offset(prop_type: PropType, scene_size: f64) -> f64 {
    scene_size / resolve_offset_divisor(prop_type.size_class())
}

pub fn resolve_diagonal_offset(prop_type: PropType, scene_size: f64) -> f64 {
    resolve_base_offset(prop_type, scene_size) / std::f64::consts::SQRT_2
}

/// Displacement for a direction at a given size class
pub fn resolve_class_offset(direction: SeparationDirection, size_class: PropSizeClass, scene_size: f64) -> Offset {
    let base = scene_size / resolve_offset_divisor(size_class);
    let magnitude = if direction.is_diagonal() {
        base / std::f64::consts::SQRT_2
    } else {
        base
    };
    let (sx, sy) = direction.signs();
    Offset::new(sx * magnitude, sy * magnitude)
}

pub fn resolve_directional_offset(direction: SeparationDirection, prop_type: PropType, scene_size: f64) -> Offset {
    resolve_class_offset(direction, prop_type.size_class(), scene_size)
}

/// Offset for a direction given by name. Unknown names yield (0, 0).
pub fn resolve_named_offset(direction_name: &str, prop_type: PropType, scene_size: f64) -> Offset {
    resolve_named_offset_for_class(direction_name, prop_type.size_class(), scene_size)
}

/// Offset for a direction name and a prop name.
///
/// Unknown directions yield (0, 0); unknown props use the small size class.
pub fn resolve_named_offset_for_prop_name(direction_name: &str, prop_name: &str, scene_size: f64) -> Offset {
    resolve_named_offset_for_class(direction_name, PropSizeClass::from_prop_name(prop_name), scene_size)
}

fn resolve_named_offset_for_class(direction_name: &str, size_class: PropSizeClass, scene_size: f64) -> Offset {
    match direction_name.parse::<SeparationDirection>() {
        Ok(direction) => resolve_class_offset(direction, size_class, scene_size),
        Err(_) => {
            log::debug!("Unknown separation direction '{}', using zero offset", direction_name);
            Offset::ZERO
        }
    }
}

/// Resolve both props of a pair independently
pub fn resolve_pair_offsets(
    direction_a: SeparationDirection,
    direction_b: SeparationDirection,
    prop_type: PropType,
    scene_size: f64,
) -> (Offset, Offset) {
    (
        resolve_directional_offset(direction_a, prop_type, scene_size),
        resolve_directional_offset(direction_b, prop_type, scene_size),
    )
}
