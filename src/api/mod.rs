//! Placement Engine WASM API
//!
//! This module provides the JavaScript-facing API for the placement engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error conversion and logging
//! - `placement`: Beat/sequence placement and the individual resolvers

pub mod helpers;
pub mod placement;

pub use placement::{
    opposite_direction, resolve_beat_placement, resolve_beat_placement_json, resolve_directional_offset,
    resolve_end_orientation, resolve_offset_divisor, resolve_separation_direction, resolve_sequence_placement,
};
