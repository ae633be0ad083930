//! Motion-to-placement resolution
//!
//! Pure resolvers that turn a beat's two motions into a separation direction,
//! a displacement vector and an end orientation per color.
//!
//! # Module Structure
//!
//! - `orientation`: end orientation from motion type, start orientation and turns
//! - `direction`: separation direction tables and the letter-I pairing
//! - `offset`: prop-size-scaled displacement vectors
//! - `orchestrator`: per-beat and per-sequence composition
//! - `config`: scene size configuration
//! - `errors`: rejected-input errors

pub mod config;
pub mod direction;
pub mod errors;
pub mod offset;
pub mod orchestrator;
pub mod orientation;

pub use config::{PlacementConfig, DEFAULT_SCENE_SIZE};
pub use direction::{direction_table_lookup, opposite, resolve_separation_direction, standard_direction, DEFAULT_DIRECTION};
pub use errors::{PlacementError, Result};
pub use offset::{
    resolve_base_offset, resolve_diagonal_offset, resolve_directional_offset, resolve_named_offset,
    resolve_named_offset_for_prop_name, resolve_class_offset,
    resolve_offset_divisor, resolve_offset_divisor_for_name, resolve_pair_offsets, Offset,
};
pub use orchestrator::{
    resolve_beat_orientations, resolve_beat_placement, resolve_beat_placement_json, resolve_sequence_placement,
    BeatPlacement, PlacementResult,
};
pub use orientation::{resolve_end_orientation, resolve_motion_end_orientation, with_resolved_orientation};
