//! WASM API for placement resolution
//!
//! JavaScript-facing wrappers around the pure resolvers in
//! [`crate::placement`]. Every function is stateless.

use super::helpers::{deserialize, parse_arg, placement_error, serialize};
use crate::models::{BeatData, Color, MotionType, Orientation, SeparationDirection, Turns};
use crate::placement::{self, PlacementConfig};
use crate::{wasm_info, wasm_log, wasm_warn};
use wasm_bindgen::prelude::*;

fn config_for(scene_size: Option<f64>) -> Result<PlacementConfig, JsValue> {
    PlacementConfig::with_scene_size(scene_size).map_err(placement_error)
}

/// Resolve direction, offset and end orientation for both colors of a beat
///
/// # Parameters
/// - `beat_js`: beat object (`letter`, `red_attributes`, `blue_attributes`)
/// - `scene_size`: scene edge length, defaults to 950
///
/// # Returns
/// `{ red: {direction, offset: {x, y}, end_orientation}, blue: {...} }`
#[wasm_bindgen(js_name = resolveBeatPlacement)]
pub fn resolve_beat_placement(beat_js: JsValue, scene_size: Option<f64>) -> Result<JsValue, JsValue> {
    let beat: BeatData = deserialize(beat_js, "Failed to deserialize beat")?;
    let config = config_for(scene_size)?;
    wasm_log!("resolveBeatPlacement: letter={}, scene_size={}", beat.letter, config.scene_size);

    let placement = placement::resolve_beat_placement(&beat, &config).map_err(placement_error)?;
    serialize(&placement, "Failed to serialize placement")
}

/// Place every beat of a sequence, threading end orientations forward
#[wasm_bindgen(js_name = resolveSequencePlacement)]
pub fn resolve_sequence_placement(beats_js: JsValue, scene_size: Option<f64>) -> Result<js_sys::Array, JsValue> {
    let beats: Vec<BeatData> = deserialize(beats_js, "Failed to deserialize beats")?;
    let config = config_for(scene_size)?;
    wasm_info!("resolveSequencePlacement: {} beats", beats.len());

    let placements = placement::resolve_sequence_placement(&beats, &config).map_err(placement_error)?;

    let result = js_sys::Array::new();
    for beat_placement in &placements {
        result.push(&serialize(beat_placement, "Failed to serialize placement")?);
    }
    Ok(result)
}

/// JSON variant of [`resolve_beat_placement`]
#[wasm_bindgen(js_name = resolveBeatPlacementJson)]
pub fn resolve_beat_placement_json(json: &str, scene_size: Option<f64>) -> Result<String, JsValue> {
    let config = config_for(scene_size)?;
    placement::resolve_beat_placement_json(json, &config).map_err(placement_error)
}

/// End orientation name for a motion type, start orientation and turns (number or "fl")
#[wasm_bindgen(js_name = resolveEndOrientation)]
pub fn resolve_end_orientation(motion_type: &str, start_orientation: &str, turns_js: JsValue) -> Result<String, JsValue> {
    let motion_type: MotionType = parse_arg(motion_type)?;
    let start: Orientation = parse_arg(start_orientation)?;
    let turns: Turns = deserialize(turns_js, "Failed to deserialize turns")?;

    Ok(placement::resolve_end_orientation(motion_type, start, turns).as_str().to_string())
}

/// Separation direction name for one color of a beat
#[wasm_bindgen(js_name = resolveSeparationDirection)]
pub fn resolve_separation_direction(beat_js: JsValue, color: &str) -> Result<String, JsValue> {
    let beat: BeatData = deserialize(beat_js, "Failed to deserialize beat")?;
    let color: Color = parse_arg(color)?;

    let motion = beat.motion(color).ok_or_else(|| {
        wasm_warn!("resolveSeparationDirection: beat has no {} motion", color);
        placement_error(placement::PlacementError::MissingMotion(color))
    })?;
    Ok(placement::resolve_separation_direction(motion, &beat, color).as_str().to_string())
}

/// Offset `{x, y}` for a direction name and prop name
///
/// Unknown directions give `{x: 0, y: 0}`; unknown props use the small-prop divisor.
#[wasm_bindgen(js_name = resolveDirectionalOffset)]
pub fn resolve_directional_offset(direction: &str, prop_type: &str, scene_size: Option<f64>) -> Result<JsValue, JsValue> {
    let config = config_for(scene_size)?;

    let offset = placement::resolve_named_offset_for_prop_name(direction, prop_type, config.scene_size);
    serialize(&offset, "Failed to serialize offset")
}

/// Offset divisor for a prop name; unknown props use the small-prop divisor
#[wasm_bindgen(js_name = resolveOffsetDivisor)]
pub fn resolve_offset_divisor(prop_type: &str) -> f64 {
    placement::resolve_offset_divisor_for_name(prop_type)
}

/// Name of the opposite separation direction
#[wasm_bindgen(js_name = oppositeDirection)]
pub fn opposite_direction(direction: &str) -> Result<String, JsValue> {
    let direction: SeparationDirection = parse_arg(direction)?;
    Ok(direction.opposite().as_str().to_string())
}
