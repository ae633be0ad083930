//! Beat placement: composes orientation, direction and offset resolution
//!
//! Every call is an independent transform of its inputs. Sequences thread
//! each color's end orientation into the next beat explicitly.

use super::config::PlacementConfig;
use super::direction::resolve_separation_direction;
use super::errors::{PlacementError, Result};
use super::offset::{resolve_directional_offset, Offset};
use super::orientation::with_resolved_orientation;
use crate::models::{BeatData, Color, MotionData, Orientation, SeparationDirection};
use serde::{Deserialize, Serialize};

/// Placement of one color's prop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub direction: SeparationDirection,
    pub offset: Offset,
    /// Feed this forward as the next beat's start orientation
    pub end_orientation: Orientation,
}

/// Placement of both props of a beat
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatPlacement {
    pub red: PlacementResult,
    pub blue: PlacementResult,
}

impl BeatPlacement {
    pub fn get(&self, color: Color) -> &PlacementResult {
        match color {
            Color::Red => &self.red,
            Color::Blue => &self.blue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Color, &PlacementResult)> {
        [(Color::Red, &self.red), (Color::Blue, &self.blue)].into_iter()
    }
}

fn required_motion(beat: &BeatData, color: Color) -> Result<&MotionData> {
    let motion = beat.motion(color).ok_or_else(|| {
        log::warn!("Rejecting beat '{}': no {} motion", beat.letter, color);
        PlacementError::MissingMotion(color)
    })?;
    motion.validate(color).map_err(|err| {
        log::warn!("Rejecting beat '{}': {}", beat.letter, err);
        err
    })?;
    Ok(motion)
}

/// Copy of the beat with both motions' end orientations resolved
pub fn resolve_beat_orientations(beat: &BeatData) -> Result<BeatData> {
    let red = with_resolved_orientation(required_motion(beat, Color::Red)?);
    let blue = with_resolved_orientation(required_motion(beat, Color::Blue)?);
    Ok(BeatData::new(beat.letter, red, blue))
}

fn place_color(resolved: &BeatData, color: Color, config: &PlacementConfig) -> Result<PlacementResult> {
    let motion = resolved.motion(color).ok_or(PlacementError::MissingMotion(color))?;
    let direction = resolve_separation_direction(motion, resolved, color);
    let offset = resolve_directional_offset(direction, motion.prop_type, config.scene_size);

    Ok(PlacementResult {
        direction,
        offset,
        end_orientation: motion.effective_end_orientation(),
    })
}

/// Resolve direction, offset and end orientation for both colors of a beat.
///
/// Fails with [`PlacementError::MissingMotion`] if either color's motion is
/// absent, rather than guessing.
pub fn resolve_beat_placement(beat: &BeatData, config: &PlacementConfig) -> Result<BeatPlacement> {
    config.validate()?;
    let resolved = resolve_beat_orientations(beat)?;

    let placement = BeatPlacement {
        red: place_color(&resolved, Color::Red, config)?,
        blue: place_color(&resolved, Color::Blue, config)?,
    };
    log::debug!(
        "Placed beat '{}': red {} {:?}, blue {} {:?}",
        beat.letter,
        placement.red.direction,
        placement.red.offset,
        placement.blue.direction,
        placement.blue.offset
    );
    Ok(placement)
}

/// Place a sequence of beats in order.
///
/// From the second beat on, each color's start orientation is replaced by
/// the end orientation resolved for that color on the previous beat.
pub fn resolve_sequence_placement(beats: &[BeatData], config: &PlacementConfig) -> Result<Vec<BeatPlacement>> {
    let mut placements = Vec::with_capacity(beats.len());
    let mut previous: Option<BeatPlacement> = None;

    for beat in beats {
        let threaded = match &previous {
            Some(prev) => thread_orientations(beat, prev)?,
            None => beat.clone(),
        };
        let placement = resolve_beat_placement(&threaded, config)?;
        placements.push(placement);
        previous = Some(placement);
    }

    Ok(placements)
}

fn thread_orientations(beat: &BeatData, previous: &BeatPlacement) -> Result<BeatData> {
    let mut threaded = beat.clone();
    for color in Color::ALL {
        let motion = required_motion(beat, color)?;
        let start = previous.get(color).end_orientation;
        let mut next = motion.clone().with_start_orientation(start);
        // A stored end orientation was computed from the old start
        next.end_orientation = None;
        threaded.set_motion(color, next);
    }
    Ok(threaded)
}

/// JSON in, JSON out: a serialized [`BeatData`] to a serialized [`BeatPlacement`]
pub fn resolve_beat_placement_json(json: &str, config: &PlacementConfig) -> Result<String> {
    let beat: BeatData = serde_json::from_str(json)
        .map_err(|e| PlacementError::InvalidInput(format!("Beat JSON: {}", e)))?;
    let placement = resolve_beat_placement(&beat, config)?;
    serde_json::to_string(&placement)
        .map_err(|e| PlacementError::InvalidInput(format!("Placement JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, MotionType, PropType, Turns};

    fn pro_to_north() -> MotionData {
        MotionData::new(MotionType::Pro, Location::S, Location::N, Orientation::In)
    }

    fn anti_to_north() -> MotionData {
        MotionData::new(MotionType::Anti, Location::S, Location::N, Orientation::Out)
    }

    #[test]
    fn test_complete_placement_for_both_colors() {
        let beat = BeatData::new('A', pro_to_north(), anti_to_north());
        let placement = resolve_beat_placement(&beat, &PlacementConfig::default()).unwrap();

        assert_eq!(placement.red.direction, SeparationDirection::Right);
        assert_eq!(placement.blue.direction, SeparationDirection::Left);
        assert_eq!(placement.red.offset, Offset::new(19.0, 0.0));
        assert_eq!(placement.blue.offset, Offset::new(-19.0, 0.0));
        assert_eq!(placement.red.end_orientation, Orientation::In);
        // Anti, 0 turns: OUT → IN
        assert_eq!(placement.blue.end_orientation, Orientation::In);
        assert_eq!(placement.iter().count(), 2);
    }

    #[test]
    fn test_missing_motion_is_rejected() {
        let mut beat = BeatData::new('A', pro_to_north(), anti_to_north());
        beat.blue_motion = None;
        assert_eq!(
            resolve_beat_placement(&beat, &PlacementConfig::default()),
            Err(PlacementError::MissingMotion(Color::Blue))
        );
    }

    #[test]
    fn test_missing_motion_rejected_for_letter_i_too() {
        let mut beat = BeatData::new('I', pro_to_north(), anti_to_north());
        beat.red_motion = None;
        assert_eq!(
            resolve_beat_placement(&beat, &PlacementConfig::default()),
            Err(PlacementError::MissingMotion(Color::Red))
        );
    }

    #[test]
    fn test_negative_turns_rejected() {
        let beat = BeatData::new('A', pro_to_north().with_turns(Turns::Count(-1.0)), anti_to_north());
        assert!(matches!(
            resolve_beat_placement(&beat, &PlacementConfig::default()),
            Err(PlacementError::InvalidTurns { color: Color::Red, .. })
        ));
    }

    #[test]
    fn test_invalid_scene_size_rejected() {
        let beat = BeatData::new('A', pro_to_north(), anti_to_north());
        let config = PlacementConfig { scene_size: 0.0 };
        assert_eq!(resolve_beat_placement(&beat, &config), Err(PlacementError::InvalidSceneSize(0.0)));
    }

    #[test]
    fn test_prop_type_per_color() {
        let beat = BeatData::new(
            'A',
            pro_to_north().with_prop_type(PropType::Guitar),
            anti_to_north().with_prop_type(PropType::Hand),
        );
        let placement = resolve_beat_placement(&beat, &PlacementConfig::new(900.0).unwrap()).unwrap();
        assert_eq!(placement.red.offset, Offset::new(15.0, 0.0));
        assert_eq!(placement.blue.offset, Offset::new(-20.0, 0.0));
    }

    #[test]
    fn test_sequence_threads_orientation() {
        // Beat 1: red pro with 1 turn flips IN → OUT
        let first = BeatData::new('A', pro_to_north().with_turns(Turns::Count(1.0)), pro_to_north());
        // Beat 2 claims red starts IN; threading overrides it with OUT
        let second = BeatData::new(
            'B',
            MotionData::new(MotionType::Pro, Location::N, Location::E, Orientation::In)
                .with_end_orientation(Orientation::In),
            MotionData::new(MotionType::Pro, Location::N, Location::E, Orientation::In),
        );

        let placements = resolve_sequence_placement(&[first, second], &PlacementConfig::default()).unwrap();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].red.end_orientation, Orientation::Out);
        assert_eq!(placements[1].red.end_orientation, Orientation::Out);
        assert_eq!(placements[1].blue.end_orientation, Orientation::In);
    }

    #[test]
    fn test_sequence_fails_fast() {
        let good = BeatData::new('A', pro_to_north(), anti_to_north());
        let mut bad = good.clone();
        bad.red_motion = None;
        assert_eq!(
            resolve_sequence_placement(&[good.clone(), bad, good], &PlacementConfig::default()),
            Err(PlacementError::MissingMotion(Color::Red))
        );
        assert_eq!(resolve_sequence_placement(&[], &PlacementConfig::default()), Ok(vec![]));
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "letter": "I",
            "red_attributes": {"motion_type": "pro", "start_loc": "s", "end_loc": "n", "turns": 0, "start_ori": "in"},
            "blue_attributes": {"motion_type": "anti", "start_loc": "s", "end_loc": "n", "turns": 1, "start_ori": "in"}
        }"#;
        let out = resolve_beat_placement_json(json, &PlacementConfig::default()).unwrap();
        let placement: BeatPlacement = serde_json::from_str(&out).unwrap();
        assert_eq!(placement.red.direction, SeparationDirection::Right);
        assert_eq!(placement.blue.direction, SeparationDirection::Left);

        assert!(matches!(
            resolve_beat_placement_json("{not json", &PlacementConfig::default()),
            Err(PlacementError::InvalidInput(_))
        ));
    }
}
