// Sequence placement: orientation threading across beats and JSON interchange

use placement_wasm::models::{BeatData, Color, Location, MotionData, MotionType, Orientation, PropType, Turns};
use placement_wasm::placement::{
    resolve_beat_placement, resolve_beat_placement_json, resolve_sequence_placement, BeatPlacement,
    PlacementConfig, PlacementError,
};
use placement_wasm::SeparationDirection;

/// Helper to create a motion that starts facing IN
fn motion(motion_type: MotionType, start: Location, end: Location, turns: f64) -> MotionData {
    MotionData::new(motion_type, start, end, Orientation::In).with_turns(Turns::Count(turns))
}

#[test]
fn test_orientation_threads_through_three_beats() {
    let beats = vec![
        // Red: pro 1 turn flips IN → OUT. Blue: anti 1 turn keeps IN.
        BeatData::new('A', motion(MotionType::Pro, Location::S, Location::W, 1.0), motion(MotionType::Anti, Location::N, Location::E, 1.0)),
        // Red: anti 0 turns flips OUT → IN. Blue: static 0 turns keeps IN.
        BeatData::new('B', motion(MotionType::Anti, Location::W, Location::N, 0.0), motion(MotionType::Static, Location::E, Location::E, 0.0)),
        // Red: dash 3 turns keeps IN. Blue: float keeps IN.
        BeatData::new('C', motion(MotionType::Dash, Location::N, Location::S, 3.0), MotionData::new(MotionType::Float, Location::E, Location::S, Orientation::Out).with_turns(Turns::Float)),
    ];

    let placements = resolve_sequence_placement(&beats, &PlacementConfig::default()).unwrap();
    let red: Vec<Orientation> = placements.iter().map(|p| p.red.end_orientation).collect();
    let blue: Vec<Orientation> = placements.iter().map(|p| p.blue.end_orientation).collect();

    assert_eq!(red, vec![Orientation::Out, Orientation::In, Orientation::In]);
    assert_eq!(blue, vec![Orientation::In, Orientation::In, Orientation::In]);
}

#[test]
fn test_sequence_matches_manual_threading() {
    let first = BeatData::new('A', motion(MotionType::Pro, Location::S, Location::N, 1.0), motion(MotionType::Pro, Location::S, Location::N, 1.0));
    let config = PlacementConfig::default();
    let first_placement = resolve_beat_placement(&first, &config).unwrap();

    // Caller threads orientation by hand
    let mut second = BeatData::new('B', motion(MotionType::Pro, Location::N, Location::NE, 0.0), motion(MotionType::Anti, Location::N, Location::NE, 0.0));
    for color in Color::ALL {
        let start = first_placement.get(color).end_orientation;
        let threaded = second.motion(color).unwrap().clone().with_start_orientation(start);
        second.set_motion(color, threaded);
    }
    let manual = resolve_beat_placement(&second, &config).unwrap();

    let placements = resolve_sequence_placement(
        &[first, BeatData::new('B', motion(MotionType::Pro, Location::N, Location::NE, 0.0), motion(MotionType::Anti, Location::N, Location::NE, 0.0))],
        &config,
    )
    .unwrap();
    assert_eq!(placements[1], manual);
}

#[test]
fn test_box_grid_beat_uses_diagonal_offsets() {
    let beat = BeatData::new(
        'C',
        motion(MotionType::Pro, Location::SW, Location::NE, 0.0).with_prop_type(PropType::BigStaff),
        motion(MotionType::Pro, Location::SW, Location::NE, 0.0).with_prop_type(PropType::BigStaff),
    );
    let placement = resolve_beat_placement(&beat, &PlacementConfig::new(1200.0).unwrap()).unwrap();

    assert_eq!(placement.red.direction, SeparationDirection::DownRight);
    assert_eq!(placement.blue.direction, SeparationDirection::UpLeft);
    let expected = 1200.0 / 60.0 / std::f64::consts::SQRT_2;
    assert!((placement.red.offset.x - expected).abs() < 1e-9);
    assert!((placement.red.offset.y - expected).abs() < 1e-9);
    assert!((placement.blue.offset.x + expected).abs() < 1e-9);
}

#[test]
fn test_json_beat_with_missing_color_is_rejected() {
    let json = r#"{
        "letter": "A",
        "blue_attributes": {"motion_type": "pro", "start_loc": "e", "end_loc": "w", "turns": "fl", "start_ori": "clock"}
    }"#;
    assert_eq!(
        resolve_beat_placement_json(json, &PlacementConfig::default()),
        Err(PlacementError::MissingMotion(Color::Red))
    );
}

#[test]
fn test_json_output_shape() {
    let json = r#"{
        "letter": "G",
        "red_attributes": {"motion_type": "pro", "prop_rot_dir": "cw", "start_loc": "n", "end_loc": "e", "turns": 0, "start_ori": "clock", "prop_type": "club"},
        "blue_attributes": {"motion_type": "pro", "prop_rot_dir": "ccw", "start_loc": "s", "end_loc": "e", "turns": 0, "start_ori": "clock", "prop_type": "club"}
    }"#;
    let out = resolve_beat_placement_json(json, &PlacementConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    // Non-radial at E: red right, blue left
    assert_eq!(value["red"]["direction"], "right");
    assert_eq!(value["blue"]["direction"], "left");
    assert_eq!(value["red"]["end_orientation"], "clock");
    assert_eq!(value["red"]["offset"]["x"], 19.0);

    let placement: BeatPlacement = serde_json::from_str(&out).unwrap();
    assert_eq!(placement.blue.offset.x, -19.0);
}
