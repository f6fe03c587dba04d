//! End-to-end tests: extracted archive directory to generated tables

mod fixtures;

use celmap_rs::prelude::*;
use fixtures::{min_bytes, write_level, write_standard_levels};

#[test_log::test]
fn generates_standard_levels_in_order() {
	let dir = tempfile::tempdir().unwrap();
	write_standard_levels(dir.path());

	let result = Aggregator::new(DirLookup::new(dir.path())).aggregate(&DEFAULT_LEVELS).unwrap();

	assert_eq!(result.resource_names().collect::<Vec<_>>(), DEFAULT_LEVELS.to_vec());
	let raw: Vec<Vec<u8>> = result.iter().map(FrameTypeMapping::to_raw).collect();
	assert_eq!(raw, vec![vec![2, 0], vec![3, 0, 1], vec![4], vec![6, 5], vec![0]]);

	let source = String::from_utf8(RustSourceEmitter::new().render(&result).unwrap()).unwrap();
	let positions: Vec<usize> = ["L1_", "L2_", "L3_", "L4_", "TOWN_"]
		.iter()
		.map(|name| source.find(format!("pub const {name}FRAME_TYPES").as_str()).unwrap())
		.collect();
	assert!(positions.windows(2).all(|w| w[0] < w[1]));
	assert!(source.contains("pub const L2_FRAME_TYPES: [u8; 3] = [3, 0, 1];"));
}

#[test_log::test]
fn missing_level_fails_without_output() {
	let dir = tempfile::tempdir().unwrap();
	write_level(
		dir.path(),
		"l1",
		&min_bytes(PieceSize::Small, &[&[(0, FrameType::LeftTriangle), (1, FrameType::Solid)]]),
	);

	let err = Aggregator::new(DirLookup::new(dir.path())).aggregate(&["l1", "missing"]).unwrap_err();

	let AggregateError::ResourceFailure {
		name,
		cause,
	} = err
	else {
		panic!("expected a resource failure");
	};
	assert_eq!(name, "missing");
	let ResourceError::ResourceNotFound(lookup_err) = cause else {
		panic!("expected a missing resource");
	};
	assert!(lookup_err.to_string().contains("missingdata"));
}

#[test]
fn town_uses_large_pieces() {
	let dir = tempfile::tempdir().unwrap();
	// Valid as 16-slot pieces, truncated as 10-slot pieces
	write_level(dir.path(), "town", &min_bytes(PieceSize::Large, &[&[(0, FrameType::Regular)]]));
	write_level(dir.path(), "l1", &min_bytes(PieceSize::Large, &[&[(0, FrameType::Regular)]]));

	let aggregator = Aggregator::new(DirLookup::new(dir.path()));
	assert_eq!(aggregator.process("town").unwrap().to_raw(), vec![6]);
	assert!(matches!(
		aggregator.process("l1"),
		Err(ResourceError::MalformedContainer(MinError::TruncatedPiece { .. }))
	));
}

#[test]
fn sparse_level_reports_hole() {
	let dir = tempfile::tempdir().unwrap();
	write_level(
		dir.path(),
		"l3",
		&min_bytes(PieceSize::Small, &[&[(0, FrameType::Transparent), (2, FrameType::Transparent)]]),
	);

	let err = Aggregator::new(DirLookup::new(dir.path())).aggregate(&["l3"]).unwrap_err();
	assert_eq!(
		err.to_string(),
		"Resource 'l3': Frame 1 is never declared (frames must be dense up to 2)"
	);

	let filled = Aggregator::new(DirLookup::new(dir.path()))
		.with_hole_policy(HolePolicy::Fill(FrameType::Solid))
		.aggregate(&["l3"])
		.unwrap();
	assert_eq!(filled.get("l3").unwrap().to_raw(), vec![1, 0, 1]);
}

#[test]
fn json_output_round_trips() {
	let dir = tempfile::tempdir().unwrap();
	write_standard_levels(dir.path());

	let result = Aggregator::new(DirLookup::new(dir.path())).aggregate(&["town", "l4"]).unwrap();
	let json = JsonEmitter::pretty().render(&result).unwrap();

	let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
	assert_eq!(value[0]["resource_name"], "town");
	assert_eq!(value[1]["frame_types"], serde_json::json!([6, 5]));
}

#[test]
fn selects_decoder_by_frame_number() {
	let dir = tempfile::tempdir().unwrap();
	write_standard_levels(dir.path());

	let result = Aggregator::new(DirLookup::new(dir.path())).aggregate(&["l2"]).unwrap();
	let decoders = Decoders::from_fn(FrameType::name);
	let l2 = result.get("l2").unwrap();

	assert_eq!(decoders.select(l2, 0), Some(&"right triangle"));
	assert_eq!(decoders.select(l2, 2), Some(&"transparent"));
	assert_eq!(decoders.select(l2, 3), None);
}
