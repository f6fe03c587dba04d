//! Builds extracted-archive directories with synthetic MIN files.

use std::path::Path;

use celmap_rs::prelude::*;

/// Encodes pieces of `(frame_num, frame_type)` blocks as a MIN container
pub fn min_bytes(size: PieceSize, pieces: &[&[(u16, FrameType)]]) -> Vec<u8> {
	let mut min = MinFile::empty(size);
	for blocks in pieces {
		let piece =
			Piece::from_blocks(size, blocks.iter().map(|&(n, t)| Block::new(n, t))).unwrap();
		min.add_piece(piece).unwrap();
	}
	min.to_bytes()
}

/// Writes `data` where `DirLookup` expects the MIN file of `level`
pub fn write_level(root: &Path, level: &str, data: &[u8]) {
	let path = DirLookup::new(root).path_for(level);
	std::fs::create_dir_all(path.parent().unwrap()).unwrap();
	std::fs::write(path, data).unwrap();
}

/// Writes the five standard levels with small, valid MIN files
pub fn write_standard_levels(root: &Path) {
	write_level(
		root,
		"l1",
		&min_bytes(PieceSize::Small, &[&[(0, FrameType::LeftTriangle), (1, FrameType::Solid)]]),
	);
	write_level(
		root,
		"l2",
		&min_bytes(
			PieceSize::Small,
			&[&[(2, FrameType::Transparent), (0, FrameType::RightTriangle)], &[(1, FrameType::Solid)]],
		),
	);
	write_level(root, "l3", &min_bytes(PieceSize::Small, &[&[(0, FrameType::LeftTrapezoid)]]));
	write_level(
		root,
		"l4",
		&min_bytes(PieceSize::Large, &[&[(1, FrameType::RightTrapezoid), (0, FrameType::Regular)]]),
	);
	write_level(
		root,
		"town",
		&min_bytes(PieceSize::Large, &[&[(0, FrameType::Solid)], &[(0, FrameType::Solid)]]),
	);
}
