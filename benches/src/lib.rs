//! Benchmark helper utilities for celmap-rs
//!
//! This module generates synthetic MIN containers shaped like the game's
//! level files: every frame is declared once, then referenced again by
//! later pieces with the same type.

/// Generates a MIN container with `frames` distinct frames spread over pieces
/// of `slots` slots each.
///
/// Each frame appears `repeats` times; frame types cycle through 0..=6 and
/// one slot in four is left empty.
pub fn generate_min_data(frames: u16, slots: usize, repeats: usize) -> Vec<u8> {
	let mut raw_slots = Vec::new();
	for pass in 0..repeats {
		for frame in 0..frames {
			// Empty slot every fourth position
			if raw_slots.len() % 4 == 3 {
				raw_slots.push(0u16);
			}
			// Walk frames in a different order on every pass
			let frame_num = (frame as usize * (2 * pass + 1)) % frames as usize;
			let frame_type = (frame_num % 7) as u16;
			raw_slots.push((frame_num as u16 + 1) | (frame_type << 12));
		}
	}

	// Pad the last piece with empty slots
	let remainder = raw_slots.len() % slots;
	if remainder != 0 {
		raw_slots.resize(raw_slots.len() + slots - remainder, 0);
	}

	raw_slots.iter().flat_map(|slot| slot.to_le_bytes()).collect()
}

/// Common benchmark sizes, as `(frames, slots per piece, repeats)`
pub mod sizes {
	/// A small level
	pub const SMALL: (u16, usize, usize) = (256, 10, 2);
	/// Roughly the size of the cathedral level (`l1`)
	pub const CATHEDRAL: (u16, usize, usize) = (1_200, 10, 4);
	/// Roughly the size of the town level
	pub const TOWN: (u16, usize, usize) = (2_500, 16, 6);
	/// The largest frame count a MIN slot can address
	pub const MAX: (u16, usize, usize) = (4_095, 16, 8);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_min_data() {
		let data = generate_min_data(100, 10, 3);

		// Whole pieces only
		assert_eq!(data.len() % 20, 0);

		// First slot is frame 0, type 0
		assert_eq!(&data[0..2], &[0x01, 0x00]);
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::SMALL.1, 10);
		assert_eq!(sizes::TOWN.1, 16);
		assert!(sizes::MAX.0 <= 4_095);
	}
}
