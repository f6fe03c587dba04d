//! Error types for MIN parsing and frame-type reduction.

use thiserror::Error;

use crate::cel::FrameType;

/// Errors that can occur when parsing a MIN container.
///
/// Every variant describes a violation of the binary layout; callers treat
/// them all as a malformed container.
#[derive(Debug, Error)]
pub enum MinError {
	/// The container ends in the middle of a piece
	#[error(
		"Truncated piece #{piece}: expected {expected} bytes at offset {offset}, got {actual} bytes"
	)]
	TruncatedPiece {
		/// Index of the incomplete piece
		piece: usize,
		/// Byte offset where the piece starts
		offset: usize,
		/// Number of bytes a complete piece occupies
		expected: usize,
		/// Number of bytes left in the container
		actual: usize,
	},

	/// A block slot carries a frame type outside the decoder range
	#[error("Invalid frame type {value} in piece #{piece}, slot {slot} (raw value 0x{raw:04X})")]
	InvalidFrameType {
		/// Index of the piece holding the slot
		piece: usize,
		/// Slot index within the piece
		slot: usize,
		/// Decoded frame type value
		value: u8,
		/// Raw little-endian slot value
		raw: u16,
	},

	/// A piece was built with the wrong number of slots
	#[error("Invalid block count: piece has {actual} slots, layout requires {expected}")]
	InvalidBlockCount {
		/// Slot count required by the piece size
		expected: usize,
		/// Slot count provided
		actual: usize,
	},

	/// A block frame number does not fit the 12-bit slot field
	#[error("Frame number {frame_num} cannot be encoded (maximum is {max})")]
	FrameNumberOutOfRange {
		/// Frame number of the block
		frame_num: u16,
		/// Largest encodable frame number
		max: u16,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when reducing pieces into a frame-type mapping
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
	/// The same frame number was declared with two different frame types
	#[error("Frame {frame_num} declared as both {first} and {second}")]
	DuplicateFrameConflict {
		/// Conflicting frame number
		frame_num: u16,
		/// Frame type seen first
		first: FrameType,
		/// Frame type that disagreed with it
		second: FrameType,
	},

	/// A frame number below the maximum has no declaration
	#[error("Frame {frame_num} is never declared (frames must be dense up to {max_frame_num})")]
	SparseFrameRange {
		/// Lowest undeclared frame number
		frame_num: u16,
		/// Highest declared frame number
		max_frame_num: u16,
	},
}

/// A frame type value outside the decoder range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown frame type {0}, expected a value in 0..=6")]
pub struct UnknownFrameType(pub u8);
