//! Pieces and blocks of a MIN container.

use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::{cel::FrameType, error::MinError};

/// Number of block slots in every piece of a MIN container.
///
/// The size is not stored in the container; it depends on the level the
/// container belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceSize {
	/// 10 slots per piece (cathedral, catacombs and caves)
	#[default]
	Small,
	/// 16 slots per piece (hell and town)
	Large,
}

impl PieceSize {
	/// Returns the piece size used by the named level.
	///
	/// `l4` and `town` use 16 slots; every other name, including unknown
	/// ones, uses 10. Names are compared exactly, the same way resources are
	/// looked up.
	pub fn for_level(level_name: &str) -> Self {
		if constants::LARGE_PIECE_LEVELS.iter().any(|&name| name == level_name) {
			Self::Large
		} else {
			Self::Small
		}
	}

	/// Returns the number of block slots in a piece
	pub const fn slots(self) -> usize {
		match self {
			Self::Small => constants::SMALL_PIECE_SLOTS,
			Self::Large => constants::LARGE_PIECE_SLOTS,
		}
	}

	/// Returns the encoded size of one piece in bytes
	pub const fn byte_len(self) -> usize {
		self.slots() * constants::SLOT_SIZE
	}

	/// Returns the piece size with the given slot count, if any
	pub fn from_slots(slots: usize) -> Option<Self> {
		match slots {
			constants::SMALL_PIECE_SLOTS => Some(Self::Small),
			constants::LARGE_PIECE_SLOTS => Some(Self::Large),
			_ => None,
		}
	}
}

impl std::fmt::Display for PieceSize {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} slots", self.slots())
	}
}

/// A single frame reference inside a piece.
///
/// Slot encoding (little-endian u16):
///
/// ```text
/// Bits    Mask    Field
/// ------  ------  -----------------------------------------
/// 0-11    0x0FFF  frame number + 1 (0 marks an empty slot)
/// 12-14   0x7000  frame type
/// 15      0x8000  unused
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
	/// Zero-based frame number within the level CEL
	pub frame_num: u16,
	/// Decoding algorithm of the frame
	pub frame_type: FrameType,
}

impl Block {
	/// Creates a new block
	pub const fn new(frame_num: u16, frame_type: FrameType) -> Self {
		Self {
			frame_num,
			frame_type,
		}
	}

	/// Decodes a raw slot value.
	///
	/// Returns `Ok(None)` for an empty slot. `piece` and `slot` only locate
	/// the value in error reports.
	pub fn from_raw(raw: u16, piece: usize, slot: usize) -> Result<Option<Self>, MinError> {
		let frame_field = raw & constants::FRAME_NUM_MASK;
		if frame_field == 0 {
			return Ok(None);
		}

		let type_field = ((raw & constants::FRAME_TYPE_MASK) >> constants::FRAME_TYPE_SHIFT) as u8;
		let frame_type = FrameType::from_u8(type_field).map_err(|_| MinError::InvalidFrameType {
			piece,
			slot,
			value: type_field,
			raw,
		})?;

		Ok(Some(Self::new(frame_field - 1, frame_type)))
	}

	/// Encodes the block as a raw slot value
	pub fn to_raw(self) -> u16 {
		(self.frame_num.wrapping_add(1) & constants::FRAME_NUM_MASK)
			| ((self.frame_type.to_u8() as u16) << constants::FRAME_TYPE_SHIFT)
	}
}

impl std::fmt::Display for Block {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Block {{ frame_num: {}, frame_type: {} }}", self.frame_num, self.frame_type)
	}
}

/// One piece of a MIN container: a fixed number of slots, each either empty
/// or holding a [`Block`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
	slots: Vec<Option<Block>>,
}

impl Piece {
	/// Creates a piece with every slot empty
	pub fn empty(size: PieceSize) -> Self {
		Self {
			slots: vec![None; size.slots()],
		}
	}

	/// Creates a piece from its slots.
	///
	/// # Errors
	///
	/// Returns an error if the slot count does not match `size` or a block
	/// frame number cannot be encoded.
	pub fn from_slots(size: PieceSize, slots: Vec<Option<Block>>) -> Result<Self, MinError> {
		if slots.len() != size.slots() {
			return Err(MinError::InvalidBlockCount {
				expected: size.slots(),
				actual: slots.len(),
			});
		}
		if let Some(block) = slots.iter().flatten().find(|b| b.frame_num > constants::MAX_FRAME_NUM)
		{
			return Err(MinError::FrameNumberOutOfRange {
				frame_num: block.frame_num,
				max: constants::MAX_FRAME_NUM,
			});
		}

		Ok(Self {
			slots,
		})
	}

	/// Creates a piece holding `blocks` in its first slots, remaining slots empty
	pub fn from_blocks(
		size: PieceSize,
		blocks: impl IntoIterator<Item = Block>,
	) -> Result<Self, MinError> {
		let mut slots: Vec<Option<Block>> = blocks.into_iter().map(Some).collect();
		if slots.len() > size.slots() {
			return Err(MinError::InvalidBlockCount {
				expected: size.slots(),
				actual: slots.len(),
			});
		}
		slots.resize(size.slots(), None);
		Self::from_slots(size, slots)
	}

	/// Loads a piece from exactly one piece worth of bytes.
	///
	/// `index` is the position of the piece in its container, used in error
	/// reports.
	pub fn from_bytes(data: &[u8], size: PieceSize, index: usize) -> Result<Self, MinError> {
		if data.len() != size.byte_len() {
			return Err(MinError::TruncatedPiece {
				piece: index,
				offset: index * size.byte_len(),
				expected: size.byte_len(),
				actual: data.len(),
			});
		}

		let slots = data
			.chunks_exact(constants::SLOT_SIZE)
			.enumerate()
			.map(|(slot, bytes)| Block::from_raw(u16::from_le_bytes([bytes[0], bytes[1]]), index, slot))
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			slots,
		})
	}

	/// Serializes the piece to bytes
	pub fn to_bytes(&self) -> Vec<u8> {
		self.slots
			.iter()
			.flat_map(|slot| slot.map_or(0, Block::to_raw).to_le_bytes())
			.collect()
	}

	/// Returns the slots of the piece, in container order
	pub fn slots(&self) -> &[Option<Block>] {
		&self.slots
	}

	/// Iterates over the non-empty slots
	pub fn blocks(&self) -> impl Iterator<Item = &Block> {
		self.slots.iter().flatten()
	}

	/// Returns the number of non-empty slots
	pub fn block_count(&self) -> usize {
		self.blocks().count()
	}

	/// Returns true if every slot is empty
	pub fn is_empty(&self) -> bool {
		self.slots.iter().all(Option::is_none)
	}
}

impl std::fmt::Display for Piece {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[")?;
		for (i, slot) in self.slots.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			match slot {
				Some(block) => write!(f, "{}:{}", block.frame_num, block.frame_type.to_u8())?,
				None => write!(f, "-")?,
			}
		}
		write!(f, "]")
	}
}
