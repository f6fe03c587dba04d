//! CEL frame classification.
//!
//! Level CEL archives store every frame with one of seven encodings. Which
//! encoding a frame uses is not recorded in the CEL file itself; it is derived
//! from the MIN container of the same level (see [`crate::file::min`]) and
//! materialized as a [`FrameTypeMapping`].
//!
//! A decoder keeps one function per frame type in a [`Decoders`] table and
//! selects the right one in O(1) via the mapping:
//!
//! ```
//! use celmap_types::cel::{Decoders, FrameType, FrameTypeMapping};
//!
//! let decoders = Decoders::from_fn(|frame_type| frame_type.to_u8() as u32 * 10);
//! let mapping = FrameTypeMapping::from_frame_types(
//!     "l1",
//!     vec![FrameType::LeftTriangle, FrameType::Solid],
//! );
//!
//! assert_eq!(decoders.select(&mapping, 0), Some(&20));
//! assert_eq!(decoders.select(&mapping, 2), None);
//! ```

mod mapping;

use std::{
	fmt::Formatter,
	ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

use crate::error::UnknownFrameType;

pub use mapping::{FrameTypeMapping, HolePolicy, Reducer};

/// Decoding algorithm of a CEL frame.
///
/// The discriminant is the value stored in bits 12-14 of a MIN block slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum FrameType {
	/// Opaque 32x32 square, stored uncompressed
	#[default]
	Solid = 0,
	/// 32x32 square with run-length encoded transparency
	Transparent = 1,
	/// Left-facing triangle
	LeftTriangle = 2,
	/// Right-facing triangle
	RightTriangle = 3,
	/// Left-facing trapezoid
	LeftTrapezoid = 4,
	/// Right-facing trapezoid
	RightTrapezoid = 5,
	/// Regular run-length encoded frame
	Regular = 6,
}

impl FrameType {
	/// Number of frame types, and of decoders a [`Decoders`] table holds
	pub const COUNT: usize = 7;

	/// All frame types in discriminant order
	pub const ALL: [FrameType; Self::COUNT] = [
		Self::Solid,
		Self::Transparent,
		Self::LeftTriangle,
		Self::RightTriangle,
		Self::LeftTrapezoid,
		Self::RightTrapezoid,
		Self::Regular,
	];

	/// Converts a u8 value to `FrameType`
	pub fn from_u8(value: u8) -> Result<Self, UnknownFrameType> {
		Self::ALL.get(value as usize).copied().ok_or(UnknownFrameType(value))
	}

	/// Converts `FrameType` to u8
	pub const fn to_u8(self) -> u8 {
		self as u8
	}

	/// Position of this frame type in a [`Decoders`] table
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Short identifier of the decoding algorithm
	pub const fn name(self) -> &'static str {
		match self {
			Self::Solid => "solid",
			Self::Transparent => "transparent",
			Self::LeftTriangle => "left triangle",
			Self::RightTriangle => "right triangle",
			Self::LeftTrapezoid => "left trapezoid",
			Self::RightTrapezoid => "right trapezoid",
			Self::Regular => "regular",
		}
	}
}

impl std::fmt::Display for FrameType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "type {} ({})", self.to_u8(), self.name())
	}
}

impl TryFrom<u8> for FrameType {
	type Error = UnknownFrameType;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		Self::from_u8(value)
	}
}

impl From<FrameType> for u8 {
	fn from(frame_type: FrameType) -> Self {
		frame_type.to_u8()
	}
}

/// Decoder table with exactly one entry per [`FrameType`].
///
/// `D` is whatever the image decoder dispatches on, typically a function
/// pointer. The table is total, so indexing by `FrameType` never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoders<D> {
	table: [D; FrameType::COUNT],
}

impl<D> Decoders<D> {
	/// Creates a table from decoders listed in frame type order
	pub const fn new(table: [D; FrameType::COUNT]) -> Self {
		Self {
			table,
		}
	}

	/// Creates a table by calling `f` once per frame type
	pub fn from_fn(mut f: impl FnMut(FrameType) -> D) -> Self {
		Self {
			table: std::array::from_fn(|i| f(FrameType::ALL[i])),
		}
	}

	/// Returns the decoder for a frame type
	pub fn get(&self, frame_type: FrameType) -> &D {
		&self.table[frame_type.index()]
	}

	/// Returns the decoder for frame `frame_num` of a level, or `None` when the
	/// frame number is outside the mapping
	pub fn select(&self, mapping: &FrameTypeMapping, frame_num: usize) -> Option<&D> {
		mapping.get(frame_num).map(|frame_type| self.get(frame_type))
	}

	/// Iterates over `(frame type, decoder)` pairs in frame type order
	pub fn iter(&self) -> impl Iterator<Item = (FrameType, &D)> {
		FrameType::ALL.into_iter().zip(self.table.iter())
	}
}

impl<D> Index<FrameType> for Decoders<D> {
	type Output = D;

	fn index(&self, frame_type: FrameType) -> &Self::Output {
		self.get(frame_type)
	}
}

impl<D> IndexMut<FrameType> for Decoders<D> {
	fn index_mut(&mut self, frame_type: FrameType) -> &mut Self::Output {
		&mut self.table[frame_type.index()]
	}
}

impl<D> From<[D; FrameType::COUNT]> for Decoders<D> {
	fn from(table: [D; FrameType::COUNT]) -> Self {
		Self::new(table)
	}
}
