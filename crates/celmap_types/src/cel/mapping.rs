//! Reduction of MIN pieces into a dense frame-type table.

use std::collections::{BTreeMap, btree_map::Entry};

use log::warn;
use serde::{Deserialize, Serialize};

use super::FrameType;
use crate::{
	error::MappingError,
	file::min::{Block, Piece},
};

/// What the [`Reducer`] does with a frame number that is below the highest
/// declared frame number but never declared itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolePolicy {
	/// Fail with [`MappingError::SparseFrameRange`]
	#[default]
	Reject,
	/// Assign the given frame type to undeclared frames
	Fill(FrameType),
}

/// Frame number to frame type table of one level.
///
/// Indices are contiguous from 0: the table has exactly
/// `max(frame_num) + 1` entries and each one holds the type of that frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameTypeMapping {
	resource_name: String,
	frame_types: Vec<FrameType>,
}

impl FrameTypeMapping {
	/// Creates a mapping from a dense list of frame types, indexed by frame number
	pub fn from_frame_types(resource_name: impl Into<String>, frame_types: Vec<FrameType>) -> Self {
		Self {
			resource_name: resource_name.into(),
			frame_types,
		}
	}

	/// Reduces pieces with the default [`Reducer`]
	pub fn reduce<'a>(
		resource_name: impl Into<String>,
		pieces: impl IntoIterator<Item = &'a Piece>,
	) -> Result<Self, MappingError> {
		Reducer::new().reduce(resource_name, pieces)
	}

	/// Returns the name of the resource the mapping was built from
	pub fn resource_name(&self) -> &str {
		&self.resource_name
	}

	/// Returns the frame types, indexed by frame number
	pub fn frame_types(&self) -> &[FrameType] {
		&self.frame_types
	}

	/// Gets the frame type of a frame
	pub fn get(&self, frame_num: usize) -> Option<FrameType> {
		self.frame_types.get(frame_num).copied()
	}

	/// Returns the number of frames
	pub fn len(&self) -> usize {
		self.frame_types.len()
	}

	/// Returns true if no frame is declared
	pub fn is_empty(&self) -> bool {
		self.frame_types.is_empty()
	}

	/// Returns the highest frame number, or `None` for an empty mapping
	pub fn max_frame_num(&self) -> Option<usize> {
		self.frame_types.len().checked_sub(1)
	}

	/// Iterates over `(frame number, frame type)` pairs
	pub fn iter(&self) -> impl Iterator<Item = (usize, FrameType)> + '_ {
		self.frame_types.iter().copied().enumerate()
	}

	/// Counts how many frames use each frame type, indexed by [`FrameType::index`]
	pub fn type_counts(&self) -> [usize; FrameType::COUNT] {
		let mut counts = [0; FrameType::COUNT];
		for frame_type in &self.frame_types {
			counts[frame_type.index()] += 1;
		}
		counts
	}

	/// Returns the frame types as raw selector values
	pub fn to_raw(&self) -> Vec<u8> {
		self.frame_types.iter().map(|t| t.to_u8()).collect()
	}
}

/// Folds the blocks of a level into a [`FrameTypeMapping`].
///
/// Repeating a frame number with the same type is accepted; repeating it
/// with another type is a conflict. The resulting table does not depend on
/// the order blocks are visited in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reducer {
	hole_policy: HolePolicy,
}

impl Reducer {
	/// Creates a reducer that rejects holes
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets how undeclared frame numbers are handled
	pub fn with_hole_policy(mut self, hole_policy: HolePolicy) -> Self {
		self.hole_policy = hole_policy;
		self
	}

	/// Returns the hole policy
	pub fn hole_policy(&self) -> HolePolicy {
		self.hole_policy
	}

	/// Collects the declared frame types of `blocks`, ordered by frame number.
	///
	/// # Errors
	///
	/// Returns [`MappingError::DuplicateFrameConflict`] on the first frame
	/// number declared with two different types.
	pub fn fold<'a>(
		&self,
		blocks: impl IntoIterator<Item = &'a Block>,
	) -> Result<BTreeMap<u16, FrameType>, MappingError> {
		blocks.into_iter().try_fold(BTreeMap::new(), |mut declared, block| {
			match declared.entry(block.frame_num) {
				Entry::Vacant(entry) => {
					entry.insert(block.frame_type);
				}
				Entry::Occupied(entry) if *entry.get() == block.frame_type => {}
				Entry::Occupied(entry) => {
					return Err(MappingError::DuplicateFrameConflict {
						frame_num: block.frame_num,
						first: *entry.get(),
						second: block.frame_type,
					});
				}
			}
			Ok(declared)
		})
	}

	/// Reduces the pieces of one resource into its frame-type table.
	///
	/// # Errors
	///
	/// Returns an error if a frame number is declared with conflicting types,
	/// or if the hole policy is [`HolePolicy::Reject`] and a frame below the
	/// highest one is never declared.
	pub fn reduce<'a>(
		&self,
		resource_name: impl Into<String>,
		pieces: impl IntoIterator<Item = &'a Piece>,
	) -> Result<FrameTypeMapping, MappingError> {
		let resource_name = resource_name.into();
		let declared = self.fold(pieces.into_iter().flat_map(Piece::blocks))?;

		let Some((&max_frame_num, _)) = declared.last_key_value() else {
			return Ok(FrameTypeMapping::from_frame_types(resource_name, Vec::new()));
		};

		let mut filled = 0usize;
		let frame_types = (0..=max_frame_num)
			.map(|frame_num| match (declared.get(&frame_num), self.hole_policy) {
				(Some(&frame_type), _) => Ok(frame_type),
				(None, HolePolicy::Fill(frame_type)) => {
					filled += 1;
					Ok(frame_type)
				}
				(None, HolePolicy::Reject) => Err(MappingError::SparseFrameRange {
					frame_num,
					max_frame_num,
				}),
			})
			.collect::<Result<Vec<_>, _>>()?;

		if filled > 0 {
			warn!("{resource_name}: filled {filled} undeclared frames below frame {max_frame_num}");
		}

		Ok(FrameTypeMapping::from_frame_types(resource_name, frame_types))
	}
}
