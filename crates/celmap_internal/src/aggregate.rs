//! Builds frame-type tables for a list of level resources.

use std::collections::{HashMap, HashSet};

use celmap_types::{
	cel::{FrameTypeMapping, HolePolicy, Reducer},
	file::PieceSize,
};
use celmap_vfs::ResourceLookup;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
	error::{AggregateError, ResourceError},
	reader::MinReader,
};

/// Levels processed by default, in output order
pub const DEFAULT_LEVELS: [&str; 5] = ["l1", "l2", "l3", "l4", "town"];

/// Frame-type tables of several resources, in the order they were requested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedResult {
	mappings: Vec<FrameTypeMapping>,
}

impl AggregatedResult {
	/// Returns the mappings in configuration order
	pub fn mappings(&self) -> &[FrameTypeMapping] {
		&self.mappings
	}

	/// Consumes the result and returns its mappings
	pub fn into_mappings(self) -> Vec<FrameTypeMapping> {
		self.mappings
	}

	/// Finds the mapping of a resource
	pub fn get(&self, resource_name: &str) -> Option<&FrameTypeMapping> {
		self.mappings.iter().find(|m| m.resource_name() == resource_name)
	}

	/// Returns the resource names in configuration order
	pub fn resource_names(&self) -> impl Iterator<Item = &str> {
		self.mappings.iter().map(FrameTypeMapping::resource_name)
	}

	/// Returns the number of mappings
	pub fn len(&self) -> usize {
		self.mappings.len()
	}

	/// Returns true if there are no mappings
	pub fn is_empty(&self) -> bool {
		self.mappings.is_empty()
	}

	/// Iterates over the mappings in configuration order
	pub fn iter(&self) -> std::slice::Iter<'_, FrameTypeMapping> {
		self.mappings.iter()
	}
}

impl IntoIterator for AggregatedResult {
	type Item = FrameTypeMapping;
	type IntoIter = std::vec::IntoIter<FrameTypeMapping>;

	fn into_iter(self) -> Self::IntoIter {
		self.mappings.into_iter()
	}
}

impl<'a> IntoIterator for &'a AggregatedResult {
	type Item = &'a FrameTypeMapping;
	type IntoIter = std::slice::Iter<'a, FrameTypeMapping>;

	fn into_iter(self) -> Self::IntoIter {
		self.mappings.iter()
	}
}

/// Reads and reduces every configured resource, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use celmap_internal::{Aggregator, AggregateError};
/// use celmap_vfs::MemoryLookup;
///
/// let mut data = vec![0u8; 20];
/// data[0..2].copy_from_slice(&0x2001u16.to_le_bytes());
/// data[2..4].copy_from_slice(&0x0002u16.to_le_bytes());
///
/// let lookup: MemoryLookup = [("l1", data)].into_iter().collect();
/// let aggregator = Aggregator::new(lookup);
///
/// let result = aggregator.aggregate(&["l1"]).unwrap();
/// assert_eq!(result.get("l1").unwrap().to_raw(), vec![2, 0]);
///
/// let err = aggregator.aggregate(&["l1", "missing"]).unwrap_err();
/// assert!(matches!(err, AggregateError::ResourceFailure { ref name, .. } if name == "missing"));
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator<L> {
	reader: MinReader<L>,
	reducer: Reducer,
	piece_sizes: HashMap<String, PieceSize>,
}

impl<L: ResourceLookup> Aggregator<L> {
	/// Creates an aggregator that rejects holes and derives piece sizes from
	/// level names
	pub fn new(lookup: L) -> Self {
		Self {
			reader: MinReader::new(lookup),
			reducer: Reducer::new(),
			piece_sizes: HashMap::new(),
		}
	}

	/// Sets how undeclared frame numbers are handled
	pub fn with_hole_policy(mut self, hole_policy: HolePolicy) -> Self {
		self.reducer = self.reducer.with_hole_policy(hole_policy);
		self
	}

	/// Overrides the piece size of one resource
	pub fn with_piece_size(mut self, name: impl Into<String>, size: PieceSize) -> Self {
		self.piece_sizes.insert(name.into(), size);
		self
	}

	/// Returns the reader
	pub fn reader(&self) -> &MinReader<L> {
		&self.reader
	}

	/// Returns the piece size used for a resource
	pub fn piece_size(&self, name: &str) -> PieceSize {
		self.piece_sizes.get(name).copied().unwrap_or_else(|| PieceSize::for_level(name))
	}

	/// Reads and reduces a single resource
	pub fn process(&self, name: &str) -> Result<FrameTypeMapping, ResourceError> {
		let pieces = self.reader.read_with_size(name, self.piece_size(name))?;
		let mapping = self.reducer.reduce(name, &pieces)?;
		debug!("{name}: frame type counts {:?}", mapping.type_counts());
		Ok(mapping)
	}

	/// Builds the frame-type tables of `names`, in order.
	///
	/// # Errors
	///
	/// Returns an error without any partial result if the list is empty,
	/// names a resource twice, or any resource fails to process.
	pub fn aggregate<S: AsRef<str>>(&self, names: &[S]) -> Result<AggregatedResult, AggregateError> {
		if names.is_empty() {
			return Err(AggregateError::NoResources);
		}

		let mut seen = HashSet::with_capacity(names.len());
		for name in names {
			let name = name.as_ref();
			if !seen.insert(name) {
				return Err(AggregateError::DuplicateResource(name.to_string()));
			}
		}

		let mut mappings = Vec::with_capacity(names.len());
		for name in names {
			let name = name.as_ref();
			let mapping = self.process(name).map_err(|cause| AggregateError::ResourceFailure {
				name: name.to_string(),
				cause,
			})?;
			info!("{name}: {} frames", mapping.len());
			mappings.push(mapping);
		}

		Ok(AggregatedResult {
			mappings,
		})
	}
}
