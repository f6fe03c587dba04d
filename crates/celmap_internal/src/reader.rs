//! Reads MIN containers by resource name.

use celmap_types::file::{MinFile, Piece, PieceSize};
use celmap_vfs::ResourceLookup;
use log::debug;

use crate::error::ResourceError;

/// Reads named MIN resources into pieces.
#[derive(Debug, Clone)]
pub struct MinReader<L> {
	lookup: L,
}

impl<L: ResourceLookup> MinReader<L> {
	/// Creates a reader over a resource lookup
	pub fn new(lookup: L) -> Self {
		Self {
			lookup,
		}
	}

	/// Returns the underlying lookup
	pub fn lookup(&self) -> &L {
		&self.lookup
	}

	/// Reads a resource using the piece size of the level it names.
	///
	/// # Errors
	///
	/// Returns [`ResourceError::ResourceNotFound`] if the lookup cannot
	/// locate the resource and [`ResourceError::MalformedContainer`] if the
	/// bytes are not a valid MIN container.
	pub fn read(&self, name: &str) -> Result<Vec<Piece>, ResourceError> {
		self.read_with_size(name, PieceSize::for_level(name))
	}

	/// Reads a resource with an explicit piece size
	pub fn read_with_size(&self, name: &str, size: PieceSize) -> Result<Vec<Piece>, ResourceError> {
		let data = self.lookup.read(name)?;
		let min = MinFile::from_bytes(&data, size)?;
		debug!("{name}: {} pieces, {} blocks", min.num_pieces(), min.blocks().count());
		Ok(min.into_pieces())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use celmap_types::{cel::FrameType, error::MinError, file::Block};
	use celmap_vfs::MemoryLookup;

	#[test]
	fn test_read_uses_level_piece_size() {
		let mut lookup = MemoryLookup::new();
		lookup.insert("l1", vec![0u8; 32]);
		lookup.insert("town", vec![0u8; 32]);
		let reader = MinReader::new(lookup);

		assert!(matches!(
			reader.read("l1"),
			Err(ResourceError::MalformedContainer(MinError::TruncatedPiece { .. }))
		));
		assert_eq!(reader.read("town").unwrap().len(), 1);
		assert_eq!(reader.read_with_size("l1", PieceSize::Large).unwrap().len(), 1);
	}

	#[test]
	fn test_read_blocks() {
		let mut data = vec![0u8; 20];
		data[18..20].copy_from_slice(&0x3010u16.to_le_bytes());
		let reader = MinReader::new([("l3", data)].into_iter().collect::<MemoryLookup>());

		let pieces = reader.read("l3").unwrap();
		let blocks: Vec<_> = pieces[0].blocks().copied().collect();
		assert_eq!(blocks, vec![Block::new(15, FrameType::RightTriangle)]);
	}

	#[test]
	fn test_read_missing() {
		let reader = MinReader::new(MemoryLookup::new());
		assert!(matches!(reader.read("l2"), Err(ResourceError::ResourceNotFound(_))));
	}
}
