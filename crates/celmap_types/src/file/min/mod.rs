//! `.MIN` file format support.
//!
//! A MIN file describes how the level tiles ("pieces") of a dungeon are
//! assembled from frames of the level's CEL archive. It is also the only place
//! where the encoding of each CEL frame is recorded.
//!
//! # File Structure
//!
//! There is no header. The file is a flat array of pieces, each made of a
//! fixed number of 2-byte slots:
//!
//! ```text
//! Level                 Slots per piece   Piece size
//! --------------------  ---------------   ----------
//! l1, l2, l3            10                20 bytes
//! l4, town              16                32 bytes
//! ```
//!
//! The slot count is not stored in the file, so the reader must be told which
//! [`PieceSize`] applies (see [`PieceSize::for_level`]). The file length must
//! be a multiple of the piece size.
//!
//! Each slot is a little-endian u16, see [`Block`] for the bit layout. A slot
//! value with a zero frame field is empty and carries no block.
//!
//! # Usage Examples
//!
//! ```no_run
//! use celmap_types::file::min::{File, PieceSize};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let min = File::open("diabdat/levels/l1data/l1.min", PieceSize::for_level("l1"))?;
//!
//! println!("{} pieces, {} blocks", min.num_pieces(), min.blocks().count());
//! for block in min.blocks() {
//!     println!("frame {} uses {}", block.frame_num, block.frame_type);
//! }
//! # Ok(())
//! # }
//! ```

mod piece;


use std::{fmt::Formatter, io::Read};

use log::debug;

use crate::error::MinError;

pub use piece::{Block, Piece, PieceSize};

/// MIN layout constants.
pub mod constants {
	/// Size of one block slot in bytes
	pub const SLOT_SIZE: usize = 2;

	/// Slots per piece for cathedral, catacombs and caves
	pub const SMALL_PIECE_SLOTS: usize = 10;

	/// Slots per piece for hell and town
	pub const LARGE_PIECE_SLOTS: usize = 16;

	/// Levels whose pieces use [`LARGE_PIECE_SLOTS`]
	pub const LARGE_PIECE_LEVELS: [&str; 2] = ["l4", "town"];

	/// Slot bits holding the frame number plus one
	pub const FRAME_NUM_MASK: u16 = 0x0FFF;

	/// Slot bits holding the frame type
	pub const FRAME_TYPE_MASK: u16 = 0x7000;

	/// Shift of the frame type field
	pub const FRAME_TYPE_SHIFT: u16 = 12;

	/// Largest frame number a slot can encode
	pub const MAX_FRAME_NUM: u16 = FRAME_NUM_MASK - 1;
}

/// A parsed MIN file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
	size: PieceSize,
	pieces: Vec<Piece>,
}

impl File {
	/// Creates a MIN file from pieces.
	///
	/// # Errors
	///
	/// Returns an error if a piece does not have `size` slots.
	pub fn new(size: PieceSize, pieces: Vec<Piece>) -> Result<Self, MinError> {
		if let Some(piece) = pieces.iter().find(|p| p.slots().len() != size.slots()) {
			return Err(MinError::InvalidBlockCount {
				expected: size.slots(),
				actual: piece.slots().len(),
			});
		}

		Ok(Self {
			size,
			pieces,
		})
	}

	/// Creates an empty MIN file
	pub fn empty(size: PieceSize) -> Self {
		Self {
			size,
			pieces: Vec::new(),
		}
	}

	/// Opens a MIN file from the specified path.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The file cannot be opened or read
	/// - The file ends in the middle of a piece
	/// - A slot holds an unknown frame type
	pub fn open(path: impl AsRef<std::path::Path>, size: PieceSize) -> Result<Self, MinError> {
		let mut file = std::fs::File::open(path)?;
		Self::from_reader(&mut file, size)
	}

	/// Loads a MIN file from any reader
	pub fn from_reader<R: Read>(reader: &mut R, size: PieceSize) -> Result<Self, MinError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;
		Self::from_bytes(&data, size)
	}

	/// Loads a MIN file from a byte slice.
	///
	/// The input is not retained.
	pub fn from_bytes(data: &[u8], size: PieceSize) -> Result<Self, MinError> {
		let pieces = data
			.chunks(size.byte_len())
			.enumerate()
			.map(|(index, chunk)| Piece::from_bytes(chunk, size, index))
			.collect::<Result<Vec<_>, _>>()?;

		debug!("Parsed MIN container: {} pieces of {}, {} bytes", pieces.len(), size, data.len());

		Ok(Self {
			size,
			pieces,
		})
	}

	/// Serializes the file to bytes
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut buffer = Vec::with_capacity(self.pieces.len() * self.size.byte_len());
		for piece in &self.pieces {
			buffer.extend_from_slice(&piece.to_bytes());
		}
		buffer
	}

	/// Returns the piece size of the file
	pub fn piece_size(&self) -> PieceSize {
		self.size
	}

	/// Returns the pieces, in container order
	pub fn pieces(&self) -> &[Piece] {
		&self.pieces
	}

	/// Consumes the file and returns its pieces
	pub fn into_pieces(self) -> Vec<Piece> {
		self.pieces
	}

	/// Returns the number of pieces
	pub fn num_pieces(&self) -> usize {
		self.pieces.len()
	}

	/// Gets a piece by index
	pub fn piece(&self, index: usize) -> Option<&Piece> {
		self.pieces.get(index)
	}

	/// Appends a piece.
	///
	/// # Errors
	///
	/// Returns an error if the piece does not have the file's slot count.
	pub fn add_piece(&mut self, piece: Piece) -> Result<(), MinError> {
		if piece.slots().len() != self.size.slots() {
			return Err(MinError::InvalidBlockCount {
				expected: self.size.slots(),
				actual: piece.slots().len(),
			});
		}
		self.pieces.push(piece);
		Ok(())
	}

	/// Iterates over every block of every piece, in container order
	pub fn blocks(&self) -> impl Iterator<Item = &Block> {
		self.pieces.iter().flat_map(Piece::blocks)
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "MIN File: {} pieces of {}", self.pieces.len(), self.size)?;
		for (index, piece) in self.pieces.iter().enumerate() {
			writeln!(f, "  #{index:04}: {piece}")?;
		}
		Ok(())
	}
}

impl From<File> for Vec<u8> {
	fn from(file: File) -> Self {
		file.to_bytes()
	}
}

impl From<&File> for Vec<u8> {
	fn from(file: &File) -> Self {
		file.to_bytes()
	}
}

impl IntoIterator for File {
	type Item = Piece;
	type IntoIter = std::vec::IntoIter<Piece>;

	fn into_iter(self) -> Self::IntoIter {
		self.pieces.into_iter()
	}
}

impl<'a> IntoIterator for &'a File {
	type Item = &'a Piece;
	type IntoIter = std::slice::Iter<'a, Piece>;

	fn into_iter(self) -> Self::IntoIter {
		self.pieces.iter()
	}
}
