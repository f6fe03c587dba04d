//! This crate provides the MIN container format and CEL frame classification for the `celmap-rs` project.
//!
//! # Modules
//!
//! - **`file::min`**: MIN level-tile containers, parsed into pieces and blocks
//! - **`cel`**: CEL frame types, decoder tables and the reducer that turns MIN
//!   pieces into a dense frame-type table
//!
//! # Examples
//!
//! ```
//! use celmap_types::prelude::*;
//!
//! // Two slots: frame 0 as a left triangle, frame 1 as a solid square
//! let mut data = vec![0u8; 20];
//! data[0..2].copy_from_slice(&0x2001u16.to_le_bytes());
//! data[2..4].copy_from_slice(&0x0002u16.to_le_bytes());
//!
//! let min = MinFile::from_bytes(&data, PieceSize::Small).unwrap();
//! let mapping = FrameTypeMapping::reduce("l1", min.pieces()).unwrap();
//!
//! assert_eq!(mapping.frame_types(), &[FrameType::LeftTriangle, FrameType::Solid]);
//! ```

pub mod cel;
pub mod error;
pub mod file;

/// `use celmap_types::prelude::*;` to import commonly used items.
pub mod prelude;
