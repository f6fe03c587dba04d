//! Prelude module for `celmap_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use celmap_types::prelude::*;
//!
//! let min = MinFile::open("l1.min", PieceSize::for_level("l1")).unwrap();
//! let mapping = Reducer::new().reduce("l1", min.pieces()).unwrap();
//! ```

#[doc(inline)]
pub use crate::cel::{Decoders, FrameType, FrameTypeMapping, HolePolicy, Reducer};

#[doc(inline)]
pub use crate::error::{MappingError, MinError, UnknownFrameType};

#[doc(inline)]
pub use crate::file::{Block, MinFile, Piece, PieceSize};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
