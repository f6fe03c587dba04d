//! Prelude module for `celmap_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use celmap_internal::prelude::*;
//!
//! let aggregator = Aggregator::new(DirLookup::new("diabdat"));
//! let emitter = RustSourceEmitter::new();
//! assert_eq!(FrameType::ALL.len(), 7);
//! ```

// Re-export everything from celmap_types::prelude
#[doc(inline)]
pub use celmap_types::prelude::*;

#[doc(inline)]
pub use celmap_vfs::{DirLookup, LookupError, MemoryLookup, ResourceLookup};

#[doc(inline)]
pub use crate::{
	AggregateError, AggregatedResult, Aggregator, DEFAULT_LEVELS, EmitError, Emitter, JsonEmitter,
	MinReader, ResourceError, RustSourceEmitter,
};

// Re-export the entire celmap_types crate for advanced usage
#[doc(inline)]
pub use celmap_types;
