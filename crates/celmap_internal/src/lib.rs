//! Frame-type table generation for `celmap-rs`: reading level MIN resources,
//! reducing them and emitting the result.
//!
//! Most users should depend on `celmap-rs` and use its prelude instead.

pub mod aggregate;
pub mod emit;
pub mod error;
pub mod reader;

/// `use celmap_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use celmap_types;
pub use celmap_vfs;

// Re-export commonly used types at crate root
pub use aggregate::{AggregatedResult, Aggregator, DEFAULT_LEVELS};
pub use emit::{Emitter, JsonEmitter, RustSourceEmitter};
pub use error::{AggregateError, EmitError, ResourceError};
pub use reader::MinReader;
