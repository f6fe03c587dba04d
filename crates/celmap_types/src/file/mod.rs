//! File type support for `celmap-rs` project.

pub mod min;

// Re-export main file types
pub use min::{Block, File as MinFile, Piece, PieceSize};
