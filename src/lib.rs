#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `celmap-rs` derives, for every frame of a level CEL archive, which of the
//! seven CEL decoding algorithms applies to it.
//!
//! The frame types are recorded in the level's MIN container. This crate reads
//! the MIN containers of a list of levels, folds their blocks into dense
//! frame-type tables and hands the tables to an emitter. The `celgen` binary
//! wraps all of it for an extracted game archive.
//!
//! ```
//! use celmap_rs::prelude::*;
//!
//! let mut data = vec![0u8; 20];
//! data[0..2].copy_from_slice(&0x2001u16.to_le_bytes());
//! data[2..4].copy_from_slice(&0x0002u16.to_le_bytes());
//!
//! let lookup: MemoryLookup = [("l1", data)].into_iter().collect();
//! let result = Aggregator::new(lookup).aggregate(&["l1"]).unwrap();
//!
//! let source = RustSourceEmitter::new().render(&result).unwrap();
//! assert!(String::from_utf8(source).unwrap().contains("L1_FRAME_TYPES: [u8; 2] = [2, 0];"));
//! ```
pub use celmap_internal::*;
