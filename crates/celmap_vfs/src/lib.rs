//! Resource lookup for `celmap-rs`.
//!
//! The generator only needs to read a level resource by its logical name
//! (`"l1"`, `"town"`, ...). [`ResourceLookup`] is that narrow contract;
//! [`DirLookup`] implements it over an extracted game archive and
//! [`MemoryLookup`] over in-memory buffers.
//!
//! # Examples
//!
//! ```
//! use celmap_vfs::{MemoryLookup, ResourceLookup};
//!
//! let mut lookup = MemoryLookup::new();
//! lookup.insert("l1", vec![0u8; 20]);
//!
//! assert_eq!(lookup.read("l1").unwrap().len(), 20);
//! assert!(lookup.read("l2").unwrap_err().is_not_found());
//! ```

use std::{
	collections::HashMap,
	io,
	path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

/// Errors that can occur when looking up a resource
#[derive(Debug, Error)]
pub enum LookupError {
	/// No resource with this name exists
	#[error("Resource '{name}' not found{}", searched_at(.location))]
	NotFound {
		/// Requested resource name
		name: String,
		/// Location that was searched, if the lookup is backed by files
		location: Option<PathBuf>,
	},

	/// The resource exists but could not be read
	#[error("Failed to read resource '{name}' from {}: {source}", .path.display())]
	Read {
		/// Requested resource name
		name: String,
		/// File that failed to read
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: io::Error,
	},
}

fn searched_at(location: &Option<PathBuf>) -> String {
	location.as_ref().map(|path| format!(" at {}", path.display())).unwrap_or_default()
}

impl LookupError {
	/// Returns true if the resource does not exist
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}

	/// Returns the requested resource name
	pub fn name(&self) -> &str {
		match self {
			Self::NotFound {
				name,
				..
			}
			| Self::Read {
				name,
				..
			} => name,
		}
	}
}

/// Read access to named resources.
pub trait ResourceLookup {
	/// Returns the raw bytes of the named resource
	fn read(&self, name: &str) -> Result<Vec<u8>, LookupError>;
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for &T {
	fn read(&self, name: &str) -> Result<Vec<u8>, LookupError> {
		(**self).read(name)
	}
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for Box<T> {
	fn read(&self, name: &str) -> Result<Vec<u8>, LookupError> {
		(**self).read(name)
	}
}

/// Looks up level MIN files in an extracted archive directory.
///
/// Resource `<name>` resolves to `<root>/levels/<name>data/<name>.min`,
/// e.g. `diabdat/levels/l1data/l1.min`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirLookup {
	root: PathBuf,
}

impl DirLookup {
	/// Creates a lookup rooted at an extracted archive directory
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Returns the archive root
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Returns the path a resource name resolves to
	pub fn path_for(&self, name: &str) -> PathBuf {
		self.root.join("levels").join(format!("{name}data")).join(format!("{name}.min"))
	}
}

impl ResourceLookup for DirLookup {
	fn read(&self, name: &str) -> Result<Vec<u8>, LookupError> {
		let path = self.path_for(name);
		debug!("Reading resource '{}' from {}", name, path.display());

		std::fs::read(&path).map_err(|source| {
			if source.kind() == io::ErrorKind::NotFound {
				LookupError::NotFound {
					name: name.to_string(),
					location: Some(path),
				}
			} else {
				LookupError::Read {
					name: name.to_string(),
					path,
					source,
				}
			}
		})
	}
}

/// In-memory resources keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLookup {
	resources: HashMap<String, Vec<u8>>,
}

impl MemoryLookup {
	/// Creates an empty lookup
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a resource, returning the previous bytes
	pub fn insert(&mut self, name: impl Into<String>, data: Vec<u8>) -> Option<Vec<u8>> {
		self.resources.insert(name.into(), data)
	}

	/// Removes a resource
	pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> {
		self.resources.remove(name)
	}

	/// Returns true if the resource exists
	pub fn contains(&self, name: &str) -> bool {
		self.resources.contains_key(name)
	}

	/// Returns the number of resources
	pub fn len(&self) -> usize {
		self.resources.len()
	}

	/// Returns true if there are no resources
	pub fn is_empty(&self) -> bool {
		self.resources.is_empty()
	}
}

impl ResourceLookup for MemoryLookup {
	fn read(&self, name: &str) -> Result<Vec<u8>, LookupError> {
		self.resources.get(name).cloned().ok_or_else(|| LookupError::NotFound {
			name: name.to_string(),
			location: None,
		})
	}
}

impl<N: Into<String>> FromIterator<(N, Vec<u8>)> for MemoryLookup {
	fn from_iter<I: IntoIterator<Item = (N, Vec<u8>)>>(iter: I) -> Self {
		Self {
			resources: iter.into_iter().map(|(name, data)| (name.into(), data)).collect(),
		}
	}
}
