//! Error types for reading, aggregating and emitting frame-type tables.

use celmap_types::error::{MappingError, MinError};
use celmap_vfs::LookupError;
use thiserror::Error;

/// Errors that can occur while processing a single resource
#[derive(Debug, Error)]
pub enum ResourceError {
	/// The resource does not exist
	#[error(transparent)]
	ResourceNotFound(LookupError),

	/// The resource exists but could not be read
	#[error(transparent)]
	Unreadable(LookupError),

	/// The bytes are not a valid MIN container
	#[error("Malformed MIN container: {0}")]
	MalformedContainer(#[from] MinError),

	/// The blocks do not form a dense, conflict-free frame table
	#[error(transparent)]
	Mapping(#[from] MappingError),
}

impl From<LookupError> for ResourceError {
	fn from(err: LookupError) -> Self {
		if err.is_not_found() {
			Self::ResourceNotFound(err)
		} else {
			Self::Unreadable(err)
		}
	}
}

/// Errors that can occur when aggregating several resources
#[derive(Debug, Error)]
pub enum AggregateError {
	/// The resource list is empty
	#[error("No resources to aggregate")]
	NoResources,

	/// A resource name appears more than once
	#[error("Resource '{0}' is listed more than once")]
	DuplicateResource(String),

	/// Processing a resource failed
	#[error("Resource '{name}': {cause}")]
	ResourceFailure {
		/// Name of the failing resource
		name: String,
		/// What went wrong
		#[source]
		cause: ResourceError,
	},
}

/// Errors that can occur when emitting an aggregated result
#[derive(Debug, Error)]
pub enum EmitError {
	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),

	/// JSON serialization error
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Two resources would be written under the same identifier
	#[error("Resources '{}' and '{}' both map to the identifier `{name}`", .resources.0, .resources.1)]
	DuplicateIdentifier {
		/// Generated identifier
		name: String,
		/// Names of the colliding resources, in output order
		resources: (String, String),
	},
}
