use thiserror::Error;

use crate::path::Path;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while traversing and coercing a JSON value tree.
///
/// The first failure encountered aborts the whole decode; every variant
/// carries the traversal path accumulated up to the failure point.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// A required field's translated key was absent from the mapping.
	#[error("key not found: {key} at {path}")]
	KeyNotFound {
		/// Requested field name.
		key: String,
		/// Path of the containing mapping.
		path: Path,
	},
	/// A node exists but no coercion rule produces the required type, or a
	/// container shape did not match the requested access.
	#[error("type mismatch at {path}: expected {expected}, found {found}")]
	TypeMismatch {
		/// Logical target type name.
		expected: &'static str,
		/// Kind of the node actually present.
		found: &'static str,
		/// Path of the mismatched node.
		path: Path,
	},
	/// A node is explicitly null where a non-optional value was required.
	#[error("value not found at {path}: expected {expected}")]
	ValueNotFound {
		/// Logical target type name.
		expected: &'static str,
		/// Path of the null or missing value.
		path: Path,
	},
	/// The document could not be parsed, or a custom decode block signaled
	/// corruption.
	#[error("data corrupted at {path}: {reason}")]
	DataCorrupted {
		/// Human-readable failure description.
		reason: String,
		/// Path at which corruption was detected.
		path: Path,
	},
}
