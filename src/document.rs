use serde_json::Value;

use crate::coerce;
use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::error::{DecodeError, Result};
use crate::keyed::KeyedAccess;
use crate::path::Path;
use crate::sequence::SequenceAccess;

/// Single-value decoding context: one node, its path, and the configuration.
///
/// A `Document` is handed to [`Decode::decode`] implementations, which open
/// the container shape they need from it or coerce the node directly.
pub struct Document<'a> {
	decoder: &'a Decoder,
	node: &'a Value,
	path: Path,
}

impl<'a> Document<'a> {
	pub(crate) fn new(decoder: &'a Decoder, node: &'a Value, path: Path) -> Self {
		Self { decoder, node, path }
	}

	/// Decoder configuration in effect for this decode call.
	pub fn decoder(&self) -> &'a Decoder {
		self.decoder
	}

	/// The current node.
	pub fn node(&self) -> &'a Value {
		self.node
	}

	/// Traversal path of the current node.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// True when the current node is explicitly null.
	pub fn is_null(&self) -> bool {
		self.node.is_null()
	}

	/// Decode a required value of type `T` from the current node.
	pub fn decode<T: Decode>(self) -> Result<T> {
		T::decode(self)
	}

	/// Decode an optional value, treating uncoercible scalars as absent.
	pub fn decode_opt<T: Decode>(self) -> Result<Option<T>> {
		T::decode_opt(self)
	}

	/// Open keyed access; the node must be a mapping.
	pub fn keyed(self) -> Result<KeyedAccess<'a>> {
		match self.node {
			Value::Object(entries) => Ok(KeyedAccess::new(self.decoder, self.node, entries, self.path)),
			_ => Err(self.mismatch("mapping")),
		}
	}

	/// Open sequence access; the node must be a sequence.
	pub fn sequence(self) -> Result<SequenceAccess<'a>> {
		match self.node {
			Value::Array(items) => Ok(SequenceAccess::new(self.decoder, self.node, items, self.path)),
			_ => Err(self.mismatch("sequence")),
		}
	}

	/// Fresh context for the same node and path.
	pub(crate) fn fork(&self) -> Document<'a> {
		Document::new(self.decoder, self.node, self.path.clone())
	}

	/// Failure for a value that could not be produced at this node.
	///
	/// Explicit null maps to [`DecodeError::ValueNotFound`], anything else
	/// to [`DecodeError::TypeMismatch`].
	pub fn mismatch(&self, expected: &'static str) -> DecodeError {
		if self.node.is_null() {
			DecodeError::ValueNotFound {
				expected,
				path: self.path.clone(),
			}
		} else {
			DecodeError::TypeMismatch {
				expected,
				found: coerce::node_kind(self.node),
				path: self.path.clone(),
			}
		}
	}

	/// Corruption signaled by a custom decode block at this node.
	pub fn corrupted(&self, reason: impl Into<String>) -> DecodeError {
		DecodeError::DataCorrupted {
			reason: reason.into(),
			path: self.path.clone(),
		}
	}
}
