use serde_json::{Map, Value};

use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::document::Document;
use crate::error::{DecodeError, Result};
use crate::path::Path;
use crate::sequence::SequenceAccess;

/// Keyed access over a mapping node.
///
/// Field lookups go through the configured key translation; the traversal
/// path keeps the original field name regardless of translation.
pub struct KeyedAccess<'a> {
	decoder: &'a Decoder,
	node: &'a Value,
	entries: &'a Map<String, Value>,
	path: Path,
}

impl<'a> KeyedAccess<'a> {
	pub(crate) fn new(decoder: &'a Decoder, node: &'a Value, entries: &'a Map<String, Value>, path: Path) -> Self {
		Self {
			decoder,
			node,
			entries,
			path,
		}
	}

	/// Traversal path of this container.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Keys actually present in the mapping.
	pub fn keys(&self) -> impl Iterator<Item = &'a str> {
		self.entries.keys().map(String::as_str)
	}

	/// True when the translated key exists in the mapping.
	pub fn contains(&self, field: &str) -> bool {
		self.lookup(field).is_some()
	}

	/// True when the field is absent or explicitly null.
	pub fn is_null(&self, field: &str) -> bool {
		match self.lookup(field) {
			Some(node) => node.is_null(),
			None => true,
		}
	}

	/// Decode a required field.
	///
	/// Fails with [`DecodeError::KeyNotFound`] when the translated key is
	/// absent, and with the target's coercion failure otherwise.
	pub fn decode<T: Decode>(&self, field: &str) -> Result<T> {
		match self.lookup(field) {
			Some(node) => T::decode(self.child(field, node)),
			None => Err(self.missing(field)),
		}
	}

	/// Decode an optional field.
	///
	/// Absent fields, explicit nulls, and uncoercible scalar values all
	/// yield `Ok(None)`; nested composite failures still propagate.
	pub fn decode_opt<T: Decode>(&self, field: &str) -> Result<Option<T>> {
		match self.lookup(field) {
			Some(node) if !node.is_null() => T::decode_opt(self.child(field, node)),
			_ => Ok(None),
		}
	}

	/// Open keyed access over a required nested mapping field.
	pub fn nested_keyed(&self, field: &str) -> Result<KeyedAccess<'a>> {
		match self.lookup(field) {
			Some(node) => self.child(field, node).keyed(),
			None => Err(self.missing(field)),
		}
	}

	/// Open sequence access over a required nested sequence field.
	pub fn nested_sequence(&self, field: &str) -> Result<SequenceAccess<'a>> {
		match self.lookup(field) {
			Some(node) => self.child(field, node).sequence(),
			None => Err(self.missing(field)),
		}
	}

	/// Fresh single-value context rooted at this container's own node.
	///
	/// Lets a type decode part of itself through a base type's decode
	/// procedure without re-walking from the document root.
	pub fn super_document(&self) -> Document<'a> {
		Document::new(self.decoder, self.node, self.path.clone())
	}

	fn lookup(&self, field: &str) -> Option<&'a Value> {
		let key = self.decoder.key_strategy.translate(field, &self.path);
		self.entries.get(key.as_str())
	}

	fn child(&self, field: &str, node: &'a Value) -> Document<'a> {
		Document::new(self.decoder, node, self.path.child_key(field))
	}

	fn missing(&self, field: &str) -> DecodeError {
		DecodeError::KeyNotFound {
			key: field.to_owned(),
			path: self.path.clone(),
		}
	}
}
