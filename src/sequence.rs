use serde_json::Value;

use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::document::Document;
use crate::error::{DecodeError, Result};
use crate::keyed::KeyedAccess;
use crate::path::Path;

/// Cursor over a sequence node.
pub struct SequenceAccess<'a> {
	decoder: &'a Decoder,
	node: &'a Value,
	items: &'a [Value],
	path: Path,
	index: usize,
}

impl<'a> SequenceAccess<'a> {
	pub(crate) fn new(decoder: &'a Decoder, node: &'a Value, items: &'a [Value], path: Path) -> Self {
		Self {
			decoder,
			node,
			items,
			path,
			index: 0,
		}
	}

	/// Traversal path of this container.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Number of elements in the sequence.
	pub fn count(&self) -> usize {
		self.items.len()
	}

	/// Zero-based cursor position.
	pub fn index(&self) -> usize {
		self.index
	}

	/// True when the cursor is past the last element.
	pub fn at_end(&self) -> bool {
		self.index >= self.items.len()
	}

	/// Decode the next required element.
	///
	/// The cursor advances even when the element fails to decode; a failed
	/// element is terminal for the whole decode, not skippable.
	pub fn decode_next<T: Decode>(&mut self) -> Result<T> {
		T::decode(self.advance()?)
	}

	/// Decode the next optional element; null elements yield `Ok(None)`.
	pub fn decode_next_opt<T: Decode>(&mut self) -> Result<Option<T>> {
		if self.at_end() {
			return Ok(None);
		}
		let document = self.advance()?;
		if document.is_null() {
			return Ok(None);
		}
		T::decode_opt(document)
	}

	/// Open keyed access over the next element.
	pub fn nested_keyed_next(&mut self) -> Result<KeyedAccess<'a>> {
		self.advance()?.keyed()
	}

	/// Open sequence access over the next element.
	pub fn nested_sequence_next(&mut self) -> Result<SequenceAccess<'a>> {
		self.advance()?.sequence()
	}

	/// Fresh single-value context rooted at this container's own node.
	pub fn super_document(&self) -> Document<'a> {
		Document::new(self.decoder, self.node, self.path.clone())
	}

	fn advance(&mut self) -> Result<Document<'a>> {
		let position = self.index;
		self.index += 1;
		match self.items.get(position) {
			Some(node) => Ok(Document::new(self.decoder, node, self.path.child_index(position))),
			None => Err(DecodeError::ValueNotFound {
				expected: "sequence element",
				path: self.path.child_index(position),
			}),
		}
	}
}
