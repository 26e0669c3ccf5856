use serde_json::Value;

use crate::data::DataStrategy;
use crate::date::DateStrategy;
use crate::decode::Decode;
use crate::document::Document;
use crate::error::{DecodeError, Result};
use crate::keys::KeyStrategy;
use crate::path::Path;

/// Handling of textual stand-ins for non-finite floats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NonFinitePolicy {
	/// No token substitution; strings go through ordinary float parsing.
	#[default]
	Reject,
	/// Substitute the named tokens for the non-finite values.
	Tokens {
		/// Token decoded as positive infinity.
		positive_infinity: String,
		/// Token decoded as negative infinity.
		negative_infinity: String,
		/// Token decoded as NaN.
		nan: String,
	},
}

/// Lenient JSON decoder: strategy configuration plus entry points.
///
/// Configure the public fields up front, then decode any number of
/// independent documents. Decoding never mutates the decoder, so a
/// configured instance may be shared across threads.
#[derive(Debug, Clone)]
pub struct Decoder {
	/// Ordered date strategies, tried per field until one succeeds.
	pub date_strategies: Vec<DateStrategy>,
	/// Binary payload strategy.
	pub data_strategy: DataStrategy,
	/// Key translation applied to every field lookup.
	pub key_strategy: KeyStrategy,
	/// Policy for textual non-finite float tokens.
	pub non_finite_floats: NonFinitePolicy,
}

impl Default for Decoder {
	fn default() -> Self {
		Self {
			date_strategies: vec![DateStrategy::Deferred],
			data_strategy: DataStrategy::Base64,
			key_strategy: KeyStrategy::Identity,
			non_finite_floats: NonFinitePolicy::Reject,
		}
	}
}

impl Decoder {
	/// Decoder with default strategies.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse `bytes` as a JSON document and decode a `T` from its root.
	///
	/// Parser failures surface as [`DecodeError::DataCorrupted`] at the
	/// root path; everything past parsing is [`Self::decode_value`].
	pub fn decode<T: Decode>(&self, bytes: &[u8]) -> Result<T> {
		let root: Value = serde_json::from_slice(bytes).map_err(|err| DecodeError::DataCorrupted {
			reason: format!("could not parse the JSON document: {err}"),
			path: Path::root(),
		})?;
		self.decode_value(&root)
	}

	/// Decode a `T` from an already-parsed value tree.
	pub fn decode_value<T: Decode>(&self, root: &Value) -> Result<T> {
		T::decode(Document::new(self, root, Path::root()))
	}
}
