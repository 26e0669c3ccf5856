//! Lenient, coercing JSON decoding.
//!
//! `limber` converts an already-parsed [`Value`] tree into strongly-typed
//! values, tolerating the representation drift found in real-world
//! documents: numbers as strings, booleans as numbers, single-element
//! sequences as scalars, and heterogeneous date encodings. Fields decoded
//! as optional absorb uncoercible values as absent; required fields fail
//! loudly with the traversal path at the failure point.
//!
//! ```
//! use limber::{Decode, Decoder, Document, Result};
//!
//! struct Account {
//! 	name: String,
//! 	age: Option<u32>,
//! }
//!
//! impl Decode for Account {
//! 	fn decode(doc: Document<'_>) -> Result<Self> {
//! 		let fields = doc.keyed()?;
//! 		Ok(Self {
//! 			name: fields.decode("name")?,
//! 			age: fields.decode_opt("age")?,
//! 		})
//! 	}
//! }
//!
//! let account: Account = Decoder::new().decode(br#"{"name": "ada", "age": "36"}"#)?;
//! assert_eq!(account.name, "ada");
//! assert_eq!(account.age, Some(36));
//! # Ok::<(), limber::DecodeError>(())
//! ```

mod coerce;
mod data;
mod date;
mod decode;
mod decoder;
mod document;
mod error;
mod keyed;
mod keys;
mod path;
mod sequence;

/// Binary payload strategy and custom hook type.
pub use data::{CustomDataFn, DataStrategy};
/// Date decoding strategies and custom hook type.
pub use date::{CustomDateFn, DateStrategy};
/// Decode target trait.
pub use decode::Decode;
/// Decoder configuration and entry points.
pub use decoder::{Decoder, NonFinitePolicy};
/// Single-value decoding context.
pub use document::Document;
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Keyed mapping access.
pub use keyed::KeyedAccess;
/// Key translation strategies and the snake_case conversion.
pub use keys::{CustomKeyFn, KeyStrategy, snake_case};
/// Traversal path types.
pub use path::{Path, PathSegment};
/// Sequence access cursor.
pub use sequence::SequenceAccess;

/// Dynamic JSON value tree, re-exported from `serde_json`.
pub use serde_json::Value;
