use bytes::Bytes;
use serde_json::Value;
use time::OffsetDateTime;

use crate::coerce;
use crate::data;
use crate::date;
use crate::document::Document;
use crate::error::Result;

/// A type decodable from a JSON value tree.
///
/// Implementations receive a [`Document`] bound to the node being decoded,
/// open the container shape they need from it, and drive nested decodes
/// through the resulting access values. This is the seam where a composite
/// type names its fields and their target types.
pub trait Decode: Sized {
	/// Decode a required value.
	fn decode(doc: Document<'_>) -> Result<Self>;

	/// Decode an optional value.
	///
	/// The default treats explicit null as absent and propagates every other
	/// failure; scalar implementations widen this so that uncoercible nodes
	/// become absent instead of errors.
	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		if doc.is_null() {
			return Ok(None);
		}
		Self::decode(doc).map(Some)
	}
}

impl Decode for bool {
	fn decode(doc: Document<'_>) -> Result<Self> {
		coerce::boolean(doc.node()).ok_or_else(|| doc.mismatch("bool"))
	}

	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		Ok(coerce::boolean(doc.node()))
	}
}

impl Decode for String {
	fn decode(doc: Document<'_>) -> Result<Self> {
		coerce::string(doc.node()).ok_or_else(|| doc.mismatch("string"))
	}

	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		Ok(coerce::string(doc.node()))
	}
}

macro_rules! impl_decode_integer {
	($($int:ty),* $(,)?) => {$(
		impl Decode for $int {
			fn decode(doc: Document<'_>) -> Result<Self> {
				coerce::integer(doc.node()).ok_or_else(|| doc.mismatch(stringify!($int)))
			}

			fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
				Ok(coerce::integer_lenient(doc.node()))
			}
		}
	)*};
}

impl_decode_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Decode for f64 {
	fn decode(doc: Document<'_>) -> Result<Self> {
		coerce::float(doc.node(), &doc.decoder().non_finite_floats).ok_or_else(|| doc.mismatch("f64"))
	}

	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		Ok(coerce::float(doc.node(), &doc.decoder().non_finite_floats))
	}
}

impl Decode for f32 {
	fn decode(doc: Document<'_>) -> Result<Self> {
		coerce::float(doc.node(), &doc.decoder().non_finite_floats)
			.map(|wide| wide as f32)
			.ok_or_else(|| doc.mismatch("f32"))
	}

	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		Ok(coerce::float(doc.node(), &doc.decoder().non_finite_floats).map(|wide| wide as f32))
	}
}

impl<T: Decode> Decode for Option<T> {
	fn decode(doc: Document<'_>) -> Result<Self> {
		T::decode_opt(doc)
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn decode(doc: Document<'_>) -> Result<Self> {
		let mut sequence = doc.sequence()?;
		let mut items = Vec::with_capacity(sequence.count());
		while !sequence.at_end() {
			items.push(sequence.decode_next()?);
		}
		Ok(items)
	}
}

impl Decode for Value {
	fn decode(doc: Document<'_>) -> Result<Self> {
		Ok(doc.node().clone())
	}
}

impl Decode for OffsetDateTime {
	fn decode(doc: Document<'_>) -> Result<Self> {
		match date::resolve(&doc) {
			Some(moment) => Ok(moment),
			None => Err(doc.mismatch("date")),
		}
	}

	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		if doc.is_null() {
			return Ok(None);
		}
		Ok(date::resolve(&doc))
	}
}

impl Decode for Bytes {
	fn decode(doc: Document<'_>) -> Result<Self> {
		match data::resolve(&doc)? {
			Some(payload) => Ok(payload),
			None => Err(doc.mismatch("binary data")),
		}
	}

	fn decode_opt(doc: Document<'_>) -> Result<Option<Self>> {
		if doc.is_null() {
			return Ok(None);
		}
		data::resolve(&doc)
	}
}
