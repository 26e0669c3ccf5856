use serde_json::Value;

use crate::decoder::NonFinitePolicy;

/// Fixed-width integer targets supported by the coercion matrix.
pub(crate) trait Integer: Copy + std::str::FromStr {
	/// Converts from a signed 64-bit value when in range.
	fn from_i64(value: i64) -> Option<Self>;
	/// Converts from an unsigned 64-bit value when in range.
	fn from_u64(value: u64) -> Option<Self>;
	/// Converts from a widened value when in range.
	fn from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_integer {
	($($int:ty),* $(,)?) => {$(
		impl Integer for $int {
			fn from_i64(value: i64) -> Option<Self> {
				Self::try_from(value).ok()
			}

			fn from_u64(value: u64) -> Option<Self> {
				Self::try_from(value).ok()
			}

			fn from_i128(value: i128) -> Option<Self> {
				Self::try_from(value).ok()
			}
		}
	)*};
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Logical kind name of a node, for error reporting.
pub(crate) fn node_kind(node: &Value) -> &'static str {
	match node {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "sequence",
		Value::Object(_) => "mapping",
	}
}

/// Boolean targets accept boolean literals only.
pub(crate) fn boolean(node: &Value) -> Option<bool> {
	node.as_bool()
}

/// String coercion.
///
/// Accepts string literals (a case-insensitive `"null"` counts as absent),
/// unwraps a single-element sequence of one string, and falls back to the
/// canonical rendering of any other non-null value.
pub(crate) fn string(node: &Value) -> Option<String> {
	match node {
		Value::Null => None,
		Value::String(text) => {
			if text.eq_ignore_ascii_case("null") {
				None
			} else {
				Some(text.clone())
			}
		}
		Value::Array(items) => {
			if let [Value::String(only)] = items.as_slice() {
				Some(only.clone())
			} else {
				Some(node.to_string())
			}
		}
		other => Some(other.to_string()),
	}
}

/// Integer coercion shared by required and optional requests.
///
/// Accepts integral numbers, floats with no fractional part that fit the
/// target width, and strings holding either form. Fractional or
/// out-of-range values yield `None`, never a panic or wraparound.
pub(crate) fn integer<T: Integer>(node: &Value) -> Option<T> {
	match node {
		Value::Number(number) => {
			if let Some(value) = number.as_i64() {
				T::from_i64(value)
			} else if let Some(value) = number.as_u64() {
				T::from_u64(value)
			} else {
				number.as_f64().and_then(integral_float)
			}
		}
		Value::String(text) => {
			if let Ok(value) = text.parse::<T>() {
				Some(value)
			} else {
				text.parse::<f64>().ok().and_then(integral_float)
			}
		}
		_ => None,
	}
}

/// Optional-request integer coercion additionally accepts booleans as 1/0.
pub(crate) fn integer_lenient<T: Integer>(node: &Value) -> Option<T> {
	if let Value::Bool(flag) = node {
		return T::from_i64(i64::from(*flag));
	}
	integer(node)
}

/// Double-precision coercion, honoring configured non-finite tokens.
pub(crate) fn float(node: &Value, policy: &NonFinitePolicy) -> Option<f64> {
	match node {
		Value::Number(number) => number.as_f64(),
		Value::String(text) => {
			if let NonFinitePolicy::Tokens {
				positive_infinity,
				negative_infinity,
				nan,
			} = policy
			{
				if text == positive_infinity {
					return Some(f64::INFINITY);
				}
				if text == negative_infinity {
					return Some(f64::NEG_INFINITY);
				}
				if text == nan {
					return Some(f64::NAN);
				}
			}
			text.parse::<f64>().ok()
		}
		_ => None,
	}
}

fn integral_float<T: Integer>(value: f64) -> Option<T> {
	if !value.is_finite() || value.fract() != 0.0 {
		return None;
	}
	T::from_i128(value as i128)
}
