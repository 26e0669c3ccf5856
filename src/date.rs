use std::fmt;
use std::sync::Arc;

use time::format_description::OwnedFormatItem;
use time::format_description::well_known::Iso8601;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::coerce;
use crate::document::Document;
use crate::error::Result;

/// Custom date decoding hook.
///
/// Receives a fresh decoding context rooted at the node; a returned error
/// makes the resolver move on to the next configured strategy.
pub type CustomDateFn = Arc<dyn Fn(Document<'_>) -> Result<OffsetDateTime> + Send + Sync>;

/// One pluggable date decoding strategy.
///
/// The configured list is tried top-to-bottom per field; the first strategy
/// whose source shape matches and whose parse succeeds wins, which allows
/// heterogeneous date encodings within one document.
#[derive(Clone)]
pub enum DateStrategy {
	/// The crate's default date representation: a float of Unix seconds.
	Deferred,
	/// Numeric seconds since the Unix epoch.
	EpochSeconds,
	/// Numeric milliseconds since the Unix epoch.
	EpochMillis,
	/// ISO-8601 text.
	Iso8601,
	/// Text in a caller-supplied format description.
	Formatted(OwnedFormatItem),
	/// Caller-supplied decode procedure.
	Custom(CustomDateFn),
}

impl fmt::Debug for DateStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Deferred => f.write_str("Deferred"),
			Self::EpochSeconds => f.write_str("EpochSeconds"),
			Self::EpochMillis => f.write_str("EpochMillis"),
			Self::Iso8601 => f.write_str("Iso8601"),
			Self::Formatted(_) => f.write_str("Formatted"),
			Self::Custom(_) => f.write_str("Custom"),
		}
	}
}

/// Try the configured strategies in order; `None` when none succeeds.
pub(crate) fn resolve(doc: &Document<'_>) -> Option<OffsetDateTime> {
	for strategy in &doc.decoder().date_strategies {
		let resolved = match strategy {
			DateStrategy::Deferred | DateStrategy::EpochSeconds => {
				coerce::float(doc.node(), &doc.decoder().non_finite_floats).and_then(from_unix_seconds)
			}
			DateStrategy::EpochMillis => coerce::float(doc.node(), &doc.decoder().non_finite_floats)
				.and_then(|millis| from_unix_seconds(millis / 1000.0)),
			DateStrategy::Iso8601 => {
				coerce::string(doc.node()).and_then(|text| OffsetDateTime::parse(&text, &Iso8601::DEFAULT).ok())
			}
			DateStrategy::Formatted(format) => coerce::string(doc.node()).and_then(|text| parse_formatted(&text, format)),
			DateStrategy::Custom(block) => block(doc.fork()).ok(),
		};
		if resolved.is_some() {
			return resolved;
		}
	}

	None
}

fn from_unix_seconds(seconds: f64) -> Option<OffsetDateTime> {
	if !seconds.is_finite() {
		return None;
	}
	OffsetDateTime::from_unix_timestamp_nanos((seconds * 1_000_000_000.0) as i128).ok()
}

/// Parse with decreasing completeness: zoned, then naive assumed UTC, then
/// a bare date at midnight UTC.
fn parse_formatted(text: &str, format: &OwnedFormatItem) -> Option<OffsetDateTime> {
	if let Ok(moment) = OffsetDateTime::parse(text, format) {
		return Some(moment);
	}
	if let Ok(moment) = PrimitiveDateTime::parse(text, format) {
		return Some(moment.assume_utc());
	}
	Date::parse(text, format).ok().map(|date| date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
	use time::format_description;

	use super::{from_unix_seconds, parse_formatted};

	#[test]
	fn unix_seconds_preserve_fractional_nanoseconds() {
		let moment = from_unix_seconds(1_631_448_000.5).expect("in range");
		assert_eq!(moment.unix_timestamp_nanos(), 1_631_448_000_500_000_000);
	}

	#[test]
	fn non_finite_seconds_are_rejected() {
		assert!(from_unix_seconds(f64::NAN).is_none());
		assert!(from_unix_seconds(f64::INFINITY).is_none());
	}

	#[test]
	fn bare_dates_parse_to_midnight_utc() {
		let format = format_description::parse_owned::<2>("[month]/[day]/[year]").expect("valid format");
		let moment = parse_formatted("09/12/2021", &format).expect("parses");
		assert_eq!(moment.unix_timestamp(), 1_631_404_800);
	}
}
