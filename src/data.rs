use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use crate::coerce;
use crate::document::Document;
use crate::error::Result;

/// Custom binary decoding hook.
///
/// Receives a fresh decoding context rooted at the node. Unlike date
/// strategies there is no fallback list, so a returned error propagates to
/// the caller.
pub type CustomDataFn = Arc<dyn Fn(Document<'_>) -> Result<Vec<u8>> + Send + Sync>;

/// Binary payload decoding strategy.
#[derive(Clone, Default)]
pub enum DataStrategy {
	/// The payload's plain representation: a sequence of byte values.
	Deferred,
	/// Standard-alphabet base64 text.
	#[default]
	Base64,
	/// Caller-supplied decode procedure.
	Custom(CustomDataFn),
}

impl fmt::Debug for DataStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Deferred => f.write_str("Deferred"),
			Self::Base64 => f.write_str("Base64"),
			Self::Custom(_) => f.write_str("Custom"),
		}
	}
}

/// Resolve the configured strategy; `Ok(None)` means not coercible.
pub(crate) fn resolve(doc: &Document<'_>) -> Result<Option<Bytes>> {
	match &doc.decoder().data_strategy {
		DataStrategy::Deferred => {
			let Ok(values) = doc.fork().decode::<Vec<u8>>() else {
				return Ok(None);
			};
			Ok(Some(Bytes::from(values)))
		}
		DataStrategy::Base64 => {
			let Some(text) = coerce::string(doc.node()) else {
				return Ok(None);
			};
			Ok(STANDARD.decode(text).ok().map(Bytes::from))
		}
		DataStrategy::Custom(block) => block(doc.fork()).map(|payload| Some(Bytes::from(payload))),
	}
}
