use std::fmt;
use std::sync::Arc;

use crate::path::Path;

/// Custom key translation hook.
///
/// Receives the full traversal path including the requested field as its
/// last segment, and returns the actual mapping key to look up.
pub type CustomKeyFn = Arc<dyn Fn(&Path) -> String + Send + Sync>;

/// Field-name-to-mapping-key translation strategy.
#[derive(Clone, Default)]
pub enum KeyStrategy {
	/// Use the requested field name as-is.
	#[default]
	Identity,
	/// Capitalize the first letter of each word, lowercase the rest.
	Capitalized,
	/// Convert camelCase field names to snake_case keys.
	SnakeCase,
	/// Caller-supplied translation.
	Custom(CustomKeyFn),
}

impl KeyStrategy {
	/// Translate `field` into the key used for mapping lookup.
	pub(crate) fn translate(&self, field: &str, path: &Path) -> String {
		match self {
			Self::Identity => field.to_owned(),
			Self::Capitalized => capitalized(field),
			Self::SnakeCase => snake_case(field),
			Self::Custom(translate) => translate(&path.child_key(field)),
		}
	}
}

impl fmt::Debug for KeyStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Identity => f.write_str("Identity"),
			Self::Capitalized => f.write_str("Capitalized"),
			Self::SnakeCase => f.write_str("SnakeCase"),
			Self::Custom(_) => f.write_str("Custom"),
		}
	}
}

/// Convert a camelCase identifier to snake_case.
///
/// An underscore is inserted before each uppercase run; a run that
/// continues into lowercase keeps its last letter with the lowercase tail
/// (`multiwordKey` becomes `multiword_key`, `HTMLBody` becomes
/// `html_body`). Deterministic, no external state.
pub fn snake_case(input: &str) -> String {
	let mut output = String::with_capacity(input.len() + 4);
	let mut previous_was_uppercase = false;
	let mut previous_inserted_underscore = false;

	for ch in input.chars() {
		let is_uppercase = ch.is_uppercase();
		if is_uppercase {
			if !previous_was_uppercase && !output.is_empty() {
				output.push('_');
			}
		} else if previous_was_uppercase && !previous_inserted_underscore {
			if let Some(run_end) = output.pop() {
				output.push('_');
				output.push(run_end);
			}
		}

		output.push(ch);
		previous_inserted_underscore = is_uppercase && !previous_was_uppercase;
		previous_was_uppercase = is_uppercase;
	}

	output.to_lowercase()
}

fn capitalized(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	let mut at_word_start = true;

	for ch in input.chars() {
		if ch.is_alphabetic() {
			if at_word_start {
				output.extend(ch.to_uppercase());
			} else {
				output.extend(ch.to_lowercase());
			}
			at_word_start = false;
		} else {
			output.push(ch);
			at_word_start = true;
		}
	}

	output
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::{KeyStrategy, snake_case};
	use crate::path::{Path, PathSegment};

	#[test]
	fn snake_case_splits_camel_case_words() {
		assert_eq!(snake_case("multiwordKey"), "multiword_key");
		assert_eq!(snake_case("imageURL"), "image_url");
		assert_eq!(snake_case("a"), "a");
	}

	#[test]
	fn snake_case_keeps_uppercase_runs_together() {
		assert_eq!(snake_case("HTMLBody"), "html_body");
		assert_eq!(snake_case("userID"), "user_id");
	}

	#[test]
	fn snake_case_leaves_existing_snake_case_alone() {
		assert_eq!(snake_case("already_snake"), "already_snake");
	}

	#[test]
	fn capitalized_uppercases_word_starts() {
		let strategy = KeyStrategy::Capitalized;
		assert_eq!(strategy.translate("name", &Path::root()), "Name");
		assert_eq!(strategy.translate("displayName", &Path::root()), "Displayname");
	}

	#[test]
	fn custom_translation_sees_the_full_path() {
		let strategy = KeyStrategy::Custom(Arc::new(|path: &Path| {
			let Some(PathSegment::Key(field)) = path.segments().last() else {
				return String::new();
			};
			format!("x-{field}")
		}));
		let parent = Path::root().child_key("outer");
		assert_eq!(strategy.translate("inner", &parent), "x-inner");
	}
}
