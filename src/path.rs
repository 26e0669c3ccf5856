use std::fmt;

/// One segment of a traversal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// A named field in a mapping.
	Key(String),
	/// A zero-based element index in a sequence.
	Index(usize),
}

/// Ordered trail of segments identifying the current decode location.
///
/// Used only for diagnostics. Descent produces extended copies, so sibling
/// containers never observe each other's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
	segments: Vec<PathSegment>,
}

impl Path {
	/// Empty path addressing the document root.
	pub fn root() -> Self {
		Self::default()
	}

	/// Segments from the root downward.
	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	/// True for the document root.
	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	/// New path extended with a field segment.
	pub fn child_key(&self, key: &str) -> Self {
		let mut segments = self.segments.clone();
		segments.push(PathSegment::Key(key.to_owned()));
		Self { segments }
	}

	/// New path extended with an index segment.
	pub fn child_index(&self, index: usize) -> Self {
		let mut segments = self.segments.clone();
		segments.push(PathSegment::Index(index));
		Self { segments }
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("$")?;
		for segment in &self.segments {
			match segment {
				PathSegment::Key(key) => write!(f, ".{key}")?,
				PathSegment::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::Path;

	#[test]
	fn display_renders_dotted_keys_and_bracketed_indexes() {
		let path = Path::root().child_key("profile").child_index(2).child_key("name");
		assert_eq!(path.to_string(), "$.profile[2].name");
	}

	#[test]
	fn root_renders_bare_dollar() {
		assert_eq!(Path::root().to_string(), "$");
		assert!(Path::root().is_root());
	}

	#[test]
	fn descent_does_not_mutate_the_parent() {
		let parent = Path::root().child_key("items");
		let child = parent.child_index(0);
		assert_eq!(parent.to_string(), "$.items");
		assert_eq!(child.to_string(), "$.items[0]");
	}
}
