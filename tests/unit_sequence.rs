#![allow(missing_docs)]

use limber::{Decode, DecodeError, Decoder, Document, Result};
use serde_json::json;

#[test]
fn string_sequences_decode_element_by_element() {
	let result: Vec<String> = Decoder::new().decode(b"[ \"one\", \"\xF0\x9F\x98\x81\", \"three\" ]").expect("decodes");
	assert_eq!(result, ["one", "😁", "three"]);
}

#[test]
fn boolean_sequences_decode_element_by_element() {
	let result: Vec<bool> = Decoder::new().decode(br#"[ true, false, true ]"#).expect("decodes");
	assert_eq!(result, [true, false, true]);
}

#[test]
fn sequence_elements_go_through_the_coercion_matrix() {
	let result: Vec<i64> = Decoder::new().decode_value(&json!([1, "2", 3.0])).expect("decodes");
	assert_eq!(result, [1, 2, 3]);
}

#[test]
fn optional_elements_absorb_nulls_and_uncoercible_values() {
	let result: Vec<Option<i64>> = Decoder::new().decode_value(&json!([1, null, "x"])).expect("decodes");
	assert_eq!(result, [Some(1), None, None]);
}

#[test]
fn nested_sequences_recurse() {
	let result: Vec<Vec<i64>> = Decoder::new().decode_value(&json!([[1, 2], [3]])).expect("decodes");
	assert_eq!(result, [vec![1, 2], vec![3]]);
}

#[test]
fn a_single_element_string_sequence_coerces_to_a_scalar_string() {
	let result: String = Decoder::new().decode_value(&json!(["solo"])).expect("decodes");
	assert_eq!(result, "solo");
}

struct CursorProbe {
	first_failed: bool,
	at_end_after_failure: bool,
}

impl Decode for CursorProbe {
	fn decode(doc: Document<'_>) -> Result<Self> {
		let mut elements = doc.sequence()?;
		let first_failed = elements.decode_next::<i64>().is_err();
		Ok(Self {
			first_failed,
			at_end_after_failure: elements.at_end(),
		})
	}
}

#[test]
fn the_cursor_advances_even_when_an_element_fails() {
	let probe: CursorProbe = Decoder::new().decode_value(&json!(["not a number"])).expect("decodes");
	assert!(probe.first_failed);
	assert!(probe.at_end_after_failure);
}

#[derive(Debug)]
struct TakesTwo;

impl Decode for TakesTwo {
	fn decode(doc: Document<'_>) -> Result<Self> {
		let mut elements = doc.sequence()?;
		let _: i64 = elements.decode_next()?;
		let _: i64 = elements.decode_next()?;
		Ok(Self)
	}
}

#[test]
fn reading_past_the_end_is_value_not_found() {
	let err = Decoder::new().decode_value::<TakesTwo>(&json!([1])).expect_err("must fail");
	assert!(matches!(err, DecodeError::ValueNotFound { .. }), "got {err}");
	assert!(err.to_string().contains("[1]"), "got {err}");
}

#[derive(Debug, PartialEq)]
struct Point {
	x: i64,
	y: i64,
}

impl Decode for Point {
	fn decode(doc: Document<'_>) -> Result<Self> {
		let fields = doc.keyed()?;
		Ok(Self {
			x: fields.decode("x")?,
			y: fields.decode("y")?,
		})
	}
}

struct PointPair {
	first: Point,
	second: Point,
}

impl Decode for PointPair {
	fn decode(doc: Document<'_>) -> Result<Self> {
		let mut elements = doc.sequence()?;
		let first_fields = elements.nested_keyed_next()?;
		let first = Point {
			x: first_fields.decode("x")?,
			y: first_fields.decode("y")?,
		};
		let second = elements.decode_next()?;
		Ok(Self { first, second })
	}
}

#[test]
fn nested_keyed_access_walks_sequence_elements() {
	let pair: PointPair = Decoder::new()
		.decode_value(&json!([{"x": 1, "y": 2}, {"x": 3, "y": 4}]))
		.expect("decodes");
	assert_eq!(pair.first, Point { x: 1, y: 2 });
	assert_eq!(pair.second, Point { x: 3, y: 4 });
}

struct HeadAndTail {
	head: i64,
	tail: Vec<i64>,
}

impl Decode for HeadAndTail {
	fn decode(doc: Document<'_>) -> Result<Self> {
		let mut elements = doc.sequence()?;
		let head = elements.decode_next()?;
		let mut inner = elements.nested_sequence_next()?;
		let mut tail = Vec::with_capacity(inner.count());
		while !inner.at_end() {
			tail.push(inner.decode_next()?);
		}
		Ok(Self { head, tail })
	}
}

#[test]
fn nested_sequence_access_walks_sequence_elements() {
	let result: HeadAndTail = Decoder::new().decode_value(&json!([7, [8, 9]])).expect("decodes");
	assert_eq!(result.head, 7);
	assert_eq!(result.tail, [8, 9]);
}
