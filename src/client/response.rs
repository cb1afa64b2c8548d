//! Parsing of search service responses.
//!
//! Every hit is validated field by field with stillwater's `Validation`, so
//! a bad response reports all of its malformed fields instead of the first.

use super::error::{FieldError, ParseError};
use crate::core::{Record, RecordId};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type HitValidation = Validation<Record, NonEmptyVec<FieldError>>;

/// Parse a `{ "hits": [...] }` body into records, preserving server order.
///
/// Any missing or malformed field fails the whole response.
///
/// # Example
///
/// ```rust
/// use hitlist::client::parse_hits;
///
/// let body = r#"{"hits":[{"objectID":1,"title":"A","url":"u","author":"x","num_comments":0,"points":1}]}"#;
/// let records = parse_hits(body).unwrap();
///
/// assert_eq!(records[0].id.as_str(), "1");
/// assert_eq!(records[0].title, "A");
/// ```
pub fn parse_hits(body: &str) -> Result<Vec<Record>, ParseError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ParseError::Json(e.to_string()))?;

    let hits = value
        .get("hits")
        .ok_or_else(|| ParseError::Shape("missing 'hits'".to_string()))?
        .as_array()
        .ok_or_else(|| ParseError::Shape("'hits' is not an array".to_string()))?;

    let parsed: Vec<HitValidation> = hits
        .iter()
        .enumerate()
        .map(|(index, hit)| parse_hit(index, hit))
        .collect();

    match Validation::all_vec(parsed) {
        Validation::Success(records) => Ok(records),
        Validation::Failure(errors) => Err(ParseError::Fields(errors.iter().cloned().collect())),
    }
}

fn parse_hit(index: usize, hit: &Value) -> HitValidation {
    if !hit.is_object() {
        return Validation::fail(FieldError::NotAnObject { index });
    }

    let mut reader = HitReader {
        index,
        hit,
        errors: Vec::new(),
    };
    let record = Record {
        id: reader.id("objectID"),
        title: reader.text("title"),
        url: reader.text("url"),
        author: reader.text("author"),
        comment_count: reader.count("num_comments"),
        score: reader.integer("points"),
    };
    reader.finish(record)
}

/// Pulls typed fields out of one hit, remembering every failure.
struct HitReader<'a> {
    index: usize,
    hit: &'a Value,
    errors: Vec<FieldError>,
}

impl<'a> HitReader<'a> {
    fn field(&mut self, field: &'static str) -> Option<&'a Value> {
        match self.hit.get(field) {
            None | Some(Value::Null) => {
                self.errors.push(FieldError::Missing {
                    index: self.index,
                    field,
                });
                None
            }
            Some(value) => Some(value),
        }
    }

    fn invalid(&mut self, field: &'static str, expected: &'static str) {
        self.errors.push(FieldError::Invalid {
            index: self.index,
            field,
            expected,
        });
    }

    fn id(&mut self, field: &'static str) -> RecordId {
        let id = match self.field(field) {
            Some(Value::String(s)) => Some(RecordId::new(s.clone())),
            Some(Value::Number(n)) => n.as_u64().map(RecordId::from),
            Some(_) => None,
            None => return placeholder_id(),
        };
        id.unwrap_or_else(|| {
            self.invalid(field, "a string or unsigned integer");
            placeholder_id()
        })
    }

    fn text(&mut self, field: &'static str) -> String {
        let text = match self.field(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => None,
            None => return String::new(),
        };
        text.unwrap_or_else(|| {
            self.invalid(field, "a string");
            String::new()
        })
    }

    fn count(&mut self, field: &'static str) -> u64 {
        let count = match self.field(field) {
            Some(value) => value.as_u64(),
            None => return 0,
        };
        count.unwrap_or_else(|| {
            self.invalid(field, "a non-negative integer");
            0
        })
    }

    fn integer(&mut self, field: &'static str) -> i64 {
        let number = match self.field(field) {
            Some(value) => value.as_i64(),
            None => return 0,
        };
        number.unwrap_or_else(|| {
            self.invalid(field, "an integer");
            0
        })
    }

    /// The record is only kept when no field failed.
    fn finish(self, record: Record) -> HitValidation {
        let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> =
            self.errors.into_iter().map(Validation::fail).collect();
        Validation::all_vec(checks).map(move |_| record)
    }
}

fn placeholder_id() -> RecordId {
    RecordId::new(String::new())
}
