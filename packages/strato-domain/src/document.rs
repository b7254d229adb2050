use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Anything that can answer keyed field lookups: JSON objects, frame rows, typed documents.
pub trait RecordLike {
	fn field(&self, key: &str) -> Option<&Value>;
}
impl RecordLike for Map<String, Value> {
	fn field(&self, key: &str) -> Option<&Value> {
		self.get(key)
	}
}
impl RecordLike for Value {
	fn field(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|map| map.get(key))
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDocument {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub steps: Vec<String>,
}
impl StrategyDocument {
	pub fn new(title: impl Into<String>, description: impl Into<String>, steps: &[&str]) -> Self {
		Self {
			title: title.into(),
			description: description.into(),
			steps: steps.iter().map(|step| step.to_string()).collect(),
		}
	}

	/// Never fails: missing or mistyped fields coerce to empty values.
	pub fn from_record<R>(record: &R) -> Self
	where
		R: RecordLike + ?Sized,
	{
		let steps = match record.field("steps") {
			Some(Value::Array(items)) => items.iter().map(coerce_item).collect(),
			_ => Vec::new(),
		};

		Self {
			title: coerce_text(record.field("title")),
			description: coerce_text(record.field("description")),
			steps,
		}
	}

	/// True when `needle` (already lowercased) occurs in the lowercased title or description.
	pub fn mentions(&self, needle: &str) -> bool {
		self.title.to_lowercase().contains(needle)
			|| self.description.to_lowercase().contains(needle)
	}
}

/// Scalar text coercion. Containers and nulls become the empty string.
pub fn coerce_text(value: Option<&Value>) -> String {
	match value {
		Some(Value::String(text)) => text.clone(),
		Some(Value::Number(number)) => number.to_string(),
		Some(Value::Bool(flag)) => flag.to_string(),
		_ => String::new(),
	}
}

fn coerce_item(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
