use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
	document::{RecordLike, StrategyDocument},
	frame::Frame,
	market,
};

/// Order of the numeric vector handed to scoring models. Attribution output follows it too.
pub const FEATURE_KEYS: [&str; 3] = ["query_length", "keyword_hits", "avg_steps"];

pub type FeatureVector = [f64; 3];

/// Fixed-schema summary of a query against a document set.
///
/// Deserializing a partial mapping fills absent keys with zero values, so hand-built feature
/// maps score the same way as extractor output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureRecord {
	pub query_length: u64,
	pub keyword_hits: u64,
	pub avg_steps: f64,
	pub domain_encoded: i64,
	pub raw_query: String,
	pub raw_domain: String,
}
impl FeatureRecord {
	pub fn vector(&self) -> FeatureVector {
		[self.query_length as f64, self.keyword_hits as f64, self.avg_steps]
	}
}

/// Every shape a caller may hand the extractor as its document set.
#[derive(Clone, Copy, Debug, Default)]
pub enum DocumentSource<'a> {
	#[default]
	Absent,
	Strategies(&'a [StrategyDocument]),
	Records(&'a [Value]),
	Frame(&'a Frame),
	/// Untyped payload: arrays are record lists, split-orientation objects are frames, and
	/// anything else is treated as an empty collection.
	Json(&'a Value),
}
impl DocumentSource<'_> {
	pub fn documents(&self) -> Vec<StrategyDocument> {
		match self {
			DocumentSource::Absent => Vec::new(),
			DocumentSource::Strategies(docs) => docs.to_vec(),
			DocumentSource::Records(records) => from_records(records),
			DocumentSource::Frame(frame) => from_frame(frame),
			DocumentSource::Json(value) => match value {
				Value::Array(records) => from_records(records),
				Value::Object(_) => Frame::from_value(value)
					.map(|frame| from_frame(&frame))
					.unwrap_or_default(),
				_ => Vec::new(),
			},
		}
	}
}

fn from_records(records: &[Value]) -> Vec<StrategyDocument> {
	records
		.iter()
		.filter(|record| record.is_object())
		.map(StrategyDocument::from_record)
		.collect()
}

fn from_frame(frame: &Frame) -> Vec<StrategyDocument> {
	frame.rows().map(|row| StrategyDocument::from_record(&row)).collect()
}

/// Turns a raw query, a domain name, and a document set into a [`FeatureRecord`].
///
/// Total over its inputs: any query value and any document shape produce a fully populated
/// record. An empty query is a substring of every title, so it counts every document as a
/// keyword hit.
pub fn transform(query: &Value, domain: &str, documents: DocumentSource<'_>) -> FeatureRecord {
	transform_documents(query, domain, &documents.documents())
}

/// [`transform`] over documents that are already normalized.
pub fn transform_documents(
	query: &Value,
	domain: &str,
	docs: &[StrategyDocument],
) -> FeatureRecord {
	let query = coerce_query(query);
	let needle = query.to_lowercase();
	let keyword_hits = docs.iter().filter(|doc| doc.mentions(&needle)).count() as u64;
	let avg_steps = if docs.is_empty() {
		0.0
	} else {
		docs.iter().map(|doc| doc.steps.len() as f64).sum::<f64>() / docs.len() as f64
	};

	FeatureRecord {
		query_length: query.split_whitespace().count() as u64,
		keyword_hits,
		avg_steps,
		domain_encoded: market::encode_domain(domain),
		raw_query: query,
		raw_domain: domain.to_string(),
	}
}

pub fn transform_text(query: &str, domain: &str, documents: DocumentSource<'_>) -> FeatureRecord {
	transform(&Value::from(query), domain, documents)
}

/// Query text as the extractor sees it: nulls are empty, other non-strings use their JSON text.
pub fn coerce_query(query: &Value) -> String {
	let text = match query {
		Value::Null => return String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	};

	text.trim().to_string()
}
