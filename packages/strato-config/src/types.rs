use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	/// Optional. Without a model section the advisor scores with the fallback policy only.
	pub model: Option<ModelConfig>,
	#[serde(default)]
	pub retrieval: Retrieval,
	#[serde(default)]
	pub ingest: Ingest,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ModelConfig {
	/// JSON weights file for the logistic scoring model.
	pub path: PathBuf,
	#[serde(default = "default_true")]
	pub attribution: bool,
}

#[derive(Debug, Deserialize)]
pub struct Retrieval {
	pub corpus_path: Option<PathBuf>,
	#[serde(default = "default_true")]
	pub filter_by_query: bool,
}
impl Default for Retrieval {
	fn default() -> Self {
		Self { corpus_path: None, filter_by_query: true }
	}
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Ingest {
	#[serde(default = "default_true")]
	pub drop_incomplete_rows: bool,
	#[serde(default = "default_true")]
	pub normalize_columns: bool,
}
impl Default for Ingest {
	fn default() -> Self {
		Self { drop_incomplete_rows: true, normalize_columns: true }
	}
}

fn default_true() -> bool {
	true
}
