use std::{fs, path::Path};

use serde_json::Value;

use strato_domain::{features::DocumentSource, frame::Frame};

use crate::{Error, Result};

/// A user-supplied document set, already cleaned up by the ingest rules.
#[derive(Clone, Debug)]
pub enum Upload {
	Records(Vec<Value>),
	Frame(Frame),
}
impl Upload {
	pub fn source(&self) -> DocumentSource<'_> {
		match self {
			Upload::Records(records) => DocumentSource::Records(records),
			Upload::Frame(frame) => DocumentSource::Frame(frame),
		}
	}

	/// `.csv` files are tables with a header row; `.json` files hold a record array or a
	/// split-orientation frame; any other file is read as plain text, one document per
	/// paragraph.
	pub fn load(path: &Path, ingest: &strato_config::Ingest) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadUpload { path: path.to_path_buf(), source: err })?;
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(|ext| ext.to_ascii_lowercase())
			.unwrap_or_default();

		match extension.as_str() {
			"csv" => Self::from_csv(&raw, ingest),
			"json" => Self::from_json(&raw, ingest),
			_ => Ok(Self::from_text(&raw, ingest)),
		}
	}

	pub fn from_csv(raw: &str, ingest: &strato_config::Ingest) -> Result<Self> {
		Ok(Upload::Frame(Frame::from_csv(raw)?.normalized(ingest)))
	}

	pub fn from_json(raw: &str, ingest: &strato_config::Ingest) -> Result<Self> {
		match serde_json::from_str::<Value>(raw)? {
			Value::Array(records) => Ok(Upload::Records(records)),
			value @ Value::Object(_) =>
				Ok(Upload::Frame(Frame::from_value(&value)?.normalized(ingest))),
			_ => Err(Error::InvalidUpload {
				message: "Upload must be a JSON array of records or a split-orientation frame."
					.to_string(),
			}),
		}
	}

	pub fn from_text(raw: &str, ingest: &strato_config::Ingest) -> Self {
		Upload::Frame(Frame::from_text(raw).normalized(ingest))
	}
}
