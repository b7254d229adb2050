use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result, document::RecordLike};

const TITLE_MAX_CHARS: usize = 60;

/// Column-major header plus row-major values, the split orientation of a tabular upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	pub columns: Vec<String>,
	#[serde(rename = "data")]
	pub rows: Vec<Vec<Value>>,
}

pub struct FrameRow<'a> {
	columns: &'a [String],
	values: &'a [Value],
}
impl RecordLike for FrameRow<'_> {
	fn field(&self, key: &str) -> Option<&Value> {
		let index = self.columns.iter().position(|column| column == key)?;

		self.values.get(index)
	}
}

impl Frame {
	pub fn from_value(value: &Value) -> Result<Self> {
		let Some(object) = value.as_object() else {
			return Err(Error::InvalidFrame {
				message: "Frame payload must be a JSON object.".to_string(),
			});
		};

		if !object.contains_key("columns") || !object.contains_key("data") {
			return Err(Error::InvalidFrame {
				message: "Frame payload must carry both `columns` and `data` keys.".to_string(),
			});
		}

		Ok(Frame::deserialize(value)?)
	}

	/// Header row becomes the columns. Empty cells read as nulls so ingest clean-up can drop
	/// incomplete rows.
	pub fn from_csv(raw: &str) -> Result<Self> {
		let mut reader =
			csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(raw.as_bytes());
		let columns = reader.headers()?.iter().map(str::to_string).collect();
		let mut rows = Vec::new();

		for record in reader.records() {
			let record = record?;

			rows.push(
				record
					.iter()
					.map(|cell| {
						if cell.trim().is_empty() { Value::Null } else { Value::from(cell) }
					})
					.collect(),
			);
		}

		Ok(Self { columns, rows })
	}

	/// Single-column `content` frame, one row per non-empty paragraph, enriched with derived
	/// `title` and `description` columns.
	pub fn from_text(text: &str) -> Self {
		let rows = paragraphs(text)
			.into_iter()
			.map(|paragraph| {
				let title = derive_title(&paragraph);

				vec![
					Value::String(paragraph.clone()),
					Value::String(title),
					Value::String(paragraph),
				]
			})
			.collect();

		Self {
			columns: vec!["content".to_string(), "title".to_string(), "description".to_string()],
			rows,
		}
	}

	pub fn rows(&self) -> impl Iterator<Item = FrameRow<'_>> {
		self.rows.iter().map(|values| FrameRow { columns: &self.columns, values })
	}

	/// Upload clean-up: drop rows with nulls or missing cells, then normalize column names.
	pub fn normalized(mut self, opts: &strato_config::Ingest) -> Self {
		if opts.drop_incomplete_rows {
			let width = self.columns.len();

			self.rows.retain(|row| row.len() >= width && row.iter().all(|value| !value.is_null()));
		}
		if opts.normalize_columns {
			self.columns = self.columns.iter().map(|column| normalize_column(column)).collect();
		}

		self
	}
}

fn normalize_column(column: &str) -> String {
	column.trim().to_lowercase().replace(' ', "_")
}

fn paragraphs(text: &str) -> Vec<String> {
	let mut out = Vec::new();
	let mut current: Vec<&str> = Vec::new();

	for line in text.lines() {
		if line.trim().is_empty() {
			if !current.is_empty() {
				out.push(current.join("\n"));
				current.clear();
			}

			continue;
		}

		current.push(line.trim());
	}
	if !current.is_empty() {
		out.push(current.join("\n"));
	}

	out
}

fn derive_title(paragraph: &str) -> String {
	let first_line = paragraph.lines().next().unwrap_or_default().trim();

	first_line.chars().take(TITLE_MAX_CHARS).collect()
}
