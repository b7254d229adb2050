mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
};

use color_eyre::eyre;
use serde_json::{Value, json};

use strato_domain::features::FeatureVector;
use strato_providers::{Attributor, ScoringModel};

/// Always returns the same score.
pub struct FixedScoreModel(pub f64);
impl ScoringModel for FixedScoreModel {
	fn predict(&self, _vector: &FeatureVector) -> color_eyre::Result<f64> {
		Ok(self.0)
	}
}

/// Always errors with the given message.
pub struct FailingModel(pub &'static str);
impl ScoringModel for FailingModel {
	fn predict(&self, _vector: &FeatureVector) -> color_eyre::Result<f64> {
		Err(eyre::eyre!(self.0))
	}
}

pub struct PanickingModel;
impl ScoringModel for PanickingModel {
	fn predict(&self, _vector: &FeatureVector) -> color_eyre::Result<f64> {
		panic!("scoring runtime crashed");
	}
}

pub struct FixedAttributor(pub FeatureVector);
impl Attributor for FixedAttributor {
	fn explain(&self, _vector: &FeatureVector) -> color_eyre::Result<FeatureVector> {
		Ok(self.0)
	}
}

pub struct FailingAttributor(pub &'static str);
impl Attributor for FailingAttributor {
	fn explain(&self, _vector: &FeatureVector) -> color_eyre::Result<FeatureVector> {
		Err(eyre::eyre!(self.0))
	}
}

/// Record-shaped documents with the inconsistencies uploads tend to carry.
pub fn messy_records() -> Vec<Value> {
	vec![
		json!({
			"title": "Churn Reduction Playbook",
			"description": "Proactive engagement to retain at-risk customers.",
			"steps": ["Detect declining engagement", "Send offers", "Launch exit surveys"]
		}),
		json!({ "title": null, "description": 12, "steps": "not a list" }),
		json!({ "description": "Churn analytics dashboard" }),
		json!("stray string"),
	]
}

/// A file under the temp dir, removed on drop unless `cleanup` already ran.
pub struct TempFile {
	path: PathBuf,
	cleaned: bool,
}
impl TempFile {
	pub fn new(prefix: &str, extension: &str, payload: &str) -> Result<Self> {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let path = env::temp_dir().join(format!("{prefix}_{pid}_{ordinal}.{extension}"));

		fs::write(&path, payload)
			.map_err(|err| Error::Message(format!("Failed to write {}: {err}.", path.display())))?;

		Ok(Self { path, cleaned: false })
	}

	pub fn json(prefix: &str, value: &Value) -> Result<Self> {
		Self::new(prefix, "json", &serde_json::to_string_pretty(value)?)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn cleanup(mut self) -> Result<()> {
		self.cleanup_inner()
	}

	fn cleanup_inner(&mut self) -> Result<()> {
		if self.cleaned {
			return Ok(());
		}

		fs::remove_file(&self.path)?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TempFile {
	fn drop(&mut self) {
		if let Err(err) = self.cleanup_inner() {
			eprintln!("Temp file cleanup failed: {err}.");
		}
	}
}
