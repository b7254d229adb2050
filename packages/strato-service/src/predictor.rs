use std::{
	any::Any,
	panic::{self, AssertUnwindSafe},
	sync::Arc,
};

use strato_domain::{
	features::{FEATURE_KEYS, FeatureRecord, FeatureVector},
	outcome::{OutcomeLabel, PredictionResult},
};
use strato_providers::{Attributor, LoadedModel, ScoringModel};

use crate::error::PredictError;

pub const HIGH_GROWTH_ABOVE: f64 = 0.7;
pub const MODERATE_FIT_ABOVE: f64 = 0.4;

/// Primary scoring path. Holds an injected model and optional attributor; never falls back on
/// its own, so callers can see which path produced an answer.
#[derive(Clone, Default)]
pub struct Predictor {
	model: Option<Arc<dyn ScoringModel>>,
	attributor: Option<Arc<dyn Attributor>>,
}
impl Predictor {
	pub fn new(
		model: Option<Arc<dyn ScoringModel>>,
		attributor: Option<Arc<dyn Attributor>>,
	) -> Self {
		Self { model, attributor }
	}

	pub fn unavailable() -> Self {
		Self::default()
	}

	pub fn is_available(&self) -> bool {
		self.model.is_some()
	}

	pub fn predict(&self, features: &FeatureRecord) -> PredictionResult {
		let vector = features.vector();
		let score = match self.score(&vector) {
			Ok(score) => score,
			Err(err) => {
				tracing::warn!(error = %err, "Primary scoring failed.");

				return PredictionResult::failed(format!("Prediction failed. {err}"));
			},
		};
		let label = label_for_score(score);
		let summary = format!("Prediction: {label} (score {score:.2})");
		let explanation = match self.attribute(&vector) {
			Ok(contributions) => attribution_lines(&summary, &vector, &contributions),
			Err(err) => {
				tracing::warn!(error = %err, "Feature attribution failed.");

				format!("{summary}\n{err}")
			},
		};

		PredictionResult::new(label, explanation)
	}

	fn score(&self, vector: &FeatureVector) -> Result<f64, PredictError> {
		let model = self.model.as_ref().ok_or(PredictError::ModelUnavailable)?;
		let score = panic::catch_unwind(AssertUnwindSafe(|| model.predict(vector)))
			.map_err(|payload| PredictError::Scoring { message: panic_message(payload) })?
			.map_err(|err| PredictError::Scoring { message: err.to_string() })?;

		if !score.is_finite() || !(0.0..=1.0).contains(&score) {
			return Err(PredictError::Scoring {
				message: format!("model returned {score}, expected a value in [0, 1]"),
			});
		}

		Ok(score)
	}

	fn attribute(&self, vector: &FeatureVector) -> Result<FeatureVector, PredictError> {
		let attributor = self.attributor.as_ref().ok_or_else(|| PredictError::Attribution {
			message: "no attribution mechanism is configured.".to_string(),
		})?;
		let contributions = panic::catch_unwind(AssertUnwindSafe(|| attributor.explain(vector)))
			.map_err(|payload| PredictError::Attribution { message: panic_message(payload) })?
			.map_err(|err| PredictError::Attribution { message: err.to_string() })?;

		if contributions.iter().any(|value| !value.is_finite()) {
			return Err(PredictError::Attribution {
				message: "attributor returned a non-finite contribution.".to_string(),
			});
		}

		Ok(contributions)
	}
}
impl From<LoadedModel> for Predictor {
	fn from(loaded: LoadedModel) -> Self {
		Self::new(Some(loaded.model), loaded.attributor)
	}
}

/// Strict thresholds: 0.7 is `ModerateFit`, 0.4 is `LowAlignment`.
pub fn label_for_score(score: f64) -> OutcomeLabel {
	if score > HIGH_GROWTH_ABOVE {
		OutcomeLabel::HighGrowth
	} else if score > MODERATE_FIT_ABOVE {
		OutcomeLabel::ModerateFit
	} else {
		OutcomeLabel::LowAlignment
	}
}

fn attribution_lines(
	summary: &str,
	vector: &FeatureVector,
	contributions: &FeatureVector,
) -> String {
	let mut lines = vec![summary.to_string()];

	for ((key, value), contribution) in FEATURE_KEYS.iter().zip(vector).zip(contributions) {
		lines.push(format!("{key} = {value} (contribution {contribution:+.4})"));
	}

	lines.join("\n")
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		return format!("model panicked: {message}");
	}
	if let Some(message) = payload.downcast_ref::<String>() {
		return format!("model panicked: {message}");
	}

	"model panicked.".to_string()
}
