pub mod logistic;

mod error;

pub use error::{Error, Result};

use std::sync::Arc;

use strato_domain::features::FeatureVector;

/// Scores a feature vector ordered as `strato_domain::features::FEATURE_KEYS`.
pub trait ScoringModel
where
	Self: Send + Sync,
{
	/// Returns a probability-like score in `[0, 1]`.
	fn predict(&self, vector: &FeatureVector) -> color_eyre::Result<f64>;
}

/// Signed per-feature contributions aligned with the feature key order.
pub trait Attributor
where
	Self: Send + Sync,
{
	fn explain(&self, vector: &FeatureVector) -> color_eyre::Result<FeatureVector>;
}

#[derive(Clone)]
pub struct LoadedModel {
	pub model: Arc<dyn ScoringModel>,
	pub attributor: Option<Arc<dyn Attributor>>,
}

pub fn load_model(cfg: &strato_config::ModelConfig) -> Result<LoadedModel> {
	let model = Arc::new(logistic::LogisticModel::from_path(&cfg.path)?);
	let attributor: Option<Arc<dyn Attributor>> =
		if cfg.attribution { Some(model.clone()) } else { None };

	tracing::info!(
		path = %cfg.path.display(),
		attribution = cfg.attribution,
		"Loaded scoring model."
	);

	Ok(LoadedModel { model, attributor })
}
