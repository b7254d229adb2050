use std::{fs, path::Path};

use color_eyre::eyre;
use serde::{Deserialize, Serialize};

use strato_domain::features::FeatureVector;

use crate::{Attributor, Error, Result, ScoringModel};

/// `sigmoid(bias + weights · x)`.
///
/// Attribution is exact in log-odds space: each feature contributes
/// `weight * (value - baseline)`, and the contributions sum to the logit minus the logit of
/// the baseline vector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
	pub weights: FeatureVector,
	pub bias: f64,
	#[serde(default)]
	pub baseline: FeatureVector,
}
impl LogisticModel {
	pub fn from_path(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadModel { path: path.to_path_buf(), source: err })?;

		Self::from_json(&raw)
	}

	pub fn from_json(raw: &str) -> Result<Self> {
		let model: Self = serde_json::from_str(raw)?;

		model.validate()?;

		Ok(model)
	}

	pub fn validate(&self) -> Result<()> {
		let all_finite = self
			.weights
			.iter()
			.chain(self.baseline.iter())
			.chain(std::iter::once(&self.bias))
			.all(|value| value.is_finite());

		if !all_finite {
			return Err(Error::InvalidModel {
				message: "Model weights, bias, and baseline must be finite numbers.".to_string(),
			});
		}

		Ok(())
	}

	pub fn logit(&self, vector: &FeatureVector) -> f64 {
		self.bias + self.weights.iter().zip(vector.iter()).map(|(w, x)| w * x).sum::<f64>()
	}
}
impl ScoringModel for LogisticModel {
	fn predict(&self, vector: &FeatureVector) -> color_eyre::Result<f64> {
		if vector.iter().any(|value| !value.is_finite()) {
			return Err(eyre::eyre!("Feature vector contains a non-finite value."));
		}

		Ok(sigmoid(self.logit(vector)))
	}
}
impl Attributor for LogisticModel {
	fn explain(&self, vector: &FeatureVector) -> color_eyre::Result<FeatureVector> {
		if vector.iter().any(|value| !value.is_finite()) {
			return Err(eyre::eyre!("Feature vector contains a non-finite value."));
		}

		let mut contributions = [0.0; 3];

		for (index, contribution) in contributions.iter_mut().enumerate() {
			*contribution = self.weights[index] * (vector[index] - self.baseline[index]);
		}

		Ok(contributions)
	}
}

fn sigmoid(x: f64) -> f64 {
	1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn model() -> LogisticModel {
		LogisticModel { weights: [0.5, 1.0, 0.25], bias: -3.0, baseline: [4.0, 1.0, 2.0] }
	}

	#[test]
	fn zero_logit_scores_one_half() {
		let model = LogisticModel { weights: [0.0; 3], bias: 0.0, baseline: [0.0; 3] };
		let score = model.predict(&[5.0, 1.0, 2.0]).expect("predict failed");

		assert!((score - 0.5).abs() < 1e-12);
	}

	#[test]
	fn contributions_sum_to_logit_delta() {
		let model = model();
		let vector = [8.0, 2.0, 3.0];
		let contributions = model.explain(&vector).expect("explain failed");
		let delta = model.logit(&vector) - model.logit(&model.baseline);

		assert!((contributions.iter().sum::<f64>() - delta).abs() < 1e-12);
		assert_eq!(contributions, [2.0, 1.0, 0.25]);
	}

	#[test]
	fn rejects_non_finite_vectors() {
		assert!(model().predict(&[f64::NAN, 0.0, 0.0]).is_err());
		assert!(model().explain(&[0.0, f64::INFINITY, 0.0]).is_err());
	}

	#[test]
	fn baseline_defaults_to_zero() {
		let model = LogisticModel::from_json(r#"{ "weights": [0.1, 0.2, 0.3], "bias": -1.0 }"#)
			.expect("parse failed");

		assert_eq!(model.baseline, [0.0; 3]);
	}
}
