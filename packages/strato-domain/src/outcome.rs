use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLabel {
	HighGrowth,
	ModerateFit,
	LowAlignment,
	Failed,
}
impl OutcomeLabel {
	pub fn as_str(self) -> &'static str {
		match self {
			OutcomeLabel::HighGrowth => "High Growth Potential",
			OutcomeLabel::ModerateFit => "Moderate Potential",
			OutcomeLabel::LowAlignment => "Low Strategic Fit",
			OutcomeLabel::Failed => "Prediction Failed",
		}
	}

	pub fn is_failed(self) -> bool {
		matches!(self, OutcomeLabel::Failed)
	}
}
impl fmt::Display for OutcomeLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
	pub label: OutcomeLabel,
	pub explanation: String,
}
impl PredictionResult {
	pub fn new(label: OutcomeLabel, explanation: impl Into<String>) -> Self {
		Self { label, explanation: explanation.into() }
	}

	pub fn failed(explanation: impl Into<String>) -> Self {
		Self::new(OutcomeLabel::Failed, explanation)
	}
}
