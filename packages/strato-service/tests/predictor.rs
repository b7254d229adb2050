use std::sync::Arc;

use strato_domain::{features::FeatureRecord, outcome::OutcomeLabel};
use strato_providers::{Attributor, ScoringModel};
use strato_service::{Predictor, fallback::FALLBACK_TAG, fallback_predict};
use strato_testkit::{
	FailingAttributor, FailingModel, FixedAttributor, FixedScoreModel, PanickingModel,
};

fn features() -> FeatureRecord {
	FeatureRecord { query_length: 8, keyword_hits: 1, avg_steps: 2.0, ..Default::default() }
}

fn predictor_with(score: f64) -> Predictor {
	let model: Arc<dyn ScoringModel> = Arc::new(FixedScoreModel(score));
	let attributor: Arc<dyn Attributor> = Arc::new(FixedAttributor([0.3, -0.1, 0.05]));

	Predictor::new(Some(model), Some(attributor))
}

#[test]
fn maps_scores_to_labels() {
	for (score, label) in [
		(0.75, OutcomeLabel::HighGrowth),
		(0.5, OutcomeLabel::ModerateFit),
		(0.2, OutcomeLabel::LowAlignment),
		(0.7, OutcomeLabel::ModerateFit),
		(0.4, OutcomeLabel::LowAlignment),
	] {
		assert_eq!(predictor_with(score).predict(&features()).label, label, "score {score}");
	}
}

#[test]
fn explanation_has_summary_and_one_line_per_feature() {
	let result = predictor_with(0.75).predict(&features());
	let lines: Vec<&str> = result.explanation.lines().collect();

	assert_eq!(lines.len(), 4);
	assert_eq!(lines[0], "Prediction: High Growth Potential (score 0.75)");
	assert_eq!(lines[1], "query_length = 8 (contribution +0.3000)");
	assert_eq!(lines[2], "keyword_hits = 1 (contribution -0.1000)");
	assert_eq!(lines[3], "avg_steps = 2 (contribution +0.0500)");
	assert!(!result.explanation.contains(FALLBACK_TAG));
}

#[test]
fn missing_model_reports_failed() {
	let result = Predictor::unavailable().predict(&features());

	assert_eq!(result.label, OutcomeLabel::Failed);
	assert!(result.explanation.contains("unavailable"), "{}", result.explanation);
}

#[test]
fn scoring_errors_report_failed_with_message() {
	let model: Arc<dyn ScoringModel> = Arc::new(FailingModel("runtime missing"));
	let result = Predictor::new(Some(model), None).predict(&features());

	assert_eq!(result.label, OutcomeLabel::Failed);
	assert!(result.explanation.contains("runtime missing"), "{}", result.explanation);
}

#[test]
fn scoring_panics_are_contained() {
	let model: Arc<dyn ScoringModel> = Arc::new(PanickingModel);
	let result = Predictor::new(Some(model), None).predict(&features());

	assert_eq!(result.label, OutcomeLabel::Failed);
	assert!(result.explanation.contains("scoring runtime crashed"), "{}", result.explanation);
}

#[test]
fn out_of_range_scores_report_failed() {
	for score in [1.5, -0.1, f64::NAN] {
		assert_eq!(predictor_with(score).predict(&features()).label, OutcomeLabel::Failed);
	}
}

#[test]
fn attribution_failure_keeps_label_and_score() {
	let model: Arc<dyn ScoringModel> = Arc::new(FixedScoreModel(0.5));
	let attributor: Arc<dyn Attributor> = Arc::new(FailingAttributor("explainer crashed"));
	let result = Predictor::new(Some(model), Some(attributor)).predict(&features());
	let lines: Vec<&str> = result.explanation.lines().collect();

	assert_eq!(result.label, OutcomeLabel::ModerateFit);
	assert_eq!(lines[0], "Prediction: Moderate Potential (score 0.50)");
	assert_eq!(lines[1], "Feature attribution unavailable: explainer crashed");
}

#[test]
fn missing_attributor_notes_unavailable_detail() {
	let model: Arc<dyn ScoringModel> = Arc::new(FixedScoreModel(0.9));
	let result = Predictor::new(Some(model), None).predict(&features());

	assert_eq!(result.label, OutcomeLabel::HighGrowth);
	assert!(result.explanation.contains("Feature attribution unavailable"));
}

#[test]
fn missing_keys_score_as_zero() {
	let sparse: FeatureRecord =
		serde_json::from_value(serde_json::json!({ "query_length": 3 })).expect("parse");

	assert_eq!(sparse.vector(), [3.0, 0.0, 0.0]);
	assert_eq!(fallback_predict(&sparse).label, OutcomeLabel::LowAlignment);
}

#[test]
fn fallback_matches_reference_example() {
	let result = fallback_predict(&features());

	assert_eq!(result.label, OutcomeLabel::HighGrowth);
	assert!(result.explanation.starts_with(FALLBACK_TAG));
	assert!(result.explanation.contains("= 12.00"));
}

#[test]
fn fallback_breakpoints_resolve_downward() {
	let at_ten =
		FeatureRecord { query_length: 6, keyword_hits: 1, avg_steps: 2.0, ..Default::default() };
	let at_five =
		FeatureRecord { query_length: 1, keyword_hits: 2, avg_steps: 0.0, ..Default::default() };

	assert_eq!(fallback_predict(&at_ten).label, OutcomeLabel::ModerateFit);
	assert_eq!(fallback_predict(&at_five).label, OutcomeLabel::LowAlignment);
}
