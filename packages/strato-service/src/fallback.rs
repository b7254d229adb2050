use strato_domain::{
	features::FeatureRecord,
	outcome::{OutcomeLabel, PredictionResult},
};

/// Marks explanations produced without the primary model.
pub const FALLBACK_TAG: &str = "[fallback]";
/// Raw-score breakpoints. These live on a different scale from the primary model's
/// probability thresholds and must not be unified with them.
pub const FALLBACK_HIGH_GROWTH_ABOVE: f64 = 10.0;
pub const FALLBACK_MODERATE_FIT_ABOVE: f64 = 5.0;

pub fn fallback_score(features: &FeatureRecord) -> f64 {
	features.query_length as f64 + 2.0 * features.keyword_hits as f64 + features.avg_steps
}

pub fn fallback_label(score: f64) -> OutcomeLabel {
	if score > FALLBACK_HIGH_GROWTH_ABOVE {
		OutcomeLabel::HighGrowth
	} else if score > FALLBACK_MODERATE_FIT_ABOVE {
		OutcomeLabel::ModerateFit
	} else {
		OutcomeLabel::LowAlignment
	}
}

pub fn fallback_predict(features: &FeatureRecord) -> PredictionResult {
	let score = fallback_score(features);
	let label = fallback_label(score);
	let explanation = format!(
		"{FALLBACK_TAG} Heuristic scoring without the primary model.\n\
		 query_length = {}\n\
		 keyword_hits = {}\n\
		 avg_steps = {:.2}\n\
		 score = query_length + 2 * keyword_hits + avg_steps = {score:.2}\n\
		 label = {label}",
		features.query_length, features.keyword_hits, features.avg_steps,
	);

	PredictionResult::new(label, explanation)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn features(query_length: u64, keyword_hits: u64, avg_steps: f64) -> FeatureRecord {
		FeatureRecord { query_length, keyword_hits, avg_steps, ..Default::default() }
	}

	#[test]
	fn weights_keyword_hits_twice() {
		assert_eq!(fallback_score(&features(8, 1, 2.0)), 12.0);
		assert_eq!(fallback_score(&features(0, 3, 0.5)), 6.5);
	}

	#[test]
	fn breakpoints_resolve_to_lower_bracket() {
		assert_eq!(fallback_label(10.0), OutcomeLabel::ModerateFit);
		assert_eq!(fallback_label(10.01), OutcomeLabel::HighGrowth);
		assert_eq!(fallback_label(5.0), OutcomeLabel::LowAlignment);
		assert_eq!(fallback_label(5.5), OutcomeLabel::ModerateFit);
		assert_eq!(fallback_label(0.0), OutcomeLabel::LowAlignment);
	}

	#[test]
	fn explanation_lists_raw_features() {
		let result = fallback_predict(&features(8, 1, 2.0));
		let lines: Vec<&str> = result.explanation.lines().collect();

		assert_eq!(result.label, OutcomeLabel::HighGrowth);
		assert!(lines[0].starts_with(FALLBACK_TAG));
		assert_eq!(lines[1], "query_length = 8");
		assert_eq!(lines[2], "keyword_hits = 1");
		assert_eq!(lines[3], "avg_steps = 2.00");
		assert!(lines[4].ends_with("= 12.00"));
		assert_eq!(lines[5], "label = High Growth Potential");
	}
}
