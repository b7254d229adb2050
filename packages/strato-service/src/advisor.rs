use serde::Serialize;
use serde_json::Value;

use strato_domain::{
	document::StrategyDocument,
	features::{FeatureRecord, coerce_query, transform_documents},
	outcome::PredictionResult,
};

use crate::{
	error::PredictError, fallback, narrative, predictor::Predictor, retriever::Retriever,
	upload::Upload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPath {
	Primary,
	Fallback,
}

#[derive(Clone, Debug)]
pub struct AdviseRequest {
	pub domain: String,
	pub query: Value,
	pub upload: Option<Upload>,
}
impl AdviseRequest {
	pub fn new(domain: impl Into<String>, query: impl Into<String>) -> Self {
		Self { domain: domain.into(), query: Value::String(query.into()), upload: None }
	}

	pub fn with_upload(mut self, upload: Upload) -> Self {
		self.upload = Some(upload);

		self
	}
}

#[derive(Clone, Debug, Serialize)]
pub struct Advice {
	pub features: FeatureRecord,
	pub result: PredictionResult,
	pub path: ScoringPath,
	/// Why the primary path was skipped or failed, when the fallback answered.
	pub primary_failure: Option<String>,
	pub documents: Vec<StrategyDocument>,
	pub narrative: String,
}

/// Runs one request end to end. Owns the fallback policy: the primary model is tried first and
/// the fallback scorer answers whenever it is missing or reports `Failed`.
pub struct Advisor {
	predictor: Predictor,
	retriever: Retriever,
}
impl Advisor {
	pub fn new(predictor: Predictor, retriever: Retriever) -> Self {
		Self { predictor, retriever }
	}

	pub fn advise(&self, request: &AdviseRequest) -> Advice {
		let documents = match request.upload.as_ref() {
			Some(upload) => upload.source().documents(),
			None => self
				.retriever
				.get_relevant_docs(&request.domain, &coerce_query(&request.query)),
		};
		let features = transform_documents(&request.query, &request.domain, &documents);

		tracing::debug!(?features, "Extracted features.");

		let (result, path, primary_failure) = self.score(&features);

		tracing::info!(path = ?path, label = %result.label, "Scored request.");

		let narrative =
			narrative::assemble(&request.domain, &features.raw_query, &documents, result.label);

		Advice { features, result, path, primary_failure, documents, narrative }
	}

	pub fn score(
		&self,
		features: &FeatureRecord,
	) -> (PredictionResult, ScoringPath, Option<String>) {
		if !self.predictor.is_available() {
			tracing::warn!("Primary model unavailable. Using fallback scorer.");

			return (
				fallback::fallback_predict(features),
				ScoringPath::Fallback,
				Some(PredictError::ModelUnavailable.to_string()),
			);
		}

		let primary = self.predictor.predict(features);

		if primary.label.is_failed() {
			tracing::warn!(
				reason = %primary.explanation,
				"Primary prediction failed. Using fallback scorer."
			);

			return (
				fallback::fallback_predict(features),
				ScoringPath::Fallback,
				Some(primary.explanation),
			);
		}

		(primary, ScoringPath::Primary, None)
	}
}
