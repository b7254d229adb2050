pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read strategy corpus at {path:?}.")]
	ReadCorpus { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to read upload at {path:?}.")]
	ReadUpload { path: std::path::PathBuf, source: std::io::Error },
	#[error("{message}")]
	InvalidUpload { message: String },
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error(transparent)]
	Domain(#[from] strato_domain::Error),
}

/// Failure modes inside the Predictor. Converted to a `Failed` or degraded result at the
/// Predictor boundary and never returned to callers.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
	#[error("Scoring model unavailable: no model is loaded.")]
	ModelUnavailable,
	#[error("Scoring failed: {message}")]
	Scoring { message: String },
	#[error("Feature attribution unavailable: {message}")]
	Attribution { message: String },
}
