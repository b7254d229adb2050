pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read model file at {path:?}.")]
	ReadModel { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error("{message}")]
	InvalidModel { message: String },
}
