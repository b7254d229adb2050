pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	InvalidFrame { message: String },
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}
