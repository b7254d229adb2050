pub mod advisor;
pub mod fallback;
pub mod narrative;
pub mod predictor;
pub mod retriever;
pub mod upload;

mod error;

pub use advisor::{AdviseRequest, Advice, Advisor, ScoringPath};
pub use error::{Error, PredictError, Result};
pub use fallback::fallback_predict;
pub use predictor::Predictor;
pub use retriever::Retriever;
pub use upload::Upload;
