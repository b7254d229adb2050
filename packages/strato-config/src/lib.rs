mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Ingest, ModelConfig, Retrieval, Service};

use std::{fs, path::Path};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw, path)
}

pub fn parse(raw: &str, path: &Path) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	let log_level = cfg.service.log_level.trim();

	if log_level.is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	// Directive strings such as "strato_service=debug,info" are passed through to EnvFilter.
	if !log_level.contains('=')
		&& !LOG_LEVELS.contains(&log_level.to_ascii_lowercase().as_str())
	{
		return Err(Error::Validation {
			message: "service.log_level must be one of trace, debug, info, warn, or error."
				.to_string(),
		});
	}

	if let Some(model) = cfg.model.as_ref()
		&& model.path.as_os_str().is_empty()
	{
		return Err(Error::Validation { message: "model.path must be non-empty.".to_string() });
	}

	if let Some(corpus_path) = cfg.retrieval.corpus_path.as_ref()
		&& corpus_path.extension().and_then(|ext| ext.to_str()) != Some("json")
	{
		return Err(Error::Validation {
			message: "retrieval.corpus_path must point to a .json file.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg
		.retrieval
		.corpus_path
		.as_deref()
		.map(|path| path.as_os_str().to_string_lossy().trim().is_empty())
		.unwrap_or(false)
	{
		cfg.retrieval.corpus_path = None;
	}

	cfg.service.log_level = cfg.service.log_level.trim().to_string();
}
