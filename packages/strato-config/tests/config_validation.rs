use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use strato_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml_with(edit: impl FnOnce(&mut toml::Table)) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TEMPLATE_TOML).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");

	edit(root);

	toml::to_string(&value).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("strato_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> strato_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = strato_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

#[test]
fn loads_template_config() {
	let cfg = load_payload(SAMPLE_CONFIG_TEMPLATE_TOML.to_string()).expect("Config must load.");
	let model = cfg.model.expect("Template config must include [model].");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(model.path, PathBuf::from("model.json"));
	assert!(model.attribution);
	assert!(cfg.retrieval.filter_by_query);
	assert!(cfg.ingest.drop_incomplete_rows);
}

#[test]
fn optional_sections_default() {
	let payload = sample_toml_with(|root| {
		root.remove("model");
		root.remove("retrieval");
		root.remove("ingest");
	});
	let cfg = load_payload(payload).expect("Config must load without optional sections.");

	assert!(cfg.model.is_none());
	assert!(cfg.retrieval.corpus_path.is_none());
	assert!(cfg.retrieval.filter_by_query);
	assert!(cfg.ingest.normalize_columns);
}

#[test]
fn log_level_must_be_known() {
	let payload = sample_toml_with(|root| {
		let service = root
			.get_mut("service")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [service].");

		service.insert("log_level".to_string(), Value::String("loud".to_string()));
	});
	let err = load_payload(payload).expect_err("Expected log_level validation error.");
	let message = err.to_string();

	assert!(
		message.contains("service.log_level must be one of"),
		"Unexpected error message: {message}"
	);
}

#[test]
fn log_level_accepts_filter_directives() {
	let payload = sample_toml_with(|root| {
		let service = root
			.get_mut("service")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [service].");

		service.insert(
			"log_level".to_string(),
			Value::String("strato_service=debug,info".to_string()),
		);
	});

	assert!(load_payload(payload).is_ok());
}

#[test]
fn model_path_must_be_non_empty() {
	let payload = sample_toml_with(|root| {
		let model = root
			.get_mut("model")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [model].");

		model.insert("path".to_string(), Value::String(String::new()));
	});
	let err = load_payload(payload).expect_err("Expected model.path validation error.");

	assert!(matches!(err, Error::Validation { .. }));
	assert!(err.to_string().contains("model.path must be non-empty."));
}

#[test]
fn blank_corpus_path_is_normalized_away() {
	let payload = sample_toml_with(|root| {
		let retrieval = root
			.get_mut("retrieval")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [retrieval].");

		retrieval.insert("corpus_path".to_string(), Value::String("   ".to_string()));
	});
	let cfg = load_payload(payload).expect("Blank corpus path must normalize to None.");

	assert!(cfg.retrieval.corpus_path.is_none());
}

#[test]
fn corpus_path_must_be_json() {
	let payload = sample_toml_with(|root| {
		let retrieval = root
			.get_mut("retrieval")
			.and_then(Value::as_table_mut)
			.expect("Template config must include [retrieval].");

		retrieval.insert("corpus_path".to_string(), Value::String("corpus.yaml".to_string()));
	});
	let err = load_payload(payload).expect_err("Expected corpus_path validation error.");

	assert!(err.to_string().contains("retrieval.corpus_path must point to a .json file."));
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("strato_config_test_missing.toml");
	let err = strato_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = load_payload("[service\nlog_level = ".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }));
}
