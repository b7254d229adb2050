use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use strato_service::{
	Advice, AdviseRequest, Advisor, Predictor, Retriever, ScoringPath, Upload,
};

#[derive(Debug, Parser)]
#[command(
	version = strato_cli::VERSION,
	rename_all = "kebab",
	styles = strato_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Business domain, e.g. EdTech, FinTech, or SaaS.
	#[arg(long, short = 'd', default_value = "EdTech")]
	pub domain: String,
	/// Free-text strategy query.
	#[arg(long, short = 'q', default_value = "")]
	pub query: String,
	/// CSV table, JSON records, a split-orientation JSON frame, or a plain-text document.
	#[arg(long, short = 'u', value_name = "FILE")]
	pub upload: Option<PathBuf>,
	/// Print the full advice as JSON instead of the narrative.
	#[arg(long)]
	pub json: bool,
}

pub fn run(args: Args) -> color_eyre::Result<String> {
	let config = strato_config::load(&args.config)?;
	let filter = EnvFilter::new(config.service.log_level.clone());

	// A second run in the same process keeps the first subscriber.
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init();

	let predictor = match config.model.as_ref() {
		Some(model_cfg) => match strato_providers::load_model(model_cfg) {
			Ok(loaded) => Predictor::from(loaded),
			Err(err) => {
				tracing::warn!(error = %err, "Failed to load scoring model.");

				Predictor::unavailable()
			},
		},
		None => Predictor::unavailable(),
	};
	let retriever = Retriever::from_config(&config.retrieval)?;
	let mut request = AdviseRequest::new(args.domain, args.query);

	if let Some(path) = args.upload.as_deref() {
		request = request.with_upload(Upload::load(path, &config.ingest)?);
	}

	let advice = Advisor::new(predictor, retriever).advise(&request);

	if args.json {
		return Ok(serde_json::to_string_pretty(&advice)?);
	}

	Ok(render(&advice))
}

pub fn render(advice: &Advice) -> String {
	let path = match advice.path {
		ScoringPath::Primary => "primary model",
		ScoringPath::Fallback => "fallback scorer",
	};

	format!(
		"## Suggested Strategy\n\n{}\n\n## Prediction Insights\n\n\
		 **Prediction:** {} (via {path})\n\n{}",
		advice.narrative, advice.result.label, advice.result.explanation
	)
}
