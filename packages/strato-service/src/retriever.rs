use std::{collections::BTreeMap, fs, path::Path};

use serde_json::Value;

use strato_domain::{document::StrategyDocument, market::KnownDomain};

use crate::{Error, Result};

pub const NOT_FOUND_TITLE: &str = "N/A";

/// Canned strategy lookup keyed by domain name, case-insensitively.
#[derive(Clone, Debug)]
pub struct Retriever {
	corpus: BTreeMap<String, Vec<StrategyDocument>>,
	filter_by_query: bool,
}
impl Retriever {
	pub fn builtin() -> Self {
		let corpus = KnownDomain::ALL
			.into_iter()
			.map(|domain| (corpus_key(domain.name()), builtin_strategies(domain)))
			.collect();

		Self { corpus, filter_by_query: true }
	}

	/// Built-in corpus, overlaid with the configured corpus file when one is set. Entries in the
	/// file replace the built-in list for the same domain.
	pub fn from_config(cfg: &strato_config::Retrieval) -> Result<Self> {
		let mut retriever = Self::builtin();

		retriever.filter_by_query = cfg.filter_by_query;

		if let Some(path) = cfg.corpus_path.as_deref() {
			let overlay = load_corpus(path)?;

			tracing::info!(
				path = %path.display(),
				domains = overlay.len(),
				"Loaded strategy corpus."
			);

			retriever.corpus.extend(overlay);
		}

		Ok(retriever)
	}

	pub fn with_filter(mut self, filter_by_query: bool) -> Self {
		self.filter_by_query = filter_by_query;

		self
	}

	/// Strategies for `domain`, narrowed to those mentioning `strategy` when any do. Unknown
	/// domains yield a single sentinel document.
	pub fn get_relevant_docs(&self, domain: &str, strategy: &str) -> Vec<StrategyDocument> {
		let Some(strategies) = self.corpus.get(&corpus_key(domain)) else {
			tracing::debug!(domain, "No strategies for domain.");

			return vec![not_found(domain)];
		};
		let needle = strategy.trim().to_lowercase();

		if !self.filter_by_query || needle.is_empty() {
			return strategies.clone();
		}

		let filtered: Vec<StrategyDocument> =
			strategies.iter().filter(|doc| doc.mentions(&needle)).cloned().collect();

		if filtered.is_empty() { strategies.clone() } else { filtered }
	}
}
impl Default for Retriever {
	fn default() -> Self {
		Self::builtin()
	}
}

pub fn not_found(domain: &str) -> StrategyDocument {
	StrategyDocument {
		title: NOT_FOUND_TITLE.to_string(),
		description: format!("No strategies found for {domain}"),
		steps: Vec::new(),
	}
}

fn corpus_key(domain: &str) -> String {
	domain.trim().to_lowercase()
}

fn load_corpus(path: &Path) -> Result<BTreeMap<String, Vec<StrategyDocument>>> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadCorpus { path: path.to_path_buf(), source: err })?;
	let parsed: BTreeMap<String, Vec<Value>> = serde_json::from_str(&raw)?;

	Ok(parsed
		.into_iter()
		.map(|(domain, records)| {
			let docs = records
				.iter()
				.filter(|record| record.is_object())
				.map(StrategyDocument::from_record)
				.collect();

			(corpus_key(&domain), docs)
		})
		.collect())
}

fn builtin_strategies(domain: KnownDomain) -> Vec<StrategyDocument> {
	match domain {
		KnownDomain::EdTech => vec![
			StrategyDocument::new(
				"Personalized Learning Pathways",
				"Adaptive learning models that adjust content difficulty based on learner performance.",
				&[
					"Integrate assessment tools at key learning milestones",
					"Deploy recommendation engine for next content",
					"Monitor engagement metrics to refine pathways",
				],
			),
			StrategyDocument::new(
				"Gamification for Retention",
				"Using points, badges, and leaderboards to sustain learner motivation.",
				&[
					"Define achievement milestones",
					"Integrate reward triggers in platform",
					"Collect feedback to ensure game mechanics support learning",
				],
			),
		],
		KnownDomain::FinTech => vec![
			StrategyDocument::new(
				"AI-Powered Credit Scoring",
				"Using alternative data sources to evaluate creditworthiness.",
				&[
					"Aggregate transaction & behavioral data",
					"Apply ML model to assess risk",
					"Provide transparent score explanations to customers",
				],
			),
			StrategyDocument::new(
				"Fraud Detection Automation",
				"Real-time anomaly detection to flag suspicious transactions.",
				&[
					"Ingest transaction streams via event pipelines",
					"Run anomaly detection models",
					"Trigger manual review or customer verification",
				],
			),
		],
		KnownDomain::SaaS => vec![
			StrategyDocument::new(
				"Freemium to Paid Conversion",
				"Onboarding free-tier users toward premium plans via targeted nudges.",
				&[
					"Identify high-intent user segments",
					"Introduce feature previews in free accounts",
					"Send contextual upgrade prompts at usage thresholds",
				],
			),
			StrategyDocument::new(
				"Churn Reduction Playbook",
				"Proactive engagement to retain at-risk customers.",
				&[
					"Detect declining engagement via product analytics",
					"Send personalized offers or re-engagement campaigns",
					"Launch exit surveys to capture churn reasons",
				],
			),
		],
	}
}
