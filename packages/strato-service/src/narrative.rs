use strato_domain::{document::StrategyDocument, outcome::OutcomeLabel};

const UNTITLED: &str = "Untitled";

pub fn generate_strategy(docs: &[StrategyDocument], query: &str) -> String {
	if docs.is_empty() {
		return format!("No relevant strategies found for '{query}'. Try refining your prompt.");
	}

	let mut lines = Vec::new();

	for doc in docs {
		let title = if doc.title.trim().is_empty() { UNTITLED } else { doc.title.as_str() };

		lines.push(format!("- **{title}**: {}", doc.description));

		for (index, step) in doc.steps.iter().enumerate() {
			lines.push(format!("  {}. {step}", index + 1));
		}
	}

	lines.join("\n")
}

pub fn assemble(
	domain: &str,
	query: &str,
	docs: &[StrategyDocument],
	label: OutcomeLabel,
) -> String {
	format!(
		"### Strategy Summary for '{query}' in {domain}\n\n**Predicted Outcome:** {label}\n\n{}",
		generate_strategy(docs, query)
	)
}
