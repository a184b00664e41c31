//! Subcommand implementations. Each returns the text printed on success.

use anyhow::Context;
use colored::Colorize;
use islet_conf::Settings;
use islet_pages::hydration::fetch_payload;
use islet_pages::ssr::{self, DocumentTemplate};
use islet_payload::Payload;
use std::path::Path;

async fn load_payload(path: &Path) -> anyhow::Result<Payload> {
	let json = tokio::fs::read_to_string(path)
		.await
		.with_context(|| format!("Failed to read {}", path.display()))?;
	let payload =
		Payload::from_json(&json).with_context(|| format!("Invalid payload in {}", path.display()))?;
	tracing::debug!(
		"Loaded {} ({} root node(s))",
		path.display(),
		payload.tree().len()
	);
	Ok(payload)
}

fn warn_on_version(payload: &Payload, settings: &Settings) -> Option<String> {
	if payload.version() == settings.payload.version {
		return None;
	}
	tracing::warn!(
		"Unknown payload version: {} (expected {})",
		payload.version(),
		settings.payload.version
	);
	Some(format!(
		"payload version {} differs from expected {}",
		payload.version(),
		settings.payload.version
	))
}

/// Renders a payload file to markup, optionally wrapped in a document.
pub async fn render(
	path: &Path,
	document: bool,
	title: Option<String>,
	settings: &Settings,
) -> anyhow::Result<String> {
	let payload = load_payload(path).await?;
	warn_on_version(&payload, settings);

	let markup = ssr::render(&payload);
	if !document && title.is_none() {
		return Ok(markup);
	}

	let mut template = DocumentTemplate::from_settings(&settings.build);
	if let Some(title) = title {
		template = template.title(title);
	}
	Ok(template.wrap(&markup))
}

/// Decodes a payload file and checks the registry invariant.
pub async fn check(path: &Path, settings: &Settings) -> anyhow::Result<String> {
	let payload = load_payload(path).await?;
	let version_warning = warn_on_version(&payload, settings);

	let violations = payload.violations();
	if !violations.is_empty() {
		let details = violations
			.iter()
			.map(|violation| format!("  - {}", violation))
			.collect::<Vec<_>>()
			.join("\n");
		anyhow::bail!(
			"{} has {} registry violation(s):\n{}",
			path.display(),
			violations.len(),
			details
		);
	}

	let mut output = format!(
		"{} {} (version {}, {} client component(s))",
		"✓".green(),
		path.display(),
		payload.version(),
		payload.client_components().len()
	);
	if let Some(warning) = version_warning {
		output.push_str(&format!("\n{} {}", "warning:".yellow(), warning));
	}
	Ok(output)
}

/// Retrieves a payload over HTTP and summarizes it.
pub async fn fetch(url: &str, settings: &Settings) -> anyhow::Result<String> {
	let payload = fetch_payload(url).await?;
	warn_on_version(&payload, settings);
	Ok(summary(url, &payload))
}

fn summary(source: &str, payload: &Payload) -> String {
	let mut lines = vec![
		format!("{}", source.bold()),
		format!("  version: {}", payload.version()),
		format!("  root nodes: {}", payload.tree().len()),
		format!("  client components: {}", payload.client_components().len()),
	];
	for (id, component_path) in payload.client_components() {
		lines.push(format!("    {} -> {}", id, component_path));
	}
	lines.join("\n")
}
