// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lumen command-line front end.
//!
//! Resolves a page, revision or user profile against the configured content
//! API and prints the view model as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lumen_common_i18n::resolve_instance;
use lumen_content_resolve::{ContentResolver, ResolverSettings, SubjectImageTable};
use lumen_server_config::{LoggingConfig, ServerConfig};
use lumen_server_graphql::GraphQlClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Lumen - resolve content pages to view models.
#[derive(Parser, Debug)]
#[command(name = "lumen", about = "Resolve content pages to view models", version)]
struct Args {
	/// Config file; defaults to /etc/lumen/lumen.toml
	#[arg(long, global = true, env = "LUMEN_CONFIG")]
	config: Option<PathBuf>,

	/// Content instance (de, en, es, fr, hi, ta)
	#[arg(long, short, global = true)]
	instance: Option<String>,

	/// Pretty-print the JSON output
	#[arg(long, global = true)]
	pretty: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Resolve an alias such as /mathe or /1555
	Page { alias: String },
	/// Resolve a revision for the comparison view
	Revision { id: u64 },
	/// Resolve a user profile path
	User { path: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => lumen_server_config::load_config_with_file(path),
		None => lumen_server_config::load_config(),
	}
	.context("failed to load configuration")?;

	init_tracing(&config.logging);

	let instance = resolve_instance(args.instance.as_deref(), config.resolver.default_instance);
	let resolver = build_resolver(&config)?;

	tracing::debug!(instance = %instance, command = ?args.command, "resolving");

	let page = match &args.command {
		Command::Page { alias } => resolver.resolve_page(&normalize_path(alias), instance).await,
		Command::Revision { id } => resolver.resolve_revision(*id, instance).await,
		Command::User { path } => resolver.resolve_user(&normalize_path(path), instance).await,
	}
	.context("content API request failed")?;

	let output = if args.pretty {
		serde_json::to_string_pretty(&page)?
	} else {
		serde_json::to_string(&page)?
	};
	println!("{output}");
	Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
	let registry = tracing_subscriber::registry().with(filter);

	if logging.json {
		registry
			.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		registry
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.init();
	}
}

fn build_resolver(config: &ServerConfig) -> anyhow::Result<ContentResolver> {
	let client = GraphQlClient::with_options(
		config.api.endpoint.clone(),
		config.api.timeout(),
		config.api.user_agent.as_deref(),
	)
	.context("failed to create content API client")?;

	let images = SubjectImageTable::new(
		config.meta_images.base_url.clone(),
		config.meta_images.default_image.clone(),
		config.meta_images.subjects.clone(),
	);

	let settings = ResolverSettings {
		horizon_instance: config.resolver.horizon_instance,
		max_redirect_depth: config.resolver.max_redirect_depth,
		enrich_links: config.resolver.enrich_links,
	};

	Ok(ContentResolver::new(Arc::new(client), Arc::new(images)).with_settings(settings))
}

/// Aliases are always absolute paths.
fn normalize_path(path: &str) -> String {
	let path = path.trim();
	if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{path}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_is_well_formed() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_parses_page_with_global_flags() {
		let args = Args::try_parse_from(["lumen", "page", "/mathe", "--instance", "en", "--pretty"])
			.unwrap();
		assert_eq!(args.instance.as_deref(), Some("en"));
		assert!(args.pretty);
		assert!(matches!(args.command, Command::Page { ref alias } if alias == "/mathe"));
	}

	#[test]
	fn test_revision_id_must_be_numeric() {
		assert!(Args::try_parse_from(["lumen", "revision", "abc"]).is_err());
		let args = Args::try_parse_from(["lumen", "revision", "42"]).unwrap();
		assert!(matches!(args.command, Command::Revision { id: 42 }));
	}

	#[test]
	fn test_normalize_path() {
		assert_eq!(normalize_path("mathe"), "/mathe");
		assert_eq!(normalize_path("/mathe"), "/mathe");
		assert_eq!(normalize_path(" 1555 "), "/1555");
	}

	#[test]
	fn test_resolver_from_default_config() {
		let resolver = build_resolver(&ServerConfig::default()).unwrap();
		assert_eq!(resolver.settings().max_redirect_depth, 8);
	}
}
