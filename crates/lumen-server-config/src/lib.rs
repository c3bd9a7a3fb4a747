// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Lumen.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`LUMEN_*`)
//!
//! # Usage
//!
//! ```ignore
//! use lumen_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Content API at {}", config.api.endpoint);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub api: ApiConfig,
	pub resolver: ResolverConfig,
	pub meta_images: MetaImagesConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LUMEN_*`)
/// 2. Config file (`/etc/lumen/lumen.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let api = layer.api.unwrap_or_default().finalize();
	let resolver = layer.resolver.unwrap_or_default().finalize()?;
	let meta_images = layer.meta_images.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&api, &resolver, &meta_images)?;

	info!(
		endpoint = %api.endpoint,
		timeout_secs = api.timeout_secs,
		default_instance = %resolver.default_instance,
		horizon_instance = %resolver.horizon_instance,
		max_redirect_depth = resolver.max_redirect_depth,
		enrich_links = resolver.enrich_links,
		meta_image_subjects = meta_images.subjects.len(),
		"Configuration loaded"
	);

	Ok(ServerConfig {
		api,
		resolver,
		meta_images,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(
	api: &ApiConfig,
	resolver: &ResolverConfig,
	meta_images: &MetaImagesConfig,
) -> Result<(), ConfigError> {
	validate_http_url("api.endpoint", &api.endpoint)?;
	validate_http_url("meta_images.base_url", &meta_images.base_url)?;

	if api.timeout_secs == 0 {
		return Err(ConfigError::Validation(
			"api.timeout_secs must be at least 1".to_string(),
		));
	}

	if resolver.max_redirect_depth == 0 {
		return Err(ConfigError::Validation(
			"resolver.max_redirect_depth must be at least 1".to_string(),
		));
	}

	Ok(())
}

fn validate_http_url(key: &str, value: &str) -> Result<(), ConfigError> {
	let parsed = url::Url::parse(value)
		.map_err(|e| ConfigError::Validation(format!("{key} '{value}' is not a valid URL: {e}")))?;
	match parsed.scheme() {
		"http" | "https" => Ok(()),
		scheme => Err(ConfigError::Validation(format!(
			"{key} must use http or https, got '{scheme}'"
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lumen_common_i18n::Instance;
	use proptest::prelude::*;
	use std::io::Write;

	#[test]
	fn test_defaults_are_valid() {
		let config = finalize(ServerConfigLayer::default()).unwrap();
		assert_eq!(config.api.endpoint, DEFAULT_API_ENDPOINT);
		assert_eq!(config.resolver.default_instance, Instance::De);
		assert_eq!(config.logging.level, "info");
	}

	#[test]
	fn test_relative_endpoint_rejected() {
		let layer = ServerConfigLayer {
			api: Some(ApiConfigLayer {
				endpoint: Some("/graphql".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let err = finalize(layer).unwrap_err();
		assert!(err.to_string().contains("api.endpoint"));
	}

	#[test]
	fn test_non_http_endpoint_rejected() {
		let layer = ServerConfigLayer {
			api: Some(ApiConfigLayer {
				endpoint: Some("ftp://api.example.org/graphql".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let err = finalize(layer).unwrap_err();
		assert!(err.to_string().contains("http or https"));
	}

	#[test]
	fn test_zero_redirect_depth_rejected() {
		let layer = ServerConfigLayer {
			resolver: Some(ResolverConfigLayer {
				max_redirect_depth: Some(0),
				..Default::default()
			}),
			..Default::default()
		};
		let err = finalize(layer).unwrap_err();
		assert!(err.to_string().contains("max_redirect_depth"));
	}

	#[test]
	fn test_file_overrides_defaults() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[resolver]
default_instance = "en"
max_redirect_depth = 3
"#
		)
		.unwrap();

		let config = load_from_sources(vec![
			Box::new(TomlSource::new(file.path())),
			Box::new(DefaultsSource),
		])
		.unwrap();
		assert_eq!(config.resolver.default_instance, Instance::En);
		assert_eq!(config.resolver.max_redirect_depth, 3);
		assert_eq!(config.resolver.horizon_instance, Instance::De);
	}

	proptest! {
		#[test]
		fn any_positive_depth_is_accepted(depth in 1u32..1000) {
			let layer = ServerConfigLayer {
				resolver: Some(ResolverConfigLayer {
					max_redirect_depth: Some(depth),
					..Default::default()
				}),
				..Default::default()
			};
			let config = finalize(layer).unwrap();
			prop_assert_eq!(config.resolver.max_redirect_depth, depth);
		}
	}
}
