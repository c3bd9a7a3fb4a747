// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	ApiConfigLayer, LoggingConfigLayer, MetaImagesConfigLayer, ResolverConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/lumen/lumen.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: LUMEN_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			api: Some(load_api_from_env()?),
			resolver: Some(load_resolver_from_env()?),
			meta_images: Some(load_meta_images_from_env()),
			logging: Some(load_logging_from_env()),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_u32(name: &str) -> Result<Option<u32>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u32 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_api_from_env() -> Result<ApiConfigLayer, ConfigError> {
	Ok(ApiConfigLayer {
		endpoint: env_var("LUMEN_API_ENDPOINT"),
		timeout_secs: env_u64("LUMEN_API_TIMEOUT_SECS")?,
		user_agent: env_var("LUMEN_API_USER_AGENT"),
	})
}

fn load_resolver_from_env() -> Result<ResolverConfigLayer, ConfigError> {
	Ok(ResolverConfigLayer {
		default_instance: env_var("LUMEN_RESOLVER_DEFAULT_INSTANCE"),
		horizon_instance: env_var("LUMEN_RESOLVER_HORIZON_INSTANCE"),
		max_redirect_depth: env_u32("LUMEN_RESOLVER_MAX_REDIRECT_DEPTH")?,
		enrich_links: env_bool("LUMEN_RESOLVER_ENRICH_LINKS"),
	})
}

fn load_meta_images_from_env() -> MetaImagesConfigLayer {
	MetaImagesConfigLayer {
		base_url: env_var("LUMEN_META_IMAGES_BASE_URL"),
		default_image: env_var("LUMEN_META_IMAGES_DEFAULT"),
		subjects: None,
	}
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("LUMEN_LOG_LEVEL"),
		json: env_bool("LUMEN_LOG_JSON"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_precedence_order() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
	}

	#[test]
	fn test_missing_toml_file_is_empty_layer() {
		let source = TomlSource::new("/nonexistent/lumen.toml");
		assert_eq!(source.load().unwrap(), ServerConfigLayer::default());
	}

	#[test]
	fn test_toml_file_is_parsed() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[api]
endpoint = "http://localhost:3001/graphql"
timeout_secs = 3

[logging]
json = true
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		let api = layer.api.unwrap();
		assert_eq!(
			api.endpoint.as_deref(),
			Some("http://localhost:3001/graphql")
		);
		assert_eq!(api.timeout_secs, Some(3));
		assert_eq!(layer.logging.unwrap().json, Some(true));
	}

	#[test]
	fn test_invalid_toml_is_reported_with_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[api\nendpoint = ").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
		assert!(err.to_string().contains(&file.path().display().to_string()));
	}

	#[test]
	fn test_env_u64_rejects_garbage() {
		std::env::set_var("LUMEN_TEST_SOURCES_U64", "ten");
		let err = env_u64("LUMEN_TEST_SOURCES_U64").unwrap_err();
		std::env::remove_var("LUMEN_TEST_SOURCES_U64");
		assert!(err.to_string().contains("LUMEN_TEST_SOURCES_U64"));
	}

	#[test]
	fn test_env_bool_accepts_one_and_true() {
		std::env::set_var("LUMEN_TEST_SOURCES_BOOL_A", "1");
		std::env::set_var("LUMEN_TEST_SOURCES_BOOL_B", "TRUE");
		std::env::set_var("LUMEN_TEST_SOURCES_BOOL_C", "no");
		assert_eq!(env_bool("LUMEN_TEST_SOURCES_BOOL_A"), Some(true));
		assert_eq!(env_bool("LUMEN_TEST_SOURCES_BOOL_B"), Some(true));
		assert_eq!(env_bool("LUMEN_TEST_SOURCES_BOOL_C"), Some(false));
		assert_eq!(env_bool("LUMEN_TEST_SOURCES_BOOL_UNSET"), None);
	}
}
