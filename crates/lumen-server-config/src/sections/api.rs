// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content API configuration section.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.serlo.org/graphql";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiConfigLayer {
	pub endpoint: Option<String>,
	pub timeout_secs: Option<u64>,
	pub user_agent: Option<String>,
}

impl ApiConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.endpoint.is_some() {
			self.endpoint = other.endpoint;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.user_agent.is_some() {
			self.user_agent = other.user_agent;
		}
	}

	pub fn finalize(self) -> ApiConfig {
		ApiConfig {
			endpoint: self
				.endpoint
				.unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			user_agent: self.user_agent,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
	pub endpoint: String,
	pub timeout_secs: u64,
	/// Overrides the standard `lumen/{version}/{platform}` User-Agent.
	pub user_agent: Option<String>,
}

impl ApiConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		ApiConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_finalize_defaults() {
		let config = ApiConfigLayer::default().finalize();
		assert_eq!(config.endpoint, DEFAULT_API_ENDPOINT);
		assert_eq!(config.timeout(), Duration::from_secs(10));
		assert!(config.user_agent.is_none());
	}

	#[test]
	fn test_merge_preserves_base_when_none() {
		let mut base = ApiConfigLayer {
			endpoint: Some("http://localhost:3001/graphql".to_string()),
			timeout_secs: None,
			user_agent: Some("lumen-test".to_string()),
		};
		base.merge(ApiConfigLayer {
			endpoint: None,
			timeout_secs: Some(2),
			user_agent: None,
		});
		assert_eq!(
			base.endpoint.as_deref(),
			Some("http://localhost:3001/graphql")
		);
		assert_eq!(base.timeout_secs, Some(2));
		assert_eq!(base.user_agent.as_deref(), Some("lumen-test"));
	}

	#[test]
	fn test_serde_roundtrip() {
		let layer = ApiConfigLayer {
			endpoint: Some("https://api.example.org/graphql".to_string()),
			timeout_secs: Some(15),
			user_agent: None,
		};
		let toml_str = toml::to_string(&layer).unwrap();
		let parsed: ApiConfigLayer = toml::from_str(&toml_str).unwrap();
		assert_eq!(layer, parsed);
	}
}
