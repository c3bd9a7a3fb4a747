// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolver configuration section.

use lumen_common_i18n::{Instance, DEFAULT_INSTANCE};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_MAX_REDIRECT_DEPTH: u32 = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfigLayer {
	pub default_instance: Option<String>,
	pub horizon_instance: Option<String>,
	pub max_redirect_depth: Option<u32>,
	pub enrich_links: Option<bool>,
}

impl ResolverConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_instance.is_some() {
			self.default_instance = other.default_instance;
		}
		if other.horizon_instance.is_some() {
			self.horizon_instance = other.horizon_instance;
		}
		if other.max_redirect_depth.is_some() {
			self.max_redirect_depth = other.max_redirect_depth;
		}
		if other.enrich_links.is_some() {
			self.enrich_links = other.enrich_links;
		}
	}

	/// Resolves instance names; an unsupported locale is a configuration
	/// error rather than a silent fallback.
	pub fn finalize(self) -> Result<ResolverConfig, ConfigError> {
		Ok(ResolverConfig {
			default_instance: parse_instance("resolver.default_instance", self.default_instance)?,
			horizon_instance: parse_instance("resolver.horizon_instance", self.horizon_instance)?,
			max_redirect_depth: self
				.max_redirect_depth
				.unwrap_or(DEFAULT_MAX_REDIRECT_DEPTH),
			enrich_links: self.enrich_links.unwrap_or(true),
		})
	}
}

fn parse_instance(key: &str, value: Option<String>) -> Result<Instance, ConfigError> {
	match value {
		Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
			key: key.to_string(),
			message: format!("{e}"),
		}),
		None => Ok(DEFAULT_INSTANCE),
	}
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ResolverConfig {
	/// Instance used when a request does not name one.
	pub default_instance: Instance,
	/// The only instance whose pages carry horizon data.
	pub horizon_instance: Instance,
	pub max_redirect_depth: u32,
	/// Rewrite numeric `/123` links to aliases after conversion.
	pub enrich_links: bool,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			default_instance: DEFAULT_INSTANCE,
			horizon_instance: DEFAULT_INSTANCE,
			max_redirect_depth: DEFAULT_MAX_REDIRECT_DEPTH,
			enrich_links: true,
		}
	}
}
