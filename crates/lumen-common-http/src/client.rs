// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub const PLATFORM: &str = detect_platform();

const fn detect_platform() -> &'static str {
	if cfg!(all(target_os = "linux", target_arch = "x86_64")) {
		"linux-x86_64"
	} else if cfg!(all(target_os = "linux", target_arch = "aarch64")) {
		"linux-aarch64"
	} else if cfg!(all(target_os = "macos", target_arch = "aarch64")) {
		"macos-aarch64"
	} else if cfg!(all(target_os = "macos", target_arch = "x86_64")) {
		"macos-x86_64"
	} else if cfg!(target_os = "windows") {
		"windows"
	} else {
		"unknown"
	}
}

/// Creates a new HTTP client builder with the standard Lumen User-Agent header.
///
/// Use this when you need to customize the client (e.g., set timeout).
///
/// # Example
/// ```ignore
/// let client = lumen_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Creates a new HTTP client with a custom timeout and the standard User-Agent.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	let client = builder().timeout(timeout).build()?;
	tracing::trace!(timeout_ms = timeout.as_millis() as u64, "built HTTP client");
	Ok(client)
}

/// Returns the standard Lumen User-Agent string.
///
/// Format: `lumen/{version}/{platform}`
pub fn user_agent() -> String {
	format!("lumen/{}/{}", env!("CARGO_PKG_VERSION"), PLATFORM)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("lumen/"));
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 3);
		assert_eq!(parts[0], "lumen");
		assert_eq!(parts[2], PLATFORM);
	}

	#[test]
	fn builder_with_custom_user_agent() {
		let client = builder_with_user_agent("my-custom-agent/1.0").build();
		assert!(client.is_ok());
	}

	#[test]
	fn client_with_timeout_builds() {
		assert!(new_client_with_timeout(Duration::from_secs(3)).is_ok());
	}
}
