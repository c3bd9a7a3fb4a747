// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content API client implementation.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use lumen_content_core::{ContentFetcher, FetchError, Instance, ResolvedNode};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, instrument, trace};

use crate::query;

pub const DEFAULT_ENDPOINT: &str = "https://api.serlo.org/graphql";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the content GraphQL API.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
	http_client: Client,
	endpoint: String,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
	query: &'a str,
	variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
	data: Option<T>,
	#[serde(default)]
	errors: Vec<GraphQlErrorItem>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorItem {
	message: String,
}

#[derive(Debug, Deserialize)]
struct UuidData {
	uuid: Option<ResolvedNode>,
}

#[derive(Debug, Deserialize)]
struct AliasEntry {
	id: u64,
	alias: Option<String>,
}

impl GraphQlClient {
	/// Creates a client for `endpoint` with the default timeout and User-Agent.
	pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
		Self::with_options(endpoint, DEFAULT_TIMEOUT, None)
	}

	/// Creates a client with an explicit timeout and an optional custom
	/// User-Agent.
	pub fn with_options(
		endpoint: impl Into<String>,
		timeout: Duration,
		user_agent: Option<&str>,
	) -> Result<Self, FetchError> {
		let builder = match user_agent {
			Some(agent) => lumen_common_http::builder_with_user_agent(agent),
			None => lumen_common_http::builder(),
		};
		let http_client = builder.timeout(timeout).build().map_err(|e| {
			error!(error = %e, "Failed to create HTTP client");
			FetchError::Http(e.to_string())
		})?;

		Ok(Self {
			http_client,
			endpoint: endpoint.into(),
		})
	}

	/// Uses an existing HTTP client instead of building one.
	pub fn with_http_client(mut self, http_client: Client) -> Self {
		self.http_client = http_client;
		self
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Posts a query and returns its `data` member.
	///
	/// Any entry in `errors` fails the whole request, even when partial data
	/// came back.
	async fn execute<T: DeserializeOwned>(
		&self,
		query: &str,
		variables: Value,
	) -> Result<T, FetchError> {
		debug!(endpoint = %self.endpoint, "Sending query to content API");
		trace!(variables = %variables, "Query variables");

		let response = self
			.http_client
			.post(&self.endpoint)
			.json(&GraphQlRequest { query, variables })
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return FetchError::Timeout;
				}
				error!(error = %e, "Network error during content API request");
				FetchError::Http(e.to_string())
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from content API");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();
			error!(status = status_code, body = %body, "Content API error");
			return Err(FetchError::Status {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				error!("Timed out reading response body");
				return FetchError::Timeout;
			}
			error!(error = %e, "Failed to read response body");
			FetchError::Http(e.to_string())
		})?;

		trace!(body = %body, "Response body");

		let parsed: GraphQlResponse<T> = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse content API response");
			FetchError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if !parsed.errors.is_empty() {
			let message = parsed
				.errors
				.iter()
				.map(|e| e.message.as_str())
				.collect::<Vec<_>>()
				.join("; ");
			error!(message = %message, "Content API reported errors");
			return Err(FetchError::GraphQl(message));
		}

		parsed.data.ok_or_else(|| {
			error!("Content API response has no data");
			FetchError::InvalidResponse("missing data".to_string())
		})
	}

	async fn fetch_uuid(
		&self,
		query: &str,
		variables: Value,
	) -> Result<Option<ResolvedNode>, FetchError> {
		let data: UuidData = self.execute(query, variables).await?;
		match &data.uuid {
			Some(node) => debug!(typename = node.typename(), id = ?node.id(), "Resolved uuid"),
			None => debug!("No entity for lookup"),
		}
		Ok(data.uuid)
	}
}

/// Variables for an entity lookup: `/123` becomes an id, anything else an
/// alias on the given instance.
fn uuid_variables(path: &str, instance: Instance) -> Value {
	match numeric_id(path) {
		Some(id) => json!({ "id": id }),
		None => json!({ "alias": { "instance": instance.as_str(), "path": path } }),
	}
}

fn numeric_id(path: &str) -> Option<u64> {
	let digits = path.strip_prefix('/')?;
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	digits.parse().ok()
}

#[async_trait]
impl ContentFetcher for GraphQlClient {
	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	async fn fetch_by_alias(
		&self,
		path: &str,
		instance: Instance,
	) -> Result<Option<ResolvedNode>, FetchError> {
		self
			.fetch_uuid(&query::alias_query(), uuid_variables(path, instance))
			.await
	}

	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	async fn fetch_revision(&self, id: u64) -> Result<Option<ResolvedNode>, FetchError> {
		self
			.fetch_uuid(&query::revision_query(), json!({ "id": id }))
			.await
	}

	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	async fn fetch_user(
		&self,
		path: &str,
		instance: Instance,
	) -> Result<Option<ResolvedNode>, FetchError> {
		self
			.fetch_uuid(
				query::user_query(),
				json!({ "alias": { "instance": instance.as_str(), "path": path } }),
			)
			.await
	}

	#[instrument(skip(self, ids), fields(endpoint = %self.endpoint, count = ids.len()))]
	async fn fetch_aliases(&self, ids: &[u64]) -> Result<HashMap<u64, String>, FetchError> {
		if ids.is_empty() {
			return Ok(HashMap::new());
		}

		let data: HashMap<String, Option<AliasEntry>> = self
			.execute(&query::aliases_query(ids), json!({}))
			.await?;

		let aliases: HashMap<u64, String> = data
			.into_values()
			.flatten()
			.filter_map(|entry| {
				let alias = entry.alias.filter(|a| !a.is_empty())?;
				Some((entry.id, alias))
			})
			.collect();

		debug!(resolved = aliases.len(), "Alias lookup completed");
		Ok(aliases)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let client = GraphQlClient::new(DEFAULT_ENDPOINT).unwrap();
		assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
	}

	#[test]
	fn test_with_custom_user_agent() {
		let client =
			GraphQlClient::with_options("http://localhost:1", Duration::from_secs(1), Some("test/1.0"))
				.unwrap();
		assert_eq!(client.endpoint(), "http://localhost:1");
	}

	#[test]
	fn numeric_paths_become_ids() {
		assert_eq!(numeric_id("/1555"), Some(1555));
		assert_eq!(numeric_id("/mathe"), None);
		assert_eq!(numeric_id("/"), None);
		assert_eq!(numeric_id("1555"), None);
		assert_eq!(numeric_id("/12/abc"), None);
	}

	#[test]
	fn alias_variables_carry_instance() {
		assert_eq!(
			uuid_variables("/mathe", Instance::En),
			json!({ "alias": { "instance": "en", "path": "/mathe" } })
		);
		assert_eq!(uuid_variables("/42", Instance::De), json!({ "id": 42 }));
	}
}
