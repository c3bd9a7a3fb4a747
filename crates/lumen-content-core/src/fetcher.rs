// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::ResolvedNode;
use crate::Instance;

/// Read access to the content API.
///
/// `Ok(None)` means the API answered but knows no entity for the lookup.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
	/// Looks up the entity behind an alias path such as `/mathe` or `/42`.
	async fn fetch_by_alias(
		&self,
		path: &str,
		instance: Instance,
	) -> Result<Option<ResolvedNode>, FetchError>;

	/// Looks up a revision by its numeric id.
	async fn fetch_revision(&self, id: u64) -> Result<Option<ResolvedNode>, FetchError>;

	/// Looks up a user profile by its path.
	async fn fetch_user(
		&self,
		path: &str,
		instance: Instance,
	) -> Result<Option<ResolvedNode>, FetchError>;

	/// Maps entity ids to their canonical alias. Ids without an alias are
	/// missing from the result.
	async fn fetch_aliases(&self, ids: &[u64]) -> Result<HashMap<u64, String>, FetchError>;
}
