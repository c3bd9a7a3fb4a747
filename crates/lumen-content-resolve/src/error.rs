// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use lumen_content_core::FetchError;
use thiserror::Error;

/// Failures that prevent the pipeline from producing any view model.
///
/// Not-found conditions are not errors: they resolve to the 404 view model.
#[derive(Debug, Error)]
pub enum ResolveError {
	#[error("content fetch failed: {0}")]
	Fetch(#[from] FetchError),
}
