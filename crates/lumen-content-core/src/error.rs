// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised while fetching from the content API.
#[derive(Clone, Error, Debug, PartialEq)]
pub enum FetchError {
	#[error("HTTP error: {0}")]
	Http(String),

	#[error("Request timed out")]
	Timeout,

	#[error("Content API returned {status}: {message}")]
	Status { status: u16, message: String },

	#[error("GraphQL error: {0}")]
	GraphQl(String),

	#[error("Invalid response: {0}")]
	InvalidResponse(String),
}

/// Errors raised by a meta-image side table.
#[derive(Clone, Error, Debug, PartialEq)]
pub enum MetaImageError {
	#[error("Meta image source unavailable: {0}")]
	Unavailable(String),
}
