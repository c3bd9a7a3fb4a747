// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! GraphQL client for the content API.
//!
//! [`GraphQlClient`] implements [`lumen_content_core::ContentFetcher`] over
//! plain HTTP POST requests. No retries are attempted; callers decide how to
//! surface a failed lookup.

mod client;
pub mod query;

pub use client::{GraphQlClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
