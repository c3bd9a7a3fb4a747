// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Instance resolution logic.

use crate::instance::Instance;

/// Resolve the effective instance from a requested code and the configured
/// default.
///
/// Resolution order (highest to lowest priority):
/// 1. Requested instance code (if supported)
/// 2. Configured default
///
/// # Example
///
/// ```
/// use lumen_common_i18n::{resolve_instance, Instance};
///
/// assert_eq!(resolve_instance(Some("en"), Instance::De), Instance::En);
/// assert_eq!(resolve_instance(None, Instance::Fr), Instance::Fr);
/// assert_eq!(resolve_instance(Some("xx"), Instance::De), Instance::De);
/// ```
pub fn resolve_instance(requested: Option<&str>, default: Instance) -> Instance {
	match requested.map(str::parse::<Instance>) {
		Some(Ok(instance)) => instance,
		Some(Err(err)) => {
			tracing::debug!(error = %err, fallback = %default, "falling back to default instance");
			default
		}
		None => default,
	}
}
