// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use crate::content::ContentNode;

/// Converts serialized editor state into render nodes.
///
/// Implementations must be total: `None`, empty and unparseable input all
/// produce a (possibly empty) sequence rather than an error.
pub trait ContentParser: Send + Sync {
	fn parse(&self, serialized: Option<&str>) -> Vec<ContentNode>;
}
