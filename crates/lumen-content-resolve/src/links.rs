// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Rewrites `/123` links to the target's alias.

use std::collections::{BTreeSet, HashMap};

use lumen_content_core::{ContentNode, ElementNode};
use serde_json::Value;

/// Ids referenced by `a` elements whose `href` is a bare id path, sorted and
/// without duplicates.
pub fn collect_link_ids(content: &[ContentNode]) -> Vec<u64> {
	let mut ids = BTreeSet::new();
	for node in content {
		node.for_each_element(&mut |element| {
			if let Some(id) = link_target_id(element) {
				ids.insert(id);
			}
		});
	}
	ids.into_iter().collect()
}

/// Replaces id hrefs with their alias. Links without a known alias stay
/// unchanged.
pub fn apply_aliases(content: &mut [ContentNode], aliases: &HashMap<u64, String>) {
	if aliases.is_empty() {
		return;
	}
	for node in content {
		node.for_each_element_mut(&mut |element| {
			let Some(alias) = link_target_id(element).and_then(|id| aliases.get(&id)) else {
				return;
			};
			element
				.attrs
				.insert("href".to_string(), Value::String(alias.clone()));
		});
	}
}

fn link_target_id(element: &ElementNode) -> Option<u64> {
	if element.kind != "a" {
		return None;
	}
	let digits = element.attrs.get("href")?.as_str()?.strip_prefix('/')?;
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	digits.parse().ok()
}
