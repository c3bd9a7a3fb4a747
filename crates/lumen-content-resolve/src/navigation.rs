// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secondary navigation from the JSON navigation tree.

use lumen_content_core::{Navigation, ResolvedNode, SecondaryNavigationEntry};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NavigationTreeNode {
	label: String,
	url: Option<String>,
	id: Option<u64>,
	children: Vec<NavigationTreeNode>,
}

/// Lists the children of the navigation root a Page or TaxonomyTerm belongs
/// to, marking the node itself as active.
pub fn create_navigation(node: &ResolvedNode) -> Option<Vec<SecondaryNavigationEntry>> {
	let (id, navigation) = match node {
		ResolvedNode::Page(page) => (page.id, page.navigation.as_ref()?),
		ResolvedNode::TaxonomyTerm(term) => (term.id, term.navigation.as_ref()?),
		_ => return None,
	};
	secondary_navigation(id, navigation)
}

fn secondary_navigation(
	current_id: u64,
	navigation: &Navigation,
) -> Option<Vec<SecondaryNavigationEntry>> {
	let data = navigation.data.as_deref().filter(|d| !d.trim().is_empty())?;
	let root: NavigationTreeNode = match serde_json::from_str(data) {
		Ok(root) => root,
		Err(e) => {
			warn!(error = %e, id = current_id, "Ignoring malformed navigation data");
			return None;
		}
	};

	let entries: Vec<SecondaryNavigationEntry> = root
		.children
		.into_iter()
		.map(|child| SecondaryNavigationEntry {
			active: child.id == Some(current_id),
			title: child.label,
			url: child.url.filter(|url| !url.is_empty()),
			id: child.id,
		})
		.collect();

	(!entries.is_empty()).then_some(entries)
}
