// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Breadcrumbs from taxonomy navigation paths.

use lumen_content_core::{
	BreadcrumbEntry, NavigationPathNode, ResolvedNode, TaxonomyTermRef,
};

/// Paths longer than this are collapsed around an ellipsis.
const MAX_BREADCRUMBS: usize = 5;

/// Breadcrumbs for a node, or `None` when it has no usable taxonomy path.
pub fn create_breadcrumbs(node: &ResolvedNode) -> Option<Vec<BreadcrumbEntry>> {
	let path: &[NavigationPathNode] = match node {
		ResolvedNode::Article(n) => shortest_path(&n.taxonomy_terms.nodes)?,
		ResolvedNode::Video(n) => shortest_path(&n.taxonomy_terms.nodes)?,
		ResolvedNode::Applet(n) => shortest_path(&n.taxonomy_terms.nodes)?,
		ResolvedNode::Exercise(n) => shortest_path(&n.taxonomy_terms.nodes)?,
		ResolvedNode::ExerciseGroup(n) => shortest_path(&n.taxonomy_terms.nodes)?,
		ResolvedNode::CoursePage(n) => shortest_path(&n.course.taxonomy_terms.nodes)?,
		ResolvedNode::GroupedExercise(n) => {
			shortest_path(&n.exercise_group.as_ref()?.taxonomy_terms.nodes)?
		}
		ResolvedNode::Page(n) => n.navigation.as_ref()?.path.nodes.as_slice(),
		ResolvedNode::TaxonomyTerm(n) => {
			let path = &n.navigation.as_ref()?.path.nodes;
			path.split_last().map_or(&[][..], |(_, parents)| parents)
		}
		_ => return None,
	};

	if path.is_empty() {
		return None;
	}
	Some(collapse(path.iter().map(entry).collect()))
}

fn shortest_path(terms: &[TaxonomyTermRef]) -> Option<&[NavigationPathNode]> {
	terms
		.iter()
		.filter_map(|term| term.navigation.as_ref())
		.map(|navigation| navigation.path.nodes.as_slice())
		.filter(|path| !path.is_empty())
		.min_by_key(|path| path.len())
}

fn entry(node: &NavigationPathNode) -> BreadcrumbEntry {
	BreadcrumbEntry {
		label: node.label.clone(),
		url: node
			.url
			.clone()
			.filter(|url| !url.is_empty())
			.or_else(|| node.id.map(|id| format!("/{id}"))),
		ellipsis: false,
	}
}

fn collapse(mut entries: Vec<BreadcrumbEntry>) -> Vec<BreadcrumbEntry> {
	if entries.len() <= MAX_BREADCRUMBS {
		return entries;
	}
	let tail = entries.split_off(entries.len() - 2);
	entries.truncate(2);
	entries.push(BreadcrumbEntry {
		label: "…".to_string(),
		url: None,
		ellipsis: true,
	});
	entries.extend(tail);
	entries
}
