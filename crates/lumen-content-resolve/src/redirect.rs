// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Redirects and re-resolution for nodes that are not rendered directly.

use lumen_content_core::ResolvedNode;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
	/// The caller should send the client to `target`.
	Redirect(String),
	/// Run the pipeline again with this alias.
	Reresolve(String),
	/// The redirect chain is broken.
	NotFound,
}

/// Route revisions are compared on.
pub fn compare_route(revision_id: u64) -> String {
	format!("entity/repository/compare/0/{revision_id}")
}

/// Route of a user profile.
pub fn user_route(id: u64, username: &str) -> String {
	format!("/user/{id}/{username}")
}

/// Returns the outcome for nodes that redirect, or `None` for nodes that are
/// rendered directly.
pub fn resolve_redirect(node: &ResolvedNode) -> Option<RedirectOutcome> {
	if let Some(revision) = node.as_revision() {
		debug!(revision_id = revision.id(), "revision reached by alias");
		return Some(RedirectOutcome::Redirect(compare_route(revision.id())));
	}

	match node {
		ResolvedNode::Course(course) => {
			let first = course
				.pages
				.first()
				.and_then(|page| page.alias.as_deref())
				.filter(|alias| !alias.is_empty());
			debug!(course_id = course.id, first_page = ?first, "course resolves to first page");
			Some(match first {
				Some(alias) => RedirectOutcome::Reresolve(alias.to_string()),
				None => RedirectOutcome::NotFound,
			})
		}
		ResolvedNode::Solution(solution) => {
			debug!(solution_id = solution.id, exercise = ?solution.exercise, "solution resolves to exercise");
			Some(match solution.exercise {
				Some(exercise) => RedirectOutcome::Reresolve(format!("/{}", exercise.id)),
				None => RedirectOutcome::NotFound,
			})
		}
		ResolvedNode::User(user) => Some(RedirectOutcome::Redirect(user_route(
			user.id,
			&user.username,
		))),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn node(value: serde_json::Value) -> ResolvedNode {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn revision_redirects_to_compare_route() {
		let outcome = resolve_redirect(&node(json!({ "__typename": "ArticleRevision", "id": 77 })));
		assert_eq!(
			outcome,
			Some(RedirectOutcome::Redirect(
				"entity/repository/compare/0/77".to_string()
			))
		);
	}

	#[test]
	fn course_reresolves_first_page() {
		let outcome = resolve_redirect(&node(json!({
			"__typename": "Course",
			"id": 10,
			"pages": [{ "id": 11, "alias": "/kurs/erste-seite" }, { "id": 12, "alias": "/kurs/zweite" }]
		})));
		assert_eq!(
			outcome,
			Some(RedirectOutcome::Reresolve("/kurs/erste-seite".to_string()))
		);
	}

	#[test]
	fn course_without_pages_is_not_found() {
		let outcome = resolve_redirect(&node(json!({ "__typename": "Course", "id": 10, "pages": [] })));
		assert_eq!(outcome, Some(RedirectOutcome::NotFound));
	}

	#[test]
	fn course_with_aliasless_first_page_is_not_found() {
		let outcome = resolve_redirect(&node(json!({
			"__typename": "Course",
			"id": 10,
			"pages": [{ "id": 11, "alias": null }, { "id": 12, "alias": "/zweite" }]
		})));
		assert_eq!(outcome, Some(RedirectOutcome::NotFound));
	}

	#[test]
	fn solution_reresolves_exercise_id() {
		let outcome = resolve_redirect(&node(json!({
			"__typename": "Solution",
			"id": 43,
			"exercise": { "id": 42 }
		})));
		assert_eq!(outcome, Some(RedirectOutcome::Reresolve("/42".to_string())));
	}

	#[test]
	fn solution_without_exercise_is_not_found() {
		let outcome = resolve_redirect(&node(json!({ "__typename": "Solution", "id": 43 })));
		assert_eq!(outcome, Some(RedirectOutcome::NotFound));
	}

	#[test]
	fn user_redirects_to_profile() {
		let outcome = resolve_redirect(&node(json!({
			"__typename": "User",
			"id": 5,
			"username": "anna"
		})));
		assert_eq!(
			outcome,
			Some(RedirectOutcome::Redirect("/user/5/anna".to_string()))
		);
	}

	#[test]
	fn renderable_nodes_do_not_redirect() {
		assert_eq!(
			resolve_redirect(&node(json!({ "__typename": "Article", "id": 1 }))),
			None
		);
	}
}
