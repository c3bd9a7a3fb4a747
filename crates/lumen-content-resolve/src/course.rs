// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Course pagination.

use lumen_content_core::{CourseData, CoursePage, CoursePageEntry, CoursePageRef};

use crate::urls::entity_url;

/// Pagination for a course page.
///
/// Only pages with an alias, a non-empty title and nothing trashed are
/// listed. `current_page` is 1-based, so it doubles as the index of the next
/// page.
pub fn course_data(page: &CoursePage) -> CourseData {
	let mut current_page = None;
	let pages: Vec<CoursePageEntry> = page
		.course
		.pages
		.iter()
		.filter_map(|sibling| Some((sibling, listed_title(sibling)?)))
		.enumerate()
		.map(|(index, (sibling, title))| {
			let active = sibling.id == page.id;
			if active {
				current_page = Some(index + 1);
			}
			CoursePageEntry {
				title: title.to_string(),
				url: entity_url(sibling.alias.as_deref(), sibling.id),
				active,
			}
		})
		.collect();

	let next_page_url = current_page
		.and_then(|position| pages.get(position))
		.map(|next| next.url.clone());

	CourseData {
		id: page.course.id,
		title: page
			.course
			.current_revision
			.as_ref()
			.and_then(|revision| revision.title.clone())
			.unwrap_or_default(),
		pages,
		current_page,
		next_page_url,
	}
}

fn listed_title(page: &CoursePageRef) -> Option<&str> {
	page.alias.as_deref().filter(|alias| !alias.is_empty())?;
	if page.trashed {
		return None;
	}
	let revision = page.current_revision.as_ref()?;
	if revision.trashed {
		return None;
	}
	revision.title.as_deref().filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use lumen_content_core::ResolvedNode;
	use serde_json::{json, Value};

	fn course_page(id: u64, pages: Value) -> CoursePage {
		let node: ResolvedNode = serde_json::from_value(json!({
			"__typename": "CoursePage",
			"id": id,
			"course": { "id": 1, "currentRevision": { "title": "Kurs" }, "pages": pages }
		}))
		.unwrap();
		match node {
			ResolvedNode::CoursePage(page) => page,
			other => panic!("expected course page, got {}", other.typename()),
		}
	}

	#[test]
	fn filters_and_marks_position() {
		let page = course_page(
			12,
			json!([
				{ "id": 10, "alias": "/a", "trashed": true, "currentRevision": { "title": "A" } },
				{ "id": 11, "alias": "/b", "currentRevision": { "title": "B" } },
				{ "id": 12, "alias": "/c", "currentRevision": { "title": "C" } },
				{ "id": 13, "alias": "/d", "currentRevision": { "title": "" } }
			]),
		);
		let data = course_data(&page);
		let titles: Vec<_> = data.pages.iter().map(|p| p.title.as_str()).collect();
		assert_eq!(titles, vec!["B", "C"]);
		assert_eq!(data.current_page, Some(2));
		assert!(data.pages[1].active);
		assert_eq!(data.next_page_url, None);
		assert_eq!(data.title, "Kurs");
	}

	#[test]
	fn next_page_follows_current() {
		let page = course_page(
			11,
			json!([
				{ "id": 11, "alias": "/b", "currentRevision": { "title": "B" } },
				{ "id": 12, "alias": "/kurs/größen", "currentRevision": { "title": "C" } }
			]),
		);
		let data = course_data(&page);
		assert_eq!(data.current_page, Some(1));
		assert_eq!(data.next_page_url.as_deref(), Some("/12"));
	}

	#[test]
	fn unlisted_current_page_has_no_next() {
		let page = course_page(
			99,
			json!([
				{ "id": 11, "alias": "/b", "currentRevision": { "title": "B" } },
				{ "id": 12, "alias": "/c", "currentRevision": { "title": "C", "trashed": true } },
				{ "id": 13, "currentRevision": { "title": "D" } }
			]),
		);
		let data = course_data(&page);
		assert_eq!(data.pages.len(), 1);
		assert_eq!(data.current_page, None);
		assert_eq!(data.next_page_url, None);
	}
}
