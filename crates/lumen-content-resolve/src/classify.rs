// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Entity classification.

use lumen_content_core::{EntityTypename, ResolvedNode, RevisionKind};
use thiserror::Error;

/// The resolution branch a node takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
	/// Rendered as a `single-entity` page.
	SingleEntity(EntityTypename),
	/// Rendered as a `taxonomy` page.
	Taxonomy,
	/// Stale revision reached through an alias; redirected to the compare route.
	Revision(RevisionKind),
	/// Re-resolved through its first page.
	Course,
	/// Re-resolved through its exercise.
	Solution,
	/// Redirected to the profile route.
	User,
}

impl EntityClass {
	/// Whether the node can be assembled into a page without another lookup.
	pub fn is_renderable(&self) -> bool {
		matches!(self, EntityClass::SingleEntity(_) | EntityClass::Taxonomy)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown content type!")]
pub struct UnknownEntityType;

/// Determines how a fetched node is resolved. Pure; no I/O.
pub fn classify(node: &ResolvedNode) -> Result<EntityClass, UnknownEntityType> {
	// No wildcard arm: a new variant must be classified before it compiles.
	let class = match node {
		ResolvedNode::Applet(_) => EntityClass::SingleEntity(EntityTypename::Applet),
		ResolvedNode::Article(_) => EntityClass::SingleEntity(EntityTypename::Article),
		ResolvedNode::CoursePage(_) => EntityClass::SingleEntity(EntityTypename::CoursePage),
		ResolvedNode::Event(_) => EntityClass::SingleEntity(EntityTypename::Event),
		ResolvedNode::Exercise(_) => EntityClass::SingleEntity(EntityTypename::Exercise),
		ResolvedNode::ExerciseGroup(_) => EntityClass::SingleEntity(EntityTypename::ExerciseGroup),
		ResolvedNode::GroupedExercise(_) => {
			EntityClass::SingleEntity(EntityTypename::GroupedExercise)
		}
		ResolvedNode::Page(_) => EntityClass::SingleEntity(EntityTypename::Page),
		ResolvedNode::Video(_) => EntityClass::SingleEntity(EntityTypename::Video),
		ResolvedNode::TaxonomyTerm(_) => EntityClass::Taxonomy,
		ResolvedNode::Course(_) => EntityClass::Course,
		ResolvedNode::Solution(_) => EntityClass::Solution,
		ResolvedNode::User(_) => EntityClass::User,
		ResolvedNode::AppletRevision(_) => EntityClass::Revision(RevisionKind::Applet),
		ResolvedNode::ArticleRevision(_) => EntityClass::Revision(RevisionKind::Article),
		ResolvedNode::CoursePageRevision(_) => EntityClass::Revision(RevisionKind::CoursePage),
		ResolvedNode::CourseRevision(_) => EntityClass::Revision(RevisionKind::Course),
		ResolvedNode::EventRevision(_) => EntityClass::Revision(RevisionKind::Event),
		ResolvedNode::ExerciseGroupRevision(_) => {
			EntityClass::Revision(RevisionKind::ExerciseGroup)
		}
		ResolvedNode::ExerciseRevision(_) => EntityClass::Revision(RevisionKind::Exercise),
		ResolvedNode::GroupedExerciseRevision(_) => {
			EntityClass::Revision(RevisionKind::GroupedExercise)
		}
		ResolvedNode::PageRevision(_) => EntityClass::Revision(RevisionKind::Page),
		ResolvedNode::SolutionRevision(_) => EntityClass::Revision(RevisionKind::Solution),
		ResolvedNode::VideoRevision(_) => EntityClass::Revision(RevisionKind::Video),
		ResolvedNode::Unknown => return Err(UnknownEntityType),
	};
	Ok(class)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn node(typename: &str) -> ResolvedNode {
		serde_json::from_value(json!({ "__typename": typename, "id": 1 })).unwrap()
	}

	#[test]
	fn single_entities() {
		for (typename, expected) in [
			("Applet", EntityTypename::Applet),
			("Article", EntityTypename::Article),
			("CoursePage", EntityTypename::CoursePage),
			("Event", EntityTypename::Event),
			("Exercise", EntityTypename::Exercise),
			("ExerciseGroup", EntityTypename::ExerciseGroup),
			("GroupedExercise", EntityTypename::GroupedExercise),
			("Page", EntityTypename::Page),
			("Video", EntityTypename::Video),
		] {
			assert_eq!(
				classify(&node(typename)),
				Ok(EntityClass::SingleEntity(expected)),
				"{typename}"
			);
		}
	}

	#[test]
	fn revisions_keep_their_kind() {
		let class = classify(&node("GroupedExerciseRevision")).unwrap();
		assert_eq!(class, EntityClass::Revision(RevisionKind::GroupedExercise));
		assert!(!class.is_renderable());
	}

	#[test]
	fn taxonomy_is_renderable() {
		assert!(classify(&node("TaxonomyTerm")).unwrap().is_renderable());
	}

	#[test]
	fn unknown_is_an_error() {
		assert_eq!(classify(&node("Comment")), Err(UnknownEntityType));
	}
}
