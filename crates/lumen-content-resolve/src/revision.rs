// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Side-by-side revision comparison.

use lumen_content_core::{
	ContentNode, ContentParser, RevisionData, RevisionKind, RevisionRef, RevisionRepository,
	RevisionView,
};

use crate::exercise::{create_exercise, ExerciseInput};

/// Builds `thisRevision` and `currentRevision` for a revision node.
///
/// Returns `None` when the revision has no repository. When the repository
/// has nothing checked out, every `currentRevision` field is `None`.
pub fn revision_data(parser: &dyn ContentParser, revision: RevisionRef<'_>) -> Option<RevisionData> {
	let repository = revision.repository()?;
	let kind = revision.kind;

	let this_revision = RevisionView {
		id: Some(revision.id()),
		title: revision.title().map(str::to_string),
		meta_title: revision.meta_title().map(str::to_string),
		meta_description: revision.meta_description().map(str::to_string),
		content: Some(adapt(parser, kind, repository, revision.content())),
		url: revision.url().map(str::to_string),
	};

	let current_revision = revision
		.current()
		.map(|current| RevisionView {
			id: Some(current.id()),
			title: current.title().map(str::to_string),
			meta_title: current.meta_title().map(str::to_string),
			meta_description: current.meta_description().map(str::to_string),
			content: Some(adapt(parser, kind, repository, current.content())),
			url: current.url().map(str::to_string),
		})
		.unwrap_or_default();

	Some(RevisionData {
		entity_type: kind.entity_type(),
		repository_id: repository.id,
		typename: kind,
		this_revision,
		current_revision,
		changes: revision.changes().map(str::to_string),
		user: revision.author().cloned(),
		date: revision.date().map(str::to_string),
	})
}

/// Exercise revisions are wrapped with the repository's solution and
/// license; every other kind is converted as is.
fn adapt(
	parser: &dyn ContentParser,
	kind: RevisionKind,
	repository: &RevisionRepository,
	content: Option<&str>,
) -> Vec<ContentNode> {
	if !kind.is_exercise() {
		return parser.parse(content);
	}
	let input = ExerciseInput::from_repository(repository, kind == RevisionKind::GroupedExercise)
		.with_content(content);
	vec![create_exercise(parser, input, None)]
}
