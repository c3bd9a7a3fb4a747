// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Exercise builders.
//!
//! Exercises are not rendered from their own content alone: the task, the
//! nested solution and both licenses are folded into a single `exercise`
//! node. Groups wrap their intro and every live child exercise.

use lumen_content_core::{
	ContentNode, ContentParser, ExerciseBody, ExerciseContext, ExerciseGroup, ExerciseGroupContext,
	ExerciseGroupNode, ExerciseNode, License, RevisionRepository, SolutionRef,
};

/// Everything the exercise builder reads, borrowed from an entity or from a
/// revision's repository.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseInput<'a> {
	pub id: u64,
	pub grouped: bool,
	pub content: Option<&'a str>,
	pub license: Option<&'a License>,
	pub solution: Option<&'a SolutionRef>,
}

impl<'a> ExerciseInput<'a> {
	pub fn from_body(body: &'a ExerciseBody, grouped: bool) -> Self {
		Self {
			id: body.id,
			grouped,
			content: body
				.current_revision
				.as_ref()
				.and_then(|revision| revision.content.as_deref()),
			license: body.license.as_ref(),
			solution: body.solution.as_ref(),
		}
	}

	/// An exercise seen through a revision's repository. The task content
	/// comes from the revision and is set with [`Self::with_content`].
	pub fn from_repository(repository: &'a RevisionRepository, grouped: bool) -> Self {
		Self {
			id: repository.id,
			grouped,
			content: None,
			license: repository.license.as_ref(),
			solution: repository.solution.as_ref(),
		}
	}

	/// Replaces the task content, e.g. with a historical revision's.
	pub fn with_content(mut self, content: Option<&'a str>) -> Self {
		self.content = content;
		self
	}
}

/// Builds the `exercise` node for one exercise.
///
/// A solution that is trashed or has no current revision is left out.
pub fn create_exercise(
	parser: &dyn ContentParser,
	input: ExerciseInput<'_>,
	position_in_group: Option<usize>,
) -> ContentNode {
	let solution = input
		.solution
		.filter(|solution| !solution.trashed)
		.and_then(|solution| {
			let revision = solution.current_revision.as_ref()?;
			Some((solution, revision))
		});

	ContentNode::Exercise(Box::new(ExerciseNode {
		grouped: input.grouped,
		position_in_group,
		task: parser.parse(input.content),
		task_license: input.license.cloned(),
		solution: solution.map(|(_, revision)| parser.parse(revision.content.as_deref())),
		solution_license: solution.and_then(|(solution, _)| solution.license.clone()),
		context: ExerciseContext {
			id: input.id,
			solution_id: solution.map(|(solution, _)| solution.id),
		},
	}))
}

/// Builds the `exercise-group` node: the group intro followed by each
/// non-trashed child exercise that has a current revision, numbered from 0
/// in group order.
pub fn create_exercise_group(parser: &dyn ContentParser, group: &ExerciseGroup) -> ContentNode {
	let intro = group
		.current_revision
		.as_ref()
		.and_then(|revision| revision.content.as_deref());

	let content = group
		.exercises
		.iter()
		.filter(|exercise| !exercise.body.trashed && exercise.body.current_revision.is_some())
		.enumerate()
		.map(|(position, exercise)| {
			create_exercise(
				parser,
				ExerciseInput::from_body(&exercise.body, true),
				Some(position),
			)
		})
		.collect();

	ContentNode::ExerciseGroup(Box::new(ExerciseGroupNode {
		license: group.license.clone(),
		group_intro: parser.parse(intro),
		content,
		context: ExerciseGroupContext { id: group.id },
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parser::EditorStateParser;
	use lumen_content_core::ResolvedNode;
	use serde_json::json;

	fn exercise_body(value: serde_json::Value) -> ExerciseBody {
		match serde_json::from_value(value).unwrap() {
			ResolvedNode::Exercise(exercise) => exercise.body,
			other => panic!("expected exercise, got {}", other.typename()),
		}
	}

	fn unwrap_exercise(node: ContentNode) -> ExerciseNode {
		match node {
			ContentNode::Exercise(exercise) => *exercise,
			other => panic!("expected exercise node, got {other:?}"),
		}
	}

	#[test]
	fn folds_task_solution_and_licenses() {
		let body = exercise_body(json!({
			"__typename": "Exercise",
			"id": 30,
			"currentRevision": { "id": 31, "content": "Berechne 2+2." },
			"license": { "id": 1, "title": "CC BY-SA 4.0", "url": "https://cc.example/by-sa" },
			"solution": {
				"id": 32,
				"trashed": false,
				"license": { "id": 2, "title": "CC0", "url": "https://cc.example/0" },
				"currentRevision": { "id": 33, "content": "4" }
			}
		}));

		let node = unwrap_exercise(create_exercise(
			&EditorStateParser,
			ExerciseInput::from_body(&body, false),
			None,
		));
		assert!(!node.grouped);
		assert_eq!(node.task, vec![ContentNode::paragraph("Berechne 2+2.")]);
		assert_eq!(node.solution, Some(vec![ContentNode::paragraph("4")]));
		assert_eq!(node.task_license.unwrap().id, 1);
		assert_eq!(node.solution_license.unwrap().id, 2);
		assert_eq!(node.context.solution_id, Some(32));
	}

	#[test]
	fn trashed_solution_is_omitted() {
		let body = exercise_body(json!({
			"__typename": "Exercise",
			"id": 30,
			"currentRevision": { "id": 31, "content": "Aufgabe" },
			"solution": { "id": 32, "trashed": true, "currentRevision": { "id": 33, "content": "4" } }
		}));

		let node = unwrap_exercise(create_exercise(
			&EditorStateParser,
			ExerciseInput::from_body(&body, false),
			None,
		));
		assert!(node.solution.is_none());
		assert!(node.solution_license.is_none());
		assert_eq!(node.context.solution_id, None);
	}

	#[test]
	fn missing_current_revision_gives_empty_task() {
		let body = exercise_body(json!({ "__typename": "Exercise", "id": 30 }));
		let node = unwrap_exercise(create_exercise(
			&EditorStateParser,
			ExerciseInput::from_body(&body, false),
			None,
		));
		assert!(node.task.is_empty());
	}

	#[test]
	fn substitute_content_replaces_task() {
		let body = exercise_body(json!({
			"__typename": "Exercise",
			"id": 30,
			"currentRevision": { "id": 31, "content": "neu" }
		}));
		let node = unwrap_exercise(create_exercise(
			&EditorStateParser,
			ExerciseInput::from_body(&body, false).with_content(Some("alt")),
			None,
		));
		assert_eq!(node.task, vec![ContentNode::paragraph("alt")]);
	}

	#[test]
	fn repository_input_takes_revision_content() {
		let repository: RevisionRepository = serde_json::from_value(json!({
			"id": 30,
			"license": { "id": 1, "title": "CC BY-SA 4.0", "url": "https://cc.example/by-sa" },
			"solution": { "id": 32, "currentRevision": { "id": 33, "content": "4" } },
			"currentRevision": { "id": 31, "content": "aktuell" }
		}))
		.unwrap();

		let node = unwrap_exercise(create_exercise(
			&EditorStateParser,
			ExerciseInput::from_repository(&repository, true).with_content(Some("historisch")),
			None,
		));
		assert!(node.grouped);
		assert_eq!(node.context.id, 30);
		assert_eq!(node.task, vec![ContentNode::paragraph("historisch")]);
		assert_eq!(node.solution, Some(vec![ContentNode::paragraph("4")]));
		assert_eq!(node.task_license.unwrap().id, 1);
	}

	#[test]
	fn group_numbers_live_exercises() {
		let group: ResolvedNode = serde_json::from_value(json!({
			"__typename": "ExerciseGroup",
			"id": 40,
			"currentRevision": { "id": 41, "content": "Gegeben ist f(x) = x²." },
			"exercises": [
				{ "id": 42, "trashed": true, "currentRevision": { "id": 1, "content": "weg" } },
				{ "id": 43, "currentRevision": { "id": 2, "content": "a)" } },
				{ "id": 44 },
				{ "id": 45, "currentRevision": { "id": 3, "content": "b)" } }
			]
		}))
		.unwrap();
		let ResolvedNode::ExerciseGroup(group) = group else {
			panic!("expected exercise group");
		};

		let ContentNode::ExerciseGroup(node) = create_exercise_group(&EditorStateParser, &group) else {
			panic!("expected exercise group node");
		};
		assert_eq!(node.context.id, 40);
		assert_eq!(node.group_intro, vec![ContentNode::paragraph("Gegeben ist f(x) = x².")]);

		let children: Vec<ExerciseNode> = node.content.into_iter().map(unwrap_exercise).collect();
		assert_eq!(children.len(), 2);
		assert_eq!(children[0].context.id, 43);
		assert_eq!(children[0].position_in_group, Some(0));
		assert_eq!(children[1].context.id, 45);
		assert_eq!(children[1].position_in_group, Some(1));
		assert!(children.iter().all(|child| child.grouped));
	}
}
