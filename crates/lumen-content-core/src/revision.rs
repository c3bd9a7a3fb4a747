// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Revision nodes.
//!
//! All eleven revision typenames share one payload struct, but not every
//! kind carries every field: only some kinds have a title, a meta title, a
//! URL and so on. Those fields are private and read through [`RevisionRef`],
//! whose accessors return `None` for kinds that lack the field regardless of
//! what the payload happens to contain.

use serde::{Deserialize, Serialize};

use crate::model::{License, ResolvedNode, SolutionRef};

/// The author of a revision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
	pub id: u64,
	pub username: String,
	pub active_donor: bool,
	pub active_author: bool,
	pub active_reviewer: bool,
}

/// Payload of every `*Revision` node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Revision {
	pub id: u64,
	pub trashed: bool,
	pub date: Option<String>,
	pub author: Option<Author>,
	pub content: Option<String>,
	pub repository: Option<RevisionRepository>,
	title: Option<String>,
	meta_title: Option<String>,
	meta_description: Option<String>,
	url: Option<String>,
	changes: Option<String>,
}

/// The entity a revision belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevisionRepository {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub license: Option<License>,
	/// Only exercise repositories carry a solution.
	pub solution: Option<SolutionRef>,
	pub current_revision: Option<RepositoryRevision>,
}

/// The revision currently checked out on a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepositoryRevision {
	pub id: u64,
	pub content: Option<String>,
	title: Option<String>,
	meta_title: Option<String>,
	meta_description: Option<String>,
	url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevisionKind {
	Applet,
	Article,
	Course,
	CoursePage,
	Event,
	Exercise,
	ExerciseGroup,
	GroupedExercise,
	Page,
	Solution,
	Video,
}

impl RevisionKind {
	/// The API typename, e.g. `CoursePageRevision`.
	pub fn typename(&self) -> &'static str {
		match self {
			RevisionKind::Applet => "AppletRevision",
			RevisionKind::Article => "ArticleRevision",
			RevisionKind::Course => "CourseRevision",
			RevisionKind::CoursePage => "CoursePageRevision",
			RevisionKind::Event => "EventRevision",
			RevisionKind::Exercise => "ExerciseRevision",
			RevisionKind::ExerciseGroup => "ExerciseGroupRevision",
			RevisionKind::GroupedExercise => "GroupedExerciseRevision",
			RevisionKind::Page => "PageRevision",
			RevisionKind::Solution => "SolutionRevision",
			RevisionKind::Video => "VideoRevision",
		}
	}

	/// The typename without `Revision`, lower-cased (`coursepage`).
	pub fn entity_type(&self) -> &'static str {
		match self {
			RevisionKind::Applet => "applet",
			RevisionKind::Article => "article",
			RevisionKind::Course => "course",
			RevisionKind::CoursePage => "coursepage",
			RevisionKind::Event => "event",
			RevisionKind::Exercise => "exercise",
			RevisionKind::ExerciseGroup => "exercisegroup",
			RevisionKind::GroupedExercise => "groupedexercise",
			RevisionKind::Page => "page",
			RevisionKind::Solution => "solution",
			RevisionKind::Video => "video",
		}
	}

	/// Exercise revisions are rendered through the exercise builder.
	pub fn is_exercise(&self) -> bool {
		matches!(self, RevisionKind::Exercise | RevisionKind::GroupedExercise)
	}

	pub fn has_title(&self) -> bool {
		matches!(
			self,
			RevisionKind::Applet
				| RevisionKind::Article
				| RevisionKind::Course
				| RevisionKind::CoursePage
				| RevisionKind::Event
				| RevisionKind::Page
				| RevisionKind::Video
		)
	}

	pub fn has_meta_title(&self) -> bool {
		matches!(
			self,
			RevisionKind::Applet | RevisionKind::Article | RevisionKind::Event
		)
	}

	pub fn has_meta_description(&self) -> bool {
		matches!(
			self,
			RevisionKind::Applet | RevisionKind::Article | RevisionKind::Course | RevisionKind::Event
		)
	}

	pub fn has_url(&self) -> bool {
		matches!(self, RevisionKind::Applet | RevisionKind::Video)
	}

	pub fn has_changes(&self) -> bool {
		!matches!(self, RevisionKind::Page)
	}
}

impl Serialize for RevisionKind {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.typename())
	}
}

/// A revision node narrowed to its kind.
#[derive(Debug, Clone, Copy)]
pub struct RevisionRef<'a> {
	pub kind: RevisionKind,
	revision: &'a Revision,
}

impl<'a> RevisionRef<'a> {
	pub fn new(kind: RevisionKind, revision: &'a Revision) -> Self {
		Self { kind, revision }
	}

	pub fn id(&self) -> u64 {
		self.revision.id
	}

	pub fn date(&self) -> Option<&'a str> {
		self.revision.date.as_deref()
	}

	pub fn author(&self) -> Option<&'a Author> {
		self.revision.author.as_ref()
	}

	pub fn content(&self) -> Option<&'a str> {
		self.revision.content.as_deref()
	}

	pub fn repository(&self) -> Option<&'a RevisionRepository> {
		self.revision.repository.as_ref()
	}

	pub fn title(&self) -> Option<&'a str> {
		gate(self.kind.has_title(), &self.revision.title)
	}

	pub fn meta_title(&self) -> Option<&'a str> {
		gate(self.kind.has_meta_title(), &self.revision.meta_title)
	}

	pub fn meta_description(&self) -> Option<&'a str> {
		gate(self.kind.has_meta_description(), &self.revision.meta_description)
	}

	pub fn url(&self) -> Option<&'a str> {
		gate(self.kind.has_url(), &self.revision.url)
	}

	pub fn changes(&self) -> Option<&'a str> {
		gate(self.kind.has_changes(), &self.revision.changes)
	}

	/// The repository's checked-out revision, if anything was ever checked out.
	pub fn current(&self) -> Option<CurrentRevisionRef<'a>> {
		self
			.repository()
			.and_then(|repo| repo.current_revision.as_ref())
			.map(|revision| CurrentRevisionRef {
				kind: self.kind,
				revision,
			})
	}
}

/// A repository's checked-out revision, gated by the same kind rules.
#[derive(Debug, Clone, Copy)]
pub struct CurrentRevisionRef<'a> {
	pub kind: RevisionKind,
	revision: &'a RepositoryRevision,
}

impl<'a> CurrentRevisionRef<'a> {
	pub fn id(&self) -> u64 {
		self.revision.id
	}

	pub fn content(&self) -> Option<&'a str> {
		self.revision.content.as_deref()
	}

	pub fn title(&self) -> Option<&'a str> {
		gate(self.kind.has_title(), &self.revision.title)
	}

	pub fn meta_title(&self) -> Option<&'a str> {
		gate(self.kind.has_meta_title(), &self.revision.meta_title)
	}

	pub fn meta_description(&self) -> Option<&'a str> {
		gate(self.kind.has_meta_description(), &self.revision.meta_description)
	}

	pub fn url(&self) -> Option<&'a str> {
		gate(self.kind.has_url(), &self.revision.url)
	}
}

fn gate<'a>(present: bool, value: &'a Option<String>) -> Option<&'a str> {
	if present {
		value.as_deref()
	} else {
		None
	}
}

impl ResolvedNode {
	/// Narrows the node to a revision, if it is one.
	pub fn as_revision(&self) -> Option<RevisionRef<'_>> {
		let (kind, revision) = match self {
			ResolvedNode::AppletRevision(r) => (RevisionKind::Applet, r),
			ResolvedNode::ArticleRevision(r) => (RevisionKind::Article, r),
			ResolvedNode::CoursePageRevision(r) => (RevisionKind::CoursePage, r),
			ResolvedNode::CourseRevision(r) => (RevisionKind::Course, r),
			ResolvedNode::EventRevision(r) => (RevisionKind::Event, r),
			ResolvedNode::ExerciseGroupRevision(r) => (RevisionKind::ExerciseGroup, r),
			ResolvedNode::ExerciseRevision(r) => (RevisionKind::Exercise, r),
			ResolvedNode::GroupedExerciseRevision(r) => (RevisionKind::GroupedExercise, r),
			ResolvedNode::PageRevision(r) => (RevisionKind::Page, r),
			ResolvedNode::SolutionRevision(r) => (RevisionKind::Solution, r),
			ResolvedNode::VideoRevision(r) => (RevisionKind::Video, r),
			_ => return None,
		};
		Some(RevisionRef::new(kind, revision))
	}
}
