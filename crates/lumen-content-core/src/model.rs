// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Entities as returned by the content API.
//!
//! [`ResolvedNode`] is discriminated by the API's `__typename`. Each variant
//! owns a struct with exactly the fields that type carries, so the pipeline
//! can only read what the tag guarantees. Optional API fields are `Option`s;
//! missing lists deserialize as empty.

use serde::{Deserialize, Serialize};

use crate::revision::Revision;

/// One entity returned by a `uuid` lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__typename")]
pub enum ResolvedNode {
	Applet(Applet),
	Article(Article),
	Course(Course),
	CoursePage(CoursePage),
	Event(Event),
	Exercise(Exercise),
	ExerciseGroup(ExerciseGroup),
	GroupedExercise(GroupedExercise),
	Page(Page),
	Solution(Solution),
	TaxonomyTerm(TaxonomyTerm),
	User(User),
	Video(Video),
	AppletRevision(Revision),
	ArticleRevision(Revision),
	CoursePageRevision(Revision),
	CourseRevision(Revision),
	EventRevision(Revision),
	ExerciseGroupRevision(Revision),
	ExerciseRevision(Revision),
	GroupedExerciseRevision(Revision),
	PageRevision(Revision),
	SolutionRevision(Revision),
	VideoRevision(Revision),
	/// Any `__typename` outside the set above.
	#[serde(other)]
	Unknown,
}

impl ResolvedNode {
	pub fn typename(&self) -> &'static str {
		match self {
			ResolvedNode::Applet(_) => "Applet",
			ResolvedNode::Article(_) => "Article",
			ResolvedNode::Course(_) => "Course",
			ResolvedNode::CoursePage(_) => "CoursePage",
			ResolvedNode::Event(_) => "Event",
			ResolvedNode::Exercise(_) => "Exercise",
			ResolvedNode::ExerciseGroup(_) => "ExerciseGroup",
			ResolvedNode::GroupedExercise(_) => "GroupedExercise",
			ResolvedNode::Page(_) => "Page",
			ResolvedNode::Solution(_) => "Solution",
			ResolvedNode::TaxonomyTerm(_) => "TaxonomyTerm",
			ResolvedNode::User(_) => "User",
			ResolvedNode::Video(_) => "Video",
			ResolvedNode::AppletRevision(_) => "AppletRevision",
			ResolvedNode::ArticleRevision(_) => "ArticleRevision",
			ResolvedNode::CoursePageRevision(_) => "CoursePageRevision",
			ResolvedNode::CourseRevision(_) => "CourseRevision",
			ResolvedNode::EventRevision(_) => "EventRevision",
			ResolvedNode::ExerciseGroupRevision(_) => "ExerciseGroupRevision",
			ResolvedNode::ExerciseRevision(_) => "ExerciseRevision",
			ResolvedNode::GroupedExerciseRevision(_) => "GroupedExerciseRevision",
			ResolvedNode::PageRevision(_) => "PageRevision",
			ResolvedNode::SolutionRevision(_) => "SolutionRevision",
			ResolvedNode::VideoRevision(_) => "VideoRevision",
			ResolvedNode::Unknown => "Unknown",
		}
	}

	pub fn id(&self) -> Option<u64> {
		match self {
			ResolvedNode::Applet(n) => Some(n.id),
			ResolvedNode::Article(n) => Some(n.id),
			ResolvedNode::Course(n) => Some(n.id),
			ResolvedNode::CoursePage(n) => Some(n.id),
			ResolvedNode::Event(n) => Some(n.id),
			ResolvedNode::Exercise(n) => Some(n.body.id),
			ResolvedNode::ExerciseGroup(n) => Some(n.id),
			ResolvedNode::GroupedExercise(n) => Some(n.body.id),
			ResolvedNode::Page(n) => Some(n.id),
			ResolvedNode::Solution(n) => Some(n.id),
			ResolvedNode::TaxonomyTerm(n) => Some(n.id),
			ResolvedNode::User(n) => Some(n.id),
			ResolvedNode::Video(n) => Some(n.id),
			ResolvedNode::AppletRevision(r)
			| ResolvedNode::ArticleRevision(r)
			| ResolvedNode::CoursePageRevision(r)
			| ResolvedNode::CourseRevision(r)
			| ResolvedNode::EventRevision(r)
			| ResolvedNode::ExerciseGroupRevision(r)
			| ResolvedNode::ExerciseRevision(r)
			| ResolvedNode::GroupedExerciseRevision(r)
			| ResolvedNode::PageRevision(r)
			| ResolvedNode::SolutionRevision(r)
			| ResolvedNode::VideoRevision(r) => Some(r.id),
			ResolvedNode::Unknown => None,
		}
	}

	/// The entity's alias path, for the variants that have one.
	pub fn alias(&self) -> Option<&str> {
		let alias = match self {
			ResolvedNode::Applet(n) => &n.alias,
			ResolvedNode::Article(n) => &n.alias,
			ResolvedNode::Course(n) => &n.alias,
			ResolvedNode::CoursePage(n) => &n.alias,
			ResolvedNode::Event(n) => &n.alias,
			ResolvedNode::Exercise(n) => &n.body.alias,
			ResolvedNode::ExerciseGroup(n) => &n.alias,
			ResolvedNode::GroupedExercise(n) => &n.body.alias,
			ResolvedNode::Page(n) => &n.alias,
			ResolvedNode::Solution(n) => &n.alias,
			ResolvedNode::TaxonomyTerm(n) => &n.alias,
			ResolvedNode::User(n) => &n.alias,
			ResolvedNode::Video(n) => &n.alias,
			_ => return None,
		};
		alias.as_deref().filter(|a| !a.is_empty())
	}

	/// Whether the entity is in the trash. Revisions and users are never trashed
	/// in the sense the renderer cares about.
	pub fn is_trashed(&self) -> bool {
		match self {
			ResolvedNode::Applet(n) => n.trashed,
			ResolvedNode::Article(n) => n.trashed,
			ResolvedNode::Course(n) => n.trashed,
			ResolvedNode::CoursePage(n) => n.trashed,
			ResolvedNode::Event(n) => n.trashed,
			ResolvedNode::Exercise(n) => n.body.trashed,
			ResolvedNode::ExerciseGroup(n) => n.trashed,
			ResolvedNode::GroupedExercise(n) => n.body.trashed,
			ResolvedNode::Page(n) => n.trashed,
			ResolvedNode::Solution(n) => n.trashed,
			ResolvedNode::TaxonomyTerm(n) => n.trashed,
			ResolvedNode::Video(n) => n.trashed,
			_ => false,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct License {
	pub id: u64,
	pub url: String,
	pub title: String,
	pub default: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub agreement: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub icon_href: Option<String>,
}

/// A GraphQL connection; only the nodes are used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection<T> {
	#[serde(default = "Vec::new")]
	pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
	fn default() -> Self {
		Self { nodes: Vec::new() }
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TotalCount {
	pub total_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdRef {
	pub id: u64,
}

/// One step of a taxonomy path as the navigation service reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationPathNode {
	pub label: String,
	pub url: Option<String>,
	pub id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigationPath {
	pub nodes: Vec<NavigationPathNode>,
}

/// Navigation attached to pages and taxonomy terms.
///
/// `data` is the JSON-encoded navigation tree the node belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Navigation {
	pub data: Option<String>,
	pub path: NavigationPath,
}

/// A taxonomy term an entity is filed under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaxonomyTermRef {
	pub id: u64,
	pub name: Option<String>,
	pub navigation: Option<Navigation>,
}

/// Revision shape for entities whose revisions only carry content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContentRevision {
	pub id: u64,
	pub content: Option<String>,
}

/// Revision shape for entities with a title (Page, Event, CoursePage, Course).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TitledRevision {
	pub id: u64,
	pub title: Option<String>,
	pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleRevisionData {
	pub id: u64,
	pub title: Option<String>,
	pub content: Option<String>,
	pub meta_title: Option<String>,
	pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoRevisionData {
	pub id: u64,
	pub title: Option<String>,
	pub url: Option<String>,
	pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppletRevisionData {
	pub id: u64,
	pub title: Option<String>,
	pub url: Option<String>,
	pub content: Option<String>,
	pub meta_title: Option<String>,
	pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<ArticleRevisionData>,
	pub license: Option<License>,
	pub revisions: Option<TotalCount>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<TitledRevision>,
	pub navigation: Option<Navigation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<VideoRevisionData>,
	pub license: Option<License>,
	pub revisions: Option<TotalCount>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Applet {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<AppletRevisionData>,
	pub license: Option<License>,
	pub revisions: Option<TotalCount>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<TitledRevision>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

/// Page reference as listed by a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoursePageRef {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<CoursePageRefRevision>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoursePageRefRevision {
	pub title: Option<String>,
	pub trashed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<TitledRevision>,
	pub pages: Vec<CoursePageRef>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

/// The course a course page belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseRef {
	pub id: u64,
	pub alias: Option<String>,
	pub current_revision: Option<TitledRevision>,
	pub pages: Vec<CoursePageRef>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoursePage {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<TitledRevision>,
	pub license: Option<License>,
	pub revisions: Option<TotalCount>,
	pub course: CourseRef,
}

/// The solution attached to an exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolutionRef {
	pub id: u64,
	pub trashed: bool,
	pub license: Option<License>,
	pub current_revision: Option<ContentRevision>,
}

/// Fields shared by `Exercise` and `GroupedExercise`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExerciseBody {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<ContentRevision>,
	pub license: Option<License>,
	pub revisions: Option<TotalCount>,
	pub solution: Option<SolutionRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Exercise {
	#[serde(flatten)]
	pub body: ExerciseBody,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

/// The group a grouped exercise belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExerciseGroupRef {
	pub id: u64,
	pub alias: Option<String>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupedExercise {
	#[serde(flatten)]
	pub body: ExerciseBody,
	pub exercise_group: Option<ExerciseGroupRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExerciseGroup {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub current_revision: Option<ContentRevision>,
	pub license: Option<License>,
	pub revisions: Option<TotalCount>,
	pub taxonomy_terms: Connection<TaxonomyTermRef>,
	pub exercises: Vec<GroupedExercise>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Solution {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	pub exercise: Option<IdRef>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxonomyTermType {
	Root,
	Blog,
	Curriculum,
	CurriculumTopic,
	CurriculumTopicFolder,
	Forum,
	ForumCategory,
	Locale,
	Subject,
	Topic,
	TopicFolder,
	#[default]
	#[serde(other)]
	Other,
}

impl TaxonomyTermType {
	/// Exercise folders render as a single list of exercises.
	pub fn is_folder(&self) -> bool {
		matches!(
			self,
			TaxonomyTermType::TopicFolder | TaxonomyTermType::CurriculumTopicFolder
		)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxonomyTerm {
	pub id: u64,
	pub alias: Option<String>,
	pub trashed: bool,
	#[serde(rename = "type")]
	pub term_type: TaxonomyTermType,
	pub name: String,
	pub description: Option<String>,
	pub navigation: Option<Navigation>,
	pub children: Connection<ResolvedNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
	pub id: u64,
	pub alias: Option<String>,
	pub username: String,
	pub description: Option<String>,
	pub last_login: Option<String>,
	pub date: Option<String>,
	pub active_reviewer: bool,
	pub active_author: bool,
	pub active_donor: bool,
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn dispatches_on_typename() {
		let node: ResolvedNode = serde_json::from_value(json!({
			"__typename": "Article",
			"id": 1855,
			"alias": "/mathe/1855/parabel",
			"trashed": false,
			"currentRevision": { "id": 2, "title": "Parabel", "metaDescription": "Alles über Parabeln" },
			"revisions": { "totalCount": 3 }
		}))
		.unwrap();

		let ResolvedNode::Article(article) = &node else {
			panic!("expected article, got {}", node.typename());
		};
		assert_eq!(article.id, 1855);
		assert_eq!(
			article.current_revision.as_ref().unwrap().meta_description.as_deref(),
			Some("Alles über Parabeln")
		);
		assert_eq!(article.revisions.unwrap().total_count, 3);
		assert!(article.taxonomy_terms.nodes.is_empty());
		assert_eq!(node.alias(), Some("/mathe/1855/parabel"));
	}

	#[test]
	fn unknown_typename_is_captured() {
		let node: ResolvedNode =
			serde_json::from_value(json!({ "__typename": "Comment", "id": 9 })).unwrap();
		assert_eq!(node, ResolvedNode::Unknown);
		assert_eq!(node.id(), None);
	}

	#[test]
	fn grouped_exercise_flattens_body() {
		let node: ResolvedNode = serde_json::from_value(json!({
			"__typename": "GroupedExercise",
			"id": 7,
			"currentRevision": { "id": 70, "content": "{}" },
			"solution": { "id": 8, "trashed": true },
			"exerciseGroup": { "id": 6, "alias": "/6" }
		}))
		.unwrap();

		let ResolvedNode::GroupedExercise(exercise) = node else {
			panic!("expected grouped exercise");
		};
		assert_eq!(exercise.body.id, 7);
		assert!(exercise.body.solution.unwrap().trashed);
		assert_eq!(exercise.exercise_group.unwrap().id, 6);
	}

	#[test]
	fn taxonomy_children_are_nodes() {
		let node: ResolvedNode = serde_json::from_value(json!({
			"__typename": "TaxonomyTerm",
			"id": 5,
			"type": "topicFolder",
			"name": "Aufgaben",
			"children": { "nodes": [
				{ "__typename": "Article", "id": 1, "alias": "/1" },
				{ "__typename": "TaxonomyTerm", "id": 2, "type": "curriculumTopic", "name": "Sub" }
			] }
		}))
		.unwrap();

		let ResolvedNode::TaxonomyTerm(term) = node else {
			panic!("expected taxonomy term");
		};
		assert!(term.term_type.is_folder());
		assert_eq!(term.children.nodes.len(), 2);
		assert_eq!(term.children.nodes[1].typename(), "TaxonomyTerm");
	}

	#[test]
	fn empty_alias_counts_as_missing() {
		let node: ResolvedNode =
			serde_json::from_value(json!({ "__typename": "Page", "id": 3, "alias": "" })).unwrap();
		assert_eq!(node.alias(), None);
	}

	#[test]
	fn missing_connections_are_empty() {
		fn assert_eq_impl<T: Eq>() {}
		assert_eq_impl::<Connection<TaxonomyTermRef>>();
		assert_eq_impl::<Article>();

		let node: ResolvedNode = serde_json::from_value(json!({
			"__typename": "TaxonomyTerm",
			"id": 7,
			"type": "topic",
			"name": "Brüche",
			"children": {}
		}))
		.unwrap();
		let ResolvedNode::TaxonomyTerm(term) = node else {
			panic!("expected taxonomy term");
		};
		assert!(term.children.nodes.is_empty());
	}

	proptest! {
		#[test]
		fn unlisted_typenames_are_unknown(tag in "Z[A-Za-z]{2,16}", id in 1u64..1_000_000) {
			let node: ResolvedNode =
				serde_json::from_value(json!({ "__typename": tag, "id": id })).unwrap();
			prop_assert_eq!(node, ResolvedNode::Unknown);
		}
	}
}
