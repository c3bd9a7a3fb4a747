// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page view models handed to the renderer.
//!
//! [`PageViewModel`] serializes with a `kind` discriminator. Each kind has its
//! own struct so a field that belongs to one kind cannot appear on another.

use serde::Serialize;

use crate::content::ContentNode;
use crate::model::{License, TaxonomyTermType};
use crate::revision::{Author, RevisionKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum PageViewModel {
	#[serde(rename = "redirect")]
	Redirect(RedirectPage),
	#[serde(rename = "error")]
	Error(ErrorPage),
	#[serde(rename = "single-entity")]
	SingleEntity(Box<SingleEntityPage>),
	#[serde(rename = "taxonomy")]
	Taxonomy(Box<TaxonomyPage>),
	#[serde(rename = "revision")]
	Revision(Box<RevisionPage>),
	#[serde(rename = "user/profile")]
	UserProfile(Box<UserProfilePage>),
}

impl PageViewModel {
	pub fn redirect(target: impl Into<String>) -> Self {
		PageViewModel::Redirect(RedirectPage {
			target: target.into(),
		})
	}

	/// The 404 page. `message` is a short generic hint, never diagnostics.
	pub fn not_found(message: Option<&str>) -> Self {
		PageViewModel::Error(ErrorPage {
			error_data: ErrorData {
				code: 404,
				message: message.map(str::to_string),
			},
		})
	}

	/// The `kind` discriminator this view model serializes with.
	pub fn kind(&self) -> &'static str {
		match self {
			PageViewModel::Redirect(_) => "redirect",
			PageViewModel::Error(_) => "error",
			PageViewModel::SingleEntity(_) => "single-entity",
			PageViewModel::Taxonomy(_) => "taxonomy",
			PageViewModel::Revision(_) => "revision",
			PageViewModel::UserProfile(_) => "user/profile",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectPage {
	pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPage {
	pub error_data: ErrorData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorData {
	pub code: u16,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// `<head>` data shared by every renderable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadData {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub content_type: ContentType,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta_image: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
	#[serde(rename = "article")]
	Article,
	#[serde(rename = "applet")]
	Applet,
	#[serde(rename = "course-page")]
	CoursePage,
	#[serde(rename = "event")]
	Event,
	#[serde(rename = "exercisegroup")]
	ExerciseGroup,
	#[serde(rename = "groupedexercise")]
	GroupedExercise,
	#[serde(rename = "page")]
	Page,
	#[serde(rename = "revision")]
	Revision,
	#[serde(rename = "text-exercise")]
	TextExercise,
	#[serde(rename = "topic")]
	Topic,
	#[serde(rename = "topic-folder")]
	TopicFolder,
	#[serde(rename = "video")]
	Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityTypename {
	Applet,
	Article,
	CoursePage,
	Event,
	Exercise,
	ExerciseGroup,
	GroupedExercise,
	Page,
	Video,
}

/// Microdata wrapper the renderer puts around the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaData {
	pub wrap_with_item_type: String,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub use_article_tag: bool,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub set_content_as_section: bool,
}

impl SchemaData {
	pub fn article() -> Self {
		Self {
			wrap_with_item_type: "http://schema.org/Article".to_string(),
			use_article_tag: true,
			set_content_as_section: true,
		}
	}

	pub fn video_object() -> Self {
		Self {
			wrap_with_item_type: "http://schema.org/VideoObject".to_string(),
			use_article_tag: false,
			set_content_as_section: false,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
	Article,
	Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
	pub label: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub ellipsis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryNavigationEntry {
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<u64>,
	pub active: bool,
}

/// One tile of the recommendation strip under the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonEntry {
	pub title: String,
	pub text: String,
	pub url: String,
	pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoursePageEntry {
	pub title: String,
	pub url: String,
	pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseData {
	pub id: u64,
	pub title: String,
	pub pages: Vec<CoursePageEntry>,
	/// 1-based position of the current page in `pages`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_page: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub next_page_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityData {
	pub id: u64,
	pub typename: EntityTypename,
	pub trashed: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub revision_id: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub content: Vec<ContentNode>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub license_data: Option<License>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub schema_data: Option<SchemaData>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category_icon: Option<CategoryIcon>,
	pub invite_to_edit: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub unrevised_revisions: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub course_data: Option<CourseData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleEntityPage {
	pub entity_data: EntityData,
	pub newsletter_popup: bool,
	pub meta_data: HeadData,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub horizon_data: Option<Vec<HorizonEntry>>,
	pub cache_key: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub breadcrumbs_data: Option<Vec<BreadcrumbEntry>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary_navigation_data: Option<Vec<SecondaryNavigationEntry>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyLink {
	pub title: String,
	pub url: String,
	pub id: u64,
}

/// Links grouped by entity type, shared by taxonomy pages and their subterms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaxonomyLinks {
	pub articles: Vec<TaxonomyLink>,
	pub exercises: Vec<TaxonomyLink>,
	pub videos: Vec<TaxonomyLink>,
	pub applets: Vec<TaxonomyLink>,
	pub courses: Vec<TaxonomyLink>,
	pub events: Vec<TaxonomyLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxonomySubTerm {
	pub id: u64,
	pub title: String,
	pub url: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Vec<ContentNode>>,
	#[serde(flatten)]
	pub links: TaxonomyLinks,
	pub folders: Vec<TaxonomyLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyData {
	pub id: u64,
	pub title: String,
	pub taxonomy_type: TaxonomyTermType,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Vec<ContentNode>>,
	#[serde(flatten)]
	pub links: TaxonomyLinks,
	pub exercises_content: Vec<ContentNode>,
	pub subterms: Vec<TaxonomySubTerm>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyPage {
	pub taxonomy_data: TaxonomyData,
	pub newsletter_popup: bool,
	pub meta_data: HeadData,
	pub cache_key: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub breadcrumbs_data: Option<Vec<BreadcrumbEntry>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub secondary_navigation_data: Option<Vec<SecondaryNavigationEntry>>,
}

/// One side of a revision comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionView {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta_title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub meta_description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<Vec<ContentNode>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionData {
	#[serde(rename = "type")]
	pub entity_type: &'static str,
	pub repository_id: u64,
	pub typename: RevisionKind,
	pub this_revision: RevisionView,
	pub current_revision: RevisionView,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub changes: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user: Option<Author>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionPage {
	pub newsletter_popup: bool,
	pub revision_data: RevisionData,
	pub meta_data: HeadData,
	pub cache_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
	pub id: u64,
	pub username: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<Vec<ContentNode>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_login: Option<String>,
	pub active_reviewer: bool,
	pub active_author: bool,
	pub active_donor: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfilePage {
	pub newsletter_popup: bool,
	pub user_data: UserData,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn error_page_shape() {
		let page = PageViewModel::not_found(Some("Unknown content type!"));
		assert_eq!(
			serde_json::to_value(&page).unwrap(),
			json!({ "kind": "error", "errorData": { "code": 404, "message": "Unknown content type!" } })
		);
	}

	#[test]
	fn redirect_shape() {
		let page = PageViewModel::redirect("/user/1/admin");
		assert_eq!(page.kind(), "redirect");
		assert_eq!(
			serde_json::to_value(&page).unwrap(),
			json!({ "kind": "redirect", "target": "/user/1/admin" })
		);
	}

	#[test]
	fn schema_data_omits_false_flags() {
		assert_eq!(
			serde_json::to_value(SchemaData::video_object()).unwrap(),
			json!({ "wrapWithItemType": "http://schema.org/VideoObject" })
		);
	}

	#[test]
	fn revision_view_omits_absent_fields() {
		let value = serde_json::to_value(RevisionView::default()).unwrap();
		assert_eq!(value, json!({}));

		let partial = RevisionView {
			id: Some(19),
			content: Some(Vec::new()),
			..Default::default()
		};
		assert_eq!(
			serde_json::to_value(partial).unwrap(),
			json!({ "id": 19, "content": [] })
		);
	}
}
