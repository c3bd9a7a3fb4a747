// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Synchronous view model assembly for nodes that render directly.
//!
//! Everything here is pure: the resolver fetches, then hands the node to
//! [`assemble_page`] and patches in the meta image and link aliases
//! afterwards.

use lumen_common_i18n::{strings, Instance};
use lumen_content_core::{
	CategoryIcon, ContentNode, ContentParser, ContentType, EntityData, EntityTypename,
	ExerciseBody, GeogebraEmbed, HeadData, InlineLicense, PageViewModel, ResolvedNode,
	RevisionPage, SchemaData, SingleEntityPage, TaxonomyPage, TotalCount, VideoEmbed,
};

use crate::breadcrumbs::create_breadcrumbs;
use crate::course::course_data;
use crate::exercise::{create_exercise, create_exercise_group, ExerciseInput};
use crate::horizon::create_horizon;
use crate::metadata::{describe, page_title};
use crate::navigation::create_navigation;
use crate::revision::revision_data;
use crate::taxonomy::{build_taxonomy_data, taxonomy_content_type};

pub const UNKNOWN_CONTENT_TYPE: &str = "Unknown content type!";
pub const NOT_A_REVISION: &str = "Something went wrong, this is not a revision!";

/// Per-request inputs of the assembler.
pub struct PageContext<'a> {
	pub parser: &'a dyn ContentParser,
	pub instance: Instance,
	pub cache_key: String,
	/// Whether the recommendation strip is shown.
	pub horizon: bool,
}

/// Builds the `single-entity` or `taxonomy` view model for a renderable
/// node. Any other node yields the 404 page.
pub fn assemble_page(node: &ResolvedNode, ctx: &PageContext<'_>) -> PageViewModel {
	let labels = &strings(ctx.instance).entities;
	let title = page_title(node, ctx.instance);
	let parser = ctx.parser;

	let entity = match node {
		ResolvedNode::TaxonomyTerm(term) => {
			return PageViewModel::Taxonomy(Box::new(TaxonomyPage {
				taxonomy_data: build_taxonomy_data(parser, labels, term),
				newsletter_popup: false,
				meta_data: HeadData {
					title,
					content_type: taxonomy_content_type(term.term_type),
					meta_image: None,
					meta_description: None,
				},
				cache_key: ctx.cache_key.clone(),
				breadcrumbs_data: create_breadcrumbs(node),
				secondary_navigation_data: create_navigation(node),
			}));
		}
		ResolvedNode::Exercise(exercise) => exercise_entity(
			EntityTypename::Exercise,
			labels.exercise,
			&exercise.body,
			vec![create_exercise(
				parser,
				ExerciseInput::from_body(&exercise.body, false),
				None,
			)],
		),
		ResolvedNode::GroupedExercise(exercise) => exercise_entity(
			EntityTypename::GroupedExercise,
			labels.grouped_exercise,
			&exercise.body,
			vec![create_exercise(
				parser,
				ExerciseInput::from_body(&exercise.body, true),
				None,
			)],
		),
		ResolvedNode::ExerciseGroup(group) => Entity {
			data: EntityData {
				unrevised_revisions: unrevised(group.revisions),
				invite_to_edit: true,
				..entity_data(
					group.id,
					EntityTypename::ExerciseGroup,
					group.trashed,
					vec![create_exercise_group(parser, group)],
				)
			},
			content_type: ContentType::ExerciseGroup,
			label: labels.exercise_group,
			authored_description: None,
		},
		ResolvedNode::Event(event) => {
			let revision = event.current_revision.as_ref();
			Entity {
				data: entity_data(
					event.id,
					EntityTypename::Event,
					event.trashed,
					parser.parse(revision.and_then(|r| r.content.as_deref())),
				),
				content_type: ContentType::Event,
				label: labels.event,
				authored_description: None,
			}
		}
		ResolvedNode::Page(page) => {
			let revision = page.current_revision.as_ref();
			Entity {
				data: EntityData {
					revision_id: revision.map(|r| r.id),
					title: Some(owned_title(revision.and_then(|r| r.title.as_deref()))),
					..entity_data(
						page.id,
						EntityTypename::Page,
						page.trashed,
						parser.parse(revision.and_then(|r| r.content.as_deref())),
					)
				},
				content_type: ContentType::Page,
				label: labels.page,
				authored_description: None,
			}
		}
		ResolvedNode::Article(article) => {
			let revision = article.current_revision.as_ref();
			Entity {
				data: EntityData {
					title: Some(owned_title(revision.and_then(|r| r.title.as_deref()))),
					license_data: article.license.clone(),
					schema_data: Some(SchemaData::article()),
					category_icon: Some(CategoryIcon::Article),
					invite_to_edit: true,
					unrevised_revisions: unrevised(article.revisions),
					..entity_data(
						article.id,
						EntityTypename::Article,
						article.trashed,
						parser.parse(revision.and_then(|r| r.content.as_deref())),
					)
				},
				content_type: ContentType::Article,
				label: labels.article,
				authored_description: revision.and_then(|r| r.meta_description.as_deref()),
			}
		}
		ResolvedNode::Video(video) => {
			let revision = video.current_revision.as_ref();
			let mut content = vec![ContentNode::Video(VideoEmbed {
				src: revision.and_then(|r| r.url.clone()).unwrap_or_default(),
				license: video.license.as_ref().map(InlineLicense::from),
			})];
			content.extend(parser.parse(revision.and_then(|r| r.content.as_deref())));
			Entity {
				data: EntityData {
					title: Some(owned_title(revision.and_then(|r| r.title.as_deref()))),
					license_data: video.license.clone(),
					schema_data: Some(SchemaData::video_object()),
					category_icon: Some(CategoryIcon::Video),
					invite_to_edit: true,
					unrevised_revisions: unrevised(video.revisions),
					..entity_data(video.id, EntityTypename::Video, video.trashed, content)
				},
				content_type: ContentType::Video,
				label: labels.video,
				authored_description: None,
			}
		}
		ResolvedNode::Applet(applet) => {
			let revision = applet.current_revision.as_ref();
			let mut content = vec![ContentNode::Geogebra(GeogebraEmbed {
				id: revision.and_then(|r| r.url.clone()).unwrap_or_default(),
			})];
			content.extend(parser.parse(revision.and_then(|r| r.content.as_deref())));
			Entity {
				data: EntityData {
					title: Some(owned_title(revision.and_then(|r| r.title.as_deref()))),
					license_data: applet.license.clone(),
					schema_data: Some(SchemaData::video_object()),
					invite_to_edit: true,
					unrevised_revisions: unrevised(applet.revisions),
					..entity_data(applet.id, EntityTypename::Applet, applet.trashed, content)
				},
				content_type: ContentType::Applet,
				label: labels.applet,
				authored_description: revision.and_then(|r| r.meta_description.as_deref()),
			}
		}
		ResolvedNode::CoursePage(page) => {
			let revision = page.current_revision.as_ref();
			Entity {
				data: EntityData {
					title: Some(owned_title(revision.and_then(|r| r.title.as_deref()))),
					license_data: page.license.clone(),
					schema_data: Some(SchemaData::article()),
					category_icon: Some(CategoryIcon::Article),
					invite_to_edit: true,
					unrevised_revisions: unrevised(page.revisions),
					course_data: Some(course_data(page)),
					..entity_data(
						page.id,
						EntityTypename::CoursePage,
						page.trashed,
						parser.parse(revision.and_then(|r| r.content.as_deref())),
					)
				},
				content_type: ContentType::CoursePage,
				label: labels.course_page,
				authored_description: None,
			}
		}
		_ => return PageViewModel::not_found(Some(UNKNOWN_CONTENT_TYPE)),
	};

	let meta_description = describe(
		entity.authored_description,
		&entity.data.content,
		entity.label,
		entity.data.title.as_deref(),
	);

	let secondary_navigation_data = create_navigation(node);
	let breadcrumbs_data = match entity.data.typename {
		EntityTypename::Event => None,
		EntityTypename::Page if secondary_navigation_data.is_some() => None,
		_ => create_breadcrumbs(node),
	};

	PageViewModel::SingleEntity(Box::new(SingleEntityPage {
		newsletter_popup: entity.data.typename == EntityTypename::Page,
		entity_data: entity.data,
		meta_data: HeadData {
			title,
			content_type: entity.content_type,
			meta_image: None,
			meta_description,
		},
		horizon_data: ctx.horizon.then(|| create_horizon(&ctx.cache_key)),
		cache_key: ctx.cache_key.clone(),
		breadcrumbs_data,
		secondary_navigation_data,
	}))
}

/// Builds the `revision` view model, or the 404 page for anything that is
/// not a revision with a repository.
pub fn assemble_revision(
	parser: &dyn ContentParser,
	node: &ResolvedNode,
	instance: Instance,
	cache_key: String,
) -> PageViewModel {
	let Some(revision) = node.as_revision() else {
		return PageViewModel::not_found(Some(NOT_A_REVISION));
	};
	let Some(revision_data) = revision_data(parser, revision) else {
		return PageViewModel::not_found(Some(NOT_A_REVISION));
	};

	PageViewModel::Revision(Box::new(RevisionPage {
		newsletter_popup: false,
		revision_data,
		meta_data: HeadData {
			title: page_title(node, instance),
			content_type: ContentType::Revision,
			meta_image: None,
			meta_description: Some(String::new()),
		},
		cache_key,
	}))
}

/// Every content sequence of a view model that may hold links.
pub fn page_content_mut(page: &mut PageViewModel) -> Vec<&mut Vec<ContentNode>> {
	match page {
		PageViewModel::SingleEntity(page) => vec![&mut page.entity_data.content],
		PageViewModel::Taxonomy(page) => {
			let data = &mut page.taxonomy_data;
			let mut sequences = vec![&mut data.exercises_content];
			sequences.extend(data.description.as_mut());
			for subterm in &mut data.subterms {
				sequences.extend(subterm.description.as_mut());
			}
			sequences
		}
		_ => Vec::new(),
	}
}

/// Sets the social preview image on pages that have `<head>` data.
pub fn set_meta_image(page: &mut PageViewModel, image: Option<String>) {
	match page {
		PageViewModel::SingleEntity(page) => page.meta_data.meta_image = image,
		PageViewModel::Taxonomy(page) => page.meta_data.meta_image = image,
		_ => {}
	}
}

struct Entity<'a> {
	data: EntityData,
	content_type: ContentType,
	label: &'a str,
	authored_description: Option<&'a str>,
}

fn exercise_entity(
	typename: EntityTypename,
	label: &'static str,
	body: &ExerciseBody,
	content: Vec<ContentNode>,
) -> Entity<'static> {
	let content_type = match typename {
		EntityTypename::GroupedExercise => ContentType::GroupedExercise,
		_ => ContentType::TextExercise,
	};
	Entity {
		data: EntityData {
			invite_to_edit: true,
			unrevised_revisions: unrevised(body.revisions),
			..entity_data(body.id, typename, body.trashed, content)
		},
		content_type,
		label,
		authored_description: None,
	}
}

fn entity_data(
	id: u64,
	typename: EntityTypename,
	trashed: bool,
	content: Vec<ContentNode>,
) -> EntityData {
	EntityData {
		id,
		typename,
		trashed,
		revision_id: None,
		title: None,
		content,
		license_data: None,
		schema_data: None,
		category_icon: None,
		invite_to_edit: false,
		unrevised_revisions: None,
		course_data: None,
	}
}

fn owned_title(title: Option<&str>) -> String {
	title.unwrap_or_default().to_string()
}

fn unrevised(revisions: Option<TotalCount>) -> Option<u64> {
	revisions.map(|revisions| revisions.total_count)
}
