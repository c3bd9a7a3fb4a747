// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Taxonomy page data.

use lumen_common_i18n::EntityLabels;
use lumen_content_core::{
	ContentNode, ContentParser, ContentType, ResolvedNode, TaxonomyData, TaxonomyLink, TaxonomyLinks,
	TaxonomySubTerm, TaxonomyTerm, TaxonomyTermType,
};

use crate::exercise::{create_exercise, create_exercise_group, ExerciseInput};
use crate::urls::entity_url;

/// `topic-folder` for exercise folders, `topic` for every other term.
pub fn taxonomy_content_type(term_type: TaxonomyTermType) -> ContentType {
	if term_type.is_folder() {
		ContentType::TopicFolder
	} else {
		ContentType::Topic
	}
}

/// Sorts a term's live children into link lists, exercise content and
/// subterms.
pub fn build_taxonomy_data(
	parser: &dyn ContentParser,
	labels: &EntityLabels,
	term: &TaxonomyTerm,
) -> TaxonomyData {
	let mut exercises_content = Vec::new();
	let mut subterms = Vec::new();

	for child in live_children(term) {
		match child {
			ResolvedNode::Exercise(exercise) => exercises_content.push(create_exercise(
				parser,
				ExerciseInput::from_body(&exercise.body, false),
				None,
			)),
			ResolvedNode::ExerciseGroup(group) => {
				exercises_content.push(create_exercise_group(parser, group))
			}
			ResolvedNode::TaxonomyTerm(subterm) => {
				subterms.push(build_subterm(parser, labels, subterm))
			}
			_ => {}
		}
	}

	TaxonomyData {
		id: term.id,
		title: term.name.clone(),
		taxonomy_type: term.term_type,
		description: parse_description(parser, term.description.as_deref()),
		links: collect_links(labels, term),
		exercises_content,
		subterms,
	}
}

fn build_subterm(
	parser: &dyn ContentParser,
	labels: &EntityLabels,
	term: &TaxonomyTerm,
) -> TaxonomySubTerm {
	let folders = live_children(term)
		.filter_map(|child| match child {
			ResolvedNode::TaxonomyTerm(folder) if folder.term_type.is_folder() => Some(TaxonomyLink {
				title: folder.name.clone(),
				url: entity_url(folder.alias.as_deref(), folder.id),
				id: folder.id,
			}),
			_ => None,
		})
		.collect();

	TaxonomySubTerm {
		id: term.id,
		title: term.name.clone(),
		url: entity_url(term.alias.as_deref(), term.id),
		description: parse_description(parser, term.description.as_deref()),
		links: collect_links(labels, term),
		folders,
	}
}

fn live_children(term: &TaxonomyTerm) -> impl Iterator<Item = &ResolvedNode> {
	term.children.nodes.iter().filter(|child| !child.is_trashed())
}

fn collect_links(labels: &EntityLabels, term: &TaxonomyTerm) -> TaxonomyLinks {
	let mut links = TaxonomyLinks::default();
	for child in live_children(term) {
		let Some(id) = child.id() else {
			continue;
		};
		let link = |title: Option<&str>| TaxonomyLink {
			title: title.unwrap_or_default().to_string(),
			url: entity_url(child.alias(), id),
			id,
		};
		match child {
			ResolvedNode::Article(n) => links
				.articles
				.push(link(n.current_revision.as_ref().and_then(|r| r.title.as_deref()))),
			ResolvedNode::Video(n) => links
				.videos
				.push(link(n.current_revision.as_ref().and_then(|r| r.title.as_deref()))),
			ResolvedNode::Applet(n) => links
				.applets
				.push(link(n.current_revision.as_ref().and_then(|r| r.title.as_deref()))),
			ResolvedNode::Course(n) => links
				.courses
				.push(link(n.current_revision.as_ref().and_then(|r| r.title.as_deref()))),
			ResolvedNode::Event(n) => links
				.events
				.push(link(n.current_revision.as_ref().and_then(|r| r.title.as_deref()))),
			ResolvedNode::Exercise(_) => links.exercises.push(link(Some(labels.exercise))),
			ResolvedNode::ExerciseGroup(_) => {
				links.exercises.push(link(Some(labels.exercise_group)))
			}
			_ => {}
		}
	}
	links
}

fn parse_description(
	parser: &dyn ContentParser,
	description: Option<&str>,
) -> Option<Vec<ContentNode>> {
	let nodes = parser.parse(description);
	(!nodes.is_empty()).then_some(nodes)
}
