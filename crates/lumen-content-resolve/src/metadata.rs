// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page titles and meta descriptions.

use lumen_common_i18n::{strings, EntityLabels, Instance};
use lumen_content_core::{
	ContentNode, ResolvedNode, RevisionKind, TaxonomyTermRef, TaxonomyTermType,
};

/// Number of leading content nodes sampled for a description.
const DESCRIPTION_SAMPLE_NODES: usize = 10;
/// Shorter derived descriptions are not worth showing.
const DESCRIPTION_MIN_CHARS: usize = 50;
/// Derived descriptions are cut at the first space after this many chars.
const DESCRIPTION_CUT_AFTER: usize = 135;

/// The `<title>` of a page, ending in the instance's slogan.
///
/// `None` for nodes that never render a page of their own.
pub fn page_title(node: &ResolvedNode, instance: Instance) -> Option<String> {
	let strings = strings(instance);
	let base = base_title(node, &strings.entities)?;
	Some(format!("{base} - {}", strings.slogan))
}

fn base_title(node: &ResolvedNode, labels: &EntityLabels) -> Option<String> {
	if let Some(revision) = node.as_revision() {
		let name = revision
			.title()
			.filter(|title| !title.is_empty())
			.unwrap_or_else(|| revision_label(revision.kind, labels));
		return Some(format!("{name} ({})", labels.revision));
	}

	let title = match node {
		ResolvedNode::Article(n) => own_title(n.current_revision.as_ref().and_then(|r| r.title.as_deref()), labels.article),
		ResolvedNode::Page(n) => own_title(n.current_revision.as_ref().and_then(|r| r.title.as_deref()), labels.page),
		ResolvedNode::Video(n) => own_title(n.current_revision.as_ref().and_then(|r| r.title.as_deref()), labels.video),
		ResolvedNode::Applet(n) => own_title(n.current_revision.as_ref().and_then(|r| r.title.as_deref()), labels.applet),
		ResolvedNode::Event(n) => own_title(n.current_revision.as_ref().and_then(|r| r.title.as_deref()), labels.event),
		ResolvedNode::CoursePage(n) => own_title(
			n.current_revision.as_ref().and_then(|r| r.title.as_deref()),
			labels.course_page,
		),
		ResolvedNode::Course(n) => own_title(n.current_revision.as_ref().and_then(|r| r.title.as_deref()), labels.course),
		ResolvedNode::Exercise(n) => term_title(&n.taxonomy_terms.nodes, labels.exercise),
		ResolvedNode::GroupedExercise(n) => term_title(
			n.exercise_group
				.as_ref()
				.map(|group| group.taxonomy_terms.nodes.as_slice())
				.unwrap_or_default(),
			labels.grouped_exercise,
		),
		ResolvedNode::ExerciseGroup(n) => term_title(&n.taxonomy_terms.nodes, labels.exercise_group),
		ResolvedNode::TaxonomyTerm(n) => {
			let name = own_title(Some(n.name.as_str()), labels.taxonomy_term);
			match n.term_type {
				TaxonomyTermType::Topic | TaxonomyTermType::CurriculumTopic => {
					format!("{name} ({})", labels.topic)
				}
				TaxonomyTermType::TopicFolder | TaxonomyTermType::CurriculumTopicFolder => {
					format!("{name} ({})", labels.topic_folder)
				}
				_ => name,
			}
		}
		ResolvedNode::User(n) => own_title(Some(n.username.as_str()), labels.user),
		ResolvedNode::Solution(_) => labels.solution.to_string(),
		_ => return None,
	};
	Some(title)
}

fn own_title(title: Option<&str>, fallback: &str) -> String {
	title
		.map(str::trim)
		.filter(|title| !title.is_empty())
		.unwrap_or(fallback)
		.to_string()
}

/// Exercises have no title; they are named after the closest taxonomy term.
fn term_title(terms: &[TaxonomyTermRef], label: &str) -> String {
	match nearest_term_name(terms) {
		Some(name) => format!("{name} ({label})"),
		None => label.to_string(),
	}
}

/// The term with the deepest navigation path is the most specific one.
fn nearest_term_name(terms: &[TaxonomyTermRef]) -> Option<&str> {
	terms
		.iter()
		.filter(|term| term.name.as_deref().is_some_and(|name| !name.is_empty()))
		.max_by_key(|term| {
			term.navigation
				.as_ref()
				.map_or(0, |navigation| navigation.path.nodes.len())
		})
		.and_then(|term| term.name.as_deref())
}

/// Label of the entity a revision belongs to.
pub fn revision_label(kind: RevisionKind, labels: &EntityLabels) -> &'static str {
	match kind {
		RevisionKind::Applet => labels.applet,
		RevisionKind::Article => labels.article,
		RevisionKind::Course => labels.course,
		RevisionKind::CoursePage => labels.course_page,
		RevisionKind::Event => labels.event,
		RevisionKind::Exercise => labels.exercise,
		RevisionKind::ExerciseGroup => labels.exercise_group,
		RevisionKind::GroupedExercise => labels.grouped_exercise,
		RevisionKind::Page => labels.page,
		RevisionKind::Solution => labels.solution,
		RevisionKind::Video => labels.video,
	}
}

/// Derives a description from the first content nodes.
///
/// Returns `None` when the sampled text is shorter than 50 characters.
/// Longer text is cut after the first space following character 135 and
/// marked with ` …`.
pub fn meta_description(content: &[ContentNode]) -> Option<String> {
	let mut text = String::new();
	for node in content.iter().take(DESCRIPTION_SAMPLE_NODES) {
		node.collect_text(&mut text);
	}
	let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

	if text.chars().count() < DESCRIPTION_MIN_CHARS {
		return None;
	}

	let cut = text
		.char_indices()
		.skip(DESCRIPTION_CUT_AFTER)
		.find(|(_, c)| *c == ' ')
		.map(|(index, _)| index);

	Some(match cut {
		Some(index) => format!("{} …", &text[..index]),
		None => text,
	})
}

/// An authored description wins when non-empty; otherwise the content is
/// sampled, and as a last resort `"{label}: {title}"` is used.
pub fn describe(
	authored: Option<&str>,
	content: &[ContentNode],
	label: &str,
	title: Option<&str>,
) -> Option<String> {
	if let Some(authored) = authored.map(str::trim).filter(|d| !d.is_empty()) {
		return Some(authored.to_string());
	}
	meta_description(content).or_else(|| {
		title
			.map(str::trim)
			.filter(|title| !title.is_empty())
			.map(|title| format!("{label}: {title}"))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	fn node(value: serde_json::Value) -> ResolvedNode {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn article_title_has_slogan() {
		let article = node(json!({
			"__typename": "Article",
			"id": 1,
			"currentRevision": { "id": 2, "title": "Parabel" }
		}));
		assert_eq!(
			page_title(&article, Instance::De).as_deref(),
			Some("Parabel - lernen mit Serlo!")
		);
		assert_eq!(
			page_title(&article, Instance::En).as_deref(),
			Some("Parabel - learn with Serlo!")
		);
	}

	#[test]
	fn missing_title_uses_label() {
		let page = node(json!({ "__typename": "Page", "id": 1 }));
		assert_eq!(
			page_title(&page, Instance::De).as_deref(),
			Some("Seite - lernen mit Serlo!")
		);
	}

	#[test]
	fn exercise_title_uses_deepest_term() {
		let exercise = node(json!({
			"__typename": "Exercise",
			"id": 1,
			"taxonomyTerms": { "nodes": [
				{ "id": 5, "name": "Mathematik", "navigation": { "path": { "nodes": [{ "label": "Mathematik" }] } } },
				{ "id": 6, "name": "Brüche", "navigation": { "path": { "nodes": [
					{ "label": "Mathematik" }, { "label": "Zahlen" }, { "label": "Brüche" }
				] } } }
			] }
		}));
		assert_eq!(
			page_title(&exercise, Instance::De).as_deref(),
			Some("Brüche (Aufgabe) - lernen mit Serlo!")
		);
	}

	#[test]
	fn folder_title_has_type_label() {
		let folder = node(json!({
			"__typename": "TaxonomyTerm",
			"id": 1,
			"type": "topicFolder",
			"name": "Aufgaben zu Brüchen"
		}));
		assert_eq!(
			page_title(&folder, Instance::De).as_deref(),
			Some("Aufgaben zu Brüchen (Aufgabensammlung) - lernen mit Serlo!")
		);
		let subject = node(json!({ "__typename": "TaxonomyTerm", "id": 2, "type": "subject", "name": "Chemie" }));
		assert_eq!(
			page_title(&subject, Instance::De).as_deref(),
			Some("Chemie - lernen mit Serlo!")
		);
	}

	#[test]
	fn revision_title_has_revision_label() {
		let titled = node(json!({ "__typename": "ArticleRevision", "id": 1, "title": "Parabel" }));
		assert_eq!(
			page_title(&titled, Instance::De).as_deref(),
			Some("Parabel (Bearbeitung) - lernen mit Serlo!")
		);
		let untitled = node(json!({ "__typename": "ExerciseRevision", "id": 1, "title": "ignored" }));
		assert_eq!(
			page_title(&untitled, Instance::De).as_deref(),
			Some("Aufgabe (Bearbeitung) - lernen mit Serlo!")
		);
	}

	#[test]
	fn unknown_has_no_title() {
		assert_eq!(page_title(&ResolvedNode::Unknown, Instance::De), None);
	}

	#[test]
	fn short_text_has_no_description() {
		assert_eq!(meta_description(&[ContentNode::paragraph("Zu kurz.")]), None);
	}

	#[test]
	fn medium_text_is_kept_whole() {
		let text = "Eine Parabel ist der Graph einer quadratischen Funktion mit Scheitel.";
		assert_eq!(
			meta_description(&[ContentNode::paragraph(text)]).as_deref(),
			Some(text)
		);
	}

	#[test]
	fn long_text_is_cut_after_next_space() {
		let word = "abcdefghi ";
		let text = word.repeat(20);
		let description = meta_description(&[ContentNode::paragraph(text.trim())]).unwrap();
		assert!(description.ends_with(" …"));
		let body = description.trim_end_matches(" …");
		assert!(body.chars().count() > DESCRIPTION_CUT_AFTER);
		assert!(body.ends_with("abcdefghi"));
	}

	#[test]
	fn only_first_ten_nodes_are_sampled() {
		let mut content: Vec<ContentNode> = (0..10).map(|_| ContentNode::paragraph("x")).collect();
		content.push(ContentNode::paragraph("y".repeat(80)));
		assert_eq!(meta_description(&content), None);
	}

	#[test]
	fn authored_description_wins() {
		let content = vec![ContentNode::paragraph("a ".repeat(60))];
		assert_eq!(
			describe(Some("Von Hand."), &content, "Artikel", Some("T")).as_deref(),
			Some("Von Hand.")
		);
		assert_eq!(
			describe(Some("  "), &content, "Artikel", Some("T")),
			meta_description(&content)
		);
	}

	#[test]
	fn label_fallback_needs_title() {
		assert_eq!(
			describe(None, &[], "Artikel", Some("Parabel")).as_deref(),
			Some("Artikel: Parabel")
		);
		assert_eq!(describe(None, &[], "Artikel", None), None);
	}

	proptest! {
		#[test]
		fn description_is_bounded(words in proptest::collection::vec("[a-zäöü]{1,12}", 0..80)) {
			let text = words.join(" ");
			if let Some(description) = meta_description(&[ContentNode::paragraph(text.clone())]) {
				let body = description.trim_end_matches(" …");
				prop_assert!(body.chars().count() >= DESCRIPTION_MIN_CHARS);
				prop_assert!(body.chars().count() <= DESCRIPTION_CUT_AFTER + 13);
				prop_assert!(text.starts_with(body));
			} else {
				prop_assert!(text.chars().count() < DESCRIPTION_MIN_CHARS);
			}
		}
	}
}
