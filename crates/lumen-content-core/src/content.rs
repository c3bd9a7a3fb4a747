// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Render tree.
//!
//! Serialized editor state becomes a sequence of [`ContentNode`]s. Most nodes
//! are generic elements (`p`, `h`, `a`, plugin wrappers, ...) whose `type`
//! comes from the editor; the embed and exercise nodes are produced by the
//! pipeline itself and are typed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::License;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ContentNode {
	#[serde(rename = "video")]
	Video(VideoEmbed),
	#[serde(rename = "geogebra")]
	Geogebra(GeogebraEmbed),
	#[serde(rename = "exercise")]
	Exercise(Box<ExerciseNode>),
	#[serde(rename = "exercise-group")]
	ExerciseGroup(Box<ExerciseGroupNode>),
	#[serde(untagged)]
	Element(ElementNode),
	#[serde(untagged)]
	Text(TextLeaf),
}

/// A generic element with an editor-defined type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementNode {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub children: Vec<ContentNode>,
	#[serde(flatten)]
	pub attrs: Map<String, Value>,
}

/// A run of text; marks such as `strong` or `em` are kept as attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextLeaf {
	pub text: String,
	#[serde(flatten)]
	pub marks: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
	pub src: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub license: Option<InlineLicense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeogebraEmbed {
	pub id: String,
}

/// Short license summary rendered next to embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineLicense {
	pub id: u64,
	pub title: String,
	pub url: String,
}

impl From<&License> for InlineLicense {
	fn from(license: &License) -> Self {
		Self {
			id: license.id,
			title: license.title.clone(),
			url: license.url.clone(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseNode {
	pub grouped: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub position_in_group: Option<usize>,
	pub task: Vec<ContentNode>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub task_license: Option<License>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub solution: Option<Vec<ContentNode>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub solution_license: Option<License>,
	pub context: ExerciseContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseContext {
	pub id: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub solution_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseGroupNode {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub license: Option<License>,
	pub group_intro: Vec<ContentNode>,
	/// One `exercise` node per child exercise.
	pub content: Vec<ContentNode>,
	pub context: ExerciseGroupContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseGroupContext {
	pub id: u64,
}

impl ContentNode {
	pub fn text(text: impl Into<String>) -> Self {
		ContentNode::Text(TextLeaf {
			text: text.into(),
			marks: Map::new(),
		})
	}

	pub fn element(kind: impl Into<String>, children: Vec<ContentNode>) -> Self {
		ContentNode::Element(ElementNode {
			kind: kind.into(),
			children,
			attrs: Map::new(),
		})
	}

	/// A paragraph holding a single text run.
	pub fn paragraph(text: impl Into<String>) -> Self {
		ContentNode::element("p", vec![ContentNode::text(text)])
	}

	/// The `type` tag this node serializes with; `None` for text runs.
	pub fn kind(&self) -> Option<&str> {
		match self {
			ContentNode::Video(_) => Some("video"),
			ContentNode::Geogebra(_) => Some("geogebra"),
			ContentNode::Exercise(_) => Some("exercise"),
			ContentNode::ExerciseGroup(_) => Some("exercise-group"),
			ContentNode::Element(element) => Some(&element.kind),
			ContentNode::Text(_) => None,
		}
	}

	/// Appends the node's readable text to `out`.
	///
	/// Text runs are appended as-is; a space separates block boundaries so
	/// that adjacent paragraphs do not run together.
	pub fn collect_text(&self, out: &mut String) {
		match self {
			ContentNode::Text(leaf) => out.push_str(&leaf.text),
			ContentNode::Element(element) => {
				separate(out);
				for child in &element.children {
					child.collect_text(out);
				}
			}
			ContentNode::Exercise(exercise) => {
				for child in exercise.task.iter().chain(exercise.solution.iter().flatten()) {
					child.collect_text(out);
				}
			}
			ContentNode::ExerciseGroup(group) => {
				for child in group.group_intro.iter().chain(&group.content) {
					child.collect_text(out);
				}
			}
			ContentNode::Video(_) | ContentNode::Geogebra(_) => {}
		}
	}

	/// Calls `f` on every generic element in the subtree, parents first.
	pub fn for_each_element_mut(&mut self, f: &mut dyn FnMut(&mut ElementNode)) {
		match self {
			ContentNode::Element(element) => {
				f(element);
				for child in &mut element.children {
					child.for_each_element_mut(f);
				}
			}
			ContentNode::Exercise(exercise) => {
				for child in exercise
					.task
					.iter_mut()
					.chain(exercise.solution.iter_mut().flatten())
				{
					child.for_each_element_mut(f);
				}
			}
			ContentNode::ExerciseGroup(group) => {
				for child in group.group_intro.iter_mut().chain(group.content.iter_mut()) {
					child.for_each_element_mut(f);
				}
			}
			ContentNode::Text(_) | ContentNode::Video(_) | ContentNode::Geogebra(_) => {}
		}
	}

	/// Calls `f` on every generic element in the subtree, parents first.
	pub fn for_each_element(&self, f: &mut dyn FnMut(&ElementNode)) {
		match self {
			ContentNode::Element(element) => {
				f(element);
				for child in &element.children {
					child.for_each_element(f);
				}
			}
			ContentNode::Exercise(exercise) => {
				for child in exercise.task.iter().chain(exercise.solution.iter().flatten()) {
					child.for_each_element(f);
				}
			}
			ContentNode::ExerciseGroup(group) => {
				for child in group.group_intro.iter().chain(&group.content) {
					child.for_each_element(f);
				}
			}
			ContentNode::Text(_) | ContentNode::Video(_) | ContentNode::Geogebra(_) => {}
		}
	}
}

fn separate(out: &mut String) {
	if out.chars().last().is_some_and(|c| !c.is_whitespace()) {
		out.push(' ');
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn typed_nodes_serialize_with_type_tag() {
		let node = ContentNode::Geogebra(GeogebraEmbed {
			id: "abc123".to_string(),
		});
		assert_eq!(
			serde_json::to_value(&node).unwrap(),
			json!({ "type": "geogebra", "id": "abc123" })
		);
	}

	#[test]
	fn elements_serialize_untagged() {
		let mut attrs = Map::new();
		attrs.insert("href".to_string(), json!("/123"));
		let node = ContentNode::Element(ElementNode {
			kind: "a".to_string(),
			children: vec![ContentNode::text("link")],
			attrs,
		});
		assert_eq!(
			serde_json::to_value(&node).unwrap(),
			json!({ "type": "a", "href": "/123", "children": [{ "text": "link" }] })
		);
	}

	#[test]
	fn collect_text_separates_blocks() {
		let nodes = [
			ContentNode::paragraph("Erste Zeile."),
			ContentNode::element(
				"p",
				vec![ContentNode::text("Zweite "), ContentNode::text("Zeile.")],
			),
		];
		let mut out = String::new();
		for node in &nodes {
			node.collect_text(&mut out);
		}
		assert_eq!(out, "Erste Zeile. Zweite Zeile.");
	}

	#[test]
	fn collect_text_descends_into_exercises() {
		let node = ContentNode::Exercise(Box::new(ExerciseNode {
			grouped: false,
			position_in_group: None,
			task: vec![ContentNode::paragraph("Task")],
			task_license: None,
			solution: Some(vec![ContentNode::paragraph("Solution")]),
			solution_license: None,
			context: ExerciseContext {
				id: 1,
				solution_id: Some(2),
			},
		}));
		let mut out = String::new();
		node.collect_text(&mut out);
		assert_eq!(out.trim(), "Task Solution");
	}

	#[test]
	fn for_each_element_mut_reaches_nested_links() {
		let mut node = ContentNode::element(
			"p",
			vec![ContentNode::element("a", vec![ContentNode::text("x")])],
		);
		let mut seen = Vec::new();
		node.for_each_element_mut(&mut |element| seen.push(element.kind.clone()));
		assert_eq!(seen, vec!["p", "a"]);
	}
}
