// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Default editor-state converter.
//!
//! Two serialized formats are understood:
//!
//! - Plugin documents: `{ "plugin": "...", "state": ... }`. `rows` flattens
//!   its children, `text` holds Slate nodes, every other plugin becomes an
//!   element named after the plugin.
//! - Legacy layouts: a JSON array of rows, each an array of
//!   `{ "col": n, "content": "..." }` cells.
//!
//! Anything that is not JSON is treated as plain text.

use lumen_content_core::{ContentNode, ContentParser, ElementNode, TextLeaf};
use serde_json::{Map, Value};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct EditorStateParser;

impl ContentParser for EditorStateParser {
	fn parse(&self, serialized: Option<&str>) -> Vec<ContentNode> {
		let Some(raw) = serialized.map(str::trim).filter(|s| !s.is_empty()) else {
			return Vec::new();
		};

		if !raw.starts_with('{') && !raw.starts_with('[') {
			return vec![ContentNode::paragraph(raw)];
		}

		match serde_json::from_str::<Value>(raw) {
			Ok(Value::Object(document)) => convert_document(&document),
			Ok(Value::Array(rows)) => convert_legacy(&rows),
			Ok(_) => Vec::new(),
			Err(e) => {
				warn!(error = %e, "Discarding malformed editor state");
				Vec::new()
			}
		}
	}
}

fn convert_document(document: &Map<String, Value>) -> Vec<ContentNode> {
	let Some(plugin) = document.get("plugin").and_then(Value::as_str) else {
		return Vec::new();
	};
	let state = document.get("state").unwrap_or(&Value::Null);

	match plugin {
		"rows" => state
			.as_array()
			.map(|rows| rows.iter().flat_map(convert_nested).collect())
			.unwrap_or_default(),
		"text" => state
			.as_array()
			.map(|nodes| nodes.iter().filter_map(convert_slate).collect())
			.unwrap_or_default(),
		other => vec![convert_plugin(other, state)],
	}
}

/// Converts a nested plugin document, or an array of them.
fn convert_nested(value: &Value) -> Vec<ContentNode> {
	match value {
		Value::Object(document) if document.contains_key("plugin") => convert_document(document),
		Value::Array(items) => items.iter().flat_map(convert_nested).collect(),
		_ => Vec::new(),
	}
}

fn is_document(value: &Value) -> bool {
	match value {
		Value::Object(map) => map.contains_key("plugin"),
		Value::Array(items) => !items.is_empty() && items.iter().all(is_document),
		_ => false,
	}
}

fn convert_plugin(plugin: &str, state: &Value) -> ContentNode {
	let mut element = ElementNode {
		kind: plugin.to_string(),
		..Default::default()
	};

	match state {
		Value::Object(fields) => {
			for (key, value) in fields {
				if is_document(value) {
					element.children.extend(convert_nested(value));
				} else {
					element.attrs.insert(key.clone(), value.clone());
				}
			}
		}
		Value::Null => {}
		other if is_document(other) => element.children.extend(convert_nested(other)),
		other => {
			element.attrs.insert("state".to_string(), other.clone());
		}
	}

	ContentNode::Element(element)
}

fn convert_slate(node: &Value) -> Option<ContentNode> {
	let fields = node.as_object()?;

	if let Some(text) = fields.get("text").and_then(Value::as_str) {
		let marks = fields
			.iter()
			.filter(|(key, _)| key.as_str() != "text")
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect();
		return Some(ContentNode::Text(TextLeaf {
			text: text.to_string(),
			marks,
		}));
	}

	let kind = fields.get("type").and_then(Value::as_str)?;
	let children = match fields.get("children") {
		Some(Value::Array(children)) => children.iter().filter_map(convert_slate).collect(),
		Some(child @ Value::Object(_)) => convert_slate(child).into_iter().collect(),
		_ => Vec::new(),
	};
	let attrs = fields
		.iter()
		.filter(|(key, _)| !matches!(key.as_str(), "type" | "children"))
		.map(|(key, value)| (key.clone(), value.clone()))
		.collect();

	Some(ContentNode::Element(ElementNode {
		kind: kind.to_string(),
		children,
		attrs,
	}))
}

fn convert_legacy(rows: &[Value]) -> Vec<ContentNode> {
	rows
		.iter()
		.filter_map(Value::as_array)
		.map(|cells| {
			let columns = cells
				.iter()
				.filter_map(Value::as_object)
				.map(|cell| {
					let content = cell
						.get("content")
						.and_then(Value::as_str)
						.map(str::trim)
						.unwrap_or_default();
					let mut attrs = Map::new();
					if let Some(col) = cell.get("col") {
						attrs.insert("size".to_string(), col.clone());
					}
					let children = if content.is_empty() {
						Vec::new()
					} else {
						vec![ContentNode::paragraph(content)]
					};
					ContentNode::Element(ElementNode {
						kind: "col".to_string(),
						children,
						attrs,
					})
				})
				.collect();
			ContentNode::element("row", columns)
		})
		.collect()
}
