// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Social preview image configuration section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://de.serlo.org/_assets/img/meta";
const DEFAULT_IMAGE: &str = "serlo.jpg";

const DEFAULT_SUBJECTS: &[(&str, &str)] = &[
	("biologie", "biologie.jpg"),
	("chemie", "chemie.jpg"),
	("informatik", "informatik.jpg"),
	("lerntipps", "lerntipps.jpg"),
	("mathe", "mathe.jpg"),
	("nachhaltigkeit", "nachhaltigkeit.jpg"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetaImagesConfigLayer {
	pub base_url: Option<String>,
	pub default_image: Option<String>,
	/// First alias segment to image file name.
	pub subjects: Option<BTreeMap<String, String>>,
}

impl MetaImagesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.default_image.is_some() {
			self.default_image = other.default_image;
		}
		if let Some(subjects) = other.subjects {
			self.subjects.get_or_insert_with(BTreeMap::new).extend(subjects);
		}
	}

	pub fn finalize(self) -> MetaImagesConfig {
		let mut subjects: BTreeMap<String, String> = DEFAULT_SUBJECTS
			.iter()
			.map(|(subject, file)| (subject.to_string(), file.to_string()))
			.collect();
		subjects.extend(self.subjects.unwrap_or_default());

		MetaImagesConfig {
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			// An empty string disables the fallback image.
			default_image: match self.default_image {
				Some(image) if image.is_empty() => None,
				Some(image) => Some(image),
				None => Some(DEFAULT_IMAGE.to_string()),
			},
			subjects,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetaImagesConfig {
	pub base_url: String,
	pub default_image: Option<String>,
	pub subjects: BTreeMap<String, String>,
}

impl Default for MetaImagesConfig {
	fn default() -> Self {
		MetaImagesConfigLayer::default().finalize()
	}
}
