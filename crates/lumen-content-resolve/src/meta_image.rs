// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Subject based social preview images.

use std::collections::BTreeMap;

use async_trait::async_trait;
use lumen_content_core::{MetaImageError, MetaImageLookup};
use tracing::trace;

/// Maps the first alias segment (the subject) to an image file under a base
/// URL. Aliases outside every subject get the default image, if one is set.
#[derive(Debug, Clone)]
pub struct SubjectImageTable {
	base_url: String,
	default_image: Option<String>,
	subjects: BTreeMap<String, String>,
}

impl SubjectImageTable {
	pub fn new(
		base_url: impl Into<String>,
		default_image: Option<String>,
		subjects: BTreeMap<String, String>,
	) -> Self {
		Self {
			base_url: base_url.into().trim_end_matches('/').to_string(),
			default_image: default_image.filter(|image| !image.is_empty()),
			subjects,
		}
	}

	/// Synchronous lookup behind the trait method.
	pub fn image_for(&self, alias: &str) -> Option<String> {
		let subject = alias.trim_start_matches('/').split('/').next().unwrap_or_default();
		let file = self
			.subjects
			.get(subject)
			.or(self.default_image.as_ref())?;
		trace!(subject, file = %file, "meta image selected");
		Some(format!("{}/{}", self.base_url, file))
	}
}

#[async_trait]
impl MetaImageLookup for SubjectImageTable {
	async fn meta_image(&self, alias: &str) -> Result<Option<String>, MetaImageError> {
		Ok(self.image_for(alias))
	}
}
