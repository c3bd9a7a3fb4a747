// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as produced by a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{
	ApiConfigLayer, LoggingConfigLayer, MetaImagesConfigLayer, ResolverConfigLayer,
};

/// One source's view of the configuration. Every section is optional; later
/// layers override earlier ones field by field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfigLayer {
	pub api: Option<ApiConfigLayer>,
	pub resolver: Option<ResolverConfigLayer>,
	pub meta_images: Option<MetaImagesConfigLayer>,
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	pub fn merge(&mut self, other: Self) {
		merge_section(&mut self.api, other.api, ApiConfigLayer::merge);
		merge_section(&mut self.resolver, other.resolver, ResolverConfigLayer::merge);
		merge_section(
			&mut self.meta_images,
			other.meta_images,
			MetaImagesConfigLayer::merge,
		);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	match (base.as_mut(), other) {
		(Some(existing), Some(overlay)) => merge(existing, overlay),
		(None, Some(overlay)) => *base = Some(overlay),
		(_, None) => {}
	}
}
