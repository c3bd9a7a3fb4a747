// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request entry points.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lumen_common_i18n::{Instance, DEFAULT_INSTANCE};
use lumen_content_core::{
	ContentFetcher, ContentParser, MetaImageLookup, PageViewModel, ResolvedNode,
};
use tracing::{debug, error, instrument, warn};

use crate::assemble::{
	assemble_page, assemble_revision, page_content_mut, set_meta_image, PageContext,
	NOT_A_REVISION, UNKNOWN_CONTENT_TYPE,
};
use crate::classify::classify;
use crate::error::ResolveError;
use crate::links::{apply_aliases, collect_link_ids};
use crate::parser::EditorStateParser;
use crate::redirect::{resolve_redirect, RedirectOutcome};
use crate::user::user_profile;

pub const DEFAULT_MAX_REDIRECT_DEPTH: u32 = 8;

const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
	/// Instance whose pages carry the recommendation strip.
	pub horizon_instance: Instance,
	/// Maximum number of re-resolutions per request.
	pub max_redirect_depth: u32,
	/// Rewrite `/123` links to aliases.
	pub enrich_links: bool,
}

impl Default for ResolverSettings {
	fn default() -> Self {
		Self {
			horizon_instance: DEFAULT_INSTANCE,
			max_redirect_depth: DEFAULT_MAX_REDIRECT_DEPTH,
			enrich_links: true,
		}
	}
}

/// Turns aliases, revision ids and user paths into page view models.
///
/// Holds only shared handles, so one resolver serves concurrent requests.
#[derive(Clone)]
pub struct ContentResolver {
	fetcher: Arc<dyn ContentFetcher>,
	parser: Arc<dyn ContentParser>,
	meta_images: Arc<dyn MetaImageLookup>,
	settings: ResolverSettings,
}

impl ContentResolver {
	pub fn new(fetcher: Arc<dyn ContentFetcher>, meta_images: Arc<dyn MetaImageLookup>) -> Self {
		Self {
			fetcher,
			parser: Arc::new(EditorStateParser),
			meta_images,
			settings: ResolverSettings::default(),
		}
	}

	pub fn with_parser(mut self, parser: Arc<dyn ContentParser>) -> Self {
		self.parser = parser;
		self
	}

	pub fn with_settings(mut self, settings: ResolverSettings) -> Self {
		self.settings = settings;
		self
	}

	pub fn settings(&self) -> &ResolverSettings {
		&self.settings
	}

	/// Resolves an alias such as `/mathe/1855/parabel` or `/1855`.
	///
	/// Courses and solutions are followed to the page they stand for. Broken
	/// chains, cycles and chains longer than the configured depth end in the
	/// 404 page. Only upstream failures are returned as errors.
	#[instrument(skip(self))]
	pub async fn resolve_page(
		&self,
		alias: &str,
		instance: Instance,
	) -> Result<PageViewModel, ResolveError> {
		let mut current = alias.to_string();
		let mut visited = HashSet::new();
		let mut hops = 0u32;

		loop {
			if !visited.insert(current.clone()) {
				error!(alias = %current, start = %alias, "Redirect cycle detected");
				return Ok(PageViewModel::not_found(None));
			}

			let Some(node) = self.fetcher.fetch_by_alias(&current, instance).await? else {
				debug!(alias = %current, "No entity for alias");
				return Ok(PageViewModel::not_found(None));
			};

			let class = match classify(&node) {
				Ok(class) => class,
				Err(e) => {
					debug!(alias = %current, "Unclassifiable entity");
					return Ok(PageViewModel::not_found(Some(&e.to_string())));
				}
			};
			debug!(alias = %current, typename = node.typename(), ?class, "Classified entity");

			if class.is_renderable() {
				return Ok(self.render(&node, &current, instance).await);
			}

			match resolve_redirect(&node) {
				Some(RedirectOutcome::Redirect(target)) => {
					debug!(target = %target, "Redirecting");
					return Ok(PageViewModel::redirect(target));
				}
				Some(RedirectOutcome::Reresolve(next)) => {
					hops += 1;
					if hops > self.settings.max_redirect_depth {
						error!(
							start = %alias,
							depth = self.settings.max_redirect_depth,
							"Redirect chain too long"
						);
						return Ok(PageViewModel::not_found(None));
					}
					debug!(from = %current, to = %next, hops, "Re-resolving");
					current = next;
				}
				Some(RedirectOutcome::NotFound) => return Ok(PageViewModel::not_found(None)),
				None => return Ok(PageViewModel::not_found(Some(UNKNOWN_CONTENT_TYPE))),
			}
		}
	}

	/// Resolves a revision for the comparison page.
	#[instrument(skip(self))]
	pub async fn resolve_revision(
		&self,
		revision_id: u64,
		instance: Instance,
	) -> Result<PageViewModel, ResolveError> {
		let cache_key = format!("/{}/{}", instance.as_str(), revision_id);
		let Some(node) = self.fetcher.fetch_revision(revision_id).await? else {
			debug!(revision_id, "No entity for revision id");
			return Ok(PageViewModel::not_found(Some(NOT_A_REVISION)));
		};
		Ok(assemble_revision(self.parser.as_ref(), &node, instance, cache_key))
	}

	/// Resolves a user profile path.
	#[instrument(skip(self))]
	pub async fn resolve_user(
		&self,
		path: &str,
		instance: Instance,
	) -> Result<PageViewModel, ResolveError> {
		match self.fetcher.fetch_user(path, instance).await? {
			Some(ResolvedNode::User(user)) => Ok(PageViewModel::UserProfile(Box::new(
				user_profile(self.parser.as_ref(), &user),
			))),
			other => {
				debug!(path, typename = ?other.as_ref().map(ResolvedNode::typename), "User not found");
				Ok(PageViewModel::not_found(Some(USER_NOT_FOUND)))
			}
		}
	}

	async fn render(&self, node: &ResolvedNode, alias: &str, instance: Instance) -> PageViewModel {
		let ctx = PageContext {
			parser: self.parser.as_ref(),
			instance,
			cache_key: format!("/{}{}", instance.as_str(), alias),
			horizon: instance == self.settings.horizon_instance,
		};
		let mut page = assemble_page(node, &ctx);

		let link_ids: Vec<u64> = if self.settings.enrich_links {
			let mut ids: Vec<u64> = page_content_mut(&mut page)
				.into_iter()
				.flat_map(|content| collect_link_ids(content))
				.collect();
			ids.sort_unstable();
			ids.dedup();
			ids
		} else {
			Vec::new()
		};

		let (meta_image, aliases) = tokio::join!(
			self.lookup_meta_image(node.alias()),
			self.lookup_aliases(&link_ids),
		);

		set_meta_image(&mut page, meta_image);
		for content in page_content_mut(&mut page) {
			apply_aliases(content, &aliases);
		}
		page
	}

	async fn lookup_meta_image(&self, alias: Option<&str>) -> Option<String> {
		let alias = alias?;
		match self.meta_images.meta_image(alias).await {
			Ok(image) => image,
			Err(e) => {
				warn!(error = %e, alias, "Meta image lookup failed");
				None
			}
		}
	}

	async fn lookup_aliases(&self, ids: &[u64]) -> HashMap<u64, String> {
		if ids.is_empty() {
			return HashMap::new();
		}
		match self.fetcher.fetch_aliases(ids).await {
			Ok(aliases) => aliases,
			Err(e) => {
				warn!(error = %e, count = ids.len(), "Link enrichment failed");
				HashMap::new()
			}
		}
	}
}

impl std::fmt::Debug for ContentResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContentResolver")
			.field("settings", &self.settings)
			.finish_non_exhaustive()
	}
}
