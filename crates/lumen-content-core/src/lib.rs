// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared types for the Lumen content pipeline.
//!
//! - [`ResolvedNode`]: the closed union of entities the content API returns
//! - [`ContentNode`]: the render tree produced from serialized editor state
//! - [`PageViewModel`]: what the pipeline hands to the renderer
//! - [`ContentFetcher`], [`ContentParser`], [`MetaImageLookup`]: the
//!   collaborators the pipeline depends on

pub mod content;
pub mod error;
pub mod fetcher;
pub mod meta_image;
pub mod model;
pub mod parser;
pub mod revision;
pub mod view;

pub use content::*;
pub use error::*;
pub use fetcher::*;
pub use meta_image::*;
pub use model::*;
pub use parser::*;
pub use revision::*;
pub use view::*;

pub use lumen_common_i18n::Instance;
