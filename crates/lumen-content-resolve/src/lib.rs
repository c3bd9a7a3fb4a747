// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Content resolution pipeline.
//!
//! [`ContentResolver`] fetches an entity, classifies it by `__typename`,
//! follows redirects and re-resolutions, and assembles the page view model
//! the renderer consumes. The building blocks are public so they can be used
//! and tested on their own.

pub mod assemble;
pub mod breadcrumbs;
pub mod classify;
pub mod course;
mod error;
pub mod exercise;
pub mod horizon;
pub mod links;
pub mod meta_image;
pub mod metadata;
pub mod navigation;
mod parser;
pub mod redirect;
mod resolver;
pub mod revision;
pub mod taxonomy;
pub mod urls;
pub mod user;

pub use classify::{classify, EntityClass, UnknownEntityType};
pub use error::ResolveError;
pub use exercise::{create_exercise, create_exercise_group, ExerciseInput};
pub use meta_image::SubjectImageTable;
pub use parser::EditorStateParser;
pub use redirect::{resolve_redirect, RedirectOutcome};
pub use resolver::{ContentResolver, ResolverSettings, DEFAULT_MAX_REDIRECT_DEPTH};
