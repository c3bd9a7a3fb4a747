// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Instance locales and server-side strings for Lumen.
//!
//! Every content request is scoped to an [`Instance`], the language edition of
//! the platform (`de`, `en`, ...). The pipeline only needs a handful of
//! translated strings to build page titles and fallbacks; the full UI string
//! tables live with the renderer.
//!
//! # Example
//!
//! ```
//! use lumen_common_i18n::{resolve_instance, strings, Instance};
//!
//! let instance = resolve_instance(Some("es"), Instance::De);
//! assert_eq!(instance, Instance::Es);
//! assert_eq!(strings(Instance::De).entities.article, "Artikel");
//! ```

mod instance;
mod resolve;
mod strings;

pub use instance::{Instance, ParseInstanceError, DEFAULT_INSTANCE};
pub use resolve::resolve_instance;
pub use strings::{strings, EntityLabels, ServerStrings, USER_DESCRIPTION_PLACEHOLDER};
