// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod api;
mod logging;
mod meta_images;
mod resolver;

pub use api::{ApiConfig, ApiConfigLayer, DEFAULT_API_ENDPOINT};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use meta_images::{MetaImagesConfig, MetaImagesConfigLayer};
pub use resolver::{ResolverConfig, ResolverConfigLayer};
