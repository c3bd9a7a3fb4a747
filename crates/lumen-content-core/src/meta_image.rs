// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::MetaImageError;

/// Side table mapping entity aliases to social preview images.
#[async_trait]
pub trait MetaImageLookup: Send + Sync {
	async fn meta_image(&self, alias: &str) -> Result<Option<String>, MetaImageError>;
}
