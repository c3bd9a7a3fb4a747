// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Lumen.
//!
//! Every outbound client in the workspace is built from here so requests to
//! the content API carry the same User-Agent.

mod client;

pub use client::{builder, builder_with_user_agent, new_client_with_timeout, user_agent, PLATFORM};
