// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Language edition of the platform a request is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instance {
	De,
	En,
	Es,
	Fr,
	Hi,
	Ta,
}

pub const DEFAULT_INSTANCE: Instance = Instance::De;

impl Instance {
	pub const ALL: [Instance; 6] = [
		Instance::De,
		Instance::En,
		Instance::Es,
		Instance::Fr,
		Instance::Hi,
		Instance::Ta,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Instance::De => "de",
			Instance::En => "en",
			Instance::Es => "es",
			Instance::Fr => "fr",
			Instance::Hi => "hi",
			Instance::Ta => "ta",
		}
	}

	pub fn is_supported(code: &str) -> bool {
		code.parse::<Instance>().is_ok()
	}
}

impl fmt::Display for Instance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported instance '{0}'")]
pub struct ParseInstanceError(pub String);

impl FromStr for Instance {
	type Err = ParseInstanceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Instance::ALL
			.into_iter()
			.find(|instance| instance.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| ParseInstanceError(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_case_insensitively() {
		assert_eq!("DE".parse::<Instance>(), Ok(Instance::De));
		assert_eq!(" hi ".parse::<Instance>(), Ok(Instance::Hi));
	}

	#[test]
	fn rejects_unknown_codes() {
		let err = "pt".parse::<Instance>().unwrap_err();
		assert_eq!(err.to_string(), "unsupported instance 'pt'");
		assert!(!Instance::is_supported(""));
	}

	#[test]
	fn serializes_as_lowercase_code() {
		assert_eq!(serde_json::to_string(&Instance::Fr).unwrap(), "\"fr\"");
		let parsed: Instance = serde_json::from_str("\"ta\"").unwrap();
		assert_eq!(parsed, Instance::Ta);
	}
}
