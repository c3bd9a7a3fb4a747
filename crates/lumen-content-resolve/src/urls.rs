// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

/// Whether `alias` contains characters outside `[A-Za-z0-9-_./]`.
pub fn has_special_url_chars(alias: &str) -> bool {
	!alias
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
}

/// Link target for an entity: its alias when it is URL-safe, `/{id}`
/// otherwise.
pub fn entity_url(alias: Option<&str>, id: u64) -> String {
	match alias.filter(|alias| !alias.is_empty() && !has_special_url_chars(alias)) {
		Some(alias) => alias.to_string(),
		None => format!("/{id}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn plain_aliases_are_safe() {
		assert!(!has_special_url_chars("/mathe/1855/parabel"));
		assert!(!has_special_url_chars("/kurs_1/seite-2.html"));
	}

	#[test]
	fn umlauts_and_spaces_are_special() {
		assert!(has_special_url_chars("/mathe/brüche"));
		assert!(has_special_url_chars("/mathe/a b"));
		assert!(has_special_url_chars("/mathe?x=1"));
	}

	#[test]
	fn entity_url_falls_back_to_id() {
		assert_eq!(entity_url(Some("/mathe/parabel"), 7), "/mathe/parabel");
		assert_eq!(entity_url(Some("/mathe/größe"), 7), "/7");
		assert_eq!(entity_url(Some(""), 7), "/7");
		assert_eq!(entity_url(None, 7), "/7");
	}

	proptest! {
		#[test]
		fn safe_alphabet_is_never_special(alias in "[A-Za-z0-9_./-]{0,40}") {
			prop_assert!(!has_special_url_chars(&alias));
		}
	}
}
