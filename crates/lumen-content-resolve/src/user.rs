// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use lumen_common_i18n::USER_DESCRIPTION_PLACEHOLDER;
use lumen_content_core::{ContentNode, ContentParser, User, UserData, UserProfilePage};

/// Stored description of profiles that never set one.
const NULL_DESCRIPTION: &str = "NULL";

pub fn user_profile(parser: &dyn ContentParser, user: &User) -> UserProfilePage {
	let description = match user.description.as_deref() {
		None | Some("") => None,
		Some(NULL_DESCRIPTION) => Some(vec![ContentNode::paragraph(USER_DESCRIPTION_PLACEHOLDER)]),
		Some(raw) => Some(parser.parse(Some(raw))),
	};

	UserProfilePage {
		newsletter_popup: false,
		user_data: UserData {
			id: user.id,
			username: user.username.clone(),
			description,
			last_login: user.last_login.clone(),
			active_reviewer: user.active_reviewer,
			active_author: user.active_author,
			active_donor: user.active_donor,
		},
	}
}
