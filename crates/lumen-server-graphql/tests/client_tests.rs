// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP-level tests for the content API client against a mock server.

use std::time::Duration;

use lumen_content_core::{ContentFetcher, FetchError, Instance, ResolvedNode};
use lumen_server_graphql::GraphQlClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GraphQlClient {
	GraphQlClient::new(server.uri()).unwrap()
}

#[tokio::test]
async fn fetch_by_alias_sends_alias_variables() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(body_partial_json(json!({
			"variables": { "alias": { "instance": "de", "path": "/mathe" } }
		})))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"data": { "uuid": {
				"__typename": "Page",
				"id": 19767,
				"alias": "/mathe",
				"trashed": false,
				"currentRevision": { "id": 1, "title": "Mathematik", "content": "" }
			} }
		})))
		.expect(1)
		.mount(&server)
		.await;

	let node = client_for(&server)
		.fetch_by_alias("/mathe", Instance::De)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(node.typename(), "Page");
	assert_eq!(node.id(), Some(19767));
	assert_eq!(node.alias(), Some("/mathe"));
}

#[tokio::test]
async fn numeric_path_is_sent_as_id() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(body_partial_json(json!({ "variables": { "id": 1555 } })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"data": { "uuid": { "__typename": "Article", "id": 1555, "alias": "/mathe/1555/zahlen" } }
		})))
		.expect(1)
		.mount(&server)
		.await;

	let node = client_for(&server)
		.fetch_by_alias("/1555", Instance::De)
		.await
		.unwrap()
		.unwrap();
	assert!(matches!(node, ResolvedNode::Article(_)));
}

#[tokio::test]
async fn null_uuid_is_not_found() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "uuid": null } })))
		.mount(&server)
		.await;

	let node = client_for(&server)
		.fetch_by_alias("/missing", Instance::En)
		.await
		.unwrap();
	assert!(node.is_none());
}

#[tokio::test]
async fn unknown_typename_deserializes_as_unknown() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"data": { "uuid": { "__typename": "Comment", "id": 4 } }
		})))
		.mount(&server)
		.await;

	let node = client_for(&server)
		.fetch_by_alias("/4", Instance::De)
		.await
		.unwrap();
	assert_eq!(node, Some(ResolvedNode::Unknown));
}

#[tokio::test]
async fn graphql_errors_fail_the_request() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"data": null,
			"errors": [{ "message": "boom" }, { "message": "bang" }]
		})))
		.mount(&server)
		.await;

	let err = client_for(&server).fetch_revision(7).await.unwrap_err();
	assert_eq!(err, FetchError::GraphQl("boom; bang".to_string()));
}

#[tokio::test]
async fn non_success_status_is_reported() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
		.mount(&server)
		.await;

	let err = client_for(&server)
		.fetch_user("/user/profile/anna", Instance::De)
		.await
		.unwrap_err();
	assert_eq!(
		err,
		FetchError::Status {
			status: 502,
			message: "bad gateway".to_string()
		}
	);
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
		.mount(&server)
		.await;

	let err = client_for(&server).fetch_revision(7).await.unwrap_err();
	assert!(matches!(err, FetchError::InvalidResponse(_)));
}

#[tokio::test]
async fn missing_data_is_invalid_response() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
		.mount(&server)
		.await;

	let err = client_for(&server).fetch_revision(7).await.unwrap_err();
	assert!(matches!(err, FetchError::InvalidResponse(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({ "data": { "uuid": null } }))
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let client = GraphQlClient::with_options(server.uri(), Duration::from_millis(100), None).unwrap();
	let err = client.fetch_revision(1).await.unwrap_err();
	assert_eq!(err, FetchError::Timeout);
}

#[tokio::test]
async fn revision_lookup_sends_id() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(body_partial_json(json!({ "variables": { "id": 245 } })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"data": { "uuid": {
				"__typename": "ArticleRevision",
				"id": 245,
				"title": "Neu",
				"changes": "Tippfehler",
				"repository": { "id": 12, "alias": "/12", "currentRevision": { "id": 240, "title": "Alt" } }
			} }
		})))
		.mount(&server)
		.await;

	let node = client_for(&server).fetch_revision(245).await.unwrap().unwrap();
	let revision = node.as_revision().unwrap();
	assert_eq!(revision.title(), Some("Neu"));
	assert_eq!(revision.current().unwrap().title(), Some("Alt"));
}

#[tokio::test]
async fn fetch_aliases_skips_request_for_empty_input() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(500))
		.expect(0)
		.mount(&server)
		.await;

	let aliases = client_for(&server).fetch_aliases(&[]).await.unwrap();
	assert!(aliases.is_empty());
}

#[tokio::test]
async fn fetch_aliases_maps_ids_and_drops_missing() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"data": {
				"u0": { "id": 12, "alias": "/mathe/12/brueche" },
				"u1": null,
				"u2": { "id": 99, "alias": null }
			}
		})))
		.expect(1)
		.mount(&server)
		.await;

	let aliases = client_for(&server)
		.fetch_aliases(&[12, 13, 99])
		.await
		.unwrap();
	assert_eq!(aliases.len(), 1);
	assert_eq!(aliases.get(&12).map(String::as_str), Some("/mathe/12/brueche"));
}
