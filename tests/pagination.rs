// tests/pagination.rs
//! Cursor pagination through the public client.

mod common;

use common::{client, RecordingTransport};
use notionkit::{BlockId, NotionError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn user(index: usize) -> Value {
    json!({
        "object": "user",
        "id": format!("user-{index}"),
        "name": format!("User {index}"),
        "type": "person",
        "person": {"email": format!("user{index}@example.com")}
    })
}

fn user_page(range: std::ops::Range<usize>, next_cursor: Option<&str>, has_more: bool) -> Value {
    json!({
        "object": "list",
        "results": range.map(user).collect::<Vec<_>>(),
        "next_cursor": next_cursor,
        "has_more": has_more,
        "type": "user",
        "user": {}
    })
}

#[test]
fn two_pages_are_concatenated_in_order() {
    let transport = RecordingTransport::new()
        .respond_json(200, &user_page(0..100, Some("abc"), true))
        .respond_json(200, &user_page(100..137, None, false));

    let users = client(&transport).list_users().unwrap();

    assert_eq!(users.len(), 137);
    let ids: Vec<String> = users.iter().map(|u| u.id.to_string()).collect();
    let expected: Vec<String> = (0..137).map(|i| format!("user-{i}")).collect();
    assert_eq!(ids, expected);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "https://api.notion.com/v1/users?page_size=100");
    assert_eq!(
        requests[1].url,
        "https://api.notion.com/v1/users?page_size=100&next_cursor=abc"
    );
}

#[test]
fn list_databases_passes_cursor_on_every_follow_up() {
    let database = |id: &str| json!({"object": "database", "id": id, "title": [], "properties": {}});
    let transport = RecordingTransport::new()
        .respond_json(200, &json!({"object": "list", "results": [database("db-1")], "next_cursor": "c1", "has_more": true}))
        .respond_json(200, &json!({"object": "list", "results": [database("db-2")], "next_cursor": "c2", "has_more": true}))
        .respond_json(200, &json!({"object": "list", "results": [database("db-3")], "next_cursor": null, "has_more": false}));

    let databases = client(&transport).list_databases().unwrap();

    let ids: Vec<&str> = databases.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["db-1", "db-2", "db-3"]);
    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "https://api.notion.com/v1/databases?page_size=100",
            "https://api.notion.com/v1/databases?page_size=100&next_cursor=c1",
            "https://api.notion.com/v1/databases?page_size=100&next_cursor=c2",
        ]
    );
}

#[test]
fn block_children_use_dashed_id_in_path() {
    let transport = RecordingTransport::new().respond(200, include_str!("fixtures/block_children.json"));
    let id = BlockId::parse("acc7eb0605cd4603a3845e1e4f1f4e72").unwrap();

    let blocks = client(&transport).list_block_children(&id).unwrap();

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].plain_text(), "Lacinato kale");
    assert_eq!(blocks[2].kind().as_str(), "column_list");
    assert_eq!(
        transport.requests()[0].url,
        "https://api.notion.com/v1/blocks/acc7eb06-05cd-4603-a384-5e1e4f1f4e72/children?page_size=100"
    );
}

#[test]
fn failure_on_second_page_returns_only_the_error() {
    let transport = RecordingTransport::new()
        .respond_json(200, &user_page(0..100, Some("abc"), true))
        .respond_json(
            429,
            &json!({"object": "error", "status": 429, "code": "rate_limited", "message": "Rate limited"}),
        );

    let err = client(&transport).list_users().unwrap_err();

    match err {
        NotionError::Remote { status, ref code, .. } => {
            assert_eq!(status, 429);
            assert_eq!(code, "rate_limited");
        }
        ref other => panic!("expected remote error, got {other:?}"),
    }
    assert!(err.error_code().is_some_and(|code| code.is_retryable()));
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn transport_failure_surfaces_as_transport_error() {
    let transport = RecordingTransport::new();
    let err = client(&transport).list_users().unwrap_err();
    assert!(matches!(err, NotionError::Transport(_)));
}

#[test]
fn empty_cursor_with_more_pages_stops_with_decode_error() {
    let transport = RecordingTransport::new().respond_json(200, &user_page(0..3, Some(""), true));

    let err = client(&transport).list_users().unwrap_err();

    assert!(matches!(err, NotionError::Decode { .. }));
    assert_eq!(transport.requests().len(), 1);
}
