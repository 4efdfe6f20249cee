//! Integration tests for the comments API.
//!
//! Comments are read through their owning post and written directly;
//! the tests cover post scoping, the author-only write rules, and 404
//! behaviour for unknown posts.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, create_user, delete_auth, get, patch_json_auth, post_json_auth};
use sqlx::PgPool;

/// Create a post through the API and return its id.
async fn create_post(pool: &PgPool, token: &str, title: &str) -> i64 {
    let body = serde_json::json!({ "title": title, "body": "post body" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/posts",
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Listing and creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_comments_on_unknown_post_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/posts/9999/comments").await;

    // A scoped filter, not an existence check: no post means no comments.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_comment_on_unknown_post_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/posts/9999/comments/1").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_comment_requires_auth(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@example.com", "password1").await;
    let token = auth_token(alice.id);
    let post_id = create_post(&pool, &token, "Post").await;

    let body = serde_json::json!({ "body": "anon comment" });
    let response = common::post_json(
        common::build_test_app(pool),
        &format!("/api/v1/posts/{post_id}/comments"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_comments_oldest_first(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@example.com", "password1").await;
    let token = auth_token(alice.id);
    let post_id = create_post(&pool, &token, "Post").await;
    let uri = format!("/api/v1/posts/{post_id}/comments");

    for text in ["one", "two"] {
        let body = serde_json::json!({ "body": text });
        let response =
            post_json_auth(common::build_test_app(pool.clone()), &uri, body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["body"], text);
        assert_eq!(json["author"]["username"], "alice");
        assert_eq!(json["post_id"], post_id);
    }

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let bodies: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["body"].as_str().unwrap())
        .collect();
    assert_eq!(bodies, vec!["one", "two"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_comment_with_empty_body_returns_field_errors(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@example.com", "password1").await;
    let token = auth_token(alice.id);
    let post_id = create_post(&pool, &token, "Post").await;

    let body = serde_json::json!({ "body": "" });
    let response = post_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/posts/{post_id}/comments"),
        body,
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["body"].is_array());
}

// ---------------------------------------------------------------------------
// Post scoping
// ---------------------------------------------------------------------------

/// A comment fetched through a different post's route is not found, even
/// though the comment itself exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn comment_is_not_reachable_through_another_post(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@example.com", "password1").await;
    let token = auth_token(alice.id);
    let post_a = create_post(&pool, &token, "Post A").await;
    let post_b = create_post(&pool, &token, "Post B").await;

    let body = serde_json::json!({ "body": "on A" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/posts/{post_a}/comments"),
        body,
        &token,
    )
    .await;
    let comment_id = body_json(response).await["id"].as_i64().unwrap();

    // Reachable through its own post.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/posts/{post_a}/comments/{comment_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Not through the other one.
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/posts/{post_b}/comments/{comment_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Author-only writes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_the_comment_author_may_update_or_delete(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@example.com", "password1").await;
    let bob = create_user(&pool, "bob", "bob@example.com", "password2").await;
    let alice_token = auth_token(alice.id);
    let bob_token = auth_token(bob.id);

    // Bob comments on Alice's post.
    let post_id = create_post(&pool, &alice_token, "Post").await;
    let body = serde_json::json!({ "body": "bob's comment" });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/posts/{post_id}/comments"),
        body,
        &bob_token,
    )
    .await;
    let comment_id = body_json(response).await["id"].as_i64().unwrap();
    let uri = format!("/api/v1/comments/{comment_id}");

    // Owning the post does not grant rights over the comment.
    let patch = serde_json::json!({ "body": "edited by alice" });
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &uri,
        patch,
        &alice_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The author can edit.
    let patch = serde_json::json!({ "body": "edited by bob" });
    let response =
        patch_json_auth(common::build_test_app(pool.clone()), &uri, patch, &bob_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["body"], "edited by bob");

    // And delete.
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &alice_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &bob_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/posts/{post_id}/comments/{comment_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_comment_returns_404(pool: PgPool) {
    let alice = create_user(&pool, "alice", "alice@example.com", "password1").await;
    let token = auth_token(alice.id);
    let app = common::build_test_app(pool);

    let patch = serde_json::json!({ "body": "nothing here" });
    let response = patch_json_auth(app, "/api/v1/comments/424242", patch, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
