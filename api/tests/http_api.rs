use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use firstbites_api::application::http::server::app_state::AppState;
use firstbites_api::application::http::server::http_server;
use firstbites_api::args::Args;
use firstbites_core::domain::common::WechatConfig;
use firstbites_core::entity::{counters, users};
use firstbites_core::infrastructure::wechat::client::HttpWechatClient;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};

struct ApiTestContext {
    args: Arc<Args>,
    wechat: HttpWechatClient,
}

impl AsyncTestContext for ApiTestContext {
    async fn setup() -> Self {
        let args = Arc::new(Args::parse_from(["firstbites-api"]));
        // Points at a closed port; tests never reach the real exchange.
        let wechat = HttpWechatClient::new(&WechatConfig {
            app_id: "wx-test".to_string(),
            app_secret: "secret".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        Self { args, wechat }
    }
}

impl ApiTestContext {
    fn server(&self, db: MockDatabase) -> TestServer {
        let state = AppState::new(self.args.clone(), db.into_connection(), self.wechat.clone());
        TestServer::new(http_server::router(state).unwrap()).unwrap()
    }
}

fn empty_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn health_returns_empty_success_envelope(ctx: &mut ApiTestContext) {
    let server = ctx.server(empty_db());

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"code": 0, "data": {}}));
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn create_user_without_nickname_is_rejected(ctx: &mut ApiTestContext) {
    let server = ctx.server(empty_db());

    let response = server.post("/api/users").json(&json!({})).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], -1);
    assert!(body["errorMsg"].as_str().unwrap().contains("nickname"));
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn missing_user_is_a_404(ctx: &mut ApiTestContext) {
    let db = empty_db().append_query_results([Vec::<users::Model>::new()]);
    let server = ctx.server(db);

    let response = server.get("/api/users/u-missing").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], -1);
    assert_eq!(body["errorMsg"], "user not found");
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn existing_user_is_wrapped_in_the_envelope(ctx: &mut ApiTestContext) {
    let db = empty_db().append_query_results([vec![users::Model {
        id: "u-1".to_string(),
        nickname: "豆豆妈".to_string(),
        avatar_url: String::new(),
        created_at: chrono::Utc::now().fixed_offset(),
    }]]);
    let server = ctx.server(db);

    let response = server.get("/api/users/u-1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["id"], "u-1");
    assert_eq!(body["data"]["nickname"], "豆豆妈");
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn baby_registration_rejects_unknown_gender(ctx: &mut ApiTestContext) {
    let server = ctx.server(empty_db());

    let response = server
        .post("/api/babies")
        .json(&json!({
            "nickname": "豆豆",
            "gender": "X",
            "birth_date": "2024-01-01",
            "created_by": "u-1",
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["errorMsg"], "gender must be one of M, F");
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn baby_registration_rejects_malformed_birth_date(ctx: &mut ApiTestContext) {
    let server = ctx.server(empty_db());

    let response = server
        .post("/api/babies")
        .json(&json!({
            "nickname": "豆豆",
            "gender": "M",
            "birth_date": "01/02/2024",
            "created_by": "u-1",
        }))
        .await;

    response.assert_status_bad_request();
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn recipe_item_rejects_unknown_meal_type(ctx: &mut ApiTestContext) {
    let server = ctx.server(empty_db());

    let response = server
        .post("/api/recipes/r-1/items")
        .json(&json!({"meal_type": "midnight_feast"}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], -1);
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn counter_reads_zero_when_row_is_absent(ctx: &mut ApiTestContext) {
    let db = empty_db().append_query_results([Vec::<counters::Model>::new()]);
    let server = ctx.server(db);

    let response = server.get("/api/count").await;

    response.assert_status_ok();
    response.assert_json(&json!({"code": 0, "data": 0}));
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn counter_reads_current_count(ctx: &mut ApiTestContext) {
    let now = chrono::Utc::now().fixed_offset();
    let db = empty_db().append_query_results([vec![counters::Model {
        id: 1,
        count: 7,
        created_at: now,
        updated_at: now,
    }]]);
    let server = ctx.server(db);

    let response = server.get("/api/count").await;

    response.assert_status_ok();
    response.assert_json(&json!({"code": 0, "data": 7}));
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn count_rejects_unknown_actions(ctx: &mut ApiTestContext) {
    let server = ctx.server(empty_db());

    let response = server
        .post("/api/count")
        .json(&json!({"action": "boom"}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["errorMsg"], "action must be one of inc, clear");
}
