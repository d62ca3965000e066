//! Dog API 統合テスト
//!
//! `build_app` で組み立てたルーター全体（レイヤー込み）に対してリクエストを送り、
//! インメモリのモックリポジトリで一連の CRUD フローを確認する。

use std::sync::Arc;

use axum::{
   Router,
   body::{Body, to_bytes},
   http::{Method, Request, StatusCode, header},
   response::Response,
   routing::get,
};
use dogpark_infra::mock::MockDogRepository;
use dogpark_service::{
   app_builder::{build_app, with_middleware},
   handler::DogDto,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

// =============================================================================
// ヘルパー
// =============================================================================

fn create_app() -> (Router, MockDogRepository) {
   let repo = MockDogRepository::new();
   (build_app(Arc::new(repo.clone())), repo)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
   let builder = Request::builder().method(method).uri(uri);
   let request = match body {
      Some(body) => builder
         .header(header::CONTENT_TYPE, "application/json")
         .body(Body::from(body.to_string())),
      None => builder.body(Body::empty()),
   }
   .unwrap();

   app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
   to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap()
      .to_vec()
}

async fn body_json(response: Response) -> Value {
   serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn rex() -> Value {
   json!({"name": "Rex", "age": 3, "breed": "Lab", "description": "friendly"})
}

// =============================================================================
// ルート・ヘルスチェック
// =============================================================================

#[tokio::test]
async fn test_ルートでhello_worldが返る() {
   let (app, _repo) = create_app();

   let response = send(&app, Method::GET, "/", None).await;

   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(body_json(response).await, json!({"message": "Hello World!"}));
}

#[tokio::test]
async fn test_readinessがストアの状態を反映する() {
   let (app, repo) = create_app();

   let ready = send(&app, Method::GET, "/health/ready", None).await;
   repo.set_failing(true);
   let not_ready = send(&app, Method::GET, "/health/ready", None).await;

   assert_eq!(ready.status(), StatusCode::OK);
   assert_eq!(not_ready.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// CRUD フロー
// =============================================================================

#[tokio::test]
async fn test_作成した犬を取得_更新_削除できる() {
   let (app, repo) = create_app();

   // 作成
   let created = send(&app, Method::POST, "/dogs", Some(rex())).await;
   assert_eq!(created.status(), StatusCode::CREATED);
   let created: DogDto = serde_json::from_value(body_json(created).await).unwrap();
   assert!(created.id > 0);
   assert_eq!(created.name, "Rex");
   assert_eq!(created.age, 3.0);
   assert_eq!(created.breed.as_deref(), Some("Lab"));
   assert_eq!(created.description, "friendly");

   let uri = format!("/dogs/{}", created.id);

   // 取得
   let fetched = send(&app, Method::GET, &uri, None).await;
   assert_eq!(fetched.status(), StatusCode::OK);
   let fetched: DogDto = serde_json::from_value(body_json(fetched).await).unwrap();
   assert_eq!(fetched, created);

   // 部分更新
   let patched = send(&app, Method::PATCH, &uri, Some(json!({"age": "4"}))).await;
   assert_eq!(patched.status(), StatusCode::CREATED);
   let patched: DogDto = serde_json::from_value(body_json(patched).await).unwrap();
   assert_eq!(patched.age, 4.0);
   assert_eq!(patched.name, "Rex");

   // 削除（1 回目は削除前の内容、2 回目は 204）
   let deleted = send(&app, Method::DELETE, &uri, None).await;
   assert_eq!(deleted.status(), StatusCode::OK);
   let deleted: DogDto = serde_json::from_value(body_json(deleted).await).unwrap();
   assert_eq!(deleted, patched);

   let again = send(&app, Method::DELETE, &uri, None).await;
   assert_eq!(again.status(), StatusCode::NO_CONTENT);
   assert!(body_bytes(again).await.is_empty());
   assert!(repo.is_empty());
}

#[tokio::test]
async fn test_書き込みがなければ一覧は同じ結果を返す() {
   let (app, _repo) = create_app();
   send(&app, Method::POST, "/dogs", Some(rex())).await;
   send(
      &app,
      Method::POST,
      "/dogs",
      Some(json!({"name": "Max", "age": 5, "description": "calm"})),
   )
   .await;

   let first = body_json(send(&app, Method::GET, "/dogs", None).await).await;
   let second = body_json(send(&app, Method::GET, "/dogs", None).await).await;

   assert_eq!(first, second);
   assert_eq!(first.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_存在しない犬の取得は204で空ボディ() {
   let (app, _repo) = create_app();

   let response = send(&app, Method::GET, "/dogs/12345", None).await;

   assert_eq!(response.status(), StatusCode::NO_CONTENT);
   assert!(body_bytes(response).await.is_empty());
}

// =============================================================================
// 入力検証
// =============================================================================

#[rstest]
#[case(Method::GET, "/dogs/abc")]
#[case(Method::GET, "/dogs/-1")]
#[case(Method::GET, "/dogs/0")]
#[case(Method::GET, "/dogs/1.5")]
#[case(Method::DELETE, "/dogs/abc")]
#[case(Method::PATCH, "/dogs/abc")]
#[tokio::test]
async fn test_正の整数でないidは400(#[case] method: Method, #[case] uri: &str) {
   let (app, _repo) = create_app();

   let response = send(&app, method, uri, None).await;

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert_eq!(
      body_json(response).await,
      json!({"message": "id should be a number"})
   );
}

#[rstest]
#[case(Method::POST, "/dogs")]
#[case(Method::PATCH, "/dogs/1")]
#[tokio::test]
async fn test_未知キーはすべて列挙されて400(#[case] method: Method, #[case] uri: &str) {
   let (app, _repo) = create_app();
   send(&app, Method::POST, "/dogs", Some(rex())).await;

   let response = send(
      &app,
      method,
      uri,
      Some(json!({"name": "Rex", "color": "brown", "owner": "alice"})),
   )
   .await;

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert_eq!(
      body_json(response).await,
      json!({"errors": ["'color' is not a valid key", "'owner' is not a valid key"]})
   );
}

#[tokio::test]
async fn test_未知キーはボディの記述順で返る() {
   let (app, _repo) = create_app();
   let request = Request::builder()
      .method(Method::POST)
      .uri("/dogs")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(r#"{"zeta": 1, "name": "Rex", "alpha": 2}"#))
      .unwrap();

   let response = app.clone().oneshot(request).await.unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   assert_eq!(
      body_json(response).await,
      json!({"errors": ["'zeta' is not a valid key", "'alpha' is not a valid key"]})
   );
}

#[tokio::test]
async fn test_数値でない年齢は400() {
   let (app, repo) = create_app();

   let response = send(
      &app,
      Method::POST,
      "/dogs",
      Some(json!({"name": "Rex", "age": "old", "description": "x"})),
   )
   .await;

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   let body = body_json(response).await;
   assert!(
      body["errors"]
         .as_array()
         .unwrap()
         .contains(&json!("age should be a number"))
   );
   assert!(repo.is_empty());
}

#[rstest]
#[case(Method::GET, "/dogs", None)]
#[case(Method::POST, "/dogs", Some(rex()))]
#[case(Method::PATCH, "/dogs/1", Some(json!({"age": 4})))]
#[case(Method::DELETE, "/dogs/1", None)]
#[tokio::test]
async fn test_ストア障害は500で固定メッセージ(
   #[case] method: Method,
   #[case] uri: &str,
   #[case] body: Option<Value>,
) {
   // Given: 既存の犬が 1 件あり、その後ストアが障害モードになる
   let (app, repo) = create_app();
   send(&app, Method::POST, "/dogs", Some(rex())).await;
   repo.set_failing(true);

   // When
   let response = send(&app, method, uri, body).await;

   // Then
   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(
      body_json(response).await,
      json!({"errors": ["An unexpected error occurred"]})
   );
}

// =============================================================================
// パニック捕捉
// =============================================================================

#[tokio::test]
async fn test_ハンドラのパニックはsomething_brokeの500になる() {
   // Given: パニックするルートに共通レイヤーを適用
   async fn explode() -> &'static str {
      panic!("handler exploded")
   }
   let app = with_middleware(Router::new().route("/explode", get(explode)));

   // When
   let response = send(&app, Method::GET, "/explode", None).await;

   // Then
   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body_bytes(response).await, b"Something broke!".to_vec());
}
