//! # ヘルスチェックハンドラ
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready`: Readiness Check（データベースの接続状態を確認）
//!
//! レスポンス型は [`dogpark_shared::HealthResponse`] / [`dogpark_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use dogpark_shared::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};

use crate::usecase::DogUseCaseImpl;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}

/// Readiness Check 用の State
pub struct ReadinessState {
   pub usecase: Arc<DogUseCaseImpl>,
}

/// Readiness Check エンドポイント
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let database = match state.usecase.check_store().await {
      Ok(()) => CheckStatus::Ok,
      Err(e) => {
         tracing::warn!(error = %e, "readiness check: database ping failed");
         CheckStatus::Error
      }
   };

   let response = ReadinessResponse::from_checks(HashMap::from([(
      "database".to_string(),
      database,
   )]));
   let http_status = match response.status {
      ReadinessStatus::Ready => StatusCode::OK,
      ReadinessStatus::NotReady => StatusCode::SERVICE_UNAVAILABLE,
   };

   (http_status, Json(response))
}
