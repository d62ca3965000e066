//! # Dog Service エラー定義
//!
//! Dog Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | ステータス | ボディ |
//! |--------|-----------|--------|
//! | `InvalidId` | 400 | `{"message": "id should be a number"}` |
//! | `Validation` | 400 | `{"errors": [...]}` |
//! | `MalformedBody` | 400 | `{"errors": ["request body should be a JSON object"]}` |
//! | `Database` | 500 | `{"errors": ["An unexpected error occurred"]}` |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use dogpark_domain::{DomainError, dog::INVALID_ID_MESSAGE};
use dogpark_shared::{ErrorListResponse, MessageResponse};
use thiserror::Error;

/// JSON オブジェクトとして解釈できないボディに対するメッセージ
pub const MALFORMED_BODY_MESSAGE: &str = "request body should be a JSON object";

/// Dog Service で発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// パスの ID が正の整数ではない
   #[error("不正な ID")]
   InvalidId,

   /// リクエストボディの検証エラー
   #[error("検証エラー: {}", .0.join(", "))]
   Validation(Vec<String>),

   /// ボディが JSON オブジェクトではない
   #[error("不正なリクエストボディ")]
   MalformedBody,

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] dogpark_infra::InfraError),
}

impl From<DomainError> for CoreError {
   fn from(err: DomainError) -> Self {
      CoreError::Validation(err.messages())
   }
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      match self {
         CoreError::InvalidId => (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new(INVALID_ID_MESSAGE)),
         )
            .into_response(),
         CoreError::Validation(errors) => {
            tracing::debug!(?errors, "リクエストボディの検証に失敗しました");
            (StatusCode::BAD_REQUEST, Json(ErrorListResponse::new(errors))).into_response()
         }
         CoreError::MalformedBody => (
            StatusCode::BAD_REQUEST,
            Json(ErrorListResponse::single(MALFORMED_BODY_MESSAGE)),
         )
            .into_response(),
         CoreError::Database(e) => {
            tracing::error!(
               error.kind = "database",
               span_trace = %e.span_trace(),
               "データベースエラー: {}",
               e
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               Json(ErrorListResponse::unexpected()),
            )
               .into_response()
         }
      }
   }
}
