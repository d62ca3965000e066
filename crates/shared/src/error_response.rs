//! # エラーレスポンス
//!
//! 検証エラーや予期しないエラーをクライアントに返すためのレスポンス構造体。
//!
//! ## 形式
//!
//! ```json
//! { "errors": ["'color' is not a valid key"] }
//! ```
//!
//! - `ErrorListResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービスの責務

use serde::{Deserialize, Serialize};

/// 予期しないエラー時にクライアントへ返す固定メッセージ
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// エラーメッセージの一覧を返すレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorListResponse {
   pub errors: Vec<String>,
}

impl ErrorListResponse {
   pub fn new(errors: Vec<String>) -> Self {
      Self { errors }
   }

   /// 単一メッセージのレスポンス
   pub fn single(message: impl Into<String>) -> Self {
      Self {
         errors: vec![message.into()],
      }
   }

   /// 予期しないエラー
   ///
   /// 内部情報を漏らさないため、メッセージは固定値。
   pub fn unexpected() -> Self {
      Self::single(UNEXPECTED_ERROR_MESSAGE)
   }
}
