//! # パニックハンドラ
//!
//! ハンドラ内で発生したパニックを捕捉し、`500 Internal Server Error` と
//! プレーンテキスト `Something broke!` を返す。
//!
//! `tower_http::catch_panic::CatchPanicLayer::custom` に渡して使用する。
//! ルーターの最も外側に登録し、ルートから漏れたパニックだけを扱う。

use std::any::Any;

use axum::{
   http::{StatusCode, header},
   response::{IntoResponse, Response},
};

/// パニック時のレスポンスボディ
pub const PANIC_RESPONSE_BODY: &str = "Something broke!";

/// パニックのペイロードをログに記録し、500 レスポンスを返す
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
   let detail = if let Some(s) = payload.downcast_ref::<String>() {
      s.as_str()
   } else if let Some(s) = payload.downcast_ref::<&str>() {
      s
   } else {
      "unknown panic payload"
   };

   tracing::error!(panic = %detail, "ハンドラでパニックが発生しました");

   (
      StatusCode::INTERNAL_SERVER_ERROR,
      [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
      PANIC_RESPONSE_BODY,
   )
      .into_response()
}
