//! # ルートハンドラ
//!
//! `GET /` で固定の挨拶メッセージを返す。

use axum::Json;
use dogpark_shared::MessageResponse;

/// GET /
pub async fn hello() -> Json<MessageResponse> {
   Json(MessageResponse::new("Hello World!"))
}
