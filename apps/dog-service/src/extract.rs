//! # リクエスト抽出
//!
//! ボディを JSON オブジェクトとして取り出すエクストラクタ。
//!
//! axum 標準の `Json` は Content-Type やデシリアライズの失敗を独自の
//! プレーンテキストで返すため、ここで [`CoreError::MalformedBody`] に揃える。

use axum::{
   body::Bytes,
   extract::{FromRequest, Request},
};
use dogpark_domain::dog::validation::JsonObject;
use serde_json::Value as JsonValue;

use crate::error::CoreError;

/// JSON オブジェクトのリクエストボディ
///
/// - 空のボディは空オブジェクト `{}` として扱う
/// - JSON として不正、またはオブジェクト以外（配列・数値など）は 400
#[derive(Debug, Clone)]
pub struct JsonBody(pub JsonObject);

impl<S> FromRequest<S> for JsonBody
where
   S: Send + Sync,
{
   type Rejection = CoreError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      let bytes = Bytes::from_request(req, state).await.map_err(|e| {
         tracing::debug!(error = %e, "リクエストボディの読み取りに失敗しました");
         CoreError::MalformedBody
      })?;

      parse_object(&bytes).map(JsonBody)
   }
}

fn parse_object(bytes: &[u8]) -> Result<JsonObject, CoreError> {
   if bytes.iter().all(u8::is_ascii_whitespace) {
      return Ok(JsonObject::new());
   }

   match serde_json::from_slice::<JsonValue>(bytes) {
      Ok(JsonValue::Object(map)) => Ok(map),
      Ok(_) => Err(CoreError::MalformedBody),
      Err(e) => {
         tracing::debug!(error = %e, "リクエストボディが JSON ではありません");
         Err(CoreError::MalformedBody)
      }
   }
}
