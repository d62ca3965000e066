//! # Dog ハンドラ
//!
//! Dog の CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /dogs` - 全件取得
//! - `GET /dogs/{id}` - 1 件取得
//! - `POST /dogs` - 作成
//! - `PATCH /dogs/{id}` - 部分更新
//! - `DELETE /dogs/{id}` - 削除
//!
//! ## 処理順序
//!
//! ID 形式チェック → 未知キーチェック → 型チェック → ユースケース。
//! 対象が存在しない場合は `204 No Content`（ボディなし）を返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use dogpark_domain::dog::{
   Dog,
   DogId,
   validation::{parse_dog_patch, parse_new_dog},
};
use serde::{Deserialize, Serialize, Serializer};

use crate::{error::CoreError, extract::JsonBody, usecase::DogUseCaseImpl};

/// Dog API の共有状態
pub struct DogState {
   pub usecase: Arc<DogUseCaseImpl>,
}

// --- レスポンス型 ---

/// Dog DTO
///
/// `breed` が未設定の場合は `null` を出力する。
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DogDto {
   pub id:          i32,
   pub name:        String,
   #[serde(serialize_with = "serialize_age")]
   pub age:         f64,
   pub breed:       Option<String>,
   pub description: String,
}

impl From<&Dog> for DogDto {
   fn from(dog: &Dog) -> Self {
      Self {
         id:          dog.id().as_i32(),
         name:        dog.name().to_string(),
         age:         dog.age().as_f64(),
         breed:       dog.breed().map(str::to_string),
         description: dog.description().to_string(),
      }
   }
}

/// 整数値の年齢は `3.0` ではなく `3` として出力する
fn serialize_age<S: Serializer>(age: &f64, serializer: S) -> Result<S::Ok, S::Error> {
   const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

   if age.fract() == 0.0 && age.abs() < MAX_EXACT_INTEGER {
      serializer.serialize_i64(*age as i64)
   } else {
      serializer.serialize_f64(*age)
   }
}

fn parse_id(segment: &str) -> Result<DogId, CoreError> {
   DogId::parse(segment).map_err(|_| CoreError::InvalidId)
}

// --- ハンドラ ---

/// GET /dogs
///
/// 全件を ID 順で返す。ページングは行わない。
#[tracing::instrument(skip_all)]
pub async fn list_dogs(State(state): State<Arc<DogState>>) -> Result<Response, CoreError> {
   let dogs = state.usecase.list_dogs().await?;

   let items: Vec<DogDto> = dogs.iter().map(DogDto::from).collect();
   Ok((StatusCode::OK, Json(items)).into_response())
}

/// GET /dogs/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 該当する Dog
/// - `204 No Content`: 該当なし
/// - `400 Bad Request`: ID が正の整数ではない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_dog(
   State(state): State<Arc<DogState>>,
   Path(id): Path<String>,
) -> Result<Response, CoreError> {
   let id = parse_id(&id)?;

   match state.usecase.get_dog(id).await? {
      Some(dog) => Ok((StatusCode::OK, Json(DogDto::from(&dog))).into_response()),
      None => Ok(StatusCode::NO_CONTENT.into_response()),
   }
}

/// POST /dogs
///
/// ## レスポンス
///
/// - `201 Created`: 採番された `id` を含む作成済みの Dog
/// - `400 Bad Request`: 未知キー・型違反
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all)]
pub async fn create_dog(
   State(state): State<Arc<DogState>>,
   JsonBody(body): JsonBody,
) -> Result<Response, CoreError> {
   let new_dog = parse_new_dog(&body)?;

   let dog = state.usecase.create_dog(new_dog).await?;

   Ok((StatusCode::CREATED, Json(DogDto::from(&dog))).into_response())
}

/// PATCH /dogs/{id}
///
/// ボディに含まれるフィールドだけを更新する。
///
/// ## レスポンス
///
/// - `201 Created`: 更新後の Dog
/// - `204 No Content`: 該当なし
/// - `400 Bad Request`: ID 形式不正・未知キー・型違反
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_dog(
   State(state): State<Arc<DogState>>,
   Path(id): Path<String>,
   JsonBody(body): JsonBody,
) -> Result<Response, CoreError> {
   let id = parse_id(&id)?;
   let patch = parse_dog_patch(&body)?;

   match state.usecase.update_dog(id, patch).await? {
      Some(dog) => Ok((StatusCode::CREATED, Json(DogDto::from(&dog))).into_response()),
      None => Ok(StatusCode::NO_CONTENT.into_response()),
   }
}

/// DELETE /dogs/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除前の Dog
/// - `204 No Content`: 該当なし
/// - `400 Bad Request`: ID が正の整数ではない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_dog(
   State(state): State<Arc<DogState>>,
   Path(id): Path<String>,
) -> Result<Response, CoreError> {
   let id = parse_id(&id)?;

   match state.usecase.delete_dog(id).await? {
      Some(dog) => Ok((StatusCode::OK, Json(DogDto::from(&dog))).into_response()),
      None => Ok(StatusCode::NO_CONTENT.into_response()),
   }
}
