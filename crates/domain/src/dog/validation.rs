//! # リクエストボディの検証
//!
//! POST / PATCH で受け取った JSON オブジェクトを検証し、
//! [`NewDog`] / [`DogPatch`] に変換する。
//!
//! ## 検証の順序
//!
//! 1. 未知キーチェック: `name`, `age`, `breed`, `description` 以外のキーがあれば
//!    キーごとに `'<key>' is not a valid key` を返し、以降の検証は行わない
//! 2. 型チェック: 全ルールを評価し、エラーメッセージをすべて収集する
//!
//! POST と PATCH は同じ型ルールを共有する。PATCH ではボディに含まれるキーだけを検証する。
//!
//! メッセージはクライアントにそのまま返すため英語で記述する。

use serde_json::{Map, Value as JsonValue};

use super::{DogAge, DogPatch, NewDog};
use crate::DomainError;

/// リクエストボディの JSON オブジェクト
pub type JsonObject = Map<String, JsonValue>;

/// ボディに指定できるキー
pub const ALLOWED_KEYS: [&str; 4] = ["name", "age", "breed", "description"];

pub const AGE_MESSAGE: &str = "age should be a number";
pub const NAME_MESSAGE: &str = "name should be a string";
pub const DESCRIPTION_MESSAGE: &str = "description should be a string";
pub const BREED_MESSAGE: &str = "breed should be a string";

/// 未知キーを検出する
///
/// 許可されていないキーごとにメッセージを 1 つ返す。すべて許可キーなら空。
/// 順序はボディ内でキーが現れた順（`serde_json` の `preserve_order`）。
pub fn check_unknown_keys(body: &JsonObject) -> Vec<String> {
   body
      .keys()
      .filter(|key| !ALLOWED_KEYS.contains(&key.as_str()))
      .map(|key| format!("'{key}' is not a valid key"))
      .collect()
}

/// 作成用ボディを検証し、エラーメッセージを返す
pub fn check_new_dog(body: &JsonObject) -> Vec<String> {
   match parse_new_dog(body) {
      Ok(_) => Vec::new(),
      Err(err) => err.messages(),
   }
}

/// 部分更新用ボディを検証し、エラーメッセージを返す
pub fn check_dog_patch(body: &JsonObject) -> Vec<String> {
   match parse_dog_patch(body) {
      Ok(_) => Vec::new(),
      Err(err) => err.messages(),
   }
}

/// 作成用ボディを [`NewDog`] に変換する
///
/// `name`, `age`, `description` は必須。`breed` は省略または `null` を許可する。
/// `age` は数値に正規化する。
pub fn parse_new_dog(body: &JsonObject) -> Result<NewDog, DomainError> {
   reject_unknown_keys(body)?;

   let mut errors = Vec::new();

   let age = body.get("age").and_then(DogAge::from_json);
   if age.is_none() {
      errors.push(AGE_MESSAGE.to_string());
   }

   let name = body.get("name").and_then(JsonValue::as_str);
   if name.is_none() {
      errors.push(NAME_MESSAGE.to_string());
   }

   let description = body.get("description").and_then(JsonValue::as_str);
   if description.is_none() {
      errors.push(DESCRIPTION_MESSAGE.to_string());
   }

   let breed = match body.get("breed") {
      None => Some(None),
      Some(value) => optional_string(value),
   };
   if breed.is_none() {
      errors.push(BREED_MESSAGE.to_string());
   }

   match (name, age, breed, description) {
      (Some(name), Some(age), Some(breed), Some(description)) if errors.is_empty() => Ok(NewDog {
         name: name.to_string(),
         age,
         breed,
         description: description.to_string(),
      }),
      _ => Err(DomainError::InvalidFields(errors)),
   }
}

/// 部分更新用ボディを [`DogPatch`] に変換する
///
/// ボディに含まれるキーだけを検証し、含まれないキーは「変更なし」として扱う。
/// `breed: null` は品種のクリアを意味する。
pub fn parse_dog_patch(body: &JsonObject) -> Result<DogPatch, DomainError> {
   reject_unknown_keys(body)?;

   let mut errors = Vec::new();
   let mut patch = DogPatch::default();

   if let Some(value) = body.get("age") {
      match DogAge::from_json(value) {
         Some(age) => patch.age = Some(age),
         None => errors.push(AGE_MESSAGE.to_string()),
      }
   }

   if let Some(value) = body.get("name") {
      match value.as_str() {
         Some(name) => patch.name = Some(name.to_string()),
         None => errors.push(NAME_MESSAGE.to_string()),
      }
   }

   if let Some(value) = body.get("description") {
      match value.as_str() {
         Some(description) => patch.description = Some(description.to_string()),
         None => errors.push(DESCRIPTION_MESSAGE.to_string()),
      }
   }

   if let Some(value) = body.get("breed") {
      match optional_string(value) {
         Some(breed) => patch.breed = Some(breed),
         None => errors.push(BREED_MESSAGE.to_string()),
      }
   }

   if errors.is_empty() {
      Ok(patch)
   } else {
      Err(DomainError::InvalidFields(errors))
   }
}

fn reject_unknown_keys(body: &JsonObject) -> Result<(), DomainError> {
   let unknown = check_unknown_keys(body);
   if unknown.is_empty() {
      Ok(())
   } else {
      Err(DomainError::InvalidFields(unknown))
   }
}

/// `null` または文字列を `Option<String>` に変換する（それ以外は `None`）
fn optional_string(value: &JsonValue) -> Option<Option<String>> {
   match value {
      JsonValue::Null => Some(None),
      JsonValue::String(s) => Some(Some(s.clone())),
      _ => None,
   }
}
