//! # Dog
//!
//! 登録された犬を表現するドメインモデル。
//!
//! ## 構成
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`DogId`] | ストアが採番する正の整数 ID |
//! | [`DogAge`] | 有限の数値に正規化された年齢 |
//! | [`Dog`] | 永続化済みのエンティティ |
//! | [`NewDog`] | 作成時の入力（ID なし） |
//! | [`DogPatch`] | 部分更新の入力（指定されたフィールドのみ） |
//!
//! リクエストボディの検証は [`validation`] モジュールが担当する。
//!
//! ## 使用例
//!
//! ```rust
//! use dogpark_domain::dog::{Dog, DogAge, DogId, DogPatch};
//!
//! let dog = Dog::from_db(
//!     DogId::from_i32(1),
//!     "Rex".to_string(),
//!     DogAge::new(3.0).unwrap(),
//!     Some("Lab".to_string()),
//!     "friendly".to_string(),
//! );
//!
//! let patch = DogPatch {
//!     name: Some("Max".to_string()),
//!     ..DogPatch::default()
//! };
//! let updated = dog.apply_patch(&patch);
//! assert_eq!(updated.name(), "Max");
//! assert_eq!(updated.breed(), Some("Lab"));
//! ```

pub mod validation;

use derive_more::Display;
use serde_json::Value as JsonValue;

use crate::DomainError;

/// ID 形式が不正な場合にクライアントへ返すメッセージ
pub const INVALID_ID_MESSAGE: &str = "id should be a number";

// =========================================================================
// DogId
// =========================================================================

/// Dog の一意識別子
///
/// ストア（PostgreSQL の `SERIAL`）が採番する。作成後は不変。
///
/// # 不変条件
///
/// - 1 以上の `i32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct DogId(i32);

impl DogId {
   /// パスセグメントから ID をパースする
   ///
   /// ASCII の 10 進数字のみで構成され、`i32` に収まる 1 以上の値だけを受け付ける。
   /// 符号・空白・小数点を含む文字列は拒否する。
   pub fn parse(segment: &str) -> Result<Self, DomainError> {
      if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
         return Err(DomainError::Validation(INVALID_ID_MESSAGE.to_string()));
      }

      match segment.parse::<i32>() {
         Ok(value) if value > 0 => Ok(Self(value)),
         _ => Err(DomainError::Validation(INVALID_ID_MESSAGE.to_string())),
      }
   }

   /// ストアから読み込んだ値で ID を復元する
   pub fn from_i32(value: i32) -> Self {
      Self(value)
   }

   /// 内部の i32 値を取得する
   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

// =========================================================================
// DogAge
// =========================================================================

/// 年齢（値オブジェクト）
///
/// JSON の数値、または数値として解釈できる文字列から生成する。
///
/// # 不変条件
///
/// - 有限の `f64`（NaN / 無限大を含まない）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DogAge(f64);

impl DogAge {
   pub fn new(value: f64) -> Result<Self, DomainError> {
      if !value.is_finite() {
         return Err(DomainError::Validation(
            "年齢は有限の数値である必要があります".to_string(),
         ));
      }
      Ok(Self(value))
   }

   /// JSON 値を年齢に変換する
   ///
   /// - 数値: そのまま採用
   /// - 文字列: 前後の空白を除去して数値としてパース（空文字列は不可）
   /// - それ以外（`null`, 真偽値, 配列, オブジェクト）: `None`
   ///
   /// 空文字列・真偽値・`"0x10"` のような 16 進表記は数値とみなさない。
   pub fn from_json(value: &JsonValue) -> Option<Self> {
      let number = match value {
         JsonValue::Number(n) => n.as_f64()?,
         JsonValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
               return None;
            }
            trimmed.parse::<f64>().ok()?
         }
         _ => return None,
      };
      Self::new(number).ok()
   }

   /// 内部の f64 値を取得する
   pub fn as_f64(&self) -> f64 {
      self.0
   }
}

// =========================================================================
// Dog
// =========================================================================

/// Dog エンティティ
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
   id:          DogId,
   name:        String,
   age:         DogAge,
   breed:       Option<String>,
   description: String,
}

impl Dog {
   /// ストアの行から Dog を復元する
   pub fn from_db(
      id: DogId,
      name: String,
      age: DogAge,
      breed: Option<String>,
      description: String,
   ) -> Self {
      Self {
         id,
         name,
         age,
         breed,
         description,
      }
   }

   /// 採番済みの ID と作成入力から Dog を組み立てる
   pub fn from_new(id: DogId, new_dog: NewDog) -> Self {
      Self {
         id,
         name: new_dog.name,
         age: new_dog.age,
         breed: new_dog.breed,
         description: new_dog.description,
      }
   }

   /// 部分更新を適用した新インスタンスを返す
   ///
   /// `patch` で指定されたフィールドのみを置き換える。ID は変更しない。
   pub fn apply_patch(&self, patch: &DogPatch) -> Self {
      Self {
         id:          self.id,
         name:        patch.name.clone().unwrap_or_else(|| self.name.clone()),
         age:         patch.age.unwrap_or(self.age),
         breed:       match &patch.breed {
            Some(breed) => breed.clone(),
            None => self.breed.clone(),
         },
         description: patch
            .description
            .clone()
            .unwrap_or_else(|| self.description.clone()),
      }
   }

   // --- ゲッター ---

   pub fn id(&self) -> DogId {
      self.id
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn age(&self) -> DogAge {
      self.age
   }

   pub fn breed(&self) -> Option<&str> {
      self.breed.as_deref()
   }

   pub fn description(&self) -> &str {
      &self.description
   }
}

/// Dog 作成の入力
#[derive(Debug, Clone, PartialEq)]
pub struct NewDog {
   pub name:        String,
   pub age:         DogAge,
   pub breed:       Option<String>,
   pub description: String,
}

/// Dog 部分更新の入力
///
/// - 各フィールド: 変更なしは `None`
/// - `breed`: 変更なしは `None`、クリアは `Some(None)`、変更は `Some(Some(value))`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DogPatch {
   pub name:        Option<String>,
   pub age:         Option<DogAge>,
   pub breed:       Option<Option<String>>,
   pub description: Option<String>,
}

impl DogPatch {
   /// 変更対象のフィールドが 1 つもないか
   pub fn is_empty(&self) -> bool {
      self.name.is_none() && self.age.is_none() && self.breed.is_none() && self.description.is_none()
   }
}
