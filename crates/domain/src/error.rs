//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 単一の値の検証失敗（ID 形式など） |
//! | `InvalidFields` | 400 Bad Request | リクエストボディの検証失敗（複数メッセージ） |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 単一の値がルールに違反している場合に使用する。
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// フィールド検証エラー
   ///
   /// リクエストボディの検証で収集したメッセージをすべて保持する。
   /// メッセージはクライアントにそのまま返されるため英語で記述する。
   #[error("フィールド検証エラー: {}", .0.join(", "))]
   InvalidFields(Vec<String>),
}

impl DomainError {
   /// クライアントに返すメッセージの一覧を取得する
   pub fn messages(&self) -> Vec<String> {
      match self {
         DomainError::Validation(msg) => vec![msg.clone()],
         DomainError::InvalidFields(messages) => messages.clone(),
      }
   }
}
