//! # ストアエラー
//!
//! `dogs` テーブルへのアクセスで起きる失敗を [`InfraError`] にまとめる。
//! 種別は [`InfraErrorKind`] で表し、生成時点の [`SpanTrace`] を添える。
//! 500 応答のログにはこの SpanTrace を出力する。

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// ストア操作の失敗
#[derive(Debug, Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// ストア操作の失敗の種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// クエリ実行や接続の失敗
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// 行の値が Dog として成り立たない（例: `age` が NaN）
   #[error("dogs.id={id} の行が不正です: {reason}")]
   CorruptRow { id: i32, reason: String },

   /// ストアが応答できない状態
   #[error("ストアを利用できません: {0}")]
   Unavailable(String),
}

impl InfraError {
   fn capture(kind: InfraErrorKind) -> Self {
      Self {
         kind,
         span_trace: SpanTrace::capture(),
      }
   }

   pub fn corrupt_row(id: i32, reason: impl Into<String>) -> Self {
      Self::capture(InfraErrorKind::CorruptRow {
         id,
         reason: reason.into(),
      })
   }

   pub fn unavailable(detail: impl Into<String>) -> Self {
      Self::capture(InfraErrorKind::Unavailable(detail.into()))
   }

   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      match &self.kind {
         InfraErrorKind::Database(e) => Some(e),
         InfraErrorKind::CorruptRow { .. } | InfraErrorKind::Unavailable(_) => None,
      }
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self::capture(InfraErrorKind::Database(source))
   }
}
