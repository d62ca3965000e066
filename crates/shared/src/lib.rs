//! # Dogpark 共有ユーティリティ
//!
//! サービス全体で使用される共通のレスポンス型とトレーシング初期化を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換はサービス側の責務）

pub mod error_response;
pub mod health;
pub mod message_response;
pub mod observability;

pub use error_response::ErrorListResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use message_response::MessageResponse;
