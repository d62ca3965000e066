//! # Dogpark インフラ層
//!
//! 外部システム（PostgreSQL）との接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトとその具体的な実装を提供し、SQL やコネクションプールの
//! 詳細をユースケース層から隠蔽する。
//!
//! ## 依存関係
//!
//! ```text
//! dog-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//! - `mock` - テスト用インメモリ実装（`test-utils` feature）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use dogpark_infra::{db, repository::PostgresDogRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/dogpark").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let repository = PostgresDogRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
