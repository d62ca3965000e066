//! # リポジトリ実装
//!
//! 永続化操作のトレイトとその PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod dog_repository;

pub use dog_repository::{DogRepository, PostgresDogRepository};
