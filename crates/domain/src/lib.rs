//! # Dogpark ドメイン層
//!
//! 犬の登録情報（Dog）を表現するドメインモデルと、
//! リクエストボディの検証ルールを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! dog-service → infra → domain
//!      ↓                  ↑
//!      └──────────────────┘
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`dog`] - Dog エンティティ、値オブジェクト、検証ルール
//!
//! ## 使用例
//!
//! ```rust
//! use dogpark_domain::dog::DogId;
//!
//! let id = DogId::parse("42").unwrap();
//! assert_eq!(id.as_i32(), 42);
//! assert!(DogId::parse("abc").is_err());
//! ```

pub mod dog;
pub mod error;

pub use error::DomainError;
