//! # ユースケース層
//!
//! Dog Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力の解釈とレスポンス整形のみを担う

pub mod dog;

pub use dog::DogUseCaseImpl;
