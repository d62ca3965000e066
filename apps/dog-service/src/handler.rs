//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲

pub mod dog;
pub mod health;
pub mod root;

pub use dog::{DogDto, DogState, create_dog, delete_dog, get_dog, list_dogs, update_dog};
pub use health::{ReadinessState, health_check, readiness_check};
pub use root::hello;
