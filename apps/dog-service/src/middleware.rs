//! # ミドルウェア
//!
//! ルーター全体に適用するレイヤーを定義する。

pub mod panic;

pub use panic::{PANIC_RESPONSE_BODY, handle_panic};
