//! # Dog Service ライブラリ
//!
//! 犬の登録情報を扱う HTTP CRUD サービス。
//! ルーター構築を公開し、バイナリと統合テストの双方から利用する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State とルーターの組み立て
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - HTTP レスポンスに変換されるエラー
//! - [`handler`] - ルートハンドラ
//! - [`middleware`] - パニック捕捉
//! - [`server`] - リスナーのバインドと起動
//! - [`usecase`] - ビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod server;
pub mod usecase;
