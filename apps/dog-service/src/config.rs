//! # Dog Service 設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ENVIRONMENT` | No | 実行環境（デフォルト: `development`）。`test` のときポート 3001 |
//! | `DOGPARK_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |

use std::env;

/// 通常のポート番号
pub const DEFAULT_PORT: u16 = 3000;

/// `ENVIRONMENT=test` のときのポート番号
pub const TEST_PORT: u16 = 3001;

/// Dog Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
   /// バインドアドレス
   pub host:         String,
   /// ポート番号
   pub port:         u16,
   /// 実行環境
   pub environment:  String,
   /// データベース接続 URL
   pub database_url: String,
}

impl ServerConfig {
   /// 環境変数から設定を読み込む
   ///
   /// `DATABASE_URL` が未設定の場合はエラーを返す。
   pub fn from_env() -> Result<Self, env::VarError> {
      let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

      Ok(Self {
         host: env::var("DOGPARK_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: port_for_environment(&environment),
         environment,
         database_url: env::var("DATABASE_URL")?,
      })
   }
}

/// 実行環境からポート番号を決定する
pub fn port_for_environment(environment: &str) -> u16 {
   if environment == "test" {
      TEST_PORT
   } else {
      DEFAULT_PORT
   }
}
