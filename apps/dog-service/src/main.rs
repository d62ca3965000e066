//! # Dog Service サーバー
//!
//! 犬の登録情報（名前・年齢・品種・説明）を管理する HTTP サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `ENVIRONMENT` | No | `test` のときポート 3001、それ以外は 3000 |
//! | `DOGPARK_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,dogpark=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p dogpark-service
//!
//! # 本番環境
//! DATABASE_URL=postgres://... LOG_FORMAT=json cargo run -p dogpark-service --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use dogpark_infra::{db, repository::PostgresDogRepository};
use dogpark_service::{app_builder::build_app, config::ServerConfig, server};
use dogpark_shared::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   init_tracing();
   let _tracing_guard = tracing::info_span!("app", service = "dog-service").entered();

   // 設定読み込み
   let config = ServerConfig::from_env().context("DATABASE_URL が設定されていません")?;

   tracing::info!(
      environment = %config.environment,
      "Dog Service サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // データベース接続プールを作成し、マイグレーションを適用
   let pool = db::create_pool(&config.database_url)
      .await
      .context("データベース接続に失敗しました")?;
   db::run_migrations(&pool)
      .await
      .context("マイグレーションの適用に失敗しました")?;
   tracing::info!("データベースに接続しました");

   let app = build_app(Arc::new(PostgresDogRepository::new(pool)));

   server::serve(&config, app).await
}
