//! # サーバー起動
//!
//! 設定に従ってリスナーをバインドし、ルーターを提供する。

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

/// 設定されたアドレスでサーバーを起動する
///
/// シャットダウンされるまで戻らない。
pub async fn serve(config: &ServerConfig, app: Router) -> anyhow::Result<()> {
   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Dog Service サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
