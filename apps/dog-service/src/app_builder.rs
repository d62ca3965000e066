//! # アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use dogpark_infra::repository::DogRepository;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
   handler::{
      DogState,
      ReadinessState,
      create_dog,
      delete_dog,
      get_dog,
      health_check,
      hello,
      list_dogs,
      readiness_check,
      update_dog,
   },
   middleware::handle_panic,
   usecase::DogUseCaseImpl,
};

/// ルーターを構築し、共通レイヤーを適用する
///
/// リポジトリを受け取り、ユースケース → State → Router の順に組み立てる。
pub fn build_app(dog_repository: Arc<dyn DogRepository>) -> Router {
   with_middleware(build_routes(dog_repository))
}

/// ルート定義のみを行う（レイヤーなし）
pub fn build_routes(dog_repository: Arc<dyn DogRepository>) -> Router {
   let usecase = Arc::new(DogUseCaseImpl::new(dog_repository));

   let dog_state = Arc::new(DogState {
      usecase: usecase.clone(),
   });
   let readiness_state = Arc::new(ReadinessState { usecase });

   Router::new()
      .route("/", get(hello))
      .route("/health", get(health_check))
      .route("/health/ready", get(readiness_check))
      .with_state(readiness_state)
      .route("/dogs", get(list_dogs).post(create_dog))
      .route(
         "/dogs/{id}",
         get(get_dog).patch(update_dog).delete(delete_dog),
      )
      .with_state(dog_state)
}

/// トレーシングとパニック捕捉のレイヤーを適用する
///
/// パニック捕捉は最も外側に置く。
pub fn with_middleware(router: Router) -> Router {
   router
      .layer(TraceLayer::new_for_http())
      .layer(CatchPanicLayer::custom(handle_panic))
}
