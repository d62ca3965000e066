//! DogRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロがテストごとに
//! 一時データベースを作成し、マイグレーションを適用する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p dogpark-infra --features postgres-tests --test dog_repository_test
//! ```

mod common;

use common::new_dog;
use dogpark_domain::dog::{DogAge, DogId, DogPatch};
use dogpark_infra::repository::{DogRepository, PostgresDogRepository};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

// =============================================================================
// insert / find
// =============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_insertは採番済みidを含むレコードを返す(pool: PgPool) {
   // Arrange
   let sut = PostgresDogRepository::new(pool);

   // Act
   let dog = sut.insert(&new_dog("Rex", 3.0, Some("Lab"))).await.unwrap();

   // Assert
   assert!(dog.id().as_i32() > 0);
   assert_eq!(dog.name(), "Rex");
   assert_eq!(dog.age().as_f64(), 3.0);
   assert_eq!(dog.breed(), Some("Lab"));
   assert_eq!(dog.description(), "Rex is a good dog");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_by_idで挿入したレコードを取得できる(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);
   let inserted = sut.insert(&new_dog("Rex", 2.5, None)).await.unwrap();

   let found = sut.find_by_id(inserted.id()).await.unwrap();

   assert_eq!(found, Some(inserted));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_by_idで存在しないidはnoneを返す(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);

   let found = sut.find_by_id(DogId::from_i32(9999)).await.unwrap();

   assert_eq!(found, None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_allはid順で全件を返す(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);
   let rex = sut.insert(&new_dog("Rex", 3.0, None)).await.unwrap();
   let max = sut.insert(&new_dog("Max", 5.0, Some("Beagle"))).await.unwrap();

   let first = sut.find_all().await.unwrap();
   let second = sut.find_all().await.unwrap();

   assert_eq!(first, vec![rex, max]);
   assert_eq!(first, second);
}

// =============================================================================
// update
// =============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_updateは指定フィールドのみ更新する(pool: PgPool) {
   // Arrange
   let sut = PostgresDogRepository::new(pool);
   let dog = sut.insert(&new_dog("Rex", 3.0, Some("Lab"))).await.unwrap();
   let patch = DogPatch {
      age: Some(DogAge::new(4.0).unwrap()),
      ..DogPatch::default()
   };

   // Act
   let updated = sut.update(dog.id(), &patch).await.unwrap().unwrap();

   // Assert
   assert_eq!(updated.id(), dog.id());
   assert_eq!(updated.name(), "Rex");
   assert_eq!(updated.age().as_f64(), 4.0);
   assert_eq!(updated.breed(), Some("Lab"));
   assert_eq!(updated.description(), dog.description());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_updateでbreedをnullにクリアできる(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);
   let dog = sut.insert(&new_dog("Rex", 3.0, Some("Lab"))).await.unwrap();
   let patch = DogPatch {
      breed: Some(None),
      ..DogPatch::default()
   };

   let updated = sut.update(dog.id(), &patch).await.unwrap().unwrap();

   assert_eq!(updated.breed(), None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_空のパッチでは何も変わらない(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);
   let dog = sut.insert(&new_dog("Rex", 3.0, Some("Lab"))).await.unwrap();

   let updated = sut.update(dog.id(), &DogPatch::default()).await.unwrap();

   assert_eq!(updated, Some(dog));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_updateで存在しないidはnoneを返す(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);
   let patch = DogPatch {
      name: Some("Ghost".to_string()),
      ..DogPatch::default()
   };

   let updated = sut.update(DogId::from_i32(9999), &patch).await.unwrap();

   assert_eq!(updated, None);
}

// =============================================================================
// delete / ping
// =============================================================================

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleteは削除前のレコードを返し二回目はnoneを返す(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);
   let dog = sut.insert(&new_dog("Rex", 3.0, None)).await.unwrap();

   let first = sut.delete(dog.id()).await.unwrap();
   let second = sut.delete(dog.id()).await.unwrap();

   assert_eq!(first, Some(dog.clone()));
   assert_eq!(second, None);
   assert_eq!(sut.find_by_id(dog.id()).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_pingは接続中なら成功する(pool: PgPool) {
   let sut = PostgresDogRepository::new(pool);

   assert!(sut.ping().await.is_ok());
}
