//! Dog 管理ユースケース

use std::sync::Arc;

use dogpark_domain::dog::{Dog, DogId, DogPatch, NewDog};
use dogpark_infra::repository::DogRepository;

use crate::error::CoreError;

/// Dog 管理ユースケース
///
/// 対象が存在しない場合は `None` を返し、レスポンスの決定はハンドラに委ねる。
pub struct DogUseCaseImpl {
   dog_repository: Arc<dyn DogRepository>,
}

impl DogUseCaseImpl {
   pub fn new(dog_repository: Arc<dyn DogRepository>) -> Self {
      Self { dog_repository }
   }

   /// 全件を ID 順で取得する
   pub async fn list_dogs(&self) -> Result<Vec<Dog>, CoreError> {
      let dogs = self.dog_repository.find_all().await?;
      Ok(dogs)
   }

   /// ID で 1 件取得する
   pub async fn get_dog(&self, id: DogId) -> Result<Option<Dog>, CoreError> {
      let dog = self.dog_repository.find_by_id(id).await?;
      Ok(dog)
   }

   /// 検証済みの入力から Dog を作成する
   pub async fn create_dog(&self, new_dog: NewDog) -> Result<Dog, CoreError> {
      let dog = self.dog_repository.insert(&new_dog).await?;
      tracing::info!(dog_id = %dog.id(), "Dog を作成しました");
      Ok(dog)
   }

   /// 指定されたフィールドだけを更新する
   pub async fn update_dog(&self, id: DogId, patch: DogPatch) -> Result<Option<Dog>, CoreError> {
      let updated = self.dog_repository.update(id, &patch).await?;
      if updated.is_some() {
         tracing::info!(dog_id = %id, "Dog を更新しました");
      }
      Ok(updated)
   }

   /// Dog を削除し、削除前の内容を返す
   ///
   /// 1. 存在確認（不在なら `None`）
   /// 2. 削除
   ///
   /// 確認と削除の間に別リクエストが削除した場合も `None` を返す。
   pub async fn delete_dog(&self, id: DogId) -> Result<Option<Dog>, CoreError> {
      if self.dog_repository.find_by_id(id).await?.is_none() {
         return Ok(None);
      }

      let deleted = self.dog_repository.delete(id).await?;
      if deleted.is_some() {
         tracing::info!(dog_id = %id, "Dog を削除しました");
      }
      Ok(deleted)
   }

   /// ストアへの疎通を確認する
   pub async fn check_store(&self) -> Result<(), CoreError> {
      self.dog_repository.ping().await?;
      Ok(())
   }
}
