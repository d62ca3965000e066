//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! dogpark-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use dogpark_domain::dog::{Dog, DogId, DogPatch, NewDog};

use crate::{error::InfraError, repository::DogRepository};

// ===== MockDogRepository =====

/// インメモリの DogRepository
///
/// ID は 1 から順に採番する。[`set_failing`](Self::set_failing) で
/// すべての操作がエラーを返すモードに切り替えられる。
#[derive(Clone, Default)]
pub struct MockDogRepository {
   dogs:    Arc<Mutex<Vec<Dog>>>,
   next_id: Arc<Mutex<i32>>,
   failing: Arc<AtomicBool>,
}

impl MockDogRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 以降のすべての操作をエラーにする（`true`）/ 正常に戻す（`false`）
   pub fn set_failing(&self, failing: bool) {
      self.failing.store(failing, Ordering::SeqCst);
   }

   /// 保持している件数
   pub fn len(&self) -> usize {
      self.dogs.lock().unwrap().len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }

   fn check_available(&self) -> Result<(), InfraError> {
      if self.failing.load(Ordering::SeqCst) {
         return Err(InfraError::unavailable("モックストアは障害モードです"));
      }
      Ok(())
   }
}

#[async_trait]
impl DogRepository for MockDogRepository {
   async fn find_all(&self) -> Result<Vec<Dog>, InfraError> {
      self.check_available()?;
      let mut dogs = self.dogs.lock().unwrap().clone();
      dogs.sort_by_key(Dog::id);
      Ok(dogs)
   }

   async fn find_by_id(&self, id: DogId) -> Result<Option<Dog>, InfraError> {
      self.check_available()?;
      Ok(self
         .dogs
         .lock()
         .unwrap()
         .iter()
         .find(|d| d.id() == id)
         .cloned())
   }

   async fn insert(&self, new_dog: &NewDog) -> Result<Dog, InfraError> {
      self.check_available()?;
      let id = {
         let mut next_id = self.next_id.lock().unwrap();
         *next_id += 1;
         DogId::from_i32(*next_id)
      };
      let dog = Dog::from_new(id, new_dog.clone());
      self.dogs.lock().unwrap().push(dog.clone());
      Ok(dog)
   }

   async fn update(&self, id: DogId, patch: &DogPatch) -> Result<Option<Dog>, InfraError> {
      self.check_available()?;
      let mut dogs = self.dogs.lock().unwrap();
      let Some(dog) = dogs.iter_mut().find(|d| d.id() == id) else {
         return Ok(None);
      };
      *dog = dog.apply_patch(patch);
      Ok(Some(dog.clone()))
   }

   async fn delete(&self, id: DogId) -> Result<Option<Dog>, InfraError> {
      self.check_available()?;
      let mut dogs = self.dogs.lock().unwrap();
      let Some(index) = dogs.iter().position(|d| d.id() == id) else {
         return Ok(None);
      };
      Ok(Some(dogs.remove(index)))
   }

   async fn ping(&self) -> Result<(), InfraError> {
      self.check_available()
   }
}
