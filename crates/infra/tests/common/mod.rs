//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するエンティティ生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use dogpark_domain::dog::{DogAge, NewDog};

/// テスト用の DATABASE_URL
pub fn database_url() -> String {
   dotenvy::dotenv().ok();
   std::env::var("DATABASE_URL").expect("DATABASE_URL must be set (check .env)")
}

/// テスト用の作成入力を生成する
pub fn new_dog(name: &str, age: f64, breed: Option<&str>) -> NewDog {
   NewDog {
      name:        name.to_string(),
      age:         DogAge::new(age).unwrap(),
      breed:       breed.map(str::to_string),
      description: format!("{name} is a good dog"),
   }
}
