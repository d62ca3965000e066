//! # DogRepository
//!
//! Dog の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID 採番はストアに委譲**: `SERIAL` 列が採番し、`RETURNING` で受け取る
//! - **不在は `None`**: 更新・削除対象が存在しない場合はエラーではなく `None` を返す
//! - **部分更新は SQL 側で合成**: 指定されていない列は `COALESCE` で現在値を維持する

use async_trait::async_trait;
use dogpark_domain::dog::{Dog, DogAge, DogId, DogPatch, NewDog};
use sqlx::PgPool;

use crate::error::InfraError;

/// Dog リポジトリトレイト
#[async_trait]
pub trait DogRepository: Send + Sync {
    /// すべての Dog を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Dog>, InfraError>;

    /// ID で Dog を検索する
    async fn find_by_id(&self, id: DogId) -> Result<Option<Dog>, InfraError>;

    /// Dog を挿入し、採番済みの ID を含むレコードを返す
    async fn insert(&self, new_dog: &NewDog) -> Result<Dog, InfraError>;

    /// 指定されたフィールドだけを更新する
    ///
    /// 対象が存在しない場合は `None` を返す。
    async fn update(&self, id: DogId, patch: &DogPatch) -> Result<Option<Dog>, InfraError>;

    /// Dog を削除し、削除前のレコードを返す
    ///
    /// 対象が存在しない場合は `None` を返す。
    async fn delete(&self, id: DogId) -> Result<Option<Dog>, InfraError>;

    /// ストアへの疎通を確認する（Readiness Check 用）
    async fn ping(&self) -> Result<(), InfraError>;
}

/// `dogs` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct DogRow {
    id:          i32,
    name:        String,
    age:         f64,
    breed:       Option<String>,
    description: String,
}

impl TryFrom<DogRow> for Dog {
    type Error = InfraError;

    fn try_from(row: DogRow) -> Result<Self, Self::Error> {
        let age = DogAge::new(row.age)
            .map_err(|e| InfraError::corrupt_row(row.id, format!("age={}: {e}", row.age)))?;

        Ok(Dog::from_db(
            DogId::from_i32(row.id),
            row.name,
            age,
            row.breed,
            row.description,
        ))
    }
}

/// PostgreSQL 実装の DogRepository
#[derive(Debug, Clone)]
pub struct PostgresDogRepository {
    pool: PgPool,
}

impl PostgresDogRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogRepository for PostgresDogRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Dog>, InfraError> {
        let rows = sqlx::query_as::<_, DogRow>(
            r#"
            SELECT id, name, age, breed, description
            FROM dogs
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Dog::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: DogId) -> Result<Option<Dog>, InfraError> {
        let row = sqlx::query_as::<_, DogRow>(
            r#"
            SELECT id, name, age, breed, description
            FROM dogs
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Dog::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_dog: &NewDog) -> Result<Dog, InfraError> {
        let row = sqlx::query_as::<_, DogRow>(
            r#"
            INSERT INTO dogs (name, age, breed, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, age, breed, description
            "#,
        )
        .bind(&new_dog.name)
        .bind(new_dog.age.as_f64())
        .bind(new_dog.breed.as_deref())
        .bind(&new_dog.description)
        .fetch_one(&self.pool)
        .await?;

        Dog::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update(&self, id: DogId, patch: &DogPatch) -> Result<Option<Dog>, InfraError> {
        // breed は「変更なし」と「NULL にクリア」を区別するためフラグを別に渡す
        let (breed_supplied, breed) = match &patch.breed {
            Some(breed) => (true, breed.as_deref()),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, DogRow>(
            r#"
            UPDATE dogs
            SET name = COALESCE($2, name),
                age = COALESCE($3, age),
                breed = CASE WHEN $4 THEN $5 ELSE breed END,
                description = COALESCE($6, description)
            WHERE id = $1
            RETURNING id, name, age, breed, description
            "#,
        )
        .bind(id.as_i32())
        .bind(patch.name.as_deref())
        .bind(patch.age.map(|age| age.as_f64()))
        .bind(breed_supplied)
        .bind(breed)
        .bind(patch.description.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Dog::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: DogId) -> Result<Option<Dog>, InfraError> {
        let row = sqlx::query_as::<_, DogRow>(
            r#"
            DELETE FROM dogs
            WHERE id = $1
            RETURNING id, name, age, breed, description
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Dog::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
