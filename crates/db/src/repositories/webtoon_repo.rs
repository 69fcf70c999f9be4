//! Repository for the `webtoons` table.

use sqlx::PgPool;
use toonvault_core::types::DbId;

use crate::models::webtoon::{Webtoon, WebtoonDraft};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, characters, created_at";

/// Provides the find-all / find-by-key / insert / delete-by-key
/// capability over webtoon records.
pub struct WebtoonRepo;

impl WebtoonRepo {
    /// List every webtoon in insertion order (ascending id), so repeated
    /// listings with no intervening writes return the same sequence.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Webtoon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webtoons ORDER BY id");
        sqlx::query_as::<_, Webtoon>(&query).fetch_all(pool).await
    }

    /// Find a webtoon by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Webtoon>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM webtoons WHERE id = $1");
        sqlx::query_as::<_, Webtoon>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a validated draft, returning the created row with its
    /// store-assigned id.
    pub async fn insert(pool: &PgPool, draft: &WebtoonDraft) -> Result<Webtoon, sqlx::Error> {
        let query = format!(
            "INSERT INTO webtoons (title, description, characters)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Webtoon>(&query)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(&draft.characters)
            .fetch_one(pool)
            .await
    }

    /// Delete a webtoon by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM webtoons WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
