//! SQLite implementation of the conversation archive.
//!
//! Implements `ConversationArchive` from confab-core using sqlx with the
//! split read/write pool. Preferences are upserted with last-write-wins
//! semantics.

use sqlx::Row;

use confab_core::archive::ConversationArchive;
use confab_types::error::StoreError;

use super::pool::DatabasePool;

/// SQLite-backed conversation archive.
pub struct SqliteArchive {
    pool: DatabasePool,
}

impl SqliteArchive {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl ConversationArchive for SqliteArchive {
    async fn save_conversation(&self, user_id: &str, message: &str) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO conversations (user_id, message) VALUES (?, ?)")
            .bind(user_id)
            .bind(message)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn save_turn(
        &self,
        conversation_id: i64,
        content: &str,
        sender: &str,
    ) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO messages (conversation_id, content, sender) VALUES (?, ?, ?)")
            .bind(conversation_id)
            .bind(content)
            .bind(sender)
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn set_preference(
        &self,
        user_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO user_preferences (user_id, preference_key, preference_value)
               VALUES (?, ?, ?)
               ON CONFLICT (user_id, preference_key) DO UPDATE SET preference_value = excluded.preference_value"#,
        )
        .bind(user_id)
        .bind(key)
        .bind(value)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_preference(&self, user_id: &str, key: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query(
            "SELECT preference_value FROM user_preferences WHERE user_id = ? AND preference_key = ?",
        )
        .bind(user_id)
        .bind(key)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let value: String = row
                    .try_get("preference_value")
                    .map_err(|e| StoreError::Query(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_archive() -> (tempfile::TempDir, SqliteArchive) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}/archive.db?mode=rwc", dir.path().display());
        let pool = DatabasePool::new(&url).await.unwrap();
        (dir, SqliteArchive::new(pool))
    }

    #[tokio::test]
    async fn test_save_conversation_and_turns() {
        let (_dir, archive) = test_archive().await;

        let id = archive.save_conversation("user-1", "hello").await.unwrap();
        assert!(id > 0);

        archive.save_turn(id, "hello", "user").await.unwrap();
        archive.save_turn(id, "hi there", "assistant").await.unwrap();

        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM messages WHERE conversation_id = ?")
                .bind(id)
                .fetch_one(&archive.pool.reader)
                .await
                .unwrap();
        assert_eq!(count.0, 2);
    }

    #[tokio::test]
    async fn test_preferences_roundtrip() {
        let (_dir, archive) = test_archive().await;

        assert_eq!(archive.get_preference("u1", "theme").await.unwrap(), None);

        archive.set_preference("u1", "theme", "dark").await.unwrap();
        assert_eq!(
            archive.get_preference("u1", "theme").await.unwrap(),
            Some("dark".to_string())
        );

        // Last write wins
        archive.set_preference("u1", "theme", "light").await.unwrap();
        assert_eq!(
            archive.get_preference("u1", "theme").await.unwrap(),
            Some("light".to_string())
        );
    }

    #[tokio::test]
    async fn test_preferences_scoped_by_user() {
        let (_dir, archive) = test_archive().await;

        archive.set_preference("u1", "lang", "en").await.unwrap();
        assert_eq!(archive.get_preference("u2", "lang").await.unwrap(), None);
    }
}
