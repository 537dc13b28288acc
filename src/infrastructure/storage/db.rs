use crate::domain::error::TranslateError;
use crate::domain::traits::{KeyValueStore, UpdateFn};
use async_trait::async_trait;
use std::path::Path;
use tokio_rusqlite::Connection;

pub async fn init_database(db_path: &Path) -> Result<Connection, TranslateError> {
    let db = Connection::open(db_path.to_path_buf()).await?;
    create_schema(&db).await?;
    Ok(db)
}

/// In-memory database with the same schema.
pub async fn init_memory_database() -> Result<Connection, TranslateError> {
    let db = Connection::open_in_memory().await?;
    create_schema(&db).await?;
    Ok(db)
}

async fn create_schema(db: &Connection) -> Result<(), TranslateError> {
    db.call(|conn| {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                data BLOB NOT NULL,
                compressed_size INTEGER NOT NULL,
                original_size INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_kv_updated ON kv(updated_at)",
            [],
        )?;

        Ok::<_, rusqlite::Error>(())
    })
    .await?;

    Ok(())
}

/// SQLite key-value store, values zstd-compressed
#[derive(Clone)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, TranslateError> {
        get_impl(&self.conn, key).await
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), TranslateError> {
        put_impl(&self.conn, key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), TranslateError> {
        use tokio_rusqlite::params;

        let key = key.to_string();
        self.conn
            .call(move |conn| conn.execute("DELETE FROM kv WHERE key = ?", params![key]))
            .await?;
        Ok(())
    }

    async fn update(&self, key: &str, f: UpdateFn) -> Result<(), TranslateError> {
        update_impl(&self.conn, key, f).await
    }

    async fn count_prefix(&self, prefix: &str) -> Result<usize, TranslateError> {
        use tokio_rusqlite::params;

        // substr 比较，避免 LIKE 的通配符转义
        let prefix = prefix.to_string();
        let count: i64 = self
            .conn
            .call(move |conn| {
                conn.query_row(
                    "SELECT COUNT(*) FROM kv WHERE substr(key, 1, length(?1)) = ?1",
                    params![prefix],
                    |row| row.get(0),
                )
            })
            .await?;
        Ok(count as usize)
    }
}

async fn get_impl(db: &Connection, key: &str) -> Result<Option<Vec<u8>>, TranslateError> {
    use rusqlite::OptionalExtension;
    use std::io::Cursor;
    use tokio_rusqlite::params;
    use zstd::stream::decode_all;

    let key_string = key.to_string();
    let result = db
        .call(move |conn| {
            conn.query_row(
                "SELECT data FROM kv WHERE key = ?",
                params![key_string],
                |row| {
                    let compressed_data: Vec<u8> = row.get(0)?;
                    decode_all(Cursor::new(&compressed_data)).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            0,
                            rusqlite::types::Type::Blob,
                            Box::new(e),
                        )
                    })
                },
            )
            .optional()
        })
        .await?;

    Ok(result)
}

async fn put_impl(db: &Connection, key: &str, value: Vec<u8>) -> Result<(), TranslateError> {
    use std::io::Cursor;
    use tokio_rusqlite::params;
    use zstd::stream::encode_all;

    let compressed = encode_all(Cursor::new(&value), 0)?;
    let now = chrono::Utc::now().timestamp();

    let key_string = key.to_string();
    let compressed_len = compressed.len();
    let original_len = value.len();

    db.call(move |conn| {
        conn.execute(
            "INSERT INTO kv (key, data, compressed_size, original_size, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(key) DO UPDATE SET
                data = excluded.data,
                compressed_size = excluded.compressed_size,
                original_size = excluded.original_size,
                updated_at = excluded.updated_at",
            params![key_string, compressed, compressed_len, original_len, now],
        )
    })
    .await?;

    Ok(())
}

// BEGIN IMMEDIATE 先拿写锁，多个进程同时记录时不会丢更新
async fn update_impl(db: &Connection, key: &str, f: UpdateFn) -> Result<(), TranslateError> {
    use rusqlite::{OptionalExtension, TransactionBehavior};
    use std::io::Cursor;
    use tokio_rusqlite::params;
    use zstd::stream::{decode_all, encode_all};

    fn conversion(e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
        rusqlite::Error::ToSqlConversionFailure(Box::new(e))
    }

    let key_string = key.to_string();
    let now = chrono::Utc::now().timestamp();

    db.call(move |conn| {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current: Option<Vec<u8>> = tx
            .query_row(
                "SELECT data FROM kv WHERE key = ?",
                params![key_string],
                |row| row.get(0),
            )
            .optional()?;
        let current = match current {
            Some(compressed) => Some(decode_all(Cursor::new(&compressed)).map_err(conversion)?),
            None => None,
        };

        let value = f(current).map_err(conversion)?;
        let compressed = encode_all(Cursor::new(&value), 0).map_err(conversion)?;
        let compressed_len = compressed.len();
        let original_len = value.len();

        tx.execute(
            "INSERT INTO kv (key, data, compressed_size, original_size, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(key) DO UPDATE SET
                data = excluded.data,
                compressed_size = excluded.compressed_size,
                original_size = excluded.original_size,
                updated_at = excluded.updated_at",
            params![key_string, compressed, compressed_len, original_len, now],
        )?;
        tx.commit()
    })
    .await?;

    Ok(())
}
