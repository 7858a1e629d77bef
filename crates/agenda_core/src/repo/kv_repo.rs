//! Namespaced key-value repository contracts and SQLite implementation.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type KvResult<T> = Result<T, KvError>;

/// Errors from key-value repository operations.
#[derive(Debug)]
pub enum KvError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "kv repository requires schema version {expected_version}, got {actual_version}"
            ),
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for namespaced text blobs.
pub trait KvRepository {
    /// Loads one value, `None` when absent.
    fn get(&self, namespace: &str, key: &str) -> KvResult<Option<String>>;
    /// Upserts all entries in one transaction.
    fn put_many(&self, namespace: &str, entries: &[(&str, String)]) -> KvResult<()>;
    /// Deletes every key in `namespace`. Returns the number of removed keys.
    fn clear_namespace(&self, namespace: &str) -> KvResult<usize>;
    /// Lists keys in `namespace`, sorted ascending.
    fn list_keys(&self, namespace: &str) -> KvResult<Vec<String>>;
}

/// SQLite-backed key-value repository.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    /// Creates repository from a migrated connection.
    ///
    /// # Errors
    /// - Returns `KvError::UninitializedConnection` when the connection was
    ///   not opened through `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> KvResult<Self> {
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(KvError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get(&self, namespace: &str, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
                params![namespace, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_many(&self, namespace: &str, entries: &[(&str, String)]) -> KvResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO kv_entries (namespace, key, value)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(namespace, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
            )?;
            for (key, value) in entries {
                stmt.execute(params![namespace, key, value])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn clear_namespace(&self, namespace: &str) -> KvResult<usize> {
        let removed = self.conn.execute(
            "DELETE FROM kv_entries WHERE namespace = ?1;",
            params![namespace],
        )?;
        Ok(removed)
    }

    fn list_keys(&self, namespace: &str) -> KvResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries WHERE namespace = ?1 ORDER BY key ASC;")?;
        let keys = stmt
            .query_map(params![namespace], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::{KvError, KvRepository, SqliteKvRepository};
    use crate::db::open_db_in_memory;
    use rusqlite::Connection;

    #[test]
    fn try_new_rejects_unmigrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteKvRepository::try_new(&conn)
            .err()
            .expect("unmigrated connection must be rejected");
        assert!(matches!(
            err,
            KvError::UninitializedConnection {
                actual_version: 0,
                ..
            }
        ));
    }

    #[test]
    fn put_many_upserts_and_namespaces_are_isolated() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteKvRepository::try_new(&conn).unwrap();

        repo.put_many("a", &[("k1", "v1".to_string()), ("k2", "v2".to_string())])
            .unwrap();
        repo.put_many("a", &[("k1", "v1b".to_string())]).unwrap();
        repo.put_many("b", &[("k1", "other".to_string())]).unwrap();

        assert_eq!(repo.get("a", "k1").unwrap().as_deref(), Some("v1b"));
        assert_eq!(repo.get("b", "k1").unwrap().as_deref(), Some("other"));
        assert_eq!(repo.get("a", "missing").unwrap(), None);
        assert_eq!(repo.list_keys("a").unwrap(), vec!["k1", "k2"]);

        assert_eq!(repo.clear_namespace("a").unwrap(), 2);
        assert!(repo.list_keys("a").unwrap().is_empty());
        assert_eq!(repo.list_keys("b").unwrap(), vec!["k1"]);
    }
}
