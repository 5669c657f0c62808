use rusqlite::{ffi, params, Error as SqlError, OptionalExtension, Row};
use thiserror::Error;

use super::connection::Store;
use crate::models::{Item, ItemFields};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("item {0} already exists")]
    DuplicateKey(i64),
    #[error("item {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] SqlError),
}

const ITEM_COLUMNS: &str = "id, name, price, quantity, release_year";

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        quantity: row.get(3)?,
        release_year: row.get(4)?,
    })
}

impl Store {
    /// Whether a row with `id` is stored.
    pub fn exists(&self, id: i64) -> RepoResult<bool> {
        let conn = self.session()?;
        let found = conn
            .query_row("SELECT 1 FROM items WHERE id = ?1", [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// Insert a new row. The id is checked up front for a friendly error, and
    /// a primary key violation from SQLite maps to the same error. Other
    /// constraint failures (a NaN price is stored as NULL) stay `Storage`.
    pub fn insert(&self, item: &Item) -> RepoResult<()> {
        if self.exists(item.id)? {
            return Err(RepoError::DuplicateKey(item.id));
        }

        let conn = self.session()?;
        conn.execute(
            "INSERT INTO items (id, name, price, quantity, release_year)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                item.id,
                item.name,
                item.price,
                item.quantity,
                item.release_year
            ],
        )
        .map_err(|err| map_primary_key_violation(err, item.id))?;

        log::debug!("inserted item {}", item.id);
        Ok(())
    }

    /// Every stored row in whatever order SQLite returns them. Runs a fresh
    /// query on each call.
    pub fn find_all(&self) -> RepoResult<Vec<Item>> {
        let conn = self.session()?;
        let mut stmt = conn.prepare(&format!("SELECT {ITEM_COLUMNS} FROM items"))?;
        let items = stmt
            .query_map([], item_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Load one row, or `NotFound` when the id is not stored.
    pub fn find(&self, id: i64) -> RepoResult<Item> {
        let conn = self.session()?;
        conn.query_row(
            &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"),
            [id],
            item_from_row,
        )
        .optional()?
        .ok_or(RepoError::NotFound(id))
    }

    /// Overwrite everything but the id. Touching zero rows means the id was
    /// never stored.
    pub fn update(&self, id: i64, fields: &ItemFields) -> RepoResult<()> {
        let conn = self.session()?;
        let updated = conn.execute(
            "UPDATE items SET name = ?1, price = ?2, quantity = ?3, release_year = ?4
             WHERE id = ?5",
            params![
                fields.name,
                fields.price,
                fields.quantity,
                fields.release_year,
                id
            ],
        )?;

        if updated == 0 {
            Err(RepoError::NotFound(id))
        } else {
            log::debug!("updated item {id}");
            Ok(())
        }
    }

    /// Remove the row with `id`, returning whether one was actually removed.
    pub fn delete(&self, id: i64) -> RepoResult<bool> {
        let conn = self.session()?;
        let deleted = conn.execute("DELETE FROM items WHERE id = ?1", [id])?;
        log::debug!("delete item {id}: {deleted} row(s)");
        Ok(deleted > 0)
    }

    /// Number of stored rows.
    pub fn count(&self) -> RepoResult<i64> {
        let conn = self.session()?;
        let count = conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Only a primary key violation means the id is taken; every other failure,
/// including NOT NULL violations, is passed through as a storage error.
fn map_primary_key_violation(err: SqlError, id: i64) -> RepoError {
    match err {
        SqlError::SqliteFailure(ref code, _)
            if code.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            RepoError::DuplicateKey(id)
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::ensure_schema;

    fn open_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(&Config::default().with_db_path(dir.path().join("store.db")));
        ensure_schema(&store).unwrap();
        (dir, store)
    }

    #[test]
    fn primary_key_violation_maps_to_duplicate_key() {
        let (_dir, store) = open_store();
        let conn = store.session().unwrap();
        let insert = "INSERT INTO items (id, name, price, quantity, release_year)
                      VALUES (3, 'Gear', 1.0, 1, 2000)";
        conn.execute(insert, []).unwrap();
        let err = conn.execute(insert, []).unwrap_err();

        assert!(matches!(
            map_primary_key_violation(err, 3),
            RepoError::DuplicateKey(3)
        ));
    }

    #[test]
    fn not_null_violation_stays_a_storage_error() {
        let (_dir, store) = open_store();
        let conn = store.session().unwrap();
        let err = conn
            .execute(
                "INSERT INTO items (id, name, price, quantity, release_year)
                 VALUES (4, 'Gear', NULL, 1, 2000)",
                [],
            )
            .unwrap_err();

        let mapped = map_primary_key_violation(err, 4);
        assert!(matches!(mapped, RepoError::Storage(_)));
        assert!(mapped.to_string().contains("NOT NULL constraint failed"));
    }
}
