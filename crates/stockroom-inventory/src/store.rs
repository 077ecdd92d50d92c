// SPDX-License-Identifier: Apache-2.0

use rusqlite::{params, Connection, OptionalExtension};
use std::fmt::{Display, Formatter};
use std::path::Path;
use stockroom_model::{Product, ProductDraft, ProductId, ProductPatch, DEFAULT_CATEGORY};
use tokio::sync::Mutex;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS products (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL,
      description TEXT,
      quantity INTEGER NOT NULL DEFAULT 0,
      price REAL NOT NULL,
      category TEXT,
      sku TEXT UNIQUE NOT NULL,
      created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    );
";

const PRODUCT_COLUMNS: &str = "id, name, description, quantity, price, category, sku, created_at";

#[derive(Debug)]
pub enum StoreError {
    /// The UNIQUE constraint on `products.sku` rejected an insert.
    DuplicateSku,
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSku => write!(f, "UNIQUE constraint failed: products.sku"),
            Self::Sqlite(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, Some(message)) = &err {
            if code.code == rusqlite::ErrorCode::ConstraintViolation
                && message.contains("products.sku")
            {
                return Self::DuplicateSku;
            }
        }
        Self::Sqlite(err)
    }
}

/// Durable table of products over a single guarded sqlite connection.
///
/// Every public operation is one critical section on the connection, so each
/// logical operation (insert + reread, read-merge-write, read + delete) is
/// serialized against all others. SKU uniqueness is enforced solely by the
/// schema's UNIQUE constraint; there is no check-then-insert.
pub struct ProductStore {
    conn: Mutex<Connection>,
}

impl ProductStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Inserts a validated draft and returns the materialized row, with
    /// store-assigned `id` and `created_at`. A SKU collision surfaces as
    /// [`StoreError::DuplicateSku`] and leaves the table untouched.
    pub async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO products (name, description, quantity, price, category, sku)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.name,
                draft.description,
                draft.quantity,
                draft.price,
                draft.category,
                draft.sku
            ],
        )?;
        let id = conn.last_insert_rowid();
        fetch_row(&conn, id)?.ok_or(StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let conn = self.conn.lock().await;
        Ok(fetch_row(&conn, id)?)
    }

    /// All products ordered by category, then name (BINARY collation, so
    /// case-sensitive as stored).
    pub async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare_cached(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY category, name"
        ))?;
        let rows = stmt.query_map([], product_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Reads the current row, merges the present patch fields over it, writes
    /// the result back, and returns the post-merge row. The whole
    /// read-merge-write happens under one lock; concurrent updates are
    /// last-writer-wins. The `sku` column is never part of the UPDATE.
    pub async fn apply_patch(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let conn = self.conn.lock().await;
        let Some(mut product) = fetch_row(&conn, id)? else {
            return Ok(None);
        };
        patch.apply_to(&mut product);
        conn.execute(
            "UPDATE products
             SET name = ?1, description = ?2, quantity = ?3, price = ?4, category = ?5
             WHERE id = ?6",
            params![
                product.name,
                product.description,
                product.quantity,
                product.price,
                product.category,
                id
            ],
        )?;
        Ok(fetch_row(&conn, id)?)
    }

    /// Removes the row and returns it as it existed immediately before
    /// removal. Deleted ids are never reused (AUTOINCREMENT); the SKU becomes
    /// available again.
    pub async fn delete(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let conn = self.conn.lock().await;
        let Some(existing) = fetch_row(&conn, id)? else {
            return Ok(None);
        };
        conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(Some(existing))
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let conn = self.conn.lock().await;
        let count = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn fetch_row(conn: &Connection, id: ProductId) -> rusqlite::Result<Option<Product>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
    ))?;
    stmt.query_row(params![id], product_from_row).optional()
}

fn product_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        quantity: row.get(3)?,
        price: row.get(4)?,
        category: row
            .get::<_, Option<String>>(5)?
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        sku: row.get(6)?,
        created_at: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
    })
}
