//! SQLite order store.
//!
//! Persists orders to a single `orders` table through an `SQLx` connection pool.
//! Every operation is one statement; SQLite's per-statement atomicity is the
//! only coordination needed between concurrent callers.
//!
//! `orderDate` holds the day number from the common era (0001-01-01 is day 1),
//! so `ORDER BY orderDate` follows calendar order for negative and five-digit
//! years too.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveTime};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use crate::domain::orders::{ItemsPatch, NewOrder, Order, OrderStore, StoreError};
use crate::domain::shared::OrderId;

/// Default pool size for file-backed databases.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const CREATE_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS orders (
        orderId   INTEGER PRIMARY KEY AUTOINCREMENT,
        items     TEXT,
        orderDate INTEGER,
        orderTime TEXT,
        quantity  INTEGER,
        onHand    BOOLEAN
    )
";

const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_orders_order_date ON orders (orderDate, orderId)";

/// `SQLx`-backed implementation of [`OrderStore`].
#[derive(Debug, Clone)]
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    /// Connect to the database at `database_url` with the default pool size.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be opened.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Connect with a custom maximum pool size.
    ///
    /// The database file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be opened.
    pub async fn with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(storage_error)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        info!(max_connections, "SQLite connection pool initialized");

        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// The pool is pinned to a single connection that is never recycled,
    /// since every SQLite in-memory connection sees its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(storage_error)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        debug!("In-memory SQLite database opened");

        Ok(Self { pool })
    }

    /// Create a store over an existing pool (for testing).
    #[must_use]
    pub const fn with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `orders` table and its date index when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if either DDL statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        sqlx::query(CREATE_DATE_INDEX)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        debug!("orders schema ensured");
        Ok(())
    }

    /// Convert a database row to an `Order`.
    fn row_to_order(row: &SqliteRow) -> Result<Order, StoreError> {
        Ok(Order {
            id: OrderId::new(
                row.try_get::<i64, _>("orderId")
                    .map_err(|e| column_error("orderId", &e))?,
            ),
            items: row
                .try_get::<Option<String>, _>("items")
                .map_err(|e| column_error("items", &e))?,
            order_date: row
                .try_get::<Option<i32>, _>("orderDate")
                .map_err(|e| column_error("orderDate", &e))?
                .map(day_to_date)
                .transpose()?,
            order_time: row
                .try_get::<Option<NaiveTime>, _>("orderTime")
                .map_err(|e| column_error("orderTime", &e))?,
            quantity: row
                .try_get::<Option<i32>, _>("quantity")
                .map_err(|e| column_error("quantity", &e))?,
            on_hand: row
                .try_get::<Option<bool>, _>("onHand")
                .map_err(|e| column_error("onHand", &e))?,
        })
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT orderId, items, orderDate, orderTime, quantity, onHand
            FROM orders
            ORDER BY orderDate ASC, orderId ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        let orders = rows
            .iter()
            .map(Self::row_to_order)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let result = sqlx::query(
            r"
            INSERT INTO orders (items, orderDate, orderTime, quantity, onHand)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(order.items.as_deref())
        .bind(order.order_date.map(date_to_day))
        .bind(order.order_time)
        .bind(order.quantity)
        .bind(order.on_hand)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        let id = OrderId::new(result.last_insert_rowid());
        debug!(order_id = %id, "Order inserted");

        Ok(order.clone().into_order(id))
    }

    async fn get_by_id(&self, id: OrderId) -> Result<Order, StoreError> {
        let row = sqlx::query(
            r"
            SELECT orderId, items, orderDate, orderTime, quantity, onHand
            FROM orders
            WHERE orderId = ?1
            ",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map_or_else(
            || Err(StoreError::not_found(id)),
            |r| Self::row_to_order(&r),
        )
    }

    async fn update(&self, id: OrderId, patch: &ItemsPatch) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE orders SET items = ?1 WHERE orderId = ?2")
            .bind(patch.items.as_str())
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }

        debug!(order_id = %id, "Order items updated");
        Ok(())
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM orders WHERE orderId = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }

        debug!(order_id = %id, "Order deleted");
        Ok(())
    }
}

fn date_to_day(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}

fn day_to_date(day: i32) -> Result<NaiveDate, StoreError> {
    NaiveDate::from_num_days_from_ce_opt(day)
        .ok_or_else(|| StoreError::Storage(format!("column orderDate: day {day} out of range")))
}

fn storage_error(err: sqlx::Error) -> StoreError {
    StoreError::Storage(err.to_string())
}

fn column_error(column: &str, err: &sqlx::Error) -> StoreError {
    StoreError::Storage(format!("column {column}: {err}"))
}
