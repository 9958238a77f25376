//! Container transaction history repository.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use worldlog_criteria::QueryFragment;
use worldlog_types::{BlockPos, Transaction};

use crate::bind::bind_values;
use crate::error::StoreError;

/// Joined SELECT shared by every transaction query.
const SELECT_TRANSACTION: &str = r"SELECT tr.id, p.name AS player_name, tr.date, r.name AS item_name, tr.x, tr.y, tr.z, tr.item_count, d.name AS dimension
  FROM transactions tr
  INNER JOIN players p ON p.id = tr.player_id
  INNER JOIN registry r ON r.id = tr.item_type
  INNER JOIN registry d ON d.id = tr.dimension_id";

/// Read access to the `transactions` table.
pub struct TransactionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> TransactionStore<'a> {
    /// Create a repository bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Execute a compiled predicate, bounded to `limit` rows,
    /// most-recent-id first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the storage call fails and
    /// [`StoreError::Mapping`] if a returned row cannot be fully decoded.
    pub async fn search(
        &self,
        predicate: &QueryFragment,
        limit: i64,
    ) -> Result<Vec<Transaction>, StoreError> {
        let sql = format!(
            "{SELECT_TRANSACTION}\n  WHERE {}\n  ORDER BY tr.id DESC LIMIT ${}",
            predicate.where_sql(),
            predicate.bind_count().saturating_add(1)
        );
        let rows = bind_values(sqlx::query(&sql), predicate.binds())
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.iter().map(map_row).collect()
    }

    /// Browse recent transactions without a filter; `id_offset = 0` means
    /// latest, otherwise strictly below the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] or [`StoreError::Mapping`] as
    /// [`Self::search`] does.
    pub async fn page(&self, id_offset: i64, limit: i64) -> Result<Vec<Transaction>, StoreError> {
        let sql = format!(
            "{SELECT_TRANSACTION}\n  WHERE ($1 = 0 OR tr.id < $1)\n  ORDER BY tr.id DESC LIMIT $2"
        );
        let rows = sqlx::query(&sql)
            .bind(id_offset)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.iter().map(map_row).collect()
    }
}

fn map_row(row: &PgRow) -> Result<Transaction, StoreError> {
    Ok(Transaction {
        id: row.try_get("id").map_err(StoreError::Mapping)?,
        player_name: row.try_get("player_name").map_err(StoreError::Mapping)?,
        at: row.try_get("date").map_err(StoreError::Mapping)?,
        item: row.try_get("item_name").map_err(StoreError::Mapping)?,
        pos: BlockPos::new(
            row.try_get("x").map_err(StoreError::Mapping)?,
            row.try_get("y").map_err(StoreError::Mapping)?,
            row.try_get("z").map_err(StoreError::Mapping)?,
        ),
        delta: row.try_get("item_count").map_err(StoreError::Mapping)?,
        dimension: row.try_get("dimension").map_err(StoreError::Mapping)?,
    })
}
