//! Placement history repository.
//!
//! Rows come back joined: player and registry foreign keys are resolved to
//! their names in the query so results are display-ready. Ordering is
//! always most-recent-id first; `id` is the only recency key.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use worldlog_criteria::QueryFragment;
use worldlog_types::{BlockPos, Placement};

use crate::bind::bind_values;
use crate::error::StoreError;

/// Joined SELECT shared by every placement query.
const SELECT_PLACEMENT: &str = r"SELECT pl.id, p.name AS player_name, pl.date, r.name AS block_type, pl.x, pl.y, pl.z, pl.placed, d.name AS dimension
  FROM placements pl
  INNER JOIN players p ON p.id = pl.player_id
  INNER JOIN registry r ON r.id = pl.type
  INNER JOIN registry d ON d.id = pl.dimension_id";

/// Read access to the `placements` table.
pub struct PlacementStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PlacementStore<'a> {
    /// Create a repository bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Execute a compiled predicate, bounded to `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] if the storage call fails and
    /// [`StoreError::Mapping`] if a returned row cannot be fully decoded.
    /// Failures are never reported as an empty result.
    pub async fn search(
        &self,
        predicate: &QueryFragment,
        limit: i64,
    ) -> Result<Vec<Placement>, StoreError> {
        let sql = format!(
            "{SELECT_PLACEMENT}\n  WHERE {}\n  ORDER BY pl.id DESC LIMIT ${}",
            predicate.where_sql(),
            predicate.bind_count().saturating_add(1)
        );
        let rows = bind_values(sqlx::query(&sql), predicate.binds())
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.iter().map(map_row).collect()
    }

    /// Browse recent placements without a filter.
    ///
    /// `id_offset = 0` starts from the most recent row; otherwise only rows
    /// with an id strictly below `id_offset` are returned.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] or [`StoreError::Mapping`] as
    /// [`Self::search`] does.
    pub async fn page(&self, id_offset: i64, limit: i64) -> Result<Vec<Placement>, StoreError> {
        let sql = format!(
            "{SELECT_PLACEMENT}\n  WHERE ($1 = 0 OR pl.id < $1)\n  ORDER BY pl.id DESC LIMIT $2"
        );
        let rows = sqlx::query(&sql)
            .bind(id_offset)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.iter().map(map_row).collect()
    }
}

/// Total row mapping: every column must decode or the request fails.
fn map_row(row: &PgRow) -> Result<Placement, StoreError> {
    Ok(Placement {
        id: row.try_get("id").map_err(StoreError::Mapping)?,
        player_name: row.try_get("player_name").map_err(StoreError::Mapping)?,
        at: row.try_get("date").map_err(StoreError::Mapping)?,
        block: row.try_get("block_type").map_err(StoreError::Mapping)?,
        pos: BlockPos::new(
            row.try_get("x").map_err(StoreError::Mapping)?,
            row.try_get("y").map_err(StoreError::Mapping)?,
            row.try_get("z").map_err(StoreError::Mapping)?,
        ),
        placed: row.try_get("placed").map_err(StoreError::Mapping)?,
        dimension: row.try_get("dimension").map_err(StoreError::Mapping)?,
    })
}
