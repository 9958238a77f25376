//! Grief history repository.
//!
//! Grief rows may have no responsible player (lightning, stray explosions),
//! so the player join is a LEFT JOIN and the name column is nullable. The
//! cause descriptor is stored verbatim.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use worldlog_criteria::QueryFragment;
use worldlog_types::{BlockPos, Grief};

use crate::bind::bind_values;
use crate::error::StoreError;

/// Joined SELECT shared by every grief query.
const SELECT_GRIEF: &str = r"SELECT g.id, p.name AS player_name, g.date, g.x, g.y, g.z, g.cause, d.name AS dimension
  FROM grief g
  LEFT JOIN players p ON p.id = g.player_id
  INNER JOIN registry d ON d.id = g.dimension_id";

/// Read access to the `grief` table.
pub struct GriefStore<'a> {
    pool: &'a PgPool,
}

impl<'a> GriefStore<'a> {
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
    ) -> Result<Vec<Grief>, StoreError> {
        let sql = format!(
            "{SELECT_GRIEF}\n  WHERE {}\n  ORDER BY g.id DESC LIMIT ${}",
            predicate.where_sql(),
            predicate.bind_count().saturating_add(1)
        );
        let rows = bind_values(sqlx::query(&sql), predicate.binds())
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.iter().map(map_row).collect()
    }

    /// Browse recent grief without a filter; `id_offset = 0` means latest,
    /// otherwise strictly below the given id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Query`] or [`StoreError::Mapping`] as
    /// [`Self::search`] does.
    pub async fn page(&self, id_offset: i64, limit: i64) -> Result<Vec<Grief>, StoreError> {
        let sql = format!(
            "{SELECT_GRIEF}\n  WHERE ($1 = 0 OR g.id < $1)\n  ORDER BY g.id DESC LIMIT $2"
        );
        let rows = sqlx::query(&sql)
            .bind(id_offset)
            .bind(limit)
            .fetch_all(self.pool)
            .await?;
        rows.iter().map(map_row).collect()
    }
}

fn map_row(row: &PgRow) -> Result<Grief, StoreError> {
    Ok(Grief {
        id: row.try_get("id").map_err(StoreError::Mapping)?,
        player_name: row.try_get("player_name").map_err(StoreError::Mapping)?,
        at: row.try_get("date").map_err(StoreError::Mapping)?,
        pos: BlockPos::new(
            row.try_get("x").map_err(StoreError::Mapping)?,
            row.try_get("y").map_err(StoreError::Mapping)?,
            row.try_get("z").map_err(StoreError::Mapping)?,
        ),
        cause: row.try_get("cause").map_err(StoreError::Mapping)?,
        dimension: row.try_get("dimension").map_err(StoreError::Mapping)?,
    })
}
