//! Binding compiled predicate values onto runtime queries.
//!
//! Predicate fragments arrive from the compiler as clause text plus an
//! ordered list of [`BindValue`]s; this is the one place those values meet
//! sqlx. Values are always bound, never rendered into SQL.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;
use worldlog_criteria::BindValue;

/// Bind a fragment's values in placeholder order. The caller appends its
/// own trailing parameters (the row cap) afterwards.
pub(crate) fn bind_values<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    binds: &[BindValue],
) -> Query<'q, Postgres, PgArguments> {
    for bind in binds {
        query = match bind {
            BindValue::Int(value) => query.bind(*value),
            BindValue::Uuids(values) => query.bind(values.clone()),
        };
    }
    query
}
