//! Parameterized predicate fragments.
//!
//! A [`QueryFragment`] is a WHERE-clause body plus the values bound into
//! it: placeholders are assigned `$1..$n` as conditions are pushed, and the
//! repository binds the values in the same order before appending its own
//! trailing parameters (the row cap).
//!
//! Injection safety is structural. Clause text comes from two places only:
//! the [`Column`] whitelist rendered through a `const` table, and `'static`
//! string constants for fixed conditions. User-controlled values can enter
//! a fragment exclusively as [`BindValue`]s.

use uuid::Uuid;

/// Event-table columns a predicate may filter on.
///
/// This is the whole whitelist; parsed input never contributes clause text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Acting player foreign key.
    PlayerId,
    /// Block type foreign key (placements).
    BlockType,
    /// Item type foreign key (transactions).
    ItemType,
    /// Dimension foreign key.
    DimensionId,
    /// East-west coordinate.
    X,
    /// Vertical coordinate.
    Y,
    /// North-south coordinate.
    Z,
}

impl Column {
    /// The SQL spelling of the column.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::PlayerId => "player_id",
            Self::BlockType => "type",
            Self::ItemType => "item_type",
            Self::DimensionId => "dimension_id",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// A value bound into a predicate fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    /// A 32-bit integer: registry ids and coordinates.
    Int(i32),
    /// A set of player identities, bound as a `UUID[]`.
    Uuids(Vec<Uuid>),
}

/// One event category's parameterized WHERE clause and its bound values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFragment {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl QueryFragment {
    /// Create an empty fragment (matches every row).
    pub const fn new() -> Self {
        Self {
            clauses: Vec::new(),
            binds: Vec::new(),
        }
    }

    /// Add `column = $n` with the value bound at `$n`.
    pub fn push_eq(&mut self, column: Column, value: BindValue) {
        let n = self.next_placeholder();
        self.clauses.push(format!("{} = ${n}", column.as_sql()));
        self.binds.push(value);
    }

    /// Add `column BETWEEN $n AND $n+1`, both bounds inclusive.
    pub fn push_between(&mut self, column: Column, low: BindValue, high: BindValue) {
        let n = self.next_placeholder();
        let m = n.saturating_add(1);
        self.clauses
            .push(format!("{} BETWEEN ${n} AND ${m}", column.as_sql()));
        self.binds.push(low);
        self.binds.push(high);
    }

    /// Restrict the acting player to a set of identities. The uuids are
    /// bound as an array; the subselect normalizes them to player ids.
    pub fn push_players(&mut self, uuids: Vec<Uuid>) {
        let n = self.next_placeholder();
        self.clauses.push(format!(
            "player_id IN (SELECT id FROM players WHERE uuid = ANY(${n}))"
        ));
        self.binds.push(BindValue::Uuids(uuids));
    }

    /// Add a fixed condition. `'static` keeps user input out by type.
    pub fn push_fixed(&mut self, clause: &'static str) {
        self.clauses.push(clause.to_owned());
    }

    /// The WHERE-clause body, `TRUE` when nothing was pushed.
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            "TRUE".to_owned()
        } else {
            self.clauses.join(" AND ")
        }
    }

    /// The bound values, in placeholder order.
    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }

    /// Number of values bound so far; the repository's own parameters
    /// continue from here.
    pub fn bind_count(&self) -> usize {
        self.binds.len()
    }

    const fn next_placeholder(&self) -> usize {
        self.binds.len().saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fragment_matches_everything() {
        let fragment = QueryFragment::new();
        assert_eq!(fragment.where_sql(), "TRUE");
        assert_eq!(fragment.bind_count(), 0);
    }

    #[test]
    fn placeholders_are_numbered_in_push_order() {
        let mut fragment = QueryFragment::new();
        fragment.push_eq(Column::BlockType, BindValue::Int(4));
        fragment.push_between(Column::X, BindValue::Int(-5), BindValue::Int(5));
        fragment.push_eq(Column::DimensionId, BindValue::Int(1));
        assert_eq!(
            fragment.where_sql(),
            "type = $1 AND x BETWEEN $2 AND $3 AND dimension_id = $4"
        );
        assert_eq!(fragment.bind_count(), 4);
    }

    #[test]
    fn player_restriction_binds_a_uuid_array() {
        let mut fragment = QueryFragment::new();
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        fragment.push_players(ids.clone());
        assert_eq!(
            fragment.where_sql(),
            "player_id IN (SELECT id FROM players WHERE uuid = ANY($1))"
        );
        assert_eq!(fragment.binds(), &[BindValue::Uuids(ids)]);
    }

    #[test]
    fn fixed_clauses_take_no_placeholder() {
        let mut fragment = QueryFragment::new();
        fragment.push_fixed("placed = TRUE");
        fragment.push_eq(Column::DimensionId, BindValue::Int(1));
        assert_eq!(fragment.where_sql(), "placed = TRUE AND dimension_id = $1");
    }
}
