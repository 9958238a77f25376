//! Compilation of a [`CriteriaSet`] into per-category predicates.
//!
//! Compilation is pure: it consumes the typed criteria plus the invoking
//! moderator's context (current position and dimension) and produces one
//! [`QueryFragment`] per event category, the dispatch set the action
//! selects, and the row cap. Nothing here executes queries.
//!
//! Clause order is fixed (target, block, item, range, dimension, action)
//! so compiled SQL is deterministic for a given criteria set.

use worldlog_types::{Action, BlockPos, Category, RegistryId, DEFAULT_DISPATCH};

use crate::error::CriteriaError;
use crate::fragment::{BindValue, Column, QueryFragment};
use crate::parser::CriteriaSet;

/// Row cap applied when the criteria carry no `limit` key.
pub const DEFAULT_LIMIT: i64 = 10;

/// The invoking moderator's context at compile time.
///
/// The spatial cube is centered on the position the invoker holds *now*,
/// and an absent `dimension` key falls back to the dimension they are
/// standing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvokerContext {
    /// The invoker's current block position.
    pub position: BlockPos,
    /// The invoker's current dimension.
    pub dimension: RegistryId,
}

/// The compiled form of one criteria string.
///
/// All three category predicates are always built; [`Self::dispatch`] names
/// the ones a search actually executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    /// Predicate over the `placements` table.
    pub placement: QueryFragment,
    /// Predicate over the `transactions` table.
    pub transaction: QueryFragment,
    /// Predicate over the `grief` table.
    pub grief: QueryFragment,
    /// Categories to execute, in order.
    pub dispatch: &'static [Category],
    /// Row cap, applied to each dispatched category independently.
    pub limit: i64,
}

impl CompiledQuery {
    /// The predicate fragment for one category.
    pub const fn fragment(&self, category: Category) -> &QueryFragment {
        match category {
            Category::Placement => &self.placement,
            Category::Transaction => &self.transaction,
            Category::Grief => &self.grief,
        }
    }
}

/// Compile a criteria set against the invoker's context.
///
/// # Errors
///
/// Returns [`CriteriaError::InvalidAction`] naming the value when `action:`
/// is outside the closed vocabulary. This is the only compile-time failure;
/// everything else was validated at parse time.
pub fn compile(
    criteria: &CriteriaSet,
    invoker: &InvokerContext,
) -> Result<CompiledQuery, CriteriaError> {
    let mut placement = QueryFragment::new();
    let mut transaction = QueryFragment::new();
    let mut grief = QueryFragment::new();

    if let Some(targets) = &criteria.targets {
        placement.push_players(targets.clone());
        transaction.push_players(targets.clone());
        grief.push_players(targets.clone());
    }

    // The registry is one shared name table, so a block's item form (and an
    // item's block form) is the id of the same namespaced name.
    if let Some(block) = criteria.block {
        placement.push_eq(Column::BlockType, BindValue::Int(block.into_inner()));
        transaction.push_eq(Column::ItemType, BindValue::Int(block.into_inner()));
    }
    if let Some(item) = criteria.item {
        transaction.push_eq(Column::ItemType, BindValue::Int(item.into_inner()));
        placement.push_eq(Column::BlockType, BindValue::Int(item.into_inner()));
    }

    if let Some(range) = criteria.range {
        let cube = invoker.position.cube(range);
        for fragment in [&mut placement, &mut transaction, &mut grief] {
            fragment.push_between(
                Column::X,
                BindValue::Int(cube.min.x),
                BindValue::Int(cube.max.x),
            );
            fragment.push_between(
                Column::Y,
                BindValue::Int(cube.min.y),
                BindValue::Int(cube.max.y),
            );
            fragment.push_between(
                Column::Z,
                BindValue::Int(cube.min.z),
                BindValue::Int(cube.max.z),
            );
        }
    }

    // Always restricted to exactly one dimension.
    let dimension = criteria.dimension.unwrap_or(invoker.dimension);
    for fragment in [&mut placement, &mut transaction, &mut grief] {
        fragment.push_eq(Column::DimensionId, BindValue::Int(dimension.into_inner()));
    }

    let dispatch = match criteria.action.as_deref() {
        None => DEFAULT_DISPATCH,
        Some(raw) => {
            let Some(action) = Action::parse(raw) else {
                return Err(CriteriaError::InvalidAction(raw.to_owned()));
            };
            match action {
                Action::Placed => placement.push_fixed("placed = TRUE"),
                Action::Broken => placement.push_fixed("placed = FALSE"),
                Action::Added => transaction.push_fixed("item_count > 0"),
                Action::Taken => transaction.push_fixed("item_count < 0"),
                Action::Grief | Action::Everything => {}
            }
            action.dispatch()
        }
    };

    let limit = criteria.limit.unwrap_or(DEFAULT_LIMIT);
    tracing::trace!(
        categories = dispatch.len(),
        limit,
        "compiled criteria into category predicates"
    );

    Ok(CompiledQuery {
        placement,
        transaction,
        grief,
        dispatch,
        limit,
    })
}
