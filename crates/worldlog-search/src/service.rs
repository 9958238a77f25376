//! The criteria-driven search service.
//!
//! One [`SearchService`] instance serves all moderators. Each call parses
//! and compiles synchronously, then executes the dispatched category
//! queries concurrently; the three result sets of a single request are
//! assembled before anything is returned, so callers always observe a
//! complete outcome.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;
use worldlog_criteria::{compile, CriteriaParser, InvokerContext, PlayerDirectory};
use worldlog_store::{GriefStore, PlacementStore, TransactionStore};
use worldlog_types::{
    BlockPos, Category, Grief, Placement, RegistryResolver, Transaction,
};

use crate::error::SearchError;

/// The moderator issuing a search, captured at call time.
#[derive(Debug, Clone)]
pub struct Invoker {
    /// The moderator's identity.
    pub uuid: Uuid,
    /// Their current block position; `range:` cubes center here.
    pub position: BlockPos,
    /// The dimension they are standing in; the default dimension filter.
    pub dimension: String,
}

/// The assembled result of one search request.
///
/// Categories the action did not dispatch to stay empty. Each populated
/// set is ordered most-recent-id first and independently capped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Placement results, if dispatched.
    pub placements: Vec<Placement>,
    /// Transaction results, if dispatched.
    pub transactions: Vec<Transaction>,
    /// Grief results, if dispatched.
    pub griefs: Vec<Grief>,
}

impl SearchOutcome {
    /// Whether no category returned any rows.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty() && self.transactions.is_empty() && self.griefs.is_empty()
    }
}

/// Compiles criteria strings and executes them across the event streams.
pub struct SearchService {
    pool: PgPool,
    registry: Arc<RegistryResolver>,
    parser: CriteriaParser,
}

impl SearchService {
    /// Create a service over the shared pool and resolvers.
    pub fn new(
        pool: PgPool,
        registry: Arc<RegistryResolver>,
        players: Arc<dyn PlayerDirectory>,
    ) -> Self {
        let parser = CriteriaParser::new(Arc::clone(&registry), players);
        Self {
            pool,
            registry,
            parser,
        }
    }

    /// Completion hints for interactive criteria entry; never fails.
    pub fn suggest(&self, text: &str) -> Vec<String> {
        self.parser.suggest(text)
    }

    /// Parse, compile, and execute a criteria string.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Criteria`] synchronously for malformed or
    /// unresolvable criteria (including an invoker dimension the registry
    /// does not know), and [`SearchError::Store`] when query execution
    /// fails -- a storage failure is never converted into an empty outcome.
    pub async fn search(
        &self,
        criteria_text: &str,
        invoker: &Invoker,
    ) -> Result<SearchOutcome, SearchError> {
        let criteria = self.parser.parse(criteria_text)?;

        let dimension = self.registry.resolve(&invoker.dimension).ok_or_else(|| {
            worldlog_criteria::CriteriaError::Resolution {
                kind: "dimension",
                name: invoker.dimension.clone(),
            }
        })?;
        let context = InvokerContext {
            position: invoker.position,
            dimension,
        };

        let compiled = compile(&criteria, &context)?;
        tracing::debug!(
            invoker = %invoker.uuid,
            categories = compiled.dispatch.len(),
            limit = compiled.limit,
            "Executing compiled search"
        );

        // The dispatched categories run concurrently; the others resolve
        // to empty immediately. try_join assembles all of them before the
        // outcome is delivered.
        let dispatch = compiled.dispatch;
        let placements = async {
            if dispatch.contains(&Category::Placement) {
                PlacementStore::new(&self.pool)
                    .search(&compiled.placement, compiled.limit)
                    .await
            } else {
                Ok(Vec::new())
            }
        };
        let transactions = async {
            if dispatch.contains(&Category::Transaction) {
                TransactionStore::new(&self.pool)
                    .search(&compiled.transaction, compiled.limit)
                    .await
            } else {
                Ok(Vec::new())
            }
        };
        let griefs = async {
            if dispatch.contains(&Category::Grief) {
                GriefStore::new(&self.pool)
                    .search(&compiled.grief, compiled.limit)
                    .await
            } else {
                Ok(Vec::new())
            }
        };

        match tokio::try_join!(placements, transactions, griefs) {
            Ok((placements, transactions, griefs)) => Ok(SearchOutcome {
                placements,
                transactions,
                griefs,
            }),
            Err(error) => {
                // Full detail to the log; the caller gets one failure.
                tracing::error!(invoker = %invoker.uuid, error = %error, "Search query failed");
                Err(SearchError::Store(error))
            }
        }
    }
}

/// Browse one category's recent history without criteria.
///
/// `id_offset = 0` starts at the most recent row; pass the lowest id of the
/// previous page to continue backwards.
///
/// # Errors
///
/// Returns [`SearchError::Store`] if the storage call fails.
pub async fn page(
    pool: &PgPool,
    category: Category,
    id_offset: i64,
    limit: i64,
) -> Result<SearchOutcome, SearchError> {
    let mut outcome = SearchOutcome::default();
    match category {
        Category::Placement => {
            outcome.placements = PlacementStore::new(pool).page(id_offset, limit).await?;
        }
        Category::Transaction => {
            outcome.transactions = TransactionStore::new(pool).page(id_offset, limit).await?;
        }
        Category::Grief => {
            outcome.griefs = GriefStore::new(pool).page(id_offset, limit).await?;
        }
    }
    Ok(outcome)
}
