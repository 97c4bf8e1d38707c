//! Port for the read-only strategy catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Strategy, StrategyId, predefined_strategies};

use super::define_port_error;

define_port_error! {
    /// Errors raised by strategy repository adapters.
    pub enum StrategyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "strategy repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "strategy repository query failed: {message}",
    }
}

impl From<StrategyRepositoryError> for Error {
    fn from(value: StrategyRepositoryError) -> Self {
        match value {
            StrategyRepositoryError::Connection { message } => {
                Self::service_unavailable(format!("strategy repository unavailable: {message}"))
            }
            StrategyRepositoryError::Query { message } => {
                Self::internal(format!("strategy repository error: {message}"))
            }
        }
    }
}

/// Port for reading strategies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StrategyRepository: Send + Sync {
    /// Every strategy, ordered by id.
    async fn list_all(&self) -> Result<Vec<Strategy>, StrategyRepositoryError>;

    /// One strategy, or `None` when the id is unknown.
    async fn find_by_id(&self, id: StrategyId)
    -> Result<Option<Strategy>, StrategyRepositoryError>;

    /// Strategies whose id is in `ids`.
    ///
    /// Unknown ids are dropped silently. Results follow the order of `ids`,
    /// each strategy appearing once.
    async fn find_by_ids(
        &self,
        ids: &[StrategyId],
    ) -> Result<Vec<Strategy>, StrategyRepositoryError>;
}

/// Catalogue-backed fixture serving the predefined strategies.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureStrategyRepository;

#[async_trait]
impl StrategyRepository for FixtureStrategyRepository {
    async fn list_all(&self) -> Result<Vec<Strategy>, StrategyRepositoryError> {
        Ok(predefined_strategies())
    }

    async fn find_by_id(
        &self,
        id: StrategyId,
    ) -> Result<Option<Strategy>, StrategyRepositoryError> {
        Ok(predefined_strategies()
            .into_iter()
            .find(|strategy| strategy.id == id))
    }

    async fn find_by_ids(
        &self,
        ids: &[StrategyId],
    ) -> Result<Vec<Strategy>, StrategyRepositoryError> {
        let mut catalogue = predefined_strategies();
        Ok(ids
            .iter()
            .filter_map(|id| {
                let index = catalogue.iter().position(|strategy| strategy.id == *id)?;
                Some(catalogue.swap_remove(index))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_lists_full_catalogue() {
        let all = FixtureStrategyRepository
            .list_all()
            .await
            .expect("fixture succeeds");
        assert_eq!(all.len(), 8);
    }

    #[tokio::test]
    async fn fixture_drops_unknown_ids_and_keeps_request_order() {
        let ids = [5, 42, 2, 5].map(StrategyId::new);
        let found = FixtureStrategyRepository
            .find_by_ids(&ids)
            .await
            .expect("fixture succeeds");
        let found_ids: Vec<i32> = found.iter().map(|s| s.id.value()).collect();
        assert_eq!(found_ids, vec![5, 2]);
    }

    #[tokio::test]
    async fn fixture_returns_none_for_unknown_id() {
        let found = FixtureStrategyRepository
            .find_by_id(StrategyId::new(9))
            .await
            .expect("fixture succeeds");
        assert!(found.is_none());
    }
}
