//! PostgreSQL-backed `StrategyRepository` over the migration-seeded catalogue.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{StrategyRepository, StrategyRepositoryError};
use crate::domain::{Level, Strategy, StrategyCategory, StrategyId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::StrategyRow;
use super::pool::{DbPool, PoolError};
use super::schema::strategies;

/// Diesel implementation of [`StrategyRepository`].
#[derive(Clone)]
pub struct DieselStrategyRepository {
    pool: DbPool,
}

impl DieselStrategyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> StrategyRepositoryError {
    map_pool_error(error, StrategyRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> StrategyRepositoryError {
    map_diesel_error(
        error,
        StrategyRepositoryError::query,
        StrategyRepositoryError::connection,
    )
}

fn row_to_strategy(row: StrategyRow) -> Result<Strategy, StrategyRepositoryError> {
    let category: StrategyCategory = row.category.parse().map_err(|_| {
        StrategyRepositoryError::query(format!(
            "strategy {} has unknown category {:?}",
            row.id, row.category
        ))
    })?;
    let risk_level = row.risk_level.parse().unwrap_or_else(|_| {
        warn!(
            strategy_id = row.id,
            value = row.risk_level.as_str(),
            "unrecognised risk_level value, defaulting to low"
        );
        Level::Low
    });

    Ok(Strategy {
        id: StrategyId::new(row.id),
        name: row.name,
        description: row.description,
        icon: row.icon,
        category,
        pros: row.pros,
        cons: row.cons,
        risk_level,
    })
}

fn rows_to_strategies(rows: Vec<StrategyRow>) -> Result<Vec<Strategy>, StrategyRepositoryError> {
    rows.into_iter().map(row_to_strategy).collect()
}

/// Arrange `found` in the order `ids` were requested, once per id.
fn in_request_order(found: Vec<Strategy>, ids: &[StrategyId]) -> Vec<Strategy> {
    let mut by_id: HashMap<StrategyId, Strategy> = found
        .into_iter()
        .map(|strategy| (strategy.id, strategy))
        .collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}

#[async_trait]
impl StrategyRepository for DieselStrategyRepository {
    async fn list_all(&self) -> Result<Vec<Strategy>, StrategyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<StrategyRow> = strategies::table
            .order(strategies::id.asc())
            .select(StrategyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_strategies(rows)
    }

    async fn find_by_id(
        &self,
        id: StrategyId,
    ) -> Result<Option<Strategy>, StrategyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row: Option<StrategyRow> = strategies::table
            .find(id.value())
            .select(StrategyRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_strategy).transpose()
    }

    async fn find_by_ids(
        &self,
        ids: &[StrategyId],
    ) -> Result<Vec<Strategy>, StrategyRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i32> = ids.iter().map(|id| id.value()).collect();
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<StrategyRow> = strategies::table
            .filter(strategies::id.eq_any(raw_ids))
            .select(StrategyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_strategies(rows).map(|found| in_request_order(found, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(category: &str, risk_level: &str) -> StrategyRow {
        StrategyRow {
            id: 3,
            name: "Direkte Konfrontation".to_owned(),
            description: "Klar Stellung beziehen".to_owned(),
            icon: "⚔️".to_owned(),
            category: category.to_owned(),
            pros: vec!["Setzt Grenzen".to_owned()],
            cons: vec!["Kann eskalieren".to_owned()],
            risk_level: risk_level.to_owned(),
        }
    }

    #[rstest]
    fn rows_convert_to_domain_strategies() {
        let strategy = row_to_strategy(row("assertive", "high")).expect("valid row");

        assert_eq!(strategy.id, StrategyId::new(3));
        assert_eq!(strategy.category, StrategyCategory::Assertive);
        assert_eq!(strategy.risk_level, Level::High);
    }

    #[rstest]
    fn unknown_risk_level_defaults_to_low() {
        let strategy = row_to_strategy(row("assertive", "extreme")).expect("valid row");
        assert_eq!(strategy.risk_level, Level::Low);
    }

    #[rstest]
    fn lookups_follow_the_requested_order() {
        let found = [1, 2, 3, 8]
            .into_iter()
            .map(|id| {
                let mut strategy = row_to_strategy(row("assertive", "high")).expect("valid row");
                strategy.id = StrategyId::new(id);
                strategy
            })
            .collect();
        let requested: Vec<StrategyId> = [3, 2, 8, 3, 1].map(StrategyId::new).to_vec();

        let ordered: Vec<i32> = in_request_order(found, &requested)
            .iter()
            .map(|strategy| strategy.id.value())
            .collect();

        assert_eq!(ordered, vec![3, 2, 8, 1]);
    }

    #[rstest]
    fn unknown_category_is_a_query_error() {
        let error = row_to_strategy(row("aggressive", "low")).expect_err("bad category");
        assert!(matches!(error, StrategyRepositoryError::Query { .. }));
    }
}
