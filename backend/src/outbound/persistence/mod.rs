//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain types and carry no
//! business logic. Row structs and table definitions stay private to this
//! module. Connections come from a `bb8` pool via `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use commentguard::outbound::persistence::{
//!     DbPool, DieselCommentRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/commentguard";
//! run_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let comments = DieselCommentRepository::new(pool);
//! # let _ = comments;
//! # Ok(())
//! # }
//! ```

mod diesel_comment_repository;
mod diesel_error_mapping;
mod diesel_response_repository;
mod diesel_strategy_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_response_repository::DieselResponseRepository;
pub use diesel_strategy_repository::DieselStrategyRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
