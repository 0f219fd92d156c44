//! Database layer - connection pool and catalog repository
//!
//! - Schema is created outside this tool (see `migrations/` for the layout)
//! - Muscles and links rely on DB constraints, not check-then-insert
//! - One transaction per import run

pub mod pool;
pub mod repo;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repo::CatalogRepo;
