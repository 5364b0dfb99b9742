//! Application state

use sqlx::PgPool;

use crate::BoxError;
use crate::config::Config;

/// Shared application state
///
/// The pool is the only shared resource; handlers hold no other state
/// between requests.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
}

impl AppState {
    /// Create a new AppState: connect the pool and run migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests use a lazily connected pool)
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}
