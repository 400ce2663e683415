pub mod registrations;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::Registration;
use crate::submission::ValidatedRecord;

/// Where accepted registrations end up. Insert-only.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn insert(&self, record: &ValidatedRecord) -> Result<Registration, sqlx::Error>;
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationStore for SqliteStore {
    async fn insert(&self, record: &ValidatedRecord) -> Result<Registration, sqlx::Error> {
        registrations::create(&self.pool, record).await
    }
}
