use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error,
    service::retry::{RetryContext, RetryPolicy},
};

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
    policy: RetryPolicy,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: RetryPolicy) -> Self {
        Self { db, policy }
    }

    /// Pings the database, retrying transient connection failures.
    ///
    /// # Returns
    /// - `Ok(())` - The database answered
    /// - `Err(Error::DbErr)` - The database stayed unreachable or the ping failed permanently
    pub async fn ping_database(&self) -> Result<(), Error> {
        let db = self.db;

        RetryContext::new()
            .with_policy(self.policy)
            .execute_with_retry("database ping", || async move {
                db.ping().await.map_err(Error::from)
            })
            .await
    }
}
