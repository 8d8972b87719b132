use mockito::{Mock, Server, ServerGuard};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Mock translation API and in-memory database for a single test.
pub struct TestSetup {
    pub server: ServerGuard,
    pub db: DatabaseConnection,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            server: mock_server,
            db,
            mocks: Vec::new(),
        })
    }

    /// Base URL to configure the translation client with.
    pub fn translate_api_url(&self) -> String {
        self.server.url()
    }

    /// Close the database pool so every subsequent query fails to acquire a connection.
    ///
    /// Clones of the connection share the pool, so application state built from this setup
    /// observes the outage too.
    pub async fn disconnect_database(&self) -> Result<(), TestError> {
        self.db.clone().close().await?;

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
