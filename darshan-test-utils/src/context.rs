//! Test context returned by `TestBuilder`.
//!
//! Holds an in-memory SQLite database, a session backed by `MemoryStore` and the mockito
//! server that stands in for the OTP provider and Cloudinary.

use std::sync::Arc;

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tower_sessions::{MemoryStore, Session};

use crate::error::TestError;

/// Test environment built by [`TestBuilder`](crate::TestBuilder).
///
/// ```ignore
/// let mut test = TestBuilder::new().with_content_tables().build().await?;
///
/// let temple = test.content().insert_mock_temple("kashi-vishwanath", 10).await?;
/// let user = test.user().insert_user(TEST_PHONE).await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for flows that read or write session state
    pub session: Session,

    /// Mock HTTP server for the OTP provider and Cloudinary
    pub(crate) server: ServerGuard,
    /// Mock endpoints asserted by `assert_mocks`
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            server,
            mocks: Vec::new(),
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock server, used as the OTP provider and Cloudinary API URL.
    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Register an additional mock endpoint after the context has been built.
    pub fn add_mock<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut ServerGuard) -> Mock,
    {
        let mock = setup(&mut self.server);
        self.mocks.push(mock);
    }

    /// Assert every mock endpoint was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
