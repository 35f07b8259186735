//! Declarative test builder.
//!
//! Tables, fixtures and mock endpoints are queued on the builder and created in order by the
//! final `build()` call.

use entity::admin_user::AdminRole;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// ```no_run
/// use darshan_test_utils::{constant::TEST_PHONE, TestBuilder};
///
/// # async fn example() -> Result<(), darshan_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_content_tables()
///     .with_mock_temple("kashi-vishwanath", 10)
///     .with_mock_user(TEST_PHONE)
///     .with_otp_verify_endpoint(TEST_PHONE, true, 1)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_content_tables: bool,

    // Database fixtures to insert
    temples: Vec<(String, i32)>, // (slug, slot capacity)
    users: Vec<String>,          // normalized phones
    admins: Vec<(String, String, AdminRole)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    otp_send_endpoints: Vec<(String, usize, usize)>, // (phone, status, expected_requests)
    otp_verify_endpoints: Vec<(String, bool, usize)>, // (phone, verified, expected_requests)
    upload_endpoints: Vec<(String, u64, String, usize)>, // (public_id, bytes, format, expected_requests)
    destroy_endpoints: Vec<(String, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_content_tables: false,
            temples: Vec::new(),
            users: Vec::new(),
            admins: Vec::new(),
            mock_builders: Vec::new(),
            otp_send_endpoints: Vec::new(),
            otp_verify_endpoints: Vec::new(),
            upload_endpoints: Vec::new(),
            destroy_endpoints: Vec::new(),
        }
    }

    /// Create every application table in foreign key order.
    pub fn with_content_tables(mut self) -> Self {
        self.include_content_tables = true;
        self
    }

    /// Add a single entity table; chain calls for more.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a bookable temple, see
    /// [`ContentFixtures::insert_mock_temple`](crate::fixtures::content::ContentFixtures::insert_mock_temple).
    pub fn with_mock_temple(mut self, slug: &str, capacity: i32) -> Self {
        self.temples.push((slug.to_string(), capacity));
        self
    }

    pub fn with_mock_user(mut self, phone: &str) -> Self {
        self.users.push(phone.to_string());
        self
    }

    pub fn with_mock_admin(mut self, username: &str, password: &str, role: AdminRole) -> Self {
        self.admins
            .push((username.to_string(), password.to_string(), role));
        self
    }

    pub fn with_otp_send_endpoint(mut self, phone: &str, status: usize, expected: usize) -> Self {
        self.otp_send_endpoints
            .push((phone.to_string(), status, expected));
        self
    }

    pub fn with_otp_verify_endpoint(mut self, phone: &str, verified: bool, expected: usize) -> Self {
        self.otp_verify_endpoints
            .push((phone.to_string(), verified, expected));
        self
    }

    pub fn with_cloudinary_upload_endpoint(
        mut self,
        public_id: &str,
        bytes: u64,
        format: &str,
        expected: usize,
    ) -> Self {
        self.upload_endpoints
            .push((public_id.to_string(), bytes, format.to_string(), expected));
        self
    }

    pub fn with_cloudinary_destroy_endpoint(mut self, result: &str, expected: usize) -> Self {
        self.destroy_endpoints.push((result.to_string(), expected));
        self
    }

    /// Add a mock endpoint not covered by the shortcuts above.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Runs queued work in order: tables, database fixtures, then mock endpoints.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_content_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::City),
                schema.create_table_from_entity(entity::prelude::Jyotirlinga),
                schema.create_table_from_entity(entity::prelude::DarshanType),
                schema.create_table_from_entity(entity::prelude::TimeSlot),
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::Booking),
                schema.create_table_from_entity(entity::prelude::Quote),
                schema.create_table_from_entity(entity::prelude::AdminUser),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (slug, capacity) in self.temples {
            setup.content().insert_mock_temple(&slug, capacity).await?;
        }

        for phone in self.users {
            setup.user().insert_user(&phone).await?;
        }

        for (username, password, role) in self.admins {
            setup.user().insert_admin(&username, &password, role).await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints come first so tests can stack several mocks on one path.
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (phone, status, expected) in self.otp_send_endpoints {
            mocks.push(setup.otp().create_send_endpoint(&phone, status, expected));
        }

        for (phone, verified, expected) in self.otp_verify_endpoints {
            mocks.push(setup.otp().create_verify_endpoint(&phone, verified, expected));
        }

        for (public_id, bytes, format, expected) in self.upload_endpoints {
            mocks.push(
                setup
                    .cloudinary()
                    .create_upload_endpoint(&public_id, bytes, &format, expected),
            );
        }

        for (result, expected) in self.destroy_endpoints {
            mocks.push(setup.cloudinary().create_destroy_endpoint(&result, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
