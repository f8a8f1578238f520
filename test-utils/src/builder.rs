use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they were added, so referenced tables must be added
/// before the tables pointing at them. The `with_*_tables` helpers take care of that.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_booking_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`.
    tables: Vec<TableCreateStatement>,
    session: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            session: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the SeaORM entity using SQLite syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the account tables: Role, UserType, Profile, User.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Role)
            .with_table(UserType)
            .with_table(Profile)
            .with_table(User)
    }

    /// Adds the catalog tables: RoomType, Room.
    pub fn with_room_tables(self) -> Self {
        self.with_table(RoomType).with_table(Room)
    }

    /// Adds every table needed by the booking flow.
    ///
    /// Includes the account and catalog tables followed by Booking, BookingDetail,
    /// Invoice and Configuration.
    pub fn with_booking_tables(self) -> Self {
        self.with_user_tables()
            .with_room_tables()
            .with_table(Booking)
            .with_table(BookingDetail)
            .with_table(Invoice)
            .with_table(Configuration)
    }

    /// Also opens a session stored in the test database.
    pub fn with_session(mut self) -> Self {
        self.session = true;
        self
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::Session)` - Failed to create the session table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::connect().await?;

        setup.create_tables(self.tables).await?;

        if self.session {
            setup.open_session().await?;
        }

        Ok(setup)
    }
}
