//! Hotel Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the hotel
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: In-memory hotel database, plus a session when built `with_session()`
//! - **factory**: Helpers inserting entities with sensible defaults
//! - **fixture**: In-memory entity models that are never inserted
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_room_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_room_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let room = factory::room::create_room(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
