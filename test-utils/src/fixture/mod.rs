//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of pure logic such as the
//! pricing rules and entity to DTO conversions. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let room_type = fixture::room_type::entity();
//! let pricey = fixture::room_type::entity_with_price(200_000.0);
//! ```

pub mod configuration;
pub mod room;
pub mod room_type;
pub mod user_type;

pub use room::entity as room_entity;
pub use room_type::entity as room_type_entity;
pub use user_type::entity as user_type_entity;
