//! Business logic layer.
//!
//! Services validate requests against the current database state, enforce ownership and
//! uniqueness rules, and orchestrate repositories. Flows writing several tables open a
//! transaction and hand it to the repositories, so either every write lands or none does.

pub mod auth;
pub mod booking;
pub mod booking_detail;
pub mod configuration;
pub mod invoice;
pub mod room;
pub mod room_type;
pub mod seeder;
pub mod user;

#[cfg(test)]
mod test;
