//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same code runs against the
//! connection pool and inside a `DatabaseTransaction` opened by a service. Reads never
//! return rows whose `deleted_at` is set.

pub mod booking;
pub mod booking_detail;
pub mod configuration;
pub mod invoice;
pub mod role;
pub mod room;
pub mod room_type;
pub mod user;
pub mod user_type;

#[cfg(test)]
mod test;
