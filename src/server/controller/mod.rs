//! HTTP handlers.
//!
//! Each handler checks access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! validates its request DTO, converts it into service parameters and turns the returned
//! domain model back into a DTO.

pub mod auth;
pub mod booking;
pub mod booking_detail;
pub mod configuration;
pub mod invoice;
pub mod room;
pub mod room_type;
pub mod user;
