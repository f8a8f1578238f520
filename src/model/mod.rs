//! Data transfer objects exchanged over the HTTP API.
//!
//! Response DTOs are produced by `into_dto()` on the server domain models. Request DTOs
//! derive `Validate` and are checked by the controllers before being converted into
//! service parameters.

pub mod api;
pub mod auth;
pub mod booking;
pub mod booking_detail;
pub mod configuration;
pub mod invoice;
pub mod room;
pub mod room_type;
pub mod user;
