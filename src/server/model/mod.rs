//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod booking;
pub mod booking_detail;
pub mod configuration;
pub mod invoice;
pub mod pricing;
pub mod role;
pub mod room;
pub mod room_type;
pub mod user;
pub mod user_type;
