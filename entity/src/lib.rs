//! SeaORM entities for the hotel schema.

pub mod prelude;

pub mod booking;
pub mod booking_detail;
pub mod configuration;
pub mod invoice;
pub mod profile;
pub mod role;
pub mod room;
pub mod room_type;
pub mod user;
pub mod user_type;
