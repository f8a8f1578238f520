//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults and resolve their foreign keys
//! themselves, so a test only spells out the fields it actually cares about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let room = factory::room::create_room(&db).await?;
//!
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("boss@hotel.test")
//!     .admin()
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `role` - Role rows looked up or created by name
//! - `user_type` - User type rows looked up or created by name
//! - `user` - User accounts together with their profile
//! - `room_type` - Room type catalog entries
//! - `room` - Rooms, creating a room type when none is given
//! - `booking` - Bookings, booking details and their invoices
//! - `configuration` - Configuration values
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod booking;
pub mod configuration;
pub mod helpers;
pub mod role;
pub mod room;
pub mod room_type;
pub mod user;
pub mod user_type;

pub use booking::{create_booking, create_booking_detail};
pub use configuration::create_configuration;
pub use role::find_or_create_role;
pub use room::create_room;
pub use room_type::create_room_type;
pub use user::create_user;
pub use user_type::find_or_create_user_type;
