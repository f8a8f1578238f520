pub use super::booking::Entity as Booking;
pub use super::booking_detail::Entity as BookingDetail;
pub use super::configuration::Entity as Configuration;
pub use super::invoice::Entity as Invoice;
pub use super::profile::Entity as Profile;
pub use super::role::Entity as Role;
pub use super::room::Entity as Room;
pub use super::room_type::Entity as RoomType;
pub use super::user::Entity as User;
pub use super::user_type::Entity as UserType;
