mod booking;
mod booking_detail;
mod configuration;
mod invoice;
mod room;
mod room_type;
mod user;
