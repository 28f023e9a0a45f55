pub mod booking;
pub mod session_type;
pub mod user;
