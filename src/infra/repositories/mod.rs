pub mod store_booking_repo;
pub mod store_session_repo;
pub mod store_user_repo;
