use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, CollectionStore, SessionRepository, UserRepository,
};
use crate::domain::services::identity::IdentityService;
use crate::domain::services::lifecycle::BookingService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn CollectionStore>,
    pub user_repo: Arc<dyn UserRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub identity: Arc<IdentityService>,
    pub bookings: Arc<BookingService>,
}
