use crate::config::Config;
use crate::domain::ports::CollectionStore;
use crate::domain::services::identity::IdentityService;
use crate::domain::services::lifecycle::BookingService;
use crate::error::AppError;
use crate::infra::repositories::{
    store_booking_repo::StoreBookingRepo, store_session_repo::StoreSessionRepo,
    store_user_repo::StoreUserRepo,
};
use crate::infra::stores::sqlite_store::SqliteStore;
use crate::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Connects the SQLite backend, runs migrations and wires the default state.
pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(AppError::Database)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    sqlx::migrate!("./migrations/sqlite")
        .run(&pool)
        .await
        .map_err(|e| AppError::Database(e.into()))?;

    let store: Arc<dyn CollectionStore> = Arc::new(SqliteStore::new(pool));
    bootstrap_with_store(config.clone(), store).await
}

/// Wires repositories and services over any collection store and runs the
/// default-admin bootstrap check.
pub async fn bootstrap_with_store(
    config: Config,
    store: Arc<dyn CollectionStore>,
) -> Result<AppState, AppError> {
    let user_repo = Arc::new(StoreUserRepo::new(store.clone()));
    let booking_repo = Arc::new(StoreBookingRepo::new(store.clone()));
    let session_repo = Arc::new(StoreSessionRepo::new(store.clone()));

    let identity = Arc::new(IdentityService::new(
        user_repo.clone(),
        session_repo.clone(),
        config.clone(),
    ));
    let bookings = Arc::new(BookingService::new(booking_repo.clone()));

    let state = AppState {
        config,
        store,
        user_repo,
        booking_repo,
        session_repo,
        identity,
        bookings,
    };

    state.identity.ensure_default_admin().await?;
    info!("State bootstrapped");
    Ok(state)
}
