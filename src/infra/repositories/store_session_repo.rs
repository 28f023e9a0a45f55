use crate::domain::models::user::UserProfile;
use crate::domain::ports::{CollectionStore, SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

pub const CURRENT_USER_COLLECTION: &str = "currentUser";

/// The active session, stored as a single credential-free projection under
/// the `currentUser` collection.
pub struct StoreSessionRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreSessionRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for StoreSessionRepo {
    async fn get(&self) -> Result<Option<UserProfile>, AppError> {
        match self.store.read(CURRENT_USER_COLLECTION).await? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, profile: &UserProfile) -> Result<(), AppError> {
        let payload = serde_json::to_string(profile)?;
        self.store.write(CURRENT_USER_COLLECTION, &payload).await
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.store.remove(CURRENT_USER_COLLECTION).await
    }
}
