use crate::domain::models::{
    booking::Booking,
    user::{User, UserProfile},
};
use crate::error::AppError;
use async_trait::async_trait;

/// Named JSON collections, read and rewritten wholesale. This is the whole
/// persistence contract: single writer, last write wins.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn read(&self, collection: &str) -> Result<Option<String>, AppError>;
    async fn write(&self, collection: &str, payload: &str) -> Result<(), AppError>;
    async fn remove(&self, collection: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    /// Case-insensitive email lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn insert(&self, user: &User) -> Result<(), AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn insert(&self, booking: &Booking) -> Result<(), AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

/// The single active session for this installation: zero or one stored
/// credential-free user projection.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get(&self) -> Result<Option<UserProfile>, AppError>;
    async fn set(&self, profile: &UserProfile) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}
