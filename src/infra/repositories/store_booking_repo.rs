use crate::domain::models::booking::Booking;
use crate::domain::ports::{BookingRepository, CollectionStore};
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Bookings persisted as one JSON array under the `bookings` collection,
/// rewritten wholesale on every mutation.
pub struct StoreBookingRepo {
    store: Arc<dyn CollectionStore>,
}

impl StoreBookingRepo {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<Booking>, AppError> {
        match self.store.read(BOOKINGS_COLLECTION).await? {
            Some(payload) => Ok(serde_json::from_str(&payload)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, bookings: &[Booking]) -> Result<(), AppError> {
        let payload = serde_json::to_string(bookings)?;
        self.store.write(BOOKINGS_COLLECTION, &payload).await
    }
}

#[async_trait]
impl BookingRepository for StoreBookingRepo {
    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        self.load().await
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .filter(|b| b.user_id == user_id)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        Ok(self.load().await?.into_iter().find(|b| b.id == id))
    }

    async fn insert(&self, booking: &Booking) -> Result<(), AppError> {
        let mut bookings = self.load().await?;
        bookings.push(booking.clone());
        self.save(&bookings).await
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut bookings = self.load().await?;
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking.id)))?;
        *slot = booking.clone();
        self.save(&bookings).await?;
        Ok(booking.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut bookings = self.load().await?;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            return Ok(false);
        }
        self.save(&bookings).await?;
        Ok(true)
    }
}
