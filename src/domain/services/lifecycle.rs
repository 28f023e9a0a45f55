use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::models::session_type::{Location, SessionType};
use crate::domain::models::user::UserProfile;
use crate::domain::ports::BookingRepository;
use crate::domain::services::scheduling;
use crate::error::AppError;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;

/// Submission payload. Required fields are optional here so an incomplete
/// form maps to a rejected attempt instead of a type error.
#[derive(Debug, Default, Clone)]
pub struct NewBooking {
    pub session_type: Option<SessionType>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub duration: Option<u32>,
    pub guests: Option<u32>,
    pub location: Option<Location>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    MissingField(&'static str),
    DurationOutOfRange { min: u32, max: u32, got: u32 },
}

/// Invalid submissions abort quietly with no persisted side effect; the
/// tagged result keeps that contract explicit for callers.
#[derive(Debug, Clone)]
pub enum BookingAttempt {
    Created(Booking),
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Completed,
    Cancelled,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Oldest,
    Newest,
}

/// Derived, never persisted, grouping label for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayBucket {
    Upcoming,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct BookingView {
    pub booking: Booking,
    pub bucket: DisplayBucket,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub upcoming_sessions: usize,
    pub past_sessions: usize,
    pub total_hours: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// A past-dated pending booking reads as completed without a stored status
/// change; the derivation lives here and is never written back.
pub fn display_bucket(booking: &Booking, today: NaiveDate) -> DisplayBucket {
    match booking.status {
        BookingStatus::Cancelled | BookingStatus::Rejected => DisplayBucket::Cancelled,
        BookingStatus::Completed => DisplayBucket::Completed,
        BookingStatus::Pending | BookingStatus::Approved => {
            if booking.is_future(today) {
                DisplayBucket::Upcoming
            } else {
                DisplayBucket::Completed
            }
        }
    }
}

fn matches_filter(booking: &Booking, filter: StatusFilter, today: NaiveDate) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Pending => {
            booking.status == BookingStatus::Pending && booking.is_future(today)
        }
        StatusFilter::Completed => {
            booking.status == BookingStatus::Completed
                || (booking.status == BookingStatus::Pending && !booking.is_future(today))
        }
        StatusFilter::Cancelled => booking.status == BookingStatus::Cancelled,
    }
}

pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn create(
        &self,
        user: &UserProfile,
        input: NewBooking,
    ) -> Result<BookingAttempt, AppError> {
        let Some(session_type) = input.session_type.filter(|t| !t.is_blank()) else {
            return Ok(BookingAttempt::Rejected(RejectReason::MissingField("type")));
        };
        let Some(date) = input.date else {
            return Ok(BookingAttempt::Rejected(RejectReason::MissingField("date")));
        };
        let Some(time) = input.time.filter(|t| !t.trim().is_empty()) else {
            return Ok(BookingAttempt::Rejected(RejectReason::MissingField("time")));
        };
        let Some(duration) = input.duration.filter(|d| *d > 0) else {
            return Ok(BookingAttempt::Rejected(RejectReason::MissingField("duration")));
        };
        let Some(location) = input.location else {
            return Ok(BookingAttempt::Rejected(RejectReason::MissingField("location")));
        };
        let Some(guests) = input.guests.filter(|g| *g > 0) else {
            return Ok(BookingAttempt::Rejected(RejectReason::MissingField("guests")));
        };

        let rule = scheduling::duration_bounds(&session_type);
        if duration < rule.min_hours || duration > rule.max_hours {
            return Ok(BookingAttempt::Rejected(RejectReason::DurationOutOfRange {
                min: rule.min_hours,
                max: rule.max_hours,
                got: duration,
            }));
        }

        let price = scheduling::price_for(&session_type, location, duration);
        let booking = Booking::new(NewBookingParams {
            user_id: user.id.clone(),
            user_email: user.email.clone(),
            session_type,
            date,
            time,
            duration,
            guests,
            location,
            notes: input.notes.unwrap_or_default(),
            price,
        });
        self.bookings.insert(&booking).await?;
        info!("Booking created: {} for user {}", booking.id, booking.user_id);
        Ok(BookingAttempt::Created(booking))
    }

    /// Unknown ids are a silent no-op. Interactive confirmation, and the
    /// owner-only restriction, are the caller's policy.
    pub async fn cancel(&self, _user: &UserProfile, booking_id: &str) -> Result<(), AppError> {
        let Some(mut booking) = self.bookings.find_by_id(booking_id).await? else {
            return Ok(());
        };
        booking.status = BookingStatus::Cancelled;
        self.bookings.update(&booking).await?;
        info!("Booking cancelled: {booking_id}");
        Ok(())
    }

    /// Admin role is enforced by the caller's context, not re-checked here.
    /// Unknown ids are a no-op.
    pub async fn set_status(
        &self,
        _admin: &UserProfile,
        booking_id: &str,
        decision: ReviewDecision,
    ) -> Result<(), AppError> {
        let Some(mut booking) = self.bookings.find_by_id(booking_id).await? else {
            return Ok(());
        };
        booking.status = match decision {
            ReviewDecision::Approve => BookingStatus::Approved,
            ReviewDecision::Reject => BookingStatus::Rejected,
        };
        self.bookings.update(&booking).await?;
        info!("Booking {booking_id} set to {}", booking.status);
        Ok(())
    }

    pub async fn delete(&self, _admin: &UserProfile, booking_id: &str) -> Result<(), AppError> {
        if self.bookings.delete(booking_id).await? {
            info!("Booking deleted: {booking_id}");
        }
        Ok(())
    }

    pub async fn list_for_user(
        &self,
        user_id: &str,
        filter: StatusFilter,
        order: DateOrder,
    ) -> Result<Vec<BookingView>, AppError> {
        let bookings = self.bookings.list_by_user(user_id).await?;
        Ok(Self::filter_and_sort(bookings, filter, order))
    }

    pub async fn list_all(
        &self,
        filter: StatusFilter,
        order: DateOrder,
    ) -> Result<Vec<BookingView>, AppError> {
        let bookings = self.bookings.list().await?;
        Ok(Self::filter_and_sort(bookings, filter, order))
    }

    fn filter_and_sort(
        bookings: Vec<Booking>,
        filter: StatusFilter,
        order: DateOrder,
    ) -> Vec<BookingView> {
        let today = Utc::now().date_naive();
        let mut views: Vec<BookingView> = bookings
            .into_iter()
            .filter(|b| matches_filter(b, filter, today))
            .map(|b| BookingView {
                bucket: display_bucket(&b, today),
                booking: b,
            })
            .collect();
        views.sort_by(|a, b| {
            let ascending = a.booking.starts_at().cmp(&b.booking.starts_at());
            match order {
                DateOrder::Oldest => ascending,
                DateOrder::Newest => ascending.reverse(),
            }
        });
        views
    }

    pub async fn stats_for_user(&self, user_id: &str) -> Result<UserStats, AppError> {
        let today = Utc::now().date_naive();
        let bookings = self.bookings.list_by_user(user_id).await?;
        Ok(UserStats {
            upcoming_sessions: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Pending && b.is_future(today))
                .count(),
            past_sessions: bookings
                .iter()
                .filter(|b| !b.is_future(today) || b.status == BookingStatus::Cancelled)
                .count(),
            total_hours: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .map(|b| b.duration)
                .sum(),
        })
    }

    pub async fn status_counts(&self) -> Result<StatusCounts, AppError> {
        let bookings = self.bookings.list().await?;
        Ok(StatusCounts {
            pending: bookings.iter().filter(|b| b.status == BookingStatus::Pending).count(),
            approved: bookings.iter().filter(|b| b.status == BookingStatus::Approved).count(),
            rejected: bookings.iter().filter(|b| b.status == BookingStatus::Rejected).count(),
        })
    }
}
