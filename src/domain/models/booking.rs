use crate::domain::ids::creation_id;
use crate::domain::models::session_type::{Location, SessionType};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => f.write_str("pending"),
            BookingStatus::Approved => f.write_str("approved"),
            BookingStatus::Rejected => f.write_str("rejected"),
            BookingStatus::Cancelled => f.write_str("cancelled"),
            BookingStatus::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub date: NaiveDate,
    /// Hourly slot label, "HH:MM".
    pub time: String,
    pub duration: u32,
    pub guests: u32,
    pub location: Location,
    #[serde(default)]
    pub notes: String,
    pub price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub user_id: String,
    pub user_email: String,
    pub session_type: SessionType,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    pub guests: u32,
    pub location: Location,
    pub notes: String,
    pub price: i64,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: creation_id(),
            user_id: params.user_id,
            user_email: params.user_email,
            session_type: params.session_type,
            date: params.date,
            time: params.time,
            duration: params.duration,
            guests: params.guests,
            location: params.location,
            notes: params.notes,
            price: params.price,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Combined date+time sort key; unparsable slot labels sort at midnight.
    pub fn starts_at(&self) -> (NaiveDate, NaiveTime) {
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M").unwrap_or(NaiveTime::MIN);
        (self.date, time)
    }

    /// Strictly after `today`. A booking dated today counts as past.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        self.date > today
    }
}
