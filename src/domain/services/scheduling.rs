//! Pure pricing, duration and slot rules. Consulted by the booking lifecycle
//! at creation time and by the calendar when offering slots.

use crate::domain::models::booking::Booking;
use crate::domain::models::session_type::{Location, SessionRule, SessionType};
use chrono::NaiveDate;

/// Hourly base rate before multipliers.
pub const BASE_PRICE: i64 = 150;

/// Slots run hourly, 09:00 through 17:00 inclusive.
pub const FIRST_SLOT_HOUR: u32 = 9;
pub const LAST_SLOT_HOUR: u32 = 17;

/// Session-type and location multipliers stack multiplicatively, rounded to
/// whole currency units before the duration is applied.
pub fn hourly_rate(session_type: &SessionType, location: Location) -> i64 {
    let multiplier = session_type.rule().price_multiplier * location.price_multiplier();
    (BASE_PRICE as f64 * multiplier).round() as i64
}

pub fn price_for(session_type: &SessionType, location: Location, duration: u32) -> i64 {
    hourly_rate(session_type, location) * i64::from(duration)
}

pub fn duration_bounds(session_type: &SessionType) -> SessionRule {
    session_type.rule()
}

/// Exact (date, time) match against any existing booking. Status is
/// deliberately ignored: cancelled bookings still block the slot.
pub fn is_slot_taken(date: NaiveDate, time: &str, existing: &[Booking]) -> bool {
    existing.iter().any(|b| b.date == date && b.time == time)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub time: String,
    pub taken: bool,
}

/// The day's hourly slots, each tagged taken/available. Stateless and
/// recomputed per call.
pub fn available_slots<'a>(
    date: NaiveDate,
    existing: &'a [Booking],
) -> impl Iterator<Item = Slot> + 'a {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).map(move |hour| {
        let time = format!("{hour:02}:00");
        let taken = is_slot_taken(date, &time, existing);
        Slot { time, taken }
    })
}
