//! CSV export of the booking and user collections. Fields are written as
//! JSON values: strings carry quotes that keep embedded commas and quotes
//! intact, numeric fields stay bare.

use crate::domain::models::booking::Booking;
use crate::domain::models::user::{Role, User};

const BOOKING_HEADERS: [&str; 11] = [
    "Booking ID",
    "User Name",
    "User Email",
    "Date",
    "Time",
    "Session Type",
    "Duration",
    "Guests",
    "Location",
    "Status",
    "Notes",
];

const USER_HEADERS: [&str; 5] = ["User ID", "Name", "Email", "Role", "Created At"];

fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Booking rows resolve the owning user; dangling user ids (users are never
/// cascade-deleted with their bookings) fall back to "Unknown".
pub fn bookings_csv(bookings: &[Booking], users: &[User]) -> String {
    let mut lines = vec![BOOKING_HEADERS.join(",")];
    for booking in bookings {
        let owner = users.iter().find(|u| u.id == booking.user_id);
        let name = owner.map(|u| u.name.as_str()).unwrap_or("Unknown");
        let email = owner.map(|u| u.email.as_str()).unwrap_or("Unknown");
        let row = [
            quote(&booking.id),
            quote(name),
            quote(email),
            quote(&booking.date.to_string()),
            quote(&booking.time),
            quote(&booking.session_type.to_string()),
            booking.duration.to_string(),
            booking.guests.to_string(),
            quote(&booking.location.to_string()),
            quote(&booking.status.to_string()),
            quote(&booking.notes),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

pub fn users_csv(users: &[User]) -> String {
    let mut lines = vec![USER_HEADERS.join(",")];
    for user in users {
        let role = match user.role {
            Role::Admin => "Admin",
            Role::Client => "User",
        };
        let row = [
            quote(&user.id),
            quote(&user.name),
            quote(&user.email),
            quote(role),
            quote(&user.created_at.to_rfc3339()),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}
