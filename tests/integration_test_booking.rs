mod common;

use chrono::{Duration, NaiveDate, Utc};
use common::TestApp;
use photobook::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use photobook::domain::models::session_type::{Location, SessionType};
use photobook::domain::models::user::UserProfile;
use photobook::domain::ports::BookingRepository;
use photobook::domain::services::lifecycle::{
    BookingAttempt, DateOrder, DisplayBucket, NewBooking, RejectReason, ReviewDecision,
    StatusFilter,
};
use photobook::error::AppError;

fn future_date(days: i64) -> NaiveDate {
    (Utc::now() + Duration::days(days)).date_naive()
}

fn valid_input(date: NaiveDate, time: &str) -> NewBooking {
    NewBooking {
        session_type: Some(SessionType::Wedding),
        date: Some(date),
        time: Some(time.to_string()),
        duration: Some(5),
        guests: Some(80),
        location: Some(Location::Studio),
        notes: Some("golden hour if possible".to_string()),
    }
}

fn created(attempt: BookingAttempt) -> Booking {
    match attempt {
        BookingAttempt::Created(b) => b,
        BookingAttempt::Rejected(reason) => panic!("unexpected rejection: {reason:?}"),
    }
}

async fn seed_booking(
    app: &TestApp,
    user: &UserProfile,
    date: NaiveDate,
    time: &str,
    status: BookingStatus,
) -> Booking {
    let mut booking = Booking::new(NewBookingParams {
        user_id: user.id.clone(),
        user_email: user.email.clone(),
        session_type: SessionType::Portrait,
        date,
        time: time.to_string(),
        duration: 1,
        guests: 2,
        location: Location::Studio,
        notes: String::new(),
        price: 150,
    });
    booking.status = status;
    app.state.booking_repo.insert(&booking).await.unwrap();
    booking
}

#[tokio::test]
async fn create_wedding_booking_prices_and_pends() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;

    let booking = created(
        app.state
            .bookings
            .create(&client, valid_input(future_date(30), "10:00"))
            .await
            .unwrap(),
    );

    assert_eq!(booking.price, 1125);
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.user_id, client.id);
    assert_eq!(booking.user_email, "alice@example.com");

    let stored = app
        .state
        .booking_repo
        .find_by_id(&booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.price, 1125);
}

#[tokio::test]
async fn create_rejects_duration_outside_type_bounds() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;

    let mut input = valid_input(future_date(30), "10:00");
    input.session_type = Some(SessionType::Portrait); // bounds 1-2
    input.duration = Some(3);

    let attempt = app.state.bookings.create(&client, input).await.unwrap();
    assert!(matches!(
        attempt,
        BookingAttempt::Rejected(RejectReason::DurationOutOfRange { min: 1, max: 2, got: 3 })
    ));
    assert!(app.state.booking_repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_missing_required_fields_silently() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;

    let mut input = valid_input(future_date(30), "10:00");
    input.time = None;
    let attempt = app.state.bookings.create(&client, input).await.unwrap();
    assert!(matches!(
        attempt,
        BookingAttempt::Rejected(RejectReason::MissingField("time"))
    ));

    let mut input = valid_input(future_date(30), "10:00");
    input.guests = Some(0);
    let attempt = app.state.bookings.create(&client, input).await.unwrap();
    assert!(matches!(
        attempt,
        BookingAttempt::Rejected(RejectReason::MissingField("guests"))
    ));

    let mut input = valid_input(future_date(30), "10:00");
    input.session_type = Some(SessionType::Custom("   ".to_string()));
    let attempt = app.state.bookings.create(&client, input).await.unwrap();
    assert!(matches!(
        attempt,
        BookingAttempt::Rejected(RejectReason::MissingField("type"))
    ));

    assert!(app.state.booking_repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_requires_a_session_at_the_identity_seam() {
    let app = TestApp::new().await;
    app.register_client("Alice", "alice@example.com").await;
    app.state.identity.logout().await.unwrap();

    let err = app.state.identity.require_session().await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn cancel_is_idempotent() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;
    let booking = created(
        app.state
            .bookings
            .create(&client, valid_input(future_date(30), "10:00"))
            .await
            .unwrap(),
    );

    app.state.bookings.cancel(&client, &booking.id).await.unwrap();
    app.state.bookings.cancel(&client, &booking.id).await.unwrap();

    let bookings = app.state.booking_repo.list().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn cancel_of_unknown_id_is_a_silent_noop() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;
    app.state.bookings.cancel(&client, "no-such-id").await.unwrap();
    assert!(app.state.booking_repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn approve_and_reject_overwrite_status() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;
    let first = created(
        app.state
            .bookings
            .create(&client, valid_input(future_date(30), "10:00"))
            .await
            .unwrap(),
    );
    let second = created(
        app.state
            .bookings
            .create(&client, valid_input(future_date(31), "11:00"))
            .await
            .unwrap(),
    );

    let admin = app.login_admin().await;
    app.state
        .bookings
        .set_status(&admin, &first.id, ReviewDecision::Approve)
        .await
        .unwrap();
    app.state
        .bookings
        .set_status(&admin, &second.id, ReviewDecision::Reject)
        .await
        .unwrap();

    let stored = app.state.booking_repo.find_by_id(&first.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Approved);
    let stored = app.state.booking_repo.find_by_id(&second.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Rejected);
}

#[tokio::test]
async fn set_status_on_unknown_id_leaves_collection_unchanged() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;
    created(
        app.state
            .bookings
            .create(&client, valid_input(future_date(30), "10:00"))
            .await
            .unwrap(),
    );
    let admin = app.login_admin().await;

    app.state
        .bookings
        .set_status(&admin, "no-such-id", ReviewDecision::Approve)
        .await
        .unwrap();

    let bookings = app.state.booking_repo.list().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatus::Pending);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;
    let booking = created(
        app.state
            .bookings
            .create(&client, valid_input(future_date(30), "10:00"))
            .await
            .unwrap(),
    );
    let admin = app.login_admin().await;

    app.state.bookings.delete(&admin, &booking.id).await.unwrap();
    assert!(app.state.booking_repo.list().await.unwrap().is_empty());

    // Deleting again is harmless.
    app.state.bookings.delete(&admin, &booking.id).await.unwrap();
}

#[tokio::test]
async fn list_for_user_applies_status_filters_and_derives_completion() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;

    let upcoming = seed_booking(&app, &client, future_date(10), "10:00", BookingStatus::Pending).await;
    let past_pending = seed_booking(&app, &client, future_date(-5), "11:00", BookingStatus::Pending).await;
    let done = seed_booking(&app, &client, future_date(-20), "12:00", BookingStatus::Completed).await;
    let cancelled = seed_booking(&app, &client, future_date(3), "13:00", BookingStatus::Cancelled).await;
    seed_booking(&app, &client, future_date(7), "14:00", BookingStatus::Approved).await;

    let pending = app
        .state
        .bookings
        .list_for_user(&client.id, StatusFilter::Pending, DateOrder::Oldest)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].booking.id, upcoming.id);

    let completed = app
        .state
        .bookings
        .list_for_user(&client.id, StatusFilter::Completed, DateOrder::Oldest)
        .await
        .unwrap();
    let ids: Vec<&str> = completed.iter().map(|v| v.booking.id.as_str()).collect();
    assert_eq!(ids, vec![done.id.as_str(), past_pending.id.as_str()]);

    let cancelled_only = app
        .state
        .bookings
        .list_for_user(&client.id, StatusFilter::Cancelled, DateOrder::Oldest)
        .await
        .unwrap();
    assert_eq!(cancelled_only.len(), 1);
    assert_eq!(cancelled_only[0].booking.id, cancelled.id);

    let all = app
        .state
        .bookings
        .list_for_user(&client.id, StatusFilter::All, DateOrder::Oldest)
        .await
        .unwrap();
    assert_eq!(all.len(), 5);
    let bucket_of = |id: &str| {
        all.iter()
            .find(|v| v.booking.id == id)
            .map(|v| v.bucket)
            .unwrap()
    };
    assert_eq!(bucket_of(&upcoming.id), DisplayBucket::Upcoming);
    assert_eq!(bucket_of(&past_pending.id), DisplayBucket::Completed);
    assert_eq!(bucket_of(&done.id), DisplayBucket::Completed);
    assert_eq!(bucket_of(&cancelled.id), DisplayBucket::Cancelled);

    // The past pending booking was never rewritten in storage.
    let stored = app
        .state
        .booking_repo
        .find_by_id(&past_pending.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Pending);
}

#[tokio::test]
async fn listings_sort_by_combined_date_and_time() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;

    let day = future_date(10);
    let late = seed_booking(&app, &client, day, "15:00", BookingStatus::Pending).await;
    let early = seed_booking(&app, &client, day, "09:00", BookingStatus::Pending).await;
    let next_day = seed_booking(&app, &client, future_date(11), "08:00", BookingStatus::Pending).await;

    let oldest_first = app
        .state
        .bookings
        .list_for_user(&client.id, StatusFilter::All, DateOrder::Oldest)
        .await
        .unwrap();
    let ids: Vec<&str> = oldest_first.iter().map(|v| v.booking.id.as_str()).collect();
    assert_eq!(ids, vec![early.id.as_str(), late.id.as_str(), next_day.id.as_str()]);

    let newest_first = app
        .state
        .bookings
        .list_for_user(&client.id, StatusFilter::All, DateOrder::Newest)
        .await
        .unwrap();
    let ids: Vec<&str> = newest_first.iter().map(|v| v.booking.id.as_str()).collect();
    assert_eq!(ids, vec![next_day.id.as_str(), late.id.as_str(), early.id.as_str()]);
}

#[tokio::test]
async fn list_all_spans_every_user() {
    let app = TestApp::new().await;
    let alice = app.register_client("Alice", "alice@example.com").await;
    let bob = app.register_client("Bob", "bob@example.com").await;

    seed_booking(&app, &alice, future_date(5), "10:00", BookingStatus::Pending).await;
    seed_booking(&app, &bob, future_date(6), "11:00", BookingStatus::Pending).await;

    let all = app
        .state
        .bookings
        .list_all(StatusFilter::All, DateOrder::Oldest)
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let alice_only = app
        .state
        .bookings
        .list_for_user(&alice.id, StatusFilter::All, DateOrder::Oldest)
        .await
        .unwrap();
    assert_eq!(alice_only.len(), 1);
}

#[tokio::test]
async fn user_stats_and_status_counts_match_fixtures() {
    let app = TestApp::new().await;
    let client = app.register_client("Alice", "alice@example.com").await;

    // Two future pending (3h total), one past pending, one cancelled, one approved.
    let mut future_a = seed_booking(&app, &client, future_date(4), "10:00", BookingStatus::Pending).await;
    future_a.duration = 2;
    app.state.booking_repo.update(&future_a).await.unwrap();
    seed_booking(&app, &client, future_date(8), "11:00", BookingStatus::Pending).await;
    seed_booking(&app, &client, future_date(-2), "12:00", BookingStatus::Pending).await;
    seed_booking(&app, &client, future_date(9), "13:00", BookingStatus::Cancelled).await;
    seed_booking(&app, &client, future_date(12), "14:00", BookingStatus::Approved).await;

    let stats = app.state.bookings.stats_for_user(&client.id).await.unwrap();
    assert_eq!(stats.upcoming_sessions, 2);
    // Past-dated or cancelled: the past pending one plus the cancelled one.
    assert_eq!(stats.past_sessions, 2);
    // All pending bookings count toward hours: 2 + 1 + 1.
    assert_eq!(stats.total_hours, 4);

    let counts = app.state.bookings.status_counts().await.unwrap();
    assert_eq!(counts.pending, 3);
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.rejected, 0);
}
