use chrono::Utc;
use photobook::config::Config;
use photobook::domain::services::lifecycle::{DateOrder, StatusFilter};
use photobook::domain::services::scheduling::available_slots;
use photobook::error::AppError;
use photobook::infra::factory::bootstrap_state;
use photobook::init_logging;
use tracing::info;

/// Boots the storage backend and prints a day-sheet: today's slot board and
/// the review queue counts.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let _guard = init_logging();
    let config = Config::from_env();
    let state = bootstrap_state(&config).await?;

    let today = Utc::now().date_naive();
    let all = state.bookings.list_all(StatusFilter::All, DateOrder::Oldest).await?;
    let todays: Vec<_> = all
        .iter()
        .map(|v| v.booking.clone())
        .filter(|b| b.date == today)
        .collect();

    println!("Slots for {today}:");
    for slot in available_slots(today, &todays) {
        let tag = if slot.taken { "taken" } else { "available" };
        println!("  {}  {tag}", slot.time);
    }

    let counts = state.bookings.status_counts().await?;
    println!(
        "Bookings: {} pending, {} approved, {} rejected",
        counts.pending, counts.approved, counts.rejected
    );

    info!("Day sheet printed for {today}");
    Ok(())
}
