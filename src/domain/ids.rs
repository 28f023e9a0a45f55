use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED: AtomicI64 = AtomicI64::new(0);

/// Creation-time-derived identifier: the current millisecond timestamp,
/// bumped past the previous issue when two ids land in the same millisecond.
pub fn creation_id() -> String {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_ISSUED.compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next.to_string(),
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut previous = creation_id().parse::<i64>().unwrap();
        for _ in 0..1000 {
            let next = creation_id().parse::<i64>().unwrap();
            assert!(next > previous);
            previous = next;
        }
    }
}
