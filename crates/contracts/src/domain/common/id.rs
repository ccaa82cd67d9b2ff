use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier derived from a creation instant: the decimal string of its
/// Unix-epoch milliseconds.
pub fn timestamp_id(at: DateTime<Utc>) -> String {
    at.timestamp_millis().to_string()
}

/// Timestamp-derived identifier guaranteed free according to `is_taken`.
///
/// Two entities created within the same millisecond would otherwise share
/// an identifier; the candidate is moved forward one millisecond at a time
/// until it is unused in the owning collection.
pub fn unique_timestamp_id(at: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let mut millis = at.timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !is_taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

/// Random identifier for entities nested inside an aggregate (poll options,
/// form questions).
pub fn random_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_id_is_epoch_millis() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(timestamp_id(at), "1700000000123");
    }

    #[test]
    fn test_unique_timestamp_id_keeps_free_candidate() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(unique_timestamp_id(at, |_| false), "1700000000000");
    }

    #[test]
    fn test_unique_timestamp_id_bumps_past_taken_candidates() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let taken = ["1700000000000", "1700000000001"];
        let id = unique_timestamp_id(at, |candidate| taken.contains(&candidate));
        assert_eq!(id, "1700000000002");
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(random_id(), random_id());
    }
}
