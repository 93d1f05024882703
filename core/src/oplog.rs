//! Operation log view — synthetic recent activity entries.
//!
//! Timestamps are draws spread across the key's date range and the
//! list is sorted newest-first. Operators, actions, and outcomes all
//! come from fixed ordered enumerations.

use crate::{key::SeriesKey, naming::Lexicon, rng::KeyedRng};
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpLogEntry {
    pub at: NaiveDateTime,
    pub operator: String,
    pub action: String,
    pub object: String,
    pub outcome: String,
}

const ACTIONS: &[&str] = &[
    "raised budget", "paused plan", "adjusted bids", "updated audience",
    "edited creative", "extended schedule",
];

const OUTCOMES: &[&str] = &["applied", "pending review", "rolled back"];

pub fn build_oplog(key: &SeriesKey, n: usize) -> Vec<OpLogEntry> {
    let mut rng = KeyedRng::from_key(&key.child("oplog"));

    let span_days = (key.to - key.from).num_days().max(0);

    let mut entries: Vec<OpLogEntry> = (0..n)
        .map(|_| {
            let day_offset = rng.index(span_days as usize + 1) as i64;
            let hour = rng.index(24) as u32;
            let minute = rng.index(60) as u32;
            let date = key.from + chrono::Duration::days(day_offset);
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
            OpLogEntry {
                at: NaiveDateTime::new(date, time),
                operator: Lexicon::person(&mut rng).to_string(),
                action: (*rng.pick(ACTIONS)).to_string(),
                object: Lexicon::plan_name(&mut rng),
                outcome: (*rng.pick(OUTCOMES)).to_string(),
            }
        })
        .collect();

    // Newest first. Sort is stable, so equal timestamps keep their
    // generation order and the result stays deterministic.
    entries.sort_by(|a, b| b.at.cmp(&a.at));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Period, Role, Stage};

    fn key() -> SeriesKey {
        SeriesKey::new(
            Role::Operations,
            Stage::Mature,
            Period::Current,
            "2024-08-01".parse().unwrap(),
            "2024-08-31".parse().unwrap(),
        )
    }

    #[test]
    fn entries_are_deterministic() {
        assert_eq!(build_oplog(&key(), 12), build_oplog(&key(), 12));
    }

    #[test]
    fn entries_are_newest_first() {
        let entries = build_oplog(&key(), 12);
        for w in entries.windows(2) {
            assert!(w[0].at >= w[1].at);
        }
    }

    #[test]
    fn timestamps_stay_inside_the_range() {
        let k = key();
        for entry in build_oplog(&k, 20) {
            assert!(entry.at.date() >= k.from);
            assert!(entry.at.date() <= k.to);
        }
    }

    #[test]
    fn single_day_range_is_valid() {
        let k = SeriesKey::new(
            Role::Operations,
            Stage::Mature,
            Period::Current,
            "2024-08-15".parse().unwrap(),
            "2024-08-15".parse().unwrap(),
        );
        let entries = build_oplog(&k, 5);
        assert_eq!(entries.len(), 5);
        for entry in entries {
            assert_eq!(entry.at.date(), k.from);
        }
    }
}
