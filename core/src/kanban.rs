//! Kanban seed data — synthetic operational tasks.
//!
//! Every field comes from the keyed stream or a fixed ordered
//! enumeration: ids are drawn numbers, assignees come from the curated
//! staff list, due dates are offsets from the key's end date. No
//! wall-clock reads, no platform id generation.

use crate::{key::SeriesKey, naming::Lexicon, rng::KeyedRng};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Todo,
    InProgress,
    Review,
    Done,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KanbanTask {
    pub id: String,
    pub title: String,
    pub assignee: String,
    pub due: NaiveDate,
    pub priority: Priority,
    pub lane: Lane,
}

const TASK_VERBS: &[&str] = &[
    "Review", "Rebalance", "Pause", "Scale", "Audit", "Refresh", "Approve",
];

const TASK_OBJECTS: &[&str] = &[
    "budget pacing", "bid caps", "creative rotation", "audience overlap",
    "keyword negatives", "landing pages", "channel mix",
];

pub fn build_kanban(key: &SeriesKey, n: usize) -> Vec<KanbanTask> {
    let mut rng = KeyedRng::from_key(&key.child("kanban"));

    (0..n)
        .map(|_| {
            let id = format!("TASK-{:04}", 1000 + rng.index(9000));
            let verb = *rng.pick(TASK_VERBS);
            let object = *rng.pick(TASK_OBJECTS);
            let assignee = Lexicon::person(&mut rng).to_string();
            let due = key.to + Duration::days(rng.index(14) as i64 + 1);
            let priority = *rng.pick(&Priority::ALL);
            let lane = *rng.pick(&Lane::ALL);
            KanbanTask {
                id,
                title: format!("{verb} {object}"),
                assignee,
                due,
                priority,
                lane,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Period, Role, Stage};

    fn key() -> SeriesKey {
        SeriesKey::new(
            Role::Operations,
            Stage::Growth,
            Period::Current,
            "2024-07-01".parse().unwrap(),
            "2024-07-31".parse().unwrap(),
        )
    }

    #[test]
    fn tasks_are_deterministic() {
        assert_eq!(build_kanban(&key(), 8), build_kanban(&key(), 8));
    }

    #[test]
    fn ids_are_task_numbers() {
        for task in build_kanban(&key(), 20) {
            assert!(task.id.starts_with("TASK-"), "{}", task.id);
            let num: u32 = task.id[5..].parse().unwrap();
            assert!((1000..10_000).contains(&num));
        }
    }

    #[test]
    fn due_dates_follow_the_range_end() {
        let k = key();
        for task in build_kanban(&k, 20) {
            assert!(task.due > k.to);
            assert!(task.due <= k.to + Duration::days(14));
        }
    }

    #[test]
    fn zero_tasks_is_valid() {
        assert!(build_kanban(&key(), 0).is_empty());
    }

    #[test]
    fn prefix_of_longer_list_matches_shorter_list() {
        // Draw order is strictly per-task, so asking for more tasks
        // never rewrites the earlier ones.
        let five = build_kanban(&key(), 5);
        let ten = build_kanban(&key(), 10);
        assert_eq!(five[..], ten[..5]);
    }
}
