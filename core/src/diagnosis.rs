//! Diagnosis cards — synthetic health findings per metric.
//!
//! The card catalogue is a fixed ordered list of templates; the keyed
//! stream only selects each card's severity and score. Severity is
//! chosen by stable index into the ordered enum, so a given sub-key
//! always produces the same severity.

use crate::{key::SeriesKey, rng::KeyedRng};
use serde::{Deserialize, Serialize};

/// Ordered severity scale. Append-only: the stream indexes into ALL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Self::Info, Self::Warning, Self::Critical];
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosisCard {
    pub title: String,
    pub metric: String,
    pub severity: Severity,
    /// Synthetic health score in [40, 95].
    pub score: f64,
    pub suggestion: String,
}

struct Template {
    metric: &'static str,
    title: &'static str,
    suggestion: &'static str,
}

const TEMPLATES: &[Template] = &[
    Template {
        metric: "ctr",
        title: "Click-through below category median",
        suggestion: "Refresh the top three creatives and retest titles",
    },
    Template {
        metric: "cpc",
        title: "Click cost drifting above plan",
        suggestion: "Tighten bids on broad-match keywords",
    },
    Template {
        metric: "roi",
        title: "Return on spend under target",
        suggestion: "Shift budget toward the top two ranked plans",
    },
    Template {
        metric: "cvr",
        title: "Payment conversion lagging traffic",
        suggestion: "Audit the checkout funnel for drop-off steps",
    },
    Template {
        metric: "cart_rate",
        title: "Cart adds not keeping pace with clicks",
        suggestion: "Review landing-page price anchoring",
    },
    Template {
        metric: "exposure",
        title: "Exposure concentration in one channel",
        suggestion: "Rebalance the channel mix before scaling",
    },
];

pub fn build_diagnosis(key: &SeriesKey) -> Vec<DiagnosisCard> {
    let mut rng = KeyedRng::from_key(&key.child("diagnosis"));

    TEMPLATES
        .iter()
        .map(|t| {
            let severity = *rng.pick(&Severity::ALL);
            let score = rng.in_range(40.0, 95.0);
            DiagnosisCard {
                title: t.title.to_string(),
                metric: t.metric.to_string(),
                severity,
                score,
                suggestion: t.suggestion.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Period, Role, Stage};

    fn key(period: Period) -> SeriesKey {
        SeriesKey::new(
            Role::Service,
            Stage::Decline,
            period,
            "2024-06-01".parse().unwrap(),
            "2024-06-30".parse().unwrap(),
        )
    }

    #[test]
    fn one_card_per_template() {
        let cards = build_diagnosis(&key(Period::Current));
        assert_eq!(cards.len(), TEMPLATES.len());
    }

    #[test]
    fn cards_are_deterministic() {
        assert_eq!(
            build_diagnosis(&key(Period::Current)),
            build_diagnosis(&key(Period::Current))
        );
    }

    #[test]
    fn period_flip_changes_the_cards() {
        let cur = build_diagnosis(&key(Period::Current));
        let cmp = build_diagnosis(&key(Period::Compare));
        // Severities and scores reshuffle; titles stay fixed.
        assert_ne!(cur, cmp);
        for (a, b) in cur.iter().zip(&cmp) {
            assert_eq!(a.title, b.title);
        }
    }

    #[test]
    fn scores_stay_in_band() {
        for card in build_diagnosis(&key(Period::Current)) {
            assert!((40.0..95.0).contains(&card.score));
        }
    }
}
