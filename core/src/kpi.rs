//! Period-over-period KPI comparison.
//!
//! The current and compare bundles come from two keys that differ
//! only in the period marker. Each card's trend is a function of its
//! own two values — there is no cross-metric correlation.

use crate::{
    baseline::Baseline,
    key::{Period, SeriesKey},
    metrics::MetricBundle,
};
use serde::{Deserialize, Serialize};

/// Threshold below which a delta counts as stable, so floating noise
/// never flaps a card between up and stable.
pub const TREND_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// One KPI card: a metric's two values, the percentage delta between
/// them, and the classified trend. `delta_label` is the one formatted
/// artifact the generator emits (signed, arrowed percentage).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiComparison {
    pub label: String,
    pub unit: String,
    pub current: f64,
    pub compare: f64,
    pub delta_pct: f64,
    pub trend: Trend,
    pub delta_label: String,
}

/// Compare one metric across the two periods.
///
/// Delta is (current - compare) / compare × 100, defined as exactly 0
/// when compare is 0 — a handled edge case, never NaN or infinity.
pub fn compare_metric(label: &str, unit: &str, current: f64, compare: f64) -> KpiComparison {
    let delta_pct = if compare == 0.0 {
        0.0
    } else {
        (current - compare) / compare * 100.0
    };

    let trend = if delta_pct > TREND_EPSILON {
        Trend::Up
    } else if delta_pct < -TREND_EPSILON {
        Trend::Down
    } else {
        Trend::Stable
    };

    let delta_label = match trend {
        Trend::Up => format!("↑{:.1}%", delta_pct),
        Trend::Down => format!("↓{:.1}%", delta_pct.abs()),
        Trend::Stable => "→0.0%".to_string(),
    };

    KpiComparison {
        label: label.to_string(),
        unit: unit.to_string(),
        current,
        compare,
        delta_pct,
        trend,
        delta_label,
    }
}

/// The standard card set every role's dashboard leads with.
pub fn compare_bundles(current: &MetricBundle, compare: &MetricBundle) -> Vec<KpiComparison> {
    vec![
        compare_metric("Exposure", "", current.exposure as f64, compare.exposure as f64),
        compare_metric("Clicks", "", current.clicks as f64, compare.clicks as f64),
        compare_metric("Cost", "$", current.cost, compare.cost),
        compare_metric("GMV", "$", current.gmv, compare.gmv),
        compare_metric("CTR", "%", current.ctr_pct, compare.ctr_pct),
        compare_metric("CPC", "$", current.cpc, compare.cpc),
        compare_metric("ROI", "x", current.roi, compare.roi),
        compare_metric("CVR", "%", current.cvr_pct, compare.cvr_pct),
        compare_metric(
            "Paid Orders",
            "",
            current.paid_orders as f64,
            compare.paid_orders as f64,
        ),
    ]
}

/// Build the full card set for one key: generate the bundle for the
/// current period and its compare twin (same key, flipped period
/// marker), then compare field by field.
pub fn compare_for_key(
    key: &SeriesKey,
    baseline: &Baseline,
    stage_scale: f64,
) -> Vec<KpiComparison> {
    let current =
        MetricBundle::generate(&key.with_period(Period::Current), baseline, stage_scale);
    let compare =
        MetricBundle::generate(&key.with_period(Period::Compare), baseline, stage_scale);
    compare_bundles(&current, &compare)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_when_current_larger() {
        let card = compare_metric("GMV", "$", 120.0, 100.0);
        assert_eq!(card.trend, Trend::Up);
        assert!((card.delta_pct - 20.0).abs() < 1e-9);
        assert_eq!(card.delta_label, "↑20.0%");
    }

    #[test]
    fn down_when_current_smaller() {
        let card = compare_metric("GMV", "$", 80.0, 100.0);
        assert_eq!(card.trend, Trend::Down);
        assert!((card.delta_pct + 20.0).abs() < 1e-9);
        assert_eq!(card.delta_label, "↓20.0%");
    }

    #[test]
    fn stable_when_equal() {
        let card = compare_metric("CTR", "%", 4.2, 4.2);
        assert_eq!(card.trend, Trend::Stable);
        assert_eq!(card.delta_pct, 0.0);
        assert_eq!(card.delta_label, "→0.0%");
    }

    #[test]
    fn tiny_deltas_are_stable_not_flapping() {
        // Just inside epsilon either way.
        let up = compare_metric("x", "", 100.0005, 100.0);
        assert_eq!(up.trend, Trend::Stable);
        let down = compare_metric("x", "", 99.9995, 100.0);
        assert_eq!(down.trend, Trend::Stable);
    }

    #[test]
    fn zero_compare_gives_exact_zero_delta() {
        let card = compare_metric("Orders", "", 500.0, 0.0);
        assert_eq!(card.delta_pct, 0.0);
        assert!(!card.delta_pct.is_nan());
        assert!(card.delta_pct.is_finite());
        assert_eq!(card.trend, Trend::Stable);
    }

    #[test]
    fn compare_for_key_matches_manual_pair() {
        use crate::baseline::GeneratorConfig;
        use crate::key::{Role, Stage};

        let config = GeneratorConfig::builtin();
        let baseline = config.baseline(Role::Finance).unwrap();
        let scale = config.stage_scale(Stage::Mature);
        let key = SeriesKey::new(
            Role::Finance,
            Stage::Mature,
            Period::Current,
            "2024-03-01".parse().unwrap(),
            "2024-03-31".parse().unwrap(),
        );

        let cur = MetricBundle::generate(&key, baseline, scale);
        let cmp = MetricBundle::generate(&key.with_period(Period::Compare), baseline, scale);
        assert_eq!(
            compare_for_key(&key, baseline, scale),
            compare_bundles(&cur, &cmp)
        );
    }

    #[test]
    fn standard_card_set_is_complete() {
        use crate::baseline::GeneratorConfig;
        use crate::key::{Role, Stage};

        let config = GeneratorConfig::builtin();
        let baseline = config.baseline(Role::Merchant).unwrap();
        let scale = config.stage_scale(Stage::Growth);
        let key = SeriesKey::new(
            Role::Merchant,
            Stage::Growth,
            Period::Current,
            "2024-02-01".parse().unwrap(),
            "2024-02-29".parse().unwrap(),
        );
        let cur = crate::metrics::MetricBundle::generate(&key, baseline, scale);
        let cmp = crate::metrics::MetricBundle::generate(
            &key.with_period(Period::Compare),
            baseline,
            scale,
        );

        let cards = compare_bundles(&cur, &cmp);
        assert_eq!(cards.len(), 9);
        for card in &cards {
            // Trend must match the sign of the underlying values.
            if card.current > card.compare {
                assert_ne!(card.trend, Trend::Down, "{}", card.label);
            } else if card.current < card.compare {
                assert_ne!(card.trend, Trend::Up, "{}", card.label);
            } else {
                assert_eq!(card.trend, Trend::Stable, "{}", card.label);
            }
        }
    }
}
