//! Channel breakdown view.
//!
//! Splits the bundle's totals across the fixed ordered channel list
//! with a decaying weight, so earlier channels are systematically
//! larger. Each row's ratios are recomputed from the row's own
//! numbers, keeping every row internally consistent.

use crate::{
    key::SeriesKey,
    metrics::{clamp_pct, denom, MetricBundle},
    rng::KeyedRng,
};
use serde::{Deserialize, Serialize};

/// Fixed ordered channel list. Append-only: the order feeds the
/// decaying weights and the per-row draw order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Search,
    Recommend,
    Homefeed,
    Live,
    Affiliate,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Self::Search,
        Self::Recommend,
        Self::Homefeed,
        Self::Live,
        Self::Affiliate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Recommend => "Recommend",
            Self::Homefeed => "Homefeed",
            Self::Live => "Live",
            Self::Affiliate => "Affiliate",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelRow {
    pub channel: Channel,
    pub exposure: u64,
    pub clicks: u64,
    pub cost: f64,
    pub gmv: f64,
    pub ctr_pct: f64,
    pub roi: f64,
}

const WEIGHT_STEP: f64 = 0.15;

pub fn build_channels(key: &SeriesKey, bundle: &MetricBundle) -> Vec<ChannelRow> {
    let mut rng = KeyedRng::from_key(&key.child("channels"));

    // One weight draw per channel first, then the per-row metric
    // perturbations, so adding a metric later never shifts the weights.
    let weights: Vec<f64> = Channel::ALL
        .iter()
        .enumerate()
        .map(|(i, _)| (1.0 - i as f64 * WEIGHT_STEP) * rng.in_range(0.95, 1.05))
        .collect();
    let total_weight: f64 = weights.iter().sum();

    Channel::ALL
        .iter()
        .zip(weights)
        .map(|(&channel, weight)| {
            let share = weight / total_weight.max(1e-9);
            let exposure = (bundle.exposure as f64 * share).round() as u64;
            let clicks =
                (bundle.clicks as f64 * share * rng.in_range(0.9, 1.1)).round() as u64;
            let cost = (bundle.cost * share * rng.in_range(0.9, 1.1)).round();
            let gmv = (bundle.gmv * share * rng.in_range(0.9, 1.1)).round();
            ChannelRow {
                channel,
                exposure,
                clicks,
                cost,
                gmv,
                ctr_pct: clamp_pct(clicks as f64 / denom(exposure) * 100.0),
                roi: (gmv / cost.max(1.0)).clamp(0.0, 100.0),
            }
        })
        .collect()
}
