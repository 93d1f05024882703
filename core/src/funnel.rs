//! Conversion funnel view.
//!
//! The funnel is a direct projection of the bundle's stage counts, so
//! monotonicity is inherited from the bundle (each stage was computed
//! by multiplying down from the previous one). No extra draws here.

use crate::metrics::{denom, MetricBundle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunnelStep {
    pub name: String,
    pub count: u64,
    /// Conversion from the previous step; 100 for the first step.
    pub conversion_pct: f64,
}

pub fn build_funnel(bundle: &MetricBundle) -> Vec<FunnelStep> {
    let mut steps = Vec::with_capacity(5);
    let mut prev: Option<u64> = None;
    for (name, count) in bundle.funnel_counts() {
        let conversion_pct = match prev {
            None => 100.0,
            Some(p) => (count as f64 / denom(p) * 100.0).clamp(0.0, 100.0),
        };
        steps.push(FunnelStep {
            name: name.to_string(),
            count,
            conversion_pct,
        });
        prev = Some(count);
    }
    steps
}
