//! Metric bundle generation — one self-consistent set of business
//! metrics per (key, baseline) pair.
//!
//! RULE: derived ratios are never drawn. They are recomputed from the
//! stored primary values, so CTR = clicks/exposure and ROI = gmv/cost
//! hold exactly for every bundle ever generated. Drawing a ratio
//! independently would silently break those identities.
//!
//! Draw order is fixed and load-bearing: exposure, click fraction,
//! CPC, ROI, then the three funnel fractions. Reordering draws
//! reshuffles every number downstream of the change.

use crate::{
    baseline::Baseline,
    key::SeriesKey,
    rng::KeyedRng,
};
use serde::{Deserialize, Serialize};

/// Clamp a percentage-type rate to its display bound.
pub(crate) fn clamp_pct(v: f64) -> f64 {
    v.clamp(0.0, 100.0)
}

/// Floor an integer denominator at 1 before division.
pub(crate) fn denom(n: u64) -> f64 {
    n.max(1) as f64
}

/// One internally consistent set of metrics for one (entity, period).
///
/// Count fields are integers; rate fields keep float precision and
/// are clamped to declared bounds (percentages to [0, 100], ROI as a
/// multiplier to [0, 100]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricBundle {
    // Primary draws
    pub exposure: u64,
    pub clicks: u64,
    pub cost: f64,
    pub gmv: f64,
    // Funnel tail
    pub cart_adds: u64,
    pub orders: u64,
    pub paid_orders: u64,
    // Derived ratios — always recomputed, never drawn
    pub ctr_pct: f64,
    pub cpc: f64,
    pub roi: f64,
    pub cvr_pct: f64,
    pub cart_rate_pct: f64,
    pub order_rate_pct: f64,
    pub pay_rate_pct: f64,
}

impl MetricBundle {
    /// Generate the bundle for one key. Total function: any key and
    /// any baseline produce a valid bundle, no error conditions.
    pub fn generate(key: &SeriesKey, baseline: &Baseline, stage_scale: f64) -> Self {
        let mut rng = KeyedRng::from_key(&key.to_string());

        // 1. Exposure, scaled into the role's range for this stage.
        let exposure_raw =
            rng.in_range(baseline.exposure.lo, baseline.exposure.hi) * stage_scale;
        let exposure = exposure_raw.round().max(0.0) as u64;

        // 2. Click-through fraction → clicks.
        let ctr_fraction = rng.in_range(baseline.ctr.lo, baseline.ctr.hi);
        let clicks = (exposure as f64 * ctr_fraction).round() as u64;

        // 3. Cost-per-click multiplier → cost.
        let cpc_draw = rng.in_range(baseline.cpc.lo, baseline.cpc.hi);
        let cost = (clicks as f64 * cpc_draw).round();

        // 4. ROI multiplier → GMV.
        let roi_draw = rng.in_range(baseline.roi.lo, baseline.roi.hi);
        let gmv = (cost * roi_draw).round();

        // 5. Funnel tail: each stage multiplies down from the prior
        //    stage's integer count. Fractions are < 1, so rounding can
        //    never push a later stage above an earlier one.
        let cart_fraction = rng.in_range(baseline.cart.lo, baseline.cart.hi);
        let cart_adds = (clicks as f64 * cart_fraction).round() as u64;

        let order_fraction = rng.in_range(baseline.order.lo, baseline.order.hi);
        let orders = (cart_adds as f64 * order_fraction).round() as u64;

        let pay_fraction = rng.in_range(baseline.pay.lo, baseline.pay.hi);
        let paid_orders = (orders as f64 * pay_fraction).round() as u64;

        // 6. Ratios from the stored values.
        let ctr_pct = clamp_pct(clicks as f64 / denom(exposure) * 100.0);
        let cpc = cost / denom(clicks);
        let roi = (gmv / cost.max(1.0)).clamp(0.0, 100.0);
        let cvr_pct = clamp_pct(paid_orders as f64 / denom(clicks) * 100.0);
        let cart_rate_pct = clamp_pct(cart_adds as f64 / denom(clicks) * 100.0);
        let order_rate_pct = clamp_pct(orders as f64 / denom(cart_adds) * 100.0);
        let pay_rate_pct = clamp_pct(paid_orders as f64 / denom(orders) * 100.0);

        Self {
            exposure,
            clicks,
            cost,
            gmv,
            cart_adds,
            orders,
            paid_orders,
            ctr_pct,
            cpc,
            roi,
            cvr_pct,
            cart_rate_pct,
            order_rate_pct,
            pay_rate_pct,
        }
    }

    /// The funnel stages in order, largest first by construction.
    pub fn funnel_counts(&self) -> [(&'static str, u64); 5] {
        [
            ("exposure", self.exposure),
            ("clicks", self.clicks),
            ("cart_adds", self.cart_adds),
            ("orders", self.orders),
            ("paid_orders", self.paid_orders),
        ]
    }
}
