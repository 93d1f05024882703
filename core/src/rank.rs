//! Ranked top-N lists (plans, audiences, keywords).
//!
//! Items carry a decaying share of the bundle's GMV so the list reads
//! as a genuine ranking: position i is scaled by 1 - i*step, and the
//! perturbation band is narrow enough that the order can never invert.

use crate::{
    key::SeriesKey,
    metrics::{clamp_pct, MetricBundle},
    naming::Lexicon,
    rng::KeyedRng,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RankDimension {
    Plans,
    Audiences,
    Keywords,
}

impl RankDimension {
    /// Sub-key discriminator; stable wire token.
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::Plans => "rank|plans",
            Self::Audiences => "rank|audiences",
            Self::Keywords => "rank|keywords",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankItem {
    pub rank: u32,
    pub name: String,
    pub gmv: f64,
    pub share_pct: f64,
}

const RANK_STEP: f64 = 0.12;
/// Last position where the linear base stays comfortably above zero;
/// past it the base decays geometrically instead of collapsing.
const LAST_LINEAR: usize = 7;
const TAIL_DECAY: f64 = 0.7;
/// Fraction of total GMV attributed to the ranked head of the list.
const HEAD_SHARE: f64 = 0.6;

/// Strictly decreasing base weight for position i. Adjacent bases
/// differ by at least ~13% everywhere, so the ±5% perturbation on top
/// can never reorder two neighbours.
fn base_weight(i: usize) -> f64 {
    if i <= LAST_LINEAR {
        1.0 - i as f64 * RANK_STEP
    } else {
        (1.0 - LAST_LINEAR as f64 * RANK_STEP) * TAIL_DECAY.powi((i - LAST_LINEAR) as i32)
    }
}

pub fn build_rank(
    key: &SeriesKey,
    bundle: &MetricBundle,
    dimension: RankDimension,
    n: usize,
) -> Vec<RankItem> {
    let mut rng = KeyedRng::from_key(&key.child(dimension.discriminator()));

    // Names first, weights second: adding an item field later must not
    // rename existing entries.
    let names: Vec<String> = (0..n)
        .map(|_| match dimension {
            RankDimension::Plans => Lexicon::plan_name(&mut rng),
            RankDimension::Audiences => Lexicon::audience_name(&mut rng),
            RankDimension::Keywords => Lexicon::keyword(&mut rng),
        })
        .collect();

    let weights: Vec<f64> = (0..n)
        .map(|i| base_weight(i) * rng.in_range(0.95, 1.05))
        .collect();
    let total_weight: f64 = weights.iter().sum();

    names
        .into_iter()
        .zip(weights)
        .enumerate()
        .map(|(i, (name, weight))| {
            let share = weight / total_weight.max(1e-9);
            let gmv = (bundle.gmv * HEAD_SHARE * share).round();
            RankItem {
                rank: i as u32 + 1,
                name,
                gmv,
                share_pct: clamp_pct(gmv / bundle.gmv.max(1.0) * 100.0),
            }
        })
        .collect()
}
