//! Per-role baseline magnitudes.
//!
//! A baseline does not carry any numbers that end up on the board; it
//! carries the *ranges* the primary draws are scaled into, so every
//! role lands in its own plausible order of magnitude. Derived fields
//! are never configured here — they are always recomputed from the
//! primary draws.

use crate::{
    error::{GenError, GenResult},
    key::{Role, Stage},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// An inclusive-exclusive range a primary draw is scaled into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

/// Magnitude hints for one role's metric bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Baseline {
    /// Exposure range before the stage multiplier is applied.
    pub exposure: Band,
    /// Click-through fraction band (fraction, not percent).
    pub ctr: Band,
    /// Cost-per-click band.
    pub cpc: Band,
    /// ROI multiplier band.
    pub roi: Band,
    /// Cart-add fraction of clicks.
    pub cart: Band,
    /// Order fraction of cart adds.
    pub order: Band,
    /// Payment fraction of orders.
    pub pay: Band,
}

/// Role baselines plus per-stage scale multipliers.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    baselines: HashMap<Role, Baseline>,
    stage_scale: HashMap<Stage, f64>,
}

/// On-disk shape: role and stage tokens as JSON object keys.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    baselines: HashMap<String, Baseline>,
    stage_scale: HashMap<String, f64>,
}

impl GeneratorConfig {
    /// Built-in table covering every role and stage.
    pub fn builtin() -> Self {
        let mut baselines = HashMap::new();
        baselines.insert(
            Role::Merchant,
            Baseline {
                exposure: Band::new(6_000_000.0, 10_000_000.0),
                ctr: Band::new(0.035, 0.055),
                cpc: Band::new(0.8, 1.6),
                roi: Band::new(1.8, 3.2),
                cart: Band::new(0.18, 0.30),
                order: Band::new(0.32, 0.50),
                pay: Band::new(0.80, 0.95),
            },
        );
        baselines.insert(
            Role::Operations,
            Baseline {
                exposure: Band::new(4_000_000.0, 7_000_000.0),
                ctr: Band::new(0.030, 0.050),
                cpc: Band::new(0.7, 1.4),
                roi: Band::new(1.5, 2.8),
                cart: Band::new(0.15, 0.26),
                order: Band::new(0.30, 0.46),
                pay: Band::new(0.78, 0.93),
            },
        );
        baselines.insert(
            Role::Marketing,
            Baseline {
                exposure: Band::new(8_000_000.0, 12_000_000.0),
                ctr: Band::new(0.040, 0.060),
                cpc: Band::new(1.0, 2.0),
                roi: Band::new(2.0, 3.6),
                cart: Band::new(0.20, 0.32),
                order: Band::new(0.34, 0.52),
                pay: Band::new(0.82, 0.96),
            },
        );
        baselines.insert(
            Role::Finance,
            Baseline {
                exposure: Band::new(5_000_000.0, 9_000_000.0),
                ctr: Band::new(0.032, 0.052),
                cpc: Band::new(0.9, 1.7),
                roi: Band::new(1.6, 3.0),
                cart: Band::new(0.17, 0.28),
                order: Band::new(0.31, 0.48),
                pay: Band::new(0.80, 0.94),
            },
        );
        baselines.insert(
            Role::Service,
            Baseline {
                exposure: Band::new(2_000_000.0, 4_000_000.0),
                ctr: Band::new(0.028, 0.048),
                cpc: Band::new(0.6, 1.2),
                roi: Band::new(1.4, 2.6),
                cart: Band::new(0.14, 0.24),
                order: Band::new(0.28, 0.44),
                pay: Band::new(0.76, 0.92),
            },
        );

        let stage_scale = [
            (Stage::ColdStart, 0.35),
            (Stage::Growth, 1.0),
            (Stage::Mature, 1.6),
            (Stage::Decline, 0.75),
        ]
        .into();

        Self {
            baselines,
            stage_scale,
        }
    }

    /// Load an override table from a JSON file.
    ///
    /// Unknown role or stage tokens are rejected; a file that only
    /// covers some roles falls back to the built-in entries for the
    /// rest.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: ConfigFile = serde_json::from_str(&content)?;

        let mut config = Self::builtin();
        for (token, baseline) in file.baselines {
            let role = Role::from_str(&token)?;
            validate_baseline(role, &baseline)?;
            config.baselines.insert(role, baseline);
        }
        for (token, scale) in file.stage_scale {
            let stage = Stage::from_str(&token)?;
            config.stage_scale.insert(stage, scale);
        }
        Ok(config)
    }

    pub fn baseline(&self, role: Role) -> GenResult<&Baseline> {
        self.baselines.get(&role).ok_or(GenError::MissingBaseline {
            role: role.as_str().to_string(),
        })
    }

    /// Stage multiplier applied to the exposure scale. Growth is the
    /// reference stage at 1.0.
    pub fn stage_scale(&self, stage: Stage) -> f64 {
        self.stage_scale.get(&stage).copied().unwrap_or(1.0)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_baseline(role: Role, baseline: &Baseline) -> GenResult<()> {
    let bands = [
        ("exposure", baseline.exposure),
        ("ctr", baseline.ctr),
        ("cpc", baseline.cpc),
        ("roi", baseline.roi),
        ("cart", baseline.cart),
        ("order", baseline.order),
        ("pay", baseline.pay),
    ];
    for (name, band) in bands {
        if !(band.lo >= 0.0 && band.lo <= band.hi) {
            return Err(GenError::InvalidBand {
                field: format!("{}.{name}", role.as_str()),
                lo: band.lo,
                hi: band.hi,
            });
        }
    }
    // Funnel fractions must stay below 1 or later stages could exceed
    // earlier ones after rounding.
    for (name, band) in [
        ("ctr", baseline.ctr),
        ("cart", baseline.cart),
        ("order", baseline.order),
        ("pay", baseline.pay),
    ] {
        if band.hi > 1.0 {
            return Err(GenError::InvalidBand {
                field: format!("{}.{name}", role.as_str()),
                lo: band.lo,
                hi: band.hi,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_role() {
        let config = GeneratorConfig::builtin();
        for role in Role::ALL {
            assert!(config.baseline(role).is_ok(), "missing {role:?}");
        }
    }

    #[test]
    fn builtin_covers_every_stage() {
        let config = GeneratorConfig::builtin();
        for stage in Stage::ALL {
            assert!(config.stage_scale(stage) > 0.0);
        }
    }

    #[test]
    fn builtin_fractions_stay_below_one() {
        let config = GeneratorConfig::builtin();
        for role in Role::ALL {
            let b = config.baseline(role).unwrap();
            for band in [b.ctr, b.cart, b.order, b.pay] {
                assert!(band.lo >= 0.0 && band.hi <= 1.0);
            }
        }
    }

    #[test]
    fn validate_rejects_inverted_band() {
        let mut baseline = GeneratorConfig::builtin()
            .baseline(Role::Merchant)
            .unwrap()
            .clone();
        baseline.cpc = Band::new(2.0, 1.0);
        assert!(validate_baseline(Role::Merchant, &baseline).is_err());
    }

    #[test]
    fn validate_rejects_fraction_above_one() {
        let mut baseline = GeneratorConfig::builtin()
            .baseline(Role::Merchant)
            .unwrap()
            .clone();
        baseline.pay = Band::new(0.9, 1.2);
        assert!(validate_baseline(Role::Merchant, &baseline).is_err());
    }
}
