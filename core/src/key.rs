//! Composite keys — the reproducibility contract.
//!
//! Every generated number in this crate traces back to a string key
//! of the form `role|stage|period|from|to[|entity]`. Equal keys hash
//! to equal seeds and therefore reproduce identical output; changing
//! any one field (typically the period marker) deliberately diverges
//! the stream.
//!
//! RULE: key fragments are stable tokens. Never rename a token once
//! shipped — renames silently reshuffle every number on the board.

use crate::error::GenError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two comparison periods a key addresses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Current,
    Compare,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Compare => "compare",
        }
    }
}

/// Merchandise lifecycle stage of the entity being dashboarded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ColdStart,
    Growth,
    Mature,
    Decline,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Self::ColdStart, Self::Growth, Self::Mature, Self::Decline];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ColdStart => "cold_start",
            Self::Growth => "growth",
            Self::Mature => "mature",
            Self::Decline => "decline",
        }
    }
}

impl FromStr for Stage {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cold_start" => Ok(Self::ColdStart),
            "growth" => Ok(Self::Growth),
            "mature" => Ok(Self::Mature),
            "decline" => Ok(Self::Decline),
            _ => Err(GenError::UnknownStage { name: s.to_string() }),
        }
    }
}

/// Dashboard role. Each role gets its own section layout and its own
/// baseline magnitudes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Merchant,
    Operations,
    Marketing,
    Finance,
    Service,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Self::Merchant,
        Self::Operations,
        Self::Marketing,
        Self::Finance,
        Self::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merchant => "merchant",
            Self::Operations => "operations",
            Self::Marketing => "marketing",
            Self::Finance => "finance",
            Self::Service => "service",
        }
    }
}

impl FromStr for Role {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merchant" => Ok(Self::Merchant),
            "operations" => Ok(Self::Operations),
            "marketing" => Ok(Self::Marketing),
            "finance" => Ok(Self::Finance),
            "service" => Ok(Self::Service),
            _ => Err(GenError::UnknownRole { name: s.to_string() }),
        }
    }
}

/// The composite key for one (role, stage, period, date range, entity)
/// combination. The `Display` form is the wire form that gets hashed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesKey {
    pub role: Role,
    pub stage: Stage,
    pub period: Period,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub entity: Option<String>,
}

impl SeriesKey {
    pub fn new(role: Role, stage: Stage, period: Period, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            role,
            stage,
            period,
            from,
            to,
            entity: None,
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Same key, other period. Used to build the current/compare pair.
    pub fn with_period(&self, period: Period) -> Self {
        let mut k = self.clone();
        k.period = period;
        k
    }

    /// Append a discriminator for a derived view. The child string is
    /// what a view generator hashes, so each view gets its own stream.
    pub fn child(&self, discriminator: &str) -> String {
        format!("{self}|{discriminator}")
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.role.as_str(),
            self.stage.as_str(),
            self.period.as_str(),
            self.from,
            self.to
        )?;
        if let Some(entity) = &self.entity {
            write!(f, "|{entity}")?;
        }
        Ok(())
    }
}
