//! Dashboard assembly — the one entry point callers use.
//!
//! Builds the current/compare bundle pair once, then hands them to
//! the section generators a role's layout asks for. Section layouts
//! are fixed per role, mirroring the per-role screens of the product.

use crate::{
    baseline::GeneratorConfig,
    channels::build_channels,
    diagnosis::build_diagnosis,
    error::GenResult,
    funnel::build_funnel,
    kanban::build_kanban,
    key::{Period, Role, SeriesKey, Stage},
    kpi::compare_bundles,
    metrics::MetricBundle,
    oplog::build_oplog,
    rank::{build_rank, RankDimension},
    section::Section,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const RANK_ITEMS: usize = 5;
const KANBAN_TASKS: usize = 8;
const OPLOG_ENTRIES: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub role: Role,
    pub stage: Stage,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub sections: Vec<Section>,
}

impl Dashboard {
    /// Build the full dashboard for one (role, stage, date range).
    ///
    /// Pure in the reproducibility sense: the same arguments always
    /// produce the same dashboard. The Result exists only for the
    /// baseline lookup at the API edge.
    pub fn build(
        config: &GeneratorConfig,
        role: Role,
        stage: Stage,
        from: NaiveDate,
        to: NaiveDate,
    ) -> GenResult<Self> {
        let baseline = config.baseline(role)?;
        let scale = config.stage_scale(stage);

        let key = SeriesKey::new(role, stage, Period::Current, from, to);
        let current = MetricBundle::generate(&key, baseline, scale);
        let compare =
            MetricBundle::generate(&key.with_period(Period::Compare), baseline, scale);

        log::info!(
            "build dashboard role={} stage={} range={from}..{to} exposure={} gmv={:.0}",
            role.as_str(),
            stage.as_str(),
            current.exposure,
            current.gmv
        );

        let sections = Self::layout(role)
            .iter()
            .map(|kind| {
                let section = kind.build(&key, &current, &compare);
                log::debug!("section {} ready", section.kind());
                section
            })
            .collect();

        Ok(Self {
            role,
            stage,
            from,
            to,
            sections,
        })
    }

    pub fn to_json(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fixed per-role section order. Every role leads with the KPI
    /// cards; the rest mirrors what that role's screen shows.
    fn layout(role: Role) -> &'static [SectionKind] {
        use SectionKind::*;
        match role {
            Role::Merchant => &[Kpi, Funnel, RankPlans, RankKeywords, Diagnosis],
            Role::Operations => &[Kpi, Funnel, Kanban, OpLog],
            Role::Marketing => &[Kpi, Channels, RankAudiences, Diagnosis],
            Role::Finance => &[Kpi, Channels, RankPlans],
            Role::Service => &[Kpi, Kanban, OpLog, Diagnosis],
        }
    }
}

/// Internal layout atoms; each knows how to produce its Section.
#[derive(Debug, Clone, Copy)]
enum SectionKind {
    Kpi,
    Funnel,
    Channels,
    RankPlans,
    RankAudiences,
    RankKeywords,
    Diagnosis,
    Kanban,
    OpLog,
}

impl SectionKind {
    fn build(self, key: &SeriesKey, current: &MetricBundle, compare: &MetricBundle) -> Section {
        match self {
            Self::Kpi => Section::Kpi {
                title: "Core KPIs".to_string(),
                cards: compare_bundles(current, compare),
            },
            Self::Funnel => Section::Funnel {
                title: "Conversion Funnel".to_string(),
                steps: build_funnel(current),
            },
            Self::Channels => Section::Channels {
                title: "Channel Breakdown".to_string(),
                rows: build_channels(key, current),
            },
            Self::RankPlans => Section::Rank {
                title: "Top Plans".to_string(),
                dimension: RankDimension::Plans,
                items: build_rank(key, current, RankDimension::Plans, RANK_ITEMS),
            },
            Self::RankAudiences => Section::Rank {
                title: "Top Audiences".to_string(),
                dimension: RankDimension::Audiences,
                items: build_rank(key, current, RankDimension::Audiences, RANK_ITEMS),
            },
            Self::RankKeywords => Section::Rank {
                title: "Top Keywords".to_string(),
                dimension: RankDimension::Keywords,
                items: build_rank(key, current, RankDimension::Keywords, RANK_ITEMS),
            },
            Self::Diagnosis => Section::Diagnosis {
                title: "Health Diagnosis".to_string(),
                cards: build_diagnosis(key),
            },
            Self::Kanban => Section::Kanban {
                title: "Action Board".to_string(),
                tasks: build_kanban(key, KANBAN_TASKS),
            },
            Self::OpLog => Section::OpLog {
                title: "Recent Operations".to_string(),
                entries: build_oplog(key, OPLOG_ENTRIES),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(role: Role) -> Dashboard {
        Dashboard::build(
            &GeneratorConfig::builtin(),
            role,
            Stage::Growth,
            "2024-01-01".parse().unwrap(),
            "2024-01-31".parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn every_role_builds_and_leads_with_kpis() {
        for role in Role::ALL {
            let dash = build(role);
            assert!(!dash.sections.is_empty());
            assert_eq!(dash.sections[0].kind(), "kpi");
        }
    }

    #[test]
    fn dashboards_are_deterministic() {
        for role in Role::ALL {
            assert_eq!(build(role), build(role));
        }
    }

    #[test]
    fn roles_get_distinct_layouts_and_numbers() {
        let merchant = build(Role::Merchant);
        let marketing = build(Role::Marketing);
        assert_ne!(merchant.sections, marketing.sections);
    }

    #[test]
    fn json_output_round_trips() {
        // Exact float round-tripping needs serde_json's float_roundtrip
        // feature; without it parsed floats can drift by an ulp.
        let dash = build(Role::Operations);
        let json = dash.to_json().unwrap();
        let back: Dashboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dash);
    }
}
