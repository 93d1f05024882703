//! Dashboard sections as a closed sum type.
//!
//! RULE: renderers dispatch on this enum, never on a string tag, so
//! adding a section variant is a compile-time-checked change. The
//! serde tag exists only for the JSON output shape.

use crate::{
    channels::ChannelRow,
    diagnosis::DiagnosisCard,
    funnel::FunnelStep,
    kanban::KanbanTask,
    kpi::KpiComparison,
    oplog::OpLogEntry,
    rank::{RankDimension, RankItem},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Kpi {
        title: String,
        cards: Vec<KpiComparison>,
    },
    Funnel {
        title: String,
        steps: Vec<FunnelStep>,
    },
    Channels {
        title: String,
        rows: Vec<ChannelRow>,
    },
    Rank {
        title: String,
        dimension: RankDimension,
        items: Vec<RankItem>,
    },
    Diagnosis {
        title: String,
        cards: Vec<DiagnosisCard>,
    },
    Kanban {
        title: String,
        tasks: Vec<KanbanTask>,
    },
    OpLog {
        title: String,
        entries: Vec<OpLogEntry>,
    },
}

impl Section {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Kpi { .. } => "kpi",
            Self::Funnel { .. } => "funnel",
            Self::Channels { .. } => "channels",
            Self::Rank { .. } => "rank",
            Self::Diagnosis { .. } => "diagnosis",
            Self::Kanban { .. } => "kanban",
            Self::OpLog { .. } => "op_log",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Kpi { title, .. }
            | Self::Funnel { title, .. }
            | Self::Channels { title, .. }
            | Self::Rank { title, .. }
            | Self::Diagnosis { title, .. }
            | Self::Kanban { title, .. }
            | Self::OpLog { title, .. } => title,
        }
    }
}
