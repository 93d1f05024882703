//! mockdash-core — deterministic synthetic metrics for role-based
//! dashboards.
//!
//! Every number the library emits is a pure function of a composite
//! string key (`role|stage|period|from|to[|entity]`): the key is
//! hashed to a seed, the seed drives a private stream, and one
//! internally consistent metric bundle plus its display views are
//! derived from that stream. Nothing is stored, nothing is read from
//! the environment, and derived ratios (CTR, CPC, ROI, CVR) are
//! always recomputed from the drawn values rather than drawn
//! themselves.

pub mod baseline;
pub mod channels;
pub mod dashboard;
pub mod diagnosis;
pub mod error;
pub mod funnel;
pub mod kanban;
pub mod key;
pub mod kpi;
pub mod metrics;
pub mod naming;
pub mod oplog;
pub mod rank;
pub mod rng;
pub mod section;

pub use baseline::GeneratorConfig;
pub use dashboard::Dashboard;
pub use error::{GenError, GenResult};
pub use key::{Period, Role, SeriesKey, Stage};
pub use kpi::Trend;
pub use metrics::MetricBundle;
pub use section::Section;
