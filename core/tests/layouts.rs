//! Per-role section layout contract: which sections each role's
//! screen shows, in order. Renderers key off this shape.

use mockdash_core::{Dashboard, GeneratorConfig, Role, Stage};

fn section_kinds(role: Role) -> Vec<&'static str> {
    Dashboard::build(
        &GeneratorConfig::builtin(),
        role,
        Stage::Growth,
        "2024-01-01".parse().unwrap(),
        "2024-01-31".parse().unwrap(),
    )
    .expect("build dashboard")
    .sections
    .iter()
    .map(|s| s.kind())
    .collect()
}

#[test]
fn merchant_layout() {
    assert_eq!(
        section_kinds(Role::Merchant),
        ["kpi", "funnel", "rank", "rank", "diagnosis"]
    );
}

#[test]
fn operations_layout() {
    assert_eq!(
        section_kinds(Role::Operations),
        ["kpi", "funnel", "kanban", "op_log"]
    );
}

#[test]
fn marketing_layout() {
    assert_eq!(
        section_kinds(Role::Marketing),
        ["kpi", "channels", "rank", "diagnosis"]
    );
}

#[test]
fn finance_layout() {
    assert_eq!(section_kinds(Role::Finance), ["kpi", "channels", "rank"]);
}

#[test]
fn service_layout() {
    assert_eq!(
        section_kinds(Role::Service),
        ["kpi", "kanban", "op_log", "diagnosis"]
    );
}
