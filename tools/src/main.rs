//! dash-runner: headless dashboard generator.
//!
//! Usage:
//!   dash-runner --role merchant --stage growth --from 2024-01-01 --to 2024-01-31
//!   dash-runner --role operations --json
//!   dash-runner --role marketing --compare
//!   dash-runner --role finance --config baselines.json

use anyhow::Result;
use chrono::NaiveDate;
use mockdash_core::kpi::compare_for_key;
use mockdash_core::{Dashboard, GeneratorConfig, Period, Role, Section, SeriesKey, Stage};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let role: Role = parse_flag(&args, "--role", "merchant")?;
    let stage: Stage = parse_flag(&args, "--stage", "growth")?;
    let from: NaiveDate = parse_flag(&args, "--from", "2024-01-01")?;
    let to: NaiveDate = parse_flag(&args, "--to", "2024-01-31")?;
    let json = args.iter().any(|a| a == "--json");
    let compare = args.iter().any(|a| a == "--compare");

    let config = match flag_value(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::builtin(),
    };

    log::info!(
        "dash-runner role={} stage={} range={from}..{to}",
        role.as_str(),
        stage.as_str()
    );

    if compare {
        return print_comparison(&config, role, stage, from, to, json);
    }

    let dashboard = Dashboard::build(&config, role, stage, from, to)?;

    if json {
        println!("{}", dashboard.to_json()?);
    } else {
        print_summary(&dashboard);
    }

    Ok(())
}

/// --compare: just the period-over-period KPI pair, no layout.
fn print_comparison(
    config: &GeneratorConfig,
    role: Role,
    stage: Stage,
    from: NaiveDate,
    to: NaiveDate,
    json: bool,
) -> Result<()> {
    let baseline = config.baseline(role)?;
    let key = SeriesKey::new(role, stage, Period::Current, from, to);
    let cards = compare_for_key(&key, baseline, config.stage_scale(stage));

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("=== KPI COMPARISON ===");
    println!("  role:   {}", role.as_str());
    println!("  range:  {from} .. {to}");
    println!();
    for card in &cards {
        println!(
            "  {:<12} {:>14.1}{:<2} vs {:>14.1}{:<2} {}",
            card.label, card.current, card.unit, card.compare, card.unit, card.delta_label
        );
    }
    Ok(())
}

fn print_summary(dashboard: &Dashboard) {
    println!("=== DASHBOARD ===");
    println!("  role:   {}", dashboard.role.as_str());
    println!("  stage:  {}", dashboard.stage.as_str());
    println!("  range:  {} .. {}", dashboard.from, dashboard.to);
    println!();

    for section in &dashboard.sections {
        println!("--- {} ---", section.title());
        match section {
            Section::Kpi { cards, .. } => {
                for card in cards {
                    println!(
                        "  {:<12} {:>14.1}{:<2} {}",
                        card.label, card.current, card.unit, card.delta_label
                    );
                }
            }
            Section::Funnel { steps, .. } => {
                for step in steps {
                    println!(
                        "  {:<12} {:>12} ({:.1}%)",
                        step.name, step.count, step.conversion_pct
                    );
                }
            }
            Section::Channels { rows, .. } => {
                for row in rows {
                    println!(
                        "  {:<10} exposure={:>10} gmv={:>12.0} roi={:.2}",
                        row.channel.label(),
                        row.exposure,
                        row.gmv,
                        row.roi
                    );
                }
            }
            Section::Rank { items, .. } => {
                for item in items {
                    println!(
                        "  #{:<2} {:<32} gmv={:>12.0} ({:.1}%)",
                        item.rank, item.name, item.gmv, item.share_pct
                    );
                }
            }
            Section::Diagnosis { cards, .. } => {
                for card in cards {
                    println!("  [{:?}] {} — {}", card.severity, card.title, card.suggestion);
                }
            }
            Section::Kanban { tasks, .. } => {
                for task in tasks {
                    println!(
                        "  {} [{:?}/{:?}] {} — {} (due {})",
                        task.id, task.lane, task.priority, task.title, task.assignee, task.due
                    );
                }
            }
            Section::OpLog { entries, .. } => {
                for entry in entries {
                    println!(
                        "  {} {} {} '{}' ({})",
                        entry.at, entry.operator, entry.action, entry.object, entry.outcome
                    );
                }
            }
        }
        println!();
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_flag<T>(args: &[String], flag: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_value(args, flag)
        .unwrap_or(default)
        .parse()
        .map_err(Into::into)
}
