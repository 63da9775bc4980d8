#![deny(warnings)]

//! Headless CLI: runs one scripted studio season and prints the KPIs.

use anyhow::Result;
use sim_runtime::{SimConfig, Studio};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    seed: u64,
    weeks: u64,
    save_dir: PathBuf,
    save_slot: Option<u8>,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 42,
        weeks: 26,
        save_dir: PathBuf::from("./saves"),
        save_slot: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = it.next().and_then(|s| s.parse().ok()) {
                    args.seed = v;
                }
            }
            "--weeks" => {
                if let Some(v) = it.next().and_then(|s| s.parse().ok()) {
                    args.weeks = v;
                }
            }
            "--save-dir" => {
                if let Some(v) = it.next() {
                    args.save_dir = PathBuf::from(v);
                }
            }
            "--save-slot" => args.save_slot = it.next().and_then(|s| s.parse().ok()),
            _ => {}
        }
    }
    args
}

fn main() -> Result<()> {
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(seed = args.seed, weeks = args.weeks, "starting CLI");

    let mut studio = Studio::new(
        "Pixel Forge",
        SimConfig {
            rng_seed: args.seed,
            save_dir: args.save_dir,
        },
    );

    // Build out the studio, then ship one mid-size title.
    let candidate = studio.generate_candidate();
    studio.hire(candidate)?;
    studio.research("Stereo Sound")?;
    studio.create_engine(
        "Mk II",
        &["Stereo Sound".to_string(), "Basic AI".to_string()],
    )?;

    studio.begin_draft();
    studio.set_draft_name("Dragon Saga");
    studio.set_draft_topic("Fantasy");
    studio.set_draft_genre("RPG");
    studio.set_draft_size("Medium");
    studio.set_draft_engine(Some("Mk II".to_string()));
    let allocation: BTreeMap<String, u32> = [
        ("AI", 3),
        ("Gameplay", 5),
        ("Graphics", 4),
        ("Sound", 3),
        ("Story", 8),
        ("World", 7),
    ]
    .into_iter()
    .map(|(d, v)| (d.to_string(), v))
    .collect();
    studio.confirm_sliders(allocation)?;
    let report = studio.finalize_draft()?;

    let notices = studio.advance_weeks(args.weeks)?;
    for notice in &notices {
        println!("Week {:>3} | {} | {}", notice.week, notice.title, notice.text);
    }

    let state = studio.state();
    let release = &state.history[report.project_index];
    println!("{}", studio.status());
    println!(
        "KPI | weeks: {} | rating: {:.1} | sales: {} | revenue: {} | profit: {} | bugs: {} | active: {}",
        state.week,
        report.review.average(),
        release.sales,
        release.revenue,
        release.profit(),
        release.bugs,
        release.is_active
    );

    if let Some(slot) = args.save_slot {
        studio.save(slot)?;
        for (slot, status) in studio.slot_summaries() {
            match status {
                persistence::SlotStatus::Occupied {
                    company_name,
                    week,
                    cash,
                } => println!("Slot {slot} | {company_name} | week {week} | cash {cash}"),
                persistence::SlotStatus::Corrupt => println!("Slot {slot} | unreadable"),
                persistence::SlotStatus::Empty => println!("Slot {slot} | empty"),
            }
        }
    }

    Ok(())
}
