//! `autosched` CLI — run schedule ticks and retention sweeps from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate every configured device "now" and print actuator commands
//! autosched tick --config site.json --store log.json
//!
//! # Evaluate at a fixed instant (local wall clock)
//! autosched tick --config site.json --now 2025-12-25T12:00:00
//!
//! # Sweep the log store, keeping the default 4-day window
//! autosched sweep --store log.json
//!
//! # Sweep with an explicit window and reference instant
//! autosched sweep --store log.json --days-to-keep 7 --now 2025-11-13T08:00:00
//! ```
//!
//! The config file is JSON: a `registry` map of group key → device, a
//! `devices` list pairing group keys with their schedule entries, plus
//! `holidays` and `excludedDays` date lists. The store file is the flat
//! key → record mapping the log crate persists.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::warn;

use autosched_adapters::{format_telemetry, run_batch, DeviceTick, InMemoryRegistry};
use autosched_engine::{Device, EngineConfig, ScheduleEntry};
use autosched_log::{sweep, LogStore, MemoryStore, DEFAULT_DAYS_TO_KEEP};

#[derive(Parser)]
#[command(name = "autosched", version, about = "Holiday-aware schedule decision engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate all configured devices for one tick
    Tick {
        /// Site configuration file (registry, devices, holidays, excluded days)
        #[arg(short, long)]
        config: PathBuf,
        /// Log store file; created if absent, updated with this tick's records
        #[arg(short, long)]
        store: Option<PathBuf>,
        /// Evaluation instant (RFC 3339 or local `YYYY-MM-DDTHH:MM:SS`);
        /// defaults to the current wall clock
        #[arg(long)]
        now: Option<String>,
        /// Print telemetry frames for the stored records instead of
        /// actuator commands
        #[arg(long)]
        telemetry: bool,
    },
    /// Delete log records older than the retention window
    Sweep {
        /// Log store file to sweep in place
        #[arg(short, long)]
        store: PathBuf,
        /// Retention window in days
        #[arg(long, default_value_t = DEFAULT_DAYS_TO_KEEP)]
        days_to_keep: u32,
        /// Sweep reference instant; defaults to the current wall clock
        #[arg(long)]
        now: Option<String>,
    },
}

/// One device group: the registry key plus its authored schedules.
#[derive(Debug, Deserialize)]
struct DeviceGroup {
    key: String,
    #[serde(default)]
    schedules: Vec<ScheduleEntry>,
}

/// Site configuration file shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SiteConfig {
    #[serde(default)]
    registry: HashMap<String, Device>,
    #[serde(default)]
    devices: Vec<DeviceGroup>,
    #[serde(default)]
    holidays: Vec<String>,
    #[serde(default)]
    excluded_days: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tick {
            config,
            store,
            now,
            telemetry,
        } => run_tick_command(&config, store.as_deref(), now.as_deref(), telemetry),
        Commands::Sweep {
            store,
            days_to_keep,
            now,
        } => run_sweep_command(&store, days_to_keep, now.as_deref()),
    }
}

/// Parse the `--now` override, defaulting to the current local wall clock.
fn parse_now(raw: Option<&str>) -> Result<DateTime<Local>> {
    let Some(raw) = raw else {
        return Ok(Local::now());
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Local));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        if let Some(dt) = Local.from_local_datetime(&naive).earliest() {
            return Ok(dt);
        }
    }
    bail!("unrecognized --now value: {raw:?} (expected RFC 3339 or YYYY-MM-DDTHH:MM:SS)");
}

fn load_store(path: &Path) -> Result<MemoryStore> {
    if !path.exists() {
        return Ok(MemoryStore::new());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read store file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("store file {} is not a valid record map", path.display()))
}

fn persist_store(path: &Path, store: &MemoryStore) -> Result<()> {
    let raw = serde_json::to_string_pretty(store).context("failed to serialize store")?;
    fs::write(path, raw).with_context(|| format!("failed to write store file {}", path.display()))
}

fn run_tick_command(
    config_path: &Path,
    store_path: Option<&Path>,
    now: Option<&str>,
    telemetry: bool,
) -> Result<()> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read config file {}", config_path.display()))?;
    let config: SiteConfig = serde_json::from_str(&raw)
        .with_context(|| format!("config file {} is not valid", config_path.display()))?;

    // Surface authoring mistakes up front; evaluation itself stays lenient.
    for group in &config.devices {
        for entry in &group.schedules {
            if let Err(err) = entry.validate() {
                warn!(device = %group.key, %err, "schedule entry failed validation");
            }
        }
    }

    let registry: InMemoryRegistry = config.registry.clone().into_iter().collect();
    let mut store = match store_path {
        Some(path) => load_store(path)?,
        None => MemoryStore::new(),
    };

    let now = parse_now(now)?;
    let engine_config = EngineConfig::default();
    let ticks: Vec<DeviceTick<'_>> = config
        .devices
        .iter()
        .map(|group| DeviceTick {
            device_key: &group.key,
            schedules: &group.schedules,
        })
        .collect();

    let results = run_batch(
        &registry,
        &mut store,
        &ticks,
        &config.holidays,
        &config.excluded_days,
        now,
        &engine_config,
    );

    if telemetry {
        let frames: Vec<serde_json::Value> = store
            .keys()
            .into_iter()
            .flatten()
            .filter_map(|key| store.get(&key).ok().flatten())
            .filter_map(|record| format_telemetry(&record, Some(now.with_timezone(&Utc))))
            .collect();
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        let commands: Vec<serde_json::Value> = results
            .iter()
            .map(|(key, command)| {
                serde_json::json!({ "device": key, "command": command })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&commands)?);
    }

    if let Some(path) = store_path {
        persist_store(path, &store)?;
    }
    Ok(())
}

fn run_sweep_command(store_path: &Path, days_to_keep: u32, now: Option<&str>) -> Result<()> {
    let mut store = load_store(store_path)?;
    let now = parse_now(now)?;
    let report = sweep(&mut store, days_to_keep, now).context("retention sweep failed")?;
    persist_store(store_path, &store)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
