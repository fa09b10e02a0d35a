//! Match Simulator CLI Library
//!
//! Config loading, roster and tactics parsing, and the live ticker used by the
//! `matchsim` binary.

use anyhow::{bail, Context, Result};
use matchsim_core::api::{on_tick, start_simulation_with_sheets};
use matchsim_core::models::{EventKind, MatchEvent, MatchState, TeamSheet};
use matchsim_core::{simulate_match_json, SimulationConfig, TacticsSheet};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Options for a single command-line match.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub home: TeamSheet,
    pub away: TeamSheet,
    pub seed: u64,
    pub config: SimulationConfig,
    pub live: bool,
}

/// Named preset, or a JSON config file when one is given.
pub fn load_config(preset: &str, path: Option<&Path>) -> Result<SimulationConfig> {
    let Some(path) = path else {
        return match SimulationConfig::preset(preset) {
            Some(config) => Ok(config),
            None => bail!("Unknown preset '{}' (expected observed, lively, quiet or test)", preset),
        };
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SimulationConfig::from_json(&json)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// An explicit tick interval implies a live feed. Returns whether to pace.
pub fn apply_interval(config: &mut SimulationConfig, live: bool, interval_ms: Option<u64>) -> bool {
    match interval_ms {
        Some(interval_ms) => {
            config.tick_interval_ms = interval_ms;
            true
        }
        None => live,
    }
}

/// Parse a tactics option by its JSON name, e.g. "4-3-3" or "gegenpress".
pub fn parse_choice<T: DeserializeOwned>(what: &str, value: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("Unknown {}: '{}'", what, value))
}

pub fn parse_tactics(
    formation: &str,
    style: &str,
    mentality: &str,
    press: &str,
) -> Result<TacticsSheet> {
    Ok(TacticsSheet {
        formation: parse_choice("formation", formation)?,
        playing_style: parse_choice("playing style", style)?,
        mentality: parse_choice("mentality", mentality)?,
        press_intensity: parse_choice("press intensity", press)?,
    })
}

/// "Haaland, De Bruyne" -> ["Haaland", "De Bruyne"]
pub fn parse_roster(list: &str) -> Vec<String> {
    list.split(',').map(str::trim).filter(|name| !name.is_empty()).map(String::from).collect()
}

pub fn event_icon(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Goal => "⚽",
        EventKind::YellowCard => "🟨",
        EventKind::RedCard => "🟥",
        EventKind::Substitution => "🔄",
        EventKind::Injury => "🏥",
        EventKind::HalfTime => "⏱️",
        EventKind::FullTime => "🏁",
    }
}

/// One ticker line, e.g. `12' ⚽ [City] Goal! Haaland scores!`
pub fn format_event(event: &MatchEvent, state: &MatchState) -> String {
    if event.kind.is_whistle() {
        return format!("{}' {} {}", event.minute, event_icon(event.kind), event.description);
    }
    format!(
        "{}' {} [{}] {}",
        event.minute,
        event_icon(event.kind),
        state.team(event.side).name,
        event.description
    )
}

/// Play a match tick by tick, writing each new event to `out` as it happens.
pub fn run_match<W: Write>(options: RunOptions, out: &mut W) -> Result<MatchState> {
    let RunOptions { home, away, seed, config, live } = options;

    let mut handle = start_simulation_with_sheets(home, away, seed, config, live)?;
    log::info!("simulation {} started with seed {}", handle.id(), seed);

    let state = handle.state();
    writeln!(out, "{} vs {}", state.home.name, state.away.name)?;
    for team in [&state.home, &state.away] {
        writeln!(out, "{}: {}", team.name, team.tactics.summary())?;
    }
    while let Some(update) = on_tick(&mut handle)? {
        for event in &update.new_events {
            writeln!(out, "{}", format_event(event, handle.state()))?;
        }
        out.flush()?;
    }

    let state = handle.into_state();
    writeln!(out, "Final score: {}", state.scoreline())?;
    Ok(state)
}

/// Run a JSON match request file; write the response to `output` when given.
pub fn run_json_file(input: &Path, output: Option<&Path>) -> Result<String> {
    let request = fs::read_to_string(input)
        .with_context(|| format!("Failed to read request file: {}", input.display()))?;
    let response = simulate_match_json(&request)
        .with_context(|| format!("Simulation failed for {}", input.display()))?;

    if let Some(path) = output {
        fs::write(path, &response)
            .with_context(|| format!("Failed to write response file: {}", path.display()))?;
        log::info!("response written to {}", path.display());
    }
    Ok(response)
}
