//! Match Simulator CLI
//!
//! Live ticker or JSON request runner for the match simulation engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use matchsim_cli::{
    apply_interval, load_config, parse_roster, parse_tactics, run_json_file, run_match, RunOptions,
};
use matchsim_core::TeamSheet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "matchsim")]
#[command(about = "Simulate a football match minute by minute", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match and print events as they happen
    Run {
        /// Random seed (drawn at random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Home roster, comma separated
        #[arg(long, default_value = "Erling Haaland,Kevin De Bruyne,Phil Foden,James Rodriguez")]
        home: String,

        /// Away roster, comma separated
        #[arg(long, default_value = "Harry Kane,Son Heung-min,Dejan Kulusevski,Richarlison")]
        away: String,

        #[arg(long, default_value = "Home")]
        home_name: String,

        #[arg(long, default_value = "Away")]
        away_name: String,

        /// Home formation: 4-4-2, 4-3-3, 3-5-2, 4-2-3-1
        #[arg(long, default_value = "4-4-2")]
        formation: String,

        /// Home playing style: balanced, attacking, defensive, possession, counter
        #[arg(long, default_value = "defensive")]
        style: String,

        /// Home mentality: defensive, cautious, balanced, positive, attacking
        #[arg(long, default_value = "balanced")]
        mentality: String,

        /// Home press intensity: low, medium, high, gegenpress
        #[arg(long, default_value = "medium")]
        press: String,

        /// Config preset: observed, lively, quiet, test
        #[arg(long, default_value = "observed")]
        preset: String,

        /// JSON config file (replaces the preset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pause between ticks like a live feed
        #[arg(long)]
        live: bool,

        /// Pause between ticks in milliseconds (implies --live)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Print the final state as JSON instead of the ticker summary
        #[arg(long, conflicts_with_all = ["live", "interval_ms"])]
        json: bool,
    },

    /// Run a JSON match request file
    Json {
        /// Input request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Output response JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seed,
            home,
            away,
            home_name,
            away_name,
            formation,
            style,
            mentality,
            press,
            preset,
            config,
            live,
            interval_ms,
            json,
        } => {
            let mut config = load_config(&preset, config.as_deref())?;
            let live = apply_interval(&mut config, live, interval_ms);
            let tactics = parse_tactics(&formation, &style, &mentality, &press)?;

            let options = RunOptions {
                home: TeamSheet::new(home_name, parse_roster(&home)).with_tactics(tactics),
                away: TeamSheet::new(away_name, parse_roster(&away)),
                seed: seed.unwrap_or_else(matchsim_core::random_seed),
                config,
                live,
            };

            if json {
                let state = run_match(options, &mut std::io::sink())?;
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                run_match(options, &mut std::io::stdout().lock())?;
            }
        }

        Commands::Json { r#in, out } => {
            let response = run_json_file(&r#in, out.as_deref())?;
            if out.is_none() {
                println!("{}", response);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_rejects_pacing_flags() {
        assert!(Cli::try_parse_from(["matchsim", "run", "--json", "--live"]).is_err());
        assert!(Cli::try_parse_from(["matchsim", "run", "--json", "--interval-ms", "50"]).is_err());
        assert!(Cli::try_parse_from(["matchsim", "run", "--json"]).is_ok());
        assert!(Cli::try_parse_from(["matchsim", "run", "--live", "--interval-ms", "50"]).is_ok());
    }

    #[test]
    fn test_tactics_flags_default_to_tactics_page() {
        let cli = Cli::try_parse_from(["matchsim", "run", "--formation", "4-3-3"]).unwrap();
        let Commands::Run { formation, style, mentality, press, .. } = cli.command else {
            panic!("expected run command");
        };
        let tactics = parse_tactics(&formation, &style, &mentality, &press).unwrap();
        assert_eq!(tactics.formation.code(), "4-3-3");
        assert_eq!(tactics.summary(), "4-3-3 / Defensive / Medium mentality / Medium Press");
    }
}
