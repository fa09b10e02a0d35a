use serde::{Deserialize, Serialize};

use crate::engine::{SimulationConfig, SimulationRunner};
use crate::error::{Result, SimulationError};
use crate::models::{MatchEvent, TeamSheet};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: TeamSheet,
    pub away_team: TeamSheet,
    /// Engine parameters; the observed defaults when absent.
    #[serde(default)]
    pub config: Option<SimulationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: String,
    pub away_team: String,
    pub score_home: u8,
    pub score_away: u8,
    pub events: Vec<MatchEvent>,
}

impl MatchRequest {
    pub fn new(seed: u64, home_team: TeamSheet, away_team: TeamSheet) -> Self {
        Self { schema_version: SCHEMA_VERSION, seed, home_team, away_team, config: None }
    }
}

/// Run a whole match without pacing and collect the result.
pub fn simulate_match(request: MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(SimulationError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = request.config.unwrap_or_default();
    let mut runner =
        SimulationRunner::seeded(config, request.home_team, request.away_team, request.seed)?;
    runner.start()?;
    runner.run_to_completion()?;

    let state = runner.into_state();
    let (score_home, score_away) = state.score();
    Ok(MatchResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        home_team: state.home.name.clone(),
        away_team: state.away.name.clone(),
        score_home,
        score_away,
        events: state.events().to_vec(),
    })
}

/// JSON in, JSON out. Same seed gives a byte-identical response.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_match(request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventKind;
    use serde_json::json;

    fn request(seed: u64) -> serde_json::Value {
        json!({
            "schema_version": 1,
            "seed": seed,
            "home_team": {
                "name": "Manchester Blue",
                "roster": ["Erling Haaland", "Kevin De Bruyne", "Phil Foden", "James Rodriguez"],
                "tactics": { "formation": "4-3-3", "mentality": "attacking" }
            },
            "away_team": {
                "name": "North London",
                "roster": ["Harry Kane", "Son Heung-min", "Dejan Kulusevski", "Richarlison"]
            }
        })
    }

    #[test]
    fn test_basic_simulation() {
        let result = simulate_match_json(&request(42).to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["seed"], 42);
        assert_eq!(parsed["home_team"], "Manchester Blue");
        assert!(parsed["score_home"].is_number());
        assert!(parsed["score_away"].is_number());

        let events = parsed["events"].as_array().unwrap();
        assert_eq!(events.last().unwrap()["kind"], "full_time");
        assert_eq!(events.last().unwrap()["minute"], 90);
    }

    #[test]
    fn test_determinism() {
        let request_str = request(999).to_string();
        let result1 = simulate_match_json(&request_str).unwrap();
        let result2 = simulate_match_json(&request_str).unwrap();
        assert_eq!(result1, result2, "Same seed should produce same result");
    }

    #[test]
    fn test_score_matches_events() {
        let mut req: MatchRequest = serde_json::from_value(request(8)).unwrap();
        req.config = Some(SimulationConfig::lively());
        let response = simulate_match(req).unwrap();

        let home_goals = response
            .events
            .iter()
            .filter(|e| e.kind == EventKind::Goal && e.side.is_home())
            .count();
        let away_goals =
            response.events.iter().filter(|e| e.kind == EventKind::Goal && !e.side.is_home()).count();
        assert_eq!(usize::from(response.score_home), home_goals);
        assert_eq!(usize::from(response.score_away), away_goals);
    }

    #[test]
    fn test_quiet_config_yields_whistles_only() {
        let mut req: MatchRequest = serde_json::from_value(request(3)).unwrap();
        let mut config = SimulationConfig::test();
        config.generator.event_probability = 0.0;
        req.config = Some(config);

        let response = simulate_match(req).unwrap();
        assert_eq!((response.score_home, response.score_away), (0, 0));
        let kinds: Vec<EventKind> = response.events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::HalfTime, EventKind::FullTime]);
    }

    #[test]
    fn test_rejects_unknown_schema() {
        let mut value = request(1);
        value["schema_version"] = json!(2);
        let err = simulate_match_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, SimulationError::UnsupportedSchema { found: 2, expected: 1 }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = simulate_match_json("{\"seed\": 1").unwrap_err();
        assert!(matches!(err, SimulationError::Json(_)));
    }

    #[test]
    fn test_request_builder_uses_current_schema() {
        let req = MatchRequest::new(
            5,
            TeamSheet::from_roster("A", ["a"]),
            TeamSheet::from_roster("B", ["b"]),
        );
        assert_eq!(req.schema_version, SCHEMA_VERSION);
        assert!(simulate_match(req).is_ok());
    }
}
