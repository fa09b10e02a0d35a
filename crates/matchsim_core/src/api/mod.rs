pub mod json_api;
pub mod simulation;

pub use json_api::{simulate_match, simulate_match_json, MatchRequest, MatchResponse};
pub use simulation::{
    get_log, on_tick, random_seed, start_simulation, start_simulation_with_sheets,
    SimulationOptions,
};
