//! The multi-player campaign driver.
//!
//! Every player is an independent trial with identical parameters.
//! The only shared resource is the RNG stream, advanced monotonically
//! across players, so one seed reproduces the whole campaign.

use crate::{
    config::{CampaignConfig, GameChoice},
    error::SimResult,
    event::SimEvent,
    report::{consolidate, ConsolidatedReport},
    rng::RandomSource,
    roulette::simulate_roulette,
    session::{SessionOutcome, SimulationResult},
    slots::simulate_slots,
    types::PlayerIndex,
};
use serde::{Deserialize, Serialize};

/// One player's slice of a campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRun {
    pub player: PlayerIndex,
    pub result: SimulationResult,
    pub events: Vec<SimEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignOutcome {
    pub runs:   Vec<PlayerRun>,
    pub report: ConsolidatedReport,
}

/// Run the configured game once per player and consolidate.
///
/// The whole configuration is validated before the first draw; an
/// invalid configuration aborts the campaign with nothing simulated.
pub fn run_campaign(
    config: &CampaignConfig,
    rng: &mut dyn RandomSource,
) -> SimResult<CampaignOutcome> {
    config.validate()?;

    let mut runs = Vec::with_capacity(config.players as usize);
    for player in 1..=config.players {
        let SessionOutcome { result, events } = match &config.game {
            GameChoice::Slots(cfg) => simulate_slots(cfg, rng)?,
            GameChoice::Roulette(cfg) => simulate_roulette(cfg, rng)?,
        };
        log::debug!(
            "player {player}: {} rounds, balance {:.2}",
            result.rounds_played,
            result.final_balance
        );
        runs.push(PlayerRun {
            player,
            result,
            events,
        });
    }

    let results: Vec<SimulationResult> = runs.iter().map(|r| r.result.clone()).collect();
    let report = consolidate(&results);

    Ok(CampaignOutcome { runs, report })
}
