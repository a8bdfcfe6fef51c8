//! Fixed-odds slot machine.

use crate::{
    config::SlotsConfig,
    error::SimResult,
    event::RoundOutcome,
    rng::RandomSource,
    session::{BettingSession, SessionOutcome, TableGame},
};

/// A slot machine paying even money at a configured win chance.
pub struct SlotMachine {
    win_chance_percent: f64,
}

impl SlotMachine {
    /// The chance must already be validated into [0, 100].
    pub fn new(win_chance_percent: f64) -> Self {
        Self { win_chance_percent }
    }
}

impl TableGame for SlotMachine {
    fn name(&self) -> &'static str {
        "slots"
    }

    fn win_chance_percent(&self) -> f64 {
        self.win_chance_percent
    }

    fn play_round(&self, rng: &mut dyn RandomSource) -> RoundOutcome {
        if rng.next_f64() * 100.0 < self.win_chance_percent {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::HouseWin
        }
    }
}

/// Simulate one player's slot-machine session.
pub fn simulate_slots(
    config: &SlotsConfig,
    rng: &mut dyn RandomSource,
) -> SimResult<SessionOutcome> {
    config.validate()?;
    let game = SlotMachine::new(config.win_chance_percent);
    Ok(BettingSession::new(&game, config.bet, config.rounds, config.extra_bets).run(rng))
}
