//! European and American roulette with a fixed low-range bet.

use crate::{
    config::{RouletteConfig, WheelVariant},
    error::SimResult,
    event::RoundOutcome,
    rng::RandomSource,
    session::{BettingSession, SessionOutcome, TableGame},
};
use std::ops::RangeInclusive;

/// Winning pockets for the fixed 1-18 ("low") bet.
const LOW_BET_RANGE: RangeInclusive<u64> = 1..=18;

/// A roulette wheel. The player always bets the low range; pocket 0,
/// and on the American wheel the extra pocket standing in for 00,
/// always lose.
pub struct RouletteWheel {
    variant: WheelVariant,
}

impl RouletteWheel {
    pub fn new(variant: WheelVariant) -> Self {
        Self { variant }
    }
}

impl TableGame for RouletteWheel {
    fn name(&self) -> &'static str {
        match self.variant {
            WheelVariant::European => "roulette (european)",
            WheelVariant::American => "roulette (american)",
        }
    }

    fn win_chance_percent(&self) -> f64 {
        self.variant.win_chance_percent()
    }

    fn play_round(&self, rng: &mut dyn RandomSource) -> RoundOutcome {
        let pocket = rng.next_u64_below(self.variant.slot_count());
        if LOW_BET_RANGE.contains(&pocket) {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::HouseWin
        }
    }
}

/// Simulate one player's roulette session.
///
/// An unsupported variant never reaches this function: variant strings
/// fail at `WheelVariant::from_str`, before any config exists.
pub fn simulate_roulette(
    config: &RouletteConfig,
    rng: &mut dyn RandomSource,
) -> SimResult<SessionOutcome> {
    config.validate()?;
    let game = RouletteWheel::new(config.wheel);
    Ok(BettingSession::new(&game, config.bet, config.rounds, config.extra_bets).run(rng))
}
