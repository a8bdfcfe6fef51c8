//! The shared betting loop: one session per player.
//!
//! Both games run the same two-phase loop; only round evaluation
//! differs, behind the [`TableGame`] trait.
//!
//! RULES:
//!   - The loop reads randomness only through the caller's RandomSource.
//!   - Accounting is exact: final_balance == (player_wins - house_wins) * bet.
//!   - The extra phase runs only while the balance is strictly positive,
//!     and the stop draw happens BEFORE the round it would cancel.

use crate::{
    event::{BetPhase, RoundOutcome, SimEvent},
    rng::RandomSource,
    types::Round,
};
use serde::{Deserialize, Serialize};

/// Probability that the player walks away before each extra round.
pub const STOP_PROBABILITY: f64 = 0.5;

/// Hard ceiling on the extra phase. Each further round survives a
/// coin-flip stop draw, so reaching this many is out of the question
/// for any real stream; the cap only keeps a hostile RandomSource
/// from hanging a run.
pub const EXTRA_ROUND_CAP: Round = 10_000;

/// The seam between the betting loop and a concrete game.
pub trait TableGame {
    /// Stable display name.
    fn name(&self) -> &'static str;

    /// Probability of winning a single round, as a percentage.
    fn win_chance_percent(&self) -> f64;

    /// Resolve one round.
    fn play_round(&self, rng: &mut dyn RandomSource) -> RoundOutcome;
}

/// Aggregated outcome of one player's session. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub final_balance: f64,
    pub player_wins:   Round,
    pub house_wins:    Round,
    pub rounds_played: Round,
}

/// A result plus the ordered event trace that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub result: SimulationResult,
    pub events: Vec<SimEvent>,
}

/// Runs the two-phase betting loop for any [`TableGame`].
pub struct BettingSession<'a> {
    game:       &'a dyn TableGame,
    bet:        f64,
    rounds:     Round,
    extra_bets: bool,
}

impl<'a> BettingSession<'a> {
    /// Callers must have validated the config already; the session
    /// itself cannot fail.
    pub fn new(game: &'a dyn TableGame, bet: f64, rounds: Round, extra_bets: bool) -> Self {
        Self {
            game,
            bet,
            rounds,
            extra_bets,
        }
    }

    /// Run the fixed initial phase, then the optional extra phase
    /// while the balance stays positive.
    pub fn run(&self, rng: &mut dyn RandomSource) -> SessionOutcome {
        let mut balance = 0.0_f64;
        let mut player_wins: Round = 0;
        let mut house_wins: Round = 0;
        let mut rounds_played: Round = 0;

        let mut events = vec![SimEvent::SessionStarted {
            game:               self.game.name().to_string(),
            bet:                self.bet,
            win_chance_percent: self.game.win_chance_percent(),
            planned_rounds:     self.rounds,
        }];

        for _ in 0..self.rounds {
            rounds_played += 1;
            let outcome =
                self.settle_round(rng, &mut balance, &mut player_wins, &mut house_wins);
            events.push(SimEvent::RoundResolved {
                round: rounds_played,
                phase: BetPhase::Initial,
                outcome,
                balance_after: balance,
            });
        }

        if self.extra_bets && balance > 0.0 {
            events.push(SimEvent::ExtraPhaseEntered { balance });
            let mut extra_rounds: Round = 0;

            while balance > 0.0 {
                if extra_rounds == EXTRA_ROUND_CAP {
                    log::warn!(
                        "{}: extra phase hit the {EXTRA_ROUND_CAP}-round cap",
                        self.game.name()
                    );
                    events.push(SimEvent::ExtraCapReached { cap: EXTRA_ROUND_CAP });
                    break;
                }

                // Stop decision first: the player quits without ever
                // seeing what the next round would have been.
                if rng.chance(STOP_PROBABILITY) {
                    events.push(SimEvent::PlayerQuit { after_rounds: rounds_played });
                    break;
                }

                rounds_played += 1;
                extra_rounds += 1;
                let outcome =
                    self.settle_round(rng, &mut balance, &mut player_wins, &mut house_wins);
                events.push(SimEvent::RoundResolved {
                    round: rounds_played,
                    phase: BetPhase::Extra,
                    outcome,
                    balance_after: balance,
                });
            }

            if balance <= 0.0 {
                events.push(SimEvent::BalanceExhausted { after_rounds: rounds_played });
            }
        }

        log::debug!(
            "{}: {rounds_played} rounds, {player_wins} player wins, {house_wins} house wins, balance {balance:.2}",
            self.game.name()
        );

        events.push(SimEvent::SessionCompleted {
            rounds_played,
            final_balance: balance,
        });

        SessionOutcome {
            result: SimulationResult {
                final_balance: balance,
                player_wins,
                house_wins,
                rounds_played,
            },
            events,
        }
    }

    fn settle_round(
        &self,
        rng: &mut dyn RandomSource,
        balance: &mut f64,
        player_wins: &mut Round,
        house_wins: &mut Round,
    ) -> RoundOutcome {
        let outcome = self.game.play_round(rng);
        match outcome {
            RoundOutcome::PlayerWin => {
                *balance += self.bet;
                *player_wins += 1;
            }
            RoundOutcome::HouseWin => {
                *balance -= self.bet;
                *house_wins += 1;
            }
        }
        outcome
    }
}
