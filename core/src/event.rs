//! The session event log: the core's only channel to the outside.
//!
//! RULE: The simulation core never prints. Everything a caller might
//! want to show (round outcomes, phase transitions, the player walking
//! away) is emitted as an event and returned alongside the result.

use crate::types::Round;
use serde::{Deserialize, Serialize};

/// Which betting phase a round belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetPhase {
    Initial,
    Extra,
}

/// The two ways a round can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    PlayerWin,
    HouseWin,
}

/// Every event emitted during a betting session, in order.
/// Variants are never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SimEvent {
    SessionStarted {
        game: String,
        bet: f64,
        win_chance_percent: f64,
        planned_rounds: Round,
    },
    RoundResolved {
        round: Round,
        phase: BetPhase,
        outcome: RoundOutcome,
        balance_after: f64,
    },
    /// The initial phase ended with a positive balance and extra bets
    /// are enabled; the continuation phase begins.
    ExtraPhaseEntered {
        balance: f64,
    },
    /// The stop draw came up: the player walks away mid-extra-phase.
    PlayerQuit {
        after_rounds: Round,
    },
    /// The balance fell to zero or below, ending the extra phase.
    BalanceExhausted {
        after_rounds: Round,
    },
    /// The extra-phase safety cap was hit.
    ExtraCapReached {
        cap: Round,
    },
    SessionCompleted {
        rounds_played: Round,
        final_balance: f64,
    },
}
