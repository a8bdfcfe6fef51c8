//! Game and campaign configuration.
//!
//! Every config type validates itself before a simulation starts.
//! A validation failure aborts the whole run; there are no partial
//! simulations on invalid input.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default stake per round.
pub const DEFAULT_BET: f64 = 200.0;

/// Default length of the initial betting phase.
pub const DEFAULT_ROUNDS: u64 = 10;

/// Default slot-machine win chance. Just under 50%, so the house
/// keeps an edge.
pub const DEFAULT_SLOTS_WIN_CHANCE: f64 = 48.5;

/// European or American wheel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelVariant {
    European,
    American,
}

impl WheelVariant {
    /// Number of pockets on the wheel. The American wheel's 38th
    /// pocket stands in for 00; it loses exactly like pocket 0, so
    /// the model never needs to tell them apart.
    pub fn slot_count(&self) -> u64 {
        match self {
            Self::European => 37,
            Self::American => 38,
        }
    }

    /// True probability of the fixed 1-18 bet, as a percentage.
    pub fn win_chance_percent(&self) -> f64 {
        18.0 / self.slot_count() as f64 * 100.0
    }

    /// Human-readable wheel description for the runner.
    pub fn label(&self) -> &'static str {
        match self {
            Self::European => "European (37 pockets, 0-36)",
            Self::American => "American (38 pockets, 0, 00, 1-36)",
        }
    }
}

impl FromStr for WheelVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "european" => Ok(Self::European),
            "american" => Ok(Self::American),
            _ => Err(ConfigError::UnknownWheelVariant { got: s.to_string() }),
        }
    }
}

impl fmt::Display for WheelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::European => write!(f, "european"),
            Self::American => write!(f, "american"),
        }
    }
}

/// Parameters for one player's slot-machine session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsConfig {
    pub bet:                f64,
    pub rounds:             u64,
    pub win_chance_percent: f64,
    pub extra_bets:         bool,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            bet:                DEFAULT_BET,
            rounds:             DEFAULT_ROUNDS,
            win_chance_percent: DEFAULT_SLOTS_WIN_CHANCE,
            extra_bets:         false,
        }
    }
}

impl SlotsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bet(self.bet)?;
        // NaN fails the range check too; it must never reach a comparison
        // inside the round loop.
        if !(0.0..=100.0).contains(&self.win_chance_percent) {
            return Err(ConfigError::WinChanceOutOfRange {
                got: self.win_chance_percent,
            });
        }
        Ok(())
    }
}

/// Parameters for one player's roulette session. The bet is always
/// the low range 1-18; only the wheel geometry is configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouletteConfig {
    pub bet:        f64,
    pub rounds:     u64,
    pub wheel:      WheelVariant,
    pub extra_bets: bool,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            bet:        DEFAULT_BET,
            rounds:     DEFAULT_ROUNDS,
            wheel:      WheelVariant::European,
            extra_bets: false,
        }
    }
}

impl RouletteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bet(self.bet)
    }
}

/// Which game a campaign plays, with its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum GameChoice {
    Slots(SlotsConfig),
    Roulette(RouletteConfig),
}

impl GameChoice {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Slots(cfg) => cfg.validate(),
            Self::Roulette(cfg) => cfg.validate(),
        }
    }

    /// Stake per round, shared by every player in the campaign.
    pub fn bet(&self) -> f64 {
        match self {
            Self::Slots(cfg) => cfg.bet,
            Self::Roulette(cfg) => cfg.bet,
        }
    }
}

/// A full multi-player campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub players: u64,
    pub game:    GameChoice,
}

impl CampaignConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players == 0 {
            return Err(ConfigError::NoPlayers);
        }
        self.game.validate()
    }
}

fn validate_bet(bet: f64) -> Result<(), ConfigError> {
    if !bet.is_finite() || bet <= 0.0 {
        return Err(ConfigError::NonPositiveBet { got: bet });
    }
    Ok(())
}
