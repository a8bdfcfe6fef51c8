//! Consolidation of per-player results into a campaign report.

use crate::session::SimulationResult;
use crate::types::Round;
use serde::{Deserialize, Serialize};

/// Campaign-wide totals plus derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    pub players:           u64,
    pub total_balance:     f64,
    pub total_player_wins: Round,
    pub total_house_wins:  Round,
    pub total_rounds:      Round,
    /// House win share of all rounds, percent. None when no rounds
    /// were played (a zero-round campaign is degenerate, not an error).
    pub house_edge_observed: Option<f64>,
    /// Mean loss per player. Some only when the players collectively
    /// finished at or below zero.
    pub average_loss_per_player: Option<f64>,
}

/// Sum per-player results and derive the campaign metrics.
pub fn consolidate(results: &[SimulationResult]) -> ConsolidatedReport {
    let players = results.len() as u64;
    let total_balance: f64 = results.iter().map(|r| r.final_balance).sum();
    let total_player_wins: Round = results.iter().map(|r| r.player_wins).sum();
    let total_house_wins: Round = results.iter().map(|r| r.house_wins).sum();
    let total_rounds: Round = results.iter().map(|r| r.rounds_played).sum();

    let house_edge_observed = if total_rounds > 0 {
        Some(total_house_wins as f64 / total_rounds as f64 * 100.0)
    } else {
        None
    };

    let average_loss_per_player = if players > 0 && total_balance <= 0.0 {
        Some(total_balance.abs() / players as f64)
    } else {
        None
    };

    ConsolidatedReport {
        players,
        total_balance,
        total_player_wins,
        total_house_wins,
        total_rounds,
        house_edge_observed,
        average_loss_per_player,
    }
}
