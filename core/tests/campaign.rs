//! Campaign driver and consolidation tests.

use casino_core::{
    campaign::run_campaign,
    config::{CampaignConfig, GameChoice, RouletteConfig, SlotsConfig, WheelVariant},
    error::{ConfigError, SimError},
    report::consolidate,
    rng::TableRng,
    session::SimulationResult,
};

fn slots_campaign(players: u64, rounds: u64) -> CampaignConfig {
    CampaignConfig {
        players,
        game: GameChoice::Slots(SlotsConfig {
            bet: 200.0,
            rounds,
            win_chance_percent: 48.5,
            extra_bets: true,
        }),
    }
}

#[test]
fn consolidation_sums_per_player_results() {
    let config = slots_campaign(4, 25);
    let outcome = run_campaign(&config, &mut TableRng::new(11)).expect("valid config");

    assert_eq!(outcome.runs.len(), 4);
    let r = &outcome.report;

    let balance: f64 = outcome.runs.iter().map(|p| p.result.final_balance).sum();
    let player_wins: u64 = outcome.runs.iter().map(|p| p.result.player_wins).sum();
    let house_wins: u64 = outcome.runs.iter().map(|p| p.result.house_wins).sum();
    let rounds: u64 = outcome.runs.iter().map(|p| p.result.rounds_played).sum();

    assert_eq!(r.players, 4);
    assert_eq!(r.total_balance, balance);
    assert_eq!(r.total_player_wins, player_wins);
    assert_eq!(r.total_house_wins, house_wins);
    assert_eq!(r.total_rounds, rounds);

    let expected_edge = house_wins as f64 / rounds as f64 * 100.0;
    assert_eq!(r.house_edge_observed, Some(expected_edge));
}

#[test]
fn every_player_gets_identical_parameters() {
    let config = slots_campaign(6, 15);
    let outcome = run_campaign(&config, &mut TableRng::new(8)).expect("valid config");

    for run in &outcome.runs {
        assert!(
            run.result.rounds_played >= 15,
            "player {}: fewer rounds than the initial phase",
            run.player
        );
        assert_eq!(
            run.result.player_wins + run.result.house_wins,
            run.result.rounds_played
        );
    }
    // 1-based, display order
    let indices: Vec<u64> = outcome.runs.iter().map(|p| p.player).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn zero_players_is_rejected_before_simulating() {
    let config = slots_campaign(0, 10);
    let err = run_campaign(&config, &mut TableRng::new(1)).unwrap_err();
    assert_eq!(err, SimError::InvalidConfiguration(ConfigError::NoPlayers));
}

#[test]
fn invalid_game_config_is_rejected_before_simulating() {
    let config = CampaignConfig {
        players: 3,
        game: GameChoice::Roulette(RouletteConfig {
            bet: -5.0,
            rounds: 10,
            wheel: WheelVariant::European,
            extra_bets: false,
        }),
    };
    let err = run_campaign(&config, &mut TableRng::new(1)).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidConfiguration(ConfigError::NonPositiveBet { .. })
    ));
}

/// Zero rounds and no extras: totals are all zero and the derived
/// edge is reported as degenerate rather than dividing by zero.
#[test]
fn zero_round_campaign_reports_degenerate_metrics() {
    let mut config = slots_campaign(3, 0);
    if let GameChoice::Slots(cfg) = &mut config.game {
        cfg.extra_bets = false;
    }
    let outcome = run_campaign(&config, &mut TableRng::new(1)).expect("valid config");
    let r = &outcome.report;

    assert_eq!(r.total_rounds, 0);
    assert_eq!(r.total_balance, 0.0);
    assert_eq!(r.house_edge_observed, None);
}

#[test]
fn average_loss_only_reported_when_players_lose() {
    let losing = consolidate(&[
        SimulationResult {
            final_balance: -400.0,
            player_wins: 3,
            house_wins: 5,
            rounds_played: 8,
        },
        SimulationResult {
            final_balance: -200.0,
            player_wins: 4,
            house_wins: 5,
            rounds_played: 9,
        },
    ]);
    assert_eq!(losing.average_loss_per_player, Some(300.0));

    let winning = consolidate(&[SimulationResult {
        final_balance: 600.0,
        player_wins: 7,
        house_wins: 4,
        rounds_played: 11,
    }]);
    assert_eq!(
        winning.average_loss_per_player, None,
        "a collective profit has no average loss"
    );
    assert_eq!(winning.house_edge_observed, Some(4.0 / 11.0 * 100.0));
}
