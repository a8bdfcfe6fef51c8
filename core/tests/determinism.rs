//! THE MOST IMPORTANT TEST IN THE PROJECT.
//!
//! Two campaigns, same seed, same configuration.
//! They must produce byte-identical event logs.

use casino_core::{
    campaign::run_campaign,
    config::{CampaignConfig, GameChoice, RouletteConfig, SlotsConfig, WheelVariant},
    rng::TableRng,
    slots::simulate_slots,
};

fn roulette_campaign(players: u64) -> CampaignConfig {
    CampaignConfig {
        players,
        game: GameChoice::Roulette(RouletteConfig {
            bet: 200.0,
            rounds: 10,
            wheel: WheelVariant::American,
            extra_bets: true,
        }),
    }
}

fn serialized_event_log(config: &CampaignConfig, seed: u64) -> Vec<String> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = TableRng::new(seed);
    let outcome = run_campaign(config, &mut rng).expect("valid config");
    outcome
        .runs
        .iter()
        .flat_map(|run| run.events.iter())
        .map(|e| serde_json::to_string(e).expect("serialize event"))
        .collect()
}

#[test]
fn same_seed_produces_identical_event_logs() {
    const SEED: u64 = 0xDEAD_BEEF_CAFE_1234;
    let config = roulette_campaign(25);

    let log_a = serialized_event_log(&config, SEED);
    let log_b = serialized_event_log(&config, SEED);

    assert_eq!(
        log_a.len(),
        log_b.len(),
        "Event log lengths differ: {} vs {}",
        log_a.len(),
        log_b.len()
    );
    for (i, (a, b)) in log_a.iter().zip(log_b.iter()).enumerate() {
        assert_eq!(a, b, "Event log diverged at entry {i}:\n  A: {a}\n  B: {b}");
    }
}

#[test]
fn different_seeds_produce_different_logs() {
    let config = roulette_campaign(25);

    let log_a = serialized_event_log(&config, 42);
    let log_b = serialized_event_log(&config, 99);

    let any_different =
        log_a.len() != log_b.len() || log_a.iter().zip(log_b.iter()).any(|(a, b)| a != b);
    assert!(
        any_different,
        "Different seeds produced identical logs - seed is not being used"
    );
}

/// The exact reproducibility case from the contract: slots, bet 100,
/// 5 rounds, 50% chance, no extras.
#[test]
fn fixed_seed_slots_run_is_reproducible() {
    let config = SlotsConfig {
        bet: 100.0,
        rounds: 5,
        win_chance_percent: 50.0,
        extra_bets: false,
    };

    let a = simulate_slots(&config, &mut TableRng::new(7)).expect("run a");
    let b = simulate_slots(&config, &mut TableRng::new(7)).expect("run b");

    assert_eq!(a.result, b.result, "same seed must give the same result");
    assert_eq!(a.result.rounds_played, 5);
}
