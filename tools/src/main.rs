//! casino-runner: headless casino campaign runner.
//!
//! Usage:
//!   casino-runner --players 5 --game roulette --wheel american --extra-bets
//!   casino-runner --game slots --seed 7 --json
//!   casino-runner --interactive

use anyhow::{bail, Context, Result};
use casino_core::{
    campaign::{run_campaign, CampaignOutcome, PlayerRun},
    config::{
        CampaignConfig, GameChoice, RouletteConfig, SlotsConfig, WheelVariant, DEFAULT_BET,
        DEFAULT_ROUNDS, DEFAULT_SLOTS_WIN_CHANCE,
    },
    event::SimEvent,
    rng::TableRng,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let json_mode = args.iter().any(|a| a == "--json");
    let interactive = args.iter().any(|a| a == "--interactive");

    let config = if interactive {
        prompt_config()?
    } else {
        config_from_args(&args)?
    };
    log::debug!("seed={seed} config={config:?}");

    let mut rng = TableRng::new(seed);
    let outcome = run_campaign(&config, &mut rng).context("campaign rejected")?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let run_id = format!("run-{}", uuid::Uuid::new_v4());
    print_campaign(&run_id, seed, &config, &outcome);
    Ok(())
}

fn config_from_args(args: &[String]) -> Result<CampaignConfig> {
    let players = parse_arg(args, "--players", 3u64);
    let bet = parse_arg(args, "--bet", DEFAULT_BET);
    let rounds = parse_arg(args, "--rounds", DEFAULT_ROUNDS);
    let extra_bets = args.iter().any(|a| a == "--extra-bets");

    let game = match str_arg(args, "--game", "slots").as_str() {
        "slots" => GameChoice::Slots(SlotsConfig {
            bet,
            rounds,
            win_chance_percent: parse_arg(args, "--win-chance", DEFAULT_SLOTS_WIN_CHANCE),
            extra_bets,
        }),
        "roulette" => GameChoice::Roulette(RouletteConfig {
            bet,
            rounds,
            wheel: WheelVariant::from_str(&str_arg(args, "--wheel", "european"))?,
            extra_bets,
        }),
        other => bail!("unknown game '{other}'; expected 'slots' or 'roulette'"),
    };

    Ok(CampaignConfig { players, game })
}

/// The original console dialog: player count, game, wheel, extra bets.
fn prompt_config() -> Result<CampaignConfig> {
    println!("==== CASINO SIMULATOR ====");
    let players: u64 = prompt_parse("Number of players: ")?;

    println!();
    println!("Pick a game:");
    println!("  1. Slots");
    println!("  2. Roulette");
    let choice: u32 = prompt_parse("Option: ")?;

    let wheel = if choice == 2 {
        println!();
        println!("Pick a wheel:");
        println!("  1. {} - house edge 2.70%", WheelVariant::European.label());
        println!("  2. {} - house edge 5.26%", WheelVariant::American.label());
        let wheel_choice: u32 = prompt_parse("Option: ")?;
        match wheel_choice {
            1 => WheelVariant::European,
            2 => WheelVariant::American,
            other => bail!("unknown wheel option '{other}'"),
        }
    } else {
        WheelVariant::European
    };

    println!();
    let answer = read_line("Enable extra bets? (y/n): ")?;
    let extra_bets = answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes");

    let game = match choice {
        1 => GameChoice::Slots(SlotsConfig {
            extra_bets,
            ..SlotsConfig::default()
        }),
        2 => GameChoice::Roulette(RouletteConfig {
            wheel,
            extra_bets,
            ..RouletteConfig::default()
        }),
        other => bail!("unknown game option '{other}'"),
    };

    Ok(CampaignConfig { players, game })
}

fn print_campaign(run_id: &str, seed: u64, config: &CampaignConfig, outcome: &CampaignOutcome) {
    println!("Casino Table Simulator");
    println!("  run_id: {run_id}");
    println!("  seed:   {seed}");
    println!("  date:   {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    match &config.game {
        GameChoice::Slots(cfg) => {
            println!("Slots, configured win chance: {:.1}%", cfg.win_chance_percent);
        }
        GameChoice::Roulette(cfg) => {
            // Shown before the results so the player sees the true odds.
            println!("{} selected", cfg.wheel.label());
            println!("Real win chance: {:.2}%", cfg.wheel.win_chance_percent());
        }
    }

    for run in &outcome.runs {
        println!();
        println!("============================================");
        println!("      Simulation for player {}", run.player);
        println!("============================================");
        print_session(run, config.game.bet());
    }

    let r = &outcome.report;
    println!();
    println!("=========== CONSOLIDATED RESULTS ===========");
    println!("Total rounds:          {}", r.total_rounds);
    println!("Total player wins:     {}", r.total_player_wins);
    println!("Total house wins:      {}", r.total_house_wins);
    println!("Consolidated balance:  {:.2}", r.total_balance);
    match r.house_edge_observed {
        Some(edge) => println!("Observed house edge:   {edge:.2}%"),
        None => println!("Observed house edge:   n/a (no rounds played)"),
    }
    match r.average_loss_per_player {
        Some(loss) => println!("Average loss per player: {loss:.2}"),
        None if r.total_rounds > 0 => {
            println!("The players collectively turned a profit (rare!)")
        }
        None => {}
    }
    println!("============================================");
}

fn print_session(run: &PlayerRun, bet: f64) {
    for event in &run.events {
        match event {
            SimEvent::ExtraPhaseEntered { balance } => {
                println!("Positive balance ({balance:.2}), starting extra bets...")
            }
            SimEvent::PlayerQuit { .. } => println!("Player chose to walk away."),
            SimEvent::BalanceExhausted { .. } => println!("Player busted out."),
            SimEvent::ExtraCapReached { cap } => {
                println!("Extra phase stopped at the {cap}-round cap.")
            }
            _ => {}
        }
    }

    let r = &run.result;
    let player_lost = r.house_wins as f64 * bet;
    println!("Rounds played:    {}", r.rounds_played);
    println!("--- Player ---");
    println!("Player wins:      {}", r.player_wins);
    println!("Money lost:       {player_lost:.2}");
    println!("--- House ---");
    println!("House wins:       {}", r.house_wins);
    println!("House gross take: {player_lost:.2}");
    println!("--------------------------------------------");
    println!("Final balance:    {:.2}", r.final_balance);
    println!("House net profit: {:.2}", -r.final_balance);
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg(args: &[String], flag: &str, default: &str) -> String {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
        .unwrap_or_else(|| default.to_string())
}

fn read_line(msg: &str) -> Result<String> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().lock().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn prompt_parse<T: FromStr>(msg: &str) -> Result<T> {
    let raw = read_line(msg)?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid input '{raw}'"))
}
