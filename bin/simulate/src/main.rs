//! Batch Evaluation Binary
//!
//! Pits uploaded strategies against each other over many hands across
//! concurrent rooms and reports per-seat profit and loss.

use bmb_core::Chips;
use bmb_gameplay::Rules;
use bmb_gameroom::TableConfig;
use bmb_hosting::Casino;
use bmb_hosting::Seating;
use bmb_players::FallbackPolicy;
use bmb_players::Loader;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Evaluate Indian Poker strategies against each other")]
struct Args {
    /// Strategy executables, one per seat, in seat order
    #[arg(required = true, num_args = 2..)]
    strategies: Vec<String>,
    /// Directory strategy names are resolved under
    #[arg(long, default_value = "strategies")]
    dir: String,
    /// Concurrent rooms to run
    #[arg(long, default_value_t = 1)]
    rooms: usize,
    /// Hands per room
    #[arg(long, default_value_t = 1000)]
    hands: u64,
    /// Ante posted by every seat each hand
    #[arg(long, default_value_t = bmb_core::ANTE)]
    ante: Chips,
    /// Starting stack per seat
    #[arg(long, default_value_t = bmb_core::STACK)]
    stack: Chips,
    /// Betting rounds per hand
    #[arg(long, default_value_t = bmb_core::BETTING_ROUNDS)]
    rounds: usize,
    /// Deal deterministically from this seed (room r uses seed + r)
    #[arg(long)]
    seed: Option<u64>,
    /// Seat a check-fold rock when a strategy fails to start
    #[arg(long, default_value_t = false)]
    lenient: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bmb_core::log();
    let args = Args::parse();
    let fallback = match args.lenient {
        true => FallbackPolicy::Rock,
        false => FallbackPolicy::Reject,
    };
    let casino = Casino::new(Loader::new(args.dir.clone(), fallback));
    let rules = Rules {
        ante: args.ante,
        rounds: args.rounds,
        ..Rules::default()
    };
    let mut ids = Vec::new();
    for r in 0..args.rooms {
        let config = TableConfig::default()
            .with_rules(rules)
            .with_stack(args.stack)
            .with_hands(args.hands);
        let config = match args.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(r as u64)),
            None => config,
        };
        let seats = args
            .strategies
            .iter()
            .cloned()
            .map(Seating::Strategy)
            .collect();
        let id = casino.open(config, seats).await?;
        casino.begin(id).await?;
        ids.push(id);
    }
    let mut pnl = vec![0 as Chips; args.strategies.len()];
    let mut hands = 0;
    for id in ids {
        let report = casino.wait(id).await?;
        log::info!("[simulate] room {}: {}", id, report);
        hands += report.hands;
        for (seat, stack) in report.stacks.iter().enumerate() {
            pnl[seat] += stack - args.stack;
        }
    }
    println!("{} hands across {} rooms", hands, args.rooms);
    for (seat, (name, chips)) in args.strategies.iter().zip(pnl.iter()).enumerate() {
        println!("P{} {:<24} {:+}", seat, name, chips);
    }
    Ok(())
}
