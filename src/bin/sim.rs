use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{init_logging, simulate, SimConfig};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [seed] [events]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = match args.get(1) {
        Some(s) => s.parse()?,
        None => rand::rng().random(),
    };
    let mut config = SimConfig::default();
    if let Some(events) = args.get(2) {
        config.events = events.parse()?;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let report = simulate(&mut rng, &config);
    log::info!(
        "seed {}: {} moves applied, {} ignored, {} jumps",
        seed,
        report.applied_moves,
        report.ignored_moves,
        report.jumps
    );

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
