//! Card Flip Simulation Binary
//!
//! Runs every shuffle strategy against the default ruleset and prints the
//! rarity breakdown of each, followed by a comparison table.
//!
//! ## Usage
//! ```bash
//! cargo run --bin card_flip --release
//! ```

use anyhow::{Context, Result};
use card_flip_simulation::config::SimConfig;
use card_flip_simulation::report::{render_notice, render_summary};
use card_flip_simulation::strategy::{run_strategy_simulation, ShuffleStrategy};

fn main() -> Result<()> {
    env_logger::init();
    let config = SimConfig::default();

    print!("{}", render_notice(&config));
    println!();
    println!("=======================================================");
    println!("  Simulation Results");
    println!("=======================================================");

    let mut results = Vec::new();
    for strategy in ShuffleStrategy::all() {
        println!();
        println!("Strategy: {}", strategy.name());
        println!("{}", "-".repeat(50));

        let result = run_strategy_simulation(strategy, &config)
            .with_context(|| format!("strategy '{}' failed", strategy.name()))?;
        result.print();
        results.push(result);
    }

    println!();
    println!("=======================================================");
    println!("  Summary Table");
    println!("=======================================================");
    println!();
    print!("{}", render_summary(&results));

    Ok(())
}
