//! Bench command handler.
//!
//! Evaluates 200 seven-card pools drawn from a deck seeded with 1 and reports
//! the elapsed time.

use crate::error::CliError;
use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;
use showdown_engine::hand::evaluate;
use std::io::Write;
use tracing::debug;

const ITERATIONS: usize = 200;
const POOL_SIZE: usize = 7;

pub fn handle_bench_command(out: &mut dyn Write) -> Result<(), CliError> {
    let mut deck = Deck::new_with_seed(1);
    let mut pools: Vec<Vec<Card>> = Vec::with_capacity(ITERATIONS);
    for _ in 0..ITERATIONS {
        deck.shuffle();
        let pool: Vec<Card> = (0..POOL_SIZE).filter_map(|_| deck.deal_card()).collect();
        pools.push(pool);
    }

    let start = std::time::Instant::now();
    let mut cnt = 0usize;
    for pool in &pools {
        evaluate(pool)?;
        cnt += 1;
    }
    let dur = start.elapsed();
    debug!(iterations = cnt, ?dur, "bench finished");
    writeln!(out, "Benchmark: {} iters in {:?}", cnt, dur)?;
    Ok(())
}
