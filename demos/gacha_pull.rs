//! Gacha banner demo: one pull per strategy, then a 100-pull batch.
//!
//! Usage: `cargo run --example gacha_pull [banner.toml] [seed]`
//!
//! Without a path, a built-in banner is used. The pickup candidate has its
//! weight tripled, so it shows up far more often than its base weight suggests.

use std::collections::BTreeMap;

use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use randex::{Candidate, CandidateTable, SelectionStrategy};

fn builtin_banner() -> CandidateTable {
    CandidateTable::new(
        SelectionStrategy::Weighted,
        vec![
            Candidate::pickup("SSR Dragon Knight", 0.01, 3.0),
            Candidate::new("SSR Storm Mage", 0.01),
            Candidate::new("SR Archer", 0.13),
            Candidate::new("R Sword", 0.35),
            Candidate::new("R Shield", 0.50),
        ],
    )
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let banner = match args.next() {
        Some(path) => CandidateTable::load(&path).with_context(|| format!("loading {path}"))?,
        None => builtin_banner(),
    };
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().context("seed must be an integer")?,
        None => 7,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for s in SelectionStrategy::ALL {
        let pick = randex::select_one_with_rng(&banner.candidates, s, &mut rng)?;
        println!("{s:>22}: {pick}");
    }
    println!();

    let pulls = banner.pull(100, &mut rng)?;
    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for &label in &pulls {
        *tally.entry(label).or_default() += 1;
    }

    println!("100 pulls ({}):", banner.strategy);
    let mut rows: Vec<_> = tally.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (label, n) in rows {
        println!("{n:>4}  {label}");
    }

    Ok(())
}
