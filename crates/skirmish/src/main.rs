//! # SKIRMISH
//!
//! Runs one arena skirmish and prints what happened.
//!
//! ```text
//! skirmish --population 5000 --layout hot_cold --report
//! skirmish --config arena.toml --verbose
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use skirmish::{logging, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = args.resolve().context("failed to build the run configuration")?;
    let summary = run(config).context("simulation setup failed")?;

    println!("{summary}");
    if args.report {
        println!();
        println!("{}", summary.footprint);
    }

    Ok(())
}
