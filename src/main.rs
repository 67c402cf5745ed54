use clap::Parser;
use img_tiers::cli::Args;
use img_tiers::logger::{set_verbosity, Verbosity};
use img_tiers::{run, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    // Per-image failures are reported inside `run`; only setup and manifest
    // errors reach here.
    run(&args.to_options())?;

    Ok(())
}
