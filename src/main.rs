use anyhow::{Context, Result};
use clap::Parser;
use gallery_optimizer::cli::Args;
use gallery_optimizer::logger::{set_verbosity, Verbosity};
use gallery_optimizer::optimize_gallery;

fn main() -> Result<()> {
    let args = Args::parse();

    set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    // Per-file failures are already reported and do not change the exit code.
    optimize_gallery(&args.dir, args.variant)
        .with_context(|| format!("Failed to optimize gallery {:?}", args.dir))?;

    Ok(())
}
