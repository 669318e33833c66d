//! Albumflat CLI: copy an album tree into a numbered destination; use --dry-run to preview.

use albumflat::engine::arg_parser::Cli;
use albumflat::engine::handle_run;
use anyhow::Result;
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
