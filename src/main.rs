use anyhow::Result;
use clap::Parser;

use colormix::cli::{self, Cli};
use colormix::logging::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli::load_config(&cli)?;
    let output = cli::run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
