mod args;
mod cli;

use anyhow::Result;
use args::Args;
use log::info;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    let args = Args::parse()?;
    SimpleLogger::new().with_level(args.log_level).init()?;
    info!("alleleca {}", env!("CARGO_PKG_VERSION"));
    cli::run(args)
}
