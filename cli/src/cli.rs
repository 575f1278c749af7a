//! Running the simulations without any interface.

use crate::args::{Args, GridArgs, Mode, PopulationArgs};
use alleleca_lib::population::{init_population, simulate_generation, Census};
use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

pub(crate) fn run(args: Args) -> Result<()> {
    match args.mode {
        Mode::Grid(grid) => match &grid.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Unable to create {}", path.display()))?;
                run_grid(&grid, &mut BufWriter::new(file))
            }
            None => run_grid(&grid, &mut io::stdout().lock()),
        },
        Mode::Population(population) => run_population(&population, &mut io::stdout().lock()),
    }
}

/// Writes the initial grid, then every generation.
pub(crate) fn run_grid<W: Write>(args: &GridArgs, out: &mut W) -> Result<()> {
    info!("Configuration: {:?}", args.config);
    let mut world = args.config.world().context("Invalid configuration")?;
    if let Some(probability) = args.probability {
        world
            .seed(args.target, probability)
            .context("Unable to seed the grid")?;
    }
    info!(
        "Running {} generations on a {}x{} grid",
        args.generations,
        world.grid().rows(),
        world.grid().cols()
    );

    write!(out, "Initial state:\n{}", world.grid())?;
    for _ in 0..args.generations {
        world.advance();
        write!(out, "{}", world.snapshot())?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the census of the initial population, then of every generation.
pub(crate) fn run_population<W: Write>(args: &PopulationArgs, out: &mut W) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut population = init_population(args.size, args.frequency, &mut rng)
        .context("Unable to initialize the population")?;

    writeln!(out, "Initial population: {}", Census::of(&population))?;
    for generation in 1..=args.generations {
        population = simulate_generation(&population, &mut rng);
        writeln!(out, "Generation {}: {}", generation, Census::of(&population))?;
    }
    out.flush()?;
    Ok(())
}
