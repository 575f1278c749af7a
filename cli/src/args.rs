//! Parsing command-line arguments.

use alleleca_lib::{Boundary, Config, Dimension, Neighborhood, RuleKind, State};
use anyhow::{bail, Context, Result};
use clap::{
    arg, command, crate_authors, crate_description, value_parser, Arg, ArgAction, ArgMatches,
    Command,
};
use log::LevelFilter;
use std::{fs, path::PathBuf};

/// Options of the `grid` subcommand.
pub(crate) struct GridArgs {
    pub(crate) config: Config,
    pub(crate) target: State,
    /// `None` means that the grid is left in the default state.
    pub(crate) probability: Option<f64>,
    pub(crate) generations: u64,
    /// `None` means stdout.
    pub(crate) output: Option<PathBuf>,
}

/// Options of the `population` subcommand.
pub(crate) struct PopulationArgs {
    pub(crate) size: usize,
    pub(crate) frequency: f64,
    pub(crate) generations: u64,
    pub(crate) seed: Option<u64>,
}

pub(crate) enum Mode {
    Grid(GridArgs),
    Population(PopulationArgs),
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) mode: Mode,
    pub(crate) log_level: LevelFilter,
}

fn grid_command() -> Command {
    Command::new("grid")
        .about("Runs the cellular automaton on a grid")
        .long_about(
            "Runs the cellular automaton on a grid\n\
             \n\
             The initial grid and every generation are written as a label line \
             (`Initial state:` or `Generation N:`) followed by one line per row, \
             with the states separated by spaces.\n\
             \n\
             Options given on the command line override those in the config file.",
        )
        .arg(
            Arg::new("ROWS")
                .help("Number of rows, or the length of a 1-dimensional grid")
                .index(1)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("COLS")
                .help("Number of columns")
                .index(2)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(isize)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a TOML, JSON or YAML file")
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("DIMENSION")
                .help("Dimensionality of the grid: 1 or 2")
                .short('d')
                .long("dimension")
                .value_parser(value_parser!(Dimension)),
        )
        .arg(
            Arg::new("NEIGHBORHOOD")
                .help("Neighborhood: von-neumann or moore")
                .short('n')
                .long("neighborhood")
                .value_parser(value_parser!(Neighborhood)),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("Boundary: periodic, fixed or none")
                .short('b')
                .long("boundary")
                .value_parser(value_parser!(Boundary)),
        )
        .arg(
            Arg::new("RULE")
                .help("Rule: straight, conditional, majority or crossing")
                .long_help(
                    "Rule of the cellular automaton\n\
                     straight: a cell in state k becomes k'.\n\
                     conditional: a cell in state k becomes k' if a neighbor is k'.\n\
                     majority: a cell in state k becomes k' if the sum of its neighbors \
                     reaches the threshold (1 in 1D, 2 for von-neumann, 5 for moore).\n\
                     crossing: each cell is replaced by the offspring of itself and its \
                     east neighbor (3 states: 0 = GG, 1 = Gg, 2 = gg).",
                )
                .short('r')
                .long("rule")
                .value_parser(value_parser!(RuleKind)),
        )
        .arg(
            Arg::new("STATES")
                .help("Number of states")
                .short('s')
                .long("states")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("K")
                .help("Source state k of the rule")
                .short('k')
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("KPRIME")
                .help("Target state k' of the rule")
                .long("kprime")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("DEFAULT")
                .help("State every cell starts with")
                .long("default")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("TARGET")
                .help("State set by random seeding")
                .short('t')
                .long("target")
                .value_parser(value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            Arg::new("PROBABILITY")
                .help("Probability for each cell to start in the target state")
                .long_help(
                    "Probability for each cell to start in the target state\n\
                     If omitted, every cell starts in the default state.",
                )
                .short('p')
                .long("probability")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Writes the generations to a file instead of stdout")
                .short('o')
                .long("output")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn population_command() -> Command {
    Command::new("population")
        .about("Simulates a 1-dimensional population of genotypes")
        .long_about(
            "Simulates a 1-dimensional population of genotypes\n\
             \n\
             Each individual of the next generation is the offspring of an \
             individual and its right-hand neighbor, wrapping around at the end.",
        )
        .arg(
            Arg::new("SIZE")
                .help("Size of the population")
                .short('n')
                .long("size")
                .value_parser(value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("FREQUENCY")
                .help("Starting frequency of the recessive genotype")
                .short('f')
                .long("frequency")
                .value_parser(value_parser!(f64))
                .default_value("0.2"),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to simulate")
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64))
                .default_value("100"),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
}

/// Reads a configuration file, choosing the format by the extension.
fn read_config(path: &PathBuf) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read config file {}", path.display()))?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&text)?,
        Some("json") => serde_json::from_str(&text)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
        _ => bail!(
            "Unknown config file format {}: expected .toml, .json or .yaml",
            path.display()
        ),
    };
    Ok(config)
}

fn parse_grid(matches: &ArgMatches) -> Result<GridArgs> {
    let mut config = match matches.get_one::<PathBuf>("CONFIG") {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };

    if let Some(&rows) = matches.get_one::<isize>("ROWS") {
        config.rows = rows;
    }
    if let Some(&cols) = matches.get_one::<isize>("COLS") {
        config.cols = cols;
    }
    if let Some(&dimension) = matches.get_one::<Dimension>("DIMENSION") {
        config.dimension = dimension;
    }
    // A single number of cells is enough for a 1-dimensional grid.
    if config.dimension == Dimension::One && matches.get_one::<isize>("COLS").is_none() {
        if let Some(&len) = matches.get_one::<isize>("ROWS") {
            config.rows = 1;
            config.cols = len;
        }
    }
    if let Some(&neighborhood) = matches.get_one::<Neighborhood>("NEIGHBORHOOD") {
        config.neighborhood = neighborhood;
    }
    if let Some(&boundary) = matches.get_one::<Boundary>("BOUNDARY") {
        config.boundary = boundary;
    }
    if let Some(&rule) = matches.get_one::<RuleKind>("RULE") {
        config.rule = rule;
        if rule == RuleKind::GeneticCrossing && matches.get_one::<usize>("STATES").is_none() {
            config.states = 3;
        }
    }
    if let Some(&states) = matches.get_one::<usize>("STATES") {
        config.states = states;
    }
    if let Some(&k) = matches.get_one::<usize>("K") {
        config.k = State(k);
    }
    if let Some(&kprime) = matches.get_one::<usize>("KPRIME") {
        config.kprime = State(kprime);
    }
    if let Some(&default_state) = matches.get_one::<usize>("DEFAULT") {
        config.default_state = State(default_state);
    }
    if let Some(&seed) = matches.get_one::<u64>("SEED") {
        config.seed = Some(seed);
    }

    Ok(GridArgs {
        config,
        target: State(*matches.get_one::<usize>("TARGET").unwrap_or(&1)),
        probability: matches.get_one::<f64>("PROBABILITY").copied(),
        generations: *matches.get_one::<u64>("GENERATIONS").unwrap_or(&10),
        output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
    })
}

fn parse_population(matches: &ArgMatches) -> PopulationArgs {
    PopulationArgs {
        size: *matches.get_one::<usize>("SIZE").unwrap_or(&100),
        frequency: *matches.get_one::<f64>("FREQUENCY").unwrap_or(&0.2),
        generations: *matches.get_one::<u64>("GENERATIONS").unwrap_or(&100),
        seed: matches.get_one::<u64>("SEED").copied(),
    }
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self> {
        let matches = command!()
            .author(crate_authors!())
            .about(crate_description!())
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-v --verbose "Logs more details; repeat for even more")
                    .action(ArgAction::Count)
                    .global(true),
            )
            .arg(
                arg!(-q --quiet "Only logs errors")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("verbose")
                    .global(true),
            )
            .subcommand(grid_command())
            .subcommand(population_command())
            .get_matches();

        let log_level = if matches.get_flag("quiet") {
            LevelFilter::Error
        } else {
            match matches.get_count("verbose") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        let mode = match matches.subcommand() {
            Some(("grid", sub)) => Mode::Grid(parse_grid(sub)?),
            Some(("population", sub)) => Mode::Population(parse_population(sub)),
            _ => bail!("A subcommand is required"),
        };

        Ok(Args { mode, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_flags_override_defaults() -> Result<()> {
        let matches = grid_command().try_get_matches_from([
            "grid",
            "1",
            "5",
            "--dimension",
            "1",
            "--rule",
            "straight",
            "--states",
            "3",
            "-k",
            "1",
            "--kprime",
            "2",
            "--seed",
            "9",
        ])?;
        let args = parse_grid(&matches)?;
        assert_eq!(args.config.dimension, Dimension::One);
        assert_eq!((args.config.rows, args.config.cols), (1, 5));
        assert_eq!(args.config.k, State(1));
        assert_eq!(args.config.kprime, State(2));
        assert_eq!(args.config.seed, Some(9));
        assert_eq!(args.generations, 10);
        assert!(args.probability.is_none());
        Ok(())
    }

    #[test]
    fn one_dimensional_length() -> Result<()> {
        let matches = grid_command().try_get_matches_from(["grid", "12", "-d", "1"])?;
        let args = parse_grid(&matches)?;
        assert_eq!((args.config.rows, args.config.cols), (1, 12));
        Ok(())
    }

    #[test]
    fn crossing_defaults_to_three_states() -> Result<()> {
        let matches = grid_command().try_get_matches_from(["grid", "4", "4", "-r", "crossing"])?;
        let args = parse_grid(&matches)?;
        assert_eq!(args.config.states, 3);
        Ok(())
    }

    #[test]
    fn rejects_unknown_boundary() {
        assert!(grid_command()
            .try_get_matches_from(["grid", "4", "4", "-b", "mirror"])
            .is_err());
    }
}
