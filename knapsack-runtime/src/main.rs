use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knapsack_model::{config::RunConfig, generator::*, Problem, Solution};
use knapsack_runtime::{logging::init_logging, output, parse};
use knapsack_solver::run;
use knapsack_utils::{dejsonify, jsonify, NumberError, Value};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::{fs, io::Read};
use tracing::{debug, info};

fn cli() -> Command {
    Command::new("knapsack")
        .about("Solves multi-sack knapsack problems exactly")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .arg(arg!(-v --verbose "Log solver statistics to stderr").global(true))
        .subcommand(
            Command::new("solve")
                .about("Computes an optimal packing")
                .arg(
                    arg!(-s --sack <SACK> "A sack [count*]capacity, may be repeated")
                        .action(ArgAction::Append),
                )
                .arg(arg!([ITEMS] ... "Items [N*]weight[=value], N=0 for an unbounded supply"))
                .arg(arg!(-f --float "Values are floating point numbers"))
                .arg(arg!(--json "Print the solution as JSON"))
                .arg(arg!(--"value-only" "Only compute the optimal value"))
                .arg(arg!(--"no-normalize" "Keep oversized items and large counts as given"))
                .arg(
                    arg!(--config [CONFIG] "Run config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a solution")
                .arg(
                    arg!(<PROBLEM> "Problem json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(-f --float "Values are floating point numbers")),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a problem instance")
                .arg(arg!(<SEED> "Seed value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--track [TRACK] "Track json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--items [ITEMS] "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--sacks [SACKS] "Number of sacks")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = dispatch(&matches) {
        eprintln!("Error: {}", e);
        eprintln!("Type knapsack -h for help");
        std::process::exit(1);
    }
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    init_logging(matches.get_flag("verbose"))?;
    match matches.subcommand() {
        Some(("solve", sub_m)) => solve(sub_m),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("PROBLEM").unwrap(),
            sub_m.get_one::<String>("SOLUTION").unwrap(),
            sub_m.get_flag("float"),
        ),
        Some(("generate", sub_m)) => generate(
            *sub_m.get_one::<u64>("SEED").unwrap(),
            sub_m.get_one::<String>("track"),
            sub_m.get_one::<usize>("items").copied(),
            sub_m.get_one::<usize>("sacks").copied(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn solve(sub_m: &ArgMatches) -> Result<()> {
    let mut config = match sub_m.get_one::<String>("config") {
        Some(config) => {
            let overrides = dejsonify::<Map<String, JsonValue>>(&load_input(config)?)
                .map_err(|e| anyhow!("Failed to parse config: {}", e))?;
            RunConfig::initialize(&Some(overrides))
        }
        None => RunConfig::default(),
    };
    config.float_values |= sub_m.get_flag("float");
    config.json |= sub_m.get_flag("json");
    config.placement &= !sub_m.get_flag("value-only");
    config.normalize &= !sub_m.get_flag("no-normalize");
    debug!(?config, "run config");

    let sacks: Vec<&String> = sub_m.get_many::<String>("sack").into_iter().flatten().collect();
    let items: Vec<&String> = sub_m.get_many::<String>("ITEMS").into_iter().flatten().collect();
    let result = if config.float_values {
        solve_with(&config, &sacks, &items, parse::float_value)?
    } else {
        solve_with(&config, &sacks, &items, parse::integer_value)?
    };
    print!("{}", result);
    Ok(())
}

fn solve_with<V, F>(config: &RunConfig, sacks: &[&String], items: &[&String], value: F) -> Result<String>
where
    V: Value + Serialize,
    F: Fn(&str) -> Result<V, NumberError>,
{
    let problem = parse::build_problem(sacks, items, value)?;
    let outcome = if config.normalize {
        let normalized = problem.normalize();
        let mut outcome = run(&normalized.problem, config.placement);
        outcome.solution.remap_items(&normalized.origin);
        outcome
    } else {
        run(&problem, config.placement)
    };
    info!(
        value = %outcome.solution.value,
        unbound_states = outcome.stats.unbound_states,
        bound_states = outcome.stats.bound_states,
        placed_units = outcome.stats.placed_units,
    );

    if config.json {
        output::format_json(&outcome.solution)
    } else {
        output::format_text(&problem, &outcome.solution)
    }
}

fn verify(problem: &str, solution: &str, float_values: bool) -> Result<()> {
    if float_values {
        verify_with::<f64>(problem, solution)?;
    } else {
        verify_with::<u64>(problem, solution)?;
    }
    println!("Solution is valid");
    Ok(())
}

fn verify_with<V>(problem: &str, solution: &str) -> Result<()>
where
    V: Value + DeserializeOwned,
{
    let problem: Problem<u64, V, u64> = load_json(problem, "problem")?;
    let solution: Solution<V, u64> = load_json(solution, "solution")?;
    problem.verify_solution(&solution)?;
    Ok(())
}

fn generate(
    seed: u64,
    track: Option<&String>,
    num_items: Option<usize>,
    num_sacks: Option<usize>,
) -> Result<()> {
    let mut track = match track {
        Some(track) => load_json::<Track>(track, "track")?,
        None => Track::default(),
    };
    if let Some(num_items) = num_items {
        track.num_items = num_items;
    }
    if let Some(num_sacks) = num_sacks {
        track.num_sacks = num_sacks;
    }

    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    let problem = generate_instance(&bytes, &track)?;
    println!("{}", jsonify(&problem)?);
    Ok(())
}

fn load_json<T: DeserializeOwned>(input: &str, what: &str) -> Result<T> {
    let json = load_input(input)?;
    dejsonify::<T>(&json).map_err(|e| anyhow!("Failed to parse {}: {}", what, e))
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    } else if input.ends_with(".json") {
        fs::read_to_string(input).map_err(|e| anyhow!("Failed to read file {}: {}", input, e))
    } else {
        Ok(input.to_string())
    }
}
