#![warn(rust_2018_idioms)]

use std::error::Error;
use std::process;

use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use prettytable::{cell, row, Table};
use separator::Separatable;

use npuzzle_solver::api::{self, GenerateRequest, SolveRequest};
use npuzzle_solver::config::{Config, Method};
use npuzzle_solver::heuristic::Heuristic;
use npuzzle_solver::puzzle::Puzzle;
use npuzzle_solver::solution_formatter::SolutionFormatter;
use npuzzle_solver::solver::Outcome;
use npuzzle_solver::{LoadPuzzle, LoadRequest, Solve};

fn main() {
    env_logger::init();

    let method_arg = Arg::with_name("method")
        .short("m")
        .long("method")
        .takes_value(true)
        .default_value("a-star")
        .help("breadth-first (bfs), greedy or a-star (astar)");
    let heuristic_arg = Arg::with_name("heuristic")
        .short("H")
        .long("heuristic")
        .takes_value(true)
        .default_value("manhattan")
        .help("hamming or manhattan");
    let max_iterations_arg = Arg::with_name("max-iterations")
        .short("i")
        .long("max-iterations")
        .takes_value(true)
        .help("give up after taking this many states off the frontier");

    let matches = App::new("npuzzle-solver")
        .author("martin-t")
        .version("0.1")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("solve")
                .about("solve a puzzle file")
                .arg(method_arg)
                .arg(heuristic_arg.clone())
                .arg(max_iterations_arg)
                .arg(
                    Arg::with_name("steps")
                        .long("steps")
                        .help("print every board on the way to the goal"),
                )
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("file is a JSON solve request, print a JSON response"),
                )
                .group(ArgGroup::with_name("output").arg("steps").arg("json"))
                .arg(Arg::with_name("file").required(true)),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("generate a random solvable puzzle")
                .arg(
                    Arg::with_name("size")
                        .short("s")
                        .long("size")
                        .takes_value(true)
                        .default_value("3"),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .takes_value(true)
                        .default_value("123"),
                )
                .arg(Arg::with_name("json").long("json").help("print a JSON response")),
        )
        .subcommand(
            SubCommand::with_name("compare")
                .about("solve a puzzle file with every method")
                .arg(heuristic_arg)
                .arg(Arg::with_name("file").required(true)),
        )
        .get_matches();

    let result = match matches.subcommand() {
        ("solve", Some(sub)) => solve(sub),
        ("generate", Some(sub)) => generate(sub),
        ("compare", Some(sub)) => compare(sub),
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn solve(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let path = matches.value_of("file").unwrap();

    if matches.is_present("json") {
        let request = load_request(path)?;
        let response = api::solve(&request)?;
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let config = config(matches)?;
    let puzzle = load(path)?;

    println!("Solving {} using {}...", path, config);
    let report = puzzle.solve(&config);
    println!("{}", report.stats);

    match report.outcome {
        Outcome::Solved(ref moves) => {
            println!("Found solution:");
            if matches.is_present("steps") {
                print!("{}", SolutionFormatter::new(puzzle.initial(), moves));
            }
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
        ref outcome => {
            println!("{}", outcome);
            if !puzzle.is_solvable() {
                println!("The puzzle is not solvable");
            }
        }
    }
    Ok(())
}

fn generate(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let size: usize = matches.value_of("size").unwrap().parse()?;
    let seed: u64 = matches.value_of("seed").unwrap().parse()?;

    if matches.is_present("json") {
        let response = api::generate(GenerateRequest { size }, seed)?;
        println!("{}", serde_json::to_string(&response)?);
    } else {
        print!("{}", Puzzle::generate(size, seed)?);
    }
    Ok(())
}

fn compare(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let path = matches.value_of("file").unwrap();
    let heuristic: Heuristic = matches.value_of("heuristic").unwrap().parse()?;
    let puzzle = load(path)?;

    let mut table = Table::new();
    table.set_titles(row!["Method", "Outcome", "Moves", "Created", "Visited"]);
    for &method in &Method::ALL {
        let config = Config::new(method, heuristic);
        let report = puzzle.solve(&config);
        let moves = report
            .outcome
            .moves()
            .map_or_else(|| "-".to_owned(), |moves| moves.move_cnt().to_string());
        table.add_row(row![
            config,
            outcome_name(&report.outcome),
            r->moves,
            r->report.stats.total_created().separated_string(),
            r->report.stats.total_visited().separated_string()
        ]);
    }
    table.printstd();
    Ok(())
}

fn config(matches: &ArgMatches<'_>) -> Result<Config, Box<dyn Error>> {
    let method: Method = matches.value_of("method").unwrap().parse()?;
    let heuristic: Heuristic = matches.value_of("heuristic").unwrap().parse()?;
    let mut config = Config::new(method, heuristic);
    if let Some(max) = matches.value_of("max-iterations") {
        config = config.with_max_iterations(Some(max.parse()?));
    }
    Ok(config)
}

fn load(path: &str) -> Result<Puzzle, Box<dyn Error>> {
    path.load_puzzle()
        .map_err(|err| format!("Can't load puzzle {}: {}", path, err).into())
}

fn load_request(path: &str) -> Result<SolveRequest, Box<dyn Error>> {
    path.load_request()
        .map_err(|err| format!("Can't load request {}: {}", path, err).into())
}

fn outcome_name(outcome: &Outcome) -> &'static str {
    match *outcome {
        Outcome::Solved(_) => "solved",
        Outcome::Exhausted => "exhausted",
        Outcome::LimitReached(_) => "limit reached",
    }
}
