// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::error::Error;
use std::io::{self, Read};
use std::process;
use std::time::Instant;

use clap::{App, Arg};
use log::{debug, info};

use knights_solver::board_formatter::BoardFormatter;
use knights_solver::config::Format;
use knights_solver::puzzle::Puzzle;
use knights_solver::solver::{SearchNode, SearchOutcome};
use knights_solver::{LoadPuzzle, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("knights-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the fewest knight moves to rearrange 4 knights on a 3x3 board")
        .after_help("Logging goes to stderr. Set RUST_LOG=info to see how long the search took.")
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .takes_value(true)
                .allow_hyphen_values(true)
                .value_name("NUMBERS")
                .conflicts_with("file")
                .help("goal as 8 integers: x and y of each knight"),
        )
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .takes_value(true)
                .possible_values(&["coords", "board"])
                .default_value("coords")
                .help("how to print states"),
        )
        .arg(
            Arg::with_name("print-states")
                .short("p")
                .long("print-states")
                .help("print every state taken from the queue"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics by depth"),
        )
        .arg(Arg::with_name("file").help("file with the goal, stdin is used if missing"))
        .get_matches();

    let format: Format = matches
        .value_of("format")
        .unwrap_or("coords")
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let print_states = matches.is_present("print-states");
    let print_stats = matches.is_present("stats");

    let puzzle: Result<Puzzle, Box<dyn Error>> = if let Some(goal) = matches.value_of("goal") {
        goal.parse::<Puzzle>().map_err(Into::into)
    } else if let Some(path) = matches.value_of("file") {
        path.load_puzzle()
    } else {
        read_stdin().and_then(|input| input.parse::<Puzzle>().map_err(Into::into))
    };
    let puzzle = puzzle.unwrap_or_else(|err| {
        eprintln!("Invalid goal: {}", err);
        process::exit(1);
    });
    debug!("Puzzle: {:?}", puzzle);

    println!("Solving...");
    let started = Instant::now();
    let solution = if print_states {
        puzzle.solve_with(&mut |node: &SearchNode| {
            // boards end with a newline so they get separated by an empty line
            println!("{}", BoardFormatter::new(&node.state, format));
        })
    } else {
        puzzle.solve()
    };
    let elapsed = started.elapsed();
    info!(
        "Time taken for run: {} ms",
        elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_millis())
    );

    match solution.outcome {
        SearchOutcome::Solved { state, cost } => {
            let formatter = BoardFormatter::new(&state, format);
            match format {
                Format::Coords => println!("BFS Result: {}", formatter),
                Format::Board => print!("BFS Result:\n{}", formatter),
            }
            println!("Total cost: {}", cost);
        }
        SearchOutcome::Exhausted => println!("No solution"),
    }
    if print_stats {
        println!();
        print!("{}", solution.stats);
    }
}

fn read_stdin() -> Result<String, Box<dyn Error>> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
