//! Hallway: directions through a nine-floor school building.
//!
//! Give it two places, a room id such as `4N5` or an area such as `Library`,
//! and it answers with numbered walking directions and an estimated time.
//!
//! # Architecture
//!
//! - [`crate::core::layout`] generates the building once: rooms, special areas,
//!   staircases and connector edges for floors 0 through 8.
//! - [`crate::core::resolver`] turns free-form input into canonical ids.
//! - [`crate::core::planner`] picks the cheapest walk, or walk, stairs, walk.
//! - [`crate::core::graph`] holds the same model as an explicit weighted graph and
//!   searches it with Dijkstra.
//! - [`crate::core::render`] writes the route out as sentences.
//! - [`crate::core::router::Router`] owns all of the above and is what callers hold.
//!
//! # Examples
//!
//! ```bash
//! hallway route 4N5 Library
//! hallway route " library " 2e12 --format json
//! hallway path 0Pool 8Gym
//! hallway rooms --floor 7
//! hallway interactive
//! ```

pub mod core;
mod cli;

use crate::cli::{Cli, Command, OutputFormat, RoomsCli, RouteCli};
use crate::core::config;
use crate::core::error::HallwayError;
use crate::core::render;
use crate::core::router::Router;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

pub fn run() -> Result<ExitCode, HallwayError> {
    let cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    let planner_config = config::load_config(cli.config.as_deref(), &current_dir)?;
    let router = Router::new(&planner_config)?;

    match cli.command {
        Command::Route(route_cli) => run_route(&router, &route_cli),
        Command::Path(path_cli) => match router.graph_path(&path_cli.from, &path_cli.to) {
            Ok(path) => {
                println!("{}", render::render_graph_path(&path, router.graph()));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) if e.is_not_found() => {
                println!("Error: {}", e);
                Ok(ExitCode::FAILURE)
            }
            Err(e) => Err(e),
        },
        Command::Rooms(rooms_cli) => {
            run_rooms(&router, &rooms_cli)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_interactive(&router, stdin.lock(), &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_route(router: &Router, cli: &RouteCli) -> Result<ExitCode, HallwayError> {
    let route = match router.route(&cli.from, &cli.to) {
        Ok(route) => route,
        Err(e) if e.is_not_found() => {
            println!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e),
    };
    match cli.format {
        OutputFormat::Text => println!("{}", render::render_route(&route, router.layout())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&route)?),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_rooms(router: &Router, cli: &RoomsCli) -> Result<(), HallwayError> {
    let layout = router.layout();
    let floors: Vec<_> = layout
        .floors()
        .iter()
        .filter(|f| cli.floor.is_none_or(|wanted| wanted == f.number))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let rooms: Vec<_> = floors
                .iter()
                .flat_map(|f| layout.rooms_on(f.number))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rooms)?);
        }
        OutputFormat::Text => {
            for floor in floors {
                let ids: Vec<&str> = floor.rooms.iter().map(|id| id.as_str()).collect();
                println!(
                    "Floor {} ({} rooms, {} staircases): {}",
                    floor.number,
                    ids.len(),
                    layout.staircases_on(floor.number).count(),
                    ids.join(" ")
                );
            }
        }
    }
    Ok(())
}

fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("quit")
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, HallwayError> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt loop: current location, destination, directions, repeat.
/// `quit` at either prompt or end of input stops it.
pub fn run_interactive<R: BufRead, W: Write>(
    router: &Router,
    mut input: R,
    out: &mut W,
) -> Result<(), HallwayError> {
    use colored::Colorize;

    writeln!(out, "{}", "=== Hallway Navigation ===".bright_cyan().bold())?;
    writeln!(
        out,
        "Enter room numbers (e.g., 4N5, 2E12) or special areas (e.g., Library, Gym, Cafeteria)"
    )?;
    writeln!(out, "Type 'quit' to exit\n")?;

    loop {
        let Some(from) = prompt(&mut input, &mut *out, "Enter your current location: ")? else {
            break;
        };
        if is_quit(&from) {
            writeln!(out, "Thanks for using Hallway!")?;
            break;
        }
        let Some(to) = prompt(&mut input, &mut *out, "Enter your destination: ")? else {
            break;
        };
        if is_quit(&to) {
            writeln!(out, "Thanks for using Hallway!")?;
            break;
        }

        writeln!(out, "\n{}\n", router.describe(&from, &to)?)?;
        writeln!(out, "{}\n", "=".repeat(51))?;
    }
    Ok(())
}
