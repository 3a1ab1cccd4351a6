#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;

use itertools::Itertools;
use log::info;
use structopt::StructOpt;

use route_parser::Route;

#[derive(StructOpt)]
#[structopt(name = "route_parser", about = "Classify the elements of ICAO route strings")]
struct Args {
    /// Route words, joined with spaces into a single route string
    #[structopt(name = "route")]
    route: Vec<String>,
    /// Read one route string per line from a file
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    file: Option<PathBuf>,
    /// Print only the element kinds of each route
    #[structopt(short = "k", long = "kinds")]
    kinds: bool,
}

fn read_routes<R: BufRead>(reader: R) -> route_parser::Result<Vec<String>> {
    let mut routes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            routes.push(line);
        }
    }
    Ok(routes)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::from_args();

    let routes = if let Some(path) = &args.file {
        info!("Reading routes from {}", path.display());
        read_routes(BufReader::new(File::open(path)?))?
    } else if !args.route.is_empty() {
        vec![args.route.join(" ")]
    } else {
        info!("Reading routes from stdin");
        let stdin = std::io::stdin();
        let lock = stdin.lock();
        read_routes(lock)?
    };

    let mut failures = 0;
    let output = routes
        .iter()
        .filter_map(|r| match Route::build(r) {
            Ok(route) if args.kinds => Some(format!("{}\n", route.kinds().iter().join(" "))),
            Ok(route) => Some(route.to_string()),
            Err(e) => {
                eprintln!("error: {}", e);
                failures += 1;
                None
            }
        })
        .join("\n");

    let stdout = std::io::stdout();
    stdout.lock().write_all(output.as_bytes())?;

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
