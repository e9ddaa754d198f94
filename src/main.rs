mod error;
mod graph;
mod report;
mod roles;

use error::VerifyError;
use report::Report;
use roles::connectivity::check_connected;
use roles::loader::load_graph;
use roles::verifier::Verifier;

#[macro_use]
extern crate clap;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process;

fn main() {
    let matches = clap_app!(drinking_philosophers =>
        (version: "0.1")
        (author: "bx3 <bx3@uw.edu>")
        (about: "Checks that a drinking philosophers run never lets two neighbours share a bottle")
        (@arg graph: +required "Graph file: number of philosophers on the first line, then one \"p1 p2\" pair per shared bottle, philosophers numbered from 1")
        (@arg output: +required "Output of the solution: one \"philosopher <id> drinking|thinking\" per line")
        (@arg json: -j --json "Print a JSON report instead of the success message")
        (@arg verbose: -v --verbose ... "Raise the log level (info, debug, trace)")
    )
    .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("unable to set up logging: {}", e);
    }

    // both are required, clap exits before this point otherwise
    let graph_path = matches.value_of("graph").unwrap_or_default();
    let output_path = matches.value_of("output").unwrap_or_default();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = run(
        graph_path,
        output_path,
        matches.is_present("json"),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(if e.is_safety_violation() { 2 } else { 1 });
    }
}

/// Verifies both files and prints the verdict to `out`.
///
/// With `json` the count line goes to `err` so `out` only carries the report.
fn run<O: Write, E: Write>(
    graph_path: &str,
    output_path: &str,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> Result<(), VerifyError> {
    let report = if json {
        verify_files(graph_path, output_path, err)?
    } else {
        verify_files(graph_path, output_path, out)?
    };

    let printed = if json {
        report
            .to_json()
            .map_err(io::Error::from)
            .and_then(|json| writeln!(out, "{}", json))
    } else {
        writeln!(out, "Everything looks good to me.")
    };
    printed.map_err(|e| VerifyError::io("<stdout>", e))
}

/// Loads the graph, checks it is connected, then replays the output log.
fn verify_files<W: Write>(
    graph_path: &str,
    output_path: &str,
    diagnostics: &mut W,
) -> Result<Report, VerifyError> {
    let f_graph = File::open(graph_path).map_err(|e| VerifyError::io(graph_path, e))?;
    let graph = load_graph(graph_path, BufReader::new(f_graph), diagnostics)?;

    check_connected(&graph)?;

    let f_output = File::open(output_path).map_err(|e| VerifyError::io(output_path, e))?;
    let tally = Verifier::new(&graph).verify(output_path, BufReader::new(f_output))?;

    Ok(Report::new(graph_path, output_path, &graph, tally))
}
