use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use log::{debug, info};
use regex::Regex;

use crate::error::VerifyError;
use crate::graph::{ConflictGraph, MAX_PHILOSOPHERS};

/// Reads a conflict graph: the philosopher count on line 1, then one
/// `p1 p2` pair per bottle. Lines that are not a pair are skipped.
///
/// `file` only labels diagnostics. The count is echoed to `diagnostics`.
pub fn load_graph<R: BufRead, W: Write>(
    file: &str,
    reader: R,
    diagnostics: &mut W,
) -> Result<ConflictGraph, VerifyError> {
    let edge_re = Regex::new(r"^\s*([0-9]+)\s+([0-9]+)").expect("Invalid edge regex");
    let mut graph = ConflictGraph::new(0);

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.map_err(|e| VerifyError::io(file, e))?;

        let caps = match edge_re.captures(&line) {
            Some(caps) => caps,
            None => {
                if lineno == 1 {
                    let num_philosopher = parse_count(file, lineno, &line)?;
                    writeln!(diagnostics, "Okay, there are {} philosophers", num_philosopher)
                        .map_err(|e| VerifyError::io(file, e))?;
                    info!("{}: {} philosophers", file, num_philosopher);
                    graph = ConflictGraph::new(num_philosopher);
                }
                continue;
            }
        };

        let p1 = check_endpoint(&graph, file, lineno, "p1", &caps[1])?;
        let p2 = check_endpoint(&graph, file, lineno, "p2", &caps[2])?;
        debug!("{}:{} bottle between {} and {}", file, lineno, p1, p2);
        graph.add_edge(p1, p2);
    }

    info!(
        "{}: loaded {} bottles, max degree {}",
        file,
        graph.edge_count(),
        graph.max_degree()
    );
    Ok(graph)
}

fn parse_count(file: &str, lineno: usize, line: &str) -> Result<usize, VerifyError> {
    let raw = line.trim();
    let too_many = || VerifyError::TooManyPhilosophers {
        file: file.to_string(),
        line: lineno,
        count: raw.to_string(),
        limit: MAX_PHILOSOPHERS,
    };
    match raw.parse::<usize>() {
        Ok(num_philosopher) if num_philosopher <= MAX_PHILOSOPHERS => Ok(num_philosopher),
        Ok(_) => Err(too_many()),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(too_many()),
        Err(_) => Err(VerifyError::InvalidPhilosopherCount {
            file: file.to_string(),
            line: lineno,
            content: line.to_string(),
        }),
    }
}

fn check_endpoint(
    graph: &ConflictGraph,
    file: &str,
    lineno: usize,
    endpoint: &'static str,
    raw: &str,
) -> Result<usize, VerifyError> {
    match raw.parse::<usize>() {
        Ok(p) if graph.contains(p) => Ok(p),
        _ => Err(VerifyError::OutOfRange {
            file: file.to_string(),
            line: lineno,
            endpoint,
            value: raw.to_string(),
            bound: graph.philosopher_count(),
        }),
    }
}
