use std::io::BufRead;

use log::{debug, info};
use regex::Regex;

use crate::error::VerifyError;
use crate::graph::ConflictGraph;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Drinking,
    Thinking,
}

impl Status {
    fn parse(token: &str) -> Option<Status> {
        match token {
            "drinking" => Some(Status::Drinking),
            "thinking" => Some(Status::Thinking),
            _ => None,
        }
    }
}

/// What a clean run over the log saw.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub transitions: usize,
    pub peak_drinking: usize,
}

/// Replays a transition log against the conflict graph.
///
/// Each `drinking` transition is checked against the state left by every
/// earlier line, so the log is consumed strictly in order.
pub struct Verifier<'a> {
    graph: &'a ConflictGraph,
    drinking: Vec<bool>,
    num_drinking: usize,
    tally: Tally,
}

impl<'a> Verifier<'a> {
    pub fn new(graph: &'a ConflictGraph) -> Verifier<'a> {
        Verifier {
            graph,
            drinking: vec![false; graph.philosopher_count() + 1],
            num_drinking: 0,
            tally: Tally::default(),
        }
    }

    /// Applies one transition; fails if `p` starts drinking next to a
    /// neighbour that already is.
    pub fn apply(
        &mut self,
        file: &str,
        lineno: usize,
        p: usize,
        status: Status,
    ) -> Result<(), VerifyError> {
        let now_drinking = status == Status::Drinking;
        if self.drinking[p] != now_drinking {
            if now_drinking {
                self.num_drinking += 1;
            } else {
                self.num_drinking -= 1;
            }
        }
        self.drinking[p] = now_drinking;
        self.tally.transitions += 1;
        self.tally.peak_drinking = self.tally.peak_drinking.max(self.num_drinking);

        if now_drinking {
            for &n in self.graph.neighbors(p) {
                if self.drinking[n] {
                    return Err(VerifyError::ConcurrentDrinking {
                        file: file.to_string(),
                        line: lineno,
                        philosopher: p,
                        neighbor: n,
                    });
                }
            }
        }
        Ok(())
    }

    /// Streams the whole log, stopping at the first bad line or conflict.
    pub fn verify<R: BufRead>(mut self, file: &str, reader: R) -> Result<Tally, VerifyError> {
        let entry_re = Regex::new(r"^philosopher ([0-9]+) (\w+)").expect("Invalid log entry regex");

        for (idx, line) in reader.lines().enumerate() {
            let lineno = idx + 1;
            let line = line.map_err(|e| VerifyError::io(file, e))?;

            let caps = entry_re
                .captures(&line)
                .ok_or_else(|| VerifyError::MalformedLogEntry {
                    file: file.to_string(),
                    line: lineno,
                    content: line.clone(),
                })?;

            let status = Status::parse(&caps[2]).ok_or_else(|| VerifyError::InvalidStatus {
                file: file.to_string(),
                line: lineno,
                status: caps[2].to_string(),
            })?;

            let p = match caps[1].parse::<usize>() {
                Ok(p) if self.graph.contains(p) => p,
                _ => {
                    return Err(VerifyError::OutOfRange {
                        file: file.to_string(),
                        line: lineno,
                        endpoint: "p",
                        value: caps[1].to_string(),
                        bound: self.graph.philosopher_count(),
                    })
                }
            };

            debug!("{}:{} philosopher {} {:?}", file, lineno, p, status);
            self.apply(file, lineno, p, status)?;
        }

        info!(
            "{}: {} transitions, at most {} drinking at once",
            file, self.tally.transitions, self.tally.peak_drinking
        );
        Ok(self.tally)
    }
}
