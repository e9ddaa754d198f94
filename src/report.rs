use serde::Serialize;

use crate::graph::ConflictGraph;
use crate::roles::verifier::Tally;

/// Summary of a run that found nothing wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub graph: String,
    pub output: String,
    pub philosophers: usize,
    pub bottles: usize,
    pub max_degree: usize,
    pub transitions: usize,
    pub peak_drinking: usize,
}

impl Report {
    pub fn new(graph_path: &str, output_path: &str, graph: &ConflictGraph, tally: Tally) -> Report {
        Report {
            graph: graph_path.to_string(),
            output: output_path.to_string(),
            philosophers: graph.philosopher_count(),
            bottles: graph.edge_count(),
            max_degree: graph.max_degree(),
            transitions: tally.transitions,
            peak_drinking: tally.peak_drinking,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
