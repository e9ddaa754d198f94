use std::collections::{BTreeSet, VecDeque};

use log::{info, trace};

use crate::error::VerifyError;
use crate::graph::ConflictGraph;

/// Breadth-first search from philosopher 1; every philosopher must be reached.
///
/// A graph with no philosophers is trivially connected.
pub fn check_connected(graph: &ConflictGraph) -> Result<(), VerifyError> {
    let num_philosopher = graph.philosopher_count();
    if num_philosopher == 0 {
        info!("no philosophers, skipping connectivity check");
        return Ok(());
    }

    let mut visited = vec![false; num_philosopher + 1];
    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(1);

    while let Some(p) = queue.pop_front() {
        trace!("visit {}", p);
        visited[p] = true;
        for &n in graph.neighbors(p) {
            if !visited[n] {
                queue.push_back(n);
            }
        }
    }

    for p in graph.philosophers() {
        if !visited[p] {
            let reached: BTreeSet<usize> = graph.philosophers().filter(|&q| visited[q]).collect();
            return Err(VerifyError::DisconnectedGraph {
                unreached: p,
                reached,
            });
        }
    }

    info!("all {} philosophers are connected", num_philosopher);
    Ok(())
}
