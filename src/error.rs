//! Error taxonomy shared by the loader, the connectivity checker and the
//! transition verifier.
use std::collections::BTreeSet;
use std::io;

use thiserror::Error;

/// Every way a verification run can stop. All of them are fatal.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A philosopher index outside `[1, bound]`, in either input.
    #[error("{file}:{line}: !(1 <= {endpoint} <= {bound}), got {value}")]
    OutOfRange {
        file: String,
        line: usize,
        /// `p1`/`p2` for graph edges, `p` for log entries.
        endpoint: &'static str,
        value: String,
        bound: usize,
    },

    #[error("{file}:{line}: expected the number of philosophers, got {content:?}")]
    InvalidPhilosopherCount {
        file: String,
        line: usize,
        content: String,
    },

    #[error("{file}:{line}: {count} philosophers is more than the supported {limit}")]
    TooManyPhilosophers {
        file: String,
        line: usize,
        count: String,
        limit: usize,
    },

    #[error("{unreached} is not connected to the rest of the graph {reached:?}")]
    DisconnectedGraph {
        unreached: usize,
        reached: BTreeSet<usize>,
    },

    #[error("{file}:{line}: malformed input {content:?}")]
    MalformedLogEntry {
        file: String,
        line: usize,
        content: String,
    },

    #[error("{file}:{line}: malformed input, expected either \"drinking\" or \"thinking\", got {status:?}")]
    InvalidStatus {
        file: String,
        line: usize,
        status: String,
    },

    #[error("{file}:{line}: philosopher #{philosopher} attempts to drink from a bottle that philosopher #{neighbor} is currently drinking from!")]
    ConcurrentDrinking {
        file: String,
        line: usize,
        philosopher: usize,
        neighbor: usize,
    },

    #[error("{file}: {cause}")]
    Io {
        file: String,
        #[source]
        cause: io::Error,
    },
}

impl VerifyError {
    /// True for the one outcome that means the candidate solution is wrong,
    /// as opposed to its inputs being unusable.
    pub fn is_safety_violation(&self) -> bool {
        matches!(self, VerifyError::ConcurrentDrinking { .. })
    }

    pub(crate) fn io(file: &str, cause: io::Error) -> VerifyError {
        VerifyError::Io {
            file: file.to_string(),
            cause,
        }
    }
}
