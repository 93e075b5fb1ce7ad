mod astar;
mod bfs;
mod frontier;
mod gbfs;
mod iddfs;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use gbfs::GreedyBestFirst;
pub use iddfs::{depth_limited_search, IterativeDeepening, LimitOutcome};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::common::{Node, Path, State, BLANK};
use crate::error::PuzzleError;
use crate::problem::Problem;

/// A root-to-goal path and the number of nodes the search explored to find it.
#[derive(Debug, Clone)]
pub struct Solution {
    pub path: Path,
    pub nodes_explored: usize,
}

impl Solution {
    pub(crate) fn from_node(node: &Node, nodes_explored: usize) -> Self {
        Solution {
            path: node.path(),
            nodes_explored,
        }
    }

    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn final_state(&self) -> Option<&State> {
        self.path.last().map(|(state, _)| state)
    }

    /// Label of the tile that slid at each step, found by diffing
    /// consecutive states for the changed non-blank cell.
    pub fn moved_tiles(&self) -> Vec<u8> {
        self.path
            .windows(2)
            .filter_map(|pair| {
                let (previous, _) = &pair[0];
                let (current, _) = &pair[1];
                current
                    .tiles()
                    .iter()
                    .zip(previous.tiles())
                    .find(|(now, before)| now != before && **now != BLANK)
                    .map(|(now, _)| *now)
            })
            .collect()
    }
}

/// The search ran out of frontier (or depth) without reaching the goal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no solution found after exploring {nodes_explored} nodes")]
pub struct SearchFailure {
    pub nodes_explored: usize,
}

pub type SearchResult = std::result::Result<Solution, SearchFailure>;

pub trait Solver {
    fn name(&self) -> &'static str;
    fn solve(&self, problem: &Problem) -> SearchResult;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Bfs,
    Iddfs,
    Gbfs,
    Astar,
}

impl AlgorithmKind {
    /// Report order.
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Iddfs,
        AlgorithmKind::Gbfs,
        AlgorithmKind::Astar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::Iddfs => "IDDFS",
            AlgorithmKind::Gbfs => "GBFS",
            AlgorithmKind::Astar => "A*",
        }
    }

    pub fn build(self, problem: &Problem, iddfs_max_depth: Option<usize>) -> Box<dyn Solver> {
        match self {
            AlgorithmKind::Bfs => Box::new(BreadthFirst),
            AlgorithmKind::Iddfs => Box::new(IterativeDeepening::new(iddfs_max_depth)),
            AlgorithmKind::Gbfs => Box::new(GreedyBestFirst::new(problem.out_of_row_and_column())),
            AlgorithmKind::Astar => Box::new(AStar::new(problem.out_of_row_and_column())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(AlgorithmKind::Bfs),
            "iddfs" | "ids" => Ok(AlgorithmKind::Iddfs),
            "gbfs" | "greedy" => Ok(AlgorithmKind::Gbfs),
            "astar" | "a*" => Ok(AlgorithmKind::Astar),
            _ => Err(PuzzleError::UnknownAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
