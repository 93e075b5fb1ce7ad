use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::common::State;
use crate::error::{PuzzleError, Result};

const CSV_HEADER: &str = "initial,algorithm,nodes_explored,moves,time_us";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub algorithm: &'static str,
    pub nodes_explored: usize,
    /// `None` when the search failed.
    pub moves: Option<usize>,
    pub time_us: u128,
}

impl Stats {
    pub(crate) fn print(&self) {
        match self.moves {
            Some(moves) => info!(
                "{} Nodes explored {:?} Moves {:?} Time(microseconds) {:?}",
                self.algorithm, self.nodes_explored, moves, self.time_us
            ),
            None => info!(
                "{} Nodes explored {:?} no solution Time(microseconds) {:?}",
                self.algorithm, self.nodes_explored, self.time_us
            ),
        }
    }

    fn csv_row(&self, initial: &State) -> String {
        let moves = self.moves.map(|m| m.to_string()).unwrap_or_default();
        format!(
            "{},{},{},{},{}",
            initial, self.algorithm, self.nodes_explored, moves, self.time_us
        )
    }
}

/// Appends one row per algorithm to `path`, writing the header first when the
/// file is new or empty.
pub fn write_csv(stats: &[Stats], initial: &State, path: &str) -> Result<()> {
    let io_error = |operation: &str| {
        let operation = format!("{operation} {path}");
        move |source| PuzzleError::Io { operation, source }
    };

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error("create directory for"))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error("open"))?;
    let is_empty = file.metadata().map_err(io_error("inspect"))?.len() == 0;

    let mut contents = String::new();
    if is_empty {
        contents.push_str(CSV_HEADER);
        contents.push('\n');
    }
    for stat in stats {
        contents.push_str(&stat.csv_row(initial));
        contents.push('\n');
    }
    file.write_all(contents.as_bytes())
        .map_err(io_error("write"))
}
