use std::io::{self, Write};
use std::time::Instant;

use tracing::{info, instrument};

use crate::config::Config;
use crate::error::{PuzzleError, Result};
use crate::problem::Problem;
use crate::solver::{AlgorithmKind, SearchResult};
use crate::stat::Stats;

/// Runs the configured algorithms in report order against one problem,
/// writing the plain-text report to `out`. A failed search is reported and
/// the remaining algorithms still run.
#[instrument(skip_all, name = "run_all", fields(initial = %problem.initial()), level = "debug")]
pub fn run_all<W: Write>(problem: &Problem, config: &Config, out: &mut W) -> Result<Vec<Stats>> {
    let mut all_stats = Vec::new();

    for kind in config.ordered_algorithms() {
        let stats = run_one(problem, kind, config.iddfs_max_depth, out).map_err(|source| {
            PuzzleError::Io {
                operation: format!("write {} report", kind.name()),
                source,
            }
        })?;
        stats.print();
        all_stats.push(stats);
    }

    Ok(all_stats)
}

fn run_one<W: Write>(
    problem: &Problem,
    kind: AlgorithmKind,
    iddfs_max_depth: Option<usize>,
    out: &mut W,
) -> io::Result<Stats> {
    let solver = kind.build(problem, iddfs_max_depth);
    info!("running {}", solver.name());

    let start_time = Instant::now();
    let result = solver.solve(problem);
    let time_us = start_time.elapsed().as_micros();

    write_report(out, solver.name(), &result)?;

    Ok(match result {
        Ok(solution) => Stats {
            algorithm: solver.name(),
            nodes_explored: solution.nodes_explored,
            moves: Some(solution.move_count()),
            time_us,
        },
        Err(failure) => Stats {
            algorithm: solver.name(),
            nodes_explored: failure.nodes_explored,
            moves: None,
            time_us,
        },
    })
}

pub fn write_report<W: Write>(out: &mut W, name: &str, result: &SearchResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Algorithm: {name}")?;
    match result {
        Ok(solution) => {
            writeln!(out, "Nodes explored: {}", solution.nodes_explored)?;
            let moves: Vec<String> = solution
                .moved_tiles()
                .iter()
                .map(|tile| tile.to_string())
                .collect();
            writeln!(out, "Path to solution: {}", moves.join(" -> "))?;
        }
        Err(failure) => {
            writeln!(out, "Nodes explored: {}", failure.nodes_explored)?;
            writeln!(out, "Solution not found.")?;
        }
    }
    Ok(())
}
