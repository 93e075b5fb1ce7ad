use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Deserialize;

use crate::solver::AlgorithmKind;

#[derive(Parser, Debug)]
#[command(
    name = "8-Puzzle Solver",
    about = "Solve the 8-puzzle with BFS, IDDFS, greedy best-first and A* search.",
    version = "1.0"
)]
pub struct Cli {
    #[arg(help = "Initial state: nine digits 0-8 in reading order, 0 is the blank")]
    pub tiles: Vec<String>,

    #[arg(long, help = "Path to a YAML config file")]
    pub config: Option<String>,

    #[arg(
        long,
        help = "Algorithms to run (bfs, iddfs, gbfs, astar)",
        use_value_delimiter = true
    )]
    pub algorithms: Vec<String>,

    #[arg(long, help = "Append per-algorithm statistics to this CSV file")]
    pub output_path: Option<String>,

    #[arg(
        long,
        help = "Solve a random solvable instance instead of reading tiles",
        default_value_t = false
    )]
    pub random: bool,

    #[arg(long, help = "Seed for the random instance generator")]
    pub seed: Option<u64>,

    #[arg(long, help = "Depth limit after which IDDFS stops deepening")]
    pub iddfs_max_depth: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub initial: Option<String>,
    pub algorithms: Vec<AlgorithmKind>,
    pub output_path: Option<String>,
    pub random: bool,
    pub seed: u64,
    pub iddfs_max_depth: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial: None,
            algorithms: AlgorithmKind::ALL.to_vec(),
            output_path: None,
            random: false,
            seed: 0,
            iddfs_max_depth: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid YAML config")
    }

    /// Values given on the command line win over the config file.
    pub fn override_from_command_line(mut self, cli: &Cli) -> anyhow::Result<Self> {
        if !cli.tiles.is_empty() {
            self.initial = Some(cli.tiles.join(" "));
        }
        if !cli.algorithms.is_empty() {
            self.algorithms = cli
                .algorithms
                .iter()
                .map(|name| name.parse::<AlgorithmKind>())
                .collect::<Result<_, _>>()?;
        }
        if cli.output_path.is_some() {
            self.output_path = cli.output_path.clone();
        }
        if cli.random {
            self.random = true;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if cli.iddfs_max_depth.is_some() {
            self.iddfs_max_depth = cli.iddfs_max_depth;
        }
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.algorithms.is_empty() {
            return Err(anyhow!("At least one algorithm must be selected"));
        }
        if self.random && self.initial.is_some() {
            return Err(anyhow!(
                "Initial tiles and --random are mutually exclusive, got tiles {:?}",
                self.initial.as_deref().unwrap_or_default()
            ));
        }
        Ok(())
    }

    /// Selected algorithms, deduplicated, in report order.
    pub fn ordered_algorithms(&self) -> Vec<AlgorithmKind> {
        let mut algorithms = self.algorithms.clone();
        algorithms.sort();
        algorithms.dedup();
        algorithms
    }
}
