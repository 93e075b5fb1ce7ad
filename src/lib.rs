pub mod common;
pub mod config;
pub mod error;
pub mod problem;
pub mod runner;
pub mod scenario;
pub mod solver;
pub mod stat;
