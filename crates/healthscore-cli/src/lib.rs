//! healthscore-cli
//!
//! Operator binary over the scoring engine: list and inspect assessment
//! definitions, validate definition files and score response sheets.

pub mod commands;
pub mod config;
pub mod logging;
