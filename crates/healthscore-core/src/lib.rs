//! healthscore-core
//!
//! Pure domain types for the health-risk scoring engine. No I/O.
//! Assessment definitions, responses, scoring results and the error
//! vocabulary shared by every other crate in the workspace.

pub mod error;
pub mod models;
