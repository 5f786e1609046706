//! healthscore-engine
//!
//! Deterministic multi-factor risk scoring. Turns a response set into a
//! normalized 0–100 score, an urgency tier, contributing risk factors and
//! ordered recommendations, with an emergency override that no score can
//! suppress.
//!
//! Pipeline: [`validate`] → [`normalize`] → [`aggregate`] → [`emergency`]
//! → [`classify`] → [`generate`], composed by [`orchestrate::score`].
//! Every stage is a pure function; the only shared state is the
//! read-only [`registry::Registry`].

pub mod aggregate;
pub mod classify;
pub mod emergency;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod orchestrate;
pub mod predicate;
pub mod registry;
pub mod validate;

pub use orchestrate::score;
pub use registry::{Registry, SharedRegistry};
