//! Command modules for the repo-props CLI.
//!
//! - `properties_cmd`: reading, setting and clearing repository custom property values

pub mod properties_cmd;
