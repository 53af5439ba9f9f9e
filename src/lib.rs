//! timelog - Reports over a plain-text time-tracking log
//!
//! Parses day-delimited entries of category, duration and comment, collapses
//! synonymous names, and totals the time by day, week and comment.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TimelogError;
