//! letters-in-squares library crate.
//!
//! Renders grids of letters as images of colored squares, and scores
//! word-guessing boards with duplicate-aware letter classification.

pub mod cli;
pub mod color;
pub mod config;
pub mod render;
pub mod wordle;
