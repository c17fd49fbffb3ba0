//! Bubble Trace - an interactive, step-by-step Bubble Sort visualizer.
//!
//! This library provides the number-list parser, the tracing bubble sort
//! engine, and the web form that drives them.

pub mod config;
pub mod engine;
pub mod input;
pub mod render;
pub mod server;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
