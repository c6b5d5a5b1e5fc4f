//! # tsbind Bench
//!
//! Synthetic declaration graphs for tsbind performance testing.

pub mod graphs;
