//! # fraudlens-bench
//!
//! Benchmarks for the fraudlens scoring pipeline.
//! Contains a deterministic synthetic transaction generator shared by the
//! criterion benches and by integration tests that need realistic batches.

pub mod fixtures;

pub use fixtures::{generate_transactions, FixtureSize, SimpleRng, TransactionFixture};
