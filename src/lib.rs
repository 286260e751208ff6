pub mod aggregator;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod fixtures;
pub mod input;
pub mod job;
pub mod mocks;
pub mod normalizer;
pub mod report;
pub mod spinner;
