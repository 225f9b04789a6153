//! # vanity-pool
//!
//! Pooled front-end for an external vanity-address miner. Callers poll with
//! a base public key and an address prefix; identical requests share a
//! single computation, and a strict-FIFO single worker drains the queue one
//! miner invocation at a time.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod runner;
pub mod telemetry;
pub mod validate;
