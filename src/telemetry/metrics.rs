//! Metric instrument factories for vanity-pool.
//!
//! Uses the OTel Meter API with the globally-registered `MeterProvider`.
//! All instruments are created lazily from the `"vanity-pool"` meter.

use opentelemetry::metrics::{Counter, Histogram, Meter};

/// Returns the shared meter for vanity-pool instruments.
fn meter() -> Meter {
    opentelemetry::global::meter("vanity-pool")
}

/// Counter: polls that created or attached to a job.
/// Labels: `result` ("created" | "attached").
pub fn jobs_submitted() -> Counter<u64> {
    meter()
        .u64_counter("vanity.jobs.submitted")
        .with_description("Number of jobs created or attached to by polls")
        .build()
}

/// Counter: jobs that reached a terminal state.
/// Labels: `outcome` ("completed" | "failed").
pub fn jobs_finished() -> Counter<u64> {
    meter()
        .u64_counter("vanity.jobs.finished")
        .with_description("Number of jobs that reached a terminal state")
        .build()
}

/// Histogram: miner invocation duration in milliseconds.
pub fn mine_duration_ms() -> Histogram<f64> {
    meter()
        .f64_histogram("vanity.mine.duration_ms")
        .with_description("Miner invocation duration in milliseconds")
        .with_unit("ms")
        .build()
}
