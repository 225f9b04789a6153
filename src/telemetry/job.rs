//! Mining span helpers.

use tracing::Span;

/// Start a span wrapping one miner invocation.
///
/// The base key is deliberately not recorded — the prefix and bit cost are
/// enough to identify a job class without spraying caller keys into traces.
pub fn start_mine_span(prefix: &str, bits: u32) -> Span {
    tracing::info_span!(
        "mine.execute",
        "mine.prefix" = prefix,
        "mine.bits" = bits,
    )
}
