//! The mining pool: deduplicating job store, submission gate, drain loop.
//!
//! One identity, one computation, ever. Polling is also how work is
//! submitted: the first poll for an unseen identity creates and queues the
//! job; every later poll (from any caller) attaches to it.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Instant;

use opentelemetry::KeyValue;
use parking_lot::Mutex;
use tracing::{Instrument, error, info, warn};

use crate::error::{Error, Result};
use crate::model::{JobState, RequestId};
use crate::runner::Runner;
use crate::telemetry::job::start_mine_span;
use crate::telemetry::metrics;
use crate::validate;

/// Shared mutable state. Touched only under the pool mutex, which is never
/// held across an await, so check-then-mutate sequences are atomic.
struct PoolState {
    /// Job store: identity → status. Memoize-forever, no eviction.
    jobs: HashMap<RequestId, JobState>,
    /// Identities awaiting execution, strict FIFO.
    queue: VecDeque<RequestId>,
    /// Re-entrancy guard: true while a drain task is alive.
    draining: bool,
}

/// Caller-safe message stored for any mining-time failure. Full detail goes
/// to the operator log, never to pollers.
const MINING_ERROR: &str = "internal mining error";

pub struct MiningPool<R> {
    runner: R,
    max_bits: u32,
    state: Mutex<PoolState>,
}

impl<R: Runner> MiningPool<R> {
    pub fn new(runner: R, max_bits: u32) -> Arc<Self> {
        Arc::new(Self {
            runner,
            max_bits,
            state: Mutex::new(PoolState {
                jobs: HashMap::new(),
                queue: VecDeque::new(),
                draining: false,
            }),
        })
    }

    /// Configured bit budget, as advertised by /v1/info.
    pub fn max_bits(&self) -> u32 {
        self.max_bits
    }

    /// Query-or-submit. Validates, then under one lock either attaches to the
    /// existing job for this identity or creates a `Pending` entry and queues
    /// it. Starts the drain loop if it is idle.
    ///
    /// Validation and budget failures create nothing and touch nothing.
    pub fn poll(self: &Arc<Self>, base_key: &str, prefix: &str) -> Result<JobState> {
        let id = RequestId::checked(base_key, prefix)?;
        let bits = validate::bit_cost(id.prefix());
        if bits > self.max_bits {
            return Err(Error::BudgetExceeded {
                bits,
                max: self.max_bits,
            });
        }

        let spawn_drain = {
            let mut state = self.state.lock();
            if let Some(job) = state.jobs.get(&id) {
                metrics::jobs_submitted().add(1, &[KeyValue::new("result", "attached")]);
                return Ok(job.clone());
            }

            // First sighting: insert + enqueue under the same lock so two
            // concurrent polls can never both queue this identity.
            state.jobs.insert(id.clone(), JobState::Pending);
            state.queue.push_back(id.clone());
            let idle = !state.draining;
            if idle {
                state.draining = true;
            }
            idle
        };

        info!(%id, bits, "job queued");
        metrics::jobs_submitted().add(1, &[KeyValue::new("result", "created")]);

        if spawn_drain {
            let pool = Arc::clone(self);
            tokio::spawn(async move { pool.drain().await });
        }
        Ok(JobState::Pending)
    }

    /// Current state of a job, without creating one. `None` means the
    /// identity has never been submitted.
    pub fn status(&self, id: &RequestId) -> Option<JobState> {
        self.state.lock().jobs.get(id).cloned()
    }

    /// Number of identities ever admitted to the job store.
    pub fn job_count(&self) -> usize {
        self.state.lock().jobs.len()
    }

    /// Number of identities currently awaiting execution.
    pub fn queue_len(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Drain the queue one job at a time. At most one instance of this task
    /// runs; it exits when the queue empties (clearing the guard under the
    /// same lock that observed emptiness) and is respawned by the next poll
    /// that finds the pool idle.
    async fn drain(self: Arc<Self>) {
        loop {
            let id = {
                let mut state = self.state.lock();
                match state.queue.pop_front() {
                    Some(id) => id,
                    None => {
                        state.draining = false;
                        return;
                    }
                }
            };

            // Identities are validated at the gate, so this only fires if an
            // invariant broke. Record a terminal failure rather than leave
            // the entry pending forever.
            if let Err(err) = validate::validate_base_key(id.base_key())
                .and_then(|()| validate::validate_prefix(id.prefix()))
            {
                warn!(%id, %err, "malformed identity in queue");
                self.finish(id, JobState::Failed { error: MINING_ERROR.to_string() });
                continue;
            }

            let bits = validate::bit_cost(id.prefix());
            let span = start_mine_span(id.prefix(), bits);
            let started = Instant::now();
            let outcome = self
                .runner
                .mine(id.base_key(), id.prefix())
                .instrument(span)
                .await;
            let duration_ms = started.elapsed().as_millis() as u64;

            // A job failure is never fatal: record it and move on.
            let next = match outcome {
                Ok(result) => {
                    info!(%id, duration_ms, "mining complete");
                    metrics::jobs_finished().add(1, &[KeyValue::new("outcome", "completed")]);
                    JobState::Completed { result }
                }
                Err(err) => {
                    error!(%id, duration_ms, %err, "mining failed");
                    metrics::jobs_finished().add(1, &[KeyValue::new("outcome", "failed")]);
                    JobState::Failed { error: MINING_ERROR.to_string() }
                }
            };
            metrics::mine_duration_ms().record(duration_ms as f64, &[]);
            self.finish(id, next);
        }
    }

    /// Write a terminal state over the `Pending` placeholder.
    fn finish(&self, id: RequestId, terminal: JobState) {
        debug_assert!(terminal.is_terminal());
        self.state.lock().jobs.insert(id, terminal);
    }
}
