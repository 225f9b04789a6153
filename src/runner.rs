//! Miner invocation: the boundary between the pool and the actual search.
//!
//! The pool only ever sees a function from (base key, prefix) to one
//! asynchronous outcome. The production binding spawns the configured
//! external miner process; tests substitute scripted runners.

use std::future::Future;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::validate;

/// One mining attempt. Resolves exactly once, to a 64-hex result key or an
/// error, after unbounded but finite time.
pub trait Runner: Send + Sync + 'static {
    fn mine(&self, base_key: &str, prefix: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Process-spawning runner. Runs
/// `<program> <args...> --simple-output <prefix> --public-offset <base_key>`
/// and takes the first whitespace-delimited token of stdout as the key.
#[derive(Debug, Clone)]
pub struct MinerCommand {
    program: String,
    args: Vec<String>,
}

impl MinerCommand {
    /// Build from a configured command array (program + leading args).
    pub fn from_command(command: &[String]) -> Result<Self> {
        let Some((program, args)) = command.split_first() else {
            return Err(Error::Config("miner_command must not be empty".to_string()));
        };
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl Runner for MinerCommand {
    fn mine(&self, base_key: &str, prefix: &str) -> impl Future<Output = Result<String>> + Send {
        async move {
            debug!(program = %self.program, prefix, "spawning miner");

            // stderr is inherited so miner progress output lands in the
            // operator's terminal; stdout carries only the result line.
            let output = Command::new(&self.program)
                .args(&self.args)
                .arg("--simple-output")
                .arg(prefix)
                .arg("--public-offset")
                .arg(base_key)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit())
                .output()
                .await
                .map_err(Error::LaunchFailed)?;

            let stdout = String::from_utf8_lossy(&output.stdout);
            let key = stdout.split_whitespace().next().unwrap_or("");
            if validate::validate_base_key(key).is_err() {
                return Err(Error::ComputationFailed(format!(
                    "exit status {}, output {:?}",
                    output.status,
                    stdout.trim_end()
                )));
            }
            Ok(key.to_string())
        }
    }
}
