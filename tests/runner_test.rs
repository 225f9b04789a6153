//! Process adapter behavior against real commands.
//!
//! `echo` stands in for the miner: the adapter appends its own arguments, so
//! `echo <key>` prints the key as the first whitespace-delimited token,
//! exactly where a real miner's `--simple-output` line puts it.

use vanity_pool::error::Error;
use vanity_pool::runner::{MinerCommand, Runner};

const BASE_KEY: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
const RESULT_KEY: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

fn miner(command: &[&str]) -> MinerCommand {
    let command: Vec<String> = command.iter().map(|s| s.to_string()).collect();
    MinerCommand::from_command(&command).unwrap()
}

#[tokio::test]
async fn first_stdout_token_is_the_result_key() {
    let runner = miner(&["echo", RESULT_KEY]);
    let key = runner.mine(BASE_KEY, "1abc.").await.unwrap();
    assert_eq!(key, RESULT_KEY);
}

#[tokio::test]
async fn empty_output_is_computation_failed() {
    let runner = miner(&["true"]);
    assert!(matches!(
        runner.mine(BASE_KEY, "1abc.").await,
        Err(Error::ComputationFailed(_))
    ));
}

#[tokio::test]
async fn non_key_output_is_computation_failed() {
    let runner = miner(&["echo", "no luck today"]);
    assert!(matches!(
        runner.mine(BASE_KEY, "1abc.").await,
        Err(Error::ComputationFailed(_))
    ));
}

#[tokio::test]
async fn missing_binary_is_launch_failed() {
    let runner = miner(&["/nonexistent/vanity-miner"]);
    assert!(matches!(
        runner.mine(BASE_KEY, "1abc.").await,
        Err(Error::LaunchFailed(_))
    ));
}

#[test]
fn empty_command_is_a_config_error() {
    assert!(matches!(
        MinerCommand::from_command(&[]),
        Err(Error::Config(_))
    ));
}
