//! Config loading, defaults, and bit-budget derivation.

use std::path::PathBuf;

use vanity_pool::config::Config;

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "vanity-pool-test-{}-{name}.toml",
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn minimal_config_gets_defaults() {
    let path = write_config("minimal", r#"miner_command = ["nano-vanity"]"#);
    let config = Config::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.port, 8080);
    assert_eq!(config.name, "vanity-pool");
    assert_eq!(config.demand, "none");
    // 1 lead bit + 32 bits for the single default body character
    assert_eq!(config.max_bits(), 33);
}

#[test]
fn max_bits_derived_from_character_limit() {
    let path = write_config(
        "derived",
        r#"
miner_command = ["nano-vanity"]
max_characters = 2
"#,
    );
    let config = Config::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.max_bits(), 65);
}

#[test]
fn explicit_max_bits_wins() {
    let path = write_config(
        "explicit",
        r#"
miner_command = ["nano-vanity"]
max_bits = 10
max_characters = 5
"#,
    );
    let config = Config::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.max_bits(), 10);
}

#[test]
fn miner_command_keeps_leading_args() {
    let path = write_config(
        "args",
        r#"
port = 9000
name = "big miner"
miner_command = ["nice", "-n19", "nano-vanity"]
"#,
    );
    let config = Config::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.port, 9000);
    assert_eq!(config.name, "big miner");
    assert_eq!(config.miner_command, vec!["nice", "-n19", "nano-vanity"]);
}

#[test]
fn empty_miner_command_is_rejected() {
    let path = write_config("empty", "miner_command = []");
    let result = Config::load(&path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}

#[test]
fn missing_file_is_rejected() {
    assert!(Config::load(&PathBuf::from("/nonexistent/config.toml")).is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let path = write_config(
        "unknown",
        r#"
miner_command = ["nano-vanity"]
max_bitz = 10
"#,
    );
    let result = Config::load(&path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}
