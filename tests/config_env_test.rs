//! Configuration resolved from real process environment variables.

use gimme::cli::parse_args;
use gimme::config::{ClientConfig, FetchMode, ENV_API_BASE, ENV_FETCH_MODE, ENV_TIMEOUT_SECS};
use serial_test::serial;
use std::time::Duration;

fn clear_env() {
    for key in [ENV_API_BASE, ENV_TIMEOUT_SECS, ENV_FETCH_MODE] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    std::env::set_var(ENV_API_BASE, "http://catalog.test:9000/");
    std::env::set_var(ENV_TIMEOUT_SECS, "4");
    std::env::set_var(ENV_FETCH_MODE, "parallel");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.base_url(), "http://catalog.test:9000");
    assert_eq!(config.timeout, Duration::from_secs(4));
    assert_eq!(config.fetch_mode, FetchMode::Parallel);
}

#[test]
#[serial]
fn test_from_env_invalid_mode_is_an_error() {
    clear_env();
    std::env::set_var(ENV_FETCH_MODE, "eventually");
    let result = ClientConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cli_flags_override_environment() {
    clear_env();
    std::env::set_var(ENV_API_BASE, "http://from-env.test");

    let args = ["gimme", "--api-base", "http://from-flag.test", "--parallel"]
        .iter()
        .map(|s| s.to_string());
    let options = parse_args(args).unwrap();
    let config = options.apply(ClientConfig::from_env().unwrap());
    clear_env();

    assert_eq!(config.base_url(), "http://from-flag.test");
    assert_eq!(config.fetch_mode, FetchMode::Parallel);
}
