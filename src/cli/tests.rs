use super::{action_from_args, build_config_from_args, create_app, Action};
use crate::error::HutError;
use std::time::Duration;

fn matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["hutres", "-u", "test@test.net", "-p", "password"];
    argv.extend_from_slice(args);
    create_app()
        .try_get_matches_from(argv)
        .expect("arguments should parse")
}

#[test]
fn defaults_target_public_service() {
    let config = build_config_from_args(&matches(&[])).expect("config");
    assert_eq!(config.base_url, "https://www.hut-reservation.org");
    assert_eq!(config.user_agent, "Mozilla/5.0");
    assert_eq!(config.credentials.username, "test@test.net");
    assert_eq!(config.credentials.password, "password");
    assert_eq!(config.timeout, Duration::from_secs(20));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert!(!config.output.json);
}

#[test]
fn options_override_defaults() {
    let config = build_config_from_args(&matches(&[
        "--base-url",
        "http://127.0.0.1:9000",
        "-A",
        "hutres-test",
        "-H",
        "X-Trace: 1",
        "--timeout",
        "1m",
        "--json",
        "--pretty",
    ]))
    .expect("config");
    assert_eq!(config.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.user_agent, "hutres-test");
    assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("1"));
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!(config.output.json);
    assert!(config.output.pretty);
}

#[test]
fn bad_timeout_is_config_error() {
    let err = build_config_from_args(&matches(&["--timeout", "soon"])).expect_err("bad timeout");
    assert!(matches!(err, HutError::Config(_)));
}

#[test]
fn missing_credentials_fail_to_parse() {
    let result = create_app().try_get_matches_from(["hutres", "-u", "test@test.net"]);
    if std::env::var_os("HUT_PASSWORD").is_none() {
        assert!(result.is_err());
    }
}

#[test]
fn subcommands_select_action() {
    assert_eq!(action_from_args(&matches(&[])), Action::Overview);
    assert_eq!(action_from_args(&matches(&["overview"])), Action::Overview);
    assert_eq!(
        action_from_args(&matches(&["hut-info", "42"])),
        Action::HutInfo("42".to_string())
    );
    assert_eq!(
        action_from_args(&matches(&["availability", "42"])),
        Action::Availability("42".to_string())
    );
}
