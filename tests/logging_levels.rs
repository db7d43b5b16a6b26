// tests/logging_levels.rs

use taskline::cli::LogLevel;
use taskline::logging::{crate_directive, parse_level_str, resolve_level};
use tracing::Level;

#[test]
fn flag_wins_over_env_and_mode() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error"), true), Level::TRACE);
    assert_eq!(resolve_level(Some(LogLevel::Error), None, false), Level::ERROR);
}

#[test]
fn env_value_is_used_when_no_flag() {
    assert_eq!(resolve_level(None, Some(" Debug "), false), Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning"), false), Level::WARN);
}

#[test]
fn watch_mode_defaults_quieter_than_single_shot() {
    assert_eq!(resolve_level(None, None, false), Level::INFO);
    assert_eq!(resolve_level(None, None, true), Level::WARN);
    // Garbage in the env var falls through to the mode default.
    assert_eq!(resolve_level(None, Some("loud"), true), Level::WARN);
    assert_eq!(parse_level_str("loud"), None);
}

#[test]
fn directive_targets_only_this_crate() {
    assert_eq!(crate_directive(Level::INFO), "taskline=info");
    assert_eq!(crate_directive(Level::TRACE), "taskline=trace");
}
