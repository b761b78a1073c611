use log::LevelFilter;

use crate::log_level;

#[test]
fn log_level_defaults_to_warn() {
    assert_eq!(log_level(0, false), LevelFilter::Warn);
}

#[test]
fn log_level_rises_with_verbosity() {
    assert_eq!(log_level(1, false), LevelFilter::Info);
    assert_eq!(log_level(2, false), LevelFilter::Debug);
    assert_eq!(log_level(3, false), LevelFilter::Trace);
    assert_eq!(log_level(9, false), LevelFilter::Trace);
}

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(log_level(2, true), LevelFilter::Error);
}
