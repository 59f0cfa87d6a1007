//! Installs the process-global subscriber, so it runs in its own test binary.

use project_settings::LogLevel;
use project_settings::logging;

#[test]
fn test_second_init_is_an_error() {
    logging::init(LogLevel::Warning).unwrap();

    let err = logging::init(LogLevel::Debug).unwrap_err();
    assert!(err.to_string().contains("already installed"));
}
