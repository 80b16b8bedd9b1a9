use vitae::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(logger.log_file().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("Navigation: first".to_string());
    logger.log("Navigation: second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("Dialog: shown".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_log_file_path_is_under_vitae() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("vitae/vitae.log"));
}
