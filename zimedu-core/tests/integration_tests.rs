//! Integration tests for zimedu-core infrastructure

use zimedu_core::{
    config_error, init_logging, performance, storage_error, ErrorContext, LogFormat,
    LoggingConfig, Role, SessionState, User, ZimEduConfig, ZimEduError,
};

#[tokio::test]
async fn test_error_handling() {
    let error = storage_error!("disk quota exceeded", "test_component");

    match &error {
        ZimEduError::Storage {
            message, context, ..
        } => {
            assert_eq!(message, "disk quota exceeded");
            assert_eq!(context.component, "test_component");
            assert!(!context.error_id.is_empty());
        }
        _ => panic!("Expected Storage error"),
    }

    // Should not panic without a subscriber
    error.log();

    assert!(error.is_recoverable());
    assert_eq!(error.message(), "disk quota exceeded");
    assert_eq!(error.to_string(), "Storage error: disk quota exceeded");

    let config_error = config_error!("Invalid config", "test");
    assert!(!config_error.is_recoverable());
    assert_eq!(
        config_error.context().unwrap().recovery_suggestions.len(),
        2
    );
}

#[test]
fn test_serialization_error_is_not_recoverable() {
    let error: ZimEduError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(!error.is_recoverable());
    assert!(error.context().is_none());
    error.log();
}

#[test]
fn test_error_context_builder() {
    let context = ErrorContext::new("resources")
        .with_operation("add")
        .with_metadata("collection", "resources")
        .with_suggestion("Retry later");

    assert_eq!(context.operation.as_deref(), Some("add"));
    assert_eq!(context.metadata.get("collection").unwrap(), "resources");
    assert_eq!(context.recovery_suggestions, vec!["Retry later".to_string()]);
}

#[tokio::test]
async fn test_logging_initialization() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: LogFormat::Compact,
        include_location: false,
        include_thread: false,
        log_to_file: false,
        log_file_path: None,
        enable_performance_monitoring: false,
        filter_directives: vec!["zimedu_core=debug".to_string()],
    };

    // A global subscriber may already be installed by another test
    let _ = init_logging(&config);
}

#[test]
fn test_logging_to_file_requires_path() {
    let config = LoggingConfig {
        log_to_file: true,
        log_file_path: None,
        ..LoggingConfig::default()
    };

    let err = init_logging(&config).unwrap_err();
    assert!(err.to_string().contains("log_file_path"));
}

#[tokio::test]
async fn test_performance_helpers_return_values() {
    let value = performance::measure_async("async_op", async { 21 * 2 }).await;
    assert_eq!(value, 42);

    let value = performance::measure_sync("sync_op", || "done");
    assert_eq!(value, "done");
}

#[test]
fn test_config_defaults() {
    let config = ZimEduConfig::default();
    assert_eq!(config.session.sign_in_delay_ms, 1000);
    assert_eq!(config.session.sign_up_delay_ms, 1000);
    assert_eq!(config.session.sign_out_delay_ms, 500);
    assert_eq!(config.server.port, 8080);
    assert!(config.catalog.seed_mock_data);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zimedu.toml");

    let mut config = ZimEduConfig::default();
    config.session.sign_in_delay_ms = 250;
    config.server.port = 3000;
    config.save_to_file(&path).unwrap();

    let loaded = ZimEduConfig::from_file(&path).unwrap();
    assert_eq!(loaded.session.sign_in_delay_ms, 250);
    assert_eq!(loaded.server.port, 3000);
}

#[test]
fn test_config_rejects_excessive_delay() {
    let mut config = ZimEduConfig::default();
    config.session.sign_out_delay_ms = 120_000;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ZimEduError::Config { .. }));
    assert!(err.to_string().contains("sign_out_delay_ms"));
    assert!(!err.is_recoverable());
    assert!(err
        .context()
        .unwrap()
        .recovery_suggestions
        .iter()
        .any(|s| s.contains("zimedu config --init")));
}

#[test]
fn test_config_rejects_blank_host() {
    let mut config = ZimEduConfig::default();
    config.server.host = "  ".to_string();

    let err = config.validate().unwrap_err();
    assert_eq!(err.message(), "server.host must not be empty");
}

#[test]
fn test_config_missing_file() {
    let err = ZimEduConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ZimEduError::Config { .. }));
}

#[test]
fn test_role_parsing_and_display() {
    for role in Role::ALL {
        let parsed: Role = role.to_string().parse().unwrap();
        assert_eq!(parsed, role);
    }
    assert_eq!("TEACHER".parse::<Role>().unwrap(), Role::Teacher);
    assert!("admin".parse::<Role>().is_err());
    assert_eq!(serde_json::to_string(&Role::Parent).unwrap(), "\"parent\"");
}

#[test]
fn test_session_state_serialization() {
    let state = SessionState::Authenticated {
        user: User::new("1", "a@b.com", "Test User", Role::Student),
    };
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["status"], "authenticated");
    assert_eq!(json["user"]["role"], "student");

    assert_eq!(
        serde_json::to_value(SessionState::Anonymous).unwrap()["status"],
        "anonymous"
    );
    assert!(SessionState::default().user().is_none());
}
