//! Unit tests for common-config crate

use std::io::Write;

use common_config::{
    AdjacencyMode, EdgePolicy, GraphConfig, LoggingConfig, SkeinConfig, StorageConfig,
    TraversalConfig,
};
use common_error::SkeinError;

#[test]
fn test_skein_config_default() {
    let config = SkeinConfig::default();

    assert_eq!(config.graph.edge_policy, EdgePolicy::Tolerate);
    assert_eq!(config.traversal.adjacency, AdjacencyMode::Indexed);
    assert_eq!(config.storage.max_open_handles, None);
    assert_eq!(config.logging.filter, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_enum_defaults() {
    assert_eq!(EdgePolicy::default(), EdgePolicy::Tolerate);
    assert_eq!(AdjacencyMode::default(), AdjacencyMode::Indexed);
}

#[test]
fn test_config_serialization() {
    let config = SkeinConfig::default()
        .with_edge_policy(EdgePolicy::Validate)
        .with_adjacency(AdjacencyMode::Scan)
        .with_max_open_handles(Some(4));

    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"validate\""));
    assert!(json.contains("\"scan\""));

    let deserialized: SkeinConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

#[test]
fn test_config_partial_json() {
    let json = r#"{
        "traversal": { "adjacency": "scan" },
        "storage": {}
    }"#;

    let config = SkeinConfig::from_json_str(json).unwrap();
    assert_eq!(config.traversal.adjacency, AdjacencyMode::Scan);
    // Missing sections and fields fall back to defaults
    assert_eq!(config.graph, GraphConfig::default());
    assert_eq!(config.storage, StorageConfig::default());
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_config_empty_document() {
    let config = SkeinConfig::from_json_str("{}").unwrap();
    assert_eq!(config, SkeinConfig::default());
}

#[test]
fn test_invalid_policy_deserialization() {
    let json = r#"{ "graph": { "edge_policy": "strict" } }"#;
    let err = SkeinConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, SkeinError::SerdeJsonError(_)));
}

#[test]
fn test_zero_handle_budget_rejected() {
    let json = r#"{ "storage": { "max_open_handles": 0 } }"#;
    let err = SkeinConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, SkeinError::ConfigError(_)));
}

#[test]
fn test_empty_log_filter_rejected() {
    let json = r#"{ "logging": { "filter": "  " } }"#;
    assert!(SkeinConfig::from_json_str(json).is_err());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "graph": {{ "edge_policy": "validate" }},
            "logging": {{ "filter": "skein_engine=debug" }}
        }}"#
    )
    .unwrap();

    let config = SkeinConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.graph.edge_policy, EdgePolicy::Validate);
    assert_eq!(config.logging.filter, "skein_engine=debug");
    assert_eq!(config.traversal, TraversalConfig::default());
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SkeinConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SkeinError::ConfigError(_)));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_config_clone_is_independent() {
    let base = SkeinConfig::default();
    let mut changed = base.clone();
    changed.traversal.adjacency = AdjacencyMode::Scan;

    assert_eq!(base.traversal.adjacency, AdjacencyMode::Indexed);
    assert_eq!(changed.traversal.adjacency, AdjacencyMode::Scan);
}
