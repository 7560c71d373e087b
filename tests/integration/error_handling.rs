// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use sankeydag::build_graph;
use sankeydag::config::{ConfigFile, load_and_validate};
use sankeydag::errors::SankeyDagError;

#[test]
fn test_dag_cycle_returns_structured_error() {
    let text = "* A > B\n* B > C\n* C > A\n";

    match build_graph(text, &ConfigFile::default()) {
        Err(SankeyDagError::CyclicGraph { cycle }) => {
            assert_eq!(cycle.len(), 4);
            assert_eq!(cycle.first(), cycle.last());
        }
        Err(e) => panic!("Expected CyclicGraph error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_self_dependency_is_a_cycle() {
    let result = build_graph("* A > A\n", &ConfigFile::default());
    match result {
        Err(SankeyDagError::CyclicGraph { cycle }) => assert_eq!(cycle, vec!["A", "A"]),
        other => panic!("Expected CyclicGraph error, got: {:?}", other),
    }
}

#[test]
fn test_invalid_separator_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[parse]
separator = " [ "
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(SankeyDagError::ConfigError(msg)) => {
            assert!(msg.contains("separator"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_unknown_key_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[mass]\nmedian = 2.0\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(SankeyDagError::TomlError(_))
    ));
}

#[test]
fn test_missing_config_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(
        load_and_validate(&path),
        Err(SankeyDagError::IoError(_))
    ));
}

#[test]
fn test_malformed_lines_are_not_errors() {
    let text = "* A > B > C\n* B > A [x]\n* D > C [1|y]\nplain text\n";
    let graph = build_graph(text, &ConfigFile::default()).unwrap();
    assert!(graph.is_empty());
}
