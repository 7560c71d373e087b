// tests/integration/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;

use sankeydag::build_graph;
use sankeydag::config::{load_and_validate, resolve_config};
use sankeydag::types::{OutputFormat, ZeroMetadataPolicy};
use sankeydag_test_utils::builders::ConfigFileBuilder;

use crate::common::init_tracing;

#[test]
fn loads_config_from_file() {
    init_tracing();

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[parse]
zero_metadata = "drop"

[mass]
default_median = 3.0

[output]
format = "text"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.parse.zero_metadata, ZeroMetadataPolicy::Drop);
    assert_eq!(cfg.parse.bullet, "* ");
    assert_eq!(cfg.mass.default_median, 3.0);
    assert_eq!(cfg.output.format, OutputFormat::Text);
}

#[test]
fn explicit_config_path_is_honoured() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[mass]\ndefault_median = 7.0\n").unwrap();

    let cfg = resolve_config(Some(file.path())).unwrap();
    assert_eq!(cfg.mass.default_median, 7.0);
}

#[test]
fn default_median_drives_imputation() {
    let cfg = ConfigFileBuilder::new().default_median(2.0).build();
    let graph = build_graph("* B > A\n", &cfg).unwrap();

    assert_eq!(graph.node("A").unwrap().mass(), 2.0);
    assert_eq!(graph.node("B").unwrap().mass(), 4.0);
}

#[test]
fn drop_policy_sends_zero_effort_to_the_median() {
    let text = "* B > A [0]\n* C > B [4]\n";

    let keep = build_graph(text, &ConfigFileBuilder::new().build()).unwrap();
    assert_eq!(keep.node("A").unwrap().metadata.own_mass, 0.0);
    assert!(!keep.node("A").unwrap().metadata.imputed);

    let drop = build_graph(
        text,
        &ConfigFileBuilder::new()
            .zero_metadata(ZeroMetadataPolicy::Drop)
            .build(),
    )
    .unwrap();
    let a = drop.node("A").unwrap().metadata;
    assert!(a.imputed);
    assert_eq!(a.own_mass, 4.0);
}

#[test]
fn custom_syntax_from_config() {
    let cfg = ConfigFileBuilder::new()
        .bullet("- ")
        .separator(" needs ")
        .build();
    let graph = build_graph("- Ship needs Build [3]\n* Ship > Build\n", &cfg).unwrap();

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.node("Build").unwrap().metadata.effort, Some(3));
}
