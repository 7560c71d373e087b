// src/output/text.rs

use std::fmt::Write;

use crate::dag::MassGraph;

/// Terminal table: one row per node, then the edge list.
pub fn graph_to_text(graph: &MassGraph) -> String {
    let mut out = String::new();

    if graph.is_empty() {
        out.push_str("(empty graph)\n");
        return out;
    }

    let width = graph
        .nodes()
        .iter()
        .map(|n| n.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("task".len());

    let _ = writeln!(
        out,
        "{:<width$}  {:>10}  {:>10}  {:>10}",
        "task", "own", "downstream", "mass"
    );
    for node in graph.nodes() {
        let meta = &node.metadata;
        let marker = if meta.imputed { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<width$}  {:>10}  {:>10}  {:>10}",
            node.name,
            format!("{}{}", format_mass(meta.own_mass), marker),
            format_mass(meta.downstream_mass),
            format_mass(meta.mass),
        );
    }

    let _ = writeln!(out);
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "{} -> {} ({})",
            graph.source_of(edge).name,
            graph.target_of(edge).name,
            format_mass(edge.value)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "* imputed with median {}", format_mass(graph.median()));
    out
}

/// Up to two decimals, trailing zeros dropped.
fn format_mass(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
