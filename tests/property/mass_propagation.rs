use std::collections::BTreeSet;

use proptest::prelude::*;
use sankeydag::build_graph;
use sankeydag::config::ConfigFile;
use sankeydag::errors::SankeyDagError;
use sankeydag_test_utils::builders::OutlineBuilder;

/// One directive: (dependent, dependency, effort, uncertainty in tenths).
type Directive = (usize, usize, Option<u64>, Option<u8>);

// Strategy for acyclic outlines: task N may only depend on tasks 0..N.
fn dag_outline_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Directive>> {
    (2..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            (
                1..num_tasks,
                any::<usize>(),
                proptest::option::of(0u64..50),
                proptest::option::of(0u8..20),
            ),
            1..(num_tasks * 2),
        )
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(dependent, dep_seed, effort, uncertainty)| {
                    // Sanitize: only allow dependencies < dependent.
                    (dependent, dep_seed % dependent, effort, uncertainty)
                })
                .collect()
        })
    })
}

fn outline(directives: &[Directive]) -> String {
    let mut builder = OutlineBuilder::new().heading("generated");
    for &(dependent, dependency, effort, uncertainty) in directives {
        builder = builder.depends(
            &format!("task_{dependent}"),
            &format!("task_{dependency}"),
            effort,
            effort.and(uncertainty).map(|u| f64::from(u) / 10.0),
        );
    }
    builder.build()
}

proptest! {
    #[test]
    fn acyclic_outlines_always_aggregate(directives in dag_outline_strategy(12)) {
        let text = outline(&directives);
        let graph = build_graph(&text, &ConfigFile::default()).unwrap();

        prop_assert_eq!(graph.edges().len(), directives.len());

        let names: BTreeSet<String> = directives
            .iter()
            .flat_map(|&(a, b, _, _)| [format!("task_{a}"), format!("task_{b}")])
            .collect();
        prop_assert_eq!(graph.nodes().len(), names.len());
    }

    #[test]
    fn mass_is_own_plus_dependency_masses(directives in dag_outline_strategy(12)) {
        let text = outline(&directives);
        let graph = build_graph(&text, &ConfigFile::default()).unwrap();

        for node in graph.nodes() {
            let meta = node.metadata;
            prop_assert!((meta.mass - (meta.own_mass + meta.downstream_mass)).abs() < 1e-9);
            prop_assert!(meta.own_mass >= 0.0);
            prop_assert!(meta.mass >= meta.own_mass);

            let deps: BTreeSet<usize> = graph
                .edges()
                .iter()
                .filter(|e| graph.target_of(e).name == node.name)
                .map(|e| e.source)
                .collect();
            let expected: f64 = deps.iter().map(|&id| graph.nodes()[id].mass()).sum();
            prop_assert!((meta.downstream_mass - expected).abs() < 1e-6);
        }

        for edge in graph.edges() {
            prop_assert_eq!(edge.value, graph.source_of(edge).mass());
        }
    }

    #[test]
    fn evaluation_is_idempotent(directives in dag_outline_strategy(10)) {
        let text = outline(&directives);
        let first = build_graph(&text, &ConfigFile::default()).unwrap();
        let second = build_graph(&text, &ConfigFile::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn closing_a_chain_is_always_rejected(len in 1usize..8) {
        // task_0 <- task_1 <- ... <- task_len, then task_0 depends on task_len.
        let mut builder = OutlineBuilder::new();
        for i in 1..=len {
            builder = builder.edge(&format!("task_{i}"), &format!("task_{}", i - 1));
        }
        builder = builder.edge("task_0", &format!("task_{len}"));

        let result = build_graph(&builder.build(), &ConfigFile::default());
        let is_cycle = matches!(result, Err(SankeyDagError::CyclicGraph { .. }));
        prop_assert!(is_cycle);
    }
}
