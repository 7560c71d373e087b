// src/dag/graph.rs

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::Direction;
use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::errors::{Result, SankeyDagError};
use crate::outline::edge::TaskName;

/// Index of a task in registration order.
pub type NodeId = usize;

/// Task names in first-seen order plus the dependency arcs between them.
///
/// Arc direction: dependency -> dependent. For `* B > A` we add `A -> B`.
/// Repeated directives for the same pair collapse into a single arc; the
/// caller keeps the individual edges if it needs them.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    names: Vec<TaskName>,
    index: HashMap<TaskName, NodeId>,
    arcs: DiGraphMap<NodeId, ()>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering it if it is new.
    pub fn register(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.arcs.add_node(id);
        id
    }

    /// Record that `dependent` needs `dependency` to be done first.
    pub fn add_dependency(&mut self, dependency: NodeId, dependent: NodeId) {
        self.arcs.add_edge(dependency, dependent, ());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Consume the graph, keeping only the name lookup.
    pub fn into_index(self) -> HashMap<TaskName, NodeId> {
        self.index
    }

    pub fn name_of(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    /// All task names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }

    /// Direct dependencies of `id`, each listed once, in registration order.
    pub fn dependencies_of(&self, id: NodeId) -> Vec<NodeId> {
        self.sorted_neighbors(id, Direction::Incoming)
    }

    /// Direct dependents of `id`, each listed once, in registration order.
    pub fn dependents_of(&self, id: NodeId) -> Vec<NodeId> {
        self.sorted_neighbors(id, Direction::Outgoing)
    }

    fn sorted_neighbors(&self, id: NodeId, direction: Direction) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.arcs.neighbors_directed(id, direction).collect();
        ids.sort_unstable();
        ids
    }

    /// Dependencies before dependents.
    ///
    /// Fails with [`SankeyDagError::CyclicGraph`] naming one offending cycle.
    pub fn topological_order(&self) -> Result<Vec<NodeId>> {
        match toposort(&self.arcs, None) {
            Ok(order) => Ok(order),
            Err(cycle) => {
                let cycle = self
                    .find_cycle()
                    .unwrap_or_else(|| vec![cycle.node_id(), cycle.node_id()]);
                Err(SankeyDagError::CyclicGraph {
                    cycle: cycle
                        .into_iter()
                        .map(|id| self.names[id].clone())
                        .collect(),
                })
            }
        }
    }

    pub fn is_acyclic(&self) -> bool {
        toposort(&self.arcs, None).is_ok()
    }

    /// One cycle as a closed walk `[a, b, ..., a]`, or `None` if acyclic.
    pub fn find_cycle(&self) -> Option<Vec<NodeId>> {
        for component in tarjan_scc(&self.arcs) {
            if component.len() == 1 {
                let id = component[0];
                if self.arcs.contains_edge(id, id) {
                    return Some(vec![id, id]);
                }
                continue;
            }

            let members: HashSet<NodeId> = component.iter().copied().collect();
            let start = component.iter().copied().min()?;
            if let Some(cycle) = self.walk_back_to(start, &members) {
                return Some(cycle);
            }
        }
        None
    }

    /// Shortest path from `start` back to itself that stays inside `members`.
    fn walk_back_to(&self, start: NodeId, members: &HashSet<NodeId>) -> Option<Vec<NodeId>> {
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for next in self.dependents_of(current) {
                if !members.contains(&next) {
                    continue;
                }
                if next == start {
                    let mut path = vec![start];
                    let mut cursor = current;
                    while cursor != start {
                        path.push(cursor);
                        cursor = parent[&cursor];
                    }
                    path.push(start);
                    path.reverse();
                    return Some(path);
                }
                if !parent.contains_key(&next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(pairs: &[(&str, &str)]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for (dependency, dependent) in pairs {
            let a = graph.register(dependency);
            let b = graph.register(dependent);
            graph.add_dependency(a, b);
        }
        graph
    }

    #[test]
    fn registration_order_is_first_seen() {
        let graph = graph_of(&[("A", "B"), ("C", "B"), ("A", "D")]);
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.id_of("C"), Some(2));
        assert_eq!(graph.id_of("Z"), None);
    }

    #[test]
    fn duplicate_arcs_collapse() {
        let graph = graph_of(&[("A", "B"), ("A", "B")]);
        assert_eq!(graph.dependencies_of(1), vec![0]);
        assert_eq!(graph.dependents_of(0), vec![1]);
    }

    #[test]
    fn order_puts_dependencies_first() {
        let graph = graph_of(&[("B", "C"), ("A", "B"), ("A", "C")]);
        let order = graph.topological_order().unwrap();
        let pos = |name: &str| order.iter().position(|&id| id == graph.id_of(name).unwrap());
        assert!(pos("A") < pos("B"));
        assert!(pos("B") < pos("C"));
    }

    #[test]
    fn two_node_cycle_is_reported() {
        let graph = graph_of(&[("A", "B"), ("B", "A"), ("C", "D")]);
        assert!(!graph.is_acyclic());

        match graph.topological_order() {
            Err(SankeyDagError::CyclicGraph { cycle }) => {
                assert_eq!(cycle, vec!["A", "B", "A"]);
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let graph = graph_of(&[("A", "A")]);
        assert_eq!(graph.find_cycle(), Some(vec![0, 0]));
    }

    #[test]
    fn longer_cycle_is_walked_in_dependency_order() {
        let graph = graph_of(&[("A", "B"), ("B", "C"), ("C", "A"), ("X", "A")]);
        let cycle = graph.find_cycle().unwrap();
        let names: Vec<&str> = cycle.iter().map(|&id| graph.name_of(id)).collect();
        assert_eq!(names, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn acyclic_graph_has_no_cycle() {
        let graph = graph_of(&[("A", "B"), ("B", "C")]);
        assert!(graph.is_acyclic());
        assert_eq!(graph.find_cycle(), None);
    }
}
