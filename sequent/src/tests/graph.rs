use crate::error::SequentError;
use crate::term_dependency_graph::{TermDependencies, TermDependencyGraph};

#[test]
fn dependencies_accumulate_per_dependent() {
    let mut graph = TermDependencyGraph::new();
    assert!(graph.is_empty());

    graph.add_dependencies(&TermDependencies::new(1, [2, 3])).unwrap();
    graph.add_dependencies(&TermDependencies::new(1, [4])).unwrap();

    let direct = graph.dependencies_of(1).unwrap();
    assert_eq!(direct.len(), 3);
    assert!(direct.contains(&4));
}

#[test]
fn depends_on_is_transitive() {
    let mut graph = TermDependencyGraph::new();
    graph.add_dependencies(&TermDependencies::new(1, [2])).unwrap();
    graph.add_dependencies(&TermDependencies::new(2, [3])).unwrap();

    assert!(graph.depends_on(1, 2));
    assert!(graph.depends_on(1, 3));
    assert!(!graph.depends_on(3, 1));
    assert!(!graph.depends_on(2, 1));
}

#[test]
fn self_loops_are_rejected() {
    let mut graph = TermDependencyGraph::new();
    assert!(matches!(
        graph.add_dependencies(&TermDependencies::new(1, [1])),
        Err(SequentError::TermDependencyConflict {
            dependent: 1,
            dependency: 1
        })
    ));
}

#[test]
fn cycles_are_rejected_and_leave_the_graph_unchanged() {
    let mut graph = TermDependencyGraph::new();
    graph.add_dependencies(&TermDependencies::new(1, [2])).unwrap();
    graph.add_dependencies(&TermDependencies::new(2, [3])).unwrap();

    let result = graph.add_dependencies(&TermDependencies::new(3, [4, 1]));
    assert!(matches!(
        result,
        Err(SequentError::TermDependencyConflict {
            dependent: 3,
            dependency: 1
        })
    ));
    assert!(graph.dependencies_of(3).is_none());
}

#[test]
fn empty_dependency_sets_are_allowed() {
    let mut graph = TermDependencyGraph::new();
    graph.add_dependencies(&TermDependencies::new(1, [])).unwrap();
    assert!(!graph.depends_on(1, 2));
}
