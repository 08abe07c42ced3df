use std::io::Write;

use frontier::{
    NodeId,
    fs::{load_edge_list, load_edge_list_from_path, write_edge_list},
    graph::generate_random_graph,
    traversal::{UNREACHED, traverse_parallel, traverse_sequential, verify_levels},
};

#[test]
fn worker_count_does_not_change_levels() {
    let graph = generate_random_graph(20_000, 4, false, 42).unwrap();
    let start = NodeId::new(0);

    let one = traverse_parallel(&graph, start, 1).unwrap();
    let two = traverse_parallel(&graph, start, 2).unwrap();
    let sixteen = traverse_parallel(&graph, start, 16).unwrap();

    assert_eq!(one.levels, two.levels);
    assert_eq!(one.levels, sixteen.levels);
    assert_eq!(one.level_sizes(), sixteen.level_sizes());
}

#[test]
fn repeated_runs_are_deterministic_in_levels() {
    let graph = generate_random_graph(20_000, 3, true, 7).unwrap();
    let start = NodeId::new(5);

    let first = traverse_parallel(&graph, start, 8).unwrap();
    let second = traverse_parallel(&graph, start, 8).unwrap();
    assert_eq!(first.levels, second.levels);
    assert_eq!(first.reached(), second.reached());
}

#[test]
fn sequential_and_parallel_agree_on_sparse_directed_graph() {
    // average out-degree 1 leaves many vertices unreachable
    let graph = generate_random_graph(10_000, 1, true, 3).unwrap();
    let start = NodeId::new(0);

    let seq = traverse_sequential(&graph, start).unwrap();
    let par = traverse_parallel(&graph, start, 8).unwrap();

    assert!(verify_levels(&seq.levels, &par.levels));
    assert_eq!(seq.reached(), par.reached());
    assert_eq!(
        seq.levels.iter().filter(|&&l| l == UNREACHED).count(),
        graph.len() - seq.reached()
    );
}

#[test]
fn file_and_generator_build_identical_graphs() {
    let generated = generate_random_graph(500, 5, false, 11).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write_edge_list(file.as_file_mut(), &generated).unwrap();
    file.flush().unwrap();

    let loaded = load_edge_list_from_path(file.path(), 500, false).unwrap();
    assert_eq!(
        loaded.iter_edges().collect::<Vec<_>>(),
        generated.iter_edges().collect::<Vec<_>>()
    );

    let start = NodeId::new(0);
    assert_eq!(
        traverse_sequential(&loaded, start).unwrap(),
        traverse_sequential(&generated, start).unwrap()
    );
}

#[test]
fn edge_list_scenarios() {
    let path = load_edge_list("0 1\n1 2\n2 3\n".as_bytes(), 4, false).unwrap();
    let t = traverse_parallel(&path, NodeId::new(0), 4).unwrap();
    assert_eq!(t.levels, vec![0, 1, 2, 3]);

    let split = load_edge_list("0 1\n2 3\n".as_bytes(), 4, false).unwrap();
    let t = traverse_parallel(&split, NodeId::new(0), 4).unwrap();
    assert_eq!(t.levels, vec![0, 1, UNREACHED, UNREACHED]);
}
