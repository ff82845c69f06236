use std::path::PathBuf;

use dtsp_backtrack::{tsp_backtracking, tsp_bounded, Backtracker, Pruning};
use dtsp_core::{read_graph, DiGraph, Tour};
use dtsp_heuristic::nearest_neighbor;

fn fixture(name: &str) -> DiGraph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name);
    read_graph(path).unwrap()
}

#[test]
fn exact_beats_greedy_on_the_trap() {
    let g = fixture("greedy_trap.mtx");

    let greedy = nearest_neighbor(&g, 1).unwrap();
    assert!(greedy.closed);
    assert_eq!(greedy.tour, Tour::new(53.0, vec![1, 2, 3, 4]));

    let exact = tsp_backtracking(&g, 1).unwrap().unwrap();
    assert_eq!(exact, Tour::new(5.0, vec![1, 3, 4, 2]));
    assert!(exact.cost < greedy.tour.cost);

    assert_eq!(tsp_bounded(&g, 1).unwrap(), Some(exact));
}

#[test]
fn exact_never_loses_to_greedy_on_fixtures() {
    for name in ["four.mtx", "single.mtx", "greedy_trap.mtx"] {
        let g = fixture(name);
        let greedy = nearest_neighbor(&g, 1).unwrap();
        let exact = tsp_backtracking(&g, 1).unwrap().unwrap();
        if greedy.closed {
            assert!(exact.cost <= greedy.tour.cost, "{name}");
        }
    }
}

#[test]
fn unreachable_start_returns_no_tour() {
    let g = fixture("no_return.mtx");
    assert_eq!(tsp_backtracking(&g, 1).unwrap(), None);
    assert_eq!(tsp_bounded(&g, 1).unwrap(), None);
    assert!(!nearest_neighbor(&g, 1).unwrap().closed);
}

#[test]
fn repeated_searches_are_identical() {
    let g = fixture("four.mtx");
    let first = Backtracker::new(&g)
        .pruning(Some(Pruning::Recursive))
        .solve()
        .unwrap();
    let second = Backtracker::new(&g)
        .pruning(Some(Pruning::Recursive))
        .solve()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn outcome_serializes_with_stats() {
    let g = fixture("single.mtx");
    let outcome = Backtracker::new(&g).solve().unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["best_cost"], 0.0);
    assert_eq!(value["best_order"], serde_json::json!([1]));
    assert_eq!(value["stats"]["tours_completed"], 1);
    assert_eq!(value["stats"]["pruned"], 0);
}
