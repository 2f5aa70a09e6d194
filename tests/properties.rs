//! Property tests for propagation and search on small random puzzles.

use proptest::prelude::*;
use u_crossword::crossword::{Assignment, ConstraintGraph, Lexicon, VarId};
use u_crossword::csp::{
    ac3, enforce_node_consistency, is_consistent, ArcOrder, CrosswordSolver, DomainStore,
    SolveStatus, SolverConfig,
};

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (2usize..=4, 2usize..=4).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), width), height)
    })
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{2,4}", 0..16)
}

/// Plain depth-first search in variable id order, no propagation.
fn brute_force(graph: &ConstraintGraph, lexicon: &Lexicon, assignment: &mut Assignment) -> bool {
    let var: VarId = assignment.len();
    if var == graph.len() {
        return true;
    }
    for (word, _) in lexicon.iter() {
        assignment.assign(var, word).unwrap();
        if is_consistent(graph, lexicon, assignment) && brute_force(graph, lexicon, assignment) {
            return true;
        }
        assignment.unassign(var);
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn node_consistency_is_idempotent(grid in grid_strategy(), words in words_strategy()) {
        let graph = ConstraintGraph::from_structure(&grid).unwrap();
        let lexicon = Lexicon::new(&words);
        let mut store = DomainStore::new(&graph, &lexicon);

        enforce_node_consistency(&graph, &lexicon, &mut store);
        let once = store.domains().to_vec();
        prop_assert_eq!(enforce_node_consistency(&graph, &lexicon, &mut store), 0);
        prop_assert_eq!(store.domains(), once.as_slice());
    }

    #[test]
    fn ac3_leaves_every_arc_supported(grid in grid_strategy(), words in words_strategy()) {
        let graph = ConstraintGraph::from_structure(&grid).unwrap();
        let lexicon = Lexicon::new(&words);
        let mut store = DomainStore::new(&graph, &lexicon);
        enforce_node_consistency(&graph, &lexicon, &mut store);

        if ac3(&graph, &lexicon, &mut store, None, ArcOrder::Stack) {
            for (x, y) in graph.arcs() {
                let (i, j) = graph.overlap(x, y).unwrap();
                for &wx in store.domain(x) {
                    let letter = lexicon.word(wx).letter(i);
                    prop_assert!(
                        store.domain(y).iter().any(|&wy| lexicon.word(wy).letter(j) == letter),
                        "word {} of {} unsupported by {}", lexicon.word(wx).as_str(), x, y
                    );
                }
            }
        }
    }

    #[test]
    fn arc_order_does_not_change_fixed_point(grid in grid_strategy(), words in words_strategy()) {
        let graph = ConstraintGraph::from_structure(&grid).unwrap();
        let lexicon = Lexicon::new(&words);

        let mut stack = DomainStore::new(&graph, &lexicon);
        enforce_node_consistency(&graph, &lexicon, &mut stack);
        let mut queue = stack.clone();

        let stack_ok = ac3(&graph, &lexicon, &mut stack, None, ArcOrder::Stack);
        let queue_ok = ac3(&graph, &lexicon, &mut queue, None, ArcOrder::Queue);
        prop_assert_eq!(stack_ok, queue_ok);
        if stack_ok {
            prop_assert_eq!(stack.domains(), queue.domains());
        }
    }

    #[test]
    fn rewind_restores_initial_domains(grid in grid_strategy(), words in words_strategy()) {
        let graph = ConstraintGraph::from_structure(&grid).unwrap();
        let lexicon = Lexicon::new(&words);
        let mut store = DomainStore::new(&graph, &lexicon);
        let initial = store.domains().to_vec();
        let mark = store.checkpoint();

        enforce_node_consistency(&graph, &lexicon, &mut store);
        let after_nc = store.domains().to_vec();
        for (var, domain) in after_nc.iter().enumerate() {
            prop_assert!(domain.is_subset(&initial[var]));
        }
        ac3(&graph, &lexicon, &mut store, None, ArcOrder::Queue);
        for (var, domain) in store.domains().iter().enumerate() {
            prop_assert!(domain.is_subset(&after_nc[var]));
        }

        store.rewind(mark);
        prop_assert_eq!(store.domains(), initial.as_slice());
    }

    #[test]
    fn search_agrees_with_brute_force(grid in grid_strategy(), words in words_strategy()) {
        let graph = ConstraintGraph::from_structure(&grid).unwrap();
        let lexicon = Lexicon::new(&words);
        let result = CrosswordSolver::run(&graph, &lexicon, &SolverConfig::default()).unwrap();

        let solvable = brute_force(&graph, &lexicon, &mut Assignment::new());
        match result.status {
            SolveStatus::Solved => {
                let assignment = result.assignment.unwrap();
                prop_assert!(solvable);
                prop_assert!(assignment.is_complete(&graph));
                prop_assert!(is_consistent(&graph, &lexicon, &assignment));
            }
            SolveStatus::NoSolution => prop_assert!(!solvable),
            other => prop_assert!(false, "unexpected status {:?}", other),
        }
    }
}
