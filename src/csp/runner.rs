//! Backtracking search with maintained arc consistency.
//!
//! # Algorithm
//!
//! 1. Node consistency: drop words of the wrong length
//! 2. AC-3 over every arc of the graph
//! 3. Recursive search:
//!    a. Pick the unassigned variable with fewest candidates (ties: degree)
//!    b. Try its candidates least-constraining first
//!    c. Assign, check consistency, propagate, recurse
//!    d. On failure unassign and rewind the domain trail to the checkpoint
//!       taken before the assignment
//!
//! # Reference
//!
//! Russell, S. & Norvig, P. (2020). *Artificial Intelligence: A Modern
//! Approach*, 4th ed., ch. 6 "Constraint Satisfaction Problems".

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::SolverConfig;
use super::domain::DomainStore;
use super::heuristics::{is_consistent, order_domain_values, select_unassigned_variable};
use super::propagation::{ac3, enforce_node_consistency, maintain_arc_consistency};
use super::types::{SearchStats, SolveResult, SolveStatus};
use crate::crossword::{Assignment, ConstraintGraph, Lexicon, VarId, Variable, WordId};
use crate::error::Result;

/// Fills a crossword with the default configuration.
///
/// Returns `Ok(None)` when no assignment satisfies the constraints.
///
/// # Examples
///
/// ```
/// use u_crossword::crossword::{ConstraintGraph, Direction, Variable};
///
/// let mut builder = ConstraintGraph::builder();
/// let x = builder.add_variable(Variable::new(0, 0, Direction::Across, 3)).unwrap();
/// let y = builder.add_variable(Variable::new(0, 2, Direction::Down, 5)).unwrap();
/// builder.add_overlap(x, y, 2, 0).unwrap();
/// let graph = builder.build();
///
/// let words = u_crossword::solve(&graph, ["cat", "dog", "train"]).unwrap().unwrap();
/// assert_eq!(words[&Variable::new(0, 0, Direction::Across, 3)], "cat");
/// assert_eq!(words[&Variable::new(0, 2, Direction::Down, 5)], "train");
/// ```
pub fn solve<I, S>(graph: &ConstraintGraph, words: I) -> Result<Option<BTreeMap<Variable, String>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lexicon = Lexicon::new(words);
    let result = CrosswordSolver::run(graph, &lexicon, &SolverConfig::default())?;
    result
        .assignment
        .map(|assignment| assignment.to_words(graph, &lexicon))
        .transpose()
}

/// Crossword solver runner.
pub struct CrosswordSolver;

impl CrosswordSolver {
    /// Solves the puzzle from full domains.
    pub fn run(
        graph: &ConstraintGraph,
        lexicon: &Lexicon,
        config: &SolverConfig,
    ) -> Result<SolveResult> {
        Self::run_with_cancel(graph, lexicon, config, None)
    }

    /// Solves the puzzle, stopping early once `cancel` is raised.
    pub fn run_with_cancel(
        graph: &ConstraintGraph,
        lexicon: &Lexicon,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveResult> {
        let start = Instant::now();
        debug!(
            target: "crossword::search",
            "solving {} variables over {} words",
            graph.len(),
            lexicon.len()
        );

        let mut store = DomainStore::new(graph, lexicon);
        let mut removals = enforce_node_consistency(graph, lexicon, &mut store);
        let before_ac3 = store.checkpoint();
        let consistent = store.wiped_out().is_none()
            && ac3(graph, lexicon, &mut store, None, config.arc_order);
        removals += store.removed_since(before_ac3);

        if !consistent {
            debug!(target: "crossword::search", "initial propagation emptied a domain");
            return Ok(SolveResult {
                status: SolveStatus::NoSolution,
                assignment: None,
                stats: SearchStats {
                    removals,
                    elapsed_ms: start.elapsed().as_millis() as u64,
                    ..SearchStats::default()
                },
            });
        }

        let mut result = Self::search(graph, lexicon, &mut store, config, cancel)?;
        result.stats.removals += removals;
        result.stats.elapsed_ms = start.elapsed().as_millis() as u64;
        Ok(result)
    }

    /// Runs the backtracking search on a caller-prepared domain store.
    ///
    /// No node or arc consistency pass is made first. On success the store
    /// keeps the pruning of the solved branch; on any other outcome it is
    /// rewound to the state it had on entry.
    ///
    /// Fails if the store does not fit `graph` and `lexicon`.
    pub fn search(
        graph: &ConstraintGraph,
        lexicon: &Lexicon,
        store: &mut DomainStore,
        config: &SolverConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveResult> {
        store.validate(graph, lexicon)?;
        let start = Instant::now();
        let entry = store.checkpoint();
        let mut search = Search {
            graph,
            lexicon,
            config,
            store,
            assignment: Assignment::new(),
            stats: SearchStats::default(),
            rng: config.tie_break_seed.map(StdRng::seed_from_u64),
            cancel,
            deadline: config
                .time_limit_ms
                .map(|ms| start + Duration::from_millis(ms)),
        };

        let outcome = search.backtrack()?;
        let status = match outcome {
            Outcome::Solved => SolveStatus::Solved,
            Outcome::Exhausted => SolveStatus::NoSolution,
            Outcome::Interrupted(status) => status,
        };
        if status != SolveStatus::Solved {
            search.store.rewind(entry);
        }

        let mut stats = search.stats;
        stats.elapsed_ms = start.elapsed().as_millis() as u64;
        debug!(
            target: "crossword::search",
            "search finished: {status:?} after {} nodes, {} backtracks",
            stats.nodes,
            stats.backtracks
        );

        Ok(SolveResult {
            status,
            assignment: (status == SolveStatus::Solved).then_some(search.assignment),
            stats,
        })
    }
}

enum Outcome {
    Solved,
    Exhausted,
    Interrupted(SolveStatus),
}

struct Search<'a> {
    graph: &'a ConstraintGraph,
    lexicon: &'a Lexicon,
    config: &'a SolverConfig,
    store: &'a mut DomainStore,
    assignment: Assignment,
    stats: SearchStats,
    rng: Option<StdRng>,
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl Search<'_> {
    fn backtrack(&mut self) -> Result<Outcome> {
        let Some(var) = select_unassigned_variable(self.graph, self.store, &self.assignment) else {
            return Ok(Outcome::Solved);
        };

        let values = order_domain_values(
            self.graph,
            self.lexicon,
            self.store,
            &self.assignment,
            var,
            self.rng.as_mut(),
        );

        for word in values {
            if let Some(status) = self.interrupted() {
                return Ok(Outcome::Interrupted(status));
            }
            self.stats.nodes += 1;
            trace!(target: "crossword::search", "try variable {var} = word {word}");

            let mark = self.store.checkpoint();
            self.assignment.assign(var, word)?;

            let viable =
                is_consistent(self.graph, self.lexicon, &self.assignment) && self.propagate(var, word);

            if viable {
                match self.backtrack()? {
                    Outcome::Solved => return Ok(Outcome::Solved),
                    Outcome::Exhausted => {}
                    Outcome::Interrupted(status) => {
                        self.assignment.unassign(var);
                        self.store.rewind(mark);
                        return Ok(Outcome::Interrupted(status));
                    }
                }
            }

            self.assignment.unassign(var);
            self.store.rewind(mark);
            self.stats.backtracks += 1;
        }

        Ok(Outcome::Exhausted)
    }

    fn propagate(&mut self, var: VarId, word: WordId) -> bool {
        if !self.config.maintain_arc_consistency {
            return true;
        }
        let inference = maintain_arc_consistency(
            self.graph,
            self.lexicon,
            self.store,
            &self.assignment,
            var,
            word,
            self.config.arc_order,
        );
        let removed: usize = inference.changes().values().map(Vec::len).sum();
        self.stats.removals += removed;
        trace!(
            target: "crossword::search",
            "{var} = {word} pruned {removed} words from {} variables",
            inference.changes().len()
        );
        inference.is_consistent()
    }

    fn interrupted(&self) -> Option<SolveStatus> {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return Some(SolveStatus::Cancelled);
            }
        }
        if self.config.node_limit.is_some_and(|n| self.stats.nodes >= n) {
            return Some(SolveStatus::LimitReached);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(SolveStatus::LimitReached);
        }
        None
    }
}
