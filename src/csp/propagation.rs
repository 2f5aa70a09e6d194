//! Node consistency, arc revision, AC-3 and maintained arc consistency.
//!
//! All pruning goes through [`DomainStore`], so every removal made here is
//! on the trail and can be undone by rewinding.
//!
//! # Reference
//!
//! Mackworth, A. K. (1977). "Consistency in Networks of Relations",
//! *Artificial Intelligence* 8(1), 99-118.

use std::collections::{HashSet, VecDeque};

use log::trace;

use super::config::ArcOrder;
use super::domain::{ChangeSet, DomainStore};
use crate::crossword::{Assignment, ConstraintGraph, Lexicon, VarId, WordId};

/// Outcome of propagating one tentative assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inference {
    /// Every domain kept at least one word. Holds the removals made.
    Consistent(ChangeSet),
    /// `variable`'s domain became empty. Holds the removals made up to
    /// that point.
    Wipeout {
        variable: VarId,
        changes: ChangeSet,
    },
}

impl Inference {
    /// Whether propagation succeeded.
    pub fn is_consistent(&self) -> bool {
        matches!(self, Inference::Consistent(_))
    }

    /// Removals made by this step, by variable.
    pub fn changes(&self) -> &ChangeSet {
        match self {
            Inference::Consistent(changes) | Inference::Wipeout { changes, .. } => changes,
        }
    }
}

/// Removes every word whose length differs from its variable's length.
///
/// Returns the number of words removed. Never fails; an emptied domain is
/// left for the caller to detect.
///
/// # Panics
///
/// Panics if `store` holds word ids outside `lexicon`.
pub fn enforce_node_consistency(
    graph: &ConstraintGraph,
    lexicon: &Lexicon,
    store: &mut DomainStore,
) -> usize {
    graph
        .variables()
        .iter()
        .enumerate()
        .map(|(var, variable)| store.retain(var, |w| lexicon.word(w).len() == variable.length))
        .sum()
}

/// Makes `x` arc consistent with `y`.
///
/// Removes every word of `x` that agrees with no word of `y` at their
/// overlap. Returns whether anything was removed. A pair without an
/// overlap is left alone.
///
/// # Panics
///
/// Panics if `store` has fewer domains than `graph` has variables, or holds
/// word ids outside `lexicon`. [`DomainStore::validate`] checks both.
pub fn revise(
    graph: &ConstraintGraph,
    lexicon: &Lexicon,
    store: &mut DomainStore,
    x: VarId,
    y: VarId,
) -> bool {
    let Some((i, j)) = graph.overlap(x, y) else {
        return false;
    };
    let supported: HashSet<char> = store
        .domain(y)
        .iter()
        .filter_map(|&w| lexicon.word(w).letter(j))
        .collect();
    store.retain(x, |w| {
        lexicon
            .word(w)
            .letter(i)
            .is_some_and(|c| supported.contains(&c))
    }) > 0
}

/// Enforces arc consistency with AC-3.
///
/// Starts from `arcs`, or from every ordered neighbouring pair when `None`.
/// Returns `false` as soon as a domain becomes empty.
///
/// # Panics
///
/// Panics if `store` has fewer domains than `graph` has variables, or holds
/// word ids outside `lexicon`. [`DomainStore::validate`] checks both.
pub fn ac3(
    graph: &ConstraintGraph,
    lexicon: &Lexicon,
    store: &mut DomainStore,
    arcs: Option<Vec<(VarId, VarId)>>,
    order: ArcOrder,
) -> bool {
    propagate(graph, lexicon, store, arcs.unwrap_or_else(|| graph.arcs()), order).is_ok()
}

/// AC-3 worklist loop. `Err` carries the variable that ran out of words.
fn propagate(
    graph: &ConstraintGraph,
    lexicon: &Lexicon,
    store: &mut DomainStore,
    arcs: Vec<(VarId, VarId)>,
    order: ArcOrder,
) -> Result<(), VarId> {
    let mut queued: HashSet<(VarId, VarId)> = HashSet::with_capacity(arcs.len());
    let mut worklist: VecDeque<(VarId, VarId)> = VecDeque::with_capacity(arcs.len());
    for arc in arcs {
        if queued.insert(arc) {
            worklist.push_back(arc);
        }
    }

    loop {
        let next = match order {
            ArcOrder::Stack => worklist.pop_back(),
            ArcOrder::Queue => worklist.pop_front(),
        };
        let Some((x, y)) = next else {
            return Ok(());
        };
        queued.remove(&(x, y));

        let revised = revise(graph, lexicon, store, x, y);
        if store.size(x) == 0 {
            return Err(x);
        }
        if !revised {
            continue;
        }
        // x shrank: arcs pointing at x may have lost their support.
        for &z in graph.neighbors(x) {
            if z != y && queued.insert((z, x)) {
                worklist.push_back((z, x));
            }
        }
    }
}

/// Propagates the tentative assignment `var = word`.
///
/// Restricts `var` to `word`, prunes every unassigned neighbour to the
/// letter `word` puts on their shared cell, then runs AC-3 around each
/// pruned neighbour so the pruning cascades. Neighbours already holding a
/// word are not pruned directly.
///
/// Removals stay on the trail whatever the outcome; the caller rewinds to
/// its own checkpoint to undo them. No singleton domain is turned into an
/// assignment here.
///
/// # Panics
///
/// Panics if `store` has fewer domains than `graph` has variables, or holds
/// word ids outside `lexicon`. [`DomainStore::validate`] checks both.
pub fn maintain_arc_consistency(
    graph: &ConstraintGraph,
    lexicon: &Lexicon,
    store: &mut DomainStore,
    assignment: &Assignment,
    var: VarId,
    word: WordId,
    order: ArcOrder,
) -> Inference {
    let mark = store.checkpoint();
    let wipeout = |store: &DomainStore, variable: VarId| {
        trace!(target: "crossword::search", "wipeout of variable {variable} after {var} = {word}");
        Inference::Wipeout {
            variable,
            changes: store.changes_since(mark),
        }
    };

    store.retain(var, |w| w == word);
    if store.size(var) == 0 {
        return wipeout(store, var);
    }

    let assigned = lexicon.word(word);
    for &neighbor in graph.neighbors(var) {
        if assignment.contains(neighbor) {
            continue;
        }
        let Some((i, j)) = graph.overlap(var, neighbor) else {
            continue;
        };
        let letter = assigned.letter(i);
        store.retain(neighbor, |w| letter.is_some() && lexicon.word(w).letter(j) == letter);
        if store.size(neighbor) == 0 {
            return wipeout(store, neighbor);
        }

        let arcs: Vec<(VarId, VarId)> = graph
            .neighbors(neighbor)
            .iter()
            .filter(|&&m| m != var)
            .flat_map(|&m| [(m, neighbor), (neighbor, m)])
            .collect();
        if let Err(empty) = propagate(graph, lexicon, store, arcs, order) {
            return wipeout(store, empty);
        }
    }

    Inference::Consistent(store.changes_since(mark))
}
