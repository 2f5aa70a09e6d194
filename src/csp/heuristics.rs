//! Consistency check and search ordering heuristics.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::domain::DomainStore;
use crate::crossword::{Assignment, ConstraintGraph, Lexicon, VarId, WordId};

/// Whether a (possibly partial) assignment violates no constraint.
///
/// Checks that no word is used twice, that every word fits its slot's
/// length, and that every pair of assigned neighbours agrees on the letter
/// of their shared cell. Variables or words unknown to `graph`/`lexicon`
/// make the assignment inconsistent.
pub fn is_consistent(graph: &ConstraintGraph, lexicon: &Lexicon, assignment: &Assignment) -> bool {
    let mut used = HashSet::with_capacity(assignment.len());

    for (var, word) in assignment.iter() {
        if !used.insert(word) {
            return false;
        }
        let (Ok(variable), Some(text)) = (graph.variable(var), lexicon.get(word)) else {
            return false;
        };
        if text.len() != variable.length {
            return false;
        }
        for &neighbor in graph.neighbors(var) {
            let (Some(other), Some((i, j))) = (assignment.get(neighbor), graph.overlap(var, neighbor))
            else {
                continue;
            };
            if text.letter(i) != lexicon.get(other).and_then(|w| w.letter(j)) {
                return false;
            }
        }
    }
    true
}

/// Picks the next variable to branch on.
///
/// Minimum remaining values first, then highest degree, then lowest id.
/// Returns `None` once every variable is assigned.
pub fn select_unassigned_variable(
    graph: &ConstraintGraph,
    store: &DomainStore,
    assignment: &Assignment,
) -> Option<VarId> {
    (0..graph.len())
        .filter(|&var| !assignment.contains(var))
        .min_by_key(|&var| (store.size(var), Reverse(graph.degree(var))))
}

/// Orders `var`'s candidates, least constraining first.
///
/// A candidate's cost is the number of words it would rule out from the
/// domains of unassigned neighbours. Equal costs keep word id order, or an
/// order shuffled by `tie_break` when given. Domains are not modified.
///
/// # Panics
///
/// Panics if `store` has fewer domains than `graph` has variables, or holds
/// word ids outside `lexicon`. [`DomainStore::validate`] checks both.
pub fn order_domain_values(
    graph: &ConstraintGraph,
    lexicon: &Lexicon,
    store: &DomainStore,
    assignment: &Assignment,
    var: VarId,
    tie_break: Option<&mut StdRng>,
) -> Vec<WordId> {
    // Per unassigned neighbour: (offset into var, domain size, letter histogram).
    let profiles: Vec<(usize, usize, HashMap<char, usize>)> = graph
        .neighbors(var)
        .iter()
        .filter(|&&n| !assignment.contains(n))
        .filter_map(|&n| {
            let (i, j) = graph.overlap(var, n)?;
            let mut histogram = HashMap::new();
            for &w in store.domain(n) {
                if let Some(c) = lexicon.word(w).letter(j) {
                    *histogram.entry(c).or_insert(0) += 1;
                }
            }
            Some((i, store.size(n), histogram))
        })
        .collect();

    let mut candidates: Vec<WordId> = store.domain(var).iter().copied().collect();
    if let Some(rng) = tie_break {
        candidates.shuffle(rng);
    }

    let ruled_out = |word: WordId| -> usize {
        let word = lexicon.word(word);
        profiles
            .iter()
            .map(|(i, size, histogram)| {
                let kept = word
                    .letter(*i)
                    .and_then(|c| histogram.get(&c))
                    .copied()
                    .unwrap_or(0);
                size - kept
            })
            .sum()
    };
    candidates.sort_by_cached_key(|&w| ruled_out(w));
    candidates
}
