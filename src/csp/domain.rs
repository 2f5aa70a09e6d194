//! Domain store with a removal trail.
//!
//! Every word removed from a domain is recorded on the trail. Backtracking
//! rewinds the trail to a [`Checkpoint`], re-inserting exactly the words
//! removed since then, so no domain is ever deep-copied during search.

use std::collections::{BTreeMap, BTreeSet};

use crate::crossword::{ConstraintGraph, Lexicon, VarId, WordId};
use crate::error::{CrosswordError, Result};

/// Words removed from each variable's domain, in removal order.
pub type ChangeSet = BTreeMap<VarId, Vec<WordId>>;

/// A position on the trail to rewind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

#[derive(Debug, Clone, Copy)]
struct Removal {
    var: VarId,
    word: WordId,
}

/// Current candidate words of every variable.
///
/// Domains only shrink through [`remove`](Self::remove) and
/// [`retain`](Self::retain); words come back only through
/// [`rewind`](Self::rewind).
///
/// # Examples
///
/// ```
/// use u_crossword::crossword::{ConstraintGraph, Direction, Lexicon, Variable};
/// use u_crossword::csp::DomainStore;
///
/// let mut builder = ConstraintGraph::builder();
/// builder.add_variable(Variable::new(0, 0, Direction::Across, 4)).unwrap();
/// let graph = builder.build();
/// let lexicon = Lexicon::new(["rain", "snow", "wind"]);
///
/// let mut store = DomainStore::new(&graph, &lexicon);
/// let mark = store.checkpoint();
/// store.remove(0, 1);
/// assert_eq!(store.size(0), 2);
/// store.rewind(mark);
/// assert_eq!(store.size(0), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: Vec<BTreeSet<WordId>>,
    trail: Vec<Removal>,
}

impl DomainStore {
    /// Gives every variable of `graph` the whole lexicon.
    pub fn new(graph: &ConstraintGraph, lexicon: &Lexicon) -> Self {
        let full: BTreeSet<WordId> = (0..lexicon.len()).collect();
        Self::from_domains(vec![full; graph.len()])
    }

    /// Starts from explicit per-variable candidate sets.
    ///
    /// The sets are not checked here; see [`validate`](Self::validate).
    pub fn from_domains(domains: Vec<BTreeSet<WordId>>) -> Self {
        Self {
            domains,
            trail: Vec::new(),
        }
    }

    /// Checks that the store fits `graph` and `lexicon`: one domain per
    /// variable and only word ids the lexicon knows.
    pub fn validate(&self, graph: &ConstraintGraph, lexicon: &Lexicon) -> Result<()> {
        if self.domains.len() != graph.len() {
            return Err(CrosswordError::DomainCountMismatch {
                expected: graph.len(),
                found: self.domains.len(),
            });
        }
        for (variable, domain) in self.domains.iter().enumerate() {
            // Sets are ordered, so the last id is the largest.
            if let Some(&word) = domain.last() {
                if word >= lexicon.len() {
                    return Err(CrosswordError::UnknownWord { variable, word });
                }
            }
        }
        Ok(())
    }

    /// Current domain of `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is out of range.
    pub fn domain(&self, var: VarId) -> &BTreeSet<WordId> {
        &self.domains[var]
    }

    /// All domains, indexed by variable id.
    pub fn domains(&self) -> &[BTreeSet<WordId>] {
        &self.domains
    }

    /// Number of candidates left for `var`.
    pub fn size(&self, var: VarId) -> usize {
        self.domains.get(var).map_or(0, BTreeSet::len)
    }

    /// Whether `word` is still a candidate for `var`.
    pub fn contains(&self, var: VarId, word: WordId) -> bool {
        self.domains.get(var).is_some_and(|d| d.contains(&word))
    }

    /// First variable whose domain is empty, if any.
    pub fn wiped_out(&self) -> Option<VarId> {
        self.domains.iter().position(BTreeSet::is_empty)
    }

    /// Removes `word` from `var`'s domain. Returns whether it was present.
    pub fn remove(&mut self, var: VarId, word: WordId) -> bool {
        let removed = self
            .domains
            .get_mut(var)
            .is_some_and(|domain| domain.remove(&word));
        if removed {
            self.trail.push(Removal { var, word });
        }
        removed
    }

    /// Keeps only the words of `var` for which `keep` holds.
    ///
    /// Returns the number of words removed.
    pub fn retain<F>(&mut self, var: VarId, mut keep: F) -> usize
    where
        F: FnMut(WordId) -> bool,
    {
        let doomed: Vec<WordId> = match self.domains.get(var) {
            Some(domain) => domain.iter().copied().filter(|&w| !keep(w)).collect(),
            None => return 0,
        };
        for &word in &doomed {
            self.remove(var, word);
        }
        doomed.len()
    }

    /// Marks the current trail position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Re-inserts every word removed since `checkpoint`, newest first.
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        while self.trail.len() > checkpoint.0 {
            if let Some(Removal { var, word }) = self.trail.pop() {
                self.domains[var].insert(word);
            }
        }
    }

    /// Removals recorded since `checkpoint`, grouped by variable.
    pub fn changes_since(&self, checkpoint: Checkpoint) -> ChangeSet {
        let mut changes = ChangeSet::new();
        for removal in self.trail.iter().skip(checkpoint.0) {
            changes.entry(removal.var).or_default().push(removal.word);
        }
        changes
    }

    /// Number of removals recorded since `checkpoint`.
    pub fn removed_since(&self, checkpoint: Checkpoint) -> usize {
        self.trail.len().saturating_sub(checkpoint.0)
    }

    /// Number of removals currently on the trail.
    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}
