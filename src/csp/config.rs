//! Crossword solver configuration.

/// Worklist discipline used by AC-3.
///
/// Both reach the same fixed point; they differ only in which arcs are
/// revised first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcOrder {
    /// Pop the most recently queued arc.
    #[default]
    Stack,
    /// Pop the oldest queued arc.
    Queue,
}

/// Configuration parameters for the backtracking solver.
///
/// # Examples
///
/// ```
/// use u_crossword::csp::{ArcOrder, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_arc_order(ArcOrder::Queue)
///     .with_node_limit(10_000)
///     .with_tie_break_seed(7);
/// assert_eq!(config.node_limit, Some(10_000));
/// assert!(config.maintain_arc_consistency);
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// AC-3 worklist discipline.
    pub arc_order: ArcOrder,
    /// Whether to propagate after each assignment. When disabled the
    /// search only checks consistency of the partial assignment.
    pub maintain_arc_consistency: bool,
    /// Maximum number of search nodes (tentative assignments).
    pub node_limit: Option<usize>,
    /// Maximum wall-clock time in milliseconds.
    pub time_limit_ms: Option<u64>,
    /// Seed for shuffling equally constraining values (None keeps
    /// word-list order).
    pub tie_break_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            arc_order: ArcOrder::Stack,
            maintain_arc_consistency: true,
            node_limit: None,
            time_limit_ms: None,
            tie_break_seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the AC-3 worklist discipline.
    pub fn with_arc_order(mut self, order: ArcOrder) -> Self {
        self.arc_order = order;
        self
    }

    /// Enables or disables propagation during search.
    pub fn with_maintain_arc_consistency(mut self, enabled: bool) -> Self {
        self.maintain_arc_consistency = enabled;
        self
    }

    /// Sets the maximum number of search nodes.
    pub fn with_node_limit(mut self, n: usize) -> Self {
        self.node_limit = Some(n);
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the value tie-break seed.
    pub fn with_tie_break_seed(mut self, seed: u64) -> Self {
        self.tie_break_seed = Some(seed);
        self
    }
}
