//! Search policy types.

use crate::frontier::FrontierDiscipline;

/// Search configuration, passed explicitly into the driver.
///
/// Neither field changes the final Best-Path Set; both only change how much
/// work the driver performs before the frontier empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Retrieval order of the frontier.
    pub discipline: FrontierDiscipline,
    /// Skip expanding a state whose length already reaches the best
    /// completed length. Its completions could only be longer.
    pub prune_dominated: bool,
}

impl SearchPolicy {
    /// Exhaustive policy with the given discipline.
    #[must_use]
    pub const fn with_discipline(discipline: FrontierDiscipline) -> Self {
        Self {
            discipline,
            prune_dominated: false,
        }
    }

    /// Same policy with dominated-state pruning switched on or off.
    #[must_use]
    pub const fn pruned(self, prune_dominated: bool) -> Self {
        Self {
            prune_dominated,
            ..self
        }
    }
}

impl From<FrontierDiscipline> for SearchPolicy {
    fn from(discipline: FrontierDiscipline) -> Self {
        Self::with_discipline(discipline)
    }
}
