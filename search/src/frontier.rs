//! Frontier store: the working set of unclassified path states.
//!
//! Traversal order is a property of the container, not of the driver. Two
//! interchangeable implementations sit behind the [`Frontier`] capability:
//!
//! | Discipline | Type | Retrieves | Exploration |
//! |---|---|---|---|
//! | Stack | [`StackFrontier`] | most recently stored | depth-first |
//! | Queue | [`QueueFrontier`] | earliest stored | breadth-first |
//!
//! Both reach the same final Best-Path Set; they differ only in how much
//! work happens before it settles.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::node::PathState;

/// Store/retrieve capability over pending path states.
pub trait Frontier {
    /// Add a state.
    fn store(&mut self, state: PathState);

    /// Remove and return the next state, or `None` when empty.
    fn retrieve(&mut self) -> Option<PathState>;

    /// Number of pending states.
    fn len(&self) -> usize;

    /// Whether no states are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest `len()` ever observed.
    fn high_water(&self) -> usize;
}

/// LIFO frontier (depth-first).
#[derive(Debug, Default)]
pub struct StackFrontier {
    items: Vec<PathState>,
    high_water: usize,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn store(&mut self, state: PathState) {
        self.items.push(state);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn retrieve(&mut self) -> Option<PathState> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// FIFO frontier (breadth-first).
///
/// Retrieves every path of length `n` before any path of length `n + 1`.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    items: VecDeque<PathState>,
    high_water: usize,
}

impl QueueFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn store(&mut self, state: PathState) {
        self.items.push_back(state);
        self.high_water = self.high_water.max(self.items.len());
    }

    fn retrieve(&mut self) -> Option<PathState> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Retrieval order policy, chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FrontierDiscipline {
    /// LIFO, depth-first.
    Stack,
    /// FIFO, breadth-first.
    #[default]
    Queue,
}

impl FrontierDiscipline {
    /// Lowercase name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
        }
    }

    /// Build an empty frontier of this discipline.
    #[must_use]
    pub fn frontier(self) -> Box<dyn Frontier> {
        match self {
            Self::Stack => Box::new(StackFrontier::new()),
            Self::Queue => Box::new(QueueFrontier::new()),
        }
    }
}

impl fmt::Display for FrontierDiscipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrontierDiscipline {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stack" | "s" => Ok(Self::Stack),
            "queue" | "q" => Ok(Self::Queue),
            _ => Err(SearchError::UnknownDiscipline { name: s.to_string() }),
        }
    }
}
