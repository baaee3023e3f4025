//! Harness runner: load → search → package.
//!
//! # Pipeline
//!
//! ```text
//! check_output() → load_board() → search_with_policy() → TraceRun
//!   → render_output() (console text | JSON report)
//! ```
//!
//! The runner does not implement search logic; it delegates to
//! `tracer_search`. Configuration is passed in explicitly as [`RunConfig`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracer_kernel::carrier::board::Board;
use tracer_search::policy::SearchPolicy;
use tracer_search::search::{search_with_policy, SearchResult};

use crate::load::{load_board, LoadError};
use crate::report::{render_console, report_json};

/// How results leave the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Rendered grids on stdout.
    #[default]
    Console,
    /// Graphical display. Not supported.
    Gui,
    /// Machine-readable JSON report.
    Json,
}

impl OutputMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Gui => "gui",
            Self::Json => "json",
        }
    }

    /// Whether this build can produce the mode.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Gui)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" | "c" => Ok(Self::Console),
            "gui" | "g" => Ok(Self::Gui),
            "json" | "j" => Ok(Self::Json),
            _ => Err(RunError::UnknownOutput {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for one or more runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Search discipline and pruning.
    pub policy: SearchPolicy,
    /// Output mode.
    pub output: OutputMode,
}

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Board file could not be loaded.
    Load(LoadError),
    /// Output mode is recognised but not available.
    UnsupportedOutput { mode: OutputMode },
    /// Output mode name not recognised.
    UnknownOutput { name: String },
    /// JSON report could not be serialized.
    Report { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::UnsupportedOutput { mode: OutputMode::Gui } => {
                write!(f, "GUI is not currently supported")
            }
            Self::UnsupportedOutput { mode } => write!(f, "{mode} output is not supported"),
            Self::UnknownOutput { name } => {
                write!(f, "unknown output mode {name:?} (expected console, gui or json)")
            }
            Self::Report { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

/// A finished search over one board.
#[derive(Debug, Clone)]
pub struct TraceRun {
    /// Input file, when the board came from disk.
    pub source: Option<PathBuf>,
    /// The untraced input board.
    pub board: Board,
    /// Best-Path Set and counters.
    pub result: SearchResult,
}

/// One input of a batch and what became of it.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: Result<TraceRun, RunError>,
}

fn check_output(output: OutputMode) -> Result<(), RunError> {
    if output.is_supported() {
        Ok(())
    } else {
        Err(RunError::UnsupportedOutput { mode: output })
    }
}

/// Search an in-memory board.
#[must_use]
pub fn run_board(board: Board, policy: &SearchPolicy) -> TraceRun {
    let result = search_with_policy(&board, policy);
    TraceRun {
        source: None,
        board,
        result,
    }
}

/// Load `path`, search it, and package the outcome.
///
/// The output mode is checked before any work is done.
///
/// # Errors
///
/// Returns [`RunError::UnsupportedOutput`] for graphical output and
/// [`RunError::Load`] if the board cannot be loaded.
pub fn run_file(path: impl AsRef<Path>, config: &RunConfig) -> Result<TraceRun, RunError> {
    let path = path.as_ref();
    check_output(config.output)?;

    let board = load_board(path)?;
    tracing::info!(
        path = %path.display(),
        rows = board.rows(),
        cols = board.cols(),
        discipline = %config.policy.discipline,
        "board loaded"
    );

    let mut run = run_board(board, &config.policy);
    run.source = Some(path.to_path_buf());
    tracing::info!(
        path = %path.display(),
        best_len = ?run.result.best_length(),
        paths = run.result.best_paths.len(),
        retrievals = run.result.stats.retrievals,
        "search complete"
    );
    Ok(run)
}

/// Run every input independently; one failure never affects the others.
#[must_use]
pub fn run_batch<P: AsRef<Path>>(paths: &[P], config: &RunConfig) -> Vec<BatchEntry> {
    paths
        .iter()
        .map(|p| {
            let path = p.as_ref().to_path_buf();
            let outcome = run_file(&path, config);
            if let Err(e) = &outcome {
                tracing::warn!(path = %path.display(), error = %e, "input failed");
            }
            BatchEntry { path, outcome }
        })
        .collect()
}

/// Render a finished run in the requested mode.
///
/// # Errors
///
/// Returns [`RunError::UnsupportedOutput`] for graphical output and
/// [`RunError::Report`] if the JSON report cannot be serialized.
pub fn render_output(run: &TraceRun, output: OutputMode) -> Result<String, RunError> {
    match output {
        OutputMode::Console => Ok(render_console(run)),
        OutputMode::Json => {
            let value = report_json(run)?;
            let mut text = serde_json::to_string_pretty(&value).map_err(|e| RunError::Report {
                detail: e.to_string(),
            })?;
            text.push('\n');
            Ok(text)
        }
        OutputMode::Gui => Err(RunError::UnsupportedOutput { mode: output }),
    }
}
