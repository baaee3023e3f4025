//! `circuit-tracer`: find every shortest trace between the two terminals of
//! each board file given on the command line.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use tracer_harness::runner::{render_output, run_batch, OutputMode, RunConfig};
use tracer_search::frontier::FrontierDiscipline;
use tracer_search::policy::SearchPolicy;

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "circuit-tracer")]
#[command(about = "Find all shortest traces between the terminals of a circuit board")]
#[command(group(ArgGroup::new("storage").required(true).args(["stack", "queue"])))]
#[command(group(ArgGroup::new("output").required(true).args(["console", "gui", "json"])))]
struct Cmd {
    /// Explore with a stack (depth-first)
    #[arg(short = 's', long)]
    stack: bool,

    /// Explore with a queue (breadth-first)
    #[arg(short = 'q', long)]
    queue: bool,

    /// Print traced boards to the console
    #[arg(short = 'c', long)]
    console: bool,

    /// Show traced boards in a GUI (not supported)
    #[arg(short = 'g', long)]
    gui: bool,

    /// Print a JSON report per input
    #[arg(short = 'j', long)]
    json: bool,

    /// Skip expanding paths that can no longer tie the best length
    #[arg(long)]
    prune: bool,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Board input files (e.g. inputFile.dat)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cmd {
    fn config(&self) -> RunConfig {
        let discipline = if self.stack {
            FrontierDiscipline::Stack
        } else {
            FrontierDiscipline::Queue
        };
        let output = if self.gui {
            OutputMode::Gui
        } else if self.json {
            OutputMode::Json
        } else {
            OutputMode::Console
        };
        RunConfig {
            policy: SearchPolicy::with_discipline(discipline).pruned(self.prune),
            output,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level())
        .with_writer(std::io::stderr)
        .init();

    let config = cmd.config();
    tracing::info!(
        discipline = %config.policy.discipline,
        output = %config.output,
        prune = config.policy.prune_dominated,
        inputs = cmd.files.len(),
        "run"
    );

    let mut failed = 0usize;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in run_batch(&cmd.files, &config) {
        let rendered = entry
            .outcome
            .and_then(|run| render_output(&run, config.output));
        match rendered {
            Ok(text) => out.write_all(text.as_bytes())?,
            Err(e) => {
                failed += 1;
                eprintln!("{}: {e}", entry.path.display());
            }
        }
    }
    out.flush()?;

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
