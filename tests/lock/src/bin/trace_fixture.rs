//! Fixture binary for cross-process determinism tests.
//!
//! Loads one board file, searches it, and prints stable `key=value` lines:
//! best length, path count, every path fingerprint (sorted), then a summary
//! of the rendered output for the chosen mode.
//!
//! Usage: `trace_fixture <board_file> <stack|queue> <console|json>`
//!
//! Exit codes: 1 for bad arguments, 2 when the run itself fails.

use tracer_harness::report::report_json;
use tracer_harness::runner::{render_output, run_file, OutputMode, RunConfig};
use tracer_search::frontier::FrontierDiscipline;
use tracer_search::policy::SearchPolicy;

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    eprintln!("usage: trace_fixture <board_file> <stack|queue> <console|json>");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        usage_error("expected 3 arguments");
    }
    let discipline: FrontierDiscipline = args[2]
        .parse()
        .unwrap_or_else(|e| usage_error(&format!("{e}")));
    let output: OutputMode = args[3]
        .parse()
        .unwrap_or_else(|e| usage_error(&format!("{e}")));
    let config = RunConfig {
        policy: SearchPolicy::with_discipline(discipline),
        output,
    };

    let mut run = run_file(&args[1], &config).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    });
    // Digests bind the source path; drop it so cwd does not leak in.
    run.source = None;

    match run.result.best_length() {
        Some(len) => println!("best_length={len}"),
        None => println!("best_length=none"),
    }
    println!("path_count={}", run.result.best_paths.len());
    for fp in run.result.fingerprints() {
        println!("fingerprint={fp}");
    }
    println!("output={output}");
    match output {
        OutputMode::Json => {
            let report = report_json(&run).expect("report serialization failed");
            println!(
                "report_digest={}",
                report["report_digest"].as_str().unwrap_or("missing")
            );
        }
        _ => {
            let text = render_output(&run, output).expect("console rendering failed");
            println!("console_lines={}", text.lines().count());
        }
    }
}
