//! CLI entrypoint for the bracefmt conformance harness.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use bracefmt_harness::fixtures::ArgValue;
use bracefmt_harness::report::{ConformanceReport, fixture_digest};
use bracefmt_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, now_utc,
};
use bracefmt_harness::verify::SuiteSummary;
use bracefmt_harness::{FixtureSet, TestRunner, builtin_suite};

/// Conformance tooling for bracefmt.
#[derive(Debug, Parser)]
#[command(name = "bracefmt-harness")]
#[command(about = "Conformance testing harness for bracefmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the built-in fixture suite to a JSON file.
    Fixtures {
        /// Output path for the fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Verify the engine against fixture files (built-in suite if none given).
    Verify {
        /// Fixture JSON file, or a directory of fixture JSON files.
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output report path (JSON).
        #[arg(long)]
        report_json: Option<PathBuf>,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Artifact index JSON output path; records every report and log
        /// file written by this run with its SHA-256 and size.
        #[arg(long)]
        artifact_index: Option<PathBuf>,
        /// Run identifier stamped into log trace ids.
        #[arg(long, default_value = "local")]
        run_id: String,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Render a template once with positional arguments and print the result.
    Render {
        /// Template string, e.g. "Test: {0:X}, {1}".
        template: String,
        /// Positional arguments. A `kind:value` prefix (int, uint, float,
        /// str, bool, char) forces the type; bare values are inferred as
        /// int, float, bool, or string.
        args: Vec<String>,
    },
}

fn load_fixture_sets(path: &PathBuf) -> Result<Vec<FixtureSet>, Box<dyn std::error::Error>> {
    if path.is_dir() {
        let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect();
        fixture_paths.sort();

        let mut sets = Vec::new();
        for p in fixture_paths {
            match FixtureSet::from_file(&p) {
                Ok(set) => sets.push(set),
                Err(err) => eprintln!("Skipping {}: {}", p.display(), err),
            }
        }
        if sets.is_empty() {
            return Err(format!("No fixture JSON files found in {}", path.display()).into());
        }
        Ok(sets)
    } else {
        Ok(vec![FixtureSet::from_file(path)?])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fixtures { output } => {
            let suite = builtin_suite();
            suite.to_file(&output)?;
            eprintln!(
                "Wrote {} cases ({}) to {}",
                suite.cases.len(),
                suite.suite,
                output.display()
            );
        }
        Command::Verify {
            fixture,
            report,
            report_json,
            log,
            artifact_index,
            run_id,
            timestamp,
        } => {
            let fixture_sets = match &fixture {
                Some(path) => load_fixture_sets(path)?,
                None => vec![builtin_suite()],
            };

            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, "fixture-verify", &run_id)?),
                None => None,
            };

            let runner = TestRunner::new("fixture-verify");
            let started = Instant::now();
            let mut results = Vec::new();
            let mut digest_input = String::new();
            for set in &fixture_sets {
                if let Some(emitter) = emitter.as_mut() {
                    emitter.emit(LogLevel::Info, &format!("suite_start:{}", set.suite))?;
                }
                let set_results = runner.run(set);
                if let Some(emitter) = emitter.as_mut() {
                    for r in &set_results {
                        let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
                        let level = if r.passed {
                            LogLevel::Info
                        } else {
                            LogLevel::Error
                        };
                        let entry = LogEntry::new("", level, "case_verified")
                            .with_case(&r.case, &r.template)
                            .with_outcome(outcome);
                        emitter.emit_entry(entry)?;
                    }
                }
                digest_input.push_str(&set.to_json()?);
                results.extend(set_results);
            }

            // Stabilize report ordering for reproducible golden-output hashing.
            results.sort_by(|a, b| a.case.cmp(&b.case));

            let suite_names = fixture_sets
                .iter()
                .map(|s| s.suite.as_str())
                .collect::<Vec<_>>()
                .join(",");
            let conformance = ConformanceReport {
                title: String::from("bracefmt conformance"),
                suite: suite_names.clone(),
                timestamp: timestamp.unwrap_or_else(now_utc),
                fixture_digest: Some(fixture_digest(&digest_input)),
                summary: SuiteSummary::collect(results),
            };

            if let Some(path) = &report {
                std::fs::write(path, conformance.to_markdown())?;
                eprintln!("Wrote markdown report to {}", path.display());
            }
            if let Some(path) = &report_json {
                std::fs::write(path, conformance.to_json())?;
                eprintln!("Wrote JSON report to {}", path.display());
            }
            if let Some(emitter) = emitter.as_mut() {
                let outcome = if conformance.summary.all_passed() {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                };
                let entry = LogEntry::new("", LogLevel::Info, "verify_complete")
                    .with_outcome(outcome)
                    .with_duration_ms(started.elapsed().as_millis() as u64);
                emitter.emit_entry(entry)?;
                emitter.flush()?;
            }

            if let Some(path) = &artifact_index {
                let mut index = ArtifactIndex::new(run_id.as_str(), suite_names.as_str());
                if let Some(p) = &report {
                    index.add_file("report_md", p)?;
                }
                if let Some(p) = &report_json {
                    index.add_file("report_json", p)?;
                }
                if let Some(p) = &log {
                    index.add_file("log_jsonl", p)?;
                }
                std::fs::write(path, index.to_json()?)?;
                eprintln!("Wrote artifact index to {}", path.display());
            }

            eprintln!(
                "{} total, {} passed, {} failed",
                conformance.summary.total, conformance.summary.passed, conformance.summary.failed
            );
            if !conformance.summary.all_passed() {
                for r in conformance.summary.failures() {
                    eprintln!("FAIL {} ({})", r.case, r.template);
                    if let Some(diff) = &r.diff {
                        eprintln!("{diff}");
                    }
                }
                return Err(format!("{} fixture case(s) failed", conformance.summary.failed).into());
            }
        }
        Command::Render { template, args } => {
            let mut list = bracefmt_core::ArgList::new();
            for raw in &args {
                ArgValue::parse_literal(raw)?.push_into(&mut list);
            }
            let formatter = bracefmt_core::Formatter::new(template, list);
            println!("{}", formatter.render_to_string()?);
        }
    }

    Ok(())
}
