// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # ferry
//!
//! Reads `n k` followed by `n` weights and prints the smallest per-trip
//! capacity at which `k` trips carry every item.
//!
//! ```text
//! ferry [--plan] [INPUT]
//! ```
//!
//! Input comes from `INPUT`, or from standard input when it is absent or `-`.
//! Only the capacity goes to standard output. `--plan` writes the load plan
//! to standard error, and diagnostics follow `RUST_LOG` (default `warn`).

use anyhow::{anyhow, bail, Context};
use ferry_model::{instance::Instance, loading::InstanceLoader};
use ferry_search::{monitor::log::LogMonitor, search::CapacitySearchBuilder};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: ferry [--plan] [INPUT]

Computes the minimum feasible trip capacity.

Arguments:
  [INPUT]  File holding `n k` and n weights; `-` or absent reads stdin

Options:
  --plan      Print the load plan to stderr
  -h, --help  Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    input: Input,
    show_plan: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Run(Args),
}

fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut input: Option<Input> = None;
    let mut show_plan = false;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--plan" => show_plan = true,
            "-" => set_input(&mut input, Input::Stdin)?,
            flag if flag.starts_with('-') => bail!("unknown option '{}'\n\n{}", flag, USAGE),
            path => set_input(&mut input, Input::Path(PathBuf::from(path)))?,
        }
    }

    Ok(Command::Run(Args {
        input: input.unwrap_or(Input::Stdin),
        show_plan,
    }))
}

fn set_input(slot: &mut Option<Input>, input: Input) -> anyhow::Result<()> {
    if slot.is_some() {
        bail!("expected at most one input\n\n{}", USAGE);
    }
    *slot = Some(input);
    Ok(())
}

fn load(input: &Input) -> anyhow::Result<Instance<u64>> {
    let loader = InstanceLoader::<u64>::new();
    match input {
        Input::Stdin => loader
            .from_bufread(std::io::stdin().lock())
            .context("failed to read instance from stdin"),
        Input::Path(path) => loader
            .from_path(path)
            .with_context(|| format!("failed to read instance from '{}'", path.display())),
    }
}

/// Solves `instance`, writes the capacity to `out` and, if asked, the plan to `plan_out`.
fn solve_and_report<W, E>(
    instance: &Instance<u64>,
    show_plan: bool,
    out: &mut W,
    plan_out: &mut E,
) -> anyhow::Result<u64>
where
    W: Write,
    E: Write,
{
    tracing::debug!(%instance, "instance loaded");

    let mut search = CapacitySearchBuilder::new()
        .add_monitor(LogMonitor::new())
        .build();
    let outcome = search.solve(instance);

    tracing::info!(
        result = %outcome.result(),
        reason = %outcome.reason(),
        probes = outcome.statistics().probes,
        "search finished"
    );

    let capacity = outcome
        .capacity()
        .ok_or_else(|| anyhow!("no capacity carries every item ({})", outcome.result()))?;

    writeln!(out, "{}", capacity)?;
    if show_plan {
        if let Some(plan) = outcome.plan() {
            write!(plan_out, "{}", plan)?;
        }
    }

    Ok(capacity)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let instance = load(&args.input)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    solve_and_report(
        &instance,
        args.show_plan,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> anyhow::Result<Command> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    fn run(k: usize, weights: &[u64], show_plan: bool) -> (u64, String, String) {
        let instance = Instance::new(k, weights.to_vec()).unwrap();
        let mut out = Vec::new();
        let mut plan_out = Vec::new();
        let capacity = solve_and_report(&instance, show_plan, &mut out, &mut plan_out).unwrap();
        (
            capacity,
            String::from_utf8(out).unwrap(),
            String::from_utf8(plan_out).unwrap(),
        )
    }

    #[test]
    fn test_defaults_to_stdin() {
        assert_eq!(
            args(&[]).unwrap(),
            Command::Run(Args {
                input: Input::Stdin,
                show_plan: false
            })
        );
        assert_eq!(
            args(&["-"]).unwrap(),
            Command::Run(Args {
                input: Input::Stdin,
                show_plan: false
            })
        );
    }

    #[test]
    fn test_path_and_plan_flag() {
        assert_eq!(
            args(&["--plan", "trips.txt"]).unwrap(),
            Command::Run(Args {
                input: Input::Path(PathBuf::from("trips.txt")),
                show_plan: true
            })
        );
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(args(&["trips.txt", "--help"]).unwrap(), Command::Help);
        assert_eq!(args(&["-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_rejects_unknown_option_and_second_input() {
        let err = args(&["--fast"]).unwrap_err();
        assert!(err.to_string().contains("unknown option '--fast'"));

        let err = args(&["a.txt", "b.txt"]).unwrap_err();
        assert!(err.to_string().contains("at most one input"));

        assert!(args(&["-", "a.txt"]).is_err());
    }

    #[test]
    fn test_prints_only_capacity_to_stdout() {
        let (capacity, out, plan) = run(2, &[1, 2, 3], false);
        assert_eq!(capacity, 3);
        assert_eq!(out, "3\n");
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_goes_to_second_writer() {
        let (capacity, out, plan) = run(3, &[3, 2, 2, 1, 1], true);
        assert_eq!(capacity, 3);
        assert_eq!(out, "3\n");
        assert!(plan.starts_with("Load Plan"));
        assert!(plan.contains("Capacity: 3"));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let path = PathBuf::from("/nonexistent/ferry/instance.txt");
        let err = load(&Input::Path(path)).unwrap_err();
        assert!(
            err.to_string().contains("/nonexistent/ferry/instance.txt"),
            "unexpected error: {err}"
        );
    }
}
