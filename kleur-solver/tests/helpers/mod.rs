//! Helpers to run the solver binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

/// The outcome of running the solver binary.
#[derive(Debug)]
pub(crate) struct SolverRun {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
}

pub(crate) fn instance(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

/// Runs the solver on `instance_path` with `args`. The output is captured in a file named after
/// `label`, which should be unique per test.
pub(crate) fn run_solver<'a>(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = &'a str>,
    label: &str,
) -> SolverRun {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_kleur-solver"));
    let log_file_path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!("{label}.log"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path.as_ref())
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    std::fs::remove_file(&log_file_path).expect("Failed to remove log file.");

    SolverRun { status, stdout }
}

/// Returns the colours on the `v` line of the output, if there is one.
pub(crate) fn parse_colouring(stdout: &str) -> Option<Vec<u32>> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("v "))
        .map(|colours| {
            colours
                .split_whitespace()
                .map(|colour| colour.parse().expect("colours are numbers"))
                .collect()
        })
}

/// Returns the edges of a DIMACS graph file, with 0-based vertices.
pub(crate) fn read_edges(instance_path: impl AsRef<Path>) -> Vec<(usize, usize)> {
    std::fs::read_to_string(instance_path)
        .expect("Failed to read instance.")
        .lines()
        .filter_map(|line| line.strip_prefix("e "))
        .map(|edge| {
            let mut endpoints = edge
                .split_whitespace()
                .map(|vertex| vertex.parse::<usize>().expect("vertices are numbers") - 1);
            (
                endpoints.next().expect("two endpoints"),
                endpoints.next().expect("two endpoints"),
            )
        })
        .collect()
}

/// Asserts that no edge of the instance is monochromatic.
pub(crate) fn assert_proper_colouring(instance_path: impl AsRef<Path>, colours: &[u32]) {
    for (u, v) in read_edges(instance_path) {
        assert_ne!(colours[u], colours[v], "edge ({u}, {v}) is monochromatic");
    }
}
