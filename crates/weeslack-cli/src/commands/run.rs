//! Dispatch a stream of lines from a script file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use weeslack_lib::{OutputSink, Plugin};

/// Dispatch every line of `script`, or of stdin when no script is given.
///
/// Returns the number of lines dispatched.
pub fn handle_run<S: OutputSink>(plugin: &mut Plugin<S>, script: Option<&Path>) -> Result<usize> {
    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run_lines(plugin, BufReader::new(file))
                .with_context(|| format!("failed to read script {}", path.display()))
        }
        None => run_lines(plugin, io::stdin().lock()).context("failed to read stdin"),
    }
}

/// Dispatch each line from `reader` in order.
///
/// A line that cannot be dispatched only produces the error message; the
/// remaining lines still run.
pub fn run_lines<S: OutputSink, R: BufRead>(plugin: &mut Plugin<S>, reader: R) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        plugin.command(&line);
        count += 1;
    }
    debug!(lines = count, "finished dispatching input");
    Ok(count)
}
