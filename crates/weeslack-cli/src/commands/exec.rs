//! Dispatch a single line given on the command line.

use weeslack_lib::{OutputMessage, OutputSink, Plugin};

/// Join `words` with single spaces and dispatch them as one line.
pub fn handle_exec<S: OutputSink>(plugin: &mut Plugin<S>, words: &[String]) -> OutputMessage {
    let line = words.join(" ");
    plugin.command_message(&line)
}
