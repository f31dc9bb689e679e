//! Commands registered by [`CommandRouter::register_defaults`](crate::CommandRouter::register_defaults).

use crate::handler::Invocation;
use crate::message::OutputMessage;

pub const HELP: &str = "help";
pub const DEBUG: &str = "debug";

/// Greeting returned by `debug`.
pub const DEBUG_GREETING: &str = "hello from the wee_slack plugin";

/// Lists every registered command. Arguments are ignored.
pub fn help(invocation: &Invocation<'_>, _args: &[String]) -> anyhow::Result<OutputMessage> {
    let listing = invocation
        .commands()
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(" | ");
    Ok(OutputMessage::new(
        "help: ",
        format!("Available commands are: {}", listing),
    ))
}

/// Fixed greeting. Arguments are ignored.
pub fn debug(_invocation: &Invocation<'_>, _args: &[String]) -> anyhow::Result<OutputMessage> {
    Ok(OutputMessage::new("", DEBUG_GREETING))
}
