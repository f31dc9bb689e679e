//! Handler contract for registered commands.

use crate::message::OutputMessage;

/// Context handed to a handler for one dispatch.
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    command: &'a str,
    commands: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    pub fn new(command: &'a str, commands: Vec<&'a str>) -> Self {
        Self { command, commands }
    }

    /// Name the line was dispatched under.
    pub fn command(&self) -> &'a str {
        self.command
    }

    /// Every registered command name, sorted.
    pub fn commands(&self) -> &[&'a str] {
        &self.commands
    }
}

/// A unit of behavior registered under a command name.
///
/// Handlers receive the argument tokens that followed the command name and
/// either produce a message or fail. Any failure, including a panic, is
/// reported by the router as a handler execution error.
pub trait Handler {
    fn handle(&self, invocation: &Invocation<'_>, args: &[String])
        -> anyhow::Result<OutputMessage>;
}

impl<F> Handler for F
where
    F: Fn(&Invocation<'_>, &[String]) -> anyhow::Result<OutputMessage>,
{
    fn handle(&self, invocation: &Invocation<'_>, args: &[String]) -> anyhow::Result<OutputMessage> {
        self(invocation, args)
    }
}

/// Split a raw line on runs of whitespace.
///
/// Empty and whitespace-only input yields no tokens.
pub fn tokenize(raw_line: &str) -> Vec<String> {
    raw_line.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace_runs() {
        assert_eq!(tokenize("  help \t foo\n bar "), vec!["help", "foo", "bar"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \r\n").is_empty());
    }

    #[test]
    fn test_function_is_a_handler() {
        fn echo(_: &Invocation<'_>, args: &[String]) -> anyhow::Result<OutputMessage> {
            Ok(OutputMessage::new("echo:", args.join(" ")))
        }
        let invocation = Invocation::new("echo", vec!["echo"]);
        let message = echo
            .handle(&invocation, &["a".to_string(), "b".to_string()])
            .expect("echo succeeds");
        assert_eq!(message, OutputMessage::new("echo:", "a b"));
    }
}
