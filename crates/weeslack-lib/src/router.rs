//! Command registration and dispatch.
//!
//! A [`CommandRouter`] owns the mapping from command name to [`Handler`] and
//! the [`OutputSink`] messages are written to. Each call to
//! [`CommandRouter::dispatch`] tokenizes one raw line, runs at most one
//! handler, and emits exactly one message.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, warn};

use crate::builtins;
use crate::error::{DispatchError, RegistrationError, Result};
use crate::handler::{tokenize, Handler, Invocation};
use crate::message::OutputMessage;
use crate::sink::OutputSink;

/// Maps command names to handlers and reports every outcome to a sink.
pub struct CommandRouter<S> {
    commands: BTreeMap<String, Box<dyn Handler>>,
    sink: S,
}

impl<S: OutputSink> CommandRouter<S> {
    /// Create a router with no commands registered.
    pub fn new(sink: S) -> Self {
        Self {
            commands: BTreeMap::new(),
            sink,
        }
    }

    /// Create a router with `help` and `debug` already registered.
    pub fn with_defaults(sink: S) -> Self {
        let mut router = Self::new(sink);
        router.register_defaults();
        router
    }

    /// Register `handler` under `name`.
    ///
    /// Names are case-sensitive. Registering a name that already exists
    /// replaces the previous handler (last registration wins) and returns
    /// `Ok(true)`.
    pub fn register<H>(
        &mut self,
        name: impl Into<String>,
        handler: H,
    ) -> std::result::Result<bool, RegistrationError>
    where
        H: Handler + 'static,
    {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RegistrationError::InvalidName { name });
        }

        let replaced = self.commands.insert(name.clone(), Box::new(handler)).is_some();
        if replaced {
            debug!(command = %name, "replaced existing command handler");
        } else {
            debug!(command = %name, "registered command");
        }
        Ok(replaced)
    }

    /// Register a closure. Same semantics as [`register`](Self::register).
    pub fn register_fn<F>(
        &mut self,
        name: impl Into<String>,
        handler: F,
    ) -> std::result::Result<bool, RegistrationError>
    where
        F: Fn(&Invocation<'_>, &[String]) -> anyhow::Result<OutputMessage> + 'static,
    {
        self.register(name, handler)
    }

    /// Register the built-in `help` and `debug` commands.
    pub fn register_defaults(&mut self) {
        self.commands
            .insert(builtins::HELP.to_string(), Box::new(builtins::help));
        self.commands
            .insert(builtins::DEBUG.to_string(), Box::new(builtins::debug));
        debug!(commands = ?self.commands(), "registered default commands");
    }

    /// Route one raw line and report the result through the sink.
    ///
    /// Never fails: any [`DispatchError`] is logged and replaced by
    /// [`OutputMessage::sorry`]. Exactly one message is emitted per call.
    pub fn dispatch(&mut self, raw_line: &str) -> OutputMessage {
        let message = match self.try_dispatch(raw_line) {
            Ok(message) => message,
            Err(err) => {
                match &err {
                    DispatchError::HandlerExecution { name, source } => {
                        error!(
                            command = %name,
                            error = %format!("{:#}", source),
                            "command handler failed"
                        );
                    }
                    other => warn!(line = raw_line, error = %other, "could not dispatch command"),
                }
                OutputMessage::sorry()
            }
        };
        self.sink.emit(&message);
        message
    }

    /// Route one raw line without touching the sink.
    pub fn try_dispatch(&self, raw_line: &str) -> Result<OutputMessage> {
        let mut tokens = tokenize(raw_line).into_iter();
        let name = tokens.next().ok_or(DispatchError::EmptyCommand)?;
        let args: Vec<String> = tokens.collect();

        let handler = self
            .commands
            .get(&name)
            .ok_or_else(|| DispatchError::UnknownCommand { name: name.clone() })?;

        debug!(command = %name, args = ?args, "dispatching command");
        let invocation = Invocation::new(&name, self.commands());
        let outcome =
            panic::catch_unwind(AssertUnwindSafe(|| handler.handle(&invocation, &args)));

        match outcome {
            Ok(Ok(message)) => Ok(message),
            Ok(Err(source)) => Err(DispatchError::HandlerExecution {
                name: name.clone(),
                source,
            }),
            Err(payload) => Err(DispatchError::HandlerExecution {
                name: name.clone(),
                source: anyhow::anyhow!("handler panicked: {}", panic_message(payload.as_ref())),
            }),
        }
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S> fmt::Debug for CommandRouter<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRouter")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("sink", &self.sink)
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    fn router() -> CommandRouter<RecordingSink> {
        CommandRouter::with_defaults(RecordingSink::new())
    }

    #[test]
    fn test_register_rejects_invalid_names() {
        let mut router = router();
        assert_eq!(
            router.register_fn("", |_, _| Ok(OutputMessage::new("", ""))),
            Err(RegistrationError::InvalidName {
                name: String::new()
            })
        );
        assert!(router
            .register_fn("two words", |_, _| Ok(OutputMessage::new("", "")))
            .is_err());
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn test_register_reports_replacement() {
        let mut router = router();
        let first = router.register_fn("ping", |_, _| Ok(OutputMessage::new("", "pong")));
        let second = router.register_fn("ping", |_, _| Ok(OutputMessage::new("", "PONG")));
        assert_eq!(first, Ok(false));
        assert_eq!(second, Ok(true));
    }

    #[test]
    fn test_try_dispatch_distinguishes_errors() {
        let mut router = router();
        router
            .register_fn("fail", |_, _| Err(anyhow::anyhow!("nope")))
            .expect("valid name");

        assert!(matches!(
            router.try_dispatch("   "),
            Err(DispatchError::EmptyCommand)
        ));
        assert!(matches!(
            router.try_dispatch("missing arg"),
            Err(DispatchError::UnknownCommand { ref name }) if name == "missing"
        ));
        assert!(matches!(
            router.try_dispatch("fail"),
            Err(DispatchError::HandlerExecution { ref name, .. }) if name == "fail"
        ));
        assert!(router.sink().is_empty(), "try_dispatch never prints");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut router = router();
        assert_eq!(router.dispatch("HELP"), OutputMessage::sorry());
    }

    #[test]
    fn test_panicking_handler_is_contained() {
        let mut router = router();
        router
            .register_fn("explode", |_, _| panic!("kaboom"))
            .expect("valid name");

        match router.try_dispatch("explode") {
            Err(DispatchError::HandlerExecution { source, .. }) => {
                assert!(source.to_string().contains("kaboom"));
            }
            other => panic!("expected handler failure, got {:?}", other),
        }

        assert_eq!(router.dispatch("explode"), OutputMessage::sorry());
        assert_eq!(router.dispatch("debug").body, builtins::DEBUG_GREETING);
    }

    #[test]
    fn test_handler_sees_invocation() {
        let mut router = router();
        router
            .register_fn("whoami", |invocation, args| {
                Ok(OutputMessage::new(
                    invocation.command(),
                    format!("{} commands, {} args", invocation.commands().len(), args.len()),
                ))
            })
            .expect("valid name");

        let message = router.dispatch("whoami a b c");
        assert_eq!(message, OutputMessage::new("whoami", "3 commands, 3 args"));
    }
}
