use thiserror::Error;

/// Convenient result alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Failures raised while routing a single input line.
///
/// These stay distinct internally so they can be logged and asserted on, but
/// [`CommandRouter::dispatch`](crate::CommandRouter::dispatch) collapses all of
/// them into the same user-facing message.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The raw line contained no tokens.
    #[error("no command supplied")]
    EmptyCommand,

    /// The first token did not match a registered command.
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// A matched handler failed while running.
    #[error("command {name} failed: {source}")]
    HandlerExecution {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl DispatchError {
    /// Name of the command involved, when one was supplied.
    pub fn command_name(&self) -> Option<&str> {
        match self {
            DispatchError::EmptyCommand => None,
            DispatchError::UnknownCommand { name }
            | DispatchError::HandlerExecution { name, .. } => Some(name.as_str()),
        }
    }
}

/// Raised when a command cannot be registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Empty names and names containing whitespace can never be dispatched.
    #[error("invalid command name {name:?}: names must be non-empty and contain no whitespace")]
    InvalidName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name() {
        assert_eq!(DispatchError::EmptyCommand.command_name(), None);
        let err = DispatchError::UnknownCommand {
            name: "nope".to_string(),
        };
        assert_eq!(err.command_name(), Some("nope"));
    }

    #[test]
    fn test_handler_execution_keeps_cause() {
        use std::error::Error as _;

        let err = DispatchError::HandlerExecution {
            name: "boom".to_string(),
            source: anyhow::anyhow!("disk on fire"),
        };
        assert!(err.to_string().contains("boom"));
        let cause = err.source().expect("source is preserved");
        assert_eq!(cause.to_string(), "disk on fire");
    }
}
