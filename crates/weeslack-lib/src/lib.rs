//! wee_slack command router.
//!
//! This crate turns one line of text typed after the host's `/slack` command
//! into exactly one output message. Lines are split on whitespace, the first
//! token selects a registered handler, and the rest become its arguments.
//! Anything that cannot be dispatched is reported with a single fixed
//! message. Host adapters (the terminal CLI, an IRC client plugin) should only
//! depend on the items exported here.
//!

#![deny(warnings)]

pub mod builtins;
pub mod error;
pub mod handler;
pub mod message;
pub mod plugin;
pub mod router;
pub mod sink;

pub use error::{DispatchError, RegistrationError, Result};
pub use handler::{tokenize, Handler, Invocation};
pub use message::{OutputMessage, SORRY_BODY, SORRY_LABEL};
pub use plugin::{CommandHook, Plugin, PluginSignature, ReturnCode};
pub use router::CommandRouter;
pub use sink::{OutputSink, RecordingSink};
