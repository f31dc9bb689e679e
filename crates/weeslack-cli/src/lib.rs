//! wee_slack terminal host library.
//!
//! This crate adapts the command router to a terminal: it provides the
//! stdout output sink, color detection, logging setup, and the handlers
//! behind each `weeslack` subcommand.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
