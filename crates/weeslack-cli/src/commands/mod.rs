// Handlers for the `weeslack` subcommands.
//
// main.rs parses arguments and builds the plugin; each module here drives it
// for one subcommand.

pub mod describe;
pub mod exec;
pub mod run;
