use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use weeslack_cli::commands::{describe::handle_describe, exec::handle_exec, run::handle_run};
use weeslack_cli::logging::{init_logging, LoggingConfig};
use weeslack_cli::output::{OutputFormat, TerminalSink};
use weeslack_lib::Plugin;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal host for the wee_slack command router")]
struct Cli {
    /// Message rendering on stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Never emit ANSI color codes.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log filter; overrides RUST_LOG (e.g. "debug").
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch one command line, e.g. `weeslack exec help`.
    Exec {
        /// Command name followed by its arguments.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Dispatch every line of a script file, or of stdin.
    Run {
        /// File with one command line per line.
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Print the plugin signature and the `/slack` command hook.
    Describe,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig::from_env().with_level(cli.log_level.as_deref()))?;
    debug!(?cli, "parsed arguments");

    let sink = TerminalSink::stdout(cli.format, !cli.no_color);
    let mut plugin = Plugin::init(sink);

    let result = match cli.command {
        Command::Exec { words } => {
            handle_exec(&mut plugin, &words);
            Ok(())
        }
        Command::Run { script } => handle_run(&mut plugin, script.as_deref()).map(|_| ()),
        Command::Describe => handle_describe(&plugin, cli.format, std::io::stdout().lock()),
    };

    plugin.unload();
    result
}
