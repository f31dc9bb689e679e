//! Print the plugin signature and command hook the host would register.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use weeslack_lib::{CommandHook, OutputSink, Plugin, PluginSignature};

use crate::output::OutputFormat;

#[derive(Serialize)]
struct Description<'a> {
    signature: &'a PluginSignature,
    hook: &'a CommandHook,
}

/// Write the plugin registration metadata to `out`.
pub fn handle_describe<S: OutputSink, W: Write>(
    plugin: &Plugin<S>,
    format: OutputFormat,
    mut out: W,
) -> Result<()> {
    let signature = plugin.signature();
    let hook = plugin.hook();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&Description {
                signature,
                hook: &hook,
            })?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(out, "Plugin:      {} {}", signature.name, signature.version)?;
            writeln!(out, "Author:      {}", signature.author)?;
            writeln!(out, "License:     {}", signature.license)?;
            writeln!(out, "Description: {}", signature.description)?;
            writeln!(out, "Command:     /{} {}", hook.command, hook.args)?;
            writeln!(out, "             {}", hook.description)?;
            writeln!(out, "Completion:  {}", hook.completion)?;
        }
    }
    Ok(())
}
