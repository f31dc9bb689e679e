//! Host-facing plugin metadata and lifecycle.
//!
//! Nothing here changes how lines are routed. A host adapter uses
//! [`PluginSignature`] and [`CommandHook`] to declare the plugin to its
//! runtime, then forwards every `/slack ...` invocation to
//! [`Plugin::command`].

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::message::OutputMessage;
use crate::router::CommandRouter;
use crate::sink::OutputSink;

/// Status returned to the host from lifecycle callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnCode {
    Ok,
    Error,
}

/// Registration signature declared to the host at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSignature {
    pub name: String,
    pub author: String,
    pub version: String,
    pub license: String,
    pub description: String,
    pub shutdown_function: String,
    pub charset: String,
}

impl Default for PluginSignature {
    fn default() -> Self {
        Self {
            name: "wee_slack".to_string(),
            author: "Ryan Huber <rhuber@gmail.com>, Mike Krisher <mkrisher@gmail.com>"
                .to_string(),
            version: "0.1".to_string(),
            license: "MIT".to_string(),
            description: "Extends weechat for typing notification/search/etc on slack.com"
                .to_string(),
            shutdown_function: "weechat_unload".to_string(),
            charset: "UTF-8".to_string(),
        }
    }
}

/// Metadata for the single host command that feeds the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandHook {
    pub command: String,
    pub description: String,
    pub args: String,
    pub args_description: String,
    /// Host completion template: registered command names joined by `|`.
    pub completion: String,
    pub callback: String,
}

impl CommandHook {
    /// Name of the host command.
    pub const COMMAND: &'static str = "slack";

    /// Build the hook declaration for the commands currently registered.
    pub fn for_router<S: OutputSink>(router: &CommandRouter<S>) -> Self {
        Self {
            command: Self::COMMAND.to_string(),
            description:
                "Plugin to allow typing notification and sync of read markers for slack.com"
                    .to_string(),
            args: "[list]".to_string(),
            args_description: "description of arguments".to_string(),
            completion: router.commands().join("|"),
            callback: Self::COMMAND.to_string(),
        }
    }
}

/// A router bundled with the metadata its host needs.
#[derive(Debug)]
pub struct Plugin<S> {
    signature: PluginSignature,
    router: CommandRouter<S>,
}

impl<S: OutputSink> Plugin<S> {
    /// Startup hook: build the router and register the default commands.
    pub fn init(sink: S) -> Self {
        let signature = PluginSignature::default();
        let router = CommandRouter::with_defaults(sink);
        info!(
            plugin = %signature.name,
            version = %signature.version,
            commands = ?router.commands(),
            "plugin initialized"
        );
        Self { signature, router }
    }

    /// Host command callback. Always succeeds from the host's point of view.
    pub fn command(&mut self, args: &str) -> ReturnCode {
        self.router.dispatch(args);
        ReturnCode::Ok
    }

    /// Same as [`command`](Self::command) but hands back the emitted message.
    pub fn command_message(&mut self, args: &str) -> OutputMessage {
        self.router.dispatch(args)
    }

    /// Shutdown hook.
    pub fn unload(&self) -> ReturnCode {
        info!(plugin = %self.signature.name, "plugin unloaded");
        ReturnCode::Ok
    }

    pub fn signature(&self) -> &PluginSignature {
        &self.signature
    }

    pub fn hook(&self) -> CommandHook {
        CommandHook::for_router(&self.router)
    }

    pub fn router(&self) -> &CommandRouter<S> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut CommandRouter<S> {
        &mut self.router
    }

    pub fn into_router(self) -> CommandRouter<S> {
        self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn test_hook_completion_tracks_registrations() {
        let mut plugin = Plugin::init(RecordingSink::new());
        assert_eq!(plugin.hook().completion, "debug|help");

        plugin
            .router_mut()
            .register_fn("list", |_, _| Ok(OutputMessage::new("list:", "")))
            .expect("valid name");
        assert_eq!(plugin.hook().completion, "debug|help|list");
        assert_eq!(plugin.hook().args, "[list]");
        assert_eq!(plugin.hook().command, "slack");
    }

    #[test]
    fn test_command_always_returns_ok() {
        let mut plugin = Plugin::init(RecordingSink::new());
        assert_eq!(plugin.command("nonsense"), ReturnCode::Ok);
        assert_eq!(plugin.command(""), ReturnCode::Ok);
        assert_eq!(plugin.router().sink().len(), 2);
        assert_eq!(plugin.unload(), ReturnCode::Ok);
    }

    #[test]
    fn test_signature_serializes() {
        let json = serde_json::to_value(PluginSignature::default()).expect("serialize");
        assert_eq!(json["name"], "wee_slack");
        assert_eq!(json["shutdown_function"], "weechat_unload");
    }
}
