//! Output sink contract between the router and its host.

use crate::message::OutputMessage;

/// Channel through which user-visible messages leave the router.
///
/// Hosts implement this over their own printing primitive. Printing is
/// assumed to always succeed.
pub trait OutputSink {
    fn print(&mut self, label: &str, body: &str);

    /// Print a whole message.
    fn emit(&mut self, message: &OutputMessage) {
        self.print(&message.label, &message.body);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn print(&mut self, label: &str, body: &str) {
        (**self).print(label, body);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn print(&mut self, label: &str, body: &str) {
        (**self).print(label, body);
    }
}

/// Sink that keeps every message it receives, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    messages: Vec<OutputMessage>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[OutputMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&OutputMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<OutputMessage> {
        std::mem::take(&mut self.messages)
    }
}

impl OutputSink for RecordingSink {
    fn print(&mut self, label: &str, body: &str) {
        self.messages.push(OutputMessage::new(label, body));
    }
}
