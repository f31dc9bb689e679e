//! Terminal output sink.
//!
//! Renders each router message either as a `label<TAB>body` line or as one
//! JSON object per line.

use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;
use weeslack_lib::{OutputSink, SORRY_LABEL};

use crate::terminal::ColorPalette;

/// How messages are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `label<TAB>body`, label highlighted when colors are supported.
    #[default]
    Text,
    /// One `{"label": ..., "body": ...}` object per line.
    Json,
}

#[derive(Serialize)]
struct JsonMessage<'a> {
    label: &'a str,
    body: &'a str,
}

/// [`OutputSink`] that writes to any [`Write`] implementation.
#[derive(Debug)]
pub struct TerminalSink<W> {
    writer: W,
    format: OutputFormat,
    palette: ColorPalette,
}

impl TerminalSink<io::Stdout> {
    /// Sink over stdout with colors detected from the environment.
    pub fn stdout(format: OutputFormat, color: bool) -> Self {
        let palette = if color {
            ColorPalette::detect()
        } else {
            ColorPalette::plain()
        };
        Self::new(io::stdout(), format, palette)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, format: OutputFormat, palette: ColorPalette) -> Self {
        Self {
            writer,
            format,
            palette,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&mut self, label: &str, body: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let color = if label == SORRY_LABEL {
                    self.palette.error
                } else {
                    self.palette.label
                };
                writeln!(
                    self.writer,
                    "{}{}{}\t{}",
                    color, label, self.palette.reset, body
                )?;
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(&JsonMessage { label, body })
                    .map_err(io::Error::other)?;
                writeln!(self.writer, "{}", json)?;
            }
        }
        self.writer.flush()
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn print(&mut self, label: &str, body: &str) {
        if let Err(err) = self.render(label, body) {
            warn!(error = %err, "failed to write message to terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(format: OutputFormat, palette: ColorPalette, label: &str, body: &str) -> String {
        let mut sink = TerminalSink::new(Vec::new(), format, palette);
        sink.print(label, body);
        String::from_utf8(sink.into_inner()).expect("utf-8 output")
    }

    #[test]
    fn test_text_format_plain() {
        let out = rendered(OutputFormat::Text, ColorPalette::plain(), "help: ", "hi");
        assert_eq!(out, "help: \thi\n");
    }

    #[test]
    fn test_text_format_highlights_sorry_label() {
        let out = rendered(OutputFormat::Text, ColorPalette::colored(), SORRY_LABEL, "x");
        assert!(out.starts_with(crate::terminal::colors::ERROR));
        assert!(out.contains(SORRY_LABEL));
    }

    #[test]
    fn test_json_format() {
        let out = rendered(OutputFormat::Json, ColorPalette::colored(), "", "hello");
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).expect("valid json");
        assert_eq!(value["label"], "");
        assert_eq!(value["body"], "hello");
    }
}
