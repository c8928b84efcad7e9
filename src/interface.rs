//! Collaborators at the edge of the engine: where choices come from and where events go.
//!
//! The battle code only sees [`InputSource`] and [`EventSink`]. The console and JSON
//! adapters here are what the binary plugs in; tests plug in scripted inputs and an
//! [`EventBus`](crate::battle::state::EventBus).

use crate::battle::state::BattleEvent;
use std::io::{BufRead, Write};

/// A reply to a menu prompt, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Zero-based option index. May be out of range.
    Index(usize),
    /// Text that could not be mapped to any option.
    Unrecognized(String),
    /// No more input will arrive.
    Closed,
}

pub trait InputSource {
    fn request_choice(&mut self, prompt: &str, options: &[String]) -> Reply;
}

pub trait EventSink {
    fn emit(&mut self, event: &BattleEvent);
}

/// Line-based menu input. Accepts a 1-based option number, or a letter that
/// starts exactly one option label.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn show_menu(&mut self, prompt: &str, options: &[String]) -> std::io::Result<()> {
        writeln!(self.writer, "{}", prompt)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.writer, "{}) {}", i + 1, option)?;
        }
        write!(self.writer, "Your choice: ")?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn request_choice(&mut self, prompt: &str, options: &[String]) -> Reply {
        if let Err(e) = self.show_menu(prompt, options) {
            tracing::warn!(error = %e, "failed to write menu");
        }

        // Raw bytes, so a line that is not UTF-8 is consumed and re-prompted.
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => Reply::Closed,
            Ok(_) => parse_reply(String::from_utf8_lossy(&line).trim(), options),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read choice");
                Reply::Closed
            }
        }
    }
}

fn parse_reply(text: &str, options: &[String]) -> Reply {
    if let Ok(number) = text.parse::<usize>() {
        return match number.checked_sub(1) {
            Some(index) => Reply::Index(index),
            None => Reply::Unrecognized(text.to_string()),
        };
    }

    let mut chars = text.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        let letter = letter.to_ascii_lowercase();
        let matches: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, option)| {
                option
                    .chars()
                    .next()
                    .is_some_and(|c| c.to_ascii_lowercase() == letter)
            })
            .map(|(i, _)| i)
            .collect();
        if let [index] = matches[..] {
            return Reply::Index(index);
        }
    }

    Reply::Unrecognized(text.to_string())
}

/// Prints the human-readable form of each event.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> EventSink for ConsoleOutput<W> {
    fn emit(&mut self, event: &BattleEvent) {
        tracing::debug!(?event, "battle event");
        if let Some(text) = event.format() {
            if let Err(e) = writeln!(self.writer, "{}", text) {
                tracing::warn!(error = %e, "failed to write battle event");
            }
        }
    }
}

/// Writes every event, silent ones included, as one JSON object per line.
pub struct JsonOutput<W> {
    writer: W,
}

impl<W: Write> JsonOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> EventSink for JsonOutput<W> {
    fn emit(&mut self, event: &BattleEvent) {
        tracing::debug!(?event, "battle event");
        let result = serde_json::to_writer(&mut self.writer, event)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.writer));
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write battle event as json");
        }
    }
}
