//! User-facing message sink.
//!
//! Commands receive an [`Output`] instead of printing directly, so a run can be
//! captured in tests with [`MemoryOutput`].

use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

pub trait Output {
    fn emit(&mut self, level: Level, message: &str);

    fn info(&mut self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.emit(Level::Success, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// Colored terminal output. Warnings and errors go to stderr.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn emit(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => println!("{}", message),
            Level::Success => println!("{} {}", "✓".green(), message),
            Level::Warn => eprintln!("{} {}", "!".yellow().bold(), message.yellow()),
            Level::Error => eprintln!("{} {}", "✗".red().bold(), message.red()),
        }
    }
}

/// Records every message in order.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    pub messages: Vec<(Level, String)>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(&self, level: Level) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, m)| m.contains(needle))
    }
}

impl Output for MemoryOutput {
    fn emit(&mut self, level: Level, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}
