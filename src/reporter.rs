// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Leveled console output for the progress of a batch.

use std::{
    cell::RefCell,
    fmt,
    io::{self, IsTerminal, Write},
    path::Path,
};

use colored::{Color, Colorize};

/// Levels of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Debug,
    Success,
}

impl Level {
    fn color(&self) -> Option<Color> {
        match self {
            Level::Info => None,
            Level::Warn => Some(Color::Yellow),
            Level::Error => Some(Color::Red),
            Level::Debug => Some(Color::Cyan),
            Level::Success => Some(Color::Green),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
            Level::Success => "SUCCESS",
        };

        write!(f, "{label}")
    }
}

/// Receives messages about the progress of a batch.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    fn debug(&self, message: &str);

    fn success(&self, message: &str);

    /// Formats a path for a message.
    fn path(&self, path: &Path) -> String {
        path.display().to_string()
    }
}

/// How messages are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Colored,
    Plain,
}

impl Style {
    /// Colors are used only when they are not disabled and the standard output is a terminal.
    pub fn detect(no_color: bool) -> Self {
        if !no_color && io::stdout().is_terminal() {
            Style::Colored
        } else {
            Style::Plain
        }
    }
}

/// Writes `[LEVEL] message` lines to a sink.
///
/// Failures of the sink are ignored.
pub struct ConsoleReporter<W: Write> {
    output: RefCell<W>,
    style: Style,
    show_debug: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(style: Style, show_debug: bool) -> Self {
        ConsoleReporter::new(io::stdout(), style, show_debug)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: W, style: Style, show_debug: bool) -> Self {
        ConsoleReporter {
            output: RefCell::new(output),
            style,
            show_debug,
        }
    }

    pub fn into_inner(self) -> W {
        self.output.into_inner()
    }

    fn log(&self, level: Level, message: &str) {
        let line = format!("[{level}] {message}");

        let line = match (self.style, level.color()) {
            (Style::Colored, Some(color)) => line.color(color).to_string(),
            _ => line,
        };

        let _ = writeln!(self.output.borrow_mut(), "{line}");
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn debug(&self, message: &str) {
        if self.show_debug {
            self.log(Level::Debug, message);
        }
    }

    fn success(&self, message: &str) {
        self.log(Level::Success, message);
    }

    fn path(&self, path: &Path) -> String {
        let path = path.display().to_string();

        match self.style {
            Style::Colored => path.blue().to_string(),
            Style::Plain => path,
        }
    }
}
