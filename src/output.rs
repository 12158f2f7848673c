//! Progress reporting for the flamegen CLI.
//!
//! Status lines look like Cargo's: a bold verb right-aligned in a fixed
//! column, then the message. Everything goes to stderr.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Column the verb is right-aligned to.
const VERB_WIDTH: usize = 12;

/// Colour of the verb in a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work started or finished.
    Progress,
    Info,
    Warning,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Info => "\x1b[36m",
            Tone::Warning => "\x1b[33m",
        }
    }
}

/// Where status lines end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Stderr { color: bool },
    Discard,
}

/// Cargo-style status printer.
#[derive(Debug)]
pub struct Printer {
    sink: Sink,
}

impl Printer {
    /// Print to stderr, coloured when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            sink: Sink::Stderr {
                color: io::stderr().is_terminal(),
            },
        }
    }

    /// Drop every line.
    pub fn quiet() -> Self {
        Self {
            sink: Sink::Discard,
        }
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warning, verb, message);
    }

    /// Dimmed text, e.g. for written file paths.
    pub fn dim(&self, text: &str) -> String {
        self.paint("\x1b[2m", text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(Tone::Info.ansi(), text)
    }

    fn colored(&self) -> bool {
        matches!(self.sink, Sink::Stderr { color: true })
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.colored() {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    /// The full line for `verb` and `message`, without a trailing newline.
    fn render_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        if self.colored() {
            format!("{BOLD}{}{verb}{RESET} {message}", tone.ansi())
        } else {
            format!("{verb} {message}")
        }
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        if self.sink == Sink::Discard {
            return;
        }
        let line = self.render_line(tone, verb, message);
        // A closed stderr is not worth failing the run over
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "image", "images")` is "1 image"; any other count takes the plural.
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    let noun = if n == 1 { singular } else { many };
    format!("{n} {noun}")
}

/// `path` relative to the working directory when it lies under it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_owned(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
