//! Status output for the mktartan CLI.
//!
//! Progress is reported Cargo-style on stderr, one right-aligned verb per
//! line (`     Weaving mar.tdf`). stdout is never written to.

use std::env;
use std::io::{self, IsTerminal};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Width of the verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Progress,
    Note,
    Warning,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Progress => "\x1b[32m",
            Style::Note => "\x1b[36m",
            Style::Warning => "\x1b[33m",
        }
    }
}

/// Reports build progress and warnings on stderr.
///
/// Escape codes are only emitted when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never colours its output.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// A definition file is about to be read.
    pub fn weaving(&self, path: &Path) {
        self.emit(Style::Progress, "Weaving", &display_path(path));
    }

    /// An image of `width` x `height` pixels was written to `path`.
    pub fn wrote(&self, path: &Path, width: usize, height: usize) {
        let size = self.dim(&format!("({width}x{height})"));
        self.emit(Style::Progress, "Wrote", &format!("{} {size}", display_path(path)));
    }

    /// Every file was built.
    pub fn finished(&self, images: usize, tartans: usize) {
        let summary = format!(
            "{} from {}",
            plural(images, "image", "images"),
            plural(tartans, "tartan", "tartans")
        );
        self.emit(Style::Progress, "Finished", &summary);
    }

    /// A validation warning, tagged with its code.
    pub fn warning(&self, message: &str, code: &str) {
        let code = self.dim(&format!("[{code}]"));
        self.emit(Style::Warning, "warning", &format!("{message} {code}"));
    }

    /// A suggested fix for the warning printed just before.
    pub fn help(&self, text: &str) {
        self.emit(Style::Note, "help", text);
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn format_line(&self, style: Style, verb: &str, message: &str) -> String {
        if self.color {
            let ansi = style.ansi();
            format!("{BOLD}{ansi}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn emit(&self, style: Style, verb: &str, message: &str) {
        eprintln!("{}", self.format_line(style, verb, message));
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "image", "images")` gives "1 image".
pub fn plural(n: usize, singular: &str, many: &str) -> String {
    let word = if n == 1 { singular } else { many };
    format!("{n} {word}")
}

/// `path` relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    let relative = env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
