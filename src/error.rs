use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Location;

/// Main error type for mktartan operations
#[derive(Error, Diagnostic, Debug)]
pub enum TartanError {
    #[error("Cannot open '{}'", .path.display())]
    #[diagnostic(code(mktartan::io::open))]
    CannotOpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open file '{}'", .path.display())]
    #[diagnostic(code(mktartan::io::write))]
    CannotWriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Colour indicator must be a letter at {at}")]
    #[diagnostic(
        code(mktartan::parse::colour_letter),
        help("Write colours as '#rrggbb l', e.g. '#ffc800 y'")
    )]
    InvalidColorLetter { found: Option<char>, at: Location },

    #[error("Too many colours defined at {at} (at most {max})")]
    #[diagnostic(
        code(mktartan::parse::palette_overflow),
        help("Each colour is named by one letter, so a file can define at most 26")
    )]
    PaletteOverflow { max: usize, at: Location },

    #[error("Invalid colour '{letter}' found at {at}")]
    #[diagnostic(
        code(mktartan::parse::unknown_colour),
        help("Colours must be defined with a '#rrggbb l' line before they are used")
    )]
    UnknownColor { letter: char, at: Location },

    #[error("Invalid thread count found for colour '{letter}' at {at}")]
    #[diagnostic(
        code(mktartan::parse::thread_count),
        help("Follow each colour letter with a thread count of at least 1, e.g. 'r6'")
    )]
    InvalidThreadCount { letter: char, at: Location },

    #[error("Too many threads in pattern line at {at} (at most {max})")]
    #[diagnostic(
        code(mktartan::parse::too_many_threads),
        help("Use smaller thread counts or a smaller -s scale")
    )]
    TooManyThreads { max: usize, at: Location },

    #[error("Two open brackets found in pattern line at {at}")]
    #[diagnostic(
        code(mktartan::parse::duplicate_open),
        help("There may only be one pair of brackets in a pattern line")
    )]
    DuplicateOpenBracket { at: Location },

    #[error("Close bracket found with no open bracket at {at}")]
    #[diagnostic(code(mktartan::parse::unmatched_close))]
    UnmatchedCloseBracket { at: Location },

    #[error("Two close brackets found in pattern line at {at}")]
    #[diagnostic(
        code(mktartan::parse::duplicate_close),
        help("There may only be one pair of brackets in a pattern line")
    )]
    DuplicateCloseBracket { at: Location },

    #[error("Close bracket missing in pattern line {line}")]
    #[diagnostic(code(mktartan::parse::missing_close))]
    MissingCloseBracket { line: u32 },

    #[error("Close bracket before open bracket in pattern line {line}")]
    #[diagnostic(code(mktartan::parse::bracket_order))]
    BracketOrderError { line: u32 },

    #[error("No pattern line found")]
    #[diagnostic(
        code(mktartan::weave::no_pattern),
        help("Add a pattern line such as 'r6(g10b10)k1'")
    )]
    NoPatternLine,

    #[error("Pattern line {line} has no threads")]
    #[diagnostic(
        code(mktartan::weave::empty_pattern),
        help("A pattern line needs at least one colour and thread count, e.g. 'k4'")
    )]
    EmptyPattern { line: u32 },

    #[error("Too many pattern lines found at line {line}")]
    #[diagnostic(
        code(mktartan::weave::too_many_patterns),
        help("Use one pattern line for a tartan, or two (warp then weft) for a tweed")
    )]
    TooManyPatternLines { line: u32 },

    #[error("Image of {width}x{height} pixels is too large (at most {max} pixels)")]
    #[diagnostic(
        code(mktartan::render::too_large),
        help("Use smaller thread counts or a smaller -s scale")
    )]
    ImageTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("Invalid arguments: {message}")]
    #[diagnostic(code(mktartan::cli), help("Run 'mktartan -h' for usage"))]
    InvalidArguments { message: String },
}

pub type Result<T> = std::result::Result<T, TartanError>;
