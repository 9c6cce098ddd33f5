//! Pattern line parser.
//!
//! A pattern line lists thread runs as a colour letter followed by a thread
//! count, e.g. `r6g10b10k1`. One region may be wrapped in brackets:
//!
//! ```text
//! r6(g10b10)k1
//! ```
//!
//! After the whole line has been read, the bracketed threads are reversed
//! and appended once more, so the line above weaves as
//! `r6 g10 b10 k1 b10 g10`.
//!
//! A line may weave at most [`MAX_THREADS`] threads, reflection and scale
//! included.

use crate::error::{Result, TartanError};
use crate::types::{Palette, ThreadSequence, MAX_THREADS};

use super::span::Location;

/// Parse one pattern line into a thread sequence.
///
/// Every thread count is multiplied by `scale`. Colours are resolved
/// through `palette`, so they must already be defined. Any character that
/// is not a bracket is read as a colour letter.
pub fn parse_pattern_line(
    line: &str,
    line_no: u32,
    palette: &Palette,
    scale: u32,
) -> Result<ThreadSequence> {
    let mut threads = ThreadSequence::new();
    let mut reflect_start: Option<usize> = None;
    let mut reflect_end: Option<(usize, Location)> = None;

    let mut chars = line.chars().enumerate().peekable();
    while let Some((index, c)) = chars.next() {
        let at = Location::at_char(line_no, index);
        match c {
            '(' => {
                if reflect_start.is_some() {
                    return Err(TartanError::DuplicateOpenBracket { at });
                }
                reflect_start = Some(threads.len());
            }
            ')' => {
                if reflect_start.is_none() {
                    return Err(TartanError::UnmatchedCloseBracket { at });
                }
                if reflect_end.is_some() {
                    return Err(TartanError::DuplicateCloseBracket { at });
                }
                reflect_end = Some((threads.len(), at));
            }
            _ => {
                let letter = c.to_ascii_lowercase();
                let colour = palette
                    .find(letter)
                    .ok_or(TartanError::UnknownColor { letter, at })?;

                let mut digits = String::new();
                while let Some((_, d)) = chars.next_if(|(_, d)| d.is_ascii_digit()) {
                    digits.push(d);
                }

                // Digits only, so parsing fails just for an empty or huge count
                let count = match digits.parse::<usize>() {
                    Ok(0) => return Err(TartanError::InvalidThreadCount { letter, at }),
                    Err(_) if digits.is_empty() => {
                        return Err(TartanError::InvalidThreadCount { letter, at })
                    }
                    Ok(n) => n.checked_mul(scale as usize),
                    Err(_) => None,
                };
                let count = count
                    .filter(|&n| n <= MAX_THREADS - threads.len())
                    .ok_or(TartanError::TooManyThreads { max: MAX_THREADS, at })?;

                threads.push_run(colour, count);
            }
        }
    }

    if let Some(start) = reflect_start {
        let (end, close_at) =
            reflect_end.ok_or(TartanError::MissingCloseBracket { line: line_no })?;
        if end < start {
            return Err(TartanError::BracketOrderError { line: line_no });
        }
        if end - start > MAX_THREADS - threads.len() {
            return Err(TartanError::TooManyThreads {
                max: MAX_THREADS,
                at: close_at,
            });
        }
        threads.push_reflection(start, end);
    }

    Ok(threads)
}
