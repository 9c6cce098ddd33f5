//! Thread sequences and the warp/weft weave definition.
//!
//! A [`ThreadSequence`] is one repeat of the weave in one direction: a list
//! of palette indices, one per thread. A [`Weave`] pairs the warp (the
//! lengthwise threads, image columns) with the weft (the crosswise threads,
//! image rows).

use crate::error::{Result, TartanError};

use super::ColourIndex;

/// Most threads one direction of a weave may hold.
pub const MAX_THREADS: usize = 1 << 16;

/// One repeat of threads in a single direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadSequence {
    threads: Vec<ColourIndex>,
}

impl ThreadSequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` threads of one colour.
    pub fn push_run(&mut self, colour: ColourIndex, count: usize) {
        self.threads.extend(std::iter::repeat(colour).take(count));
    }

    /// Append the threads in `start..end` in reverse order.
    ///
    /// This is the reflection applied to a bracketed region of a pattern
    /// line, so `start..end` must already be present in the sequence.
    pub fn push_reflection(&mut self, start: usize, end: usize) {
        let end = end.min(self.threads.len());
        let start = start.min(end);
        for i in (start..end).rev() {
            let colour = self.threads[i];
            self.threads.push(colour);
        }
    }

    /// Thread colour at `index`.
    pub fn get(&self, index: usize) -> Option<ColourIndex> {
        self.threads.get(index).copied()
    }

    /// Get the number of threads.
    pub fn len(&self) -> usize {
        self.threads.len()
    }

    /// Check if the sequence has no threads.
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    pub fn as_slice(&self) -> &[ColourIndex] {
        &self.threads
    }

    pub fn iter(&self) -> impl Iterator<Item = ColourIndex> + '_ {
        self.threads.iter().copied()
    }
}

impl From<Vec<ColourIndex>> for ThreadSequence {
    fn from(threads: Vec<ColourIndex>) -> Self {
        Self { threads }
    }
}

/// The warp and weft thread sequences of a cloth.
///
/// Both sequences are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weave {
    warp: ThreadSequence,
    weft: ThreadSequence,
}

impl Weave {
    /// Lengthwise threads; one per image column group.
    pub fn warp(&self) -> &ThreadSequence {
        &self.warp
    }

    /// Crosswise threads; one per image row group.
    pub fn weft(&self) -> &ThreadSequence {
        &self.weft
    }

    /// True when warp and weft carry the same threads (a tartan rather than
    /// a tweed).
    pub fn is_symmetric(&self) -> bool {
        self.warp == self.weft
    }

    /// Iterate over every thread colour used by the weave.
    pub fn colours(&self) -> impl Iterator<Item = ColourIndex> + '_ {
        self.warp.iter().chain(self.weft.iter())
    }
}

/// Collects parsed pattern lines and assembles them into a [`Weave`].
///
/// The first pattern line is the warp, the second the weft. With a single
/// line the weft is a copy of the warp.
#[derive(Debug, Default)]
pub struct WeaveBuilder {
    sequences: Vec<ThreadSequence>,
}

impl WeaveBuilder {
    /// Maximum number of pattern lines (warp and weft).
    pub const MAX_LINES: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Fail if another pattern line, found at `line`, cannot be accepted.
    ///
    /// Called before parsing the line so that a surplus line is reported
    /// even when its own contents are malformed.
    pub fn check_room(&self, line: u32) -> Result<()> {
        if self.sequences.len() >= Self::MAX_LINES {
            return Err(TartanError::TooManyPatternLines { line });
        }
        Ok(())
    }

    /// Add the thread sequence parsed from the pattern line at `line`.
    pub fn push(&mut self, sequence: ThreadSequence, line: u32) -> Result<()> {
        self.check_room(line)?;
        if sequence.is_empty() {
            return Err(TartanError::EmptyPattern { line });
        }
        self.sequences.push(sequence);
        Ok(())
    }

    /// Number of pattern lines accepted so far.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Build the weave, duplicating the warp when only one line was given.
    pub fn build(self) -> Result<Weave> {
        let mut sequences = self.sequences.into_iter();
        let warp = sequences.next().ok_or(TartanError::NoPatternLine)?;
        let weft = sequences.next().unwrap_or_else(|| warp.clone());
        Ok(Weave { warp, weft })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_run() {
        let mut seq = ThreadSequence::new();
        seq.push_run(0, 2);
        seq.push_run(1, 3);
        assert_eq!(seq.as_slice(), &[0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_push_reflection() {
        let mut seq = ThreadSequence::from(vec![0, 1, 2, 3]);
        seq.push_reflection(1, 3);
        assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_push_reflection_empty_region() {
        let mut seq = ThreadSequence::from(vec![0, 1]);
        seq.push_reflection(1, 1);
        assert_eq!(seq.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_single_line_is_symmetric() {
        let mut builder = WeaveBuilder::new();
        builder.push(ThreadSequence::from(vec![0, 0, 1, 1]), 3).unwrap();
        let weave = builder.build().unwrap();

        assert_eq!(weave.warp(), weave.weft());
        assert!(weave.is_symmetric());
    }

    #[test]
    fn test_two_lines_independent() {
        let mut builder = WeaveBuilder::new();
        builder.push(ThreadSequence::from(vec![0, 1]), 1).unwrap();
        builder.push(ThreadSequence::from(vec![2, 2, 2]), 2).unwrap();
        let weave = builder.build().unwrap();

        assert_eq!(weave.warp().as_slice(), &[0, 1]);
        assert_eq!(weave.weft().as_slice(), &[2, 2, 2]);
        assert!(!weave.is_symmetric());
    }

    #[test]
    fn test_no_lines() {
        let result = WeaveBuilder::new().build();
        assert!(matches!(result, Err(TartanError::NoPatternLine)));
    }

    #[test]
    fn test_third_line_rejected() {
        let mut builder = WeaveBuilder::new();
        builder.push(ThreadSequence::from(vec![0]), 1).unwrap();
        builder.push(ThreadSequence::from(vec![1]), 2).unwrap();

        assert!(matches!(
            builder.check_room(5),
            Err(TartanError::TooManyPatternLines { line: 5 })
        ));
        assert!(matches!(
            builder.push(ThreadSequence::from(vec![0]), 5),
            Err(TartanError::TooManyPatternLines { line: 5 })
        ));
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let mut builder = WeaveBuilder::new();
        assert!(matches!(
            builder.push(ThreadSequence::new(), 4),
            Err(TartanError::EmptyPattern { line: 4 })
        ));
        assert!(builder.is_empty());
    }
}
