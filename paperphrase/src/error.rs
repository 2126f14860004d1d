//! Error types for phrase entry operations.

use core::fmt;

use crate::phrase::PHRASE_WORDS;

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during phrase entry operations.
///
/// An unrecognized word in a slot is deliberately *not* an error: it is a
/// persistent display state reported through [`crate::SlotStatus`] so the
/// caller can paint per-word feedback. Only structural misuse and platform
/// failures surface here.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Slot index past the end of the fixed 12-slot phrase.
    SlotOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A word appeared more than once while building a wordlist.
    DuplicateWord(String),
    /// Attempted to sample from a wordlist with no entries.
    EmptyWordlist,
    /// The operating-system CSPRNG was unavailable or failed.
    ///
    /// This is fatal for generation: there is no fallback to a weaker
    /// generator, since the phrase is a wallet recovery secret.
    RandomSource(rand_core::Error),
    /// The host payload could not be serialized.
    Payload(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotOutOfRange { index } => {
                write!(f, "slot index {index} out of range, phrase has {PHRASE_WORDS} slots")
            }
            Self::DuplicateWord(word) => write!(f, "duplicate word in wordlist: \"{word}\""),
            Self::EmptyWordlist => write!(f, "cannot sample from an empty wordlist"),
            Self::RandomSource(e) => write!(f, "random source unavailable: {e}"),
            Self::Payload(e) => write!(f, "failed to serialize host payload: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RandomSource(e) => Some(e),
            Self::Payload(e) => Some(e),
            Self::SlotOutOfRange { .. } | Self::DuplicateWord(_) | Self::EmptyWordlist => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Self::RandomSource(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err)
    }
}
