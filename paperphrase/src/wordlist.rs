//! Wordlists for recovery phrase entry.
//!
//! A [`Wordlist`] is an immutable set of permissible words with a canonical
//! index per word. It answers exact membership queries and draws uniformly
//! random words for phrase generation; it performs no checksum or
//! derivation logic.

use std::collections::HashMap;

use rand_core::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// Number of words in the standard English recovery wordlist.
pub const ENGLISH_WORDLIST_SIZE: usize = 2048;

/// An immutable wordlist mapping each word to a canonical index.
///
/// Membership testing is an exact, case-sensitive string match; `""` is
/// never a member. Constructed once and injected into the phrase builder,
/// which allows tests to substitute a small fixture list.
#[derive(Debug, Clone)]
pub struct Wordlist {
    /// Words in canonical index order.
    words: Vec<String>,
    /// Reverse mapping for O(1) membership and index lookup.
    index: HashMap<String, usize>,
}

impl Wordlist {
    /// The standard 2048-word English recovery wordlist.
    ///
    /// Sourced from the embedded reference list; only the words themselves
    /// are used, no checksum or seed logic.
    pub fn english() -> Self {
        let list = bip39::Language::English.word_list();
        debug_assert_eq!(list.len(), ENGLISH_WORDLIST_SIZE);
        let words: Vec<String> = list.iter().map(|w| (*w).to_owned()).collect();
        let index = words.iter().enumerate().map(|(i, w)| (w.clone(), i)).collect();
        Self { words, index }
    }

    /// Build a wordlist from an ordered sequence of words.
    ///
    /// Canonical indices follow iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateWord`] if the same word appears twice.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i).is_some() {
                return Err(Error::DuplicateWord(word.clone()));
            }
        }
        Ok(Self { words, index })
    }

    /// Number of words in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact, case-sensitive membership test. The empty string is never a member.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get the word at the given canonical index.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Get the canonical index of the given word.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Draw `count` words independently and uniformly at random, with
    /// replacement.
    ///
    /// Each draw takes a 32-bit value from `rng` and reduces it into the
    /// index space by rejection sampling: draws landing in the incomplete
    /// tail group above the largest multiple of the list size are retried.
    /// For power-of-two list sizes (the standard list has 2048 entries)
    /// the tail is empty and no draw is ever rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyWordlist`] if the list has no entries, and
    /// [`Error::RandomSource`] if the generator fails. A failed generator
    /// is fatal; there is no fallback source.
    pub fn sample<R: RngCore + CryptoRng>(&self, rng: &mut R, count: usize) -> Result<Vec<&str>> {
        if self.words.is_empty() {
            return Err(Error::EmptyWordlist);
        }

        let n = self.words.len() as u64;
        // Largest multiple of n representable in 32 bits; draws at or above
        // this would over-weight the low indices.
        let limit = ((1u64 << 32) / n) * n;

        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let mut buf = [0u8; 4];
            rng.try_fill_bytes(&mut buf)?;
            let draw = u64::from(u32::from_le_bytes(buf));
            if draw < limit {
                out.push(self.words[(draw % n) as usize].as_str());
            }
        }
        Ok(out)
    }
}
