//! Slot-based recovery phrase entry.
//!
//! [`PhraseBuilder`] owns the 12 candidate word slots behind a phrase entry
//! screen. Slots are edited one at a time or regenerated in bulk from the
//! operating-system CSPRNG; validity is computed on demand against the
//! injected [`Wordlist`] so the caller can paint per-word feedback; the
//! assembled phrase is only materialized at submission time.

use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};
use crate::host::{HostBridge, HostMessage};
use crate::wordlist::Wordlist;

/// Number of word slots in a recovery phrase.
pub const PHRASE_WORDS: usize = 12;

/// Display state of a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// The slot holds no word.
    Empty,
    /// The slot holds a word that is not in the wordlist.
    Invalid,
    /// The slot holds a wordlist member.
    Valid,
}

/// Editable 12-slot recovery phrase.
///
/// Created with all slots empty; never persisted. Slot order is the
/// mnemonic word order and is significant. Slot contents are treated as a
/// wallet recovery secret: they are zeroized on overwrite and when the
/// builder is dropped.
pub struct PhraseBuilder {
    wordlist: Wordlist,
    slots: [String; PHRASE_WORDS],
}

impl PhraseBuilder {
    /// Create a builder with all slots empty, validating against `wordlist`.
    pub fn new(wordlist: Wordlist) -> Self {
        Self {
            wordlist,
            slots: core::array::from_fn(|_| String::new()),
        }
    }

    /// The wordlist this builder validates against.
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Store `word` in slot `index` exactly as given.
    ///
    /// No validation happens here: an unrecognized word is stored as-is so
    /// the caller can surface per-word feedback via [`Self::slot_status`].
    /// An empty string clears the slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOutOfRange`] if `index >= PHRASE_WORDS`.
    pub fn set_slot(&mut self, index: usize, word: impl Into<String>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(Error::SlotOutOfRange { index })?;
        slot.zeroize();
        *slot = word.into();
        Ok(())
    }

    /// Clear slot `index` back to empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOutOfRange`] if `index >= PHRASE_WORDS`.
    pub fn clear_slot(&mut self, index: usize) -> Result<()> {
        self.set_slot(index, String::new())
    }

    /// The word in slot `index`, or `None` if the index is out of range.
    ///
    /// An empty slot yields `Some("")`.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    /// All 12 slots in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Display state of slot `index`, or `None` if out of range.
    pub fn slot_status(&self, index: usize) -> Option<SlotStatus> {
        let word = self.slots.get(index)?;
        Some(if word.is_empty() {
            SlotStatus::Empty
        } else if self.wordlist.contains(word) {
            SlotStatus::Valid
        } else {
            SlotStatus::Invalid
        })
    }

    /// Whether slot `index` holds a wordlist member.
    ///
    /// Out-of-range indices are simply not valid.
    pub fn is_slot_valid(&self, index: usize) -> bool {
        matches!(self.slot_status(index), Some(SlotStatus::Valid))
    }

    /// Whether all 12 slots hold wordlist members.
    ///
    /// A single empty or unrecognized slot makes the whole phrase invalid.
    pub fn is_phrase_valid(&self) -> bool {
        (0..PHRASE_WORDS).all(|i| self.is_slot_valid(i))
    }

    /// Replace all 12 slots with fresh uniform draws from the wordlist,
    /// using the operating-system CSPRNG.
    ///
    /// May overwrite slots at any time, including mid-edit; there is no
    /// confirmation step. After a successful call every slot is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if the CSPRNG fails. Generation
    /// never falls back to a weaker source.
    pub fn regenerate(&mut self) -> Result<()> {
        self.regenerate_with(&mut OsRng)
    }

    /// Replace all 12 slots with fresh uniform draws from `rng`.
    ///
    /// See [`Self::regenerate`]; this variant accepts any cryptographically
    /// secure generator, which also allows deterministic tests.
    pub fn regenerate_with<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<()> {
        let words = self.wordlist.sample(rng, PHRASE_WORDS)?;
        for (slot, word) in self.slots.iter_mut().zip(words) {
            slot.zeroize();
            *slot = word.to_owned();
        }
        Ok(())
    }

    /// The space-joined 12-word phrase, exactly `slot0 + " " + slot1 + ...`.
    ///
    /// No trimming or normalization beyond the join; empty slots contribute
    /// empty segments. Only produced on demand, never stored.
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.slots.join(" "))
    }

    /// Serialize a connection request carrying the assembled phrase and
    /// forward it through `host`.
    ///
    /// Deliberately permissive: the phrase is forwarded as-is even if
    /// incomplete or invalid, and the host's outcome is not observed.
    /// Callers gate submission on [`Self::is_phrase_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Payload`] if the message cannot be serialized.
    pub fn submit<H: HostBridge>(&self, host: &mut H) -> Result<()> {
        let phrase = self.phrase();
        let payload = serde_json::to_string(&HostMessage::connect(&phrase))?;
        host.invoke(&payload);
        Ok(())
    }
}

impl Zeroize for PhraseBuilder {
    fn zeroize(&mut self) {
        for slot in &mut self.slots {
            slot.zeroize();
        }
    }
}

impl Drop for PhraseBuilder {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl core::fmt::Debug for PhraseBuilder {
    /// Slot contents are a secret; only their statuses are shown.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let statuses: Vec<_> = (0..PHRASE_WORDS).filter_map(|i| self.slot_status(i)).collect();
        f.debug_struct("PhraseBuilder")
            .field("slots", &statuses)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::wordlist::tests::SeqRng;

    const FIXTURE: [&str; 3] = ["abandon", "ability", "able"];

    fn fixture_builder() -> PhraseBuilder {
        PhraseBuilder::new(Wordlist::from_words(FIXTURE).unwrap())
    }

    /// Bridge double recording every delivered payload.
    #[derive(Default)]
    struct RecordingBridge {
        payloads: Vec<String>,
    }

    impl HostBridge for RecordingBridge {
        fn invoke(&mut self, payload: &str) {
            self.payloads.push(payload.to_owned());
        }
    }

    #[test]
    fn starts_empty_and_invalid() {
        let builder = fixture_builder();
        for i in 0..PHRASE_WORDS {
            assert_eq!(builder.slot_status(i), Some(SlotStatus::Empty));
            assert!(!builder.is_slot_valid(i));
        }
        assert!(!builder.is_phrase_valid());
    }

    #[test]
    fn wordlist_member_is_valid_after_set() {
        let mut builder = fixture_builder();
        builder.set_slot(0, "ability").unwrap();
        assert!(builder.is_slot_valid(0));
        assert_eq!(builder.slot_status(0), Some(SlotStatus::Valid));
    }

    #[test]
    fn unrecognized_word_is_stored_but_invalid() {
        let mut builder = fixture_builder();
        builder.set_slot(5, "xyz123").unwrap();
        assert_eq!(builder.slot(5), Some("xyz123"));
        assert!(!builder.is_slot_valid(5));
        assert_eq!(builder.slot_status(5), Some(SlotStatus::Invalid));
    }

    #[test]
    fn one_bad_slot_invalidates_the_phrase() {
        let mut builder = fixture_builder();
        for i in 0..PHRASE_WORDS {
            builder.set_slot(i, "abandon").unwrap();
        }
        assert!(builder.is_phrase_valid());

        builder.set_slot(5, "xyz123").unwrap();
        assert!(!builder.is_phrase_valid());
    }

    #[test]
    fn eleven_valid_plus_one_empty_is_invalid() {
        let mut builder = fixture_builder();
        for i in 0..PHRASE_WORDS - 1 {
            builder.set_slot(i, "able").unwrap();
        }
        assert!(!builder.is_phrase_valid());
    }

    #[test]
    fn set_slot_out_of_range_fails() {
        let mut builder = fixture_builder();
        let result = builder.set_slot(PHRASE_WORDS, "abandon");
        assert!(matches!(result, Err(Error::SlotOutOfRange { index: 12 })));
        assert!(builder.slot(PHRASE_WORDS).is_none());
        assert!(builder.slot_status(PHRASE_WORDS).is_none());
    }

    #[test]
    fn clearing_a_slot_returns_it_to_empty() {
        let mut builder = fixture_builder();
        builder.set_slot(3, "abandon").unwrap();
        builder.clear_slot(3).unwrap();
        assert_eq!(builder.slot(3), Some(""));
        assert_eq!(builder.slot_status(3), Some(SlotStatus::Empty));
    }

    #[test]
    fn setting_empty_string_clears() {
        let mut builder = fixture_builder();
        builder.set_slot(0, "abandon").unwrap();
        builder.set_slot(0, "").unwrap();
        assert_eq!(builder.slot_status(0), Some(SlotStatus::Empty));
    }

    #[test]
    fn regenerate_fills_every_slot_with_members() {
        let mut builder = PhraseBuilder::new(Wordlist::english());
        builder.regenerate().unwrap();
        for i in 0..PHRASE_WORDS {
            assert!(builder.is_slot_valid(i), "slot {i} not valid");
        }
        assert!(builder.is_phrase_valid());
    }

    #[test]
    fn regenerate_overwrites_mid_edit() {
        let mut builder = fixture_builder();
        builder.set_slot(0, "half-typed-wor").unwrap();
        let mut rng = SeqRng::new(vec![1]);
        builder.regenerate_with(&mut rng).unwrap();
        assert_eq!(builder.slot(0), Some("ability"));
        assert!(builder.is_phrase_valid());
    }

    #[test]
    fn regenerate_is_deterministic_under_a_fixed_rng() {
        let draws = vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2];
        let mut first = fixture_builder();
        first.regenerate_with(&mut SeqRng::new(draws.clone())).unwrap();
        let mut second = fixture_builder();
        second.regenerate_with(&mut SeqRng::new(draws)).unwrap();
        assert_eq!(first.slots(), second.slots());
        assert_eq!(first.slot(0), Some("abandon"));
        assert_eq!(first.slot(2), Some("able"));
    }

    #[test]
    fn consecutive_regenerations_differ() {
        // 2048^12 possible phrases; a repeat from the OS generator would
        // indicate a broken random source.
        let mut builder = PhraseBuilder::new(Wordlist::english());
        builder.regenerate().unwrap();
        let first = builder.phrase();
        builder.regenerate().unwrap();
        let second = builder.phrase();
        assert_ne!(*first, *second);
    }

    #[test]
    fn regenerate_propagates_rng_failure() {
        struct FailingRng;

        impl RngCore for FailingRng {
            fn next_u32(&mut self) -> u32 {
                unreachable!("sampling goes through try_fill_bytes")
            }
            fn next_u64(&mut self) -> u64 {
                unreachable!("sampling goes through try_fill_bytes")
            }
            fn fill_bytes(&mut self, _dest: &mut [u8]) {
                unreachable!("sampling goes through try_fill_bytes")
            }
            fn try_fill_bytes(
                &mut self,
                _dest: &mut [u8],
            ) -> core::result::Result<(), rand_core::Error> {
                Err(rand_core::Error::new("entropy source offline"))
            }
        }
        impl CryptoRng for FailingRng {}

        let mut builder = fixture_builder();
        let result = builder.regenerate_with(&mut FailingRng);
        assert!(matches!(result, Err(Error::RandomSource(_))));
    }

    #[test]
    fn phrase_is_the_exact_space_join() {
        let mut builder = fixture_builder();
        for i in 0..PHRASE_WORDS {
            builder.set_slot(i, "abandon").unwrap();
        }
        assert_eq!(
            *builder.phrase(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon"
        );
    }

    #[test]
    fn phrase_join_preserves_empty_slots() {
        // Empty slots contribute empty segments; the join itself is the
        // only transformation applied.
        let mut builder = fixture_builder();
        builder.set_slot(0, "abandon").unwrap();
        builder.set_slot(11, "able").unwrap();
        let expected = format!("abandon{}able", " ".repeat(11));
        assert_eq!(*builder.phrase(), expected);
    }

    #[test]
    fn submit_forwards_the_connect_payload() {
        let mut builder = fixture_builder();
        for i in 0..PHRASE_WORDS {
            builder.set_slot(i, "abandon").unwrap();
        }

        let mut bridge = RecordingBridge::default();
        builder.submit(&mut bridge).unwrap();

        assert_eq!(bridge.payloads.len(), 1);
        let message: HostMessage = serde_json::from_str(&bridge.payloads[0]).unwrap();
        assert_eq!(message.op, crate::host::OP_CONNECT);
        assert_eq!(
            message.data,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon"
        );
    }

    #[test]
    fn submit_does_not_gate_on_validity() {
        // Submission gating lives in the caller; the builder forwards
        // whatever is in the slots.
        let mut builder = fixture_builder();
        builder.set_slot(0, "not-a-word").unwrap();

        let mut bridge = RecordingBridge::default();
        builder.submit(&mut bridge).unwrap();

        assert_eq!(bridge.payloads.len(), 1);
        let message: HostMessage = serde_json::from_str(&bridge.payloads[0]).unwrap();
        assert!(message.data.starts_with("not-a-word "));
    }

    #[test]
    fn debug_output_hides_slot_contents() {
        let mut builder = fixture_builder();
        builder.set_slot(0, "abandon").unwrap();
        let rendered = format!("{builder:?}");
        assert!(!rendered.contains("abandon"));
        assert!(rendered.contains("Valid"));
    }

    #[test]
    fn zeroize_clears_all_slots() {
        let mut builder = fixture_builder();
        for i in 0..PHRASE_WORDS {
            builder.set_slot(i, "ability").unwrap();
        }
        builder.zeroize();
        for i in 0..PHRASE_WORDS {
            assert_eq!(builder.slot_status(i), Some(SlotStatus::Empty));
        }
    }
}
