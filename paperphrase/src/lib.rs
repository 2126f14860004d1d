//! # Paperphrase - Recovery Phrase Entry Core
//!
//! The logic behind a 12-word paper-wallet phrase entry screen: a fixed
//! wordlist for membership testing, a slot-based phrase builder with
//! per-word validity feedback, CSPRNG-backed regeneration, and a
//! serialized hand-off to the host application.
//!
//! ## Features
//!
//! - **Exact validation**: case-sensitive membership against an injected
//!   wordlist, surfaced per slot for display feedback
//! - **Secure generation**: all 12 words drawn from the operating-system
//!   CSPRNG with unbiased index reduction
//! - **Secure by design**: slot contents are zeroized on overwrite and drop
//! - **No derivation**: this crate never touches keys, seeds, or checksums;
//!   it only assembles the raw phrase and forwards it
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::uninlined_format_args
)]
#![forbid(unsafe_code)]

pub mod error;
pub mod host;
pub mod phrase;
pub mod wordlist;

pub use error::{Error, Result};
pub use host::{HostBridge, HostMessage, OP_CONNECT};
pub use phrase::{PhraseBuilder, SlotStatus, PHRASE_WORDS};
pub use wordlist::Wordlist;

// Re-export rand_core so callers can pass their own CSPRNG without pinning
// a second copy of the RNG traits.
pub use rand_core;
