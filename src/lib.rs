//! Memory-mapped reader for the BÍN Icelandic morphological dictionary.
//!
//! [`BinDict`] opens a `compressed.bin` image built by the companion packer
//! and answers word-form lookups without copying the dictionary into the
//! process heap: the trie, mapping stream, and lemma/meaning tables are all
//! read directly out of the mmap.
//!
//! Compound-word splitting ([`Dawg`]/[`CompoundSplitter`]) lives in a
//! separate image and is never opened implicitly; pass one explicitly to
//! [`BinDict::lookup_or_compound`] when a corpus needs it.

mod cache;
mod dawg;
mod engine;
mod entry;
mod error;
mod header;
mod latin1;
mod mapping;
mod mark;
mod tables;
mod templates;
mod trie;
mod util;

pub use crate::dawg::{CompoundSplitter, Dawg};
pub use crate::engine::{BinDict, Case, CaseOptions, LookupOptions, VariantOptions};
pub use crate::entry::{BinEntry, DictEntry, Ksnid, Origin};
pub use crate::error::{EngineError, ImageError};
pub use crate::mark::MarkFeatures;
