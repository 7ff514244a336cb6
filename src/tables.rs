//! Component D: the side tables a decoded mapping entry is resolved
//! through — meanings, ksnid strings, domain ("subcat") tags, and lemmas.
//! Every accessor borrows straight from the mmap'd section; nothing here
//! copies the dictionary's own bytes into owned strings except where the
//! caller needs a `String` they can hold past the borrow (lemma decode,
//! which already goes through Latin-1 widening).

use crate::latin1;
use crate::util::u32_at;

/// `meanings_offset` section: `meaning_freq_ix -> (word_class, mark)`.
pub struct MeaningsTable<'a> {
    blob: &'a [u8],
}

impl<'a> MeaningsTable<'a> {
    #[must_use]
    pub fn new(blob: &'a [u8]) -> Self {
        Self { blob }
    }

    #[must_use]
    pub fn get(&self, freq_ix: u32) -> Option<(&'a str, &'a str)> {
        let offset = u32_at(self.blob, freq_ix as usize * 4)? as usize;
        let tail = self.blob.get(offset..)?;
        let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        let s = std::str::from_utf8(&tail[..end]).ok()?;
        let mut parts = s.splitn(2, ' ');
        Some((parts.next()?, parts.next().unwrap_or("")))
    }
}

/// `ksnid_offset` section: `ksnid_ix -> ancillary-fields string`. Indices 0
/// and 1 are the two precomputed most-common strings referenced directly by
/// the single-packed mapping layout (see [`crate::mapping::COMMON_KIX_0`]).
pub struct KsnidStringsTable<'a> {
    blob: &'a [u8],
}

impl<'a> KsnidStringsTable<'a> {
    #[must_use]
    pub fn new(blob: &'a [u8]) -> Self {
        Self { blob }
    }

    #[must_use]
    pub fn get(&self, ix: u32) -> Option<&'a str> {
        let offset = u32_at(self.blob, ix as usize * 4)? as usize;
        let len = *self.blob.get(offset)? as usize;
        let bytes = self.blob.get(offset + 1..offset + 1 + len)?;
        std::str::from_utf8(bytes).ok()
    }
}

/// `subcats_offset` section: the flat list of domain ("hluti") tags.
#[derive(Debug, Clone, Default)]
pub struct SubcatsTable {
    tags: Vec<String>,
}

impl SubcatsTable {
    #[must_use]
    pub fn decode(blob: &[u8]) -> Self {
        let len = u32_at(blob, 0).unwrap_or(0) as usize;
        let bytes = blob.get(4..4 + len).unwrap_or(&[]);
        let text = String::from_utf8_lossy(bytes);
        Self { tags: text.split_whitespace().map(str::to_string).collect() }
    }

    #[must_use]
    pub fn get(&self, ix: u8) -> Option<&str> {
        self.tags.get(ix as usize).map(String::as_str)
    }
}

/// A decoded `lemmas_offset` entry.
#[derive(Debug, Clone)]
pub struct LemmaRecord {
    pub domain_ix: u8,
    pub lemma: String,
    pub template_offset: Option<u32>,
}

const TEMPLATE_FLAG: u32 = 1 << 31;

/// `lemmas_offset` section: `bin_id -> LemmaRecord`, or a hole at offset 0.
pub struct LemmaTable<'a> {
    blob: &'a [u8],
}

impl<'a> LemmaTable<'a> {
    #[must_use]
    pub fn new(blob: &'a [u8]) -> Self {
        Self { blob }
    }

    #[must_use]
    pub fn get(&self, bin_id: u32) -> Option<LemmaRecord> {
        let offset = u32_at(self.blob, bin_id as usize * 4)?;
        if offset == 0 {
            return None;
        }
        let offset = offset as usize;
        let word = u32_at(self.blob, offset)?;
        let has_template = word & TEMPLATE_FLAG != 0;
        let domain_ix = (word & 0xFF) as u8;

        let len = *self.blob.get(offset + 4)? as usize;
        let lemma_bytes = self.blob.get(offset + 5..offset + 5 + len)?;
        let lemma = latin1::decode(lemma_bytes);

        let padded = (1 + len + 3) & !3;
        let template_offset = if has_template { u32_at(self.blob, offset + 4 + padded) } else { None };

        Some(LemmaRecord { domain_ix, lemma, template_offset })
    }
}
