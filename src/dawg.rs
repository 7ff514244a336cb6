//! Component G: the compound-splitting DAWG (directed acyclic word graph).
//!
//! Three variants ship, each its own memory-mapped image with the same
//! 12-byte signature: the full word list, the subset allowed as a compound
//! prefix, and the subset allowed as a compound suffix. [`CompoundSplitter`]
//! bundles the three and implements the slicing algorithm; each on its own
//! is just a DAWG membership test ([`Dawg::contains`]).

use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::sync::RwLock;

use crate::error::ImageError;

pub const SIGNATURE: &[u8; 12] = b"ReynirDawg!\n";

#[derive(Debug, Clone)]
struct Edge {
    /// Alphabet indices for this edge's character run.
    indices: Vec<u8>,
    /// Whether the path ending at the end of this edge is a valid word.
    terminal: bool,
    /// Offset (relative to the edges section) of the continuation node, or
    /// `0` if this edge has no children (`terminal` is then always `true`).
    next_node: u32,
}

/// One memory-mapped DAWG image.
pub struct Dawg {
    mmap: Mmap,
    alphabet: Vec<char>,
    edges_start: usize,
    /// Decoded edge lists keyed by node offset, built once per node the way
    /// the spec's thread-safety note asks for: a `RwLock`-guarded map rather
    /// than the source's unsynchronized per-thread dict, since nothing here
    /// can assume single-threaded interpreter semantics.
    node_cache: RwLock<std::collections::HashMap<usize, std::sync::Arc<Vec<Edge>>>>,
}

impl Dawg {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let file = File::open(path)?;
        // SAFETY: same contract as `Image::open` — read-only for our lifetime.
        let mmap = unsafe { Mmap::map(&file)? };
        if mmap.len() < 16 || &mmap[0..12] != SIGNATURE {
            return Err(ImageError::BadSignature);
        }
        let alphabet_len =
            u32::from_le_bytes(mmap[12..16].try_into().unwrap()) as usize;
        let alphabet_bytes = mmap
            .get(16..16 + alphabet_len)
            .ok_or(ImageError::Truncated { expected: 16 + alphabet_len, found: mmap.len() })?;
        let alphabet_str = std::str::from_utf8(alphabet_bytes).map_err(|_| ImageError::BadSignature)?;
        let alphabet: Vec<char> = alphabet_str.chars().collect();
        let edges_start = 16 + alphabet_len;
        Ok(Self { mmap, alphabet, edges_start, node_cache: RwLock::new(std::collections::HashMap::new()) })
    }

    fn index_of(&self, c: char) -> Option<u8> {
        self.alphabet.iter().position(|&a| a == c).map(|i| i as u8)
    }

    fn encode(&self, word: &str) -> Option<Vec<u8>> {
        word.chars().map(|c| self.index_of(c)).collect()
    }

    fn decode_node(&self, node_offset: usize) -> std::sync::Arc<Vec<Edge>> {
        if let Some(edges) = self.node_cache.read().unwrap().get(&node_offset) {
            return edges.clone();
        }
        let edges = std::sync::Arc::new(self.decode_node_uncached(node_offset));
        self.node_cache.write().unwrap().insert(node_offset, edges.clone());
        edges
    }

    fn decode_node_uncached(&self, node_offset: usize) -> Vec<Edge> {
        let blob = &self.mmap[self.edges_start..];
        let Some(&count_byte) = blob.get(node_offset) else { return Vec::new() };
        let num_edges = (count_byte & 0x7F) as usize;
        let mut cursor = node_offset + 1;
        let mut edges = Vec::with_capacity(num_edges);
        for _ in 0..num_edges {
            let Some(&len_byte) = blob.get(cursor) else { break };
            cursor += 1;
            let len = (len_byte & 0x7F) as usize;
            let Some(raw) = blob.get(cursor..cursor + len) else { break };
            cursor += len;
            let mut indices = raw.to_vec();
            let terminal = indices.last().is_some_and(|&b| b & 0x80 != 0);
            if let Some(last) = indices.last_mut() {
                *last &= 0x7F;
            }
            let next_node = if terminal {
                0
            } else {
                let Some(bytes) = blob.get(cursor..cursor + 4) else { break };
                cursor += 4;
                u32::from_le_bytes(bytes.try_into().unwrap())
            };
            edges.push(Edge { indices, terminal, next_node });
        }
        edges
    }

    /// Whether `word` is present in this DAWG.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let Some(encoded) = self.encode(word) else { return false };
        let mut offset = 0usize;
        let mut pos = 0usize;
        loop {
            let edges = self.decode_node(offset);
            let Some(edge) = edges.iter().find(|e| encoded[pos..].starts_with(&e.indices[..])) else {
                return false;
            };
            pos += edge.indices.len();
            if pos == encoded.len() {
                return edge.terminal;
            }
            if edge.next_node == 0 {
                return false;
            }
            offset = edge.next_node as usize;
        }
    }
}

/// The three DAWG variants used together for compound slicing.
pub struct CompoundSplitter {
    pub all_forms: Dawg,
    pub prefixes: Dawg,
    pub suffixes: Dawg,
}

impl CompoundSplitter {
    /// Slice `word` into `p1 · p2 · … · pn` (`n >= 2`) where every `pi` is a
    /// complete word in `all_forms`, the last part is in `suffixes`, and
    /// every earlier part is in `prefixes`. Candidates are ranked by longest
    /// last part, then fewest parts; the first qualifying candidate wins.
    #[must_use]
    pub fn slice_compound_word(&self, word: &str) -> Option<Vec<String>> {
        let chars: Vec<char> = word.chars().collect();
        let mut candidates = Vec::new();
        let mut parts = Vec::new();
        self.enumerate_splits(&chars, 0, &mut parts, &mut candidates);

        candidates.sort_by(|a: &Vec<String>, b: &Vec<String>| {
            let a_last = a.last().map_or(0, String::chars_count_helper);
            let b_last = b.last().map_or(0, String::chars_count_helper);
            b_last.cmp(&a_last).then_with(|| a.len().cmp(&b.len()))
        });

        candidates.into_iter().find(|parts| {
            let (last, earlier) = parts.split_last().expect("n >= 2 by construction");
            self.suffixes.contains(last) && earlier.iter().all(|p| self.prefixes.contains(p))
        })
    }

    fn enumerate_splits(
        &self,
        chars: &[char],
        start: usize,
        parts: &mut Vec<String>,
        out: &mut Vec<Vec<String>>,
    ) {
        if start == chars.len() {
            if parts.len() >= 2 {
                out.push(parts.clone());
            }
            return;
        }
        for end in start + 1..=chars.len() {
            let piece: String = chars[start..end].iter().collect();
            if self.all_forms.contains(&piece) {
                parts.push(piece);
                self.enumerate_splits(chars, end, parts, out);
                parts.pop();
            }
        }
    }
}

trait CharsCountHelper {
    fn chars_count_helper(&self) -> usize;
}

impl CharsCountHelper for String {
    fn chars_count_helper(&self) -> usize {
        self.chars().count()
    }
}


#[cfg(test)]
mod tests {
    use super::builder::build;
    use super::*;
    use std::io::Write;

    fn open_temp(bytes: &[u8]) -> Dawg {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        Dawg::open(file.path()).unwrap()
    }

    #[test]
    fn contains_exact_words_only() {
        let bytes = build(&["kattur", "hundur"]);
        let dawg = open_temp(&bytes);
        assert!(dawg.contains("kattur"));
        assert!(dawg.contains("hundur"));
        assert!(!dawg.contains("kött"));
        assert!(!dawg.contains("katt"));
    }

    #[test]
    fn slices_two_part_compound() {
        let all_forms = open_temp(&build(&["fjármála", "ráðherra", "efnahags"]));
        let prefixes = open_temp(&build(&["fjármála", "efnahags"]));
        let suffixes = open_temp(&build(&["ráðherra"]));
        let splitter = CompoundSplitter { all_forms, prefixes, suffixes };
        let parts = splitter.slice_compound_word("fjármálaráðherra");
        assert_eq!(parts, Some(vec!["fjármála".to_string(), "ráðherra".to_string()]));
    }

    #[test]
    fn returns_none_when_no_decomposition_qualifies() {
        let all_forms = open_temp(&build(&["kattur"]));
        let prefixes = open_temp(&build(&["kattur"]));
        let suffixes = open_temp(&build(&["kattur"]));
        let splitter = CompoundSplitter { all_forms, prefixes, suffixes };
        assert_eq!(splitter.slice_compound_word("hundaviti"), None);
    }
}
