//! Component F: the public query surface. [`BinDict`] owns the mmap'd
//! image, the decoded alphabet and subcat table, the mark-order table, and
//! the LFU cache; every other section is sliced out of the mmap on demand.
//!
//! Compound slicing (component G) stays external: `lookup`/`lookup_ksnid`
//! never touch a [`crate::dawg::CompoundSplitter`] on their own miss path.
//! [`BinDict::lookup_or_compound`] is a thin helper that composes the two
//! public surfaces for callers who want that behavior.

use std::collections::HashSet;
use std::path::Path;

use crate::cache::{LfuCache, DEFAULT_CAPACITY};
use crate::dawg::CompoundSplitter;
use crate::entry::{BinEntry, DictEntry, Ksnid, Origin};
use crate::error::EngineError;
use crate::header::Image;
use crate::latin1;
use crate::mapping::{self, RawMeaning};
use crate::mark::{self, MarkFeatures, MarkOrder};
use crate::tables::{KsnidStringsTable, LemmaTable, MeaningsTable, SubcatsTable};
use crate::templates;
use crate::trie::{self, Alphabet};

/// One of the four cases a mark can be filtered or cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Accusative,
    Dative,
    Genitive,
}

impl Case {
    #[must_use]
    pub fn features(self) -> MarkFeatures {
        match self {
            Self::Nominative => MarkFeatures::NF,
            Self::Accusative => MarkFeatures::THF,
            Self::Dative => MarkFeatures::THGF,
            Self::Genitive => MarkFeatures::EF,
        }
    }
}

const CASE_MASK: MarkFeatures = MarkFeatures::NF
    .union(MarkFeatures::THF)
    .union(MarkFeatures::THGF)
    .union(MarkFeatures::EF);
const NUMBER_MASK: MarkFeatures = MarkFeatures::ET.union(MarkFeatures::FT);

/// Filters shared by [`BinDict::lookup`] and [`BinDict::lookup_ksnid`].
/// All fields are `Copy` so an instance can be reused across calls (e.g. by
/// [`BinDict::lookup_or_compound`]) without cloning machinery.
#[derive(Clone, Copy, Default)]
pub struct LookupOptions<'a> {
    pub cat: Option<&'a str>,
    pub lemma: Option<&'a str>,
    pub bin_id: Option<u32>,
    pub inflection_filter: Option<&'a dyn Fn(&str) -> bool>,
}

/// Options for [`BinDict::lookup_case`] and the case sugar methods.
#[derive(Debug, Clone, Default)]
pub struct CaseOptions {
    pub cat: Option<String>,
    pub lemma: Option<String>,
    /// Normalize number away before matching (return the form with the
    /// query's number preserved is instead the default; set to compare
    /// ignoring singular/plural).
    pub singular: bool,
    /// Normalize definiteness (`gr`) away before matching.
    pub indefinite: bool,
    /// Normalize both number and definiteness; used by `lookup_forms`.
    pub all_forms: bool,
}

/// Options for [`BinDict::lookup_variants`].
#[derive(Debug, Clone, Default)]
pub struct VariantOptions {
    pub lemma: Option<String>,
}

fn matches_cat(filter: &str, word_class: &str) -> bool {
    if filter.eq_ignore_ascii_case("no") {
        matches!(word_class, "kk" | "kvk" | "hk")
    } else {
        filter.eq_ignore_ascii_case(word_class)
    }
}

/// The canonical-mark table backing [`BinDict::lookup_lemmas`] (spec-note
/// table in the glossary of canonical marks per word class).
fn is_canonical_lemma_mark(word_class: &str, mark: &str) -> bool {
    match word_class {
        "no" | "kk" | "kvk" | "hk" => mark == "NFET",
        "fn" => matches!(mark, "KK-NFET" | "KK_NFET" | "fn_KK_NFET"),
        "pfn" => mark == "NFET",
        "gr" => matches!(mark, "KK-NFET" | "KK_NFET"),
        "so" => matches!(mark, "GM-NH" | "MM-NH"),
        "lo" => matches!(mark, "FSB-KK-NFET" | "KK-NFET"),
        "to" => mark.starts_with("KK-NF") || mark.starts_with("KK_NF") || mark == "OBEYGJANLEGT",
        _ => true,
    }
}

fn apply_capitalization(original: &str, new_form: &str) -> String {
    let has_letters = original.chars().any(char::is_alphabetic);
    let all_upper = has_letters && original.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);
    if all_upper {
        new_form.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = new_form.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    } else {
        new_form.to_string()
    }
}

/// The open dictionary handle: owns the mmap, decoded side tables, the mark
/// order, and the LFU cache. `Send + Sync` follows from its fields ([`Mmap`]
/// is immutable and shared, [`LfuCache`] is internally synchronized).
pub struct BinDict {
    image: Image,
    alphabet: Alphabet,
    subcats: SubcatsTable,
    #[allow(dead_code)]
    mark_order: MarkOrder,
    cache: LfuCache<String, Vec<Ksnid>>,
}

impl BinDict {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let image = Image::open(path)?;
        let alphabet = Alphabet::decode(image.bytes(), image.header.alphabet);
        let subcats = SubcatsTable::decode(&image.bytes()[image.header.subcats..]);
        Ok(Self {
            image,
            alphabet,
            subcats,
            mark_order: MarkOrder::load(),
            cache: LfuCache::new(DEFAULT_CAPACITY),
        })
    }

    fn forms_blob(&self) -> &[u8] {
        &self.image.bytes()[self.image.header.forms..]
    }

    fn mappings_blob(&self) -> &[u8] {
        &self.image.bytes()[self.image.header.mappings..]
    }

    fn lemmas_blob(&self) -> &[u8] {
        &self.image.bytes()[self.image.header.lemmas..]
    }

    fn templates_blob(&self) -> &[u8] {
        &self.image.bytes()[self.image.header.templates..]
    }

    fn meanings_blob(&self) -> &[u8] {
        &self.image.bytes()[self.image.header.meanings..]
    }

    fn ksnid_blob(&self) -> &[u8] {
        &self.image.bytes()[self.image.header.ksnid..]
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        match latin1::encode(word) {
            Some(bytes) => trie::mapping(self.forms_blob(), &self.alphabet, &bytes).is_some(),
            None => false,
        }
    }

    fn raw_candidates(&self, word: &str) -> Vec<RawMeaning> {
        let Some(bytes) = latin1::encode(word) else { return Vec::new() };
        let Some(form_index) = trie::mapping(self.forms_blob(), &self.alphabet, &bytes) else {
            return Vec::new();
        };
        mapping::raw_lookup(self.mappings_blob(), form_index)
    }

    fn resolve(&self, raw: RawMeaning, form: &str) -> Option<Ksnid> {
        let (word_class, mark) = MeaningsTable::new(self.meanings_blob()).get(raw.meaning_freq_ix)?;
        let lemma_record = LemmaTable::new(self.lemmas_blob()).get(raw.bin_id)?;
        let domain = self.subcats.get(lemma_record.domain_ix).unwrap_or("").to_string();
        let ksnid_string = KsnidStringsTable::new(self.ksnid_blob()).get(raw.ksnid_ix).unwrap_or("");
        Some(Ksnid::from_ksnid_string(
            lemma_record.lemma,
            raw.bin_id,
            word_class.to_string(),
            domain,
            form.to_string(),
            mark.to_string(),
            ksnid_string,
        ))
    }

    /// The unfiltered candidate set for `word`, as cached per surface form.
    fn base_candidates(&self, word: &str) -> Vec<Ksnid> {
        self.cache.lookup(&word.to_string(), || {
            self.raw_candidates(word).into_iter().filter_map(|r| self.resolve(r, word)).collect()
        })
    }

    fn passes(&self, entry: &Ksnid, opts: &LookupOptions<'_>) -> bool {
        if let Some(cat) = opts.cat {
            if !matches_cat(cat, &entry.word_class) {
                return false;
            }
        }
        if let Some(lemma) = opts.lemma {
            if lemma != entry.lemma {
                return false;
            }
        }
        if let Some(bin_id) = opts.bin_id {
            if bin_id != entry.bin_id {
                return false;
            }
        }
        if let Some(filter) = opts.inflection_filter {
            if !filter(&entry.mark) {
                return false;
            }
        }
        true
    }

    #[must_use]
    pub fn lookup(&self, word: &str, opts: LookupOptions<'_>) -> Vec<BinEntry> {
        self.lookup_ksnid(word, opts).into_iter().map(|k| k.to_bin_entry()).collect()
    }

    #[must_use]
    pub fn lookup_ksnid(&self, word: &str, opts: LookupOptions<'_>) -> Vec<Ksnid> {
        self.base_candidates(word).into_iter().filter(|k| self.passes(k, &opts)).collect()
    }

    /// Enumerate every inflected form of `bin_id`'s lemma, keeping only
    /// entries whose resolved `bin_id` matches the one requested (so
    /// homographs sharing a surface form with other lemmas are excluded).
    /// Out-of-range or unallocated ids (including negative ones from a
    /// careless caller) return an empty list rather than erroring.
    #[must_use]
    pub fn lookup_id(&self, bin_id: i64) -> Vec<Ksnid> {
        if bin_id < 0 || bin_id as u64 > u64::from(self.image.header.max_bin_id) {
            return Vec::new();
        }
        let bin_id = bin_id as u32;
        let Some(record) = LemmaTable::new(self.lemmas_blob()).get(bin_id) else { return Vec::new() };
        let Some(lemma_bytes) = latin1::encode(&record.lemma) else { return Vec::new() };
        let forms: Vec<Vec<u8>> = match record.template_offset {
            Some(offset) => templates::decode(self.templates_blob(), offset as usize, &lemma_bytes),
            None => vec![lemma_bytes],
        };

        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for form_bytes in forms {
            let Some(form_index) = trie::mapping(self.forms_blob(), &self.alphabet, &form_bytes) else {
                continue;
            };
            let form = latin1::decode(&form_bytes);
            for raw in mapping::raw_lookup(self.mappings_blob(), form_index) {
                if raw.bin_id != bin_id {
                    continue;
                }
                if let Some(entry) = self.resolve(raw, &form) {
                    if seen.insert((entry.form.clone(), entry.mark.clone())) {
                        out.push(entry);
                    }
                }
            }
        }
        out
    }

    #[must_use]
    pub fn lookup_lemmas(&self, word: &str) -> Vec<BinEntry> {
        self.lookup(word, LookupOptions::default())
            .into_iter()
            .filter(|e| is_canonical_lemma_mark(&e.word_class, &e.mark))
            .collect()
    }

    #[must_use]
    pub fn lookup_forms(&self, lemma: &str, cat: &str, case: Case) -> Vec<BinEntry> {
        let opts = CaseOptions {
            cat: Some(cat.to_string()),
            lemma: Some(lemma.to_string()),
            all_forms: true,
            ..CaseOptions::default()
        };
        self.lookup_case(lemma, case, opts).into_iter().collect()
    }

    #[must_use]
    pub fn lookup_case(&self, word: &str, case: Case, opts: CaseOptions) -> HashSet<BinEntry> {
        let mut mask = CASE_MASK;
        if opts.singular || opts.all_forms {
            mask |= NUMBER_MASK;
        }
        if opts.indefinite || opts.all_forms {
            mask |= MarkFeatures::GR;
        }
        let target_bit = case.features();

        let lookup_opts =
            LookupOptions { cat: opts.cat.as_deref(), lemma: opts.lemma.as_deref(), ..LookupOptions::default() };
        let mut out = HashSet::new();
        for source in self.lookup_ksnid(word, lookup_opts) {
            let source_signature = mark::decode(&source.mark) & !mask;
            for candidate in self.lookup_id(i64::from(source.bin_id)) {
                let features = mark::decode(&candidate.mark);
                if features.contains(target_bit) && (features & !mask) == source_signature {
                    out.insert(candidate.to_bin_entry());
                }
            }
        }
        out
    }

    pub fn lookup_variants(
        &self,
        word: &str,
        cat: &str,
        to_inflection: &[&str],
        opts: VariantOptions,
    ) -> Result<Vec<Ksnid>, EngineError> {
        let target = mark::parse_atoms(to_inflection.iter().copied())?;
        let lookup_opts =
            LookupOptions { cat: Some(cat), lemma: opts.lemma.as_deref(), ..LookupOptions::default() };
        let sources = self.lookup_ksnid(word, lookup_opts);
        if sources.is_empty() {
            return Ok(Vec::new());
        }

        let mut aggregated = MarkFeatures::empty();
        for source in &sources {
            aggregated |= mark::decode(&source.mark);
        }

        let mut seen_bin_ids = HashSet::new();
        let mut candidates = Vec::new();
        for source in &sources {
            if !seen_bin_ids.insert(source.bin_id) {
                continue;
            }
            for form in self.lookup_id(i64::from(source.bin_id)) {
                if target.matches(mark::decode(&form.mark)) {
                    candidates.push(form);
                }
            }
        }

        let mut unique: Vec<Ksnid> = Vec::new();
        for candidate in candidates {
            if !unique.contains(&candidate) {
                unique.push(candidate);
            }
        }
        unique.sort_by_key(|k| (mark::decode(&k.mark) ^ aggregated).bits().count_ones());
        Ok(unique)
    }

    /// Pick the homograph candidate `cast_to_case` inflects from, preferring
    /// an adjective sense, then a noun-ish category in `kk, kvk, hk, no`
    /// order, falling back to whichever candidate resolves first.
    fn pick_representative(&self, word: &str) -> Option<Ksnid> {
        let candidates = self.lookup_ksnid(word, LookupOptions::default());
        if let Some(adj) = candidates.iter().find(|k| k.word_class == "lo") {
            return Some(adj.clone());
        }
        for preferred in ["kk", "kvk", "hk", "no"] {
            if let Some(k) = candidates.iter().find(|k| k.word_class == preferred) {
                return Some(k.clone());
            }
        }
        candidates.into_iter().next()
    }

    fn resolve_case(&self, word: &str, case: Case) -> Option<String> {
        let chosen = self.pick_representative(word)?;
        if chosen.form.contains('-') && !word.contains('-') {
            let (prefix, last) = chosen.form.rsplit_once('-')?;
            let inflected_last = self.resolve_case(last, case).unwrap_or_else(|| last.to_string());
            return Some(format!("{prefix}-{inflected_last}"));
        }
        let keep = mark::decode(&chosen.mark) & !CASE_MASK;
        let target_bit = case.features();
        self.lookup_id(i64::from(chosen.bin_id))
            .into_iter()
            .find(|form| {
                let features = mark::decode(&form.mark);
                features.contains(target_bit) && (features & !CASE_MASK) == keep
            })
            .map(|form| form.form)
    }

    #[must_use]
    pub fn cast_to_case(&self, word: &str, case: Case) -> String {
        match self.resolve_case(word, case) {
            Some(new_form) => apply_capitalization(word, &new_form),
            None => word.to_string(),
        }
    }

    #[must_use]
    pub fn nominative(&self, word: &str, opts: CaseOptions) -> HashSet<BinEntry> {
        self.lookup_case(word, Case::Nominative, opts)
    }

    #[must_use]
    pub fn accusative(&self, word: &str, opts: CaseOptions) -> HashSet<BinEntry> {
        self.lookup_case(word, Case::Accusative, opts)
    }

    #[must_use]
    pub fn dative(&self, word: &str, opts: CaseOptions) -> HashSet<BinEntry> {
        self.lookup_case(word, Case::Dative, opts)
    }

    #[must_use]
    pub fn genitive(&self, word: &str, opts: CaseOptions) -> HashSet<BinEntry> {
        self.lookup_case(word, Case::Genitive, opts)
    }

    /// Compose a direct lookup with compound slicing: on a miss, split
    /// `word` via `splitter`, re-look-up the last part, and synthesize a
    /// `bin_id = 0` entry whose lemma is the earlier parts hyphen-joined
    /// with the resolved last part's lemma (spec.md §4.G's fallback).
    #[must_use]
    pub fn lookup_or_compound(
        &self,
        word: &str,
        splitter: &CompoundSplitter,
        opts: LookupOptions<'_>,
    ) -> Vec<Ksnid> {
        let direct = self.lookup_ksnid(word, opts);
        if !direct.is_empty() {
            return direct;
        }
        let Some(parts) = splitter.slice_compound_word(word) else { return Vec::new() };
        let Some((last, prefix_parts)) = parts.split_last() else { return Vec::new() };
        let prefix = prefix_parts.join("-");
        self.lookup_ksnid(last, LookupOptions::default())
            .into_iter()
            .map(|mut k| {
                k.bin_id = 0;
                k.lemma = format!("{prefix}-{}", k.lemma);
                k.form = word.to_string();
                k.origin = Origin::Synthetic;
                k
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dawg::{builder as dawg_builder, Dawg};
    use crate::mapping::builder as mapping_builder;
    use crate::tables::builder as tables_builder;
    use crate::templates::builder as templates_builder;
    use crate::trie::builder as trie_builder;
    use std::io::Write;

    fn open_temp(bytes: &[u8]) -> BinDict {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        BinDict::open(file.path()).unwrap()
    }

    /// Builds a tiny synthetic image with two lemmas:
    /// `köttur` (bin_id 10, forms `köttur`/NFET and `kött`/ÞFET via a
    /// template) and `hestur` (bin_id 11, a single NFET form, no template).
    fn build_fixture() -> Vec<u8> {
        let koettur = latin1::encode("köttur").unwrap();
        let koett = latin1::encode("kött").unwrap();

        let mappings = mapping_builder::to_bytes(&[
            mapping_builder::single_packed(10, 0, 0, true), // word 0: köttur / NFET
            mapping_builder::single_packed(10, 1, 0, true), // word 1: kött / ÞFET
            mapping_builder::single_packed(11, 0, 0, true), // word 2: hestur / NFET
        ]);

        let root = trie_builder::NodeSpec::branch(
            "",
            None,
            vec![
                trie_builder::NodeSpec::branch("kött", Some(1), vec![trie_builder::NodeSpec::leaf("ur", 0)]),
                trie_builder::NodeSpec::leaf("hestur", 2),
            ],
        );
        let (forms, _identity_alphabet) = trie_builder::build(&root);

        let template = templates_builder::encode(&[&koettur, &koett]);

        let lemmas = tables_builder::lemma_section(
            20,
            &[(10, 0, "köttur", Some(0)), (11, 0, "hestur", None)],
        );

        let meanings = tables_builder::meanings_section(&[("kk", "NFET"), ("kk", "ÞFET")]);
        let ksnid = tables_builder::ksnid_strings_section(&["1;;;;-;1;;;", "0;;;;-;0;;;"]);
        let subcats = tables_builder::subcats_section(&["alm"]);

        let alphabet = {
            let bytes: Vec<u8> = (0u8..=255).collect();
            let mut out = (bytes.len() as u32).to_le_bytes().to_vec();
            out.extend_from_slice(&bytes);
            out
        };

        const HEADER_LEN: usize = 16 + 10 * 4;
        let mappings_offset = HEADER_LEN;
        let forms_offset = mappings_offset + mappings.len();
        let lemmas_offset = forms_offset + forms.len();
        let templates_offset = lemmas_offset + lemmas.len();
        let meanings_offset = templates_offset + template.len();
        let alphabet_offset = meanings_offset + meanings.len();
        let subcats_offset = alphabet_offset + alphabet.len();
        let ksnid_offset = subcats_offset + subcats.len();

        let mut out = crate::header::SIGNATURE.to_vec();
        for word in [
            mappings_offset as u32,
            forms_offset as u32,
            lemmas_offset as u32,
            templates_offset as u32,
            meanings_offset as u32,
            alphabet_offset as u32,
            subcats_offset as u32,
            ksnid_offset as u32,
            0,  // begin_greynir_utg
            20, // max_bin_id
        ] {
            out.extend_from_slice(&word.to_le_bytes());
        }
        out.extend_from_slice(&mappings);
        out.extend_from_slice(&forms);
        out.extend_from_slice(&lemmas);
        out.extend_from_slice(&template);
        out.extend_from_slice(&meanings);
        out.extend_from_slice(&alphabet);
        out.extend_from_slice(&subcats);
        out.extend_from_slice(&ksnid);
        out
    }

    #[test]
    fn contains_and_lookup_resolve_a_direct_form() {
        let dict = open_temp(&build_fixture());
        assert!(dict.contains("köttur"));
        assert!(!dict.contains("hundur"));

        let entries = dict.lookup_ksnid("köttur", LookupOptions::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].lemma, "köttur");
        assert_eq!(entries[0].bin_id, 10);
        assert_eq!(entries[0].word_class, "kk");
        assert_eq!(entries[0].domain, "alm");
        assert_eq!(entries[0].mark, "NFET");

        let accusative = dict.lookup_ksnid("kött", LookupOptions::default());
        assert_eq!(accusative.len(), 1);
        assert_eq!(accusative[0].mark, "ÞFET");
    }

    #[test]
    fn lookup_id_enumerates_every_form_of_the_lemma() {
        let dict = open_temp(&build_fixture());
        let forms = dict.lookup_id(10);
        let marks: HashSet<&str> = forms.iter().map(|f| f.mark.as_str()).collect();
        assert_eq!(marks, HashSet::from(["NFET", "ÞFET"]));
        assert!(forms.iter().all(|f| f.bin_id == 10));
    }

    #[test]
    fn lookup_id_returns_empty_for_holes_and_out_of_range_ids() {
        let dict = open_temp(&build_fixture());
        assert!(dict.lookup_id(999).is_empty());
        assert!(dict.lookup_id(-100).is_empty());
        assert!(dict.lookup_id(1_000_000).is_empty());
    }

    #[test]
    fn lookup_case_finds_accusative_counterpart() {
        let dict = open_temp(&build_fixture());
        let set = dict.lookup_case("köttur", Case::Accusative, CaseOptions::default());
        assert!(set.iter().any(|e| e.form == "kött" && e.mark == "ÞFET"));
    }

    #[test]
    fn cast_to_case_converts_and_is_idempotent() {
        let dict = open_temp(&build_fixture());
        assert_eq!(dict.cast_to_case("köttur", Case::Accusative), "kött");
        assert_eq!(dict.cast_to_case("kött", Case::Accusative), "kött");
        assert_eq!(dict.cast_to_case("\u{0}nonexistent", Case::Accusative), "\u{0}nonexistent");
    }

    #[test]
    fn lookup_variants_filters_by_target_features_and_orders_by_fit() {
        let dict = open_temp(&build_fixture());
        let variants = dict.lookup_variants("köttur", "kk", &["ÞF"], VariantOptions::default()).unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].form, "kött");
    }

    #[test]
    fn lookup_variants_rejects_unknown_atom() {
        let dict = open_temp(&build_fixture());
        assert!(dict.lookup_variants("köttur", "kk", &["NOTANATOM"], VariantOptions::default()).is_err());
    }

    #[test]
    fn lookup_lemmas_keeps_only_canonical_marks() {
        let dict = open_temp(&build_fixture());
        let nominative = dict.lookup_lemmas("köttur");
        assert_eq!(nominative.len(), 1);
        assert!(dict.lookup_lemmas("kött").is_empty());
    }

    #[test]
    fn lookup_or_compound_synthesizes_a_bin_id_zero_entry() {
        let dict = open_temp(&build_fixture());

        let mut all_forms_file = tempfile::NamedTempFile::new().unwrap();
        all_forms_file.write_all(&dawg_builder::build(&["kattar", "hestur"])).unwrap();
        let mut prefixes_file = tempfile::NamedTempFile::new().unwrap();
        prefixes_file.write_all(&dawg_builder::build(&["kattar"])).unwrap();
        let mut suffixes_file = tempfile::NamedTempFile::new().unwrap();
        suffixes_file.write_all(&dawg_builder::build(&["hestur"])).unwrap();

        let splitter = CompoundSplitter {
            all_forms: Dawg::open(all_forms_file.path()).unwrap(),
            prefixes: Dawg::open(prefixes_file.path()).unwrap(),
            suffixes: Dawg::open(suffixes_file.path()).unwrap(),
        };

        let direct = dict.lookup_ksnid("kattarhestur", LookupOptions::default());
        assert!(direct.is_empty());

        let synthesized = dict.lookup_or_compound("kattarhestur", &splitter, LookupOptions::default());
        assert_eq!(synthesized.len(), 1);
        assert_eq!(synthesized[0].bin_id, 0);
        assert_eq!(synthesized[0].lemma, "kattar-hestur");
        assert_eq!(synthesized[0].form, "kattarhestur");
        assert_eq!(synthesized[0].origin, Origin::Synthetic);
    }
}
