//! Decoding and validation for BÍN inflection mark strings ("beyging"), e.g.
//! `"ÞGFETgr"` (dative singular, definite article) or `"FSB-KK-NFET"`
//! (positive degree, masculine, nominative singular).
//!
//! Marks are tokenized into a closed set of grammatical atoms and packed
//! into [`MarkFeatures`], a `bitflags` set, so that the superset test and
//! symmetric-difference ranking `lookup_variants` needs are cheap bitwise
//! operations instead of `HashSet<String>` churn.

use bitflags::bitflags;
use std::collections::HashMap;

use crate::error::EngineError;

bitflags! {
    /// One bit per recognized grammatical atom. `nogr` has no bit of its
    /// own: it is a constraint ("`gr` must be absent"), not a feature, and
    /// is tracked separately by [`VariantTarget::exclude_gr`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MarkFeatures: u32 {
        const NF = 1 << 0;
        const THF = 1 << 1;
        const THGF = 1 << 2;
        const EF = 1 << 3;
        const ET = 1 << 4;
        const FT = 1 << 5;
        const KK = 1 << 6;
        const KVK = 1 << 7;
        const HK = 1 << 8;
        const P1 = 1 << 9;
        const P2 = 1 << 10;
        const P3 = 1 << 11;
        const FSB = 1 << 12;
        const MST = 1 << 13;
        const EST = 1 << 14;
        const GM = 1 << 15;
        const MM = 1 << 16;
        const NT = 1 << 17;
        const THT = 1 << 18;
        const FH = 1 << 19;
        const VH = 1 << 20;
        const BH = 1 << 21;
        const NH = 1 << 22;
        const LH = 1 << 23;
        const GR = 1 << 24;
        const SAGNB = 1 << 25;
        const LHTH = 1 << 26;
        const OP = 1 << 27;
        const SERST = 1 << 28;
        const OBEYGJANLEGT = 1 << 29;
        const EXPL = 1 << 30;
    }
}

/// `(canonical atom string, bit)`, sorted by descending character length so
/// that greedy left-to-right matching over a concatenated mark string (no
/// separators, e.g. `"ÞGFETgr"`) always prefers the longest valid atom.
const ATOM_TABLE: &[(&str, MarkFeatures)] = &[
    ("OBEYGJANLEGT", MarkFeatures::OBEYGJANLEGT),
    ("SAGNB", MarkFeatures::SAGNB),
    ("SERST", MarkFeatures::SERST),
    ("lhþt", MarkFeatures::LHTH),
    ("ÞGF", MarkFeatures::THGF),
    ("KVK", MarkFeatures::KVK),
    ("FSB", MarkFeatures::FSB),
    ("MST", MarkFeatures::MST),
    ("EST", MarkFeatures::EST),
    ("það", MarkFeatures::EXPL),
    ("NF", MarkFeatures::NF),
    ("ÞF", MarkFeatures::THF),
    ("EF", MarkFeatures::EF),
    ("ET", MarkFeatures::ET),
    ("FT", MarkFeatures::FT),
    ("KK", MarkFeatures::KK),
    ("HK", MarkFeatures::HK),
    ("GM", MarkFeatures::GM),
    ("MM", MarkFeatures::MM),
    ("NT", MarkFeatures::NT),
    ("ÞT", MarkFeatures::THT),
    ("FH", MarkFeatures::FH),
    ("VH", MarkFeatures::VH),
    ("BH", MarkFeatures::BH),
    ("NH", MarkFeatures::NH),
    ("LH", MarkFeatures::LH),
    ("1P", MarkFeatures::P1),
    ("2P", MarkFeatures::P2),
    ("3P", MarkFeatures::P3),
    ("gr", MarkFeatures::GR),
    ("op", MarkFeatures::OP),
];

/// Atoms accepted in a caller-supplied variant target but carrying no
/// comparison weight of their own (conservative and empty until a concrete
/// case for dropping an atom is identified; kept as a named hook rather than
/// folding its check into the caller).
const IGNORED_VARIANTS: &[&str] = &[];

const LOWERCASE_CANONICAL: &[&str] = &[
    "lhþt", "sagnb", "op", "serst", "obeygjanlegt", "það", "gr", "nogr",
];

/// Decode a raw dictionary mark string (as stored in the meanings table)
/// into its feature set. Unrecognized characters are skipped rather than
/// rejected: marks in the image are produced by the packer and assumed
/// well-formed, the way `bits::Cursor` trusts well-formed VBR input.
#[must_use]
pub fn decode(mark: &str) -> MarkFeatures {
    let mut features = MarkFeatures::empty();
    for segment in mark.split('-') {
        let chars: Vec<char> = segment.chars().collect();
        let mut i = 0;
        'outer: while i < chars.len() {
            for &(atom, bit) in ATOM_TABLE {
                let atom_chars: Vec<char> = atom.chars().collect();
                let len = atom_chars.len();
                if i + len <= chars.len() && chars[i..i + len] == atom_chars[..] {
                    features |= bit;
                    i += len;
                    continue 'outer;
                }
            }
            i += 1;
        }
    }
    features
}

/// A resolved `to_inflection` target for `lookup_variants`: the required
/// feature superset, plus whether `gr` must be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantTarget {
    pub features: MarkFeatures,
    pub exclude_gr: bool,
}

impl VariantTarget {
    /// A candidate form's decoded mark satisfies this target iff its feature
    /// set is a superset of [`Self::features`], and (when `exclude_gr` is
    /// set) it does not carry [`MarkFeatures::GR`].
    #[must_use]
    pub fn matches(&self, candidate: MarkFeatures) -> bool {
        candidate.contains(self.features) && !(self.exclude_gr && candidate.contains(MarkFeatures::GR))
    }
}

fn normalize_atom(token: &str) -> String {
    match token {
        "expl" => "það".to_string(),
        "p1" => "1P".to_string(),
        "p2" => "2P".to_string(),
        "p3" => "3P".to_string(),
        t if LOWERCASE_CANONICAL.contains(&t) => t.to_string(),
        t => t.to_uppercase(),
    }
}

/// Parse a caller-supplied list of variant atoms (e.g. `["EF", "FT", "gr"]`
/// or Greynir shorthand `["p1"]`) into a [`VariantTarget`]. Returns
/// [`EngineError::UnknownMarkAtom`] for any token that is neither a known
/// atom, `nogr`, nor listed in [`IGNORED_VARIANTS`].
pub fn parse_atoms<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
) -> Result<VariantTarget, EngineError> {
    let mut target = VariantTarget::default();
    for raw in tokens {
        let atom = normalize_atom(raw);
        if IGNORED_VARIANTS.contains(&atom.as_str()) {
            continue;
        }
        if atom == "nogr" {
            target.exclude_gr = true;
            continue;
        }
        if atom == "gr" {
            target.features |= MarkFeatures::GR;
            continue;
        }
        match ATOM_TABLE.iter().find(|&&(name, _)| name == atom) {
            Some(&(_, bit)) => target.features |= bit,
            None => return Err(EngineError::UnknownMarkAtom(raw.to_string())),
        }
    }
    Ok(target)
}

/// Per-category ordered table of valid marks, shipped with the crate as a
/// CSV resource (`ordfl;mark` rows) and loaded once at
/// [`crate::BinDict::open`](crate::engine::BinDict::open) time.
///
/// Mirrors `MarkOrder` in the original implementation: it backs both a
/// validity check and a deterministic sort index per word class.
#[derive(Debug, Clone)]
pub struct MarkOrder {
    /// `(category, mark) -> position within that category's row`
    index: HashMap<(String, String), usize>,
}

const MARK_ORDER_CSV: &str = include_str!("mark_order.csv");

impl MarkOrder {
    /// Load the table embedded at compile time.
    #[must_use]
    pub fn load() -> Self {
        Self::parse(MARK_ORDER_CSV)
    }

    fn parse(csv: &str) -> Self {
        let mut index = HashMap::new();
        for line in csv.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((cat, marks)) = line.split_once(';') else {
                continue;
            };
            for (pos, mark) in marks.split(',').enumerate() {
                index.insert((cat.to_string(), mark.to_string()), pos);
            }
        }
        Self { index }
    }

    /// The mark's position within its category's row, for deterministic
    /// sorting, or `None` if the (category, mark) pair is not listed.
    #[must_use]
    pub fn mark_index(&self, cat: &str, mark: &str) -> Option<usize> {
        self.index.get(&(cat.to_string(), mark.to_string())).copied()
    }

    #[must_use]
    pub fn is_valid_mark(&self, cat: &str, mark: &str) -> bool {
        self.mark_index(cat, mark).is_some()
    }
}

impl Default for MarkOrder {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_concatenated_mark() {
        let f = decode("ÞGFETgr");
        assert!(f.contains(MarkFeatures::THGF));
        assert!(f.contains(MarkFeatures::ET));
        assert!(f.contains(MarkFeatures::GR));
        assert!(!f.contains(MarkFeatures::FT));
    }

    #[test]
    fn decodes_hyphenated_mark() {
        let f = decode("FSB-KK-NFET");
        assert!(f.contains(MarkFeatures::FSB));
        assert!(f.contains(MarkFeatures::KK));
        assert!(f.contains(MarkFeatures::NF));
        assert!(f.contains(MarkFeatures::ET));
    }

    #[test]
    fn parses_person_shorthand_and_expl() {
        let target = parse_atoms(["p1", "expl"]).unwrap();
        assert!(target.features.contains(MarkFeatures::P1));
        assert!(target.features.contains(MarkFeatures::EXPL));
    }

    #[test]
    fn parses_nogr_as_exclusion_not_feature() {
        let target = parse_atoms(["EF", "nogr"]).unwrap();
        assert!(target.features.contains(MarkFeatures::EF));
        assert!(!target.features.contains(MarkFeatures::GR));
        assert!(target.exclude_gr);
        assert!(target.matches(MarkFeatures::EF));
        assert!(!target.matches(MarkFeatures::EF | MarkFeatures::GR));
    }

    #[test]
    fn rejects_unknown_atom() {
        assert!(parse_atoms(["XYZ"]).is_err());
    }

    #[test]
    fn mark_order_rejects_unlisted_pair() {
        let order = MarkOrder::load();
        assert!(!order.is_valid_mark("no", "TOTALLY-UNKNOWN"));
    }
}
