//! The two vocabulary record shapes: [`Ksnid`] (the full 15-field record)
//! and [`BinEntry`] (its 6-field projection), plus the [`DictEntry`] trait
//! that lets the query engine, its filters, and the cache be written once
//! against either shape.

use std::fmt;

/// Where a `bin_id` originates, decoded from the ksnid string's "birting"
/// field (spec: `bin_id` below `begin_greynir_utg` is canonical BÍN; above
/// is engine-local).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A canonical entry from the underlying dictionary.
    Canonical,
    /// Composed at query time (e.g. a compound-slicing result); `bin_id == 0`.
    Synthetic,
    /// An engine-local addition covering a suffix-only compound sense.
    SuffixOnly,
}

impl Origin {
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Canonical => '-',
            Self::Synthetic => 'G',
            Self::SuffixOnly => 'S',
        }
    }

    #[must_use]
    pub fn from_code(c: char) -> Self {
        match c {
            'G' => Self::Synthetic,
            'S' => Self::SuffixOnly,
            _ => Self::Canonical,
        }
    }
}

/// The 6-field projection of a vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinEntry {
    pub lemma: String,
    pub bin_id: u32,
    pub word_class: String,
    pub domain: String,
    pub form: String,
    pub mark: String,
}

/// The full 15-field vocabulary record: [`BinEntry`]'s six fields plus nine
/// ancillary fields collectively called the "ksnid string" in the image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ksnid {
    pub lemma: String,
    pub bin_id: u32,
    pub word_class: String,
    pub domain: String,
    pub form: String,
    pub mark: String,
    /// Quality grade for the lemma sense (0 = unverified, 1 = verified).
    pub quality: u8,
    pub register: String,
    pub note: String,
    pub cross_ref: String,
    pub origin: Origin,
    /// Quality grade specific to this inflected form, as opposed to the lemma sense.
    pub form_quality: u8,
    pub form_register: String,
    pub form_value: String,
    pub alt_lemma: String,
}

impl Ksnid {
    /// Narrow to the 6-field projection, discarding the ancillary fields.
    #[must_use]
    pub fn to_bin_entry(&self) -> BinEntry {
        BinEntry {
            lemma: self.lemma.clone(),
            bin_id: self.bin_id,
            word_class: self.word_class.clone(),
            domain: self.domain.clone(),
            form: self.form.clone(),
            mark: self.mark.clone(),
        }
    }

    /// The nine ancillary fields packed into the image's "ksnid string"
    /// representation: semicolon-joined, in table-storage order.
    #[must_use]
    pub fn ksnid_string(&self) -> String {
        format!(
            "{};{};{};{};{};{};{};{};{}",
            self.quality,
            self.register,
            self.note,
            self.cross_ref,
            self.origin.code(),
            self.form_quality,
            self.form_register,
            self.form_value,
            self.alt_lemma,
        )
    }

    /// Reconstruct the ancillary fields from a stored ksnid string, pairing
    /// them with the six fields resolved separately (from the lemma and
    /// meaning tables). Malformed strings degrade field-by-field to empty
    /// defaults rather than failing the whole lookup.
    #[must_use]
    pub fn from_ksnid_string(
        lemma: String,
        bin_id: u32,
        word_class: String,
        domain: String,
        form: String,
        mark: String,
        ksnid_string: &str,
    ) -> Self {
        let mut fields = ksnid_string.split(';');
        let mut next = || fields.next().unwrap_or("").to_string();
        let quality = next().parse().unwrap_or(0);
        let register = next();
        let note = next();
        let cross_ref = next();
        let origin = Origin::from_code(next().chars().next().unwrap_or('-'));
        let form_quality = next().parse().unwrap_or(0);
        let form_register = next();
        let form_value = next();
        let alt_lemma = next();
        Self {
            lemma,
            bin_id,
            word_class,
            domain,
            form,
            mark,
            quality,
            register,
            note,
            cross_ref,
            origin,
            form_quality,
            form_register,
            form_value,
            alt_lemma,
        }
    }
}

impl fmt::Display for Ksnid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.bin_id, self.word_class, self.domain, self.form, self.mark)
    }
}

/// The six fields shared by both record shapes, so filters, the prefix-
/// adding compound transform, and the cache can be written once.
pub trait DictEntry {
    fn lemma(&self) -> &str;
    fn bin_id(&self) -> u32;
    fn word_class(&self) -> &str;
    fn domain(&self) -> &str;
    fn form(&self) -> &str;
    fn mark(&self) -> &str;
}

impl DictEntry for BinEntry {
    fn lemma(&self) -> &str {
        &self.lemma
    }
    fn bin_id(&self) -> u32 {
        self.bin_id
    }
    fn word_class(&self) -> &str {
        &self.word_class
    }
    fn domain(&self) -> &str {
        &self.domain
    }
    fn form(&self) -> &str {
        &self.form
    }
    fn mark(&self) -> &str {
        &self.mark
    }
}

impl DictEntry for Ksnid {
    fn lemma(&self) -> &str {
        &self.lemma
    }
    fn bin_id(&self) -> u32 {
        self.bin_id
    }
    fn word_class(&self) -> &str {
        &self.word_class
    }
    fn domain(&self) -> &str {
        &self.domain
    }
    fn form(&self) -> &str {
        &self.form
    }
    fn mark(&self) -> &str {
        &self.mark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ksnid_string_round_trips() {
        let k = Ksnid {
            lemma: "fjörður".into(),
            bin_id: 5697,
            word_class: "kk".into(),
            domain: "alm".into(),
            form: "fjörðurinn".into(),
            mark: "NFETgr".into(),
            quality: 1,
            register: "".into(),
            note: "".into(),
            cross_ref: "".into(),
            origin: Origin::Canonical,
            form_quality: 1,
            form_register: "".into(),
            form_value: "".into(),
            alt_lemma: "".into(),
        };
        let s = k.ksnid_string();
        let k2 = Ksnid::from_ksnid_string(
            k.lemma.clone(),
            k.bin_id,
            k.word_class.clone(),
            k.domain.clone(),
            k.form.clone(),
            k.mark.clone(),
            &s,
        );
        assert_eq!(k, k2);
    }

    #[test]
    fn to_bin_entry_narrows_fields() {
        let k = Ksnid::from_ksnid_string(
            "sko".into(), 495410, "uh".into(), "alm".into(), "sko".into(), "OBEYGJANLEGT".into(),
            "1;;;;-;1;;;",
        );
        let b = k.to_bin_entry();
        assert_eq!(b.lemma, "sko");
        assert_eq!(b.bin_id, 495410);
    }
}
