//! Component E: decodes a lemma's inflected-form set from its
//! delta-compressed template, reconstructing each form as an edit against
//! the previously decoded one.
//!
//! Each step's control byte either:
//! - sets the high bit (`0x80`): the low 7 bits are `cut` (0..127) and the
//!   following byte is the suffix length, given explicitly; or
//! - clears it: bits 6..3 are `cut` (0..15) and bits 2..0 are a signed
//!   (two's-complement, 3-bit) delta added to `cut` to get the suffix length.
//!
//! `cut` counts how many trailing bytes of the previous form are discarded;
//! the retained prefix is followed by `suffix_len` literal bytes read from
//! the template and appended as-is — `suffix_len` is already the count of
//! new bytes to append, not a total form length. A control byte of `0x00`
//! terminates the sequence.

/// Reconstruct the set of inflected forms for a lemma, given its Latin-1
/// bytes and the template blob starting at `template_offset` (relative to
/// the templates section start). The lemma itself is always included.
#[must_use]
pub fn decode(templates: &[u8], template_offset: usize, lemma: &[u8]) -> Vec<Vec<u8>> {
    let mut forms = vec![lemma.to_vec()];
    let mut last = lemma.to_vec();
    let mut cursor = template_offset;

    loop {
        let Some(&control) = templates.get(cursor) else { break };
        if control == 0 {
            break;
        }
        cursor += 1;

        let (cut, suffix_len) = if control & 0x80 != 0 {
            let cut = (control & 0x7F) as usize;
            let Some(&len_byte) = templates.get(cursor) else { break };
            cursor += 1;
            (cut, len_byte as usize)
        } else {
            let cut = ((control >> 3) & 0x0F) as usize;
            let raw_delta = control & 0x07;
            let delta = if raw_delta & 0x04 != 0 {
                i32::from(raw_delta) - 8
            } else {
                i32::from(raw_delta)
            };
            let suffix_len = cut as i32 + delta;
            if suffix_len < 0 {
                break;
            }
            (cut, suffix_len as usize)
        };

        let Some(common) = last.len().checked_sub(cut) else { break };
        let Some(suffix) = templates.get(cursor..cursor + suffix_len) else { break };
        cursor += suffix_len;

        let mut next = last[..common].to_vec();
        next.extend_from_slice(suffix);
        forms.push(next.clone());
        last = next;
    }

    forms
}

#[cfg(test)]
pub(crate) mod builder {
    //! Packer-side encoder mirroring [`super::decode`]'s algorithm in
    //! reverse, used to produce synthetic templates for tests.
    use super::*;

    /// Encode `forms` (the lemma followed by its other inflected forms) as a
    /// template blob, greedily sharing the longest common prefix with the
    /// immediately preceding form.
    pub fn encode(forms: &[&[u8]]) -> Vec<u8> {
        assert!(!forms.is_empty());
        let mut out = Vec::new();
        let mut last = forms[0].to_vec();
        for &form in &forms[1..] {
            let common = last.iter().zip(form).take_while(|(a, b)| a == b).count();
            let cut = last.len() - common;
            let suffix_len = form.len() - common;
            let delta = suffix_len as i32 - cut as i32;
            if cut <= 0x0F && (-4..=3).contains(&delta) {
                let raw_delta = (delta & 0x07) as u8;
                let control = ((cut as u8) << 3) | raw_delta;
                assert_ne!(control, 0, "short-form encoding collided with terminator");
                out.push(control);
            } else {
                out.push(0x80 | (cut as u8 & 0x7F));
                out.push(suffix_len as u8);
            }
            out.extend_from_slice(&form[common..]);
            last = form.to_vec();
        }
        out.push(0);
        out
    }
}
