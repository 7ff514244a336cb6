//! Tiny shared byte-reading helpers used by the section decoders. Every
//! integer in the image is little-endian (spec: "All integers are
//! little-endian"); callers are expected to have already bounds-checked the
//! region they're reading from via `.get()`.

#[must_use]
pub fn u32_at(blob: &[u8], offset: usize) -> Option<u32> {
    let bytes = blob.get(offset..offset + 4)?;
    Some(u32::from_le_bytes(bytes.try_into().ok()?))
}

#[must_use]
pub fn u32_at_or(blob: &[u8], offset: usize, default: u32) -> u32 {
    u32_at(blob, offset).unwrap_or(default)
}
