//! Component A: opens the compressed image, validates its signature, and
//! decodes the ten little-endian `u32` section offsets plus the two scalar
//! fields. Mirrors `BinCompressed.__init__`'s `struct.unpack` call, but every
//! `assert` there becomes a typed [`ImageError`] here.

use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::ImageError;

pub const SIGNATURE: &[u8; 16] = b"Greynir 04.00.00";
const HEADER_LEN: usize = 16 + 10 * 4;

/// The ten section offsets and two scalars decoded from the image header.
#[derive(Debug, Clone, Copy)]
pub struct ImageHeader {
    pub mappings: usize,
    pub forms: usize,
    pub lemmas: usize,
    pub templates: usize,
    pub meanings: usize,
    pub alphabet: usize,
    pub subcats: usize,
    pub ksnid: usize,
    pub begin_greynir_utg: u32,
    pub max_bin_id: u32,
}

impl ImageHeader {
    fn parse(bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() < HEADER_LEN {
            return Err(ImageError::Truncated { expected: HEADER_LEN, found: bytes.len() });
        }
        if &bytes[0..16] != SIGNATURE {
            return Err(ImageError::BadSignature);
        }
        let word = |i: usize| -> u32 {
            let off = 16 + i * 4;
            u32::from_le_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]])
        };
        Ok(Self {
            mappings: word(0) as usize,
            forms: word(1) as usize,
            lemmas: word(2) as usize,
            templates: word(3) as usize,
            meanings: word(4) as usize,
            alphabet: word(5) as usize,
            subcats: word(6) as usize,
            ksnid: word(7) as usize,
            begin_greynir_utg: word(8),
            max_bin_id: word(9),
        })
    }
}

/// The memory-mapped image: an immutable byte blob plus its decoded header.
/// All navigation in components B–E borrows from [`Image::bytes`]; nothing
/// here allocates a copy of the dictionary's own data.
pub struct Image {
    mmap: Mmap,
    pub header: ImageHeader,
}

impl Image {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let file = File::open(path)?;
        // SAFETY: the file is opened read-only for the lifetime of `Image`
        // and is never truncated or written to concurrently by this process;
        // callers are responsible for not mutating the backing file from
        // elsewhere, same contract `memmap2::Mmap::map` always carries.
        let mmap = unsafe { Mmap::map(&file)? };
        let header = ImageHeader::parse(&mmap)?;
        Ok(Self { mmap, header })
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }
}
