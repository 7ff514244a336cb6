use std::{error, fmt, io};

/// Failures opening or validating a memory-mapped image (the compressed
/// dictionary or a compound DAWG).
#[derive(Debug)]
pub enum ImageError {
    Io(io::Error),
    /// The image is shorter than its own header claims.
    Truncated { expected: usize, found: usize },
    BadSignature,
    UnsupportedVersion,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => err.fmt(f),
            Self::Truncated { expected, found } => {
                write!(f, "truncated image: expected at least {expected} bytes, found {found}")
            }
            Self::BadSignature => write!(f, "bad image signature"),
            Self::UnsupportedVersion => write!(f, "unsupported image version"),
        }
    }
}

impl error::Error for ImageError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ImageError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Failures from the query engine itself, as opposed to image loading.
#[derive(Debug)]
pub enum EngineError {
    Image(ImageError),
    /// A mark string contained a token `mark_to_set` does not recognize.
    UnknownMarkAtom(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(err) => err.fmt(f),
            Self::UnknownMarkAtom(atom) => write!(f, "unknown mark atom `{atom}`"),
        }
    }
}

impl error::Error for EngineError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Image(err) => Some(err),
            Self::UnknownMarkAtom(_) => None,
        }
    }
}

impl From<ImageError> for EngineError {
    fn from(err: ImageError) -> Self {
        Self::Image(err)
    }
}
