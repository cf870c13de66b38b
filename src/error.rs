// One error type for the whole pipeline.
// Every variant states *where* things went wrong: reading the state file,
// validating its shape, converting numbers, drawing, or writing the image.
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Shape violations in the state file. These are the user's fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid header: {0:?} (expected \"<width> <height>\")")]
    InvalidHeader(String),

    #[error("invalid ball row at line {line}: {content:?} (expected \"<x> <y> <0|1|2>\")")]
    InvalidBallRow { line: usize, content: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    // A token passed shape validation but still would not convert.
    #[error("internal number conversion failed for {token:?}: {source}")]
    Number {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("no cue ball (type 0) on the table, cannot compute an aim line")]
    NoCueBall,

    #[error("canvas of {width}x{height} grid units is too large to render")]
    CanvasTooLarge { width: u32, height: u32 },

    #[cfg(feature = "preview")]
    #[error("preview window error: {0}")]
    Window(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
