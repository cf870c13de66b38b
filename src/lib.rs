//! Pool table state files to PNG images.
//!
//! `parse` turns the text format into a [`TableState`], `render` draws it into a
//! [`FrameBuffer`] with an aim line from the nearest ball to the cue, and
//! `write_png` puts the result on disk.

pub mod config;
pub mod draw;
pub mod error;
pub mod output;
pub mod parse;
#[cfg(feature = "preview")]
pub mod preview;
pub mod scene;
pub mod types;

pub use config::RenderConfig;
pub use error::{Error, FormatError};
pub use output::write_png;
pub use parse::parse;
pub use scene::render;
pub use types::{Ball, BallKind, FrameBuffer, Hole, TableState};

use std::path::Path;

/// Read a state file from disk and parse it.
pub fn load_state(path: &Path) -> Result<TableState, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    log::debug!("state file {}:\n{text}", path.display());
    parse(&text)
}

/// The whole pipeline: read, parse, render, write. Nothing is written on error.
pub fn run(input: &Path, output: &Path, config: &RenderConfig) -> Result<FrameBuffer, Error> {
    let state = load_state(input)?;
    for line in state.summary() {
        log::info!("{line}");
    }

    let fb = render(&state, config)?;
    write_png(&fb, output)?;
    log::info!("wrote {}x{} image to {}", fb.width, fb.height, output.display());
    Ok(fb)
}
