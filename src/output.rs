// Writes a FrameBuffer to disk as a PNG.
// Visual expectation: the file opens in any image viewer and shows exactly the
// pixels the renderer drew, transparent margin included.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Unpack 0xAARRGGBB pixels into an `image` RGBA buffer.
pub fn to_rgba_image(fb: &FrameBuffer) -> RgbaImage {
    RgbaImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgba([
            ((px >> 16) & 0xFF) as u8,
            ((px >> 8) & 0xFF) as u8,
            (px & 0xFF) as u8,
            ((px >> 24) & 0xFF) as u8,
        ])
    })
}

/// Encode as PNG regardless of the file extension (the default name has none).
/// The file handle is dropped (closed) on every return path.
pub fn write_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    let img = to_rgba_image(fb);
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png)?;
    writer.into_inner().map_err(|e| Error::io(path, e.into_error()))?;
    Ok(())
}
