// Optional on-screen preview of the rendered table.
// Visual: a window the size of the output image shows the table until you
// press ESC or close it.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::Window(e.to_string()))?;
        window.set_target_fps(30); // a still image, no need to spin
        Ok(Self { window })
    }

    /// Push the pixels to the screen. minifb ignores the alpha byte,
    /// so the transparent margin shows as black.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::Window(e.to_string()))
    }

    /// Returns false once the user closes the window or holds ESC.
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }
}

/// Block until the preview window is dismissed.
pub fn show(title: &str, fb: &FrameBuffer) -> Result<(), Error> {
    let mut drawer = Drawer::new(title, fb.width, fb.height)?;
    while drawer.is_open() {
        drawer.present(fb)?;
    }
    Ok(())
}
