// Core types: the parsed table and the pixel buffer we draw it into.

/// Ball type codes from the state file. Rows may only *start* with 0/1/2,
/// but the whole third token is the code, so e.g. "10" lands in `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallKind {
    Cue,
    Solid,
    Stripe,
    Other(u32),    // drawn like a stripe, never the cue
}

impl BallKind {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => BallKind::Cue,
            1 => BallKind::Solid,
            2 => BallKind::Stripe,
            n => BallKind::Other(n),
        }
    }

    pub fn code(self) -> u32 {
        match self {
            BallKind::Cue => 0,
            BallKind::Solid => 1,
            BallKind::Stripe => 2,
            BallKind::Other(n) => n,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: u32,    // grid column
    pub y: u32,    // grid row
    pub kind: BallKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Hole {
    pub x: u32,
    pub y: u32,
}

/// Everything the renderer needs, in grid units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    pub width: u32,
    pub height: u32,
    pub balls: Vec<Ball>,    // input row order
    pub holes: [Hole; 6],    // always derive_holes(width, height)
}

impl TableState {
    pub fn new(width: u32, height: u32, balls: Vec<Ball>) -> Self {
        Self { width, height, balls, holes: derive_holes(width, height) }
    }

    /// Human-readable dump of the state, one entry per line.
    pub fn summary(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(1 + self.balls.len() + self.holes.len());
        out.push(format!("Width: {}, Height: {}", self.width, self.height));
        for b in &self.balls {
            out.push(format!("Ball X: {}, Y: {}, Type: {}", b.x, b.y, b.kind.code()));
        }
        for h in &self.holes {
            out.push(format!("Hole X: {}, Y: {}", h.x, h.y));
        }
        out
    }
}

/// Six pockets: four corners plus the middle of both long sides.
/// The middle row uses truncating division (h=7 -> 3).
pub fn derive_holes(width: u32, height: u32) -> [Hole; 6] {
    let mid = height / 2;
    [
        Hole { x: 0, y: 0 },
        Hole { x: width, y: 0 },
        Hole { x: 0, y: mid },
        Hole { x: width, y: mid },
        Hole { x: 0, y: height },
        Hole { x: width, y: height },
    ]
}

#[derive(Clone, Debug)]
pub struct FrameBuffer {
    pub width: usize,      // canvas width in pixels
    pub height: usize,     // canvas height in pixels
    pub pixels: Vec<u32>,  // row-major, each entry is 0xAARRGGBB; 0 = transparent
}

impl FrameBuffer {
    /// A fully transparent canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Read a pixel back; `None` outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}
