// Rendering constants: how big one grid unit is on screen and what colors we use.

/// Geometry knobs for turning grid units into pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub scale: u32,        // pixels per grid unit
    pub offset: u32,       // margin around the felt so edge pockets stay visible
    pub ball_radius: u32,  // pixels
    pub hole_radius: u32,  // pixels
}

pub const DEFAULT_SCALE: u32 = 50;
pub const DEFAULT_OFFSET: u32 = 25;

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset: DEFAULT_OFFSET,
            ball_radius: 10,
            hole_radius: 10,
        }
    }
}

impl RenderConfig {
    pub fn with_geometry(scale: u32, offset: u32) -> Self {
        Self { scale, offset, ..Self::default() }
    }
}

/// Fixed palette, packed as 0xAARRGGBB.
pub mod palette {
    pub const FELT: u32 = 0xFF_00_FF_00;   // green table
    pub const HOLE: u32 = 0xFF_00_00_00;   // black pockets
    pub const CUE: u32 = 0xFF_FF_FF_FF;    // white
    pub const SOLID: u32 = 0xFF_FF_00_00;  // red
    pub const STRIPE: u32 = 0xFF_00_00_FF; // blue
    pub const GUIDE: u32 = 0xFF_96_96_96;  // grey aim line
}
