// Software drawing primitives on a FrameBuffer.
// Visual effects provided here:
// 1) Filled rectangles (the table felt).
// 2) Filled disks (holes and balls).
// 3) A slope-intercept line (the aim guide) plus straight axis lines.
// Every primitive is clipped: pixels that fall off the canvas are skipped.

use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i64, y: i64, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill the half-open rectangle [x1,x2) x [y1,y2).
/// Visual: a solid block; an empty or inverted rectangle draws nothing.
pub fn fill_rect(fb: &mut FrameBuffer, x1: i64, y1: i64, x2: i64, y2: i64, color: u32) {
    // Clip once up front instead of per pixel
    let x_start = x1.max(0);
    let y_start = y1.max(0);
    let x_end = x2.min(fb.width as i64);
    let y_end = y2.min(fb.height as i64);
    for y in y_start..y_end {
        for x in x_start..x_end {
            put_pixel(fb, x, y, color);
        }
    }
}

/// Filled disk centered at (cx,cy).
/// Offsets run over [-radius, radius), so the disk reaches one pixel further
/// left/up than right/down. Output images depend on that exact shape.
pub fn circle(fb: &mut FrameBuffer, cx: i64, cy: i64, radius: i64, color: u32) {
    if radius <= 0 {
        return;
    }
    let r = radius as f64;
    for dx in -radius..radius {
        for dy in -radius..radius {
            let (fx, fy) = (dx as f64, dy as f64);
            let d = (fx * fx + fy * fy).sqrt() / r;
            if d <= 1.0 {
                put_pixel(fb, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Horizontal line, both ends inclusive.
pub fn hline(fb: &mut FrameBuffer, x1: i64, y: i64, x2: i64, color: u32) {
    for x in x1.max(0)..=x2.min(fb.width as i64 - 1) {
        put_pixel(fb, x, y, color);
    }
}

/// Vertical line, both ends inclusive.
pub fn vline(fb: &mut FrameBuffer, x: i64, y1: i64, y2: i64, color: u32) {
    for y in y1.max(0)..=y2.min(fb.height as i64 - 1) {
        put_pixel(fb, x, y, color);
    }
}

/// Rectangle outline built from two hlines and two vlines.
pub fn rect(fb: &mut FrameBuffer, x1: i64, y1: i64, x2: i64, y2: i64, color: u32) {
    hline(fb, x1, y1, x2, color);
    hline(fb, x1, y2, x2, color);
    vline(fb, x1, y1, y2, color);
    vline(fb, x2, y1, y2, color);
}

/// Line via y = m*x + c, one pixel per integer x.
/// Visual: steep lines come out as a dotted trail (one y per column).
/// A vertical segment has no slope and is drawn with `vline` instead.
pub fn slope_line(fb: &mut FrameBuffer, x1: i64, y1: i64, x2: i64, y2: i64, color: u32) {
    if x1 == x2 {
        vline(fb, x1, y1.min(y2), y1.max(y2), color);
        return;
    }

    let (fx1, fy1, fx2, fy2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);
    let m = (fy2 - fy1) / (fx2 - fx1);
    let c = fy1 - fx1 * m;

    // Columns off the canvas never plot anything, so skip them
    let start = x1.min(x2).max(0);
    let end = x1.max(x2).min(fb.width as i64 - 1);
    for x in start..=end {
        let y = (m * x as f64 + c).floor() as i64;
        log::trace!("aim pixel {x} {y}");
        put_pixel(fb, x, y, color);
    }
}
