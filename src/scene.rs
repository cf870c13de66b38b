// Draws a TableState into a fresh FrameBuffer.
// Visual result, back to front:
//   green felt -> six black pockets -> colored balls -> grey aim line
//   from the ball nearest the cue to the cue itself.

use crate::config::{palette, RenderConfig};
use crate::draw::{circle, fill_rect, slope_line};
use crate::error::Error;
use crate::types::{Ball, BallKind, FrameBuffer, TableState};

pub fn render(state: &TableState, config: &RenderConfig) -> Result<FrameBuffer, Error> {
    // Resolve everything that can fail before touching a pixel.
    let aim = aim_pair(&state.balls)?;
    let mut fb = allocate(state, config)?;
    let scale = i64::from(config.scale);
    let offset = i64::from(config.offset);
    let to_px = |v: u32| i64::from(v) * scale + offset;

    /* 1) Felt covers the playable area, leaving the margin transparent. */
    fill_rect(
        &mut fb,
        offset,
        offset,
        i64::from(state.width) * scale + offset,
        i64::from(state.height) * scale + offset,
        palette::FELT,
    );

    /* 2) Pockets */
    for hole in &state.holes {
        circle(&mut fb, to_px(hole.x), to_px(hole.y), i64::from(config.hole_radius), palette::HOLE);
    }

    /* 3) Balls, later rows on top of earlier ones */
    for ball in &state.balls {
        circle(&mut fb, to_px(ball.x), to_px(ball.y), i64::from(config.ball_radius), ball_color(ball.kind));
    }

    /* 4) Aim line: closest ball -> cue */
    match aim {
        Some((cue, closest)) => {
            log::debug!("aim from {closest:?} to cue {cue:?}");
            slope_line(
                &mut fb,
                to_px(closest.x),
                to_px(closest.y),
                to_px(cue.x),
                to_px(cue.y),
                palette::GUIDE,
            );
        }
        None => log::warn!("cue ball has nothing to aim at, skipping aim line"),
    }

    Ok(fb)
}

pub fn ball_color(kind: BallKind) -> u32 {
    match kind {
        BallKind::Cue => palette::CUE,
        BallKind::Solid => palette::SOLID,
        BallKind::Stripe | BallKind::Other(_) => palette::STRIPE,
    }
}

/// Pick `(cue, closest)`.
///
/// The cue is the last type-0 ball. The closest is the non-cue ball with the
/// smallest squared distance to it; on ties the earlier row wins.
/// No cue at all is an error. A cue alone on the table gives `Ok(None)`.
pub fn aim_pair(balls: &[Ball]) -> Result<Option<(Ball, Ball)>, Error> {
    let cue = balls
        .iter()
        .rev()
        .find(|b| b.kind == BallKind::Cue)
        .copied()
        .ok_or(Error::NoCueBall)?;

    let mut closest: Option<(Ball, u128)> = None;
    for ball in balls.iter().filter(|b| b.kind != BallKind::Cue) {
        let d = squared_distance(&cue, ball);
        if closest.is_none_or(|(_, best)| d < best) {
            closest = Some((*ball, d));
        }
    }

    Ok(closest.map(|(ball, _)| (cue, ball)))
}

fn squared_distance(a: &Ball, b: &Ball) -> u128 {
    let dx = u128::from(a.x.abs_diff(b.x));
    let dy = u128::from(a.y.abs_diff(b.y));
    dx * dx + dy * dy
}

// 2^28 pixels is 1 GiB of u32s.
const MAX_PIXELS: usize = 1 << 28;
// Per side, so a zero-height table cannot smuggle in an endless width.
const MAX_SIDE: usize = 1 << 16;

/// Canvas of (w*scale + 2*offset) x (h*scale + 2*offset) pixels.
fn allocate(state: &TableState, config: &RenderConfig) -> Result<FrameBuffer, Error> {
    let too_large = || Error::CanvasTooLarge { width: state.width, height: state.height };
    let side = |units: u32| -> Option<usize> {
        let px = u64::from(units)
            .checked_mul(u64::from(config.scale))?
            .checked_add(2 * u64::from(config.offset))?;
        usize::try_from(px).ok()
    };

    let w = side(state.width).filter(|&w| w <= MAX_SIDE).ok_or_else(too_large)?;
    let h = side(state.height).filter(|&h| h <= MAX_SIDE).ok_or_else(too_large)?;
    if w.checked_mul(h).is_none_or(|n| n > MAX_PIXELS) {
        return Err(too_large());
    }
    Ok(FrameBuffer::new(w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: u32, y: u32, kind: BallKind) -> Ball {
        Ball { x, y, kind }
    }

    fn px(v: i64) -> i64 {
        v * 50 + 25
    }

    #[test]
    fn nearest_ball_wins_by_squared_distance() {
        let balls = [
            ball(0, 0, BallKind::Cue),
            ball(1, 1, BallKind::Solid),
            ball(5, 5, BallKind::Stripe),
        ];
        let (cue, closest) = aim_pair(&balls).unwrap().unwrap();
        assert_eq!(cue, balls[0]);
        assert_eq!(closest, ball(1, 1, BallKind::Solid));
    }

    #[test]
    fn ties_keep_first_found() {
        let balls = [
            ball(2, 0, BallKind::Stripe),
            ball(2, 2, BallKind::Cue),
            ball(0, 2, BallKind::Solid),
        ];
        let (_, closest) = aim_pair(&balls).unwrap().unwrap();
        assert_eq!(closest, balls[0]);

        let balls = [
            ball(3, 3, BallKind::Cue),
            ball(3, 4, BallKind::Solid),
            ball(3, 2, BallKind::Stripe),
        ];
        let (_, closest) = aim_pair(&balls).unwrap().unwrap();
        assert_eq!(closest, balls[1]);
    }

    #[test]
    fn last_cue_ball_is_used() {
        let balls = [
            ball(0, 0, BallKind::Cue),
            ball(9, 9, BallKind::Cue),
            ball(1, 0, BallKind::Solid),
            ball(8, 9, BallKind::Stripe),
        ];
        let (cue, closest) = aim_pair(&balls).unwrap().unwrap();
        assert_eq!(cue, ball(9, 9, BallKind::Cue));
        assert_eq!(closest, ball(8, 9, BallKind::Stripe));
    }

    #[test]
    fn no_cue_ball_is_an_error() {
        let balls = [ball(1, 1, BallKind::Solid), ball(2, 2, BallKind::Stripe)];
        assert!(matches!(aim_pair(&balls), Err(Error::NoCueBall)));
        assert!(matches!(aim_pair(&[]), Err(Error::NoCueBall)));

        let state = TableState::new(4, 2, balls.to_vec());
        assert!(matches!(render(&state, &RenderConfig::default()), Err(Error::NoCueBall)));
    }

    #[test]
    fn lone_cue_has_no_aim_line() {
        let balls = [ball(1, 1, BallKind::Cue)];
        assert_eq!(aim_pair(&balls).unwrap(), None);

        let state = TableState::new(4, 2, balls.to_vec());
        let fb = render(&state, &RenderConfig::default()).unwrap();
        assert!(!fb.pixels.contains(&palette::GUIDE));
    }

    #[test]
    fn far_coordinates_do_not_overflow_distance() {
        let balls = [
            ball(0, 0, BallKind::Cue),
            ball(u32::MAX, u32::MAX, BallKind::Solid),
            ball(u32::MAX, 0, BallKind::Stripe),
        ];
        let (_, closest) = aim_pair(&balls).unwrap().unwrap();
        assert_eq!(closest, balls[2]);
    }

    #[test]
    fn canvas_size_follows_scale_and_offset() {
        let state = TableState::new(4, 2, vec![ball(1, 1, BallKind::Cue), ball(3, 1, BallKind::Solid)]);
        let fb = render(&state, &RenderConfig::default()).unwrap();
        assert_eq!((fb.width, fb.height), (250, 150));

        let fb = render(&state, &RenderConfig::with_geometry(10, 5)).unwrap();
        assert_eq!((fb.width, fb.height), (50, 30));
    }

    #[test]
    fn scene_layers_are_drawn() {
        let state = TableState::new(
            4,
            2,
            vec![
                ball(0, 1, BallKind::Cue),
                ball(2, 1, BallKind::Solid),
                ball(3, 2, BallKind::Stripe),
            ],
        );
        let fb = render(&state, &RenderConfig::default()).unwrap();

        // margin stays transparent, felt fills the table
        assert_eq!(fb.get(0, 0), Some(0));
        assert_eq!(fb.get(px(2), px(0) + 20), Some(palette::FELT));
        // pockets (the (0,1) pocket sits under the cue ball)
        assert_eq!(fb.get(px(0), px(0)), Some(palette::HOLE));
        assert_eq!(fb.get(px(4), px(1)), Some(palette::HOLE));
        assert_eq!(fb.get(px(0) - 5, px(1)), Some(palette::CUE));
        // balls (their centers are covered by the aim line)
        assert_eq!(fb.get(px(2) + 5, px(1)), Some(palette::SOLID));
        assert_eq!(fb.get(px(3), px(2)), Some(palette::STRIPE));
        // aim line runs along y = px(1) between the balls
        assert_eq!(fb.get(px(1), px(1)), Some(palette::GUIDE));
        assert_eq!(fb.get(px(1), px(1) + 1), Some(palette::FELT));
    }

    #[test]
    fn empty_table_still_needs_a_cue() {
        let state = TableState::new(0, 0, vec![]);
        assert!(matches!(render(&state, &RenderConfig::default()), Err(Error::NoCueBall)));
    }

    #[test]
    fn flat_table_cannot_bypass_the_size_limit() {
        let state = TableState::new(100_000, 0, vec![ball(0, 0, BallKind::Cue), ball(99_999, 0, BallKind::Solid)]);
        assert!(matches!(
            render(&state, &RenderConfig::with_geometry(50, 0)),
            Err(Error::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn unknown_type_codes_draw_blue_and_can_be_aimed_at() {
        let balls = [ball(1, 1, BallKind::Cue), ball(3, 1, BallKind::Other(10))];
        let (_, closest) = aim_pair(&balls).unwrap().unwrap();
        assert_eq!(closest, balls[1]);
        assert_eq!(ball_color(BallKind::Other(10)), palette::STRIPE);

        let fb = render(&TableState::new(4, 2, balls.to_vec()), &RenderConfig::default()).unwrap();
        assert_eq!(fb.get(px(3) + 5, px(1)), Some(palette::STRIPE));
    }

    #[test]
    fn huge_table_is_rejected_before_allocating() {
        let state = TableState::new(u32::MAX, u32::MAX, vec![ball(0, 0, BallKind::Cue)]);
        assert!(matches!(
            render(&state, &RenderConfig::default()),
            Err(Error::CanvasTooLarge { .. })
        ));
    }
}
