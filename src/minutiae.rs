// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Minutiae to template encoding.
//!
//! Detected minutiae come in image coordinates with no particular order.
//! Templates hold at most `MAX_MINUTIAE` rows in template coordinates, with
//! angles in `(-180, 180]`, sorted so that the same minutiae always produce
//! the same template.

use tracing::trace;

use crate::config::{DEGREES_PER_DIRECTION, MAX_MINUTIAE};
use crate::error::{PrintError, PrintResult};
use crate::types::{Minutia, MinutiaTemplate};

/// Maps a minutia from image space into template space.
pub trait CoordinateTransform {
    /// Returns template `(x, y, theta)` with `theta` in degrees.
    fn transform(&self, minutia: &Minutia, width: u32, height: u32) -> (i32, i32, i32);
}

/// NIST convention: origin at the bottom-left corner, angles in whole degrees
/// in `[0, 360)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NistTransform;

impl CoordinateTransform for NistTransform {
    fn transform(&self, minutia: &Minutia, _width: u32, height: u32) -> (i32, i32, i32) {
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        let degrees = round_half_away(f64::from(minutia.direction) * DEGREES_PER_DIRECTION);
        // Out-of-range detector values saturate instead of overflowing.
        let theta = (270 - i64::from(degrees)).rem_euclid(360) as i32;
        (minutia.x, height.saturating_sub(minutia.y), theta)
    }
}

/// One minutia in template space, with its reliability as a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XytPoint {
    pub x: i32,
    pub y: i32,
    pub theta: i32,
    pub quality: i32,
}

fn round_half_away(v: f64) -> i32 {
    // f64::round rounds half-way cases away from zero.
    v.round() as i32
}

/// Transforms the first `MAX_MINUTIAE` minutiae, in input order, into template space.
pub fn quantize<T: CoordinateTransform>(minutiae: &[Minutia], width: u32, height: u32, transform: &T) -> Vec<XytPoint> {
    minutiae
        .iter()
        .take(MAX_MINUTIAE)
        .map(|m| {
            let (x, y, mut theta) = transform.transform(m, width, height);
            if theta > 180 {
                theta -= 360;
            }
            XytPoint {
                x,
                y,
                theta,
                quality: round_half_away(m.reliability * 100.0),
            }
        })
        .collect()
}

/// Encodes detected minutiae into a template.
///
/// Rows are ordered by `x`, then `y` (then `theta`, so coincident points are
/// ordered too). Fails with `InvalidData` when there is nothing to encode.
pub fn encode_minutiae<T: CoordinateTransform>(
    minutiae: &[Minutia],
    width: u32,
    height: u32,
    transform: &T,
) -> PrintResult<MinutiaTemplate> {
    if minutiae.is_empty() {
        return Err(PrintError::InvalidData("No minutiae found in image or not yet detected".to_string()));
    }

    let mut points = quantize(minutiae, width, height, transform);
    points.sort_by_key(|p| (p.x, p.y, p.theta));

    let mut template = MinutiaTemplate::new();
    for p in &points {
        template.push(p.x, p.y, p.theta)?;
    }

    trace!(
        count = template.len(),
        dropped = minutiae.len() - points.len(),
        "encoded minutiae"
    );
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nist_transform_flips_y_and_rotates() {
        // 270 - 0 = 270 degrees.
        let (x, y, t) = NistTransform.transform(&Minutia::new(10, 20, 0, 1.0), 100, 300);
        assert_eq!((x, y, t), (10, 280, 270));

        // 8 units = 90 degrees.
        let (_, _, t) = NistTransform.transform(&Minutia::new(0, 0, 8, 1.0), 100, 300);
        assert_eq!(t, 180);

        // 25 units = 281.25 -> 281; 270 - 281 = -11 -> 349.
        let (_, _, t) = NistTransform.transform(&Minutia::new(0, 0, 25, 1.0), 100, 300);
        assert_eq!(t, 349);
    }

    #[test]
    fn test_nist_transform_saturates_out_of_range_points() {
        let (_, y, t) = NistTransform.transform(&Minutia::new(1, i32::MIN, 0, 1.0), 100, 300);
        assert_eq!((y, t), (i32::MAX, 270));

        let (_, y, _) = NistTransform.transform(&Minutia::new(1, i32::MAX, 0, 1.0), 100, 300);
        assert_eq!(y, 300 - i32::MAX);

        // 11.25 * i32::MAX rounds past i32 and saturates.
        let (_, _, t) = NistTransform.transform(&Minutia::new(0, 0, i32::MAX, 1.0), 100, 300);
        assert_eq!(t, (270 - i64::from(i32::MAX)).rem_euclid(360) as i32);
        let (_, _, t) = NistTransform.transform(&Minutia::new(0, 0, i32::MIN, 1.0), 100, 300);
        assert!((0..360).contains(&t));
    }

    #[test]
    fn test_reliability_rounds_half_away_from_zero() {
        struct Identity;
        impl CoordinateTransform for Identity {
            fn transform(&self, m: &Minutia, _: u32, _: u32) -> (i32, i32, i32) {
                (m.x, m.y, m.direction)
            }
        }
        let points = quantize(
            &[Minutia::new(0, 0, 0, 0.125), Minutia::new(0, 0, 0, 0.5), Minutia::new(0, 0, 0, 0.994)],
            1,
            1,
            &Identity,
        );
        let q: Vec<i32> = points.iter().map(|p| p.quality).collect();
        assert_eq!(q, vec![13, 50, 99]);
    }
}
