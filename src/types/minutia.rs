// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Detected minutia point.

use serde::{Deserialize, Serialize};

/// A ridge feature as reported by minutiae detection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minutia {
    /// Pixel column in the source image.
    pub x: i32,
    /// Pixel row in the source image, counted from the top.
    pub y: i32,
    /// Ridge direction in NBIS direction units (11.25 degrees each).
    pub direction: i32,
    /// Detection confidence in `[0, 1]`.
    pub reliability: f64,
}

impl Minutia {
    pub fn new(x: i32, y: i32, direction: i32, reliability: f64) -> Self {
        Self {
            x,
            y,
            direction,
            reliability,
        }
    }
}
