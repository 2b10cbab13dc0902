// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Captured fingerprint image.

use crate::types::Minutia;

/// A greyscale capture and the minutiae detected in it, if detection has run.
#[derive(Clone, Debug, Default)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
    minutiae: Option<Vec<Minutia>>,
}

impl Image {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
            minutiae: None,
        }
    }

    /// Attaches the result of minutiae detection.
    pub fn with_minutiae(mut self, minutiae: Vec<Minutia>) -> Self {
        self.minutiae = Some(minutiae);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Detected minutiae; `None` until detection has run.
    pub fn minutiae(&self) -> Option<&[Minutia]> {
        self.minutiae.as_deref()
    }
}
