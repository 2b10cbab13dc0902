// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! fprint-core: fingerprint print records, their FP3 storage format and
//! threshold matching of minutiae templates.

pub mod codec;
pub mod config;
pub mod device;
pub mod error;
pub mod image;
pub mod matcher;
pub mod minutiae;
pub mod print;
pub mod types;
pub mod variant;

#[cfg(test)]
pub mod tests;

pub use config::MatchConfig;
pub use device::{Device, DeviceInfo};
pub use error::{PrintError, PrintResult, VariantError};
pub use image::Image;
pub use matcher::{MatchOutcome, Matcher, Scorer};
pub use minutiae::{CoordinateTransform, NistTransform};
pub use print::{PrintData, PrintRecord};
pub use types::{Finger, Minutia, MinutiaTemplate, PrintKind};
pub use variant::{Variant, VariantType};
