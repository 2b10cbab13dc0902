// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

use serde::{Deserialize, Serialize};

/// Capacity of a minutia template. Fixed by the gallery format of the matcher.
pub const MAX_MINUTIAE: usize = 200;

/// Magic/version tag prefixed to every serialized print.
pub const MAGIC: &[u8; 3] = b"FP3";

/// Stored enrollment day meaning "no date".
pub const NO_ENROLL_DATE: i32 = i32::MIN;

/// Conventional BZ3 score threshold for a successful match.
pub const DEFAULT_BZ3_THRESHOLD: i32 = 40;

/// Maximum container/variant nesting accepted from serialized data.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Angular size of one NBIS direction unit, in degrees.
pub const DEGREES_PER_DIRECTION: f64 = 11.25;

/// Matcher settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum score accepted as a match.
    pub threshold: i32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_BZ3_THRESHOLD,
        }
    }
}
