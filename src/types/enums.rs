// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Print enums.

use serde::{Deserialize, Serialize};

/// Kind of data held by a print record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrintKind {
    /// Transient state of a freshly created enrollment record.
    Undefined,
    /// Opaque driver-specific data.
    Raw,
    /// Minutiae templates ("NBIS" prints).
    TemplateSet,
}

impl PrintKind {
    pub fn to_i32(self) -> i32 {
        match self {
            PrintKind::Undefined => 0,
            PrintKind::Raw => 1,
            PrintKind::TemplateSet => 2,
        }
    }

    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            0 => Some(PrintKind::Undefined),
            1 => Some(PrintKind::Raw),
            2 => Some(PrintKind::TemplateSet),
            _ => None,
        }
    }
}

impl Default for PrintKind {
    fn default() -> Self {
        PrintKind::Undefined
    }
}

/// Which finger a print belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finger {
    Unknown,
    LeftThumb,
    LeftIndex,
    LeftMiddle,
    LeftRing,
    LeftLittle,
    RightThumb,
    RightIndex,
    RightMiddle,
    RightRing,
    RightLittle,
    /// Stored value outside the known range, kept as-is.
    Unrecognized(u8),
}

impl Finger {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Finger::Unknown,
            1 => Finger::LeftThumb,
            2 => Finger::LeftIndex,
            3 => Finger::LeftMiddle,
            4 => Finger::LeftRing,
            5 => Finger::LeftLittle,
            6 => Finger::RightThumb,
            7 => Finger::RightIndex,
            8 => Finger::RightMiddle,
            9 => Finger::RightRing,
            10 => Finger::RightLittle,
            other => Finger::Unrecognized(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Finger::Unknown => 0,
            Finger::LeftThumb => 1,
            Finger::LeftIndex => 2,
            Finger::LeftMiddle => 3,
            Finger::LeftRing => 4,
            Finger::LeftLittle => 5,
            Finger::RightThumb => 6,
            Finger::RightIndex => 7,
            Finger::RightMiddle => 8,
            Finger::RightRing => 9,
            Finger::RightLittle => 10,
            Finger::Unrecognized(v) => v,
        }
    }
}

impl Default for Finger {
    fn default() -> Self {
        Finger::Unknown
    }
}
