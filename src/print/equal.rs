// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Print equality.

use crate::error::{PrintError, PrintResult};
use crate::print::record::{PrintData, PrintRecord};

impl PrintRecord {
    /// Whether two prints hold the same data for the same device.
    ///
    /// Metadata (finger, username, description, enrollment date, image) is
    /// ignored. Template sets must match position by position. Fails with
    /// `InvalidState` if either print has no data yet.
    pub fn equal(&self, other: &PrintRecord) -> PrintResult<bool> {
        if matches!(self.data(), PrintData::Undefined) || matches!(other.data(), PrintData::Undefined) {
            return Err(PrintError::InvalidState("cannot compare an undefined print".to_string()));
        }

        if self.kind() != other.kind() || self.driver() != other.driver() || self.device_id() != other.device_id() {
            return Ok(false);
        }

        let equal = match (self.data(), other.data()) {
            (PrintData::Raw(a), PrintData::Raw(b)) => a == b,
            (PrintData::TemplateSet(a), PrintData::TemplateSet(b)) => a == b,
            _ => false,
        };
        Ok(equal)
    }
}
