// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Print records.

pub mod equal;
pub mod record;

pub use record::{PrintData, PrintRecord};
