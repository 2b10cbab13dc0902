// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod enums;
pub mod minutia;
pub mod template;

pub use enums::{Finger, PrintKind};
pub use minutia::Minutia;
pub use template::MinutiaTemplate;
