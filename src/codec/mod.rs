// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! FP3 print storage format.
//!
//! A stored print is the 3-byte tag `FP3` followed by one serialized tuple:
//!
//! ```text
//! (i  kind
//!  s  driver
//!  s  device id
//!  b  device stored
//!  y  finger
//!  ms username
//!  ms description
//!  i  enrollment date, julian day (i32::MIN when unset)
//!  a{sv} reserved, always empty
//!  v  payload)
//! ```
//!
//! Raw prints carry their driver data as `v(v(data))`; template sets carry
//! `v((a(aiaiai)))`, one `(x, y, theta)` column triple per template.

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::encode;

use crate::variant::VariantType;

// The stored columns are 32-bit.
const _: () = assert!(core::mem::size_of::<i32>() == 4);

/// `(aiaiai)`: one template.
pub fn template_type() -> VariantType {
    VariantType::tuple(vec![
        VariantType::array(VariantType::Int32),
        VariantType::array(VariantType::Int32),
        VariantType::array(VariantType::Int32),
    ])
}

/// `(a(aiaiai))`: the payload of a template set.
pub fn template_set_type() -> VariantType {
    VariantType::tuple(vec![VariantType::array(template_type())])
}

/// `{sv}`: element type of the reserved dictionary.
pub fn reserved_entry_type() -> VariantType {
    VariantType::dict_entry(VariantType::String, VariantType::Variant)
}

/// `(issbymsmsia{sv}v)`: the stored record.
pub fn record_type() -> VariantType {
    VariantType::tuple(vec![
        VariantType::Int32,
        VariantType::String,
        VariantType::String,
        VariantType::Boolean,
        VariantType::Byte,
        VariantType::maybe(VariantType::String),
        VariantType::maybe(VariantType::String),
        VariantType::Int32,
        VariantType::array(reserved_entry_type()),
        VariantType::Variant,
    ])
}
