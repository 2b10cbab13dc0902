// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! FP3 encoding.

use chrono::Datelike;
use tracing::trace;

use crate::codec::{reserved_entry_type, template_type};
use crate::config::{MAGIC, NO_ENROLL_DATE};
use crate::error::{PrintError, PrintResult};
use crate::print::{PrintData, PrintRecord};
use crate::types::MinutiaTemplate;
use crate::variant::{Variant, VariantType};

fn template_value(template: &MinutiaTemplate) -> Variant {
    Variant::Tuple(vec![
        Variant::int32_array(template.x()),
        Variant::int32_array(template.y()),
        Variant::int32_array(template.theta()),
    ])
}

fn payload_value(print: &PrintRecord) -> PrintResult<Variant> {
    match print.data() {
        PrintData::Undefined => Err(PrintError::InvalidState("cannot serialize a print with undefined data".to_string())),
        PrintData::Raw(data) => Ok(Variant::boxed(data.clone())),
        PrintData::TemplateSet(templates) => {
            let rows = templates.iter().map(template_value).collect();
            Ok(Variant::Tuple(vec![Variant::Array(template_type(), rows)]))
        }
    }
}

fn optional_string(value: Option<&str>) -> Variant {
    match value {
        Some(s) => Variant::just(Variant::from(s)),
        None => Variant::nothing(VariantType::String),
    }
}

/// Serializes `print` to the FP3 format.
///
/// Fails with `InvalidState` for a print without data and with `InvalidData`
/// if the raw driver data cannot be serialized.
pub fn encode(print: &PrintRecord) -> PrintResult<Vec<u8>> {
    let payload = payload_value(print)?;

    let julian = match print.enroll_date() {
        Some(date) if date.num_days_from_ce() >= 1 => date.num_days_from_ce(),
        _ => NO_ENROLL_DATE,
    };

    let record = Variant::Tuple(vec![
        Variant::Int32(print.kind().to_i32()),
        Variant::from(print.driver()),
        Variant::from(print.device_id()),
        Variant::Boolean(print.device_stored()),
        Variant::Byte(print.finger().to_u8()),
        optional_string(print.username()),
        optional_string(print.description()),
        Variant::Int32(julian),
        Variant::Array(reserved_entry_type(), Vec::new()),
        Variant::boxed(payload),
    ]);

    let body = record
        .to_bytes()
        .map_err(|e| PrintError::InvalidData(format!("cannot serialize print: {e}")))?;

    let mut out = Vec::with_capacity(MAGIC.len() + body.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&body);

    trace!(kind = ?print.kind(), size = out.len(), "serialized print");
    Ok(out)
}
