// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! FP3 decoding.
//!
//! Input is untrusted. All reads go through the bounds-checked variant
//! parser and every structural problem comes back as `InvalidFormat`.

use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use crate::codec::{record_type, template_set_type};
use crate::config::{MAGIC, MAX_MINUTIAE};
use crate::error::{PrintError, PrintResult};
use crate::print::{PrintData, PrintRecord};
use crate::types::{Finger, MinutiaTemplate, PrintKind};
use crate::variant::Variant;

fn invalid(msg: impl Into<String>) -> PrintError {
    PrintError::InvalidFormat(msg.into())
}

fn expect_i32(value: &Variant, field: &str) -> PrintResult<i32> {
    value.as_i32().ok_or_else(|| invalid(format!("field {field} is not an int32")))
}

fn expect_string(value: Variant, field: &str) -> PrintResult<String> {
    match value {
        Variant::String(s) => Ok(s),
        _ => Err(invalid(format!("field {field} is not a string"))),
    }
}

fn expect_identity(value: Variant, field: &str) -> PrintResult<String> {
    let s = expect_string(value, field)?;
    if s.is_empty() {
        return Err(invalid(format!("field {field} is empty")));
    }
    Ok(s)
}

fn optional_string(value: Variant, field: &str) -> PrintResult<Option<String>> {
    match value {
        Variant::Maybe(_, None) => Ok(None),
        Variant::Maybe(_, Some(inner)) => expect_string(*inner, field).map(Some),
        _ => Err(invalid(format!("field {field} is not a maybe string"))),
    }
}

fn int32_column(value: &Variant) -> PrintResult<Vec<i32>> {
    match value {
        Variant::Array(_, items) => items
            .iter()
            .map(|v| v.as_i32().ok_or_else(|| invalid("template column is not an int32 array")))
            .collect(),
        _ => Err(invalid("template column is not an array")),
    }
}

fn decode_template(value: &Variant) -> PrintResult<MinutiaTemplate> {
    let columns = match value {
        Variant::Tuple(columns) if columns.len() == 3 => columns,
        _ => return Err(invalid("template is not an (aiaiai) tuple")),
    };
    let x = int32_column(&columns[0])?;
    let y = int32_column(&columns[1])?;
    let theta = int32_column(&columns[2])?;

    if x.len() != y.len() || x.len() != theta.len() {
        return Err(invalid(format!(
            "template column lengths differ: x={}, y={}, theta={}",
            x.len(),
            y.len(),
            theta.len()
        )));
    }
    if x.len() > MAX_MINUTIAE {
        return Err(invalid(format!("template holds {} minutiae, at most {MAX_MINUTIAE} allowed", x.len())));
    }
    MinutiaTemplate::from_columns(&x, &y, &theta).map_err(|e| invalid(e.to_string()))
}

fn decode_templates(payload: &Variant) -> PrintResult<Vec<MinutiaTemplate>> {
    let inner = match payload {
        Variant::Variant(inner) => inner.as_ref(),
        _ => return Err(invalid("payload is not a variant")),
    };
    if inner.value_type() != template_set_type() {
        return Err(invalid(format!(
            "template set payload has type {}, expected {}",
            inner.value_type(),
            template_set_type()
        )));
    }
    match inner {
        Variant::Tuple(items) => match items.as_slice() {
            [Variant::Array(_, templates)] => templates.iter().map(decode_template).collect(),
            _ => Err(invalid("template set payload is malformed")),
        },
        _ => Err(invalid("template set payload is malformed")),
    }
}

fn decode_raw(payload: Variant) -> PrintResult<Variant> {
    match payload {
        Variant::Variant(boxed) => match *boxed {
            Variant::Variant(data) => Ok(*data),
            _ => Err(invalid("raw payload is not a boxed variant")),
        },
        _ => Err(invalid("payload is not a variant")),
    }
}

fn decode_date(julian: i32) -> Option<NaiveDate> {
    if julian <= 0 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(julian)
}

/// Parses an FP3-serialized print.
///
/// A print is returned only if the whole buffer is well formed.
pub fn decode(data: &[u8]) -> PrintResult<PrintRecord> {
    if data.len() <= MAGIC.len() || !data.starts_with(MAGIC) {
        debug!(len = data.len(), "rejecting print without FP3 header");
        return Err(invalid("missing FP3 header"));
    }

    let record = Variant::from_bytes(&record_type(), &data[MAGIC.len()..]).map_err(|e| {
        debug!(error = %e, "rejecting malformed print");
        PrintError::from(e)
    })?;

    let fields = match record {
        Variant::Tuple(fields) => fields,
        _ => return Err(invalid("print body is not a tuple")),
    };
    let [kind, driver, device_id, device_stored, finger, username, description, julian, _reserved, payload]: [Variant; 10] =
        fields.try_into().map_err(|_| invalid("print body has the wrong number of fields"))?;

    let kind = expect_i32(&kind, "kind")?;
    let driver = expect_identity(driver, "driver")?;
    let device_id = expect_identity(device_id, "device_id")?;

    let print_data = match PrintKind::from_i32(kind) {
        Some(PrintKind::TemplateSet) => PrintData::TemplateSet(decode_templates(&payload)?),
        Some(PrintKind::Raw) => PrintData::Raw(decode_raw(payload)?),
        _ => {
            warn!(kind, "unknown print kind in stored data");
            return Err(invalid(format!("unknown print kind {kind}")));
        }
    };

    let mut print = PrintRecord::from_parts(driver, device_id, print_data);
    match device_stored {
        Variant::Boolean(stored) => print.set_device_stored(stored),
        _ => return Err(invalid("field device_stored is not a boolean")),
    }
    match finger {
        Variant::Byte(f) => print.set_finger(Finger::from_u8(f)),
        _ => return Err(invalid("field finger is not a byte")),
    }
    print.set_username(optional_string(username, "username")?);
    print.set_description(optional_string(description, "description")?);
    print.set_enroll_date(decode_date(expect_i32(&julian, "enroll_date")?));

    trace!(kind = ?print.kind(), size = data.len(), "deserialized print");
    Ok(print)
}
