// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Variant parsing.
//!
//! Every read is bounds-checked against the slice of the enclosing
//! container; framing offsets are validated before they are used to slice.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::MAX_NESTING_DEPTH;
use crate::error::{VariantError, VariantResult};
use crate::variant::encode::offset_size;
use crate::variant::ty::align_up;
use crate::variant::{Variant, VariantType};

fn read_offset(data: &[u8], at: usize, width: usize) -> VariantResult<usize> {
    let framing = || VariantError::InvalidFraming { offset: at, size: data.len() };
    let bytes = data.get(at..at + width).ok_or_else(framing)?;
    usize::try_from(LittleEndian::read_uint(bytes, width)).map_err(|_| framing())
}

pub(crate) fn read_value<B: ByteOrder>(ty: &VariantType, data: &[u8], depth: usize) -> VariantResult<Variant> {
    if depth > MAX_NESTING_DEPTH {
        return Err(VariantError::DepthExceeded(MAX_NESTING_DEPTH));
    }

    if let Some(size) = ty.fixed_size() {
        if data.len() != size {
            return Err(VariantError::InvalidFixedSize {
                ty: ty.to_string(),
                expected: size,
                found: data.len(),
            });
        }
    }

    let value = match ty {
        VariantType::Boolean => match data[0] {
            0 => Variant::Boolean(false),
            1 => Variant::Boolean(true),
            b => return Err(VariantError::InvalidBoolean(b)),
        },
        VariantType::Byte => Variant::Byte(data[0]),
        VariantType::Int16 => Variant::Int16(B::read_i16(data)),
        VariantType::Uint16 => Variant::Uint16(B::read_u16(data)),
        VariantType::Int32 => Variant::Int32(B::read_i32(data)),
        VariantType::Uint32 => Variant::Uint32(B::read_u32(data)),
        VariantType::Int64 => Variant::Int64(B::read_i64(data)),
        VariantType::Uint64 => Variant::Uint64(B::read_u64(data)),
        VariantType::Handle => Variant::Handle(B::read_i32(data)),
        VariantType::Double => Variant::Double(B::read_f64(data)),
        VariantType::String => Variant::String(read_string(data)?),
        VariantType::ObjectPath => Variant::ObjectPath(read_string(data)?),
        VariantType::Signature => Variant::Signature(read_string(data)?),
        VariantType::Variant => read_boxed::<B>(data, depth)?,
        VariantType::Maybe(inner) => read_maybe::<B>(inner, data, depth)?,
        VariantType::Array(element) => Variant::Array(element.as_ref().clone(), read_array::<B>(element, data, depth)?),
        VariantType::Tuple(_) | VariantType::DictEntry(..) => {
            let members = ty.members().unwrap_or_default();
            let items = read_members::<B>(&members, data, depth)?;
            match ty {
                VariantType::DictEntry(..) => {
                    let [key, value]: [Variant; 2] = items
                        .try_into()
                        .map_err(|_| VariantError::TypeMismatch { expected: ty.to_string() })?;
                    Variant::dict_entry(key, value)
                }
                _ => Variant::Tuple(items),
            }
        }
    };
    Ok(value)
}

fn read_string(data: &[u8]) -> VariantResult<String> {
    match data.split_last() {
        Some((&0, body)) if !body.contains(&0) => {
            core::str::from_utf8(body).map(str::to_string).map_err(|_| VariantError::InvalidUtf8)
        }
        _ => Err(VariantError::UnterminatedString),
    }
}

/// A boxed variant is its child's data, a nul byte, then the child's signature.
fn read_boxed<B: ByteOrder>(data: &[u8], depth: usize) -> VariantResult<Variant> {
    let sep = data.iter().rposition(|b| *b == 0).ok_or(VariantError::MissingSignature)?;
    let signature = core::str::from_utf8(&data[sep + 1..])
        .map_err(|_| VariantError::InvalidTypeString(String::from_utf8_lossy(&data[sep + 1..]).into_owned()))?;
    let inner_ty = VariantType::parse(signature)?;
    let inner = read_value::<B>(&inner_ty, &data[..sep], depth + 1)?;
    Ok(Variant::boxed(inner))
}

fn read_maybe<B: ByteOrder>(inner: &VariantType, data: &[u8], depth: usize) -> VariantResult<Variant> {
    if data.is_empty() {
        return Ok(Variant::nothing(inner.clone()));
    }
    let child = match inner.fixed_size() {
        Some(_) => read_value::<B>(inner, data, depth + 1)?,
        None => match data.split_last() {
            Some((&0, body)) => read_value::<B>(inner, body, depth + 1)?,
            _ => return Err(VariantError::InvalidMaybe),
        },
    };
    Ok(Variant::Maybe(inner.clone(), Some(Box::new(child))))
}

fn read_array<B: ByteOrder>(element: &VariantType, data: &[u8], depth: usize) -> VariantResult<Vec<Variant>> {
    if let Some(size) = element.fixed_size() {
        if data.len() % size != 0 {
            return Err(VariantError::InvalidFixedSize {
                ty: VariantType::array(element.clone()).to_string(),
                expected: size,
                found: data.len(),
            });
        }
        return data
            .chunks_exact(size)
            .map(|chunk| read_value::<B>(element, chunk, depth + 1))
            .collect();
    }

    if data.is_empty() {
        return Ok(Vec::new());
    }

    let size = data.len();
    let width = offset_size(size);
    let body_end = read_offset(data, size - width, width)?;
    if body_end > size - width || (size - body_end) % width != 0 {
        return Err(VariantError::InvalidFraming { offset: body_end, size });
    }

    let count = (size - body_end) / width;
    let alignment = element.alignment();
    let mut items = Vec::with_capacity(count);
    let mut pos = 0;
    for i in 0..count {
        let end = read_offset(data, body_end + i * width, width)?;
        let start = align_up(pos, alignment);
        if start > end || end > body_end {
            return Err(VariantError::InvalidFraming { offset: end, size });
        }
        items.push(read_value::<B>(element, &data[start..end], depth + 1)?);
        pos = end;
    }
    Ok(items)
}

fn read_members<B: ByteOrder>(members: &[&VariantType], data: &[u8], depth: usize) -> VariantResult<Vec<Variant>> {
    if members.is_empty() {
        return Ok(Vec::new());
    }

    let size = data.len();
    let last = members.len() - 1;
    let n_framed = members
        .iter()
        .enumerate()
        .filter(|(i, m)| *i != last && m.fixed_size().is_none())
        .count();
    let width = offset_size(size);
    if n_framed > 0 && (width == 0 || n_framed * width > size) {
        return Err(VariantError::InvalidFraming { offset: size, size });
    }
    let body_end = size - n_framed * width;

    let mut items = Vec::with_capacity(members.len());
    let mut pos = 0;
    let mut framed = 0;
    for (i, member) in members.iter().enumerate() {
        let start = align_up(pos, member.alignment());
        let end = match member.fixed_size() {
            Some(member_size) => start + member_size,
            None if i == last => body_end,
            None => {
                framed += 1;
                read_offset(data, size - framed * width, width)?
            }
        };
        if start > end || end > body_end {
            return Err(VariantError::InvalidFraming { offset: end, size });
        }
        items.push(read_value::<B>(member, &data[start..end], depth + 1)?);
        pos = end;
    }
    Ok(items)
}
