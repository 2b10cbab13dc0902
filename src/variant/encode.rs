// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Variant serialization.

use byteorder::{ByteOrder, LittleEndian};

use crate::variant::ty::align_up;
use crate::variant::{Variant, VariantType};

/// Width in bytes of the framing offsets of a container of `container_size` bytes.
pub(crate) fn offset_size(container_size: usize) -> usize {
    if container_size as u64 > u32::MAX as u64 {
        8
    } else if container_size > u16::MAX as usize {
        4
    } else if container_size > u8::MAX as usize {
        2
    } else if container_size > 0 {
        1
    } else {
        0
    }
}

/// Total container size for a body followed by `n_offsets` framing offsets,
/// using the narrowest offset width that can address the whole container.
fn total_size(body_size: usize, n_offsets: usize) -> usize {
    if body_size + n_offsets <= u8::MAX as usize {
        body_size + n_offsets
    } else if body_size + 2 * n_offsets <= u16::MAX as usize {
        body_size + 2 * n_offsets
    } else if (body_size + 4 * n_offsets) as u64 <= u32::MAX as u64 {
        body_size + 4 * n_offsets
    } else {
        body_size + 8 * n_offsets
    }
}

/// Zero-pads `out` so the next write is aligned relative to `start`.
fn pad_to(out: &mut Vec<u8>, start: usize, alignment: usize) {
    let target = start + align_up(out.len() - start, alignment);
    out.resize(target, 0);
}

fn write_offsets(out: &mut Vec<u8>, start: usize, offsets: &[usize]) {
    let width = offset_size(total_size(out.len() - start, offsets.len()));
    let mut buf = [0u8; 8];
    for offset in offsets {
        LittleEndian::write_uint(&mut buf[..width], *offset as u64, width);
        out.extend_from_slice(&buf[..width]);
    }
}

/// Appends the serialized form of a validated value to `out`.
///
/// `out.len()` must already be aligned for the value's type.
pub(crate) fn write_value<B: ByteOrder>(value: &Variant, out: &mut Vec<u8>) {
    match value {
        Variant::Boolean(v) => out.push(u8::from(*v)),
        Variant::Byte(v) => out.push(*v),
        Variant::Int16(v) => {
            let mut buf = [0u8; 2];
            B::write_i16(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::Uint16(v) => {
            let mut buf = [0u8; 2];
            B::write_u16(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::Int32(v) | Variant::Handle(v) => {
            let mut buf = [0u8; 4];
            B::write_i32(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::Uint32(v) => {
            let mut buf = [0u8; 4];
            B::write_u32(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::Int64(v) => {
            let mut buf = [0u8; 8];
            B::write_i64(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::Uint64(v) => {
            let mut buf = [0u8; 8];
            B::write_u64(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::Double(v) => {
            let mut buf = [0u8; 8];
            B::write_f64(&mut buf, *v);
            out.extend_from_slice(&buf);
        }
        Variant::String(s) | Variant::ObjectPath(s) | Variant::Signature(s) => {
            out.extend_from_slice(s.as_bytes());
            out.push(0);
        }
        Variant::Variant(inner) => {
            write_value::<B>(inner, out);
            out.push(0);
            out.extend_from_slice(inner.value_type().to_string().as_bytes());
        }
        Variant::Maybe(_, None) => {}
        Variant::Maybe(ty, Some(inner)) => {
            write_value::<B>(inner, out);
            if ty.fixed_size().is_none() {
                out.push(0);
            }
        }
        Variant::Array(ty, items) => write_array::<B>(ty, items, out),
        Variant::Tuple(items) => {
            let members: Vec<&Variant> = items.iter().collect();
            write_tuple::<B>(&members, out);
        }
        Variant::DictEntry(key, value) => write_tuple::<B>(&[key.as_ref(), value.as_ref()], out),
    }
}

fn write_array<B: ByteOrder>(element: &VariantType, items: &[Variant], out: &mut Vec<u8>) {
    let start = out.len();
    let alignment = element.alignment();

    if element.fixed_size().is_some() {
        for item in items {
            pad_to(out, start, alignment);
            write_value::<B>(item, out);
        }
        return;
    }

    let mut offsets = Vec::with_capacity(items.len());
    for item in items {
        pad_to(out, start, alignment);
        write_value::<B>(item, out);
        offsets.push(out.len() - start);
    }
    write_offsets(out, start, &offsets);
}

fn write_tuple<B: ByteOrder>(members: &[&Variant], out: &mut Vec<u8>) {
    let start = out.len();
    if members.is_empty() {
        out.push(0);
        return;
    }

    let last = members.len() - 1;
    let mut offsets = Vec::new();
    let mut alignment = 1;
    let mut fixed = true;

    for (i, member) in members.iter().enumerate() {
        let ty = member.value_type();
        alignment = alignment.max(ty.alignment());
        pad_to(out, start, ty.alignment());
        write_value::<B>(member, out);
        if ty.fixed_size().is_none() {
            fixed = false;
            if i != last {
                offsets.push(out.len() - start);
            }
        }
    }

    if fixed {
        pad_to(out, start, alignment);
        return;
    }

    // The first framed member's offset is stored last.
    offsets.reverse();
    write_offsets(out, start, &offsets);
}
