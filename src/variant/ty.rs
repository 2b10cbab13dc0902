// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Variant type signatures.

use core::fmt;
use std::sync::Arc;

use crate::config::MAX_NESTING_DEPTH;
use crate::error::{VariantError, VariantResult};

/// A complete variant type, as written in a type signature string
/// (e.g. `(issbymsmsia{sv}v)`).
///
/// Child types are shared, so cloning a type never copies its subtree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariantType {
    Boolean,
    Byte,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Handle,
    Double,
    String,
    ObjectPath,
    Signature,
    Variant,
    Maybe(Arc<VariantType>),
    Array(Arc<VariantType>),
    Tuple(Arc<[VariantType]>),
    DictEntry(Arc<VariantType>, Arc<VariantType>),
}

impl VariantType {
    /// Parses a signature holding exactly one complete type.
    pub fn parse(signature: &str) -> VariantResult<Self> {
        let bytes = signature.as_bytes();
        let mut pos = 0;
        let ty = parse_one(bytes, &mut pos, 0)?;
        if pos != bytes.len() {
            return Err(VariantError::InvalidTypeString(signature.to_string()));
        }
        Ok(ty)
    }

    pub fn maybe(inner: VariantType) -> Self {
        VariantType::Maybe(Arc::new(inner))
    }

    pub fn array(element: VariantType) -> Self {
        VariantType::Array(Arc::new(element))
    }

    pub fn tuple(members: Vec<VariantType>) -> Self {
        VariantType::Tuple(members.into())
    }

    pub fn dict_entry(key: VariantType, value: VariantType) -> Self {
        VariantType::DictEntry(Arc::new(key), Arc::new(value))
    }

    /// Basic types are the only ones allowed as dictionary keys.
    pub fn is_basic(&self) -> bool {
        !matches!(
            self,
            VariantType::Variant
                | VariantType::Maybe(_)
                | VariantType::Array(_)
                | VariantType::Tuple(_)
                | VariantType::DictEntry(..)
        )
    }

    /// Alignment in bytes of serialized values of this type.
    pub fn alignment(&self) -> usize {
        match self {
            VariantType::Boolean
            | VariantType::Byte
            | VariantType::String
            | VariantType::ObjectPath
            | VariantType::Signature => 1,
            VariantType::Int16 | VariantType::Uint16 => 2,
            VariantType::Int32 | VariantType::Uint32 | VariantType::Handle => 4,
            VariantType::Int64 | VariantType::Uint64 | VariantType::Double => 8,
            VariantType::Variant => 8,
            VariantType::Maybe(inner) | VariantType::Array(inner) => inner.alignment(),
            VariantType::Tuple(members) => members.iter().map(|m| m.alignment()).max().unwrap_or(1),
            VariantType::DictEntry(key, value) => key.alignment().max(value.alignment()),
        }
    }

    /// Serialized size for fixed-size types, `None` for variable-size ones.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            VariantType::Boolean | VariantType::Byte => Some(1),
            VariantType::Int16 | VariantType::Uint16 => Some(2),
            VariantType::Int32 | VariantType::Uint32 | VariantType::Handle => Some(4),
            VariantType::Int64 | VariantType::Uint64 | VariantType::Double => Some(8),
            VariantType::String
            | VariantType::ObjectPath
            | VariantType::Signature
            | VariantType::Variant
            | VariantType::Maybe(_)
            | VariantType::Array(_) => None,
            VariantType::Tuple(members) => fixed_tuple_size(members.iter(), self.alignment()),
            VariantType::DictEntry(key, value) => {
                fixed_tuple_size([key.as_ref(), value.as_ref()].into_iter(), self.alignment())
            }
        }
    }

    /// Members of a tuple or dictionary entry, in order.
    pub(crate) fn members(&self) -> Option<Vec<&VariantType>> {
        match self {
            VariantType::Tuple(members) => Some(members.iter().collect()),
            VariantType::DictEntry(key, value) => Some(vec![key.as_ref(), value.as_ref()]),
            _ => None,
        }
    }
}

/// A tuple is fixed-size iff all members are; its size is padded to its alignment.
/// The empty tuple occupies one byte.
fn fixed_tuple_size<'a>(members: impl Iterator<Item = &'a VariantType>, alignment: usize) -> Option<usize> {
    let mut offset = 0;
    let mut any = false;
    for member in members {
        any = true;
        let size = member.fixed_size()?;
        offset = align_up(offset, member.alignment()) + size;
    }
    if !any {
        return Some(1);
    }
    Some(align_up(offset, alignment))
}

pub(crate) fn align_up(offset: usize, alignment: usize) -> usize {
    (offset + alignment - 1) & !(alignment - 1)
}

fn parse_one(bytes: &[u8], pos: &mut usize, depth: usize) -> VariantResult<VariantType> {
    if depth > MAX_NESTING_DEPTH {
        return Err(VariantError::DepthExceeded(MAX_NESTING_DEPTH));
    }
    let invalid = || VariantError::InvalidTypeString(String::from_utf8_lossy(bytes).into_owned());

    let c = *bytes.get(*pos).ok_or_else(invalid)?;
    *pos += 1;
    let ty = match c {
        b'b' => VariantType::Boolean,
        b'y' => VariantType::Byte,
        b'n' => VariantType::Int16,
        b'q' => VariantType::Uint16,
        b'i' => VariantType::Int32,
        b'u' => VariantType::Uint32,
        b'x' => VariantType::Int64,
        b't' => VariantType::Uint64,
        b'h' => VariantType::Handle,
        b'd' => VariantType::Double,
        b's' => VariantType::String,
        b'o' => VariantType::ObjectPath,
        b'g' => VariantType::Signature,
        b'v' => VariantType::Variant,
        b'm' => VariantType::maybe(parse_one(bytes, pos, depth + 1)?),
        b'a' => VariantType::array(parse_one(bytes, pos, depth + 1)?),
        b'(' => {
            let mut members = Vec::new();
            loop {
                match bytes.get(*pos) {
                    Some(b')') => {
                        *pos += 1;
                        break;
                    }
                    Some(_) => members.push(parse_one(bytes, pos, depth + 1)?),
                    None => return Err(invalid()),
                }
            }
            VariantType::tuple(members)
        }
        b'{' => {
            let key = parse_one(bytes, pos, depth + 1)?;
            if !key.is_basic() {
                return Err(invalid());
            }
            let value = parse_one(bytes, pos, depth + 1)?;
            if bytes.get(*pos) != Some(&b'}') {
                return Err(invalid());
            }
            *pos += 1;
            VariantType::dict_entry(key, value)
        }
        _ => return Err(invalid()),
    };
    Ok(ty)
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantType::Boolean => f.write_str("b"),
            VariantType::Byte => f.write_str("y"),
            VariantType::Int16 => f.write_str("n"),
            VariantType::Uint16 => f.write_str("q"),
            VariantType::Int32 => f.write_str("i"),
            VariantType::Uint32 => f.write_str("u"),
            VariantType::Int64 => f.write_str("x"),
            VariantType::Uint64 => f.write_str("t"),
            VariantType::Handle => f.write_str("h"),
            VariantType::Double => f.write_str("d"),
            VariantType::String => f.write_str("s"),
            VariantType::ObjectPath => f.write_str("o"),
            VariantType::Signature => f.write_str("g"),
            VariantType::Variant => f.write_str("v"),
            VariantType::Maybe(inner) => write!(f, "m{}", inner),
            VariantType::Array(inner) => write!(f, "a{}", inner),
            VariantType::Tuple(members) => {
                f.write_str("(")?;
                for m in members.iter() {
                    write!(f, "{}", m)?;
                }
                f.write_str(")")
            }
            VariantType::DictEntry(key, value) => write!(f, "{{{}{}}}", key, value),
        }
    }
}
