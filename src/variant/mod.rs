// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Self-describing typed values and their serialized form.
//!
//! The serialized layout follows the GVariant rules: every value is aligned
//! to its type's natural alignment relative to the start of its container,
//! variable-size children of tuples and arrays are delimited by little-endian
//! framing offsets stored at the end of the container, and a boxed variant
//! carries its own type signature after a nul separator. Serialized data is
//! not self-describing at the top level; the reader must know its type.

pub mod decode;
pub mod encode;
pub mod ty;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{VariantError, VariantResult};
pub use ty::VariantType;

/// A typed value.
///
/// Containers carry their element type so that empty arrays and `Nothing`
/// maybes still know what they hold.
#[derive(Clone, Debug)]
pub enum Variant {
    Boolean(bool),
    Byte(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Handle(i32),
    Double(f64),
    String(String),
    ObjectPath(String),
    Signature(String),
    Variant(Box<Variant>),
    Maybe(VariantType, Option<Box<Variant>>),
    Array(VariantType, Vec<Variant>),
    Tuple(Vec<Variant>),
    DictEntry(Box<Variant>, Box<Variant>),
}

impl Variant {
    /// Wraps a value in a variant box.
    pub fn boxed(inner: Variant) -> Self {
        Variant::Variant(Box::new(inner))
    }

    pub fn just(inner: Variant) -> Self {
        Variant::Maybe(inner.value_type(), Some(Box::new(inner)))
    }

    pub fn nothing(ty: VariantType) -> Self {
        Variant::Maybe(ty, None)
    }

    pub fn dict_entry(key: Variant, value: Variant) -> Self {
        Variant::DictEntry(Box::new(key), Box::new(value))
    }

    /// Builds an array, checking every element against `element`.
    pub fn array(element: VariantType, items: Vec<Variant>) -> VariantResult<Self> {
        let array = Variant::Array(element, items);
        array.validate()?;
        Ok(array)
    }

    /// `ai` from a column of integers.
    pub fn int32_array(values: &[i32]) -> Self {
        Variant::Array(VariantType::Int32, values.iter().map(|v| Variant::Int32(*v)).collect())
    }

    /// `ay` from raw bytes.
    pub fn byte_array(bytes: &[u8]) -> Self {
        Variant::Array(VariantType::Byte, bytes.iter().map(|b| Variant::Byte(*b)).collect())
    }

    pub fn value_type(&self) -> VariantType {
        match self {
            Variant::Boolean(_) => VariantType::Boolean,
            Variant::Byte(_) => VariantType::Byte,
            Variant::Int16(_) => VariantType::Int16,
            Variant::Uint16(_) => VariantType::Uint16,
            Variant::Int32(_) => VariantType::Int32,
            Variant::Uint32(_) => VariantType::Uint32,
            Variant::Int64(_) => VariantType::Int64,
            Variant::Uint64(_) => VariantType::Uint64,
            Variant::Handle(_) => VariantType::Handle,
            Variant::Double(_) => VariantType::Double,
            Variant::String(_) => VariantType::String,
            Variant::ObjectPath(_) => VariantType::ObjectPath,
            Variant::Signature(_) => VariantType::Signature,
            Variant::Variant(_) => VariantType::Variant,
            Variant::Maybe(ty, _) => VariantType::maybe(ty.clone()),
            Variant::Array(ty, _) => VariantType::array(ty.clone()),
            Variant::Tuple(items) => VariantType::Tuple(items.iter().map(|i| i.value_type()).collect()),
            Variant::DictEntry(key, value) => VariantType::dict_entry(key.value_type(), value.value_type()),
        }
    }

    /// Checks that container contents agree with their declared types.
    pub fn validate(&self) -> VariantResult<()> {
        let mismatch = |ty: &VariantType| VariantError::TypeMismatch { expected: ty.to_string() };
        match self {
            Variant::String(s) | Variant::ObjectPath(s) | Variant::Signature(s) => {
                if s.as_bytes().contains(&0) {
                    return Err(VariantError::UnterminatedString);
                }
                Ok(())
            }
            Variant::Variant(inner) => inner.validate(),
            Variant::Maybe(ty, Some(inner)) => {
                if inner.value_type() != *ty {
                    return Err(mismatch(ty));
                }
                inner.validate()
            }
            Variant::Array(ty, items) => {
                for item in items {
                    if item.value_type() != *ty {
                        return Err(mismatch(ty));
                    }
                    item.validate()?;
                }
                Ok(())
            }
            Variant::Tuple(items) => items.iter().try_for_each(|i| i.validate()),
            Variant::DictEntry(key, value) => {
                let key_ty = key.value_type();
                if !key_ty.is_basic() {
                    return Err(mismatch(&key_ty));
                }
                key.validate()?;
                value.validate()
            }
            _ => Ok(()),
        }
    }

    /// Serializes in the canonical little-endian byte order.
    pub fn to_bytes(&self) -> VariantResult<Vec<u8>> {
        self.to_bytes_with::<LittleEndian>()
    }

    /// Serializes with numbers in byte order `B`. Framing offsets are always little-endian.
    pub fn to_bytes_with<B: ByteOrder>(&self) -> VariantResult<Vec<u8>> {
        self.validate()?;
        let mut out = Vec::new();
        encode::write_value::<B>(self, &mut out);
        Ok(out)
    }

    /// Parses little-endian serialized data of type `ty`.
    pub fn from_bytes(ty: &VariantType, data: &[u8]) -> VariantResult<Self> {
        Self::from_bytes_with::<LittleEndian>(ty, data)
    }

    pub fn from_bytes_with<B: ByteOrder>(ty: &VariantType, data: &[u8]) -> VariantResult<Self> {
        decode::read_value::<B>(ty, data, 0)
    }

    /// Converts serialized data of type `ty` between byte orders.
    pub fn byteswap<Src: ByteOrder, Dst: ByteOrder>(ty: &VariantType, data: &[u8]) -> VariantResult<Vec<u8>> {
        Self::from_bytes_with::<Src>(ty, data)?.to_bytes_with::<Dst>()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) | Variant::ObjectPath(s) | Variant::Signature(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Variant::Int32(v) => Some(*v),
            _ => None,
        }
    }
}

/// Deep value equality: same type and identical canonical serialization.
/// Values that cannot be serialized are compared member by member.
impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        if self.value_type() != other.value_type() {
            return false;
        }
        match (self.to_bytes(), other.to_bytes()) {
            (Ok(a), Ok(b)) => a == b,
            (Err(_), Err(_)) => structural_eq(self, other),
            _ => false,
        }
    }
}

fn structural_eq(a: &Variant, b: &Variant) -> bool {
    match (a, b) {
        (Variant::Boolean(x), Variant::Boolean(y)) => x == y,
        (Variant::Byte(x), Variant::Byte(y)) => x == y,
        (Variant::Int16(x), Variant::Int16(y)) => x == y,
        (Variant::Uint16(x), Variant::Uint16(y)) => x == y,
        (Variant::Int32(x), Variant::Int32(y)) | (Variant::Handle(x), Variant::Handle(y)) => x == y,
        (Variant::Uint32(x), Variant::Uint32(y)) => x == y,
        (Variant::Int64(x), Variant::Int64(y)) => x == y,
        (Variant::Uint64(x), Variant::Uint64(y)) => x == y,
        // Bitwise, as in the serialized form.
        (Variant::Double(x), Variant::Double(y)) => x.to_bits() == y.to_bits(),
        (Variant::String(x), Variant::String(y))
        | (Variant::ObjectPath(x), Variant::ObjectPath(y))
        | (Variant::Signature(x), Variant::Signature(y)) => x == y,
        (Variant::Variant(x), Variant::Variant(y)) => structural_eq(x, y),
        (Variant::Maybe(tx, x), Variant::Maybe(ty, y)) => {
            tx == ty
                && match (x, y) {
                    (Some(x), Some(y)) => structural_eq(x, y),
                    (None, None) => true,
                    _ => false,
                }
        }
        (Variant::Array(tx, x), Variant::Array(ty, y)) => tx == ty && items_eq(x, y),
        (Variant::Tuple(x), Variant::Tuple(y)) => items_eq(x, y),
        (Variant::DictEntry(kx, vx), Variant::DictEntry(ky, vy)) => structural_eq(kx, ky) && structural_eq(vx, vy),
        _ => false,
    }
}

fn items_eq(a: &[Variant], b: &[Variant]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| structural_eq(x, y))
}

impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Variant::Boolean(v)
    }
}

impl From<u8> for Variant {
    fn from(v: u8) -> Self {
        Variant::Byte(v)
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Variant::Int32(v)
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Variant::Uint32(v)
    }
}

impl From<i64> for Variant {
    fn from(v: i64) -> Self {
        Variant::Int64(v)
    }
}

impl From<u64> for Variant {
    fn from(v: u64) -> Self {
        Variant::Uint64(v)
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Variant::Double(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Variant::String(v.to_string())
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Variant::String(v)
    }
}
