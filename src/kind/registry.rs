//! Kind identifiers and their canonical names

use std::fmt;
use std::str::FromStr;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::{KindError, KindResult};

/// Semantic data kind of a column or value
///
/// Declaration order is the precedence order used during inference:
/// structured and narrow numeric kinds first, `String` as the universal
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Kind {
    /// Unknown or unparseable kind
    #[default]
    Invalid = 1,
    /// Reference to columns of another structure
    Reference,
    /// `true` or `false`
    Boolean,
    /// Date and time in UTC, `2023-01-25 10:10:10`
    DateTime,
    /// Date in UTC, `2023-01-25`
    Date,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// 128-bit UUID, `7f9c24e8-3b12-4fef-91e0-56a2d5a246ec`
    Id,
    /// IPv4 or IPv6 address, optionally in CIDR notation
    Inet,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    /// UTF-8 text
    String,
    /// Time of day in UTC, `01:23:45.123456`
    Time,
}

impl Kind {
    /// Every kind in declaration order, `Invalid` first
    pub const ALL: [Kind; 19] = [
        Kind::Invalid,
        Kind::Reference,
        Kind::Boolean,
        Kind::DateTime,
        Kind::Date,
        Kind::Float32,
        Kind::Float64,
        Kind::Id,
        Kind::Inet,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::String,
        Kind::Time,
    ];

    /// Canonical capitalized name
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Invalid => "Invalid",
            Kind::Reference => "Reference",
            Kind::Boolean => "Boolean",
            Kind::DateTime => "Datetime",
            Kind::Date => "Date",
            Kind::Float32 => "Float32",
            Kind::Float64 => "Float64",
            Kind::Id => "Id",
            Kind::Inet => "Inet",
            Kind::Uint8 => "Uint8",
            Kind::Uint16 => "Uint16",
            Kind::Uint32 => "Uint32",
            Kind::Uint64 => "Uint64",
            Kind::Int8 => "Int8",
            Kind::Int16 => "Int16",
            Kind::Int32 => "Int32",
            Kind::Int64 => "Int64",
            Kind::String => "String",
            Kind::Time => "Time",
        }
    }

    /// Numeric identifier of this kind
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Look up a kind by name, returning [`Kind::Invalid`] when unknown
    ///
    /// Surrounding whitespace is ignored and the comparison is made on
    /// lower-cased forms, so `uint16`, `Uint16` and ` UINT16 ` all match.
    /// The name `Invalid` itself resolves to [`Kind::Invalid`].
    pub fn parse(name: &str) -> Kind {
        let wanted = name.trim().to_lowercase();
        Kind::ALL
            .iter()
            .skip(1)
            .copied()
            .find(|kind| kind.as_str().to_lowercase() == wanted)
            .unwrap_or(Kind::Invalid)
    }

    /// Look up a kind by name, failing on anything unrecognized
    ///
    /// Meant for previously validated data, such as a schema this process
    /// serialized itself. Never returns `Ok(Kind::Invalid)`.
    pub fn must_parse(name: &str) -> KindResult<Kind> {
        match Kind::parse(name) {
            Kind::Invalid => Err(KindError::Unrecognized {
                name: name.to_string(),
            }),
            kind => Ok(kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != Kind::Invalid
    }

    pub fn is_signed_integer(&self) -> bool {
        matches!(self, Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64)
    }

    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64
        )
    }

    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Kind::DateTime | Kind::Date | Kind::Time)
    }

    /// Width in bits of a numeric kind
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            Kind::Int8 | Kind::Uint8 => Some(8),
            Kind::Int16 | Kind::Uint16 => Some(16),
            Kind::Int32 | Kind::Uint32 | Kind::Float32 => Some(32),
            Kind::Int64 | Kind::Uint64 | Kind::Float64 => Some(64),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::must_parse(s)
    }
}

impl TryFrom<u8> for Kind {
    type Error = KindError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_u8() == id)
            .ok_or(KindError::UnknownId(id))
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Kind {
    /// Unknown names and non-string values decode to [`Kind::Invalid`]
    /// rather than failing
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(KindVisitor)
    }
}

struct KindVisitor;

impl<'de> Visitor<'de> for KindVisitor {
    type Value = Kind;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a kind name")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Kind, E> {
        Ok(Kind::parse(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Kind, E> {
        Ok(Kind::Invalid)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Kind, E> {
        Ok(Kind::Invalid)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Kind, E> {
        Ok(Kind::Invalid)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Kind, E> {
        Ok(Kind::Invalid)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Kind, E> {
        Ok(Kind::Invalid)
    }

    fn visit_none<E: de::Error>(self) -> Result<Kind, E> {
        Ok(Kind::Invalid)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Kind, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Kind, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Kind::Invalid)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Kind, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Kind::Invalid)
    }
}
