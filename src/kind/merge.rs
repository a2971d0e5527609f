//! Combining kinds observed across several sample values

use super::detect::detect_kind;
use super::registry::Kind;
use super::value::ScalarValue;

impl Kind {
    /// The narrowest kind able to hold values of both `self` and `other`
    ///
    /// - equal kinds are kept
    /// - `Invalid` is absorbed by any other kind
    /// - integers of the same signedness widen to the wider width; mixed
    ///   signedness widens to `Int64`
    /// - an integer meeting a float becomes the float, or `Float64` when
    ///   the integer is 32 bits or wider
    /// - floats widen to `Float64`
    /// - anything else falls back to `String`
    pub fn widen(self, other: Kind) -> Kind {
        if self == other {
            return self;
        }

        match (self, other) {
            (Kind::Invalid, k) | (k, Kind::Invalid) => k,

            (a, b) if a.is_signed_integer() && b.is_signed_integer() => a.max(b),
            (a, b) if a.is_unsigned_integer() && b.is_unsigned_integer() => a.max(b),
            (a, b) if a.is_integer() && b.is_integer() => Kind::Int64,

            (a, b) if a.is_float() && b.is_float() => Kind::Float64,
            (int, float) | (float, int) if int.is_integer() && float.is_float() => {
                if int.bit_width().unwrap_or(64) >= 32 {
                    Kind::Float64
                } else {
                    float
                }
            }

            _ => Kind::String,
        }
    }
}

/// Derive a single column kind from sample values
///
/// Each value is classified with [`detect_kind`] and the results are
/// combined with [`Kind::widen`]. No samples yields [`Kind::Invalid`].
pub fn infer_column_kind<'a, I>(values: I, sniff: bool) -> Kind
where
    I: IntoIterator<Item = ScalarValue<'a>>,
{
    values
        .into_iter()
        .map(|value| detect_kind(&value, sniff))
        .fold(Kind::Invalid, Kind::widen)
}
