//! Semantic kind inference
//!
//! Classifies scalar values into a fixed set of data kinds (boolean,
//! integers of several widths, floats, date/time variants, UUID, network
//! address, string) and maps kinds to and from their canonical names.
//!
//! ## Example
//!
//! ```rust
//! use schema_toolkit_sdk::kind::{Kind, ScalarValue, detect_kind, sniff_kind};
//!
//! assert_eq!(sniff_kind("1234567890123"), Kind::Int64);
//! assert_eq!(sniff_kind("192.168.0.1"), Kind::Inet);
//! assert_eq!(detect_kind(&ScalarValue::from(1.5f64), false), Kind::Float32);
//!
//! assert_eq!(Kind::parse("uint16"), Kind::Uint16);
//! assert_eq!(Kind::parse("decimal"), Kind::Invalid);
//! assert!(Kind::must_parse("decimal").is_err());
//! ```

mod detect;
mod error;
mod merge;
mod registry;
mod value;

pub use detect::{DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT, detect_kind, sniff_kind};
pub use error::{KindError, KindResult};
pub use merge::infer_column_kind;
pub use registry::Kind;
pub use value::ScalarValue;
