//! The temporal convention.
//!
//! A date-time is written as `yyyy-MM-ddTHH:mm:ss`. A date is written with the date-only prefix of
//! that pattern and a time of day with its time suffix. The same patterns are used for reading and
//! for writing and they never change at runtime.
//!
//! Values can be carried either through the [`Date`], [`DateTime`] and [`Time`] newtypes, which
//! work anywhere a type is expected (list elements, map keys and values), or through the
//! [`date`], [`date_time`] and [`time`] modules on plain `chrono` fields:
//!
//! ```
//! use chrono::NaiveDate;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Release {
//!     #[serde(with = "resource_json::temporal::date")]
//!     day: NaiveDate,
//! }
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{self, Display, Formatter},
    ops::Deref,
    str::FromStr,
};
use thiserror::Error;

/// The `chrono` format of a date-time.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The `chrono` format of a date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The `chrono` format of a time of day.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// The human readable date-time pattern.
pub const DATE_TIME_PATTERN: &str = "yyyy-MM-ddTHH:mm:ss";

/// The human readable date pattern.
pub const DATE_PATTERN: &str = "yyyy-MM-dd";

/// The human readable time of day pattern.
pub const TIME_PATTERN: &str = "HH:mm:ss";

// `serde_json` keeps only the message of a custom error, so a `TemporalFormatError` is recognized by
// the shape of its message. Both parts must stay in sync with the `#[error]` text below.
const TEMPORAL_ERROR_PREFIX: &str = "unsupported temporal format: `";
const TEMPORAL_ERROR_INFIX: &str = "` does not match `";

/// A temporal text that does not match its pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported temporal format: `{text}` does not match `{pattern}`")]
pub struct TemporalFormatError {
    /// The rejected text.
    pub text: String,

    /// The pattern the text was expected to follow.
    pub pattern: &'static str,
}

impl TemporalFormatError {
    fn new(text: &str, pattern: &'static str) -> Self {
        Self { text: text.to_string(), pattern }
    }
}

/// Returns whether a parser diagnostic was raised by one of the temporal deserializers.
pub(crate) fn is_temporal_error(error: &serde_json::Error) -> bool {
    let message = error.to_string();
    error.is_data() && message.starts_with(TEMPORAL_ERROR_PREFIX) && message.contains(TEMPORAL_ERROR_INFIX)
}

/// Parse a date.
///
/// Both `yyyy-MM-dd` and a full `yyyy-MM-ddTHH:mm:ss` text are accepted, in the latter case only
/// the date prefix is kept.
pub fn parse_date(text: &str) -> Result<NaiveDate, TemporalFormatError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).map(|date_time| date_time.date()))
        .map_err(|_| TemporalFormatError::new(text, DATE_PATTERN))
}

/// Parse a date-time.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, TemporalFormatError> {
    NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT).map_err(|_| TemporalFormatError::new(text, DATE_TIME_PATTERN))
}

/// Parse a time of day.
pub fn parse_time(text: &str) -> Result<NaiveTime, TemporalFormatError> {
    NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|_| TemporalFormatError::new(text, TIME_PATTERN))
}

macro_rules! temporal_type {
    ($(#[$meta:meta])* $name:ident, $module:ident, $inner:ty, $format:expr, $parse:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $inner);

        impl Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = TemporalFormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parse(s).map(Self)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.format($format))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                $module::serialize(&self.0, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                $module::deserialize(deserializer).map(Self)
            }
        }

        #[doc = concat!("Serde adapter for a plain `", stringify!($inner), "` field.")]
        pub mod $module {
            use super::*;

            /// Serialize using the temporal convention.
            pub fn serialize<S: Serializer>(value: &$inner, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&value.format($format))
            }

            /// Deserialize using the temporal convention.
            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$inner, D::Error> {
                let text = String::deserialize(deserializer)?;
                $parse(&text).map_err(de::Error::custom)
            }
        }
    };
}

temporal_type!(
    /// A calendar date, written as `yyyy-MM-dd`.
    Date,
    date,
    NaiveDate,
    DATE_FORMAT,
    parse_date
);

temporal_type!(
    /// A date and time of day without an offset, written as `yyyy-MM-ddTHH:mm:ss`.
    DateTime,
    date_time,
    NaiveDateTime,
    DATE_TIME_FORMAT,
    parse_date_time
);

temporal_type!(
    /// A time of day, written as `HH:mm:ss`.
    Time,
    time,
    NaiveTime,
    TIME_FORMAT,
    parse_time
);
