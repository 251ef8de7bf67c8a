use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use std::time::SystemTime;

use crate::error::Error;

/// Anything that can present itself as an absolute point in time.
pub trait ToInstant: std::fmt::Debug {
    fn to_instant(&self) -> DateTime<FixedOffset>;
}

/// A timestamp-like value accepted by [`crate::from`].
#[derive(Debug)]
pub enum Timestamp {
    /// Whole seconds since the Unix epoch.
    Integer(i128),
    /// Seconds since the Unix epoch; the fractional part is dropped.
    Float(f64),
    /// An absolute instant, with the offset it was expressed in.
    Instant(DateTime<FixedOffset>),
    /// Any value implementing [`ToInstant`].
    Convertible(Box<dyn ToInstant>),
    /// Debug rendering of a value that is none of the above.
    Unsupported(String),
}

impl Timestamp {
    pub fn convertible(value: impl ToInstant + 'static) -> Self {
        Timestamp::Convertible(Box::new(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Timestamp {
                fn from(value: $ty) -> Self {
                    Timestamp::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Timestamp {
    fn from(value: f64) -> Self {
        Timestamp::Float(value)
    }
}

impl From<f32> for Timestamp {
    fn from(value: f32) -> Self {
        Timestamp::Float(f64::from(value))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        Timestamp::Instant(value.with_timezone(&offset))
    }
}

/// Naive date-times carry no offset and are read as UTC.
impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        value.and_utc().into()
    }
}

impl From<SystemTime> for Timestamp {
    fn from(value: SystemTime) -> Self {
        DateTime::<Utc>::from(value).into()
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Unsupported(format!("{value:?}"))
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

/// Validate a timestamp-like value and reduce it to whole seconds since
/// 1970-01-01T00:00:00 UTC.
pub fn normalize(timestamp: &Timestamp) -> Result<u128, Error> {
    match timestamp {
        Timestamp::Integer(n) => u128::try_from(*n)
            .map_err(|_| Error::InvalidArgument(format!("{n} must be non-negative"))),
        Timestamp::Float(f) => normalize_float(*f),
        Timestamp::Instant(instant) => normalize_instant(instant),
        Timestamp::Convertible(value) => normalize(&Timestamp::Instant(value.to_instant())),
        Timestamp::Unsupported(desc) => Err(Error::InvalidArgument(format!(
            "{desc} must be one of an integer, a float, an instant, or a value convertible to an instant"
        ))),
    }
}

/// 2^128, the first float that no longer fits in a `u128`.
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

fn normalize_float(f: f64) -> Result<u128, Error> {
    if f < 0.0 {
        return Err(Error::InvalidArgument(format!("{f:?} must be non-negative")));
    }
    if f.is_nan() || f >= U128_LIMIT {
        return Err(Error::InvalidArgument(format!(
            "{f:?} must be a finite, non-negative number below 2^128"
        )));
    }
    Ok(f.trunc() as u128)
}

fn normalize_instant(instant: &DateTime<FixedOffset>) -> Result<u128, Error> {
    let utc = instant.with_timezone(&Utc);
    if utc < DateTime::<Utc>::UNIX_EPOCH {
        return Err(Error::InvalidArgument(format!(
            "{} must be after {}",
            instant.to_rfc3339(),
            DateTime::<Utc>::UNIX_EPOCH.to_rfc3339()
        )));
    }
    Ok(u128::from(utc.timestamp().unsigned_abs()))
}

/// Interpret raw text (a query parameter, a CLI argument) as a timestamp:
/// an integer literal, a finite decimal literal, or an RFC 3339 date-time.
/// Anything else, `inf` and `NaN` included, comes back as
/// [`Timestamp::Unsupported`].
pub fn parse(raw: &str) -> Timestamp {
    let raw = raw.trim();

    if let Ok(n) = raw.parse::<i128>() {
        return Timestamp::Integer(n);
    }
    if let Ok(f) = raw.parse::<f64>()
        && f.is_finite()
    {
        return Timestamp::Float(f);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Timestamp::Instant(instant);
    }

    raw.into()
}
