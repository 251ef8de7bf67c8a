use chrono::{DateTime, Utc};

use crate::base32;
use crate::error::Error;
use crate::timestamp::{self, Timestamp};

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Convert a timestamp-like value into a lexicoid.
///
/// ```
/// assert_eq!(lexicoid::from(1_654_301_676).unwrap(), "gehebv2");
/// assert!(lexicoid::from(-1).is_err());
/// ```
pub fn from(value: impl Into<Timestamp>) -> Result<String, Error> {
    let seconds = timestamp::normalize(&value.into())?;
    Ok(base32::encode(seconds))
}

/// Lexicoid for the current moment.
pub fn now() -> Result<String, Error> {
    now_with(&SystemClock)
}

pub fn now_with(clock: &(impl Clock + ?Sized)) -> Result<String, Error> {
    now_seconds_with(clock).map(|(_, id)| id)
}

/// The clock's current seconds since the epoch, with their lexicoid.
pub fn now_seconds_with(clock: &(impl Clock + ?Sized)) -> Result<(u128, String), Error> {
    let seconds = timestamp::normalize(&clock.now().into())?;
    Ok((seconds, base32::encode(seconds)))
}

/// Like [`from`], but with `exception` unset any failure turns into an
/// empty string instead of an error.
pub fn lexicoid(value: impl Into<Timestamp>, exception: bool) -> Result<String, Error> {
    match from(value) {
        Ok(id) => Ok(id),
        Err(err) if exception => Err(err),
        Err(err) => {
            tracing::debug!(error = %err, "swallowed invalid timestamp");
            Ok(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    const VECTORS: &[(i64, &str)] = &[
        (0, "22"),
        (100, "gk"),
        (10_000, "6wc2"),
        (500_000, "2ykm2"),
        (1_700_000, "5bse2"),
        (28_000_000, "2apny22"),
        (550_000_000, "6567f22"),
        (1_550_000_000, "flllz22"),
        (1_654_301_676, "gehebv2"),
        (1_654_401_676, "gei4p52"),
        (1_674_301_676, "gj7x3v2"),
        (1_674_301_677, "gj7x3vc"),
    ];

    fn utc(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn from_integers() {
        for (seconds, expected) in VECTORS {
            assert_eq!(from(*seconds).unwrap(), *expected);
        }
        assert_eq!(from(1u64 << 32).unwrap(), "26222222");
        assert_eq!(from(i64::MAX).unwrap(), "jzzzzzzzzzzzy");
        assert_eq!(from(u64::MAX).unwrap(), "zzzzzzzzzzzzy");
    }

    #[test]
    fn from_values_beyond_u64() {
        assert_eq!(from(Timestamp::Integer(1 << 64)).unwrap(), "262222222222222");
        assert_eq!(from(1e20).unwrap(), "2ppwirlhggc2222");
        assert_eq!(
            from(1e20).unwrap(),
            from(Timestamp::Integer(100_000_000_000_000_000_000)).unwrap()
        );
    }

    #[test]
    fn from_floats() {
        for (seconds, expected) in VECTORS {
            assert_eq!(from(*seconds as f64).unwrap(), *expected);
        }
        assert_eq!(from(1_654_301_676.999).unwrap(), from(1_654_301_676).unwrap());
    }

    #[test]
    fn from_utc_datetimes() {
        for (seconds, expected) in VECTORS {
            assert_eq!(from(utc(*seconds)).unwrap(), *expected);
        }
    }

    #[test]
    fn from_datetimes_with_offset() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        for (seconds, expected) in VECTORS {
            assert_eq!(from(utc(*seconds).with_timezone(&tz)).unwrap(), *expected);
        }
        let dt = DateTime::parse_from_rfc3339("2023-03-19T14:33:01.80251-05:00").unwrap();
        assert_eq!(from(dt).unwrap(), "gkfqavc");
    }

    #[test]
    fn from_rejects_improper_arguments() {
        let err = from(utc(-1)).unwrap_err();
        assert!(err.message().contains("after"), "{err}");

        let err = from(utc(-86_400)).unwrap_err();
        assert!(err.message().contains("after"), "{err}");

        let err = from(-1).unwrap_err();
        assert!(err.message().contains("non-negative"), "{err}");

        let err = from(-1.0).unwrap_err();
        assert!(err.message().contains("non-negative"), "{err}");

        let err = from("1234").unwrap_err();
        assert!(err.message().contains("one of"), "{err}");
    }

    #[test]
    fn epoch_itself_is_accepted() {
        assert_eq!(from(DateTime::<Utc>::UNIX_EPOCH).unwrap(), "22");
    }

    #[test]
    fn now_uses_the_clock() {
        let clock = FixedClock(utc(1_678_943_067));
        assert_eq!(now_with(&clock).unwrap(), "gkdeaqs");
        assert_eq!(
            now_seconds_with(&clock).unwrap(),
            (1_678_943_067, "gkdeaqs".to_string())
        );
    }

    #[test]
    fn now_reads_the_system_clock() {
        let before = from(Utc::now()).unwrap();
        let id = now().unwrap();
        assert_eq!(id.len(), 7);
        assert!(id >= before, "{id} should not sort before {before}");
    }

    #[test]
    fn clock_before_epoch_is_an_error() {
        let err = now_with(&FixedClock(utc(-10))).unwrap_err();
        assert!(err.message().contains("after"), "{err}");
    }

    #[test]
    fn wrapper_delegates_to_from() {
        assert_eq!(lexicoid(1234, true).unwrap(), from(1234).unwrap());
        assert_eq!(lexicoid(1234, false).unwrap(), from(1234).unwrap());
        assert!(lexicoid(-1, true).is_err());
    }

    #[test]
    fn wrapper_can_squelch_errors() {
        assert!(lexicoid("oops", true).is_err());
        assert_eq!(lexicoid("oops", false).unwrap(), "");
        assert_eq!(lexicoid(-1.0, false).unwrap(), "");
        assert_eq!(lexicoid(utc(-1), false).unwrap(), "");
    }
}
