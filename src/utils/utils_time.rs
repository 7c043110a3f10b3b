use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serializer};

/// `0001-01-01T00:00:00Z`, the platform's "no time" marker on the wire.
pub static ZERO_TIME: Lazy<DateTime<Utc>> = Lazy::new(|| {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
});

pub fn is_zero_time(t: &DateTime<Utc>) -> bool {
    *t == *ZERO_TIME
}

pub fn to_rfc3339(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde adapter for `Option<DateTime<Utc>>` where `None` travels as the zero time
/// instead of `null`.
pub mod zero_as_none {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        let t = value.as_ref().unwrap_or(&*ZERO_TIME);
        s.serialize_str(&to_rfc3339(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let t = DateTime::parse_from_rfc3339(&raw)
            .map_err(serde::de::Error::custom)?
            .with_timezone(&Utc);
        Ok(if is_zero_time(&t) { None } else { Some(t) })
    }
}
