use serde::Serializer;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// RFC 3339 in UTC with millisecond precision, e.g. `2026-01-05T09:30:00.000Z`
pub fn front_time<S>(dt: &OffsetDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );

    let formatted = dt
        .to_offset(UtcOffset::UTC)
        .format(format)
        .map_err(serde::ser::Error::custom)?;

    s.serialize_str(&formatted)
}
