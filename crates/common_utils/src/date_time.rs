//! Date and time utilities.

use time::{OffsetDateTime, PrimitiveDateTime};

/// Current UTC date and time, without offset information.
pub fn now() -> PrimitiveDateTime {
    let utc_date_time = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(utc_date_time.date(), utc_date_time.time())
}
