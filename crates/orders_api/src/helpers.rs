use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub fn from_iso_utc_str_to_utc_datetime(time_str: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::from(
        DateTime::parse_from_rfc3339(time_str)
            .context(format!("error on parsing UTC datetime from {}", time_str))?,
    ))
}
