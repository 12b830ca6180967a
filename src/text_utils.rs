use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses a `pubDatetime` value. RFC 3339 is the canonical authored form
/// and any offset is normalized to UTC. Naive `YYYY-MM-DD HH:MM[:SS[.fff]]`
/// and date-only values are accepted too and assumed to already be UTC.
pub fn parse_pub_datetime(buf: &str) -> Result<DateTime<Utc>, String> {
    lazy_static! {
        static ref NAIVE_REGEX: Regex = Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[ T](\d{1,2}):(\d{1,2})(?::(\d{1,2}))?(?:\.\d{1,9})?)?$"
        ).unwrap();
    }

    let buf = buf.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(buf) {
        return Ok(date_time.with_timezone(&Utc));
    }

    let Some(caps) = NAIVE_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);
    let group = |n: usize| caps.get(n).map(|m| m.as_str());

    let y: i32 = to_i32(group(1).unwrap_or("0"))?;
    let m: u32 = to_u32(group(2).unwrap_or("0"))?;
    let d: u32 = to_u32(group(3).unwrap_or("0"))?;
    let h: u32 = to_u32(group(4).unwrap_or("0"))?;
    let mn: u32 = to_u32(group(5).unwrap_or("0"))?;
    let s: u32 = to_u32(group(6).unwrap_or("0"))?;

    let date = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| format!("Invalid calendar date in {}", buf))?;
    let time = NaiveTime::from_hms_opt(h, mn, s)
        .ok_or_else(|| format!("Invalid time of day in {}", buf))?;

    Ok(NaiveDateTime::new(date, time).and_utc())
}

pub fn format_date_time(date_time: &DateTime<Utc>) -> (String, String) {
    let date = date_time.format("%Y-%m-%d").to_string();
    let time = date_time.format("%H:%M:%S").to_string();
    (date, time)
}
