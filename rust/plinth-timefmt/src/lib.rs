//! Fixed presentation formats for timestamps and time deltas.
//!
//! Two pure rendering adapters, meant to be handed to any `format!`-style
//! sink: [`calendar`] renders a Unix timestamp as
//! `"Mon DD HH:MM:SS ZZZZ YYYY"`, and [`delta`] renders the difference
//! between two timestamps as a human-scale `"<N> <unit>"` string. Nothing
//! here validates its inputs beyond the documented sentinel handling.

use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

#[cfg(test)]
mod tests;

/// Reserved "undefined" timestamp value, rendered as a dash placeholder.
pub const UNDEFINED_TIME: i64 = 0;

// Fixed table so rendering is locale-independent.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Returns a `Display` adapter rendering `ts` in calendar form.
///
/// `utc` selects UTC or local-time conversion and the zone marker
/// (`" UTC "` vs. a single space). [`UNDEFINED_TIME`] and timestamps the
/// calendar conversion cannot represent render as
/// `"--- -- --:--:--<zone>----"`, keeping the placeholder the same width as
/// the real rendering.
pub fn calendar(ts: i64, utc: bool) -> CalendarDisplay {
    CalendarDisplay { ts, utc }
}

/// Returns a `Display` adapter rendering the absolute difference between
/// `begin` and `end`.
///
/// The coarsest human-scale unit is chosen: days beyond 2 days, hours beyond
/// 2 hours, minutes beyond 2 minutes, seconds otherwise. The unit is
/// pluralized unless the scaled value is exactly 1.
pub fn delta(begin: i64, end: i64) -> DeltaDisplay {
    DeltaDisplay { begin, end }
}

/// See [`calendar`].
#[derive(Debug, Clone, Copy)]
pub struct CalendarDisplay {
    ts: i64,
    utc: bool,
}

impl fmt::Display for CalendarDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zone = if self.utc { " UTC " } else { " " };
        let fields = if self.ts == UNDEFINED_TIME {
            None
        } else {
            to_fields(self.ts, self.utc)
        };
        match fields {
            Some(t) => write!(
                f,
                "{} {:02} {:02}:{:02}:{:02}{}{:04}",
                MONTHS[t.month0], t.day, t.hour, t.min, t.sec, zone, t.year
            ),
            None => write!(f, "--- -- --:--:--{zone}----"),
        }
    }
}

struct CalendarFields {
    month0: usize,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
    year: i32,
}

fn to_fields(ts: i64, utc: bool) -> Option<CalendarFields> {
    if utc {
        DateTime::from_timestamp(ts, 0).map(|dt| fields_from(&dt))
    } else {
        match Local.timestamp_opt(ts, 0) {
            chrono::LocalResult::Single(dt) => Some(fields_from(&dt)),
            _ => None,
        }
    }
}

fn fields_from<Tz: TimeZone>(dt: &DateTime<Tz>) -> CalendarFields {
    CalendarFields {
        month0: dt.month0() as usize,
        day: dt.day(),
        hour: dt.hour(),
        min: dt.minute(),
        sec: dt.second(),
        year: dt.year(),
    }
}

/// See [`delta`].
#[derive(Debug, Clone, Copy)]
pub struct DeltaDisplay {
    begin: i64,
    end: i64,
}

impl fmt::Display for DeltaDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut delta = self.begin.abs_diff(self.end);
        let unit = if delta > 2 * 60 * 60 * 24 {
            delta /= 60 * 60 * 24;
            "day"
        } else if delta > 2 * 60 * 60 {
            delta /= 60 * 60;
            "hour"
        } else if delta > 2 * 60 {
            delta /= 60;
            "minute"
        } else {
            "second"
        };
        let plural = if delta == 1 { "" } else { "s" };
        write!(f, "{delta} {unit}{plural}")
    }
}
