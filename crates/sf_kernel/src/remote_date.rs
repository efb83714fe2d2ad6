//! Remote datetime codec
//!
//! The remote service accepts exactly one datetime shape on the way in:
//! `YYYY-MM-DDTHH:mm:ssZ`. Values it sends back (or that callers collect from
//! other sources) come in many shapes, so decoding is a best-effort parse that
//! never fails loudly.
//!
//! - Encoding relabels the wall-clock reading as UTC; the numbers are kept and
//!   only the zone annotation changes.
//! - Decoding tries a broad set of ISO-like and locale formats and returns
//!   `None` when nothing matches. Month-and-year text reads as the first of
//!   the month; time-only text reads as that time today.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Canonical format emitted by [`format_remote`]
pub const REMOTE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Offset-bearing formats not covered by RFC 3339 / RFC 2822
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%B %d %Y %I:%M:%S %p",
    "%B %d %Y %I:%M %p",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%A, %B %d, %Y %I:%M:%S %p",
    "%A, %B %d, %Y %H:%M:%S",
];

const MONTH_FIRST_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %I:%M:%S %p",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m-%d-%Y %H:%M:%S",
];

const DAY_FIRST_DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%y %I:%M:%S %p",
    "%d/%m/%y %I:%M %p",
    "%d/%m/%y %H:%M:%S",
    "%d/%m/%y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M %p",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

/// Anything earlier is a short numeric year misread through `%Y`
const MIN_PLAUSIBLE_YEAR: i32 = 1000;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%A, %B %d, %Y",
    "%A, %d %B %Y",
];

/// Month-and-year shapes, read as the first of the month
const YEAR_MONTH_FORMATS: &[&str] = &["%B %Y", "%Y-%m", "%m/%Y"];

/// Time-only shapes, read on the current date in the assumed zone
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

// Two-digit years first: `%Y` happily reads "24" as year 24.
const MONTH_FIRST_DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%m-%d-%Y"];

const DAY_FIRST_DATE_FORMATS: &[&str] = &["%d/%m/%y", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// A value that has a wall-clock reading
///
/// The reading is what gets relabelled as UTC when encoding; any zone the
/// value carries is discarded, not converted.
pub trait WallClock {
    fn wall_clock(&self) -> NaiveDateTime;
}

impl WallClock for NaiveDateTime {
    fn wall_clock(&self) -> NaiveDateTime {
        *self
    }
}

impl WallClock for NaiveDate {
    fn wall_clock(&self) -> NaiveDateTime {
        self.and_time(NaiveTime::MIN)
    }
}

impl<Z: TimeZone> WallClock for DateTime<Z> {
    fn wall_clock(&self) -> NaiveDateTime {
        self.naive_local()
    }
}

impl<T: WallClock + ?Sized> WallClock for &T {
    fn wall_clock(&self) -> NaiveDateTime {
        (**self).wall_clock()
    }
}

/// Formats a value as a canonical remote datetime string
pub fn format_remote<T: WallClock + ?Sized>(value: &T) -> String {
    value
        .wall_clock()
        .and_utc()
        .format(REMOTE_DATETIME_FORMAT)
        .to_string()
}

/// Converts an optional timestamp to the canonical remote string
///
/// Absent input yields an absent result.
pub fn to_remote_string<T: WallClock>(value: Option<T>) -> Option<String> {
    value.map(|v| format_remote(&v))
}

/// Parses remote datetime text with the default parser (UTC, month-first)
pub fn from_remote_string(text: &str) -> Option<DateTime<Utc>> {
    RemoteDateParser::default().parse(text)
}

/// Day/month ordering used for numeric dates such as `03/05/2024`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `MM/DD/YYYY`
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY` and `DD.MM.YYYY`
    DayFirst,
}

/// Best-effort parser for remote datetime text
///
/// Text without zone information is read in `assume_zone` and converted to
/// UTC. Text with an offset, a trailing `Z`, or a `UTC`/`GMT` designator is
/// converted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteDateParser {
    assume_zone: Tz,
    order: DateOrder,
}

impl Default for RemoteDateParser {
    fn default() -> Self {
        Self {
            assume_zone: chrono_tz::UTC,
            order: DateOrder::MonthFirst,
        }
    }
}

impl RemoteDateParser {
    pub fn new(assume_zone: Tz, order: DateOrder) -> Self {
        Self { assume_zone, order }
    }

    pub fn assume_zone(&self) -> Tz {
        self.assume_zone
    }

    pub fn order(&self) -> DateOrder {
        self.order
    }

    /// Parses `text`, returning `None` when no known shape matches
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(parsed) = parse_with_offset(text) {
            return Some(parsed);
        }

        let parsed = match strip_utc_designator(text) {
            Some(rest) => self.parse_naive(rest).map(|naive| naive.and_utc()),
            None => self.parse_naive(text).and_then(|naive| self.localize(naive)),
        };

        if parsed.is_none() {
            trace!(input = text, "unrecognised remote datetime");
        }
        parsed
    }

    fn parse_naive(&self, text: &str) -> Option<NaiveDateTime> {
        let (datetime_formats, date_formats) = match self.order {
            DateOrder::MonthFirst => (MONTH_FIRST_DATETIME_FORMATS, MONTH_FIRST_DATE_FORMATS),
            DateOrder::DayFirst => (DAY_FIRST_DATETIME_FORMATS, DAY_FIRST_DATE_FORMATS),
        };

        // Locale formats go first so that "3/5/24" is never read as `%Y/%m/%d`
        datetime_formats
            .iter()
            .chain(DATETIME_FORMATS)
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok().filter(is_plausible))
            .or_else(|| {
                date_formats
                    .iter()
                    .chain(DATE_FORMATS)
                    .find_map(|fmt| {
                        NaiveDate::parse_from_str(text, fmt)
                            .ok()
                            .map(|date| date.and_time(NaiveTime::MIN))
                            .filter(is_plausible)
                    })
            })
            .or_else(|| parse_year_month(text))
            .or_else(|| self.parse_time_today(text))
    }

    fn parse_time_today(&self, text: &str) -> Option<NaiveDateTime> {
        let time = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())?;
        let today = Utc::now().with_timezone(&self.assume_zone).date_naive();
        Some(today.and_time(time))
    }

    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.assume_zone
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

fn is_plausible(naive: &NaiveDateTime) -> bool {
    naive.year() >= MIN_PLAUSIBLE_YEAR
}

fn parse_year_month(text: &str) -> Option<NaiveDateTime> {
    // chrono needs a day of month to build a date
    let padded = format!("{text} 1");
    YEAR_MONTH_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&padded, &format!("{fmt} %d"))
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
            .filter(is_plausible)
    })
}

fn parse_with_offset(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        })
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Strips a trailing `Z`, `UTC` or `GMT` marker, returning the zone-less rest
fn strip_utc_designator(text: &str) -> Option<&str> {
    if let Some(rest) = text.strip_suffix(['Z', 'z']) {
        if rest.ends_with(|c: char| c.is_ascii_digit()) {
            return Some(rest);
        }
    }

    let split = text.len().checked_sub(3)?;
    let tail = text.get(split..)?;
    if tail.eq_ignore_ascii_case("UTC") || tail.eq_ignore_ascii_case("GMT") {
        let rest = text.get(..split)?.trim_end();
        if !rest.is_empty() {
            return Some(rest);
        }
    }
    None
}
