use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::report::{Report, Violation};

// RFC 3339 profile from https://datatracker.ietf.org/doc/html/rfc5424#section-6.2.3
//
// "T" and "Z" are uppercase only, TIME-SECFRAC is at most six digits, and
// there is no NIL form. Month and day stay unbounded here so the range
// checks below can report them descriptively.
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?-u)^(?P<year>\d{4})-(?P<month>\d{2})-(?P<day>\d{2})",
        r"T\d{2}:\d{2}:\d{2}(?:\.\d{1,6})?(?:Z|[+-]\d{2}:\d{2})$",
    ))
    .expect("timestamp pattern compiles")
});

/// Check a TIMESTAMP field against the RFC 3339 profile of RFC 5424.
///
/// A structural mismatch is recorded and ends the check. Otherwise the
/// date is extracted and range-checked, with the month picking the
/// day-count rule.
pub fn validate_timestamp(timestamp: &[u8], report: &mut Report) {
    let Some(caps) = TIMESTAMP.captures(timestamp) else {
        report.record(Violation::MalformedTimestamp(
            String::from_utf8_lossy(timestamp).into_owned(),
        ));
        return;
    };

    let year = decimal(&caps["year"]) as i32;
    if year < 0 {
        report.record(Violation::NegativeYear(year));
    }

    let month = decimal(&caps["month"]);
    let day = decimal(&caps["day"]);
    match max_mday(year, month) {
        Some(max) => {
            if day < 1 || day > max {
                report.record(Violation::OutOfRangeDay { day, max });
            }
        }
        None => report.record(Violation::OutOfRangeMonth(month)),
    }
}

// Maximum DATE-MDAY for the month, accounting for leap years in the
// gregorian calendar.
fn max_mday(year: i32, month: u32) -> Option<u32> {
    let max = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => return None,
    };

    Some(max)
}

#[inline]
fn decimal(digits: &[u8]) -> u32 {
    let mut value = 0;
    for d in digits {
        value = value * 10 + (d - b'0') as u32;
    }
    value
}
