use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::report::{Report, Violation};
use crate::structured_data::validate_structured_data;
use crate::timestamp::validate_timestamp;
use crate::utf8;

// largest valid PRIVAL, facility 23 * 8 + severity 7
const MAX_PRIVAL: u32 = 191;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

// SYSLOG-MSG from https://datatracker.ietf.org/doc/html/rfc5424#section-6
//
//   PRI VERSION SP TIMESTAMP SP HOSTNAME SP APP-NAME SP PROCID SP MSGID
//   SP STRUCTURED-DATA (SP MSG)?
//
// TIMESTAMP is delimited here as a bare printable run; its own grammar is
// checked afterwards so a bad timestamp is reported as such instead of as
// a whole-message mismatch. The STRUCTURED-DATA alternative tracks quoting
// and escapes just far enough to find the end of the field; the rules
// inside the brackets belong to the structured data scan.
static MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?-u)^<(?P<prival>\d{1,3})>(?P<version>\d{1,3})",
        r" (?P<timestamp>[!-~]+)",
        r" (?P<hostname>[!-~]{1,255})",
        r" (?P<appname>[!-~]{1,48})",
        r" (?P<procid>[!-~]{1,128})",
        r" (?P<msgid>[!-~]{1,32})",
        r#" (?P<sd>-|(?:\[(?:[^"\]]|"(?:[^"\\]|\\.)*")*\])+)"#,
        r"(?: (?P<msg>.*))?$",
    ))
    .expect("message pattern compiles")
});

/// Check one syslog message for RFC 5424 conformance.
///
/// The returned [`Report`] is empty for a conforming message. A message
/// that does not match the overall grammar gets a single structural
/// violation and no field checks; otherwise every field check runs and
/// records its failures independently, so one pass surfaces them all.
///
/// # Example
///
/// ```
/// use syslog_conformance::validate_message;
///
/// let report = validate_message(
///     b"<34>1 2003-10-11T22:14:15.003Z mymachine.example.com su - ID47 - 'su root' failed",
/// );
/// assert!(report.is_valid());
/// ```
pub fn validate_message(message: &[u8]) -> Report {
    let mut report = Report::new();

    let Some(caps) = MESSAGE.captures(message) else {
        report.record(Violation::MalformedMessage(
            String::from_utf8_lossy(message).into_owned(),
        ));
        return report;
    };

    let prival = decimal(&caps["prival"]);
    if prival > MAX_PRIVAL {
        report.record(Violation::OutOfRangePrival(prival));
    }

    let version = &caps["version"];
    if version != b"1" {
        report.record(Violation::WrongVersion(
            String::from_utf8_lossy(version).into_owned(),
        ));
    }

    validate_timestamp(&caps["timestamp"], &mut report);
    validate_structured_data(&caps["sd"], &mut report);

    if let Some(msg) = caps.name("msg") {
        if let Some(text) = msg.as_bytes().strip_prefix(UTF8_BOM) {
            if let Err(err) = utf8::validate(text) {
                report.record(Violation::MsgNotUtf8(err));
            }
        }
    }

    report
}

#[inline]
fn decimal(digits: &[u8]) -> u32 {
    let mut value = 0;
    for d in digits {
        value = value * 10 + (d - b'0') as u32;
    }
    value
}
