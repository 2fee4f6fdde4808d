//! Conformance checking for [RFC 5424](https://datatracker.ietf.org/doc/html/rfc5424)
//! Syslog messages. Not a parser: nothing here builds a message value. The
//! crate is a test oracle that judges candidate messages and reports every
//! way they fall short of the RFC.
//!
//! Checks cover the overall message layout, the PRIVAL range, the VERSION
//! literal, the RFC 3339 timestamp profile with its calendar rules, the
//! STRUCTURED-DATA grammar down to escaped parameter values, and UTF-8
//! validity where the RFC requires it.
//!
//! Messages are byte slices rather than `&str` on purpose: a MSG carrying
//! invalid UTF-8 is a finding to report, not an input error.
//!
//! # Example
//!
//! ```
//! use syslog_conformance::validate_message;
//!
//! let report = validate_message(
//!     b"<34>1 2003-10-11T22:14:15.003Z mymachine.example.com su - ID47 - 'su root' failed",
//! );
//! assert!(report.is_valid());
//!
//! // one pass reports every independent violation
//! let report = validate_message(b"<192>2 2003-02-29T00:00:00Z host app - - -");
//! assert_eq!(report.violations.len(), 3);
//! ```
//!
//! Whole files of newline-delimited messages can be checked against an
//! expected line count:
//!
//! ```no_run
//! use syslog_conformance::validate_file;
//!
//! let report = validate_file("/var/log/export.log", 1024).unwrap();
//! assert!(report.is_valid());
//! ```
//!
//! # Known gaps
//!
//!  * SD-ID and PARAM-NAME are only checked to be printable ASCII minus a
//!    few delimiters; the 32 character limit of SD-NAME is not enforced.
//!  * An enterprise number is only checked to be digits, never against the
//!    IANA registry.

mod batch;
mod report;
mod rfc5424;
mod structured_data;
mod timestamp;
mod utf8;

pub use batch::{validate_file, validate_lines, FileReport};
pub use report::{Report, Violation};
pub use rfc5424::validate_message;
pub use structured_data::validate_structured_data;
pub use timestamp::validate_timestamp;
