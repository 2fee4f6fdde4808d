use std::str::Utf8Error;

use thiserror::Error;

/// A single conformance failure found in a candidate message.
///
/// Display strings carry the offending value, so a collection of violations
/// reads like a test log rather than a list of error codes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("message does not match RFC 5424 regex: {0:?}")]
    MalformedMessage(String),
    #[error("PRIVAL {0} was not a value between 0 and 191")]
    OutOfRangePrival(u32),
    #[error("VERSION {0:?} was not \"1\"")]
    WrongVersion(String),
    #[error("{0:?} does not match RFC 5424 timestamp regex")]
    MalformedTimestamp(String),
    #[error("DATE-FULLYEAR {0} was negative")]
    NegativeYear(i32),
    #[error("DATE-MONTH was not a value between 1 and 12")]
    OutOfRangeMonth(u32),
    #[error("DATE-MDAY was {day}, outside the range 1 to {max}")]
    OutOfRangeDay { day: u32, max: u32 },
    #[error("an empty STRUCTURED-DATA had more than a '-' character")]
    TrailingAfterNil,
    #[error("expected {0:?} in STRUCTURED-DATA")]
    ExpectedChar(char),
    #[error("invalid byte 0x{0:02x} in an SD-ID")]
    InvalidSdIdByte(u8),
    #[error("invalid byte 0x{0:02x} in the enterprise number of an SD-ID")]
    InvalidEnterpriseByte(u8),
    #[error("invalid byte 0x{0:02x} in a PARAM-NAME")]
    InvalidParamNameByte(u8),
    #[error("unescaped '{0}' inside a PARAM-VALUE")]
    UnescapedDelimiter(char),
    #[error("invalid ending of PARAM-VALUE: 0x{0:02x}")]
    InvalidValueEnd(u8),
    #[error("MSG after a UTF-8 BOM is not valid UTF-8: {0}")]
    MsgNotUtf8(Utf8Error),
    #[error("PARAM-VALUE is not valid UTF-8: {0}")]
    ParamValueNotUtf8(Utf8Error),
}

/// Accumulated outcome of validating a single message.
///
/// Validators record every violation they can still reach instead of
/// returning at the first one, so one run over a message surfaces all of
/// its independent problems. A structural mismatch is the exception: with
/// no way to split the message into fields, no field checks run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}
