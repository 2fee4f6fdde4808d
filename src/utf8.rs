use std::str::Utf8Error;

/// Check that `bytes` form one valid UTF-8 sequence.
///
/// Only the verdict matters to the validators, never the decoded text.
pub fn validate(bytes: &[u8]) -> Result<(), Utf8Error> {
    std::str::from_utf8(bytes).map(|_| ())
}
