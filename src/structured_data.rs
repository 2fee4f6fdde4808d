use crate::report::{Report, Violation};
use crate::utf8;

/// States of the STRUCTURED-DATA scan.
#[derive(Clone, Copy)]
enum State {
    Init,
    ElementEmpty,
    ElementBegin,
    IdName,
    IdEnterpriseNumber,
    ParamName,
    ParamValueBegin,
    ParamValue,
    ParamValueEnd,
}

/// Scan a STRUCTURED-DATA field, either the NIL `-` or one or more
/// `[SD-ID (SP SD-PARAM)*]` elements.
///
/// The caller has already delimited the field as a balanced run; this scan
/// enforces the rules inside the brackets, which a single pattern cannot
/// express because PARAM-VALUE delimiters may be backslash-escaped. The
/// first violation ends the scan. An invalid UTF-8 PARAM-VALUE is the
/// exception: it is recorded and the scan continues.
pub fn validate_structured_data(field: &[u8], report: &mut Report) {
    let mut state = State::Init;
    // one bit of look-back: the previous value byte was an unescaped backslash
    let mut backslash_preceded = false;
    let mut value = Vec::new();

    for &c in field {
        match state {
            State::Init => {
                if c == b'-' {
                    state = State::ElementEmpty;
                } else if c == b'[' {
                    state = State::IdName;
                }
            }

            State::ElementEmpty => {
                report.record(Violation::TrailingAfterNil);
                return;
            }

            State::ElementBegin => {
                if c != b'[' {
                    report.record(Violation::ExpectedChar('['));
                    return;
                }
                state = State::IdName;
            }

            // TODO: apply the SD-NAME rules of RFC 5424 section 6.3.2,
            // the 32 character limit in particular
            State::IdName => match c {
                b'@' => state = State::IdEnterpriseNumber,
                b']' => state = State::ElementBegin,
                b' ' => state = State::ParamName,
                b'!'..=b'~' if c != b'=' && c != b'"' => {}
                _ => {
                    report.record(Violation::InvalidSdIdByte(c));
                    return;
                }
            },

            // TODO: check the number against the IANA enterprise registry format
            State::IdEnterpriseNumber => match c {
                b']' => state = State::ElementBegin,
                b' ' => state = State::ParamName,
                b'0'..=b'9' => {}
                _ => {
                    report.record(Violation::InvalidEnterpriseByte(c));
                    return;
                }
            },

            State::ParamName => match c {
                b'=' => state = State::ParamValueBegin,
                b'!'..=b'~' if c != b']' && c != b'"' => {}
                _ => {
                    report.record(Violation::InvalidParamNameByte(c));
                    return;
                }
            },

            State::ParamValueBegin => {
                if c != b'"' {
                    report.record(Violation::ExpectedChar('"'));
                    return;
                }
                state = State::ParamValue;
                value.clear();
            }

            State::ParamValue => {
                value.push(c);
                if backslash_preceded {
                    backslash_preceded = false;
                } else {
                    match c {
                        b'"' => state = State::ParamValueEnd,
                        b'=' | b']' => {
                            report.record(Violation::UnescapedDelimiter(c as char));
                            return;
                        }
                        b'\\' => backslash_preceded = true,
                        _ => {}
                    }
                }
            }

            State::ParamValueEnd => {
                // the buffer still holds the closing quote
                if let Err(err) = utf8::validate(&value) {
                    report.record(Violation::ParamValueNotUtf8(err));
                }
                match c {
                    b' ' => state = State::ParamName,
                    b']' => state = State::ElementBegin,
                    _ => {
                        report.record(Violation::InvalidValueEnd(c));
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(field: &[u8]) -> Report {
        let mut report = Report::new();
        validate_structured_data(field, &mut report);
        report
    }

    #[test]
    fn nil_passes() {
        assert!(scan(b"-").is_valid());
    }

    #[test]
    fn nil_with_trailing_byte_fails() {
        let report = scan(b"-x");
        assert_eq!(report.violations, vec![Violation::TrailingAfterNil]);
    }

    #[test]
    fn rfc_example_element_passes() {
        let field = br#"[exampleSDID@32473 iut="3" eventSource="Application" eventID="1011"]"#;
        assert!(scan(field).is_valid());
    }

    #[test]
    fn multiple_elements_pass() {
        let field = br#"[exampleSDID@32473 iut="3"][examplePriority@32473 class="high"]"#;
        assert!(scan(field).is_valid());
    }

    #[test]
    fn id_only_element_passes() {
        assert!(scan(b"[timeQuality]").is_valid());
    }

    #[test]
    fn empty_element_passes() {
        assert!(scan(b"[]").is_valid());
    }

    #[test]
    fn escaped_bracket_in_value_passes() {
        assert!(scan(br#"[id param="va\]ue"]"#).is_valid());
    }

    #[test]
    fn unescaped_bracket_in_value_fails() {
        let report = scan(br#"[id param="va]ue"]"#);
        assert_eq!(report.violations, vec![Violation::UnescapedDelimiter(']')]);
    }

    #[test]
    fn unescaped_equals_in_value_fails() {
        let report = scan(br#"[id param="a=b"]"#);
        assert_eq!(report.violations, vec![Violation::UnescapedDelimiter('=')]);
    }

    #[test]
    fn escaped_quote_in_value_passes() {
        assert!(scan(br#"[meta key="val\"ue"]"#).is_valid());
    }

    #[test]
    fn escaped_backslash_ends_value_cleanly() {
        assert!(scan(br#"[meta key="c:\\"]"#).is_valid());
    }

    #[test]
    fn sd_id_rejects_equals() {
        let report = scan(br#"[id="x"]"#);
        assert_eq!(report.violations, vec![Violation::InvalidSdIdByte(b'=')]);
    }

    #[test]
    fn enterprise_number_rejects_non_digits() {
        let report = scan(b"[id@32a73]");
        assert_eq!(report.violations, vec![Violation::InvalidEnterpriseByte(b'a')]);
    }

    #[test]
    fn param_name_rejects_closing_bracket() {
        let report = scan(b"[id name]");
        assert_eq!(report.violations, vec![Violation::InvalidParamNameByte(b']')]);
    }

    #[test]
    fn missing_quote_after_equals_fails() {
        let report = scan(b"[id p=3]");
        assert_eq!(report.violations, vec![Violation::ExpectedChar('"')]);
    }

    #[test]
    fn junk_after_value_fails() {
        let report = scan(br#"[id p="v"x]"#);
        assert_eq!(report.violations, vec![Violation::InvalidValueEnd(b'x')]);
    }

    #[test]
    fn bytes_between_elements_fail() {
        let report = scan(b"[a]x[b]");
        assert_eq!(report.violations, vec![Violation::ExpectedChar('[')]);
    }

    #[test]
    fn invalid_utf8_value_is_reported_and_scan_continues() {
        let report = scan(b"[id p=\"\xff\" q=\"ok\"]");
        assert_eq!(report.violations.len(), 1);
        assert!(matches!(report.violations[0], Violation::ParamValueNotUtf8(_)));
    }

    #[test]
    fn value_ending_the_field_skips_the_utf8_check() {
        assert!(scan(b"[id p=\"\xff\"").is_valid());
    }

    #[test]
    fn leading_bytes_before_an_element_are_skipped() {
        assert!(scan(b"x[a]").is_valid());
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_bytes_never_panic(field in prop::collection::vec(any::<u8>(), 0..256)) {
                let mut report = Report::new();
                validate_structured_data(&field, &mut report);
            }
        }
    }
}
