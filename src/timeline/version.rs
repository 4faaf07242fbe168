//! Major/minor classification of revision transitions.
//!
//! Both versions are rounded to one decimal place and formatted; the transition is
//! major when the parts before the decimal point differ. A version that is missing or
//! doesn't parse as a decimal never produces a major transition.
//!
//! Parsing is strict: the whole trimmed string must be a number. A version with a
//! suffix such as `1.2beta` is unparseable rather than read as its numeric prefix
//! `1.2`, so `1.2beta -> 2.0` is not major.

/// Parse a version string as a finite decimal
pub fn parse_version(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integral portion of a version after rounding to one decimal place
fn integral_part(version: f64) -> String {
    let rounded = format!("{:.1}", version);
    match rounded.split_once('.') {
        Some((integral, _)) => integral.to_string(),
        None => rounded,
    }
}

/// Whether moving from `previous` to `current` crosses a major version
///
/// `1.9 -> 2.0` is major, `1.1 -> 1.2` is not. A revision with no previous
/// version is never major.
pub fn is_major_version(previous: Option<&str>, current: &str) -> bool {
    let (Some(prev), Some(curr)) = (previous.and_then(parse_version), parse_version(current))
    else {
        return false;
    };

    integral_part(prev) != integral_part(curr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_jump() {
        assert!(is_major_version(Some("1.9"), "2.0"));
        assert!(is_major_version(Some("0.1"), "1.0"));
    }

    #[test]
    fn test_minor_jump() {
        assert!(!is_major_version(Some("1.1"), "1.2"));
        assert!(!is_major_version(Some("0.1"), "0.2"));
    }

    #[test]
    fn test_missing_previous_is_not_major() {
        assert!(!is_major_version(None, "1.0"));
        assert!(!is_major_version(None, "7.0"));
    }

    #[test]
    fn test_unparseable_is_not_major() {
        assert!(!is_major_version(Some("abc"), "2.0"));
        assert!(!is_major_version(Some("1.0"), "two"));
        assert!(!is_major_version(Some(""), ""));
        assert!(!is_major_version(Some("NaN"), "2.0"));
        assert!(!is_major_version(Some("inf"), "2.0"));
    }

    #[test]
    fn test_suffixed_version_is_not_read_as_prefix() {
        assert_eq!(parse_version("1.2beta"), None);
        assert!(!is_major_version(Some("1.2beta"), "2.0"));
        assert!(!is_major_version(Some("1.9"), "2.0-rc1"));
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 1.96 rounds to 2.0, so the integral part is already 2
        assert!(!is_major_version(Some("1.96"), "2.0"));
        assert!(is_major_version(Some("1.94"), "2.0"));
    }

    #[test]
    fn test_deterministic() {
        let pairs = [(Some("1.9"), "2.0"), (Some("1.1"), "1.2"), (None, "1.0"), (Some("x"), "1")];
        for (prev, curr) in pairs {
            assert_eq!(is_major_version(prev, curr), is_major_version(prev, curr));
        }
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version(" 1.5 "), Some(1.5));
        assert_eq!(parse_version("10"), Some(10.0));
        assert_eq!(parse_version("1.2.3"), None);
    }
}
