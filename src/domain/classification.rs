//! User-Agent platform classification.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled pattern for iOS device tokens.
static IOS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iphone|ipad|ipod").unwrap());

/// Compiled pattern for the Android token.
static ANDROID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)android").unwrap());

/// Compiled pattern for the generic mobile marker.
static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)mobile").unwrap());

/// Platform signals derived from a `User-Agent` header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub is_ios: bool,
    pub is_android: bool,
    /// True for any mobile device, including platforms without a dedicated
    /// redirect target. Carried into the diagnostic log only; target
    /// selection never consumes it.
    pub is_mobile: bool,
}

/// Classifies a raw `User-Agent` header value.
///
/// Matching is case-insensitive and total over all inputs: the empty
/// string yields all flags false, and no validation of User-Agent
/// well-formedness is performed. A spoofed string carrying both iOS and
/// Android tokens sets both flags; [`selection`](crate::domain::selection)
/// resolves the conflict by priority.
pub fn classify(user_agent: &str) -> Classification {
    let is_ios = IOS_PATTERN.is_match(user_agent);
    let is_android = ANDROID_PATTERN.is_match(user_agent);
    let is_mobile = is_ios || is_android || MOBILE_PATTERN.is_match(user_agent);

    Classification {
        is_ios,
        is_android,
        is_mobile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iphone_is_ios() {
        let c = classify("Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X)");
        assert!(c.is_ios);
        assert!(!c.is_android);
        assert!(c.is_mobile);
    }

    #[test]
    fn test_ipad_and_ipod_are_ios() {
        assert!(classify("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)").is_ios);
        assert!(classify("Mozilla/5.0 (iPod touch; CPU iPhone OS 15_0)").is_ios);
    }

    #[test]
    fn test_android_device() {
        let c = classify("Mozilla/5.0 (Linux; Android 13; SM-G998B) Mobile Safari/537.36");
        assert!(!c.is_ios);
        assert!(c.is_android);
        assert!(c.is_mobile);
    }

    #[test]
    fn test_desktop_browser() {
        let c = classify("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/112.0.0.0");
        assert!(!c.is_ios);
        assert!(!c.is_android);
        assert!(!c.is_mobile);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(classify("mozilla/5.0 (IPHONE)").is_ios);
        assert!(classify("ANDROID device").is_android);
        assert!(classify("Opera Mini MOBILE").is_mobile);
    }

    #[test]
    fn test_generic_mobile_without_platform() {
        // Mobile marker without a platform token: mobile, but neither flag
        let c = classify("Mozilla/5.0 (Mobile; rv:109.0) Gecko/109.0 Firefox/109.0");
        assert!(!c.is_ios);
        assert!(!c.is_android);
        assert!(c.is_mobile);
    }

    #[test]
    fn test_empty_string_yields_all_false() {
        let c = classify("");
        assert_eq!(
            c,
            Classification {
                is_ios: false,
                is_android: false,
                is_mobile: false
            }
        );
    }

    #[test]
    fn test_spoofed_dual_platform_sets_both_flags() {
        let c = classify("Mozilla/5.0 (iPhone; Android 13)");
        assert!(c.is_ios);
        assert!(c.is_android);
        assert!(c.is_mobile);
    }

    #[test]
    fn test_deterministic() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X)";
        assert_eq!(classify(ua), classify(ua));
    }
}
