//! # String Helpers
//!
//! Small, stateless string utilities: ellipsis truncation from either end,
//! title casing, HTML and URL encoding, and URL classification.
//!
//! All functions here are total: they accept any input string and never fail.
//! Lengths are counted in characters, not bytes, so multi-byte input is safe.

/// Slug generation for URLs and HTML anchors
pub mod slug;

use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, percent_encode};

#[cfg(feature = "query")]
use url::{ParseError, Url};

const ELLIPSIS: char = '…';

/// Returns up to `head_length` characters from the start of the string,
/// replacing the cut-off tail with an ellipsis.
///
/// Strings that already fit are returned unchanged. A trailing newline is
/// preserved and does not count toward `head_length`.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::get_head;
///
/// assert_eq!(get_head("a very long headline", 10), "a very lo…");
/// assert_eq!(get_head("short", 10), "short");
/// ```
pub fn get_head(source: &str, head_length: usize) -> String {
    let trailing_newline = source.ends_with('\n');
    let stripped = if trailing_newline {
        source.trim_end_matches(['\r', '\n'])
    } else {
        source
    };

    if stripped.chars().count() <= head_length {
        return source.to_string();
    }

    let mut result: String = stripped.chars().take(head_length.saturating_sub(1)).collect();
    if !result.ends_with(ELLIPSIS) {
        result.push(ELLIPSIS);
    }
    if trailing_newline {
        result.push('\n');
    }
    result
}

/// Returns up to `tail_length` characters from the end of the string,
/// replacing the cut-off head with an ellipsis.
///
/// Strings that already fit are returned unchanged.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::get_tail;
///
/// assert_eq!(get_tail("a very long headline", 9), "…headline");
/// assert_eq!(get_tail("short", 10), "short");
/// ```
pub fn get_tail(source: &str, tail_length: usize) -> String {
    let total = source.chars().count();
    if total <= tail_length {
        return source.to_string();
    }

    let keep = tail_length.saturating_sub(1);
    let body: String = source.chars().skip(total - keep).collect();
    if body.starts_with(ELLIPSIS) {
        body
    } else {
        format!("{ELLIPSIS}{body}")
    }
}

/// Changes a string to title case.
///
/// The input is lowercased, then the first letter of every word is
/// uppercased. Word boundaries are the start of the string and any
/// non-alphanumeric character, so hyphenated words are capitalized on both
/// sides of the hyphen.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::capitalize;
///
/// assert_eq!(capitalize("my test"), "My Test");
/// assert_eq!(capitalize("MYTEST"), "Mytest");
/// assert_eq!(capitalize("my-test"), "My-Test");
/// ```
pub fn capitalize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}

/// Encodes the string as HTML by escaping the five reserved characters.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::html_encode;
///
/// assert_eq!(html_encode("<b>\"Q&A\"</b>"), "&lt;b&gt;&quot;Q&amp;A&quot;&lt;/b&gt;");
/// ```
pub fn html_encode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Decodes the five reserved HTML entities back to plain characters.
///
/// Unknown entities are left in place.
pub fn html_decode(input: &str) -> String {
    // &amp; is decoded last so that "&amp;lt;" becomes "&lt;" and not "<".
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Percent-encodes the string for safe use inside a URL.
///
/// Every non-alphanumeric byte is encoded.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::url_encode;
///
/// assert_eq!(url_encode("Hello World!"), "Hello%20World%21");
/// ```
pub fn url_encode(input: &str) -> String {
    percent_encode(input.as_bytes(), NON_ALPHANUMERIC).to_string()
}

/// Decodes a percent-encoded string.
///
/// Invalid sequences are replaced rather than rejected, so this never fails.
pub fn url_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Checks if a string is an absolute URL.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::is_absolute_url;
///
/// assert!(is_absolute_url("http://mysite.com/mypage"));
/// assert!(!is_absolute_url("/mypage"));
/// ```
#[cfg(feature = "query")]
pub fn is_absolute_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Checks if a string is a relative URL reference.
///
/// A reference counts as relative when it fails to parse solely because it
/// has no base to resolve against.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::is_relative_url;
///
/// assert!(is_relative_url("/mypage"));
/// assert!(!is_relative_url("http://mysite.com/mypage"));
/// ```
#[cfg(feature = "query")]
pub fn is_relative_url(url: &str) -> bool {
    matches!(Url::parse(url), Err(ParseError::RelativeUrlWithoutBase))
}
