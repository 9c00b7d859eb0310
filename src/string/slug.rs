//! # Slug Generator
//!
//! Converts free text into a URL/HTML-safe, hyphenated lowercase token.
//!
//! The pipeline splits camelCase, PascalCase and digit boundaries into
//! separate words, folds accented characters to their closest ASCII
//! equivalents, strips everything that is not a lowercase letter, digit,
//! whitespace or hyphen, and joins the remaining words with a configurable
//! separator.
//!
//! Slug generation is a total function: any input produces a string and
//! nothing ever fails. Whitespace-only input yields an empty slug, and the
//! generator is idempotent on its own output.
//!
//! ## Examples
//!
//! ```
//! use web_toolbelt_rs::string::slug::{generate_slug, generate_slug_without_hyphens};
//!
//! assert_eq!(generate_slug("MyTest"), "my-test");
//! assert_eq!(generate_slug("Crème brûlée!"), "creme-brulee");
//! assert_eq!(generate_slug_without_hyphens("MyTest", 50), "mytest");
//! ```

/// Default maximum slug length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 50;

/// Creates a URL / HTML friendly slug with the default length limit and a
/// hyphen word separator.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::slug::generate_slug;
///
/// assert_eq!(generate_slug("Hello, World!"), "hello-world");
/// assert_eq!(generate_slug("version2Release"), "version-2-release");
/// assert_eq!(generate_slug("   "), "");
/// ```
pub fn generate_slug(phrase: &str) -> String {
    generate_slug_with(phrase, DEFAULT_MAX_LENGTH, "-")
}

/// Creates a URL / HTML friendly slug with an explicit length limit and word
/// separator.
///
/// `max_length` is counted in characters. The separator replaces every word
/// boundary in the result; an empty separator concatenates the words.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::slug::generate_slug_with;
///
/// assert_eq!(generate_slug_with("Hello, World!", 50, "_"), "hello_world");
/// assert_eq!(generate_slug_with("Hello, World!", 7, "-"), "hello-w");
/// ```
pub fn generate_slug_with(phrase: &str, max_length: usize, word_separator: &str) -> String {
    if phrase.trim().is_empty() {
        return String::new();
    }

    // Separate words at camelCase / PascalCase / digit boundaries.
    let split = split_word_boundaries(phrase);

    // Fold to lowercase ASCII, keeping only [a-z0-9], whitespace and hyphens.
    let mut ascii = String::with_capacity(split.len());
    for ch in split.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || ch == '-' {
            ascii.push(ch);
        } else if let Some(folded) = fold_ascii(ch) {
            ascii.push_str(folded);
        }
    }

    // Collapse runs of whitespace and hyphens into single word breaks.
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_break = false;
    for ch in ascii.trim_matches(|c: char| c.is_whitespace() || c == '-').chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_break = true;
        } else {
            if pending_break {
                slug.push_str(word_separator);
                pending_break = false;
            }
            slug.push(ch);
        }
    }

    // Cut to max_length and drop any whitespace the cut may have exposed.
    let cut: String = slug.chars().take(max_length).collect();
    cut.trim_end().to_string()
}

/// Creates a slug with the words concatenated instead of hyphenated.
///
/// # Examples
///
/// ```
/// use web_toolbelt_rs::string::slug::generate_slug_without_hyphens;
///
/// assert_eq!(generate_slug_without_hyphens("Hello, World!", 50), "helloworld");
/// ```
pub fn generate_slug_without_hyphens(phrase: &str, max_length: usize) -> String {
    generate_slug_with(phrase, max_length, "")
}

/// Inserts a hyphen between adjacent characters whenever a word boundary
/// occurs: lower → upper/digit, upper → upper/digit, or digit → letter.
fn split_word_boundaries(phrase: &str) -> String {
    let chars: Vec<char> = phrase.chars().collect();
    let mut result = String::with_capacity(chars.len() * 2);

    for (pos, &ch) in chars.iter().enumerate() {
        result.push(ch);

        if let Some(&next) = chars.get(pos + 1) {
            let boundary = (ch.is_lowercase() && (next.is_uppercase() || next.is_numeric()))
                || (ch.is_uppercase() && (next.is_uppercase() || next.is_numeric()))
                || (ch.is_numeric() && (next.is_lowercase() || next.is_uppercase()));

            if boundary {
                result.push('-');
            }
        }
    }

    result
}

/// Best-effort fold of an accented or extended character to lowercase ASCII.
///
/// Returns `None` for characters with no reasonable ASCII equivalent; the
/// caller drops those. The input is expected to be lowercased already.
fn fold_ascii(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ð' | 'ď' | 'đ' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(folded)
}
