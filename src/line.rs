//! Line-level tokenizer for the desktop entry format.
//!
//! Each line of a document classifies independently into a section header, a
//! key/value entry (optionally locale-qualified), or nothing worth keeping.

/// Classification of a single line of desktop entry text.
///
/// Borrowed from the input line; nothing is allocated during tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank line, comment, or a line that does not parse. Skipped silently.
    Ignore,
    /// A `[NAME]` section header; the name is everything up to the first `]`.
    Section(&'a str),
    /// A `KEY=VALUE` or `KEY[LOCALE]=VALUE` entry.
    Entry {
        key: &'a str,
        locale: Option<&'a str>,
        value: &'a str,
    },
}

/// Tokenizes one line of text (without its trailing newline).
///
/// Rules, in order:
/// - empty after trimming, or first non-whitespace char is `#`: [`Line::Ignore`]
/// - first non-whitespace char is `[`: section header up to the first `]`;
///   no closing `]` on the line is [`Line::Ignore`]
/// - otherwise the line must contain `=`; the part before it is the key
///   region, the part after it is the value
///
/// A key region ending in `]` is split at its *first* `[` into `KEY[LOCALE]`.
/// A trailing `]` with no `[` anywhere in the key region does not parse.
/// Values are trimmed of surrounding whitespace and of trailing `\r`, so
/// CRLF-terminated files are tolerated. No escaping of `=`, `[`, `]`, or `#`
/// is supported.
pub fn tokenize(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Ignore;
    }

    if let Some(rest) = trimmed.strip_prefix('[') {
        return match rest.find(']') {
            Some(end) => Line::Section(&rest[..end]),
            None => Line::Ignore,
        };
    }

    let Some(eq) = trimmed.find('=') else {
        return Line::Ignore;
    };

    let key_region = trimmed[..eq].trim_end();
    let (key, locale) = if let Some(inner) = key_region.strip_suffix(']') {
        let Some(open) = inner.find('[') else {
            return Line::Ignore;
        };
        (inner[..open].trim_end(), Some(&inner[open + 1..]))
    } else {
        (key_region, None)
    };

    // \r is trimmed explicitly even though it is also whitespace; KDE files
    // historically carried CRLF line endings.
    let value = trimmed[eq + 1..]
        .trim_end_matches(|c: char| c.is_whitespace() || c == '\r')
        .trim_start();

    Line::Entry { key, locale, value }
}
