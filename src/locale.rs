//! Locale matching for translated desktop entry values.
//!
//! Locales are of the general form `LANG[_COUNTRY][.ENCODING][@MODIFIER]`,
//! where each of COUNTRY, ENCODING and MODIFIER can be absent. A candidate
//! locale is matched by stripping the rightmost qualifier of the current
//! locale one at a time. This is not full freedesktop.org locale matching,
//! but a deliberately simpler approximation; the scores below assume it.

/// Scores how well `candidate` matches `current`, from 0 (no match) to 4
/// (exact match).
///
/// - 4: `candidate` equals `current` exactly
/// - 3: `candidate` equals `current` up to (not including) its first `@`
/// - 2: `candidate` equals `current` up to its first `.`
/// - 1: `candidate` equals `current` up to its first `_`
/// - 0: otherwise
///
/// ```
/// use deskentry::locale::match_level;
///
/// assert_eq!(match_level("en_US.UTF-8@euro", "en_US.UTF-8@euro"), 4);
/// assert_eq!(match_level("en_US.UTF-8@euro", "en_US.UTF-8"), 3);
/// assert_eq!(match_level("en_US.UTF-8@euro", "en_US"), 2);
/// assert_eq!(match_level("en_US.UTF-8@euro", "en"), 1);
/// assert_eq!(match_level("en_US.UTF-8@euro", "fr"), 0);
/// ```
pub fn match_level(current: &str, candidate: &str) -> u8 {
    if current == candidate {
        return 4;
    }

    for (separator, level) in [('@', 3), ('.', 2), ('_', 1)] {
        if let Some(cut) = current.find(separator)
            && candidate == &current[..cut]
        {
            return level;
        }
    }

    0
}

/// Resolves the process-wide locale for message catalogs.
///
/// Follows the POSIX precedence `LC_ALL` > `LC_MESSAGES` > `LANG`, taking the
/// first variable that is set and non-empty. Returns `None` when none of them
/// is set, in which case locale-qualified entry lines are never preferred.
pub fn current_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}
