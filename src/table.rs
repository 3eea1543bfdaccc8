//! The entry table: the set of tracked keys and their resolved values.
//!
//! The key set is fixed when the table is created; parsing only fills in
//! values for keys that were declared up front. Lookup is a linear scan with
//! exact, case-sensitive key comparison, which is fine for the tens of keys a
//! desktop shell typically tracks.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One tracked key and the values resolved for it so far.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// The key, immutable after creation and unique within its table.
    pub key: String,

    /// The untranslated value, from the last unqualified `KEY=VALUE` line.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub value: Option<String>,

    /// The value from the best locale-qualified line seen for this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub translated_value: Option<String>,

    /// The section header most recently in effect when this key matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub section: Option<String>,
}

impl Entry {
    fn new(key: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: None,
            translated_value: None,
            section: None,
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key         : {}", self.key)?;
        if let Some(value) = &self.value {
            write!(f, "\nValue       : {}", value)?;
        }
        if let Some(translated) = &self.translated_value {
            write!(f, "\nTranslation : {}", translated)?;
        }
        if let Some(section) = &self.section {
            write!(f, "\nSection     : {}", section)?;
        }
        Ok(())
    }
}

/// Ordered set of tracked entries, in caller-supplied key order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EntryTable {
    entries: Vec<Entry>,
}

impl EntryTable {
    /// Creates a table tracking the given keys, all values unset.
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        EntryTable {
            entries: keys.into_iter().map(Entry::new).collect(),
        }
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table tracks no keys at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in construction order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn find_entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub(crate) fn find_entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> &mut Entry {
        &mut self.entries[index]
    }

    /// Returns the string value for `key`, or `None` if the key is unknown
    /// or its untranslated value is absent or empty.
    ///
    /// With `translated` set, the translated value is preferred when one
    /// exists; the untranslated value must still be present and non-empty
    /// for the lookup to succeed at all.
    pub fn get_string(&self, key: &str, translated: bool) -> Option<&str> {
        let entry = self.find_entry(key)?;
        let value = entry.value.as_deref().filter(|v| !v.is_empty())?;

        if translated && let Some(translation) = entry.translated_value.as_deref() {
            return Some(translation);
        }

        Some(value)
    }

    /// Returns the untranslated value for `key` as a non-negative integer.
    ///
    /// Parsing takes the leading integer prefix, so trailing garbage after
    /// the digits is tolerated (`"42abc"` is 42). Values with no leading
    /// digits and negative values both yield `None`. Translated values are
    /// never consulted.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        let entry = self.find_entry(key)?;
        let value = entry.value.as_deref().filter(|v| !v.is_empty())?;

        leading_int(value).filter(|n| *n >= 0)
    }
}

/// atoi-style leading-integer parse, except that at least one digit is
/// required (plain `atoi` would map `"abc"` to 0).
fn leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}
