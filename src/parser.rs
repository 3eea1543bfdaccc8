//! The desktop entry handle and its parse driver.
//!
//! A [`DesktopEntry`] is created from a file path plus the ordered list of
//! keys the caller wants to track. One call to [`DesktopEntry::parse`] reads
//! the file and fills in the table; the typed accessors then answer queries.

use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    line::{self, Line},
    locale,
    table::{Entry, EntryTable},
};

/// A desktop entry file together with the keys tracked in it.
///
/// # Example
///
/// ```rust,no_run
/// use deskentry::DesktopEntry;
///
/// let mut entry = DesktopEntry::new(
///     "/usr/share/applications/editor.desktop",
///     ["Name", "Exec", "Icon"],
/// );
/// entry.parse()?;
///
/// if let Some(name) = entry.get_string("Name", true) {
///     println!("launching {name}");
/// }
/// # Ok::<(), deskentry::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DesktopEntry {
    path: PathBuf,
    table: EntryTable,
}

impl DesktopEntry {
    /// Creates a handle for `path`, tracking the given keys in order.
    ///
    /// Nothing is read until [`parse`](Self::parse) is called; the key set
    /// is fixed from here on.
    pub fn new<P, I>(path: P, keys: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        DesktopEntry {
            path: path.into(),
            table: EntryTable::new(keys),
        }
    }

    /// The file this handle was created for.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying entry table.
    pub fn table(&self) -> &EntryTable {
        &self.table
    }

    /// Reads and parses the file, resolving translations against the
    /// process-wide locale (`LC_ALL`/`LC_MESSAGES`/`LANG`).
    ///
    /// Returns `Ok(true)` iff at least one unqualified `KEY=VALUE` line
    /// matched a tracked key; an unreadable file is the only hard error.
    pub fn parse(&mut self) -> Result<bool, Error> {
        let current = locale::current_locale();
        self.parse_with_locale(current.as_deref())
    }

    /// Like [`parse`](Self::parse), but with an explicit current locale.
    ///
    /// Passing `None` disables translation matching entirely.
    pub fn parse_with_locale(&mut self, current_locale: Option<&str>) -> Result<bool, Error> {
        let file = File::open(&self.path)?;

        // BOM-aware decode so UTF-16 files coming out of foreign editors
        // still parse; plain UTF-8 passes through untouched.
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);
        let mut text = String::new();
        decoder.read_to_string(&mut text)?;

        Ok(self.parse_str(&text, current_locale))
    }

    /// Parses desktop entry text already held in memory.
    ///
    /// For each tracked key, unqualified lines overwrite the untranslated
    /// value (last writer wins), and locale-qualified lines overwrite the
    /// translated value only when they score strictly better against
    /// `current_locale` than any earlier qualified line for that same key.
    /// When `current_locale` is `None`, qualified lines are skipped. Section
    /// headers apply to every subsequently matched key until the next header.
    pub fn parse_str(&mut self, text: &str, current_locale: Option<&str>) -> bool {
        let mut current_section: Option<&str> = None;
        // Best locale score seen so far, tracked per key within this pass.
        let mut best_match = vec![0u8; self.table.len()];
        let mut matched = false;

        for raw in text.split('\n') {
            match line::tokenize(raw) {
                Line::Ignore => {}
                Line::Section(name) => current_section = Some(name),
                Line::Entry { key, locale, value } => {
                    let Some(index) = self.table.position(key) else {
                        continue;
                    };
                    let entry = self.table.entry_mut(index);

                    match (current_locale, locale) {
                        (Some(current), Some(tag)) => {
                            let level = locale::match_level(current, tag);
                            if level > best_match[index] {
                                best_match[index] = level;
                                entry.translated_value = Some(value.to_string());
                            }
                        }
                        (None, Some(_)) => {
                            // Unknown runtime locale: qualified lines never
                            // populate anything.
                        }
                        (_, None) => {
                            entry.value = Some(value.to_string());
                            matched = true;
                        }
                    }

                    if let Some(section) = current_section {
                        entry.section = Some(section.to_string());
                    }
                }
            }
        }

        matched
    }

    /// See [`EntryTable::get_string`].
    pub fn get_string(&self, key: &str, translated: bool) -> Option<&str> {
        self.table.get_string(key, translated)
    }

    /// See [`EntryTable::get_int`].
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.table.get_int(key)
    }

    /// Immutable view over the tracked entries, in construction order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.table.entries().iter()
    }
}

impl Display for DesktopEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{}]", self.path.display())?;
        for entry in self.table.entries() {
            writeln!(f, "{}", entry)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
