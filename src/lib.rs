#![forbid(unsafe_code)]
//! Locale-aware reader for freedesktop desktop entry files.
//!
//! Desktop entry files are INI-like: `[Section]` headers, `KEY=VALUE` lines,
//! and locale-qualified `KEY[LOCALE]=VALUE` lines. This crate parses one file
//! into a table of caller-declared keys, resolving for each key the
//! untranslated value and the best translation for the current locale, then
//! exposes typed accessors over the result.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use deskentry::DesktopEntry;
//!
//! let mut entry = DesktopEntry::new(
//!     "/usr/share/applications/editor.desktop",
//!     ["Name", "Exec", "Icon"],
//! );
//! entry.parse()?;
//!
//! let name = entry.get_string("Name", true);
//! let exec = entry.get_string("Exec", false);
//! # Ok::<(), deskentry::Error>(())
//! ```
//!
//! # Behavior notes
//!
//! - Only keys declared at construction are tracked; everything else in the
//!   document is ignored without error.
//! - Locale matching strips the rightmost qualifier of the current locale
//!   step by step (`LANG_COUNTRY.ENCODING@MODIFIER`); it is a simplified
//!   approximation of the freedesktop.org scheme, not full BCP-47 matching.
//! - This is a read-only parser; there is no write or serialize-back support.

pub mod error;
pub mod line;
pub mod locale;
pub mod parser;
pub mod table;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    line::Line,
    parser::DesktopEntry,
    table::{Entry, EntryTable},
};
