/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! fourmat
//!
//! A multi-style structured output library. A program emits one stream
//! of print-like calls; fourmat renders it, per handle, in one of four
//! coordinated styles: plain text, XML, JSON, or HTML. Callers never
//! write style-specific code — they write format directives like
//! `{:name/%s}` and open and close containers, lists, and instances,
//! and the handle translates those into the selected rendering.
//!
//! # Example
//!
//! ```rust
//! use fourmat::{args, Flags, Handle, Style};
//!
//! let mut h = Handle::to_memory(Style::Json, Flags::NONE);
//! h.open_container("top").unwrap();
//! h.emit("{:name/%s}", &args!["gum"]).unwrap();
//! h.close_container("top").unwrap();
//!
//! let out = String::from_utf8(h.memory().unwrap().to_vec()).unwrap();
//! assert_eq!(out, "\"top\": {\"name\":\"gum\"}\n");
//! ```
//!
//! The same calls with `Style::Xml` produce `<top><name>gum</name></top>`,
//! with `Style::Text` just `gum`, and with `Style::Html` a sequence of
//! `<div>` elements carrying `data-tag` attributes.
//!
//! A process-wide default handle backs the module-level functions
//! ([`emit`], [`open_container`], …) for programs that don't want to
//! thread a handle around; it is created on first use, configured from
//! the `FOURMAT_OPTIONS` environment variable, and reset by [`destroy`].

use std::fmt;
use std::io::Write;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub mod error;

mod buffer;
mod directive;
mod emit;
mod escape;
mod handle;
mod hierarchy;
mod info;
mod macros;
mod options;
mod render;
mod stack;

pub use error::{EmitError, ParseStyleError, Result};
pub use fourmat_printf::Arg;
pub use handle::{Formatter, Handle, Sink};
pub use info::Info;

/// The output style of a handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Text,
    Xml,
    Json,
    Html,
}

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Style::Text),
            "xml" => Ok(Style::Xml),
            "json" => Ok(Style::Json),
            "html" => Ok(Style::Html),
            other => Err(ParseStyleError(other.to_string())),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Text => "text",
            Style::Xml => "xml",
            Style::Json => "json",
            Style::Html => "html",
        })
    }
}

/// Behavior flags, combinable with `|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Insert newlines and indentation.
    pub const PRETTY: Flags = Flags(1 << 0);
    /// Report stack and format-string misuse on standard error.
    pub const WARN: Flags = Flags(1 << 1);
    /// Reserved for XML-formatted diagnostics; currently inert.
    pub const WARN_XML: Flags = Flags(1 << 2);
    /// HTML only: annotate fields with a `data-xpath` attribute.
    pub const XPATH: Flags = Flags(1 << 3);
    /// HTML only: annotate fields with `data-type`/`data-help` from
    /// the registered info table.
    pub const INFO: Flags = Flags(1 << 4);

    pub fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// The process-wide default handle. Created lazily on first use,
/// destroyed by [`destroy`], re-created on the use after that.
static DEFAULT_HANDLE: Mutex<Option<Handle>> = Mutex::new(None);

fn with_default<T>(f: impl FnOnce(&mut Handle) -> T) -> T {
    let mut guard = DEFAULT_HANDLE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let handle = guard.get_or_insert_with(Handle::from_env);
    f(handle)
}

/// Emits one format string through the default handle.
pub fn emit(fmt: &str, args: &[Arg]) -> Result<usize> {
    with_default(|h| h.emit(fmt, args))
}

pub fn open_container(name: &str) -> Result<usize> {
    with_default(|h| h.open_container(name))
}

pub fn close_container(name: &str) -> Result<usize> {
    with_default(|h| h.close_container(name))
}

pub fn open_list(name: &str) -> Result<usize> {
    with_default(|h| h.open_list(name))
}

pub fn close_list(name: &str) -> Result<usize> {
    with_default(|h| h.close_list(name))
}

pub fn open_instance(name: &str) -> Result<usize> {
    with_default(|h| h.open_instance(name))
}

pub fn close_instance(name: &str) -> Result<usize> {
    with_default(|h| h.close_instance(name))
}

pub fn set_style(style: Style) {
    with_default(|h| h.set_style(style));
}

pub fn set_flags(flags: Flags) {
    with_default(|h| h.set_flags(flags));
}

pub fn clear_flags(flags: Flags) {
    with_default(|h| h.clear_flags(flags));
}

pub fn set_info(table: Vec<Info>) {
    with_default(|h| h.set_info(table));
}

pub fn set_formatter(hook: Formatter) {
    with_default(|h| h.set_formatter(hook));
}

pub fn set_writer(writer: Box<dyn Write + Send>) {
    with_default(|h| h.set_writer(writer));
}

pub fn set_indent_by(spaces: usize) {
    with_default(|h| h.set_indent_by(spaces));
}

/// Destroys the default handle. The next default-handle operation
/// starts over from an uninitialized state.
pub fn destroy() {
    let mut guard = DEFAULT_HANDLE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("json".parse::<Style>().unwrap(), Style::Json);
        assert!("yaml".parse::<Style>().is_err());
    }

    #[test]
    fn test_style_display_round_trip() {
        for style in [Style::Text, Style::Xml, Style::Json, Style::Html] {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn test_flags_compose() {
        let flags = Flags::PRETTY | Flags::WARN;
        assert!(flags.contains(Flags::PRETTY));
        assert!(flags.contains(Flags::WARN));
        assert!(!flags.contains(Flags::XPATH));
    }

    #[test]
    fn test_flags_insert_remove() {
        let mut flags = Flags::NONE;
        flags.insert(Flags::INFO);
        assert!(flags.contains(Flags::INFO));
        flags.remove(Flags::INFO);
        assert!(flags.is_empty());
    }
}
