/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Handle lifecycle and configuration.

use std::io::{self, Write};

use crate::buffer::OutBuf;
use crate::error::Result;
use crate::info::Info;
use crate::options;
use crate::stack::Stack;
use crate::{Flags, Style};

/// Default indent step when pretty printing.
const INDENT_BY: usize = 2;

/// Per-directive rewrite hook. Receives the raw directive body (the
/// bytes between the braces); returning `Some` replaces the body
/// before parsing.
pub type Formatter = Box<dyn FnMut(&str) -> Option<String> + Send>;

/// Where rendered bytes go.
pub enum Sink {
    /// The process standard output.
    Stdout,
    /// Any writer: a file, a pipe, or a user callback expressed as an
    /// [`io::Write`] implementation. Closed when the handle drops.
    Writer(Box<dyn Write + Send>),
    /// An in-memory capture, readable via [`Handle::memory`].
    Memory(Vec<u8>),
}

impl Sink {
    pub(crate) fn write_str(&mut self, s: &str) -> io::Result<usize> {
        match self {
            Sink::Stdout => io::stdout().lock().write_all(s.as_bytes())?,
            Sink::Writer(writer) => writer.write_all(s.as_bytes())?,
            Sink::Memory(buf) => buf.extend_from_slice(s.as_bytes()),
        }
        Ok(s.len())
    }

    fn memory(&self) -> Option<&[u8]> {
        match self {
            Sink::Memory(buf) => Some(buf),
            _ => None,
        }
    }
}

/// The principal state store: style, flags, hierarchy stack, buffers,
/// and output plumbing for one stream of emit calls.
pub struct Handle {
    pub(crate) style: Style,
    pub(crate) flags: Flags,
    /// Nesting level, in indent steps.
    pub(crate) indent: usize,
    /// Spaces per indent step.
    pub(crate) indent_by: usize,
    pub(crate) stack: Stack,
    /// The composite format template being built this call.
    pub(crate) fmt: OutBuf,
    /// Rendered bytes staged for the sink.
    pub(crate) data: OutBuf,
    pub(crate) info: Vec<Info>,
    pub(crate) formatter: Option<Formatter>,
    pub(crate) sink: Sink,
    /// An HTML line div is currently open.
    pub(crate) div_open: bool,
}

impl Handle {
    /// A handle writing to standard output.
    pub fn new(style: Style, flags: Flags) -> Self {
        Self::with_sink(Sink::Stdout, style, flags)
    }

    /// A handle writing to the given writer.
    pub fn with_writer(writer: Box<dyn Write + Send>, style: Style, flags: Flags) -> Self {
        Self::with_sink(Sink::Writer(writer), style, flags)
    }

    /// A handle capturing output in memory; see [`Handle::memory`].
    pub fn to_memory(style: Style, flags: Flags) -> Self {
        Self::with_sink(Sink::Memory(Vec::new()), style, flags)
    }

    pub fn with_sink(sink: Sink, style: Style, flags: Flags) -> Self {
        Handle {
            style,
            flags,
            indent: 0,
            indent_by: INDENT_BY,
            stack: Stack::new(),
            fmt: OutBuf::new(),
            data: OutBuf::new(),
            info: Vec::new(),
            formatter: None,
            sink,
            div_open: false,
        }
    }

    /// The default handle's construction path: text to stdout, then
    /// whatever `FOURMAT_OPTIONS` says.
    pub(crate) fn from_env() -> Self {
        let mut handle = Handle::new(Style::Text, Flags::NONE);
        if let Ok(value) = std::env::var("FOURMAT_OPTIONS") {
            options::apply(&mut handle, &value);
        }
        handle
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Changes the output style for future output.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Sets one or more flags for future output.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags.insert(flags);
    }

    /// Clears one or more flags for future output.
    pub fn clear_flags(&mut self, flags: Flags) {
        self.flags.remove(flags);
    }

    pub fn set_indent_by(&mut self, spaces: usize) {
        self.indent_by = spaces;
    }

    /// Records field metadata for HTML info attributes. The table is
    /// sorted by name here; lookups are binary search.
    pub fn set_info(&mut self, mut table: Vec<Info>) {
        table.sort_by(|a, b| a.name.cmp(&b.name));
        self.info = table;
    }

    pub fn set_formatter(&mut self, hook: Formatter) {
        self.formatter = Some(hook);
    }

    /// Redirects future output to the given writer.
    pub fn set_writer(&mut self, writer: Box<dyn Write + Send>) {
        self.sink = Sink::Writer(writer);
    }

    pub fn set_sink(&mut self, sink: Sink) {
        self.sink = sink;
    }

    /// The captured bytes of a memory sink.
    pub fn memory(&self) -> Option<&[u8]> {
        self.sink.memory()
    }

    pub(crate) fn pretty(&self) -> bool {
        self.flags.contains(Flags::PRETTY)
    }

    /// Spaces to indent at the current level; zero unless pretty.
    pub(crate) fn indent_spaces(&self) -> usize {
        if self.pretty() {
            self.indent * self.indent_by
        } else {
            0
        }
    }

    /// A single newline-terminated diagnostic on standard error,
    /// gated by the WARN flag.
    pub(crate) fn warn(&self, message: &str) {
        if self.flags.contains(Flags::WARN) {
            eprintln!("{}", message);
        }
    }

    /// Flushes the staged data buffer through the sink.
    pub(crate) fn flush_data(&mut self) -> Result<usize> {
        let written = self.sink.write_str(self.data.as_str())?;
        Ok(written)
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if let Sink::Writer(writer) = &mut self.sink {
            let _ = writer.flush();
        }
    }
}
