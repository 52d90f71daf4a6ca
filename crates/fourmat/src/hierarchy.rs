/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Hierarchy operations: containers, lists, and list instances.
//!
//! Unlike field rendering, these write at sink-flush granularity: each
//! open or close formats its tokens into the data buffer and flushes
//! immediately. Containers and instances are XML elements and JSON
//! objects; lists exist only in JSON, as arrays. Text and HTML track
//! the hierarchy on the stack (for XPath and diagnostics) without
//! producing output.

use std::fmt::Write as _;

use crate::error::Result;
use crate::escape::{json_escape, xml_escape};
use crate::handle::Handle;
use crate::stack::{Frame, FrameFlags, MAX_DEPTH};
use crate::{Flags, Style};

impl Handle {
    pub fn open_container(&mut self, name: &str) -> Result<usize> {
        if !self.can_push(name) {
            return Ok(0);
        }
        match self.style {
            Style::Xml => {
                let ppn = if self.pretty() { "\n" } else { "" };
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{:indent$}<{}>{}", "", xml_escape(name), ppn);
                let written = self.flush_data()?;
                self.push_frame(name, FrameFlags::default(), true);
                Ok(written)
            }
            Style::Json => {
                let ppn = if self.pretty() { "\n" } else { "" };
                let pre = self.json_sibling_prefix();
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(
                    self.data,
                    "{}{:indent$}\"{}\": {{{}",
                    pre,
                    "",
                    json_escape(name),
                    ppn
                );
                let written = self.flush_data()?;
                self.push_frame(name, FrameFlags::default(), true);
                Ok(written)
            }
            Style::Text | Style::Html => {
                self.push_frame(name, FrameFlags::default(), false);
                Ok(0)
            }
        }
    }

    pub fn close_container(&mut self, name: &str) -> Result<usize> {
        match self.style {
            Style::Xml => {
                let ppn = if self.pretty() { "\n" } else { "" };
                self.pop_frame(name, FrameFlags::default(), true);
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{:indent$}</{}>{}", "", xml_escape(name), ppn);
                self.flush_data()
            }
            Style::Json => {
                let pre_nl = if self.pretty() { "\n" } else { "" };
                // A closing top-level container ends its output line.
                let ppn = if self.stack.depth() <= 1 { "\n" } else { "" };
                self.pop_frame(name, FrameFlags::default(), true);
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{}{:indent$}}}{}", pre_nl, "", ppn);
                let written = self.flush_data()?;
                self.stack.current_mut().flags.not_first = true;
                Ok(written)
            }
            Style::Text | Style::Html => {
                self.pop_frame(name, FrameFlags::default(), false);
                Ok(0)
            }
        }
    }

    /// Lists render only in JSON; every other style ignores them.
    pub fn open_list(&mut self, name: &str) -> Result<usize> {
        if self.style != Style::Json {
            return Ok(0);
        }
        if !self.can_push(name) {
            return Ok(0);
        }
        let ppn = if self.pretty() { "\n" } else { "" };
        let pre = self.json_sibling_prefix();
        let indent = self.indent_spaces();
        self.data.reset();
        let _ = write!(
            self.data,
            "{}{:indent$}\"{}\": [{}",
            pre,
            "",
            json_escape(name),
            ppn
        );
        let written = self.flush_data()?;
        self.push_frame(name, FrameFlags::LIST, true);
        Ok(written)
    }

    pub fn close_list(&mut self, name: &str) -> Result<usize> {
        if self.style != Style::Json {
            return Ok(0);
        }
        let pre_nl = if self.stack.current().flags.not_first && self.pretty() {
            "\n"
        } else {
            ""
        };
        self.pop_frame(name, FrameFlags::LIST, true);
        let indent = self.indent_spaces();
        self.data.reset();
        let _ = write!(self.data, "{}{:indent$}]", pre_nl, "");
        let written = self.flush_data()?;
        self.stack.current_mut().flags.not_first = true;
        Ok(written)
    }

    /// One record inside a list: an XML element named after the list,
    /// an unnamed JSON object (the enclosing array supplies context).
    pub fn open_instance(&mut self, name: &str) -> Result<usize> {
        if !self.can_push(name) {
            return Ok(0);
        }
        match self.style {
            Style::Xml => {
                let ppn = if self.pretty() { "\n" } else { "" };
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{:indent$}<{}>{}", "", xml_escape(name), ppn);
                let written = self.flush_data()?;
                self.push_frame(name, FrameFlags::INSTANCE, true);
                Ok(written)
            }
            Style::Json => {
                let ppn = if self.pretty() { "\n" } else { "" };
                let pre = self.json_sibling_prefix();
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{}{:indent$}{{{}", pre, "", ppn);
                let written = self.flush_data()?;
                self.push_frame(name, FrameFlags::INSTANCE, true);
                Ok(written)
            }
            Style::Text | Style::Html => {
                self.push_frame(name, FrameFlags::INSTANCE, false);
                Ok(0)
            }
        }
    }

    pub fn close_instance(&mut self, name: &str) -> Result<usize> {
        match self.style {
            Style::Xml => {
                let ppn = if self.pretty() { "\n" } else { "" };
                self.pop_frame(name, FrameFlags::INSTANCE, true);
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{:indent$}</{}>{}", "", xml_escape(name), ppn);
                self.flush_data()
            }
            Style::Json => {
                let pre_nl = if self.pretty() { "\n" } else { "" };
                self.pop_frame(name, FrameFlags::INSTANCE, true);
                let indent = self.indent_spaces();
                self.data.reset();
                let _ = write!(self.data, "{}{:indent$}}}", pre_nl, "");
                let written = self.flush_data()?;
                self.stack.current_mut().flags.not_first = true;
                Ok(written)
            }
            Style::Text | Style::Html => {
                self.pop_frame(name, FrameFlags::INSTANCE, false);
                Ok(0)
            }
        }
    }

    fn can_push(&self, name: &str) -> bool {
        if self.stack.depth() >= MAX_DEPTH {
            self.warn(&format!("fourmat: open exceeds stack depth: '{}'", name));
            return false;
        }
        true
    }

    /// The separator owed to an already-started sibling sequence; also
    /// marks the sequence as started.
    fn json_sibling_prefix(&mut self) -> &'static str {
        let pretty = self.pretty();
        let frame = self.stack.current_mut();
        if frame.flags.not_first {
            if pretty {
                ",\n"
            } else {
                ", "
            }
        } else {
            frame.flags.not_first = true;
            ""
        }
    }

    /// The single push point. Frame names are kept only when XPath or
    /// diagnostics need them.
    fn push_frame(&mut self, name: &str, flags: FrameFlags, indent: bool) {
        let keep_name =
            self.flags.contains(Flags::XPATH) || self.flags.contains(Flags::WARN);
        self.stack.push(Frame {
            flags,
            name: keep_name.then(|| name.to_string()),
        });
        if indent {
            self.indent += 1;
        }
    }

    /// The single pop point. Mismatches are diagnostics, never fatal;
    /// a close on an empty stack is skipped.
    fn pop_frame(&mut self, name: &str, flags: FrameFlags, indent: bool) {
        if self.stack.depth() == 0 {
            self.warn(&format!("fourmat: close with empty stack: '{}'", name));
            return;
        }
        if self.flags.contains(Flags::WARN) {
            let top = self.stack.current();
            if let Some(top_name) = top.name.as_deref() {
                if top_name != name {
                    self.warn(&format!(
                        "fourmat: incorrect close: '{}' vs '{}'",
                        name, top_name
                    ));
                }
            }
            if top.flags.list != flags.list {
                self.warn(&format!("fourmat: list close conflict: '{}'", name));
            }
            if top.flags.instance != flags.instance {
                self.warn(&format!("fourmat: instance close conflict: '{}'", name));
            }
            // Only JSON materializes list frames, so only there can an
            // instance close assert its enclosing list.
            if flags.instance && self.style == Style::Json {
                let in_list = self
                    .stack
                    .parent()
                    .map(|parent| parent.flags.list)
                    .unwrap_or(false);
                if !in_list {
                    self.warn(&format!(
                        "fourmat: instance close outside a list: '{}'",
                        name
                    ));
                }
            }
        }
        self.stack.pop();
        if indent {
            self.indent = self.indent.saturating_sub(1);
        }
    }
}
