/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML rendering: line divs, field divs, and their annotations.
//!
//! Every piece of output sits inside a `<div class="line">`, opened
//! lazily on first content and closed by a newline in the format
//! string. Field divs carry `data-tag`, and optionally `data-xpath`
//! (ancestor names from the hierarchy stack) and `data-type` /
//! `data-help` (from the registered info table).

use crate::escape::xml_escape;
use crate::handle::Handle;
use crate::info;
use crate::{Flags, Style};

/// How a div's contents enter the template.
pub(crate) enum DivBody<'a> {
    /// Literal text: escaped and percent-protected.
    Literal(&'a str),
    /// A printf format whose conversions must survive verbatim.
    Format(&'a str),
}

impl Handle {
    pub(crate) fn line_ensure_open(&mut self) {
        if self.div_open || self.style != Style::Html {
            return;
        }
        self.div_open = true;
        self.fmt.push_str("<div class=\"line\">");
        if self.pretty() {
            self.fmt.push('\n');
        }
    }

    /// Ends the current line: closes the line div in HTML, emits a
    /// newline in text, and is inert in the encoding styles.
    pub(crate) fn line_close(&mut self) {
        match self.style {
            Style::Html => {
                if !self.div_open {
                    self.line_ensure_open();
                }
                self.div_open = false;
                self.fmt.push_str("</div>");
                if self.pretty() {
                    self.fmt.push('\n');
                }
            }
            Style::Text => self.fmt.push('\n'),
            Style::Xml | Style::Json => {}
        }
    }

    pub(crate) fn append_div(&mut self, class: &str, name: Option<&str>, body: DivBody<'_>) {
        self.line_ensure_open();
        if self.pretty() {
            let step = self.indent_by;
            self.fmt.push_indent(step);
        }

        self.fmt.push_str("<div class=\"");
        self.fmt.push_str(class);
        self.fmt.push('"');

        if let Some(name) = name {
            self.fmt.push_str(" data-tag=\"");
            self.fmt.push_protected(&xml_escape(name));
            self.fmt.push('"');

            if self.flags.contains(Flags::XPATH) {
                self.fmt.push_str(" data-xpath=\"");
                for ancestor in self.stack.names() {
                    self.fmt.push('/');
                    self.fmt.push_protected(&xml_escape(ancestor));
                }
                self.fmt.push('/');
                self.fmt.push_protected(&xml_escape(name));
                self.fmt.push('"');
            }

            if self.flags.contains(Flags::INFO) && !self.info.is_empty() {
                if let Some(entry) = info::find(&self.info, name) {
                    if let Some(ty) = entry.r#type.as_deref() {
                        self.fmt.push_str(" data-type=\"");
                        self.fmt.push_protected(&xml_escape(ty));
                        self.fmt.push('"');
                    }
                    if let Some(help) = entry.help.as_deref() {
                        self.fmt.push_str(" data-help=\"");
                        self.fmt.push_protected(&xml_escape(help));
                        self.fmt.push('"');
                    }
                }
            }
        }

        self.fmt.push('>');
        match body {
            DivBody::Literal(s) => self.fmt.push_protected(&xml_escape(s)),
            DivBody::Format(format) => self.fmt.push_str(format),
        }
        self.fmt.push_str("</div>");
        if self.pretty() {
            self.fmt.push('\n');
        }
    }
}
