/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field rendering: role dispatch plus one module per output style.
//!
//! Every renderer appends to the handle's template buffer; actual
//! argument substitution happens once, after the whole format string
//! has been scanned. That means conversion specifiers must land in the
//! template in exactly the order the caller's arguments arrive.

mod html;
mod json;
mod text;
mod xml;

pub(crate) use html::DivBody;

use fourmat_printf::{conversion_count, Arg};

use crate::directive::{Directive, Role};
use crate::handle::Handle;
use crate::Style;

impl Handle {
    pub(crate) fn render_field(&mut self, directive: &Directive<'_>) {
        match directive.role {
            Role::Title => self.field_title(directive.content, directive.print_format()),
            Role::Label => self.field_label(directive.content),
            Role::Value => self.field_value(directive),
            Role::Decoration => self.field_decoration(directive.content),
            Role::Padding => self.field_padding(directive.content),
        }
        if directive.flags.colon {
            self.field_decoration(":");
        }
        if directive.flags.ws {
            self.field_padding(" ");
        }
    }

    /// Literal text between directives.
    pub(crate) fn field_text(&mut self, s: &str) {
        match self.style {
            Style::Text => self.text_literal(s),
            Style::Html => self.append_div("text", None, DivBody::Literal(s)),
            Style::Xml | Style::Json => {}
        }
    }

    fn field_label(&mut self, s: &str) {
        match self.style {
            Style::Text => self.text_literal(s),
            Style::Html => self.append_div("label", None, DivBody::Literal(s)),
            Style::Xml | Style::Json => {}
        }
    }

    fn field_decoration(&mut self, s: &str) {
        match self.style {
            Style::Text => self.text_literal(s),
            Style::Html => self.append_div("decoration", None, DivBody::Literal(s)),
            Style::Xml | Style::Json => {}
        }
    }

    fn field_padding(&mut self, s: &str) {
        match self.style {
            Style::Text => self.text_literal(s),
            Style::Html => self.append_div("padding", None, DivBody::Literal(s)),
            Style::Xml | Style::Json => {}
        }
    }

    /// Titles format their content immediately — the print format
    /// applies to the content itself, not to a caller argument.
    fn field_title(&mut self, content: &str, print_format: &str) {
        if self.style != Style::Text && self.style != Style::Html {
            return;
        }
        let rendered = fourmat_printf::format(print_format, &[Arg::from(content)])
            .unwrap_or_else(|_| content.to_string());
        match self.style {
            Style::Text => self.text_literal(&rendered),
            Style::Html => self.append_div("title", None, DivBody::Literal(&rendered)),
            Style::Xml | Style::Json => {}
        }
    }

    fn field_value(&mut self, directive: &Directive<'_>) {
        match self.style {
            Style::Text => {
                if directive.flags.hide {
                    self.suppress_conversions(directive.print_format());
                } else {
                    self.fmt.push_str(directive.print_format());
                }
            }
            Style::Html => {
                if directive.flags.hide {
                    self.suppress_conversions(directive.print_format());
                } else {
                    self.append_div(
                        "data",
                        Some(directive.content),
                        DivBody::Format(directive.print_format()),
                    );
                }
            }
            Style::Xml => self.xml_value(directive),
            Style::Json => self.json_value(directive),
        }
    }

    /// A hidden field still owns its arguments. Each conversion it
    /// would have consumed becomes a `%.0s`, which takes an argument
    /// and emits nothing, so later fields stay aligned.
    fn suppress_conversions(&mut self, format: &str) {
        for _ in 0..conversion_count(format) {
            self.fmt.push_str("%.0s");
        }
    }
}
