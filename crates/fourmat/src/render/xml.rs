/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! XML rendering: one element pair per value field.

use crate::directive::Directive;
use crate::escape::xml_escape;
use crate::handle::Handle;

impl Handle {
    pub(crate) fn xml_value(&mut self, directive: &Directive<'_>) {
        let format = directive.encode_format();
        let name = xml_escape(directive.content);

        if self.pretty() {
            let indent = self.indent_spaces();
            self.fmt.push_indent(indent);
        }
        self.fmt.push('<');
        self.fmt.push_protected(&name);
        self.fmt.push('>');
        self.fmt.push_str(format);
        self.fmt.push_str("</");
        self.fmt.push_protected(&name);
        self.fmt.push('>');
        if self.pretty() {
            self.fmt.push('\n');
        }
    }
}
