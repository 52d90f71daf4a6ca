/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! JSON rendering: members with comma discipline and the quoting rule.

use crate::directive::Directive;
use crate::escape::json_escape;
use crate::handle::Handle;

impl Handle {
    pub(crate) fn json_value(&mut self, directive: &Directive<'_>) {
        let format = directive.encode_format();
        self.json_prep();

        // Quote iff forced, or unforced with a string conversion last.
        let quote = if directive.flags.quote {
            true
        } else if directive.flags.noquote {
            false
        } else {
            format.as_bytes().last() == Some(&b's')
        };

        if self.pretty() {
            let indent = self.indent_spaces();
            self.fmt.push_indent(indent);
        }
        self.fmt.push('"');
        self.fmt.push_protected(&json_escape(directive.content));
        self.fmt.push_str("\":");
        if self.pretty() {
            self.fmt.push(' ');
        }
        if quote {
            self.fmt.push('"');
        }
        self.fmt.push_str(format);
        if quote {
            self.fmt.push('"');
        }
    }

    /// Sibling separator discipline: the first member at a level flips
    /// `NOT_FIRST`; every later one gets a comma first.
    pub(crate) fn json_prep(&mut self) {
        let pretty = self.pretty();
        let frame = self.stack.current_mut();
        if frame.flags.not_first {
            self.fmt.push(',');
            if pretty {
                self.fmt.push('\n');
            }
        } else {
            frame.flags.not_first = true;
        }
    }
}
