/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The emit driver.
//!
//! One pass over the format string builds a composite template in the
//! handle's template buffer: literal text (percent-protected), field
//! tokens from the style renderers, and the caller's conversion
//! specifiers in argument order. A single substitution pass then
//! renders the template and the result is flushed through the sink.

use fourmat_printf::Arg;

use crate::directive::{self, Anomaly, Directive};
use crate::error::Result;
use crate::handle::Handle;

impl Handle {
    /// Renders one format string with its arguments.
    ///
    /// Returns the number of bytes written to the sink.
    pub fn emit(&mut self, fmt: &str, args: &[Arg]) -> Result<usize> {
        self.fmt.reset();

        let mut rest = fmt;
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix('\n') {
                self.line_close();
                rest = tail;
                continue;
            }

            if let Some(tail) = rest.strip_prefix("{{") {
                // Escaped braces: `{{` is a literal `{`, `}}` a literal
                // `}`, and the body between them is literal text.
                match tail.find("}}") {
                    Some(at) => {
                        let literal = format!("{{{}}}", &tail[..at]);
                        self.field_text(&literal);
                        rest = &tail[at + 2..];
                    }
                    None => {
                        let literal = format!("{{{}", tail);
                        self.field_text(&literal);
                        rest = "";
                    }
                }
                continue;
            }

            if let Some(tail) = rest.strip_prefix('{') {
                // A directive missing its `}` terminates at the end of
                // the string.
                let (body, after) = match tail.find('}') {
                    Some(at) => (&tail[..at], &tail[at + 1..]),
                    None => (tail, ""),
                };
                let replaced = match self.formatter.as_mut() {
                    Some(hook) => hook(body),
                    None => None,
                };
                let parsed = directive::parse(replaced.as_deref().unwrap_or(body));
                self.report_anomalies(&parsed, fmt);
                self.render_field(&parsed);
                rest = after;
                continue;
            }

            let end = rest.find(['{', '\n']).unwrap_or(rest.len());
            self.field_text(&rest[..end]);
            rest = &rest[end..];
        }

        let rendered = fourmat_printf::format(self.fmt.as_str(), args)?;
        self.data.reset();
        self.data.push_str(&rendered);
        self.flush_data()
    }

    fn report_anomalies(&self, directive: &Directive<'_>, fmt: &str) {
        for anomaly in &directive.anomalies {
            match anomaly {
                Anomaly::DuplicateRole(c) => {
                    self.warn(&format!(
                        "format string uses multiple role modifiers ('{}'): {}",
                        c, fmt
                    ));
                }
                Anomaly::UnknownModifier(c) => {
                    self.warn(&format!(
                        "format string uses unknown modifier '{}': {}",
                        c, fmt
                    ));
                }
            }
        }
    }
}
