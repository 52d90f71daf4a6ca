/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Format-directive parsing.
//!
//! A directive is the body of one brace construct:
//!
//! ```text
//! directive := modifiers [ ':' content ] [ '/' print-format [ '/' encode-format ] ]
//! modifiers := { 'T' | 'V' | 'L' | 'D' | 'P' | 'C' | 'W' | 'H' | 'Q' | 'N' }
//! ```
//!
//! Parsing is deliberately permissive: a later role modifier replaces
//! an earlier one, unknown modifier bytes are skipped, and a directive
//! cut short by the end of the format string is taken as complete.
//! Anything questionable is recorded as an anomaly for the driver to
//! report instead of failing the emit.

use winnow::combinator::{opt, preceded};
use winnow::token::rest;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// The semantic role of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Role {
    /// A data value; the default when no role modifier appears.
    #[default]
    Value,
    /// A column or section heading.
    Title,
    /// Text surrounding data.
    Label,
    /// Non-text, non-data output such as colons and commas.
    Decoration,
    /// Whitespace.
    Padding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FieldFlags {
    /// Emit a ":" decoration after the field.
    pub colon: bool,
    /// Emit a " " padding after the field.
    pub ws: bool,
    /// Suppress the field in text and HTML output.
    pub hide: bool,
    /// Force JSON quoting.
    pub quote: bool,
    /// Force JSON non-quoting.
    pub noquote: bool,
}

/// Something worth a diagnostic, collected rather than printed so the
/// parser stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anomaly {
    DuplicateRole(char),
    UnknownModifier(char),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Directive<'a> {
    pub role: Role,
    pub flags: FieldFlags,
    pub content: &'a str,
    print: Option<&'a str>,
    encoding: Option<&'a str>,
    pub anomalies: Vec<Anomaly>,
}

impl<'a> Directive<'a> {
    /// The printf-style format for text and HTML rendering.
    pub fn print_format(&self) -> &'a str {
        self.print.unwrap_or("%s")
    }

    /// The printf-style format for XML and JSON rendering; falls back
    /// to the print format.
    pub fn encode_format(&self) -> &'a str {
        self.encoding.unwrap_or_else(|| self.print_format())
    }
}

/// Parses one directive body (the bytes between `{` and `}`).
pub(crate) fn parse(body: &str) -> Directive<'_> {
    let mut input = body;
    parse_inner(&mut input).unwrap_or(Directive {
        role: Role::Value,
        flags: FieldFlags::default(),
        content: "",
        print: None,
        encoding: None,
        anomalies: Vec::new(),
    })
}

fn parse_inner<'a>(input: &mut &'a str) -> Result<Directive<'a>, ErrMode<ContextError>> {
    let modifiers = take_while(0.., |c| c != ':' && c != '/').parse_next(input)?;
    let content = opt(preceded(':', take_while(0.., |c| c != '/'))).parse_next(input)?;
    let print = opt(preceded('/', take_while(0.., |c| c != '/'))).parse_next(input)?;
    let encoding = opt(preceded('/', rest)).parse_next(input)?;

    let mut role: Option<Role> = None;
    let mut flags = FieldFlags::default();
    let mut anomalies = Vec::new();

    for c in modifiers.chars() {
        match c {
            'T' | 'V' | 'L' | 'D' | 'P' => {
                if role.is_some() {
                    anomalies.push(Anomaly::DuplicateRole(c));
                }
                role = Some(match c {
                    'T' => Role::Title,
                    'L' => Role::Label,
                    'D' => Role::Decoration,
                    'P' => Role::Padding,
                    _ => Role::Value,
                });
            }
            'C' => flags.colon = true,
            'W' => flags.ws = true,
            'H' => flags.hide = true,
            'Q' => flags.quote = true,
            'N' => flags.noquote = true,
            other => anomalies.push(Anomaly::UnknownModifier(other)),
        }
    }

    Ok(Directive {
        role: role.unwrap_or_default(),
        flags,
        content: content.unwrap_or(""),
        print: print.filter(|s| !s.is_empty()),
        encoding: encoding.filter(|s| !s.is_empty()),
        anomalies,
    })
}
