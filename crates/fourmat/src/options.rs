/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Environment configuration.
//!
//! The default handle reads `FOURMAT_OPTIONS` when it is first used.
//! Tokens are single characters applied left to right; `i` consumes
//! the decimal digits that follow it.

use crate::handle::Handle;
use crate::{Flags, Style};

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct EnvOptions {
    pub style: Option<Style>,
    pub flags: Flags,
    pub indent_by: Option<usize>,
}

pub(crate) fn parse(tokens: &str) -> EnvOptions {
    let mut opts = EnvOptions::default();
    let mut rest = tokens;

    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            'H' => opts.style = Some(Style::Html),
            'J' => opts.style = Some(Style::Json),
            'T' => opts.style = Some(Style::Text),
            'X' => opts.style = Some(Style::Xml),
            'P' => opts.flags.insert(Flags::PRETTY),
            'W' => opts.flags.insert(Flags::WARN),
            'I' => opts.flags.insert(Flags::INFO),
            'x' => opts.flags.insert(Flags::XPATH),
            'i' => {
                let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
                if digits > 0 {
                    opts.indent_by = rest[..digits].parse().ok();
                    rest = &rest[digits..];
                }
            }
            _ => {}
        }
    }

    opts
}

pub(crate) fn apply(handle: &mut Handle, tokens: &str) {
    let opts = parse(tokens);
    if let Some(style) = opts.style {
        handle.set_style(style);
    }
    handle.set_flags(opts.flags);
    if let Some(spaces) = opts.indent_by {
        handle.set_indent_by(spaces);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_tokens() {
        assert_eq!(parse("J").style, Some(Style::Json));
        assert_eq!(parse("X").style, Some(Style::Xml));
        assert_eq!(parse("H").style, Some(Style::Html));
        assert_eq!(parse("T").style, Some(Style::Text));
    }

    #[test]
    fn test_last_style_wins() {
        assert_eq!(parse("JX").style, Some(Style::Xml));
    }

    #[test]
    fn test_flag_tokens() {
        let opts = parse("PWx");
        assert!(opts.flags.contains(Flags::PRETTY));
        assert!(opts.flags.contains(Flags::WARN));
        assert!(opts.flags.contains(Flags::XPATH));
        assert!(!opts.flags.contains(Flags::INFO));
    }

    #[test]
    fn test_indent_consumes_digits() {
        let opts = parse("Pi4W");
        assert_eq!(opts.indent_by, Some(4));
        assert!(opts.flags.contains(Flags::WARN));
    }

    #[test]
    fn test_indent_without_digits() {
        assert_eq!(parse("i").indent_by, None);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let opts = parse("?JZ");
        assert_eq!(opts.style, Some(Style::Json));
    }
}
