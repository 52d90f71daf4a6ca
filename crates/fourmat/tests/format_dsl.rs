/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use fourmat::{emit, Flags, Handle, Style};

#[test]
fn test_empty_format_string() {
    let mut h = Handle::to_memory(Style::Json, Flags::NONE);
    let written = emit!(h, "").unwrap();
    assert_eq!(written, 0);
    assert_eq!(h.memory().unwrap(), b"");
}

#[test]
fn test_zero_length_value_name() {
    let json = capture(Style::Json, Flags::NONE, |h| {
        emit!(h, "{:}", "").unwrap();
    });
    assert_eq!(json, "\"\":\"\"");

    let text = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "{:}", "").unwrap();
    });
    assert_eq!(text, "");
}

#[test]
fn test_escaped_braces() {
    let out = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "a{{b}}c").unwrap();
    });
    assert_eq!(out, "a{b}c");
}

#[test]
fn test_escaped_braces_shield_directives() {
    let out = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "{{:not-a-field}}").unwrap();
    });
    assert_eq!(out, "{:not-a-field}");
}

#[test]
fn test_trailing_open_escape() {
    let out = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "x{{").unwrap();
    });
    assert_eq!(out, "x{");
}

#[test]
fn test_unterminated_directive() {
    let text = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "{:name", "v").unwrap();
    });
    assert_eq!(text, "v");

    let json = capture(Style::Json, Flags::NONE, |h| {
        emit!(h, "{:name", "v").unwrap();
    });
    assert_eq!(json, "\"name\":\"v\"");
}

#[test]
fn test_colon_and_whitespace_modifiers() {
    let out = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "{LWC:In stock}{:in-stock/%u}\n", 4u32).unwrap();
    });
    assert_eq!(out, "In stock: 4\n");
}

#[test]
fn test_later_role_modifier_wins() {
    let out = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "{TL:plain}").unwrap();
    });
    // The L wins over the T, so the content goes out as a label.
    assert_eq!(out, "plain");
}

#[test]
fn test_hidden_field_text_and_html() {
    let text = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "{H:secret/%d}{:shown/%s}", 42, "x").unwrap();
    });
    assert_eq!(text, "x");

    let html = capture(Style::Html, Flags::NONE, |h| {
        emit!(h, "{H:secret/%d}{:shown/%s}", 42, "x").unwrap();
    });
    assert!(!html.contains("secret"), "hidden field leaked: {html}");
    assert!(html.contains(">x</div>"), "visible field lost: {html}");
}

#[test]
fn test_hidden_field_keeps_encodings_identical() {
    for style in [Style::Json, Style::Xml] {
        let hidden = capture(style, Flags::NONE, |h| {
            emit!(h, "{H:a/%d}{:b/%s}", 1, "x").unwrap();
        });
        let plain = capture(style, Flags::NONE, |h| {
            emit!(h, "{:a/%d}{:b/%s}", 1, "x").unwrap();
        });
        assert_eq!(hidden, plain);
    }
}

#[test]
fn test_literal_percent_survives() {
    let out = capture(Style::Text, Flags::NONE, |h| {
        emit!(h, "100% of {:what/%s}", "sales").unwrap();
    });
    assert_eq!(out, "100% of sales");
}

#[test]
fn test_formatter_hook_rewrites_directive() {
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.set_formatter(Box::new(|body| {
            (body == ":name/%s").then(|| ":alias/%s".to_string())
        }));
        emit!(h, "{:name/%s}", "gum").unwrap();
    });
    // The hook saw the raw body and substituted a different field name;
    // the format string after the rewrite is the parsed one.
    assert_eq!(out, "\"alias\":\"gum\"");
}

#[test]
fn test_newlines_ignored_in_encoding_styles() {
    let json = capture(Style::Json, Flags::NONE, |h| {
        emit!(h, "{:a/%u}\n", 1u32).unwrap();
    });
    assert_eq!(json, "\"a\":1");
}
