/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use fourmat::{emit, Flags, Handle, Style};

#[test]
fn test_sequential_top_level_containers() {
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.open_container("a").unwrap();
        h.close_container("a").unwrap();
        h.open_container("b").unwrap();
        h.close_container("b").unwrap();
    });
    let value: serde_json::Value = serde_json::from_str(&format!("{{{}}}", out)).unwrap();
    assert_eq!(value, serde_json::json!({"a": {}, "b": {}}));
}

#[test]
fn test_container_and_value_siblings() {
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.open_container("top").unwrap();
        emit!(h, "{:first/%u}", 1u32).unwrap();
        emit!(h, "{:second/%u}", 2u32).unwrap();
        h.close_container("top").unwrap();
    });
    let value: serde_json::Value = serde_json::from_str(&format!("{{{}}}", out)).unwrap();
    assert_eq!(value, serde_json::json!({"top": {"first": 1, "second": 2}}));
}

#[test]
fn test_balanced_nesting_returns_to_ground() {
    // After a balanced sequence the root sequence state is the only
    // thing left: a following top-level container is a plain sibling.
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.open_container("outer").unwrap();
        h.open_container("inner").unwrap();
        h.close_container("inner").unwrap();
        h.close_container("outer").unwrap();
        h.open_container("next").unwrap();
        h.close_container("next").unwrap();
    });
    let value: serde_json::Value = serde_json::from_str(&format!("{{{}}}", out)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"outer": {"inner": {}}, "next": {}})
    );
}

#[test]
fn test_deep_nesting_beyond_stack_limit() {
    // Opens past the depth bound are skipped, closes unwind back; no
    // panic either way.
    let mut h = Handle::to_memory(Style::Text, Flags::NONE);
    for _ in 0..600 {
        h.open_container("deep").unwrap();
    }
    for _ in 0..600 {
        h.close_container("deep").unwrap();
    }
    assert_eq!(h.memory().unwrap(), b"");
}

#[test]
fn test_close_on_empty_stack_is_not_fatal() {
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.close_container("phantom").unwrap();
        h.open_container("real").unwrap();
        h.close_container("real").unwrap();
    });
    // The stray close emits its token and the handle keeps working.
    assert!(out.ends_with("\"real\": {}\n"), "unexpected output: {out}");
}

#[test]
fn test_empty_list_in_json() {
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.open_container("top").unwrap();
        h.open_list("item").unwrap();
        h.close_list("item").unwrap();
        h.close_container("top").unwrap();
    });
    let value: serde_json::Value = serde_json::from_str(&format!("{{{}}}", out)).unwrap();
    assert_eq!(value, serde_json::json!({"top": {"item": []}}));
}

#[test]
fn test_list_is_inert_outside_json() {
    let out = capture(Style::Xml, Flags::NONE, |h| {
        h.open_list("item").unwrap();
        h.close_list("item").unwrap();
    });
    assert_eq!(out, "");
}

#[test]
fn test_values_after_list() {
    let out = capture(Style::Json, Flags::NONE, |h| {
        h.open_container("top").unwrap();
        h.open_list("item").unwrap();
        h.open_instance("item").unwrap();
        emit!(h, "{:name/%s}", "gum").unwrap();
        h.close_instance("item").unwrap();
        h.close_list("item").unwrap();
        emit!(h, "{:count/%u}", 1u32).unwrap();
        h.close_container("top").unwrap();
    });
    let value: serde_json::Value = serde_json::from_str(&format!("{{{}}}", out)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"top": {"item": [{"name": "gum"}], "count": 1}})
    );
}

#[test]
fn test_hierarchy_warnings_do_not_change_output() {
    let build = |h: &mut Handle| {
        h.open_container("top").unwrap();
        h.open_list("item").unwrap();
        h.open_instance("item").unwrap();
        // Deliberate misuse: instance closed as a container.
        h.close_container("item").unwrap();
        h.close_list("item").unwrap();
        h.close_container("top").unwrap();
    };
    let with_warn = capture(Style::Json, Flags::WARN, build);
    let without = capture(Style::Json, Flags::NONE, build);
    assert_eq!(with_warn, without);
}
