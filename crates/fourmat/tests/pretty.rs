/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use fourmat::{emit, Flags, Handle, Style};

fn item_scenario(h: &mut Handle) {
    h.open_container("top").unwrap();
    h.open_container("data").unwrap();
    h.open_list("item").unwrap();

    h.open_instance("item").unwrap();
    emit!(h, "{:name/%s}", "gum").unwrap();
    h.close_instance("item").unwrap();

    h.open_instance("item").unwrap();
    emit!(h, "{:name/%s}", "rope").unwrap();
    h.close_instance("item").unwrap();

    h.close_list("item").unwrap();
    h.close_container("data").unwrap();
    h.close_container("top").unwrap();
}

#[test]
fn test_pretty_json_layout() {
    let out = capture(Style::Json, Flags::PRETTY, item_scenario);
    let expected = "\
\"top\": {
  \"data\": {
    \"item\": [
      {
        \"name\": \"gum\"
      },
      {
        \"name\": \"rope\"
      }
    ]
  }
}
";
    assert_eq!(out, expected);
}

#[test]
fn test_pretty_xml_layout() {
    let out = capture(Style::Xml, Flags::PRETTY, item_scenario);
    let expected = "\
<top>
  <data>
    <item>
      <name>gum</name>
    </item>
    <item>
      <name>rope</name>
    </item>
  </data>
</top>
";
    assert_eq!(out, expected);
}

#[test]
fn test_pretty_equals_plain_modulo_whitespace() {
    for style in [Style::Json, Style::Xml, Style::Html] {
        let pretty = capture(style, Flags::PRETTY, item_scenario);
        let plain = capture(style, Flags::NONE, item_scenario);
        assert_eq!(
            strip_whitespace(&pretty),
            strip_whitespace(&plain),
            "style {style}"
        );
    }
}

#[test]
fn test_indent_step_is_configurable() {
    let out = capture(Style::Xml, Flags::PRETTY, |h| {
        h.set_indent_by(4);
        h.open_container("top").unwrap();
        emit!(h, "{:name/%s}", "gum").unwrap();
        h.close_container("top").unwrap();
    });
    assert_eq!(out, "<top>\n    <name>gum</name>\n</top>\n");
}

#[test]
fn test_pretty_html_lines() {
    let out = capture(Style::Html, Flags::PRETTY, |h| {
        emit!(h, "{L:Item} '{:name/%s}':\n", "gum").unwrap();
    });
    let expected = "\
<div class=\"line\">
  <div class=\"label\">Item</div>
  <div class=\"text\"> '</div>
  <div class=\"data\" data-tag=\"name\">gum</div>
  <div class=\"text\">':</div>
</div>
";
    assert_eq!(out, expected);
}
