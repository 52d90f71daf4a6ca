/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use fourmat::{Flags, Handle, Style};

/// Runs `build` against a memory-sink handle and returns the captured
/// output as a string.
pub fn capture(style: Style, flags: Flags, build: impl FnOnce(&mut Handle)) -> String {
    let mut handle = Handle::to_memory(style, flags);
    build(&mut handle);
    String::from_utf8(handle.memory().unwrap().to_vec()).unwrap()
}

/// Drops every whitespace byte; used to compare pretty output against
/// its compact form.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
