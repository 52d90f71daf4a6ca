/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Declarative macros for emit calls.

/// Builds an argument array for [`emit`](crate::Handle::emit) from any
/// values convertible into [`Arg`](crate::Arg).
///
/// # Examples
/// ```
/// use fourmat::{args, Arg};
///
/// let list = args!["gum", 1412u32];
/// assert_eq!(list[0], Arg::Str("gum".to_string()));
/// assert_eq!(list[1], Arg::Uint(1412));
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let list: [$crate::Arg; 0] = [];
        list
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::Arg::from($value)),+]
    };
}

/// Emits through a handle with inline arguments.
///
/// # Examples
/// ```
/// use fourmat::{emit, Flags, Handle, Style};
///
/// let mut h = Handle::to_memory(Style::Text, Flags::NONE);
/// emit!(h, "{L:Item} '{:name/%s}':\n", "gum").unwrap();
/// assert_eq!(h.memory().unwrap(), b"Item 'gum':\n");
/// ```
#[macro_export]
macro_rules! emit {
    ($handle:expr, $fmt:expr $(, $value:expr)* $(,)?) => {
        $handle.emit($fmt, &$crate::args![$($value),*])
    };
}
