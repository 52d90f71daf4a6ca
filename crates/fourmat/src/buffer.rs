/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Growable output buffers.
//!
//! Each handle keeps two of these: one accumulates the composite format
//! template built during an emit call, the other stages rendered bytes
//! on their way to the sink. Both are reset between uses without giving
//! capacity back.

use std::fmt;

const INITIAL_CAPACITY: usize = 8 * 1024;

#[derive(Debug)]
pub(crate) struct OutBuf {
    buf: String,
}

impl OutBuf {
    pub fn new() -> Self {
        OutBuf {
            buf: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Moves the insertion point back to the start, keeping capacity.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Appends a run of `n` spaces.
    pub fn push_indent(&mut self, n: usize) {
        for _ in 0..n {
            self.buf.push(' ');
        }
    }

    /// Appends literal text destined for the format template, doubling
    /// `%` so the substitution pass cannot mistake it for a conversion.
    pub fn push_protected(&mut self, s: &str) {
        for c in s.chars() {
            if c == '%' {
                self.buf.push_str("%%");
            } else {
                self.buf.push(c);
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl fmt::Write for OutBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_capacity() {
        let mut buf = OutBuf::new();
        buf.push_str("hello");
        let cap = buf.buf.capacity();
        buf.reset();
        assert_eq!(buf.as_str(), "");
        assert_eq!(buf.buf.capacity(), cap);
    }

    #[test]
    fn test_push_protected_doubles_percent() {
        let mut buf = OutBuf::new();
        buf.push_protected("50% of 10%");
        assert_eq!(buf.as_str(), "50%% of 10%%");
    }

    #[test]
    fn test_push_indent() {
        let mut buf = OutBuf::new();
        buf.push_indent(4);
        buf.push_str("x");
        assert_eq!(buf.as_str(), "    x");
    }
}
