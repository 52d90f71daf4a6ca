/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field metadata for HTML info attributes.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for one field name. With the `INFO` flag set,
/// HTML rendering looks the emitted field up here and attaches
/// `data-type` and `data-help` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Info {
    pub fn new(name: &str, r#type: &str, help: &str) -> Self {
        Info {
            name: name.to_string(),
            r#type: Some(r#type.to_string()),
            help: Some(help.to_string()),
        }
    }
}

/// Binary search over a name-sorted table.
pub(crate) fn find<'a>(table: &'a [Info], name: &str) -> Option<&'a Info> {
    table
        .binary_search_by(|entry| entry.name.as_str().cmp(name))
        .ok()
        .map(|at| &table[at])
}
