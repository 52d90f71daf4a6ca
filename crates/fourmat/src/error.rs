/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("format substitution failed: {0}")]
    Format(#[from] fourmat_printf::FormatError),

    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[error("unrecognized style: {0}")]
pub struct ParseStyleError(pub String);

pub type Result<T> = std::result::Result<T, EmitError>;
