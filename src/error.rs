// SPDX-License-Identifier: GPL-3.0-or-later

/*
 *  src/error.rs - Error types for the pdgen pipeline.
 *  Copyright (C) 2026  Forest Crossman <cyrozap@gmail.com>
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

/// Every way a pdgen run can fail. None of these are recovered from.
#[derive(Debug, Error)]
pub enum Error {
    /// A file or directory could not be read, created, or resolved.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The scratch directory could not be created.
    #[error("failed to create scratch directory: {0}")]
    Scratch(#[source] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row had the wrong number of fields.
    #[error("{kind} record {record}: expected {expected} fields, found {found}")]
    FieldCount {
        kind: &'static str,
        record: u64,
        expected: usize,
        found: usize,
    },

    #[error("placement record {record}: invalid {field} coordinate {value:?}: {source}")]
    InvalidCoordinate {
        record: u64,
        field: &'static str,
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("placement record {record}: invalid rotation {value:?}: {source}")]
    InvalidRotation {
        record: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A placement references a part code the database does not contain.
    #[error("part not found: {refdes} uses part code {part_code:?}, which is not in the part database")]
    PartNotFound { refdes: String, part_code: String },

    #[error("failed to run {command}: {source}")]
    ToolSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("{command} failed with {status}")]
    ToolFailed { command: String, status: ExitStatus },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attributes a read failure inside the CSV reader to the file at `path`.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            Self::Csv(e) if e.is_io_error() => match e.into_kind() {
                csv::ErrorKind::Io(source) => Self::io(path, source),
                _ => unreachable!("is_io_error implies ErrorKind::Io"),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
